#[path = "trait.rs"]
mod trait_;
pub mod memory;

pub use memory::InMemoryAccountRepository;
pub use trait_::AccountRepository;

#[cfg(test)]
#[path = "tests/memory_tests.rs"]
mod tests;
