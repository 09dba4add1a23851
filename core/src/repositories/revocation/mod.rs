#[path = "trait.rs"]
mod trait_;
pub mod memory;

pub use memory::InMemoryRevocationRepository;
pub use trait_::RevocationRepository;

#[cfg(test)]
#[path = "tests/memory_tests.rs"]
mod tests;
