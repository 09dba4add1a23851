pub mod error;

pub use error::{bad_request, handle_domain_error, handle_validation_errors, unauthorized};
