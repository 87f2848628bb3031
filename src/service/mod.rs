//! Request-body parsing and validation.

mod validation;
pub use validation::RequestValidator;
