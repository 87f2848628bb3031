//! HTTP handlers for car CRUD.

pub mod cars;
pub use cars::*;
