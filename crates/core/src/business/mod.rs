//! Business registration.

pub mod error;
pub mod service;
pub mod types;

pub use error::BusinessError;
pub use service::BusinessService;
pub use types::{Business, RegisterBusinessInput};
