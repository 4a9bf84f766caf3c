//! Subscription records, lifecycle resolution, and transitions.

pub mod error;
pub mod lifecycle;
pub mod service;
pub mod types;

pub use error::SubscriptionError;
pub use lifecycle::{LifecycleStatus, SubscriptionState, resolve};
pub use service::SubscriptionService;
pub use types::{PaymentRecord, PaymentStatus, Subscription, SubscriptionStatus};
