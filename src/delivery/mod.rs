//! Delivery of booking requests through an external email service.
//!
//! The seam is [`DeliveryChannel`]: one async `send` per submission
//! attempt, no retries, no local persistence. [`EmailJsChannel`] is
//! the production implementation; tests substitute doubles.

mod channel;
mod emailjs;
mod error;
mod payload;

pub use channel::{DeliveryChannel, Receipt};
pub use emailjs::{EMAILJS_SEND_URL, EmailJsChannel, EmailJsConfig};
pub use error::{ConfigError, DeliveryError};
pub use payload::{FormPayload, RECIPIENT_NAME};
