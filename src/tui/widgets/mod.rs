//! Reusable TUI widgets.

pub mod banner;
pub mod form;

pub use banner::{draw_error_banner, draw_submitting_banner, draw_success_banner};
pub use form::{BookingForm, draw_booking_form};
