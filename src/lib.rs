#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal consultation-booking client.
//!
//! A nine-field booking form rendered in the terminal; submitting
//! delivers the request through the EmailJS transactional-email API.
//! The form value store and submission state machine live in
//! [`model`], delivery in [`delivery`], and the host UI in [`tui`].

pub mod delivery;
pub mod model;
pub mod tui;
