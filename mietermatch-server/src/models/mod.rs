//! Record models accepted and returned by the API
//!
//! Inputs are loosely typed: every field is optional and malformed values
//! fall back to null/defaults instead of rejecting the request.

pub mod coerce;
pub mod image;
pub mod landlord;
pub mod tenant;

pub use image::{ImageRef, InlineImage};
pub use landlord::Landlord;
pub use tenant::Tenant;
