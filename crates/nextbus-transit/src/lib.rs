//! Client for the 511.org transit API.
//!
//! Covers the two upstream lookups the kiosk needs (stop monitoring and the
//! per-agency stop list) plus the arrival normalization applied to the
//! monitoring payload.

pub mod agencies;
pub mod arrivals;
pub mod client;
pub mod error;

pub use agencies::{agencies, Agency};
pub use arrivals::{parse_arrivals, Arrival, MAX_ARRIVALS};
pub use client::{strip_bom, StopInfo, TransitClient};
pub use error::TransitError;
