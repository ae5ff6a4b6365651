//! adapter-meraki - Meraki Dashboard API adapter
//!
//! Fetches splash page login attempts for a single network with one
//! authenticated GET request. No pagination and no retry.

mod client;

pub use client::MerakiClient;
