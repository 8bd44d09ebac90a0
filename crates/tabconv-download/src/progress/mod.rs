//! Progress tracking and throttling.
//!
//! This module handles rate-limiting for download progress callbacks.

mod throttle;

pub use throttle::ProgressThrottle;
