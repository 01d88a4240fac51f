//! Building blocks shared by the analytics.
//!
//! This module contains:
//! - [`filter`] - Selecting the slice of the log an analytic runs over
//! - [`ranking`] - Order-preserving counters and ranked tables

pub mod filter;
pub mod ranking;

pub use filter::{OVERALL, SenderFilter, ViewFilter};
pub use ranking::{Counter, Ranked};
