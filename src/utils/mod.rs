//! Utility modules for the Event Timestamp Generator.
//!
//! - [`datetime`] - Reading and pre-filling the date/time input field

pub mod datetime;
