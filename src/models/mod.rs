//! Data models for the match signup application.
//!
//! Signups are the only persisted records; groups and views are derived per request.

mod signup;
mod views;

pub use signup::*;
pub use views::*;
