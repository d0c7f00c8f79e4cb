//! Data models for the contact list application.
//!
//! These models match the client's Contact interface for seamless interoperability.

mod contact;

pub use contact::*;
