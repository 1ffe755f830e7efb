//! Calculator tools module
//!
//! Collaborator-facing operations returning serializable responses.

pub mod calculator;
pub mod status;
