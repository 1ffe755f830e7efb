//! Brew Calculator Library
//!
//! Derived brewing metrics (batch mass, gravity, IBU, ABV) for beer recipes.

pub mod brewing;
pub mod build_info;
pub mod mcp;
pub mod models;
pub mod tools;
