//! API route handlers
//!
//! Each submodule owns the handlers for one resource.

pub mod health;
pub mod index;
pub mod observations;
pub mod stations;
pub mod temperature;
