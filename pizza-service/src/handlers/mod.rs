//! HTTP handlers for the pizza service.

pub mod analyze;
pub mod health;
