//! Pizza classifier service: asks a vision language model whether an image
//! contains pizza and returns a JSON verdict.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
