//! Core domain models and business logic for flyer templates and sessions

pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
pub mod forms;
pub mod hotspot;
pub mod models;
#[cfg(feature = "ssr")]
pub mod platform;
#[cfg(test)]
mod tests;

pub use hotspot::*;
