//! # solid-demo
//!
//! Composition root for the SOLID tour.
//!
//! ## Responsibilities
//! - Load diagnostics configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Construct concrete adapters and inject them into application services
//! - Run the five demonstrations, one after the other
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

pub mod config;
pub mod demos;
pub mod logging;
