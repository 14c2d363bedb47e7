//! # solid-domain
//!
//! Pure domain model for the SOLID tour.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and the closed [`ApiError`](error::ApiError) set
//! - Define **Products** and **Invoices** (with a derived total)
//! - Extend built-in numeric types with [`Squared`](numeric::Squared) without touching them
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Printing and persistence are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod numeric;

pub mod invoice;
pub mod product;
