//! Money services for Tillpoint.
//!
//! This crate contains pure logic with ZERO I/O, web, or database dependencies.
//! It builds on `tillpoint_shared::MonetaryValue`.
//!
//! # Modules
//!
//! - `currency` - Locale-aware formatting, allocation of totals, GST breakdown

pub mod currency;
