//! Money Match: matches visitors to government subsidy programs.
//!
//! The crate splits into a read-only [`catalog`] of subsidy records, blog
//! posts, and news items, and a [`matching`] module holding the facet
//! configuration, the quiz flow, and the keyword-scoring engine that
//! ranks catalog entries for a visitor.

pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
