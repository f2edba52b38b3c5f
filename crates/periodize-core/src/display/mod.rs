//! Display formatting and report types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and report types that
//! combine several values. Everything renders as markdown for the CLI's
//! terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (workouts, recs)│───▶│ Reports         │───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers ([`Schedule`], [`Exercises`])
//! - [`results`]: Reports ([`PhaseReport`], [`LoadReport`])
//! - [`datetime`]: Date/time formatting ([`LocalDateTime`])
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{Exercises, Schedule};
pub use datetime::LocalDateTime;
pub use results::{LoadReport, PhaseReport};
