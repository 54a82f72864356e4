//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, ratings, errors, events)
//! - `dimension` - Weighted competency dimensions and key normalization
//! - `scoring` - Weighted-average calculator
//! - `assessment` - Self-assessment aggregate, status and resubmission window
//! - `feedback` - Versioned manager feedback aggregate
//! - `analysis` - Reconciliation of self-assessment with manager feedback
//! - `user` - User snapshots and event identity context

pub mod analysis;
pub mod assessment;
pub mod dimension;
pub mod feedback;
pub mod foundation;
pub mod scoring;
pub mod user;
