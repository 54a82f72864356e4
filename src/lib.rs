//! Assessment Service - self-assessment and manager feedback core
//!
//! Scores weighted self-assessments, enforces the 30-day resubmission window,
//! versions manager feedback per (manager, developer) pair, reconciles the
//! two into an analysis payload, and publishes lifecycle events.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
