//! Matchmaking library pairing SaaS businesses with vendor partner programs.
//!
//! The `matchmaker` module carries the domain: the static program catalog,
//! the weighted match scorer, the assessment wizard flow, result shaping,
//! and the ROI estimator, plus the HTTP router the API service mounts.
//! `config`, `telemetry`, and `error` hold the shared service chassis.

pub mod config;
pub mod error;
pub mod matchmaker;
pub mod telemetry;
