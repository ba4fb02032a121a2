//! ShambaScore: climate-adaptive credit scoring for smallholder farmers.
//!
//! The crate is built around two pure components. [`scoring::ScoringEngine`]
//! maps a farmer feature record to a credit score, risk category, loan terms,
//! contributing factors, and improvement suggestions. [`advisor`] narrates the
//! same data conversationally for a small demo farmer registry. Everything
//! else (config, telemetry, routers, dataset import) is plumbing around those
//! two components.

pub mod advisor;
pub mod config;
pub mod dataset;
pub mod error;
pub mod messaging;
pub mod scoring;
pub mod telemetry;
