//! # commute-router
//!
//! Employee commute routing: builds an initial assignment of employees to
//! vehicle trips with Solomon's I1 insertion heuristic, then improves it
//! with an Adaptive Large Neighborhood Search (ALNS).
//!
//! ## Modules
//!
//! - [`model`] — Domain types (Employee, Vehicle, Stop, Route/Trip, Solution)
//! - [`geo`] — Great-circle distance with a per-stop-id override table
//! - [`time`] — `"HH:MM"` minutes-since-midnight conversions
//! - [`simulate`] — Route feasibility simulator (the shared invariant checker)
//! - [`insertion`] — Solomon c1/c2 insertion oracle
//! - [`constructive`] — I1 sequential insertion constructor
//! - [`alns`] — Destroy/repair operators and the ALNS improvement loop
//! - [`config`] — Tunable parameters for insertion and ALNS
//! - [`io`] — Input document parsing and output document serialization
//! - [`error`] — Boundary-failure error type

pub mod alns;
pub mod config;
pub mod constructive;
pub mod error;
pub mod geo;
pub mod insertion;
pub mod io;
pub mod model;
pub mod simulate;
pub mod time;

pub use error::RouterError;
