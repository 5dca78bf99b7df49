//! worklane - Team workload timeline planner
//!
//! Schedules work items on a working-day calendar with Baden-Württemberg
//! holidays, lays them out on a day/week timeline and reports per-employee
//! workload. A seeded generator provides a reproducible demo dataset.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::WorklaneError;
