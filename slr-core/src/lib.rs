//! Core types for SpaceX launch records.
//!
//! A launch record is one row of the launch dataset: the site it flew from,
//! its payload mass, whether it succeeded, and the booster version category.
//! The dataset is static and loaded once, so everything here is plain data
//! plus the parsing that gets it out of CSV.

pub mod error;
pub mod launch;
pub mod outcome;
pub mod payload;
pub mod site;

pub use error::{LaunchError, Result};
pub use launch::{LaunchRecord, ParsedLaunches};
pub use outcome::Outcome;
pub use payload::{PayloadBounds, PayloadRange};
pub use site::SiteToken;

/// Embedded launch dataset shipped with the dashboard.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/spacex_launch_dash.csv");
