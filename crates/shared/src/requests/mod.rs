//! Requests accepted by the CLI.

mod build;

pub use build::{BuildPlan, BuildStep};
