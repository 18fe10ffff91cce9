//! CharForge Engine library.
//!
//! This crate contains everything around the pure rules in `charforge-domain`:
//! data sources, the creation workflow and the `charforge` command line.
//!
//! ## Structure
//!
//! - `use_cases/` - Creation workflow, stored character sheets, shop
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `stores/` - In-memory storage for offline runs
//! - `config` - Environment configuration
//! - `cli` - Command parsing and dispatch
//! - `app` - Application composition

pub mod app;
pub mod cli;
pub mod config;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
