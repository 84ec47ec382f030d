//! # Launch Dash
//!
//! Reactive query and aggregation engine behind the launch records dashboard.
//!
//! The dashboard exposes two controls (a launch-site selector and a payload range
//! slider) and two views (a success breakdown and a payload/outcome scatter). This
//! crate owns everything between the loaded table and the chart inputs: every
//! selector change is answered by one pure, synchronous recomputation over the
//! in-memory dataset.
//!
//! ## Architecture
//!
//! - [`models`]: launch records and selector state
//! - [`dataset`]: loading, validation and the process-wide read-only dataset handle
//! - [`services`]: aggregation, filtering and the query coordinator
//! - [`routes`]: per-view result types, chart descriptors and the control layout
//! - [`error`]: the crate error type
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use launch_dash::dataset::{DashboardConfig, DatasetFactory};
//! use launch_dash::models::{PayloadRange, SelectorState};
//! use launch_dash::services::QueryCoordinator;
//!
//! # fn example() -> launch_dash::error::DashboardResult<()> {
//! let config = DashboardConfig::default();
//! let dataset = Arc::new(DatasetFactory::from_config(&config)?);
//! let coordinator = QueryCoordinator::new(dataset);
//!
//! let state = SelectorState::new("ALL", PayloadRange::new(0.0, 10_000.0));
//! let output = coordinator.compute(&state)?;
//! println!("{} scatter points", output.scatter.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod dataset;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
