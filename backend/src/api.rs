//! Public API surface.
//!
//! Consolidates the types a UI host exchanges with the engine. Everything here
//! derives Serialize/Deserialize so hosts can pass snapshots across a bridge.

pub use crate::dataset::{DatasetView, PayloadBounds};
pub use crate::error::{DashboardError, DashboardResult, ErrorContext};
pub use crate::models::{
    LaunchRecord, Outcome, PayloadRange, SelectorState, Site, SiteSelection, ALL_SITES,
};
pub use crate::routes::breakdown::{BreakdownChart, BreakdownResult, BreakdownSlice};
pub use crate::routes::layout::{DashboardLayout, DropdownOption, PayloadSlider, SiteDropdown};
pub use crate::routes::scatter::{ScatterChart, ScatterPoint, ScatterResult};
pub use crate::routes::DashboardViews;
pub use crate::services::{QueryCoordinator, QueryOutput, SiteAggregation, SiteTally};
