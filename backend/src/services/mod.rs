//! Service layer: the reactive query engine.
//!
//! - [`aggregation`]: per-site launch and success counts
//! - [`filtering`]: site and payload-range predicates
//! - [`query`]: the coordinator that runs both for a selector state

pub mod aggregation;
pub mod filtering;
pub mod query;

pub use aggregation::{aggregate_by_site, tally_for, SiteAggregation, SiteTally};
pub use filtering::{filter_records, validate_selection};
pub use query::{compute, QueryCoordinator, QueryOutput};
