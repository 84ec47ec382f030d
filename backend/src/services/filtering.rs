//! Site and payload predicates over launch records.

use crate::error::{DashboardError, DashboardResult};
use crate::models::{LaunchRecord, PayloadRange, Site, SiteSelection};

/// Check a site selection against the site set known at load time.
///
/// ALL is always valid. An unknown site is an error; there is no fallback to ALL.
pub fn validate_selection(sites: &[Site], selection: &SiteSelection) -> DashboardResult<()> {
    match selection.site() {
        Some(site) if !sites.contains(site) => Err(DashboardError::unknown_site(site.as_str())),
        _ => Ok(()),
    }
}

/// Records matching `(selection == ALL || site == selection) && low <= payload <= high`.
///
/// Both range ends are inclusive. The result keeps the input order and may be
/// empty. `sites` is the load-time site set used to validate the selection.
pub fn filter_records<'a>(
    records: &'a [LaunchRecord],
    sites: &[Site],
    selection: &SiteSelection,
    range: &PayloadRange,
) -> DashboardResult<Vec<&'a LaunchRecord>> {
    validate_selection(sites, selection)?;
    range.validate()?;

    Ok(records
        .iter()
        .filter(|r| selection.matches(&r.site) && range.contains(r.payload_mass))
        .collect())
}
