//! Selector state snapshots supplied by the UI on every interaction.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::launch::Site;
use crate::error::{DashboardError, DashboardResult};

/// Dropdown value meaning "no site restriction".
pub const ALL_SITES: &str = "ALL";

/// Current value of the site selector.
///
/// Serialized as a plain string: [`ALL_SITES`] or a site name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    All,
    Site(Site),
}

impl SiteSelection {
    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }

    /// The selected site, or `None` in ALL mode.
    pub fn site(&self) -> Option<&Site> {
        match self {
            SiteSelection::All => None,
            SiteSelection::Site(site) => Some(site),
        }
    }

    /// Site half of the filter predicate.
    pub fn matches(&self, site: &Site) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(Site::new(value))
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(Site::from(value))
        }
    }
}

impl From<Site> for SiteSelection {
    fn from(site: Site) -> Self {
        SiteSelection::Site(site)
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        selection.to_string()
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES),
            SiteSelection::Site(site) => write!(f, "{}", site),
        }
    }
}

/// Inclusive payload mass interval `[low, high]`.
///
/// Constructing a range never fails; [`PayloadRange::validate`] is applied by the
/// filter engine before the range is used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: qtty::Kilograms,
    pub high: qtty::Kilograms,
}

impl PayloadRange {
    pub fn new(low_kg: f64, high_kg: f64) -> Self {
        Self {
            low: qtty::Kilograms::new(low_kg),
            high: qtty::Kilograms::new(high_kg),
        }
    }

    /// Reject inverted ranges and NaN bounds.
    pub fn validate(&self) -> DashboardResult<()> {
        let (low, high) = (self.low.value(), self.high.value());
        // NaN fails the comparison as well
        if low <= high {
            Ok(())
        } else {
            Err(DashboardError::invalid_range(low, high))
        }
    }

    pub fn contains(&self, mass: qtty::Kilograms) -> bool {
        let value = mass.value();
        self.low.value() <= value && value <= self.high.value()
    }

    pub fn width(&self) -> qtty::Kilograms {
        qtty::Kilograms::new(self.high.value() - self.low.value())
    }

    /// Clamp both ends into `[min, max]`, as the slider does with raw input.
    pub fn clamp_to(&self, min: qtty::Kilograms, max: qtty::Kilograms) -> Self {
        let clamp = |v: f64| v.max(min.value()).min(max.value());
        Self::new(clamp(self.low.value()), clamp(self.high.value()))
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        PayloadRange::new(low, high)
    }
}

impl From<(f64, f64)> for PayloadRange {
    fn from((low, high): (f64, f64)) -> Self {
        PayloadRange::new(low, high)
    }
}

/// Immutable snapshot of both controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorState {
    pub selected_site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl SelectorState {
    pub fn new(selected_site: impl Into<SiteSelection>, payload_range: impl Into<PayloadRange>) -> Self {
        Self {
            selected_site: selected_site.into(),
            payload_range: payload_range.into(),
        }
    }

    pub fn all_sites(payload_range: impl Into<PayloadRange>) -> Self {
        Self::new(SiteSelection::All, payload_range)
    }
}
