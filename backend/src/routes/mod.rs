//! View-specific data types.
//!
//! Each module holds what one dashboard element consumes: the breakdown
//! (proportion) chart, the payload scatter chart, and the control layout.

pub mod breakdown;
pub mod layout;
pub mod scatter;

use serde::{Deserialize, Serialize};

use crate::dataset::ViewSettings;
use crate::models::SelectorState;
use crate::services::QueryOutput;
use breakdown::BreakdownChart;
use scatter::ScatterChart;

/// Both chart descriptors for one selector state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardViews {
    pub breakdown: BreakdownChart,
    pub scatter: ScatterChart,
}

impl DashboardViews {
    pub fn build(output: &QueryOutput, state: &SelectorState, view: &ViewSettings) -> Self {
        Self {
            breakdown: BreakdownChart::from(&output.breakdown),
            scatter: ScatterChart::new(
                &output.scatter,
                &state.selected_site,
                state.payload_range,
                view.marker_size,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_constants() {
        assert_eq!(super::breakdown::SUCCESS_LABEL, "Success");
        assert_eq!(super::breakdown::FAILURES_LABEL, "Failures");
        assert_eq!(super::layout::SITE_DROPDOWN_ID, "site-dropdown");
        assert_eq!(super::layout::PAYLOAD_SLIDER_ID, "payload-slider");
        assert_eq!(super::scatter::X_FIELD, "payload_mass");
    }
}
