use log::warn;
use serde::{Deserialize, Serialize};

use crate::dataset::{DashboardConfig, DatasetView};
use crate::models::{PayloadRange, SelectorState, SiteSelection, ALL_SITES};

// =========================================================
// Control layout types
// =========================================================

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const ALL_SITES_LABEL: &str = "All Sites";
pub const DROPDOWN_PLACEHOLDER: &str = "Select a Launch Site here";

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Site selector declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

/// Payload range slider declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadSlider {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: PayloadRange,
}

impl PayloadSlider {
    /// Tick positions from `min` to `max` every `step`.
    pub fn marks(&self) -> Vec<f64> {
        let finite = self.min.is_finite() && self.max.is_finite() && self.step.is_finite();
        if !finite || !(self.step > 0.0) || self.min > self.max {
            return vec![];
        }
        let count = ((self.max - self.min) / self.step).floor() as usize;
        (0..=count)
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }
}

/// Everything the UI needs to declare the two controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub dropdown: SiteDropdown,
    pub slider: PayloadSlider,
}

impl DashboardLayout {
    /// Derive the control layout from the loaded dataset.
    ///
    /// Options list ALL first, then every site in first-occurrence order. The
    /// slider starts at the observed payload bounds.
    pub fn build(dataset: &DatasetView, config: &DashboardConfig) -> Self {
        let options = std::iter::once(DropdownOption {
            label: ALL_SITES_LABEL.to_string(),
            value: ALL_SITES.to_string(),
        })
        .chain(dataset.distinct_sites().iter().map(|site| DropdownOption {
            label: site.to_string(),
            value: site.to_string(),
        }))
        .collect();

        let bounds = dataset.payload_bounds();
        let slider = &config.slider;
        if slider.min > bounds.min.value() || slider.max < bounds.max.value() {
            warn!(
                "Slider range [{}, {}] does not cover observed payloads [{}, {}] kg",
                slider.min,
                slider.max,
                bounds.min.value(),
                bounds.max.value()
            );
        }

        Self {
            title: config.view.title.clone(),
            dropdown: SiteDropdown {
                id: SITE_DROPDOWN_ID.to_string(),
                options,
                value: ALL_SITES.to_string(),
                placeholder: DROPDOWN_PLACEHOLDER.to_string(),
                searchable: true,
            },
            slider: PayloadSlider {
                id: PAYLOAD_SLIDER_ID.to_string(),
                min: slider.min,
                max: slider.max,
                step: slider.step,
                value: bounds.as_range(),
            },
        }
    }

    /// Selector state matching the declared default widget values.
    pub fn default_state(&self) -> SelectorState {
        SelectorState::new(
            SiteSelection::from(self.dropdown.value.as_str()),
            self.slider.value,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchRecord, Outcome};

    fn dataset() -> DatasetView {
        DatasetView::new(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, "F9 v1.0", Outcome::Failure),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, "F9 FT", Outcome::Success),
            LaunchRecord::new("CCAFS LC-40", 525.0, "F9 v1.0", Outcome::Failure),
            LaunchRecord::new("KSC LC-39A", 2490.0, "F9 FT", Outcome::Success),
        ])
        .unwrap()
    }

    #[test]
    fn test_dropdown_options_order() {
        let layout = DashboardLayout::build(&dataset(), &DashboardConfig::default());
        let values: Vec<&str> = layout
            .dropdown
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();

        assert_eq!(values, vec!["ALL", "CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
        assert_eq!(layout.dropdown.options[0].label, "All Sites");
        assert_eq!(layout.dropdown.value, "ALL");
        assert_eq!(layout.dropdown.placeholder, "Select a Launch Site here");
        assert!(layout.dropdown.searchable);
    }

    #[test]
    fn test_slider_defaults() {
        let layout = DashboardLayout::build(&dataset(), &DashboardConfig::default());

        assert_eq!(layout.slider.id, "payload-slider");
        assert_eq!(layout.slider.min, 0.0);
        assert_eq!(layout.slider.max, 10_000.0);
        assert_eq!(layout.slider.step, 1_000.0);
        assert_eq!(layout.slider.value, PayloadRange::new(0.0, 9600.0));
        assert_eq!(layout.slider.marks().len(), 11);
    }

    #[test]
    fn test_layout_title_from_config() {
        let mut config = DashboardConfig::default();
        config.view.title = "Launch Outcomes".to_string();

        let layout = DashboardLayout::build(&dataset(), &config);
        assert_eq!(layout.title, "Launch Outcomes");
    }

    #[test]
    fn test_default_state_matches_widgets() {
        let data = dataset();
        let layout = DashboardLayout::build(&data, &DashboardConfig::default());
        assert_eq!(layout.default_state(), data.default_state());
    }

    #[test]
    fn test_marks_with_uneven_step() {
        let slider = PayloadSlider {
            id: PAYLOAD_SLIDER_ID.to_string(),
            min: 0.0,
            max: 2500.0,
            step: 1000.0,
            value: PayloadRange::new(0.0, 2500.0),
        };
        assert_eq!(slider.marks(), vec![0.0, 1000.0, 2000.0]);
    }

    #[test]
    fn test_marks_with_unbounded_slider() {
        let slider = PayloadSlider {
            id: PAYLOAD_SLIDER_ID.to_string(),
            min: 0.0,
            max: f64::INFINITY,
            step: 1000.0,
            value: PayloadRange::new(0.0, 2500.0),
        };
        assert!(slider.marks().is_empty());
    }
}
