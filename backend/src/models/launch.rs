//! Launch record model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Launch site identifier, e.g. `CCAFS LC-40`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Site(String);

impl Site {
    pub fn new(name: impl Into<String>) -> Self {
        Site(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Site {
    fn from(name: &str) -> Self {
        Site::new(name)
    }
}

impl From<String> for Site {
    fn from(name: String) -> Self {
        Site(name)
    }
}

/// Mission outcome.
///
/// The source data encodes this as the `class` column: `1` for a successful
/// landing, `0` for a failure. Any other code is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Decode a `class` value.
    pub fn from_class(code: i64) -> Option<Self> {
        match code {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// Encode back to the `class` value used on the scatter y axis.
    pub fn class(self) -> i64 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl TryFrom<i64> for Outcome {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Outcome::from_class(code)
            .ok_or_else(|| format!("Unknown outcome class {} (expected 0 or 1)", code))
    }
}

impl From<Outcome> for i64 {
    fn from(outcome: Outcome) -> Self {
        outcome.class()
    }
}

/// One row of the launch table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<u32>,
    pub site: Site,
    pub payload_mass: qtty::Kilograms,
    pub booster_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booster_category: Option<String>,
    pub outcome: Outcome,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<Site>,
        payload_kg: f64,
        booster_version: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            flight_number: None,
            site: site.into(),
            payload_mass: qtty::Kilograms::new(payload_kg),
            booster_version: booster_version.into(),
            booster_category: None,
            outcome,
        }
    }

    pub fn with_flight_number(mut self, flight_number: u32) -> Self {
        self.flight_number = Some(flight_number);
        self
    }

    pub fn with_booster_category(mut self, category: impl Into<String>) -> Self {
        self.booster_category = Some(category.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::from_class(-1), None);
    }

    #[test]
    fn test_outcome_serde_uses_class_codes() {
        let json = serde_json::to_string(&Outcome::Success).unwrap();
        assert_eq!(json, "1");

        let parsed: Outcome = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, Outcome::Failure);

        assert!(serde_json::from_str::<Outcome>("3").is_err());
    }

    #[test]
    fn test_launch_record_builders() {
        let record = LaunchRecord::new("KSC LC-39A", 5300.0, "F9 FT B1031.1", Outcome::Success)
            .with_flight_number(27)
            .with_booster_category("FT");

        assert_eq!(record.site.as_str(), "KSC LC-39A");
        assert_eq!(record.payload_mass.value(), 5300.0);
        assert_eq!(record.flight_number, Some(27));
        assert_eq!(record.booster_category.as_deref(), Some("FT"));
        assert!(record.is_success());
    }

    #[test]
    fn test_launch_record_json_omits_missing_optionals() {
        let record = LaunchRecord::new("VAFB SLC-4E", 500.0, "F9 v1.1", Outcome::Failure);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["site"], "VAFB SLC-4E");
        assert_eq!(json["payload_mass"], 500.0);
        assert_eq!(json["outcome"], 0);
        assert!(json.get("flight_number").is_none());
        assert!(json.get("booster_category").is_none());
    }

    #[test]
    fn test_site_display() {
        let site = Site::from("CCAFS SLC-40");
        assert_eq!(format!("{}", site), "CCAFS SLC-40");
    }
}
