//! Core types for Tehran transportation rules

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Truck/vehicle categories covered by the regulations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    /// Up to 3.5 tons
    LightTruck,
    /// 3.5 to 7.5 tons
    MediumTruck,
    /// Above 7.5 tons
    HeavyTruck,
    SemiTrailer,
    Tanker,
    Refrigerated,
}

impl VehicleType {
    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::LightTruck => "light_truck",
            VehicleType::MediumTruck => "medium_truck",
            VehicleType::HeavyTruck => "heavy_truck",
            VehicleType::SemiTrailer => "semi_trailer",
            VehicleType::Tanker => "tanker",
            VehicleType::Refrigerated => "refrigerated",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Time-based restriction category. Descriptive only; nothing in this
/// crate evaluates it against a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRestriction {
    NoRestriction,
    /// 6 AM to 10 PM
    DaytimeOnly,
    /// 10 PM to 6 AM
    NighttimeOnly,
    WeekdaysOnly,
    WeekendsOnly,
}

impl TimeRestriction {
    pub fn label(&self) -> &'static str {
        match self {
            TimeRestriction::NoRestriction => "no_restriction",
            TimeRestriction::DaytimeOnly => "daytime_only",
            TimeRestriction::NighttimeOnly => "nighttime_only",
            TimeRestriction::WeekdaysOnly => "weekdays_only",
            TimeRestriction::WeekendsOnly => "weekends_only",
        }
    }
}

impl std::fmt::Display for TimeRestriction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Maximum vehicle dimensions in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxDimensions {
    /// Overall length in meters
    pub length: f64,
    /// Overall width in meters
    pub width: f64,
    /// Overall height in meters
    pub height: f64,
}

/// A single transportation regulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportationRule {
    /// Unique identifier (e.g., "TEH-001")
    pub rule_id: String,
    /// Short title
    pub title: String,
    /// Full description of the regulation
    pub description: String,
    /// Vehicle types this rule applies to (never empty)
    pub vehicle_types: Vec<VehicleType>,
    /// Time-of-day/weekday restriction category
    pub time_restriction: TimeRestriction,
    /// Areas/zones in Tehran this rule applies to (never empty).
    /// May contain the sentinel "All Tehran" meaning city-wide.
    pub areas: Vec<String>,
    /// Maximum weight in tons, if the rule imposes one
    #[serde(default)]
    pub max_weight: Option<f64>,
    /// Maximum dimensions, if the rule imposes them
    #[serde(default)]
    pub max_dimensions: Option<MaxDimensions>,
    /// Permits required to operate under this rule
    #[serde(default)]
    pub required_permits: Vec<String>,
    /// Exemptions from this rule
    #[serde(default)]
    pub exceptions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_labels() {
        assert_eq!(VehicleType::HeavyTruck.label(), "heavy_truck");
        assert_eq!(VehicleType::SemiTrailer.label(), "semi_trailer");
    }

    #[test]
    fn test_enum_wire_format() {
        let json = serde_json::to_string(&VehicleType::LightTruck).unwrap();
        assert_eq!(json, "\"light_truck\"");
        let json = serde_json::to_string(&TimeRestriction::WeekendsOnly).unwrap();
        assert_eq!(json, "\"weekends_only\"");
    }

    #[test]
    fn test_rule_defaults_on_deserialize() {
        let json = r#"{
            "rule_id": "TEH-900",
            "title": "Test",
            "description": "Test rule",
            "vehicle_types": ["tanker"],
            "time_restriction": "no_restriction",
            "areas": ["Downtown"]
        }"#;
        let rule: TransportationRule = serde_json::from_str(json).unwrap();
        assert!(rule.max_weight.is_none());
        assert!(rule.max_dimensions.is_none());
        assert!(rule.required_permits.is_empty());
        assert!(rule.exceptions.is_empty());
    }
}
