//! Fixed catalog of truck transportation rules for Tehran

use crate::types::{MaxDimensions, TimeRestriction, TransportationRule, VehicleType};
use std::sync::LazyLock;

/// Area sentinel meaning "applies city-wide". Only this exact element
/// matches every area query; region-qualified variants such as
/// "All Tehran Bridges" do not.
pub const ALL_TEHRAN: &str = "All Tehran";

/// Shared ready-made catalog. Read-only after construction, so it is
/// safe to share across threads without locking.
pub static TEHRAN_RULES: LazyLock<RuleCatalog> = LazyLock::new(RuleCatalog::new);

/// Container for all truck transportation rules in Tehran
pub struct RuleCatalog {
    rules: Vec<TransportationRule>,
}

impl RuleCatalog {
    /// Build the catalog with the fixed rule set (TEH-001 through TEH-010)
    pub fn new() -> Self {
        Self { rules: load_rules() }
    }

    /// Get a copy of all rules, insertion order preserved
    pub fn all_rules(&self) -> Vec<TransportationRule> {
        self.rules.clone()
    }

    /// Get a specific rule by its ID (exact, case-sensitive match)
    pub fn rule_by_id(&self, rule_id: &str) -> Option<&TransportationRule> {
        self.rules.iter().find(|r| r.rule_id == rule_id)
    }

    /// Get all rules applicable to a specific vehicle type
    pub fn rules_by_vehicle_type(&self, vehicle_type: VehicleType) -> Vec<&TransportationRule> {
        self.rules
            .iter()
            .filter(|r| r.vehicle_types.contains(&vehicle_type))
            .collect()
    }

    /// Get all rules applicable to a specific area. A rule matches if its
    /// area list contains `area` verbatim or the "All Tehran" sentinel.
    pub fn rules_by_area(&self, area: &str) -> Vec<&TransportationRule> {
        self.rules
            .iter()
            .filter(|r| {
                r.areas.iter().any(|a| a == area) || r.areas.iter().any(|a| a == ALL_TEHRAN)
            })
            .collect()
    }

    /// Get total rule count
    pub fn count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn load_rules() -> Vec<TransportationRule> {
    vec![
        // Zone restrictions
        TransportationRule {
            rule_id: "TEH-001".to_string(),
            title: "Restricted Zones in Central Tehran".to_string(),
            description: "Heavy trucks are prohibited from entering central Tehran zones during peak hours (7 AM - 9 PM)".to_string(),
            vehicle_types: vec![VehicleType::HeavyTruck, VehicleType::SemiTrailer],
            time_restriction: TimeRestriction::DaytimeOnly,
            areas: vec![
                "Central Tehran".to_string(),
                "Downtown".to_string(),
                "Valiasr Square".to_string(),
                "Enghelab Square".to_string(),
            ],
            max_weight: None,
            max_dimensions: None,
            required_permits: vec!["Special Entry Permit".to_string()],
            exceptions: vec![],
        },
        // Weight restrictions
        TransportationRule {
            rule_id: "TEH-002".to_string(),
            title: "Weight Limit on City Bridges".to_string(),
            description: "Maximum weight limit of 20 tons for trucks on city bridges and overpasses".to_string(),
            vehicle_types: vec![VehicleType::HeavyTruck, VehicleType::SemiTrailer],
            time_restriction: TimeRestriction::NoRestriction,
            areas: vec!["All Tehran Bridges".to_string(), "Overpasses".to_string()],
            max_weight: Some(20.0),
            max_dimensions: None,
            required_permits: vec!["Bridge Crossing Permit".to_string()],
            exceptions: vec![],
        },
        // Nighttime restrictions
        TransportationRule {
            rule_id: "TEH-003".to_string(),
            title: "Nighttime Truck Movement".to_string(),
            description: "Heavy trucks allowed in residential areas only between 10 PM and 6 AM".to_string(),
            vehicle_types: vec![VehicleType::HeavyTruck, VehicleType::SemiTrailer],
            time_restriction: TimeRestriction::NighttimeOnly,
            areas: vec![
                "Residential Zones".to_string(),
                "Residential Complexes".to_string(),
            ],
            max_weight: None,
            max_dimensions: None,
            required_permits: vec![],
            exceptions: vec![
                "Emergency vehicles".to_string(),
                "Municipal services".to_string(),
            ],
        },
        // Dimension restrictions
        TransportationRule {
            rule_id: "TEH-004".to_string(),
            title: "Maximum Vehicle Dimensions".to_string(),
            description: "Maximum dimensions for trucks: Length 12m, Width 2.5m, Height 4.5m".to_string(),
            vehicle_types: vec![VehicleType::HeavyTruck, VehicleType::SemiTrailer],
            time_restriction: TimeRestriction::NoRestriction,
            areas: vec![ALL_TEHRAN.to_string()],
            max_weight: None,
            max_dimensions: Some(MaxDimensions {
                length: 12.0,
                width: 2.5,
                height: 4.5,
            }),
            required_permits: vec![],
            exceptions: vec![],
        },
        // Environmental restrictions
        TransportationRule {
            rule_id: "TEH-005".to_string(),
            title: "Environmental Zone Restrictions".to_string(),
            description: "Trucks older than 10 years are restricted from entering low-emission zones".to_string(),
            vehicle_types: vec![
                VehicleType::LightTruck,
                VehicleType::MediumTruck,
                VehicleType::HeavyTruck,
            ],
            time_restriction: TimeRestriction::NoRestriction,
            areas: vec![
                "Low-Emission Zones".to_string(),
                "Environmental Zones".to_string(),
            ],
            max_weight: None,
            max_dimensions: None,
            required_permits: vec![
                "Environmental Permit".to_string(),
                "Emission Certificate".to_string(),
            ],
            exceptions: vec![],
        },
        // Highway restrictions
        TransportationRule {
            rule_id: "TEH-006".to_string(),
            title: "Highway Access".to_string(),
            description: "Heavy trucks must use designated lanes on highways and are restricted from left lanes".to_string(),
            vehicle_types: vec![VehicleType::HeavyTruck, VehicleType::SemiTrailer],
            time_restriction: TimeRestriction::NoRestriction,
            areas: vec![
                "Tehran-Karaj Highway".to_string(),
                "Tehran-Qom Highway".to_string(),
                "Tehran-Saveh Highway".to_string(),
            ],
            max_weight: None,
            max_dimensions: None,
            required_permits: vec![],
            exceptions: vec!["Overtaking situations".to_string()],
        },
        // Weekend restrictions
        TransportationRule {
            rule_id: "TEH-007".to_string(),
            title: "Weekend Truck Ban".to_string(),
            description: "Heavy trucks are banned from entering Tehran on Fridays (weekend)".to_string(),
            vehicle_types: vec![VehicleType::HeavyTruck, VehicleType::SemiTrailer],
            time_restriction: TimeRestriction::WeekendsOnly,
            areas: vec!["All Tehran Entry Points".to_string()],
            max_weight: None,
            max_dimensions: None,
            required_permits: vec![],
            exceptions: vec![
                "Essential goods".to_string(),
                "Emergency services".to_string(),
                "With special permit".to_string(),
            ],
        },
        // Tanker restrictions
        TransportationRule {
            rule_id: "TEH-008".to_string(),
            title: "Tanker Truck Regulations".to_string(),
            description: "Tanker trucks carrying hazardous materials require special permits and escort vehicles".to_string(),
            vehicle_types: vec![VehicleType::Tanker],
            time_restriction: TimeRestriction::DaytimeOnly,
            areas: vec![ALL_TEHRAN.to_string()],
            max_weight: Some(25.0),
            max_dimensions: None,
            required_permits: vec![
                "Hazardous Materials Permit".to_string(),
                "Escort Vehicle Authorization".to_string(),
            ],
            exceptions: vec![],
        },
        // Refrigerated truck rules
        TransportationRule {
            rule_id: "TEH-009".to_string(),
            title: "Refrigerated Truck Access".to_string(),
            description: "Refrigerated trucks carrying perishable goods have extended access hours (5 AM - 11 PM)".to_string(),
            vehicle_types: vec![VehicleType::Refrigerated],
            time_restriction: TimeRestriction::DaytimeOnly,
            areas: vec![
                "Markets".to_string(),
                "Distribution Centers".to_string(),
                "Food Processing Areas".to_string(),
            ],
            max_weight: None,
            max_dimensions: None,
            required_permits: vec!["Food Transport Permit".to_string()],
            exceptions: vec![],
        },
        // Construction vehicle rules
        TransportationRule {
            rule_id: "TEH-010".to_string(),
            title: "Construction Vehicle Regulations".to_string(),
            description: "Construction trucks are restricted to construction zones and require site-specific permits".to_string(),
            vehicle_types: vec![VehicleType::HeavyTruck, VehicleType::MediumTruck],
            time_restriction: TimeRestriction::DaytimeOnly,
            areas: vec![
                "Construction Sites".to_string(),
                "Designated Construction Routes".to_string(),
            ],
            max_weight: None,
            max_dimensions: None,
            required_permits: vec![
                "Construction Site Permit".to_string(),
                "Route Permit".to_string(),
            ],
            exceptions: vec![],
        },
    ]
}
