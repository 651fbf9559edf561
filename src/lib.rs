//! Tehran Transportation Rules Library
//!
//! Static catalog of truck transportation rules and regulations for
//! Tehran, Iran, with lookup and filter queries over the fixed rule set.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod types;

pub use catalog::{RuleCatalog, ALL_TEHRAN, TEHRAN_RULES};
pub use types::{MaxDimensions, TimeRestriction, TransportationRule, VehicleType};
