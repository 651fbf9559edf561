//! CLI definition using clap

use crate::types::VehicleType;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "tehran-rules")]
#[command(version)]
#[command(about = "Truck transportation rules and regulations for Tehran")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table)
    #[arg(long, short = 'f', global = true, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all transportation rules
    List,

    /// Show a single rule in full detail
    Show {
        /// Rule ID (e.g., "TEH-001")
        rule_id: String,
    },

    /// List rules applicable to a vehicle type
    ByVehicle {
        /// Vehicle type (e.g., heavy-truck, tanker)
        vehicle_type: VehicleType,
    },

    /// List rules applicable to an area
    ByArea {
        /// Area name, matched exactly (e.g., "Central Tehran")
        area: String,
    },

    /// Export all rules as JSON
    Export {
        /// Output file path (stdout if omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}
