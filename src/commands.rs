//! Command handlers

use crate::catalog::TEHRAN_RULES;
use crate::cli::{Cli, Commands, OutputFormat};
use crate::error::{Error, Result};
use crate::output::{output_rule, output_rules};
use crate::types::VehicleType;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List => cmd_list(cli.format),
        Commands::Show { ref rule_id } => cmd_show(rule_id, cli.format),
        Commands::ByVehicle { vehicle_type } => cmd_by_vehicle(vehicle_type, cli.format, cli.verbose),
        Commands::ByArea { ref area } => cmd_by_area(area, cli.format, cli.verbose),
        Commands::Export { ref output } => cmd_export(output.clone()),
    }
}

fn cmd_list(output_format: OutputFormat) -> Result<()> {
    let rules = TEHRAN_RULES.all_rules();
    let refs: Vec<_> = rules.iter().collect();
    output_rules(output_format, &refs)
}

fn cmd_show(rule_id: &str, output_format: OutputFormat) -> Result<()> {
    let rule = TEHRAN_RULES
        .rule_by_id(rule_id)
        .ok_or_else(|| Error::RuleNotFound(rule_id.to_string()))?;
    output_rule(output_format, rule)
}

fn cmd_by_vehicle(vehicle_type: VehicleType, output_format: OutputFormat, verbose: bool) -> Result<()> {
    let rules = TEHRAN_RULES.rules_by_vehicle_type(vehicle_type);
    if verbose {
        eprintln!("{} rule(s) apply to {}", rules.len(), vehicle_type);
    }
    output_rules(output_format, &rules)
}

fn cmd_by_area(area: &str, output_format: OutputFormat, verbose: bool) -> Result<()> {
    let rules = TEHRAN_RULES.rules_by_area(area);
    if verbose {
        eprintln!("{} rule(s) apply to {}", rules.len(), area);
    }
    output_rules(output_format, &rules)
}

pub fn cmd_export(output: Option<PathBuf>) -> Result<()> {
    let rules = TEHRAN_RULES.all_rules();
    match output {
        Some(path) => {
            let file = File::create(&path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, &rules)?;
            println!("Exported {} rules to {}", rules.len(), path.display());
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&rules)?);
        }
    }
    Ok(())
}
