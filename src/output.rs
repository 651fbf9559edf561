//! Output formatting module

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::types::TransportationRule;

/// Print a list of rules as a summary table or a JSON array
pub fn output_rules(output_format: OutputFormat, rules: &[&TransportationRule]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(rules)?;
        println!("{}", content);
        return Ok(());
    }

    if rules.is_empty() {
        println!("No matching rules.");
        return Ok(());
    }

    println!("{:<9} {:<42} {:<16}", "ID", "Title", "Time restriction");
    println!("{}", "-".repeat(67));
    for rule in rules {
        println!(
            "{:<9} {:<42} {:<16}",
            rule.rule_id,
            rule.title,
            rule.time_restriction.label()
        );
    }
    println!("\n{} rule(s)", rules.len());
    Ok(())
}

/// Print a single rule in full detail
pub fn output_rule(output_format: OutputFormat, rule: &TransportationRule) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(rule)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\n{} - {}", rule.rule_id, rule.title);
    println!("{}", "=".repeat(rule.rule_id.len() + rule.title.len() + 3));
    println!("{}", rule.description);

    let vehicles: Vec<_> = rule.vehicle_types.iter().map(|v| v.label()).collect();
    println!("\nVehicle types:   {}", vehicles.join(", "));
    println!("Time:            {}", rule.time_restriction.label());
    println!("Areas:           {}", rule.areas.join(", "));

    if let Some(w) = rule.max_weight {
        println!("Max weight:      {:.1} t", w);
    }
    if let Some(d) = rule.max_dimensions {
        println!(
            "Max dimensions:  L {:.1} m / W {:.1} m / H {:.1} m",
            d.length, d.width, d.height
        );
    }
    if !rule.required_permits.is_empty() {
        println!("Permits:         {}", rule.required_permits.join(", "));
    }
    if !rule.exceptions.is_empty() {
        println!("Exceptions:      {}", rule.exceptions.join(", "));
    }
    Ok(())
}
