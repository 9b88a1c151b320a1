//! # Glazing Pricing CLI
//!
//! Terminal front end for the pricing engine. Prices request files, prints
//! editable request templates and runs a prompt-driven Waltz demo.
//!
//! ```text
//! pricing_cli price request.json
//! pricing_cli --json price request.json
//! pricing_cli template glass > glass.json
//! pricing_cli demo
//! ```

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use pricing_core::request::{Accessory, Drawing, GlassSize};
use pricing_core::validation::{check, check_strict};
use pricing_core::{
    price_with, AccessoryOnlyConfiguration, CalculationResult, Category, ChargeBy, Configuration, PricingError,
    PricingRequest, PricingResult, PricingSettings, PricingWarning,
};

#[derive(Parser)]
#[command(name = "pricing_cli")]
#[command(about = "Glazing solution price calculator")]
struct Cmd {
    /// JSON file overriding the price-list settings
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Print only the JSON result
    #[arg(long, global = true)]
    json: bool,

    /// Refuse requests that raise warnings
    #[arg(long, global = true)]
    strict: bool,

    /// Log every intermediate price
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Price a request file (tagged request or flat form configuration)
    Price { request: PathBuf },
    /// Print an example request to edit
    Template {
        #[arg(value_enum)]
        category: TemplateCategory,
    },
    /// Prompt for a Waltz configuration and price it
    Demo,
}

#[derive(Clone, Copy, ValueEnum)]
enum TemplateCategory {
    Waltz,
    Glass,
    Accessory,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_logging(cmd.verbose);

    let settings = match &cmd.settings {
        Some(path) => load_settings(path)?,
        None => PricingSettings::default(),
    };

    match cmd.action {
        Action::Price { ref request } => {
            let request = load_request(request)?;
            run(&request, &settings, &cmd)
        }
        Action::Template { category } => {
            println!("{}", serde_json::to_string_pretty(&template(category))?);
            Ok(())
        }
        Action::Demo => {
            let request = PricingRequest::Waltz(prompt_waltz());
            run(&request, &settings, &cmd)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(request: &PricingRequest, settings: &PricingSettings, cmd: &Cmd) -> Result<()> {
    if cmd.strict {
        check_strict(request, settings)?;
    }
    let warnings = check(request, settings);
    let result = price_with(request, settings);
    tracing::info!(
        category = request.category().label(),
        final_solution_price = result.final_solution_price,
        warnings = warnings.len(),
        "priced"
    );

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(request, &result, &warnings);
    }
    Ok(())
}

fn read_file(path: &Path) -> PricingResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| PricingError::file_error("read", path.display().to_string(), e.to_string()))
}

fn load_request(path: &Path) -> PricingResult<PricingRequest> {
    PricingRequest::from_json(&read_file(path)?)
}

fn load_settings(path: &Path) -> PricingResult<PricingSettings> {
    Ok(serde_json::from_str(&read_file(path)?)?)
}

fn template(category: TemplateCategory) -> PricingRequest {
    match category {
        TemplateCategory::Waltz => PricingRequest::Waltz(Configuration {
            orientation: "DFD".to_string(),
            door_cost: 1000.0,
            fixed_partition_cost: 500.0,
            charge_by: ChargeBy::Dimension,
            width: 2400.0,
            height: 2100.0,
            min_profile_sq_feet_cost: 40.0,
            profile_cost: 25.0,
            lock_price: 450.0,
            handle_price: 120.0,
            accessories: vec![Accessory {
                acc_variant_price: 95.0,
                quantity: 2.0,
            }],
            ..Configuration::new(Category::Waltz)
        }),
        TemplateCategory::Glass => PricingRequest::Glass(Configuration {
            glass_variant_price1: 85.0,
            min_profile_sq_feet_cost: 5.0,
            custom_factor: 15.0,
            glass_sizes: vec![
                GlassSize {
                    width: 900.0,
                    height: 2100.0,
                    quantity: 2.0,
                    drawing: Drawing::Standard,
                },
                GlassSize {
                    width: 600.0,
                    height: 600.0,
                    quantity: 1.0,
                    drawing: Drawing::Custom,
                },
            ],
            ..Configuration::new(Category::Glass)
        }),
        TemplateCategory::Accessory => PricingRequest::AccessoryOnly(AccessoryOnlyConfiguration {
            accessory_factor: 1.1,
            glass_price: 200.0,
            secondary_factor: "1".to_string(),
            quantity: 3.0,
        }),
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn prompt_text(prompt: &str, default: &str) -> String {
    prompt_line(prompt)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_waltz() -> Configuration {
    println!("Glazing Pricing CLI - Waltz Demo");
    println!("================================");
    println!();

    let orientation = prompt_text("Orientation (D = door, F = fixed) [DFD]: ", "DFD");
    let width = prompt_f64("Width (mm) [2400]: ", 2400.0);
    let height = prompt_f64("Height (mm) [2100]: ", 2100.0);
    let door_cost = prompt_f64("Door cost [1000]: ", 1000.0);
    let fixed_partition_cost = prompt_f64("Fixed partition cost [500]: ", 500.0);
    let profile_cost = prompt_f64("Profile cost per sqft [25]: ", 25.0);
    let factor = prompt_f64("Factor [1.0]: ", 1.0);
    println!();

    Configuration {
        orientation,
        charge_by: ChargeBy::Dimension,
        width,
        height,
        door_cost,
        fixed_partition_cost,
        profile_cost,
        factor,
        ..Configuration::new(Category::Waltz)
    }
}

fn print_report(request: &PricingRequest, result: &CalculationResult, warnings: &[PricingWarning]) {
    let breakdown = &result.breakdown;

    println!("═══════════════════════════════════════");
    println!("  {} PRICE BREAKDOWN", request.category().label().to_uppercase());
    println!("═══════════════════════════════════════");
    println!();

    if let PricingRequest::Waltz(config) = request {
        if !config.location_descope {
            println!("Orientation: {} ({} doors, {} fixed)", config.orientation, breakdown.door_count, breakdown.partition_count);
        }
    }
    if breakdown.calculated_square_feet != 0.0 || breakdown.chargeable_square_feet != 0.0 {
        println!(
            "Area: {:.2} sqft calculated, {:.2} sqft chargeable (min {:.2})",
            breakdown.calculated_square_feet, breakdown.chargeable_square_feet, breakdown.min_square_feet
        );
        println!();
    }

    for item in breakdown.line_items() {
        println!("  {:<22} {:>12.2}", item.label, item.amount);
    }
    println!("  {:<22} {:>12.2}", "Total before factor", breakdown.total_before_factor);
    if let Some(glass_factor) = breakdown.glass_factor {
        println!("  {:<22} {:>12}x", "Glass factor", glass_factor);
    } else {
        println!("  {:<22} {:>12}x", "Factor", breakdown.factor);
    }
    println!("  {:<22} {:>12}x", "Secondary factor", breakdown.sec_factor);
    if let Some(total_glass_price) = breakdown.total_glass_price {
        println!("  {:<22} {:>12.2}", "Glass price per sqft", total_glass_price);
    }
    if let Some(quantity) = breakdown.quantity {
        println!("  {:<22} {:>12}", "Quantity", quantity);
    }

    println!();
    println!("═══════════════════════════════════════");
    println!("  FINAL PRICE: {:.0}", result.final_solution_price);
    println!("═══════════════════════════════════════");

    if !warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in warnings {
            println!("  [WARN] {} = {}: {}", warning.field, warning.value, warning.reason);
        }
    }

    println!();
    println!("JSON Output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricing_core::price;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_flat_request() {
        let file = write_temp(r#"{ "category": "waltz", "orientation": "DFD", "doorCost": 1000, "fixedPartitionCost": 500 }"#);
        let request = load_request(file.path()).unwrap();
        assert_eq!(price(&request).final_solution_price, 2500.0);
    }

    #[test]
    fn test_load_flat_accessory_request() {
        let file = write_temp(r#"{ "category": "accessory", "accessoryFactor": 1.1, "glassPrice": 200, "quantity": 3 }"#);
        let request = load_request(file.path()).unwrap();
        assert_eq!(request.category(), Category::AccessoryOnly);
        assert_eq!(price(&request).final_solution_price, 660.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_request(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let file = write_temp("{ not json");
        let err = load_request(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_settings_override() {
        let file = write_temp(r#"{ "descopeRate": 30000 }"#);
        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.descope_rate, 30000.0);

        let request = PricingRequest::Glass(Configuration {
            location_descope: true,
            ..Configuration::new(Category::Glass)
        });
        assert_eq!(price_with(&request, &settings).final_solution_price, 30000.0);
    }

    #[test]
    fn test_templates_roundtrip_and_price_cleanly() {
        for category in [TemplateCategory::Waltz, TemplateCategory::Glass, TemplateCategory::Accessory] {
            let request = template(category);
            assert!(check(&request, &PricingSettings::default()).is_empty());

            let json = serde_json::to_string_pretty(&request).unwrap();
            let parsed = PricingRequest::from_json(&json).unwrap();
            assert_eq!(parsed, request);
            assert!(price(&parsed).final_solution_price > 0.0);
        }
    }
}
