//! # Advisory Validation
//!
//! The pricing engine accepts any numbers. This module flags values that are
//! legal but probably not what the user meant, so a caller can show them next
//! to the price. Warnings never change a price.
//!
//! ## Example
//!
//! ```rust
//! use pricing_core::request::Configuration;
//! use pricing_core::settings::PricingSettings;
//! use pricing_core::validation::check_configuration;
//!
//! let config = Configuration {
//!     orientation: "DxF".to_string(),
//!     gl_one_percent: 140.0,
//!     ..Default::default()
//! };
//!
//! let fields: Vec<_> = check_configuration(&config, &PricingSettings::default())
//!     .into_iter()
//!     .map(|w| w.field)
//!     .collect();
//! assert_eq!(fields, vec!["orientation", "glOnePercent"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{PricingError, PricingResult};
use crate::request::{AccessoryOnlyConfiguration, Category, Configuration, PricingRequest};
use crate::settings::PricingSettings;

/// Something in a request that prices fine but looks wrong.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingWarning {
    /// Wire name of the field
    pub field: String,
    pub value: String,
    pub reason: String,
}

impl PricingWarning {
    fn new(field: impl Into<String>, value: impl ToString, reason: impl Into<String>) -> Self {
        PricingWarning {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<PricingWarning> for PricingError {
    fn from(warning: PricingWarning) -> Self {
        PricingError::invalid_input(warning.field, warning.value, warning.reason)
    }
}

/// Warnings for any request, measuring areas with the same settings the
/// request is priced with.
pub fn check(request: &PricingRequest, settings: &PricingSettings) -> Vec<PricingWarning> {
    match request {
        PricingRequest::Waltz(config) => check_configuration(
            &Configuration {
                category: Category::Waltz,
                ..config.clone()
            },
            settings,
        ),
        PricingRequest::Glass(config) => check_configuration(
            &Configuration {
                category: Category::Glass,
                ..config.clone()
            },
            settings,
        ),
        PricingRequest::AccessoryOnly(config) => check_accessory_only(config),
    }
}

/// Reject a request that has any warning.
pub fn check_strict(request: &PricingRequest, settings: &PricingSettings) -> PricingResult<()> {
    match check(request, settings).into_iter().next() {
        Some(warning) => Err(warning.into()),
        None => Ok(()),
    }
}

/// Warnings for a Waltz or Glass configuration.
pub fn check_configuration(config: &Configuration, settings: &PricingSettings) -> Vec<PricingWarning> {
    let mut warnings = Vec::new();
    if config.location_descope {
        return warnings;
    }

    match config.category {
        Category::Glass => check_glass(config, settings, &mut warnings),
        Category::Waltz | Category::AccessoryOnly => check_waltz(config, &mut warnings),
    }

    check_non_negative(
        &mut warnings,
        &[
            ("width", config.width),
            ("height", config.height),
            ("squareFeet", config.square_feet),
            ("minProfileSqFeetCost", config.min_profile_sq_feet_cost),
        ],
    );
    warnings
}

fn check_waltz(config: &Configuration, warnings: &mut Vec<PricingWarning>) {
    let unknown = config.unknown_orientation_chars();
    if !unknown.is_empty() {
        warnings.push(PricingWarning::new(
            "orientation",
            &config.orientation,
            format!(
                "Only 'D' and 'F' are counted; ignoring {:?}",
                unknown.iter().collect::<String>()
            ),
        ));
    }

    for (field, percent) in [("glOnePercent", config.gl_one_percent), ("glTwoPercent", config.gl_two_percent)] {
        if !(0.0..=100.0).contains(&percent) {
            warnings.push(PricingWarning::new(field, percent, "Percent should be between 0 and 100"));
        }
    }

    for (field, factor) in [("factor", config.factor), ("secFactor", config.sec_factor)] {
        if factor == 0.0 {
            warnings.push(PricingWarning::new(field, factor, "A factor of 0 prices the solution at 0"));
        }
    }

    check_non_negative(
        warnings,
        &[
            ("doorCost", config.door_cost),
            ("fixedPartitionCost", config.fixed_partition_cost),
            ("profileCost", config.profile_cost),
            ("lockPrice", config.lock_price),
            ("handlePrice", config.handle_price),
            ("doorCloserCost", config.door_closer_cost),
            ("doorSealCost", config.door_seal_cost),
            ("designPatternCost", config.design_pattern_cost),
            ("glassVariantPrice1", config.glass_variant_price1),
            ("mattePrice1", config.matte_price1),
            ("glassVariantPrice2", config.glass_variant_price2),
            ("mattePrice2", config.matte_price2),
            ("outerVariantPrice", config.outer_variant_price),
            ("outerGlassMattePrice", config.outer_glass_matte_price),
        ],
    );

    for (index, accessory) in config.accessories.iter().enumerate() {
        if accessory.acc_variant_price < 0.0 || accessory.quantity < 0.0 {
            warnings.push(PricingWarning::new(
                format!("accessories[{}]", index),
                accessory.price(),
                "Accessory price and quantity should not be negative",
            ));
        }
    }
}

fn check_glass(config: &Configuration, settings: &PricingSettings, warnings: &mut Vec<PricingWarning>) {
    if config.glass_variant_price1 > 0.0 && config.glass_finish_price1 > 0.0 {
        warnings.push(PricingWarning::new(
            "glassFinishPrice1",
            config.glass_finish_price1,
            "Glass variant price is set, so the finish price is not charged",
        ));
    }

    if config.glass_sizes.is_empty() && config.area(settings.sqft_per_sqmm).0 == 0.0 {
        warnings.push(PricingWarning::new(
            "glassSizes",
            0,
            "No glass sizes and no area; only the minimum area is charged",
        ));
    }

    for (index, size) in config.glass_sizes.iter().enumerate() {
        if size.width <= 0.0 || size.height <= 0.0 || size.quantity <= 0.0 {
            warnings.push(PricingWarning::new(
                format!("glassSizes[{}]", index),
                format!("{} x {} x {}", size.width, size.height, size.quantity),
                "Width, height and quantity should be positive",
            ));
        }
    }

    check_non_negative(
        warnings,
        &[
            ("customFactor", config.custom_factor),
            ("glassFactor", config.glass_factor),
            ("mattePrice1", config.matte_price1),
        ],
    );
}

/// Warnings for an accessory bundle.
pub fn check_accessory_only(config: &AccessoryOnlyConfiguration) -> Vec<PricingWarning> {
    let mut warnings = Vec::new();

    let trimmed = config.secondary_factor.trim();
    if !trimmed.is_empty() && trimmed.parse::<f64>().map_or(true, |value| value.is_nan()) {
        warnings.push(PricingWarning::new(
            "secondaryFactor",
            &config.secondary_factor,
            "Not a number; a factor of 1 is used",
        ));
    }

    if config.accessory_factor == 0.0 {
        warnings.push(PricingWarning::new(
            "accessoryFactor",
            config.accessory_factor,
            "A factor of 0 prices the bundle at 0",
        ));
    }

    check_non_negative(
        &mut warnings,
        &[("glassPrice", config.glass_price), ("quantity", config.quantity)],
    );
    warnings
}

fn check_non_negative(warnings: &mut Vec<PricingWarning>, fields: &[(&str, f64)]) {
    for &(field, value) in fields {
        if value < 0.0 {
            warnings.push(PricingWarning::new(field, value, "Should not be negative"));
        }
    }
}
