//! # Glass Pricing
//!
//! Prices flat glass panels. A single per-square-foot rate is built from the
//! selected glass variant or finish (plus matte when requested), scaled by
//! the glass and secondary factors, rounded to a whole unit, then multiplied
//! by the chargeable area and rounded again.
//!
//! Area comes from the list of glass sizes when there is one. Each entry is
//! charged over at least the minimum area, custom drawings carry the
//! `customFactor` surcharge, and every entry is rounded to two decimal places
//! before it is added to the total.

use tracing::debug;

use crate::request::{Configuration, Drawing, GlassSize};
use crate::result::{CalculationResult, PriceBreakdown};
use crate::rounding::{round2, round_whole};
use crate::settings::PricingSettings;
use crate::units::{Millimeters, SqFt};

/// Area totals for a Glass configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlassArea {
    /// Raw panel area before minimums and surcharges
    pub calculated: SqFt,
    /// Area the price is charged over
    pub chargeable: SqFt,
}

/// Aggregate the chargeable area of a Glass configuration.
pub fn glass_area(config: &Configuration, settings: &PricingSettings) -> GlassArea {
    let min_area = config.min_area();

    if config.glass_sizes.is_empty() {
        let calculated = config.area(settings.sqft_per_sqmm);
        return GlassArea {
            calculated,
            chargeable: min_area.max(calculated),
        };
    }

    config.glass_sizes.iter().fold(
        GlassArea {
            calculated: SqFt(0.0),
            chargeable: SqFt(0.0),
        },
        |totals, size| {
            let (calculated, chargeable) = size_area(size, config, settings);
            GlassArea {
                calculated: totals.calculated + calculated,
                chargeable: totals.chargeable + chargeable,
            }
        },
    )
}

/// Rounded raw and chargeable area of one glass size entry.
fn size_area(size: &GlassSize, config: &Configuration, settings: &PricingSettings) -> (SqFt, SqFt) {
    let surcharge = match size.drawing {
        Drawing::Custom => 1.0 + config.custom_factor / 100.0,
        Drawing::Standard => 1.0,
    };

    let area = (Millimeters(size.height) * Millimeters(size.width)).to_sqft_with(settings.sqft_per_sqmm);
    let chargeable = config.min_area().max(area);

    let calculated = SqFt(round2(area.0 * size.quantity));
    let charged = SqFt(round2(chargeable.0 * size.quantity * surcharge));
    debug!(
        width = size.width,
        height = size.height,
        quantity = size.quantity,
        custom = matches!(size.drawing, Drawing::Custom),
        calculated = calculated.0,
        charged = charged.0,
        "glass size"
    );
    (calculated, charged)
}

/// Treat a zero or NaN factor as "not set".
fn factor_or_one(factor: f64) -> f64 {
    if factor == 0.0 || factor.is_nan() {
        1.0
    } else {
        factor
    }
}

/// Price a Glass configuration.
///
/// # Example
///
/// ```rust
/// use pricing_core::calculations::glass;
/// use pricing_core::request::{Category, Configuration, GlassSize, Drawing};
/// use pricing_core::settings::PricingSettings;
///
/// let config = Configuration {
///     category: Category::Glass,
///     glass_variant_price1: 100.0,
///     glass_sizes: vec![GlassSize { width: 1000.0, height: 1000.0, quantity: 1.0, drawing: Drawing::Standard }],
///     ..Default::default()
/// };
///
/// let result = glass::calculate(&config, &PricingSettings::default());
/// // 10.76 sqft at 100 per sqft
/// assert_eq!(result.final_solution_price, 1076.0);
/// ```
pub fn calculate(config: &Configuration, settings: &PricingSettings) -> CalculationResult {
    let glass_factor = factor_or_one(config.glass_factor);
    let sec_factor = factor_or_one(config.sec_factor);

    let base = config.glass_base();
    let glass_price = base.glass_price();
    let matte_price = base.matte_price();

    let area = glass_area(config, settings);

    let total_before_factor = if config.matte1 {
        glass_price + matte_price
    } else {
        glass_price
    };
    let after_glass_factor = total_before_factor * glass_factor;
    let total_glass_price = after_glass_factor * sec_factor;

    // Per-square-foot rate is rounded before the area multiply, then the
    // product is rounded again.
    let final_solution_price = round_whole(area.chargeable.0 * round_whole(total_glass_price));
    debug!(
        ?base,
        total_before_factor,
        glass_factor,
        sec_factor,
        total_glass_price,
        total_square_feet = area.chargeable.0,
        final_solution_price,
        "glass total"
    );

    CalculationResult {
        final_solution_price,
        total_square_feet: Some(area.chargeable.0),
        breakdown: PriceBreakdown {
            glass_variant_price1: base.variant_price(),
            matte_price1: if config.matte1 { matte_price } else { 0.0 },
            total_before_factor,
            factor: glass_factor,
            sec_factor,
            calculated_square_feet: area.calculated.0,
            min_square_feet: config.min_profile_sq_feet_cost,
            chargeable_square_feet: area.chargeable.0,
            glass_finish_price1: Some(config.glass_finish_price1),
            total_glass_price: Some(total_glass_price),
            glass_factor: Some(glass_factor),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Category, ChargeBy};

    fn size(width: f64, height: f64, quantity: f64, drawing: Drawing) -> GlassSize {
        GlassSize {
            width,
            height,
            quantity,
            drawing,
        }
    }

    fn glass() -> Configuration {
        Configuration {
            category: Category::Glass,
            ..Default::default()
        }
    }

    fn price(config: &Configuration) -> CalculationResult {
        calculate(config, &PricingSettings::default())
    }

    #[test]
    fn test_double_rounding() {
        // 99.6 per sqft rounds to 100 before multiplying 10.4 sqft
        let config = Configuration {
            glass_variant_price1: 99.6,
            charge_by: ChargeBy::SquareFeet,
            square_feet: 10.4,
            ..glass()
        };
        let result = price(&config);
        assert_eq!(result.total_square_feet, Some(10.4));
        assert_eq!(result.final_solution_price, 1040.0);
        // Rounding the product once would give round(1035.84) = 1036
        assert_ne!(result.final_solution_price, round_whole(10.4 * 99.6));
    }

    #[test]
    fn test_variant_wins_over_finish() {
        let config = Configuration {
            glass_variant_price1: 100.0,
            glass_finish_price1: 60.0,
            square_feet: 1.0,
            ..glass()
        };
        let result = price(&config);
        assert_eq!(result.breakdown.glass_variant_price1, 100.0);
        assert_eq!(result.breakdown.glass_finish_price1, Some(60.0));
        assert_eq!(result.breakdown.total_before_factor, 100.0);
        assert_eq!(result.final_solution_price, 100.0);
    }

    #[test]
    fn test_finish_used_without_variant() {
        let config = Configuration {
            glass_finish_price1: 60.0,
            square_feet: 2.0,
            ..glass()
        };
        let result = price(&config);
        assert_eq!(result.breakdown.glass_variant_price1, 0.0);
        assert_eq!(result.breakdown.total_before_factor, 60.0);
        assert_eq!(result.final_solution_price, 120.0);
    }

    #[test]
    fn test_matte_only_when_requested() {
        let mut config = Configuration {
            glass_variant_price1: 100.0,
            matte_price1: 20.0,
            square_feet: 1.0,
            ..glass()
        };
        let without = price(&config);
        assert_eq!(without.breakdown.matte_price1, 0.0);
        assert_eq!(without.breakdown.total_before_factor, 100.0);

        config.matte1 = true;
        let with = price(&config);
        assert_eq!(with.breakdown.matte_price1, 20.0);
        assert_eq!(with.breakdown.total_before_factor, 120.0);
        assert_eq!(with.final_solution_price, 120.0);
    }

    #[test]
    fn test_matte_ignored_without_base_price() {
        let config = Configuration {
            matte_price1: 20.0,
            matte1: true,
            square_feet: 5.0,
            ..glass()
        };
        let result = price(&config);
        assert_eq!(result.breakdown.total_before_factor, 0.0);
        assert_eq!(result.final_solution_price, 0.0);
    }

    #[test]
    fn test_zero_factors_default_to_one() {
        let config = Configuration {
            glass_variant_price1: 50.0,
            glass_factor: 0.0,
            sec_factor: 0.0,
            square_feet: 2.0,
            ..glass()
        };
        let result = price(&config);
        assert_eq!(result.breakdown.glass_factor, Some(1.0));
        assert_eq!(result.breakdown.factor, 1.0);
        assert_eq!(result.breakdown.sec_factor, 1.0);
        assert_eq!(result.final_solution_price, 100.0);
    }

    #[test]
    fn test_factors_scale_rate() {
        let config = Configuration {
            glass_variant_price1: 50.0,
            glass_factor: 1.2,
            sec_factor: 1.5,
            square_feet: 2.0,
            ..glass()
        };
        let result = price(&config);
        let total_glass_price = result.breakdown.total_glass_price.unwrap();
        assert!((total_glass_price - 90.0).abs() < 1e-9);
        assert_eq!(result.final_solution_price, 180.0);
    }

    #[test]
    fn test_sizes_apply_minimum_and_custom_surcharge() {
        let config = Configuration {
            glass_variant_price1: 10.0,
            min_profile_sq_feet_cost: 5.0,
            custom_factor: 20.0,
            glass_sizes: vec![
                // 10.76 sqft each, two of them
                size(1000.0, 1000.0, 2.0, Drawing::Standard),
                // 1.08 sqft, below the 5 sqft minimum, custom +20%
                size(300.0, 333.0, 1.0, Drawing::Custom),
            ],
            // Ignored once sizes are given
            square_feet: 500.0,
            ..glass()
        };
        let result = price(&config);

        // round2(21.5278...) + round2(1.0752...)
        assert!((result.breakdown.calculated_square_feet - (21.53 + 1.08)).abs() < 1e-9);
        // round2(21.5278...) + round2(5 * 1.2)
        let total = result.total_square_feet.unwrap();
        assert!((total - (21.53 + 6.0)).abs() < 1e-9);
        assert_eq!(result.breakdown.chargeable_square_feet, total);
        assert_eq!(result.breakdown.min_square_feet, 5.0);
        assert_eq!(result.final_solution_price, 275.0);
    }

    #[test]
    fn test_each_size_rounded_before_summing() {
        // 0.0107639... sqft per panel; rounding per entry gives 0.01 each
        let config = Configuration {
            glass_sizes: vec![
                size(10.0, 100.0, 1.0, Drawing::Standard),
                size(10.0, 100.0, 1.0, Drawing::Standard),
            ],
            ..glass()
        };
        let area = glass_area(&config, &PricingSettings::default());
        assert!((area.chargeable.0 - 0.02).abs() < 1e-12);
        assert!((area.calculated.0 - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_size_rounding_follows_stored_value() {
        // The 1.115 sqft minimum is stored just below 1.115 and charges 1.11
        let config = Configuration {
            glass_variant_price1: 100.0,
            min_profile_sq_feet_cost: 1.115,
            glass_sizes: vec![size(100.0, 100.0, 1.0, Drawing::Standard)],
            ..glass()
        };
        let result = price(&config);
        assert_eq!(result.total_square_feet, Some(1.11));
        assert_eq!(result.breakdown.calculated_square_feet, 0.11);
        assert_eq!(result.final_solution_price, 111.0);
    }

    #[test]
    fn test_empty_sizes_fall_back_to_single_area() {
        let config = Configuration {
            charge_by: ChargeBy::Dimension,
            width: 1000.0,
            height: 1000.0,
            min_profile_sq_feet_cost: 12.0,
            ..glass()
        };
        let area = glass_area(&config, &PricingSettings::default());
        assert!((area.calculated.0 - 10.76391042).abs() < 1e-9);
        assert_eq!(area.chargeable, SqFt(12.0));
    }

    #[test]
    fn test_waltz_fields_reported_as_zero() {
        let config = Configuration {
            orientation: "DDF".to_string(),
            door_cost: 1000.0,
            lock_price: 300.0,
            profile_cost: 50.0,
            glass_variant_price1: 10.0,
            square_feet: 3.0,
            ..glass()
        };
        let result = price(&config);
        assert_eq!(result.breakdown.hardware_price, 0.0);
        assert_eq!(result.breakdown.lock_price, 0.0);
        assert_eq!(result.breakdown.profile_price, 0.0);
        assert_eq!(result.breakdown.accessories_price, 0.0);
        assert_eq!(result.breakdown.door_count, 0);
        assert_eq!(result.final_solution_price, 30.0);
    }
}
