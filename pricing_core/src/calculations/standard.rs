//! # Waltz (Standard) Pricing
//!
//! Prices door / fixed-partition assemblies. Hardware is counted from the
//! orientation pattern, profile is charged over at least the minimum area,
//! and glass, outer glass and design rates are charged over the calculated
//! area. The subtotal is scaled by `factor` then `secFactor` and floored.
//!
//! ## Example
//!
//! ```rust
//! use pricing_core::calculations::standard;
//! use pricing_core::request::Configuration;
//! use pricing_core::settings::PricingSettings;
//!
//! let config = Configuration {
//!     orientation: "DFD".to_string(),
//!     door_cost: 1000.0,
//!     fixed_partition_cost: 500.0,
//!     ..Default::default()
//! };
//!
//! let result = standard::calculate(&config, &PricingSettings::default());
//! assert_eq!(result.breakdown.hardware_price, 2500.0);
//! assert_eq!(result.final_solution_price, 2500.0);
//! ```

use tracing::debug;

use crate::request::Configuration;
use crate::result::{CalculationResult, PriceBreakdown};
use crate::rounding::floor_price;
use crate::settings::PricingSettings;

/// Price a Waltz configuration.
///
/// The location-descope override is handled by the dispatcher, not here.
pub fn calculate(config: &Configuration, settings: &PricingSettings) -> CalculationResult {
    let door_count = config.door_count();
    let partition_count = config.partition_count();
    let doors = door_count as f64;

    let hardware_price = doors * config.door_cost + partition_count as f64 * config.fixed_partition_cost;
    debug!(door_count, partition_count, hardware_price, "hardware");

    let calculated = config.area(settings.sqft_per_sqmm);
    let min_area = config.min_area();
    let chargeable = min_area.max(calculated);
    debug!(
        calculated_square_feet = calculated.0,
        min_square_feet = min_area.0,
        chargeable_square_feet = chargeable.0,
        "area"
    );

    let profile_price = config.profile_cost * chargeable.0;

    // One lock per assembly; the other door hardware is per door.
    let lock_price = config.lock_price;
    let handle_price = config.handle_price * doors;
    let door_closer_price = config.door_closer_cost * doors;
    let door_seal_price = config.door_seal_cost * doors;
    debug!(profile_price, lock_price, handle_price, door_closer_price, door_seal_price, "fittings");

    let coverage_one = config.coverage_one();
    let glass_variant_price1 = coverage_one.price(config.glass_variant_price1, calculated);
    let matte_price1 = coverage_one.price(config.matte_price1, calculated);

    let coverage_two = config.coverage_two();
    let glass_variant_price2 = coverage_two.price(config.glass_variant_price2, calculated);
    let matte_price2 = coverage_two.price(config.matte_price2, calculated);
    debug!(glass_variant_price1, matte_price1, glass_variant_price2, matte_price2, "glass variants");

    let outer_glass_variant_price = config.outer_variant_price * calculated.0;
    let outer_glass_matte_price = config.outer_glass_matte_price * calculated.0;
    let design_price = config.design_pattern_cost * calculated.0;
    let accessories_price = config.accessories_price();
    debug!(outer_glass_variant_price, outer_glass_matte_price, design_price, accessories_price, "surcharges");

    // Summation order is fixed so identical inputs reproduce identical totals.
    let total_before_factor = profile_price
        + hardware_price
        + glass_variant_price1
        + matte_price1
        + glass_variant_price2
        + matte_price2
        + outer_glass_variant_price
        + outer_glass_matte_price
        + design_price
        + handle_price
        + lock_price
        + door_closer_price
        + door_seal_price
        + accessories_price;

    let final_solution_price = floor_price(total_before_factor * config.factor * config.sec_factor);
    debug!(total_before_factor, factor = config.factor, sec_factor = config.sec_factor, final_solution_price, "waltz total");

    CalculationResult {
        final_solution_price,
        total_square_feet: None,
        breakdown: PriceBreakdown {
            door_count,
            partition_count,
            hardware_price,
            profile_price,
            lock_price,
            handle_price,
            door_closer_price,
            door_seal_price,
            glass_variant_price1,
            glass_variant_price2,
            matte_price1,
            matte_price2,
            outer_glass_variant_price,
            outer_glass_matte_price,
            design_price,
            accessories_price,
            total_before_factor,
            factor: config.factor,
            sec_factor: config.sec_factor,
            calculated_square_feet: calculated.0,
            min_square_feet: min_area.0,
            chargeable_square_feet: chargeable.0,
            glass_finish_price1: None,
            total_glass_price: None,
            glass_factor: None,
            quantity: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Accessory, ChargeBy};

    fn waltz() -> Configuration {
        Configuration {
            orientation: "DFD".to_string(),
            door_cost: 1000.0,
            fixed_partition_cost: 500.0,
            charge_by: ChargeBy::SquareFeet,
            square_feet: 40.0,
            min_profile_sq_feet_cost: 50.0,
            profile_cost: 10.0,
            lock_price: 300.0,
            handle_price: 100.0,
            door_closer_cost: 200.0,
            door_seal_cost: 50.0,
            ..Default::default()
        }
    }

    fn price(config: &Configuration) -> CalculationResult {
        calculate(config, &PricingSettings::default())
    }

    #[test]
    fn test_hardware_from_orientation() {
        let result = price(&waltz());
        assert_eq!(result.breakdown.door_count, 2);
        assert_eq!(result.breakdown.partition_count, 1);
        assert_eq!(result.breakdown.hardware_price, 2500.0);
    }

    #[test]
    fn test_unknown_orientation_characters_ignored() {
        let mut config = waltz();
        config.orientation = "D-x-F d".to_string();
        let result = price(&config);
        assert_eq!(result.breakdown.hardware_price, 1500.0);
    }

    #[test]
    fn test_profile_uses_minimum_area() {
        let result = price(&waltz());
        // 40 sqft entered, 50 sqft minimum
        assert_eq!(result.breakdown.calculated_square_feet, 40.0);
        assert_eq!(result.breakdown.min_square_feet, 50.0);
        assert_eq!(result.breakdown.chargeable_square_feet, 50.0);
        assert_eq!(result.breakdown.profile_price, 500.0);
    }

    #[test]
    fn test_dimension_area() {
        let config = Configuration {
            charge_by: ChargeBy::Dimension,
            width: 1000.0,
            height: 1000.0,
            square_feet: 999.0,
            ..Default::default()
        };
        let result = price(&config);
        assert!((result.breakdown.calculated_square_feet - 10.76391042).abs() < 1e-9);
    }

    #[test]
    fn test_lock_is_flat_other_fittings_per_door() {
        let result = price(&waltz());
        assert_eq!(result.breakdown.lock_price, 300.0);
        assert_eq!(result.breakdown.handle_price, 200.0);
        assert_eq!(result.breakdown.door_closer_price, 400.0);
        assert_eq!(result.breakdown.door_seal_price, 100.0);
    }

    #[test]
    fn test_glass_variant_percent_and_flat() {
        let mut config = waltz();
        config.glass_variant_price1 = 20.0;
        config.matte_price1 = 4.0;
        config.gl_one_percent = 50.0;
        config.glass_variant_price2 = 30.0;
        config.matte_price2 = 5.0;
        config.gl_two_percent = 0.0;

        let result = price(&config);
        // Variant 1 covers half of the 40 sqft calculated area
        assert_eq!(result.breakdown.glass_variant_price1, 400.0);
        assert_eq!(result.breakdown.matte_price1, 80.0);
        // Variant 2 percent of 0 prices the full area
        assert_eq!(result.breakdown.glass_variant_price2, 1200.0);
        assert_eq!(result.breakdown.matte_price2, 200.0);
    }

    #[test]
    fn test_area_rates_use_calculated_not_chargeable_area() {
        let mut config = waltz();
        config.outer_variant_price = 10.0;
        config.outer_glass_matte_price = 2.0;
        config.design_pattern_cost = 1.5;

        let result = price(&config);
        assert_eq!(result.breakdown.outer_glass_variant_price, 400.0);
        assert_eq!(result.breakdown.outer_glass_matte_price, 80.0);
        assert_eq!(result.breakdown.design_price, 60.0);
    }

    #[test]
    fn test_accessories_sum() {
        let mut config = waltz();
        config.accessories = vec![
            Accessory { acc_variant_price: 150.0, quantity: 2.0 },
            Accessory { acc_variant_price: 75.0, quantity: 1.0 },
        ];
        let result = price(&config);
        assert_eq!(result.breakdown.accessories_price, 375.0);
    }

    #[test]
    fn test_total_and_factors() {
        let mut config = waltz();
        config.factor = 1.5;
        config.sec_factor = 2.0;

        let result = price(&config);
        // profile 500 + hardware 2500 + lock 300 + handle 200 + closer 400 + seal 100
        assert_eq!(result.breakdown.total_before_factor, 4000.0);
        assert_eq!(result.final_solution_price, 12000.0);
        assert_eq!(result.breakdown.factor, 1.5);
        assert_eq!(result.breakdown.sec_factor, 2.0);
        assert!(result.total_square_feet.is_none());
    }

    #[test]
    fn test_final_price_is_floored() {
        let config = Configuration {
            lock_price: 1234.99,
            ..Default::default()
        };
        let result = price(&config);
        assert_eq!(result.breakdown.total_before_factor, 1234.99);
        assert_eq!(result.final_solution_price, 1234.0);
    }

    #[test]
    fn test_zero_factor_is_applied_as_is() {
        let mut config = waltz();
        config.factor = 0.0;
        assert_eq!(price(&config).final_solution_price, 0.0);
    }

    #[test]
    fn test_negative_inputs_flow_through() {
        let config = Configuration {
            orientation: "D".to_string(),
            door_cost: -100.0,
            ..Default::default()
        };
        let result = price(&config);
        assert_eq!(result.breakdown.hardware_price, -100.0);
        assert_eq!(result.final_solution_price, -100.0);
    }

    #[test]
    fn test_empty_configuration_prices_zero() {
        let result = price(&Configuration::default());
        assert_eq!(result.final_solution_price, 0.0);
        assert_eq!(result.breakdown.accessories_price, 0.0);
    }
}
