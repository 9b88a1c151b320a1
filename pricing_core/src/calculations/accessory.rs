//! # Accessory-Only Pricing
//!
//! Prices a standalone accessory bundle: unit price × quantity, scaled by the
//! accessory factor and the (text-entered) secondary factor, floored.
//!
//! ## Example
//!
//! ```rust
//! use pricing_core::calculations::accessory;
//! use pricing_core::request::AccessoryOnlyConfiguration;
//!
//! let config = AccessoryOnlyConfiguration {
//!     accessory_factor: 1.1,
//!     glass_price: 200.0,
//!     secondary_factor: "abc".to_string(),
//!     quantity: 3.0,
//! };
//!
//! assert_eq!(accessory::final_price(&config), 660.0);
//! ```

use tracing::debug;

use crate::request::AccessoryOnlyConfiguration;
use crate::result::{CalculationResult, PriceBreakdown};
use crate::rounding::floor_price;

/// Final price of an accessory bundle, without a breakdown.
pub fn final_price(config: &AccessoryOnlyConfiguration) -> f64 {
    calculate(config).final_solution_price
}

/// Price an accessory bundle and wrap it in the common breakdown shape.
pub fn calculate(config: &AccessoryOnlyConfiguration) -> CalculationResult {
    let base = config.glass_price * config.quantity;
    let sec_factor = config.secondary_factor_value();
    let final_solution_price = floor_price(base * config.accessory_factor * sec_factor);
    debug!(
        base,
        accessory_factor = config.accessory_factor,
        secondary_factor = %config.secondary_factor,
        sec_factor,
        final_solution_price,
        "accessory total"
    );

    CalculationResult {
        final_solution_price,
        total_square_feet: None,
        breakdown: PriceBreakdown {
            glass_variant_price1: config.glass_price,
            total_before_factor: base,
            factor: config.accessory_factor,
            sec_factor,
            quantity: Some(config.quantity),
            ..Default::default()
        },
    }
}

/// Async form of [`final_price`].
///
/// Reserved for a remote price lookup; today it completes on the first poll
/// without suspending.
pub async fn final_price_async(config: &AccessoryOnlyConfiguration) -> f64 {
    final_price(config)
}
