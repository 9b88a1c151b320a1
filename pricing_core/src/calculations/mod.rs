//! # Pricing Calculations
//!
//! One module per pricing strategy. Each strategy follows the pattern:
//!
//! - an input record from [`crate::request`]
//! - `calculate(input, ..) -> CalculationResult` - pure, infallible
//!
//! The entry points in this module pick the strategy:
//!
//! - [`compute_price`] - a [`Configuration`], dispatched on its `category`
//! - [`price`] - a [`PricingRequest`], dispatched on its variant
//! - [`compute_accessory_only_price`] - an accessory bundle, final price only
//!
//! A configuration with `locationDescope` set is never priced by a strategy:
//! it always costs the flat descope rate.
//!
//! ## Available Strategies
//!
//! - [`standard`] - Waltz door/partition assemblies
//! - [`glass`] - flat glass panels
//! - [`accessory`] - standalone accessory bundles

pub mod accessory;
pub mod glass;
pub mod standard;

use tracing::debug_span;

use crate::request::{AccessoryOnlyConfiguration, Category, Configuration, PricingRequest};
use crate::result::{CalculationResult, PriceBreakdown};
use crate::settings::PricingSettings;

/// Price a configuration with the default settings.
///
/// # Example
///
/// ```rust
/// use pricing_core::calculations::compute_price;
/// use pricing_core::request::{Category, Configuration};
///
/// let config = Configuration {
///     category: Category::Glass,
///     location_descope: true,
///     glass_variant_price1: 500.0,
///     ..Default::default()
/// };
///
/// let result = compute_price(&config);
/// assert_eq!(result.final_solution_price, 29500.0);
/// assert_eq!(result.breakdown.total_before_factor, 29500.0);
/// ```
pub fn compute_price(config: &Configuration) -> CalculationResult {
    compute_price_with(config, &PricingSettings::default())
}

/// Price a configuration: descope first, then Glass, everything else as Waltz.
pub fn compute_price_with(config: &Configuration, settings: &PricingSettings) -> CalculationResult {
    if config.location_descope {
        return descoped(settings);
    }

    let _span = debug_span!("compute_price", category = config.category.label()).entered();
    match config.category {
        Category::Glass => glass::calculate(config, settings),
        Category::Waltz | Category::AccessoryOnly => standard::calculate(config, settings),
    }
}

/// Price any request with the default settings.
pub fn price(request: &PricingRequest) -> CalculationResult {
    price_with(request, &PricingSettings::default())
}

/// Price any request. The variant picks the strategy, regardless of the
/// `category` field inside a configuration.
pub fn price_with(request: &PricingRequest, settings: &PricingSettings) -> CalculationResult {
    let _span = debug_span!("price", category = request.category().label()).entered();
    match request {
        PricingRequest::Waltz(config) | PricingRequest::Glass(config) if config.location_descope => {
            descoped(settings)
        }
        PricingRequest::Waltz(config) => standard::calculate(config, settings),
        PricingRequest::Glass(config) => glass::calculate(config, settings),
        PricingRequest::AccessoryOnly(config) => accessory::calculate(config),
    }
}

/// Final price of an accessory bundle.
pub fn compute_accessory_only_price(config: &AccessoryOnlyConfiguration) -> f64 {
    accessory::final_price(config)
}

/// Async form of [`compute_accessory_only_price`]; resolves immediately.
pub async fn compute_accessory_only_price_async(config: &AccessoryOnlyConfiguration) -> f64 {
    accessory::final_price_async(config).await
}

fn descoped(settings: &PricingSettings) -> CalculationResult {
    tracing::debug!(descope_rate = settings.descope_rate, "location descoped");
    CalculationResult {
        final_solution_price: settings.descope_rate,
        total_square_feet: None,
        breakdown: PriceBreakdown::descoped(settings.descope_rate),
    }
}
