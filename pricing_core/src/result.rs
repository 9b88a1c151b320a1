//! # Pricing Results
//!
//! Output records of the pricing engine. A [`CalculationResult`] carries the
//! final price plus a [`PriceBreakdown`] listing every intermediate component,
//! which callers display as-is. The engine never reads a breakdown back.

use serde::{Deserialize, Serialize};

/// Final price and its itemized breakdown.
///
/// ## JSON Example
///
/// ```json
/// {
///   "finalSolutionPrice": 1040.0,
///   "totalSquareFeet": 10.4,
///   "breakdown": { "glassVariantPrice1": 100.0, "totalGlassPrice": 100.0, "...": 0.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub final_solution_price: f64,

    /// Chargeable area; only reported for Glass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_square_feet: Option<f64>,

    pub breakdown: PriceBreakdown,
}

/// Every intermediate price component.
///
/// Components that do not apply to a category are reported as `0`; the
/// Glass-only and accessory-only extras are `None` elsewhere.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub door_count: usize,
    pub partition_count: usize,

    pub hardware_price: f64,
    pub profile_price: f64,
    pub lock_price: f64,
    pub handle_price: f64,
    pub door_closer_price: f64,
    pub door_seal_price: f64,
    pub glass_variant_price1: f64,
    pub glass_variant_price2: f64,
    pub matte_price1: f64,
    pub matte_price2: f64,
    pub outer_glass_variant_price: f64,
    pub outer_glass_matte_price: f64,
    pub design_price: f64,
    pub accessories_price: f64,

    pub total_before_factor: f64,
    pub factor: f64,
    pub sec_factor: f64,

    pub calculated_square_feet: f64,
    pub min_square_feet: f64,
    pub chargeable_square_feet: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub glass_finish_price1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_glass_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glass_factor: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

/// A labelled breakdown component for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineItem {
    pub label: &'static str,
    pub amount: f64,
}

impl PriceBreakdown {
    /// Breakdown for a descoped location: nothing but the flat rate.
    pub fn descoped(rate: f64) -> Self {
        PriceBreakdown {
            total_before_factor: rate,
            factor: 1.0,
            sec_factor: 1.0,
            ..Default::default()
        }
    }

    /// True when this breakdown came from the Glass strategy
    pub fn is_glass(&self) -> bool {
        self.total_glass_price.is_some()
    }

    /// True when this breakdown came from the accessory-only strategy
    pub fn is_accessory_bundle(&self) -> bool {
        self.quantity.is_some()
    }

    /// Non-zero price components in display order.
    pub fn line_items(&self) -> Vec<LineItem> {
        let components: Vec<(&'static str, f64)> = if self.is_accessory_bundle() {
            vec![("Accessory Bundle", self.glass_variant_price1)]
        } else if self.is_glass() {
            vec![
                ("Glass Variant", self.glass_variant_price1),
                ("Glass Finish", self.glass_finish_price1.unwrap_or(0.0)),
                ("Matte", self.matte_price1),
            ]
        } else {
            vec![
                ("Hardware", self.hardware_price),
                ("Profile", self.profile_price),
                ("Lock", self.lock_price),
                ("Handle", self.handle_price),
                ("Door Closer", self.door_closer_price),
                ("Door Seal", self.door_seal_price),
                ("Design", self.design_price),
                ("Accessories", self.accessories_price),
                ("Glass Variant 1", self.glass_variant_price1),
                ("Matte 1", self.matte_price1),
                ("Glass Variant 2", self.glass_variant_price2),
                ("Matte 2", self.matte_price2),
                ("Outer Glass Variant", self.outer_glass_variant_price),
                ("Outer Glass Matte", self.outer_glass_matte_price),
            ]
        };

        components
            .into_iter()
            .filter(|(_, amount)| *amount != 0.0)
            .map(|(label, amount)| LineItem { label, amount })
            .collect()
    }
}
