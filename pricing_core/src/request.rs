//! # Pricing Requests
//!
//! Input records consumed by the pricing engine. Field names serialize in
//! camelCase to match the configuration form that produces them, and every
//! field is optional on the wire: missing numbers read as `0`, except the
//! adjustment factors which read as `1`.
//!
//! ## Structure
//!
//! ```text
//! PricingRequest (tagged by "category")
//! ├── Waltz(Configuration)          door/partition assemblies
//! ├── Glass(Configuration)          flat glass panels
//! └── AccessoryOnly(AccessoryOnlyConfiguration)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pricing_core::request::{Configuration, ChargeBy};
//!
//! let config: Configuration = serde_json::from_str(r#"{
//!     "category": "waltz",
//!     "orientation": "DFD",
//!     "doorCost": 1000,
//!     "fixedPartitionCost": 500,
//!     "chargeBy": "dimension",
//!     "width": 2400,
//!     "height": 2100
//! }"#).unwrap();
//!
//! assert_eq!(config.door_count(), 2);
//! assert_eq!(config.partition_count(), 1);
//! assert_eq!(config.charge_by, ChargeBy::Dimension);
//! assert_eq!(config.factor, 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::PricingResult;
use crate::units::{Millimeters, SqFt};

/// Solution category selected on the configuration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    /// Door / fixed-partition assemblies
    #[default]
    #[serde(rename = "waltz")]
    Waltz,
    /// Flat glass panels priced per square foot
    #[serde(rename = "glass")]
    Glass,
    /// Standalone accessory bundles
    #[serde(rename = "accessory")]
    AccessoryOnly,
}

impl Category {
    /// Display name of the category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Waltz => "Waltz",
            Category::Glass => "Glass",
            Category::AccessoryOnly => "Accessory",
        }
    }
}

/// How the chargeable area is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChargeBy {
    /// `squareFeet` is entered directly; width and height are ignored
    #[default]
    #[serde(rename = "sqft")]
    SquareFeet,
    /// Area is derived from width × height in millimetres
    #[serde(rename = "dimension")]
    Dimension,
}

/// Drawing type of a glass panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Drawing {
    #[default]
    Standard,
    /// Custom drawings carry the `customFactor` surcharge
    Custom,
}

/// One accessory line on a Waltz configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Accessory {
    /// Unit price of the selected accessory variant
    pub acc_variant_price: f64,
    pub quantity: f64,
}

impl Accessory {
    /// Line total
    pub fn price(&self) -> f64 {
        self.acc_variant_price * self.quantity
    }
}

/// One glass panel size on a Glass configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassSize {
    /// Width in millimetres
    pub width: f64,
    /// Height in millimetres
    pub height: f64,
    pub quantity: f64,
    pub drawing: Drawing,
}

/// How much of the area a glass variant covers.
///
/// On the wire a coverage percent of `0` (or anything not above zero) means
/// "not given", which prices the variant over the full area rather than at
/// zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coverage {
    /// Flat per-square-foot pricing over the whole area
    FullArea,
    /// Only `percent`% of the area is priced
    Partial { percent: f64 },
}

impl Coverage {
    /// Interpret a raw percent field.
    pub fn from_percent(percent: f64) -> Self {
        if percent > 0.0 {
            Coverage::Partial { percent }
        } else {
            Coverage::FullArea
        }
    }

    /// Price `rate` per square foot over `area` under this coverage.
    pub fn price(self, rate: f64, area: SqFt) -> f64 {
        match self {
            Coverage::FullArea => rate * area.0,
            Coverage::Partial { percent } => rate * area.0 * (percent / 100.0),
        }
    }
}

/// Base per-square-foot price source for a Glass configuration.
///
/// A variant price and a finish price are alternatives. When both are
/// configured the variant wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlassBase {
    Variant { price: f64, matte: f64 },
    Finish { price: f64, matte: f64 },
    Unpriced,
}

impl GlassBase {
    /// Pick the base price source from the raw configuration fields.
    pub fn select(variant_price: f64, finish_price: f64, matte_price: f64) -> Self {
        if variant_price > 0.0 {
            GlassBase::Variant {
                price: variant_price,
                matte: matte_price,
            }
        } else if finish_price > 0.0 {
            GlassBase::Finish {
                price: finish_price,
                matte: matte_price,
            }
        } else {
            GlassBase::Unpriced
        }
    }

    /// Selected variant price, 0 unless the variant is the source
    pub fn variant_price(&self) -> f64 {
        match self {
            GlassBase::Variant { price, .. } => *price,
            _ => 0.0,
        }
    }

    /// Selected finish price, 0 unless the finish is the source
    pub fn finish_price(&self) -> f64 {
        match self {
            GlassBase::Finish { price, .. } => *price,
            _ => 0.0,
        }
    }

    /// Matte surcharge that goes with the selected source
    pub fn matte_price(&self) -> f64 {
        match self {
            GlassBase::Variant { matte, .. } | GlassBase::Finish { matte, .. } => *matte,
            GlassBase::Unpriced => 0.0,
        }
    }

    /// Base glass price. At most one of the two sources contributes.
    pub fn glass_price(&self) -> f64 {
        self.variant_price() + self.finish_price()
    }
}

/// Full configuration record for Waltz and Glass solutions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    pub category: Category,

    /// Location descope overrides every other field
    #[serde(alias = "actionName")]
    pub location_descope: bool,

    /// Door/partition pattern, e.g. "DFD"
    pub orientation: String,

    /// Width in millimetres
    pub width: f64,
    /// Height in millimetres
    pub height: f64,
    pub square_feet: f64,
    pub charge_by: ChargeBy,

    pub door_cost: f64,
    #[serde(alias = "fixedpartitionCost")]
    pub fixed_partition_cost: f64,
    pub profile_cost: f64,
    /// Minimum chargeable area in square feet
    pub min_profile_sq_feet_cost: f64,
    pub lock_price: f64,
    pub handle_price: f64,
    pub door_closer_cost: f64,
    pub door_seal_cost: f64,
    pub design_pattern_cost: f64,

    pub glass_variant_price1: f64,
    pub gl_one_percent: f64,
    pub matte_price1: f64,
    pub glass_variant_price2: f64,
    pub gl_two_percent: f64,
    pub matte_price2: f64,
    pub outer_variant_price: f64,
    pub outer_glass_matte_price: f64,

    pub glass_factor: f64,
    /// Custom-drawing surcharge in percent
    pub custom_factor: f64,
    pub glass_finish_price1: f64,
    pub matte1: bool,
    pub glass_sizes: Vec<GlassSize>,

    pub factor: f64,
    pub sec_factor: f64,

    pub accessories: Vec<Accessory>,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            category: Category::Waltz,
            location_descope: false,
            orientation: String::new(),
            width: 0.0,
            height: 0.0,
            square_feet: 0.0,
            charge_by: ChargeBy::SquareFeet,
            door_cost: 0.0,
            fixed_partition_cost: 0.0,
            profile_cost: 0.0,
            min_profile_sq_feet_cost: 0.0,
            lock_price: 0.0,
            handle_price: 0.0,
            door_closer_cost: 0.0,
            door_seal_cost: 0.0,
            design_pattern_cost: 0.0,
            glass_variant_price1: 0.0,
            gl_one_percent: 0.0,
            matte_price1: 0.0,
            glass_variant_price2: 0.0,
            gl_two_percent: 0.0,
            matte_price2: 0.0,
            outer_variant_price: 0.0,
            outer_glass_matte_price: 0.0,
            glass_factor: 1.0,
            custom_factor: 0.0,
            glass_finish_price1: 0.0,
            matte1: false,
            glass_sizes: Vec::new(),
            factor: 1.0,
            sec_factor: 1.0,
            accessories: Vec::new(),
        }
    }
}

impl Configuration {
    /// Empty configuration of the given category
    pub fn new(category: Category) -> Self {
        Configuration {
            category,
            ..Default::default()
        }
    }

    /// Number of literal `'D'` characters in the orientation
    pub fn door_count(&self) -> usize {
        self.orientation.chars().filter(|&c| c == 'D').count()
    }

    /// Number of literal `'F'` characters in the orientation
    pub fn partition_count(&self) -> usize {
        self.orientation.chars().filter(|&c| c == 'F').count()
    }

    /// Characters in the orientation that are neither `'D'` nor `'F'`
    pub fn unknown_orientation_chars(&self) -> Vec<char> {
        self.orientation.chars().filter(|&c| c != 'D' && c != 'F').collect()
    }

    /// Single-size area: entered square feet, or width × height converted.
    pub fn area(&self, sqft_per_sqmm: f64) -> SqFt {
        match self.charge_by {
            ChargeBy::SquareFeet => SqFt(self.square_feet),
            ChargeBy::Dimension => {
                (Millimeters(self.width) * Millimeters(self.height)).to_sqft_with(sqft_per_sqmm)
            }
        }
    }

    /// Minimum chargeable area
    pub fn min_area(&self) -> SqFt {
        SqFt(self.min_profile_sq_feet_cost)
    }

    /// Coverage mode for glass variant 1
    pub fn coverage_one(&self) -> Coverage {
        Coverage::from_percent(self.gl_one_percent)
    }

    /// Coverage mode for glass variant 2
    pub fn coverage_two(&self) -> Coverage {
        Coverage::from_percent(self.gl_two_percent)
    }

    /// Base price source for the Glass category
    pub fn glass_base(&self) -> GlassBase {
        GlassBase::select(self.glass_variant_price1, self.glass_finish_price1, self.matte_price1)
    }

    /// Sum of every accessory line
    pub fn accessories_price(&self) -> f64 {
        self.accessories.iter().fold(0.0, |total, accessory| total + accessory.price())
    }
}

/// Input for a standalone accessory bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessoryOnlyConfiguration {
    pub accessory_factor: f64,
    /// Unit price of the accessory bundle
    pub glass_price: f64,
    /// Secondary factor as typed; unparseable text counts as `1`
    pub secondary_factor: String,
    pub quantity: f64,
}

impl Default for AccessoryOnlyConfiguration {
    fn default() -> Self {
        AccessoryOnlyConfiguration {
            accessory_factor: 1.0,
            glass_price: 0.0,
            secondary_factor: String::new(),
            quantity: 0.0,
        }
    }
}

impl AccessoryOnlyConfiguration {
    /// Numeric secondary factor, `1` when the text is not a number.
    pub fn secondary_factor_value(&self) -> f64 {
        match self.secondary_factor.trim().parse::<f64>() {
            Ok(value) if !value.is_nan() => value,
            _ => 1.0,
        }
    }
}

/// A pricing request, one variant per category.
///
/// ```rust
/// use pricing_core::request::{Category, Configuration, PricingRequest};
///
/// let request = PricingRequest::from(Configuration::new(Category::Glass));
/// assert_eq!(request.category(), Category::Glass);
///
/// let json = serde_json::to_string(&request).unwrap();
/// assert!(json.starts_with(r#"{"category":"glass","configuration":"#));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", content = "configuration")]
pub enum PricingRequest {
    #[serde(rename = "waltz")]
    Waltz(Configuration),
    #[serde(rename = "glass")]
    Glass(Configuration),
    #[serde(rename = "accessory")]
    AccessoryOnly(AccessoryOnlyConfiguration),
}

impl PricingRequest {
    /// Parse a request document.
    ///
    /// Accepts either the tagged form (`{"category": .., "configuration": {..}}`)
    /// or a flat document as posted by the form, which is routed by its own
    /// `category` field. A flat `accessory` document is read as an accessory
    /// bundle; a missing category means Waltz.
    pub fn from_json(json: &str) -> PricingResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.get("configuration").is_some() {
            return Ok(serde_json::from_value(value)?);
        }

        let category = match value.get("category") {
            Some(category) => Category::deserialize(category)?,
            None => Category::default(),
        };
        match category {
            Category::AccessoryOnly => Ok(serde_json::from_value::<AccessoryOnlyConfiguration>(value)?.into()),
            Category::Waltz | Category::Glass => Ok(serde_json::from_value::<Configuration>(value)?.into()),
        }
    }

    /// Category that selects the pricing strategy
    pub fn category(&self) -> Category {
        match self {
            PricingRequest::Waltz(_) => Category::Waltz,
            PricingRequest::Glass(_) => Category::Glass,
            PricingRequest::AccessoryOnly(_) => Category::AccessoryOnly,
        }
    }
}

impl From<Configuration> for PricingRequest {
    /// Glass configurations price as glass; everything else prices as Waltz.
    fn from(config: Configuration) -> Self {
        match config.category {
            Category::Glass => PricingRequest::Glass(config),
            Category::Waltz | Category::AccessoryOnly => PricingRequest::Waltz(config),
        }
    }
}

impl From<AccessoryOnlyConfiguration> for PricingRequest {
    fn from(config: AccessoryOnlyConfiguration) -> Self {
        PricingRequest::AccessoryOnly(config)
    }
}
