//! # Pricing Settings
//!
//! Price-list constants that sit outside any single configuration. The
//! defaults are the production values; callers only override them for
//! what-if pricing or tests.
//!
//! ## Example
//!
//! ```rust
//! use pricing_core::settings::PricingSettings;
//!
//! let settings: PricingSettings = serde_json::from_str(r#"{ "descopeRate": 31000 }"#).unwrap();
//! assert_eq!(settings.descope_rate, 31000.0);
//! assert_eq!(settings.sqft_per_sqmm, PricingSettings::default().sqft_per_sqmm);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::SQFT_PER_SQMM;

/// Flat price charged when the location is descoped (subframe/subtrack base rate).
pub const FIXED_DESCOPE_RATE: f64 = 29500.0;

/// Global pricing settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingSettings {
    /// Price returned for every descoped configuration
    pub descope_rate: f64,

    /// Area conversion applied to millimetre dimensions
    pub sqft_per_sqmm: f64,
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            descope_rate: FIXED_DESCOPE_RATE,
            sqft_per_sqmm: SQFT_PER_SQMM,
        }
    }
}
