//! # pricing_core - Glazing Solution Pricing Engine
//!
//! `pricing_core` prices configurable architectural glazing solutions: Waltz
//! door/partition assemblies, flat glass panels and standalone accessory
//! bundles. Given one configuration snapshot it returns the final price and
//! an itemized breakdown. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take a configuration and return a price
//! - **Total**: Every numeric configuration prices; nothing is rejected
//! - **JSON-First**: All request and result types implement Serialize/Deserialize
//! - **Explicit modes**: "not set" sentinels become enums before pricing
//!
//! ## Quick Start
//!
//! ```rust
//! use pricing_core::{compute_price, Configuration};
//!
//! let config: Configuration = serde_json::from_str(r#"{
//!     "category": "waltz",
//!     "orientation": "DFD",
//!     "doorCost": 1000,
//!     "fixedPartitionCost": 500
//! }"#).unwrap();
//!
//! let result = compute_price(&config);
//! assert_eq!(result.final_solution_price, 2500.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Entry points and the Waltz, Glass and accessory strategies
//! - [`request`] - Configuration records and the category-tagged request
//! - [`result`] - Final price and breakdown
//! - [`validation`] - Advisory warnings for suspicious input
//! - [`settings`] - Price-list constants (descope rate, area conversion)
//! - [`rounding`] - The rounding rules the strategies rely on
//! - [`units`] - Millimetre and square-foot wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod request;
pub mod result;
pub mod rounding;
pub mod settings;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    compute_accessory_only_price, compute_accessory_only_price_async, compute_price, compute_price_with, price,
    price_with,
};
pub use errors::{PricingError, PricingResult};
pub use request::{AccessoryOnlyConfiguration, Category, ChargeBy, Configuration, PricingRequest};
pub use result::{CalculationResult, PriceBreakdown};
pub use settings::PricingSettings;
pub use validation::PricingWarning;
