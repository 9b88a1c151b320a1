//! # Unit Types
//!
//! Lightweight wrappers for the two measurement systems the pricing engine
//! mixes: panel dimensions are measured in millimetres, while every area rate
//! on the price list is quoted per square foot.
//!
//! Request records keep plain `f64` fields so their JSON stays flat numbers;
//! these wrappers are used at the point where an area is derived.
//!
//! ## Example
//!
//! ```rust
//! use pricing_core::units::{Millimeters, SqMm, SQFT_PER_SQMM};
//!
//! let area = Millimeters(1000.0) * Millimeters(1000.0);
//! assert_eq!(area, SqMm(1_000_000.0));
//!
//! let sqft = area.to_sqft_with(SQFT_PER_SQMM);
//! assert!((sqft.0 - 10.76391042).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Square feet per square millimetre.
pub const SQFT_PER_SQMM: f64 = 0.00001076391042;

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl Mul for Millimeters {
    type Output = SqMm;
    fn mul(self, rhs: Self) -> SqMm {
        SqMm(self.0 * rhs.0)
    }
}

impl SqMm {
    /// Convert using an explicit square-feet-per-square-millimetre factor.
    ///
    /// The factor multiplies the already-formed area, so `w * h` is rounded
    /// once before conversion.
    pub fn to_sqft_with(self, sqft_per_sqmm: f64) -> SqFt {
        SqFt(sqft_per_sqmm * self.0)
    }
}

impl SqFt {
    /// The larger of two areas. A NaN on either side yields the other side.
    pub fn max(self, other: SqFt) -> SqFt {
        SqFt(self.0.max(other.0))
    }
}

impl Add for SqFt {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        SqFt(self.0 + rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_metre_in_square_feet() {
        let sqft = (Millimeters(1000.0) * Millimeters(1000.0)).to_sqft_with(SQFT_PER_SQMM);
        assert!((sqft.0 - 10.76391042).abs() < 1e-9);
    }

    #[test]
    fn test_custom_conversion_factor() {
        let sqft = SqMm(2.0).to_sqft_with(0.5);
        assert_eq!(sqft, SqFt(1.0));
    }

    #[test]
    fn test_max_prefers_larger() {
        assert_eq!(SqFt(4.0).max(SqFt(6.5)), SqFt(6.5));
        assert_eq!(SqFt(-1.0).max(SqFt(0.0)), SqFt(0.0));
    }

    #[test]
    fn test_areas_sum() {
        let total = [SqFt(10.0), SqFt(2.5), SqFt(0.25)].into_iter().fold(SqFt(0.0), |acc, a| acc + a);
        assert_eq!(total, SqFt(12.75));
    }

    #[test]
    fn test_serialization() {
        let sqft = SqFt(12.5);
        let json = serde_json::to_string(&sqft).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: SqFt = serde_json::from_str(&json).unwrap();
        assert_eq!(sqft, roundtrip);
    }
}
