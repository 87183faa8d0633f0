//! The [`Quantity`] unit-tagged scalar.

use crate::error::UnitError;
use std::fmt;

/// A scalar value tagged with the unit it is expressed in.
///
/// The host owns the unit-conversion engine: values handed to a plugin
/// arrive already converted to the unit the attribute was declared with.
/// [`get_value`](Quantity::get_value) therefore performs an identity
/// read — it returns the stored value when the requested unit matches
/// the stored unit and fails loudly otherwise, rather than guessing a
/// conversion the host did not perform.
///
/// # Examples
///
/// ```
/// use alfasim_sdk_core::Quantity;
///
/// let depth = Quantity::new(1500.0, "m");
/// assert_eq!(depth.get_value("m").unwrap(), 1500.0);
/// assert!(depth.get_value("ft").is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Quantity {
    value: f64,
    unit: String,
}

impl Quantity {
    /// Create a quantity from a value and the unit it is expressed in.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// The raw value, in whatever unit this quantity carries.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit the value is expressed in.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Read the value in the given unit.
    ///
    /// Returns [`UnitError::ConversionUnavailable`] when `unit` differs
    /// from the stored unit. Conversion between units is host-owned;
    /// request the unit the attribute was declared with.
    pub fn get_value(&self, unit: &str) -> Result<f64, UnitError> {
        if unit == self.unit {
            Ok(self.value)
        } else {
            Err(UnitError::ConversionUnavailable {
                from: self.unit.clone(),
                to: unit.to_string(),
            })
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn matching_unit_returns_stored_value() {
        let q = Quantity::new(-1.0, "m");
        assert_eq!(q.get_value("m").unwrap(), -1.0);
    }

    #[test]
    fn mismatched_unit_is_an_error() {
        let q = Quantity::new(1.0, "bar");
        let err = q.get_value("Pa").unwrap_err();
        assert_eq!(
            err,
            UnitError::ConversionUnavailable {
                from: "bar".to_string(),
                to: "Pa".to_string(),
            }
        );
    }

    #[test]
    fn display_shows_value_and_unit() {
        let q = Quantity::new(2.0, "K");
        assert_eq!(q.to_string(), "2 K");
    }

    proptest! {
        #[test]
        fn get_value_is_identity_for_declared_unit(value in -1e12f64..1e12) {
            let q = Quantity::new(value, "m");
            prop_assert_eq!(q.get_value("m").unwrap(), value);
        }

        #[test]
        fn get_value_never_converts(value in -1e12f64..1e12) {
            let q = Quantity::new(value, "m");
            prop_assert!(q.get_value("km").is_err());
        }
    }
}
