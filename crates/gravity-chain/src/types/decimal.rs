//! Non-negative fixed-point decimals with 18 fractional digits, the
//! representation used by commission rates.
//!
//! Values are stored as atomic units (`value * 10^18`) in a `u128`, which
//! comfortably covers the `[0, 1]` range commission rates live in and far
//! beyond. `Display` always renders the full 18 fractional digits, the
//! canonical textual form expected on the wire.

use core::fmt;
use core::str::FromStr;

use super::errors::Error;

/// Number of fractional digits carried by a [`Dec`].
pub const DECIMAL_PLACES: u32 = 18;

const DECIMAL_FRACTIONAL: u128 = 10u128.pow(DECIMAL_PLACES);

/// A non-negative fixed-point decimal with 18 fractional digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(u128);

impl Dec {
    pub const ZERO: Dec = Dec(0);
    pub const ONE: Dec = Dec(DECIMAL_FRACTIONAL);

    /// The raw atomic units (`value * 10^18`).
    pub fn atomics(&self) -> u128 {
        self.0
    }
}

impl FromStr for Dec {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| Error::invalid_decimal(input.to_string(), reason.to_string());

        if input.is_empty() {
            return Err(invalid("empty string"));
        }

        if input.starts_with('-') {
            return Err(invalid("negative values are not allowed"));
        }

        let (integer, fraction) = match input.split_once('.') {
            Some((integer, fraction)) => {
                if fraction.is_empty() {
                    return Err(invalid("missing fractional digits after '.'"));
                }
                (integer, fraction)
            }
            None => (input, ""),
        };

        if integer.is_empty() {
            return Err(invalid("missing integer digits before '.'"));
        }

        if fraction.len() > DECIMAL_PLACES as usize {
            return Err(invalid("more than 18 fractional digits"));
        }

        let integer = integer
            .parse::<u128>()
            .map_err(|_| invalid("integer part is not a number"))?;

        let fraction = if fraction.is_empty() {
            0
        } else {
            let digits = fraction
                .parse::<u128>()
                .map_err(|_| invalid("fractional part is not a number"))?;
            digits * 10u128.pow(DECIMAL_PLACES - fraction.len() as u32)
        };

        let atomics = integer
            .checked_mul(DECIMAL_FRACTIONAL)
            .and_then(|n| n.checked_add(fraction))
            .ok_or_else(|| invalid("value out of range"))?;

        Ok(Dec(atomics))
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let integer = self.0 / DECIMAL_FRACTIONAL;
        let fraction = self.0 % DECIMAL_FRACTIONAL;
        write!(f, "{}.{:018}", integer, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_renders_canonical_form() {
        let rate = Dec::from_str("0.07").unwrap();
        assert_eq!(rate.to_string(), "0.070000000000000000");

        let one = Dec::from_str("1").unwrap();
        assert_eq!(one, Dec::ONE);
        assert_eq!(one.to_string(), "1.000000000000000000");

        assert_eq!(Dec::from_str("1.0").unwrap(), Dec::ONE);
        assert_eq!(Dec::from_str("0").unwrap(), Dec::ZERO);
    }

    #[test]
    fn orders_by_value() {
        let low = Dec::from_str("0.05").unwrap();
        let high = Dec::from_str("0.2").unwrap();

        assert!(low < high);
        assert!(high > Dec::ZERO);
        assert!(high < Dec::ONE);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(Dec::from_str("").is_err());
        assert!(Dec::from_str("-0.1").is_err());
        assert!(Dec::from_str(".5").is_err());
        assert!(Dec::from_str("1.").is_err());
        assert!(Dec::from_str("one").is_err());
        assert!(Dec::from_str("0.0000000000000000001").is_err());
    }

    #[test]
    fn round_trips_through_display() {
        for input in ["0.1", "0.2", "0.01", "1", "0.070000000000000000"] {
            let dec = Dec::from_str(input).unwrap();
            let redisplayed = Dec::from_str(&dec.to_string()).unwrap();
            assert_eq!(dec, redisplayed);
        }
    }
}
