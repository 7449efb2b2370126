//! Coin amounts in the canonical `amount+denom` textual form.

use core::fmt;
use std::collections::BTreeMap;

use super::errors::Error;

const MIN_DENOM_LENGTH: usize = 3;
const MAX_DENOM_LENGTH: usize = 128;

/// A single token amount: a denomination and a non-negative magnitude.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Parse a comma-separated list of `amount+denom` tokens, merging
/// duplicate denominations and sorting the result by denomination.
///
/// Negative and malformed magnitudes are rejected; the magnitude must be a
/// plain decimal integer with no sign or separator.
pub fn parse_coins_normalized(input: &str) -> Result<Vec<Coin>, Error> {
    if input.trim().is_empty() {
        return Err(Error::empty_coins());
    }

    let mut merged: BTreeMap<String, u128> = BTreeMap::new();

    for token in input.split(',') {
        let coin = parse_coin(token.trim())?;
        let amount = merged.entry(coin.denom.clone()).or_insert(0);
        *amount = amount
            .checked_add(coin.amount)
            .ok_or_else(|| Error::coin_overflow(coin.denom.clone()))?;
    }

    Ok(merged
        .into_iter()
        .map(|(denom, amount)| Coin { denom, amount })
        .collect())
}

/// Parse a single `amount+denom` token, normalizing duplicates.
///
/// Fails if the input names more than one denomination.
pub fn parse_coin_normalized(input: &str) -> Result<Coin, Error> {
    let mut coins = parse_coins_normalized(input)?;
    if coins.len() != 1 {
        return Err(Error::multiple_denoms(input.to_string()));
    }

    // just checked for exactly one element
    Ok(coins.remove(0))
}

fn parse_coin(token: &str) -> Result<Coin, Error> {
    let split = token
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| Error::missing_denom(token.to_string()))?;

    let (amount, denom) = token.split_at(split);

    if amount.is_empty() {
        return Err(Error::invalid_coin_amount(token.to_string()));
    }

    let amount = amount
        .parse::<u128>()
        .map_err(|_| Error::invalid_coin_amount(token.to_string()))?;

    validate_denom(denom)?;

    Ok(Coin {
        denom: denom.to_string(),
        amount,
    })
}

fn validate_denom(denom: &str) -> Result<(), Error> {
    if denom.len() < MIN_DENOM_LENGTH || denom.len() > MAX_DENOM_LENGTH {
        return Err(Error::invalid_denom(denom.to_string()));
    }

    let mut chars = denom.chars();

    if !chars.next().map_or(false, |c| c.is_ascii_lowercase()) {
        return Err(Error::invalid_denom(denom.to_string()));
    }

    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '/') {
        return Err(Error::invalid_denom(denom.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_coin() {
        let coins = parse_coins_normalized("1000000stake").unwrap();
        assert_eq!(coins, vec![Coin::new("stake", 1_000_000)]);
    }

    #[test]
    fn merges_duplicate_denoms_and_sorts() {
        let coins = parse_coins_normalized("5stake,3footoken,7stake").unwrap();
        assert_eq!(
            coins,
            vec![Coin::new("footoken", 3), Coin::new("stake", 12)]
        );
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert!(parse_coins_normalized("").is_err());
        assert!(parse_coins_normalized("stake").is_err());
        assert!(parse_coins_normalized("-5stake").is_err());
        assert!(parse_coins_normalized("1.5stake").is_err());
        assert!(parse_coins_normalized("5").is_err());
        assert!(parse_coins_normalized("5ST").is_err());
    }

    #[test]
    fn single_coin_rejects_multiple_denoms() {
        assert!(parse_coin_normalized("1000000stake").is_ok());
        assert!(parse_coin_normalized("5stake,3footoken").is_err());

        // duplicates of one denom normalize to a single coin
        let coin = parse_coin_normalized("5stake,7stake").unwrap();
        assert_eq!(coin, Coin::new("stake", 12));
    }
}
