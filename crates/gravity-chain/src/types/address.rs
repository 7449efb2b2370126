//! Account addresses and the Ethereum address format check.
//!
//! Account addresses are 20-byte payloads carried in bech32 strings. The
//! same payload has two textual representations: the account form
//! (`cosmos1...`) and the validator-operator form (`cosmosvaloper1...`).
//! Ethereum addresses are never decoded here, only format-checked, since
//! they live on the bridged chain and follow its rules.

use core::str::FromStr;

use bech32::{FromBase32, ToBase32, Variant};

use super::errors::Error;

/// Bech32 prefix for account addresses.
pub const ACCOUNT_PREFIX: &str = "cosmos";

/// Bech32 prefix for validator operator addresses.
pub const VALIDATOR_PREFIX: &str = "cosmosvaloper";

/// Length in bytes of a raw account address.
pub const ADDRESS_LENGTH: usize = 20;

/// A raw 20-byte account address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; ADDRESS_LENGTH]);

impl AccountId {
    pub fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Decode a bech32 address, enforcing the expected human-readable
    /// prefix, the classic bech32 checksum and the 20-byte payload length.
    pub fn from_bech32(expected_prefix: &str, address: &str) -> Result<Self, Error> {
        let (hrp, data, variant) =
            bech32::decode(address).map_err(|e| Error::bech32_decode(address.to_string(), e))?;

        if hrp != expected_prefix {
            return Err(Error::bech32_prefix(
                address.to_string(),
                expected_prefix.to_string(),
                hrp,
            ));
        }

        if variant != Variant::Bech32 {
            return Err(Error::bech32_variant(address.to_string()));
        }

        let bytes = Vec::<u8>::from_base32(&data)
            .map_err(|e| Error::bech32_data(address.to_string(), e))?;

        let bytes: [u8; ADDRESS_LENGTH] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| Error::address_length(address.to_string(), bytes.len()))?;

        Ok(Self(bytes))
    }

    /// Encode the address under the given bech32 prefix.
    pub fn to_bech32(&self, prefix: &str) -> Result<String, Error> {
        bech32::encode(prefix, self.0.to_base32(), Variant::Bech32).map_err(Error::bech32_encode)
    }

    /// The account (`cosmos1...`) representation.
    pub fn account(&self) -> Result<String, Error> {
        self.to_bech32(ACCOUNT_PREFIX)
    }

    /// The validator operator (`cosmosvaloper1...`) representation.
    pub fn valoper(&self) -> Result<String, Error> {
        self.to_bech32(VALIDATOR_PREFIX)
    }
}

impl FromStr for AccountId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bech32(ACCOUNT_PREFIX, s)
    }
}

/// Check that a string is a well-formed `0x`-prefixed Ethereum address.
///
/// Only the format is checked: prefix, length and hex digit set. The
/// EIP-55 checksum casing is deliberately not enforced, so an address is
/// accepted regardless of the case of its hex digits.
pub fn validate_eth_address(address: &str) -> Result<(), Error> {
    if !address.starts_with("0x") {
        return Err(Error::eth_address(
            address.to_string(),
            "missing '0x' prefix".to_string(),
        ));
    }

    if address.len() != 42 {
        return Err(Error::eth_address(
            address.to_string(),
            format!("address is {} characters long, expected 42", address.len()),
        ));
    }

    if !address[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::eth_address(
            address.to_string(),
            "address contains non-hexadecimal characters".to_string(),
        ));
    }

    Ok(())
}
