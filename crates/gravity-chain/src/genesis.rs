//! Genesis document loading and validation.
//!
//! The genesis file embeds one opaque JSON state blob per application
//! module. Each registered module contributes a [`GenesisValidator`] that
//! knows how to check its own blob; the dispatcher runs them in order and
//! stops at the first failure. On top of that, the gentx pipeline checks
//! that the signing account holds enough unstaked genesis balance to cover
//! its self-delegation.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::bank::BalanceReader;
use crate::error::Error;
use crate::types::address::{AccountId, ACCOUNT_PREFIX};
use crate::types::coin::{self, Coin};

/// The view of a genesis document needed by the gentx pipeline.
#[derive(Clone, Debug, Deserialize)]
pub struct GenesisDocument {
    pub chain_id: String,
    #[serde(default)]
    pub app_state: Value,
}

impl GenesisDocument {
    pub fn read_from(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::genesis_read(path.display().to_string(), e))?;

        serde_json::from_str(&contents)
            .map_err(|e| Error::genesis_parse(path.display().to_string(), e))
    }
}

/// Per-module application state, keyed by module name.
pub type AppState = BTreeMap<String, Value>;

/// Decode the embedded application state into a per-module mapping.
pub fn decode_app_state(doc: &GenesisDocument) -> Result<AppState, Error> {
    let object = doc
        .app_state
        .as_object()
        .ok_or_else(|| Error::genesis_app_state("app_state is not a JSON object".to_string()))?;

    Ok(object
        .iter()
        .map(|(name, state)| (name.clone(), state.clone()))
        .collect())
}

/// A module's own check over its raw genesis state.
pub trait GenesisValidator {
    fn name(&self) -> &'static str;
    fn validate(&self, state: &Value) -> Result<(), Error>;
}

/// The validators of all registered modules, in dispatch order.
pub fn default_validators() -> Vec<Box<dyn GenesisValidator>> {
    vec![
        Box::new(AuthGenesisValidator),
        Box::new(BankGenesisValidator),
        Box::new(StakingGenesisValidator),
        Box::new(GravityGenesisValidator),
    ]
}

/// Run every registered module validator over the application state.
///
/// Propagates the first failure; later modules are not inspected. A
/// registered module with no state entry is a failure.
pub fn validate_genesis_state(
    validators: &[Box<dyn GenesisValidator>],
    app_state: &AppState,
) -> Result<(), Error> {
    for validator in validators {
        let state = app_state
            .get(validator.name())
            .ok_or_else(|| Error::missing_module_state(validator.name().to_string()))?;

        validator.validate(state)?;
        debug!(module = validator.name(), "genesis state validated");
    }

    Ok(())
}

pub struct AuthGenesisValidator;

impl GenesisValidator for AuthGenesisValidator {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn validate(&self, state: &Value) -> Result<(), Error> {
        let genesis: AuthGenesis = decode_module_state(self.name(), state)?;

        for account in &genesis.accounts {
            AccountId::from_bech32(ACCOUNT_PREFIX, &account.address).map_err(|e| {
                Error::genesis_state_invalid(self.name().to_string(), e.to_string())
            })?;
        }

        Ok(())
    }
}

pub struct BankGenesisValidator;

impl GenesisValidator for BankGenesisValidator {
    fn name(&self) -> &'static str {
        "bank"
    }

    fn validate(&self, state: &Value) -> Result<(), Error> {
        let genesis: BankGenesis = decode_module_state(self.name(), state)?;

        let mut seen = BTreeSet::new();
        for balance in &genesis.balances {
            AccountId::from_bech32(ACCOUNT_PREFIX, &balance.address).map_err(|e| {
                Error::genesis_state_invalid(self.name().to_string(), e.to_string())
            })?;

            if !seen.insert(balance.address.as_str()) {
                return Err(Error::genesis_state_invalid(
                    self.name().to_string(),
                    format!("duplicate balance entry for '{}'", balance.address),
                ));
            }

            for raw in &balance.coins {
                raw.to_coin().map_err(|e| {
                    Error::genesis_state_invalid(self.name().to_string(), e.to_string())
                })?;
            }
        }

        Ok(())
    }
}

pub struct StakingGenesisValidator;

impl GenesisValidator for StakingGenesisValidator {
    fn name(&self) -> &'static str {
        "staking"
    }

    fn validate(&self, state: &Value) -> Result<(), Error> {
        let genesis: StakingGenesis = decode_module_state(self.name(), state)?;

        if genesis.params.bond_denom.is_empty() {
            return Err(Error::genesis_state_invalid(
                self.name().to_string(),
                "bond denomination is empty".to_string(),
            ));
        }

        Ok(())
    }
}

pub struct GravityGenesisValidator;

impl GenesisValidator for GravityGenesisValidator {
    fn name(&self) -> &'static str {
        "gravity"
    }

    fn validate(&self, state: &Value) -> Result<(), Error> {
        let genesis: GravityGenesis = decode_module_state(self.name(), state)?;

        if !genesis.params.is_object() {
            return Err(Error::genesis_state_invalid(
                self.name().to_string(),
                "params is not a JSON object".to_string(),
            ));
        }

        Ok(())
    }
}

fn decode_module_state<T: serde::de::DeserializeOwned>(
    module: &str,
    state: &Value,
) -> Result<T, Error> {
    serde_json::from_value(state.clone())
        .map_err(|e| Error::genesis_state_invalid(module.to_string(), e.to_string()))
}

#[derive(Debug, Deserialize)]
struct AuthGenesis {
    #[serde(default)]
    accounts: Vec<AuthAccount>,
}

#[derive(Debug, Deserialize)]
struct AuthAccount {
    address: String,
}

#[derive(Debug, Deserialize)]
struct BankGenesis {
    #[serde(default)]
    balances: Vec<Balance>,
}

#[derive(Debug, Deserialize)]
struct Balance {
    address: String,
    #[serde(default)]
    coins: Vec<RawCoin>,
}

#[derive(Debug, Deserialize)]
struct RawCoin {
    denom: String,
    amount: String,
}

impl RawCoin {
    fn to_coin(&self) -> Result<Coin, crate::types::errors::Error> {
        coin::parse_coin_normalized(&format!("{}{}", self.amount, self.denom))
    }
}

#[derive(Debug, Deserialize)]
struct StakingGenesis {
    params: StakingParams,
}

#[derive(Debug, Deserialize)]
struct StakingParams {
    bond_denom: String,
}

#[derive(Debug, Deserialize)]
struct GravityGenesis {
    params: Value,
}

/// [`BalanceReader`] over the genesis balance set.
pub struct GenesisBalances<'a> {
    app_state: &'a AppState,
}

impl<'a> GenesisBalances<'a> {
    pub fn new(app_state: &'a AppState) -> Self {
        Self { app_state }
    }

    /// The balances recorded for an account, or `None` if the account has
    /// no balance entry at all.
    fn balances_of(&self, account: &str) -> Result<Option<Vec<Coin>>, Error> {
        let state = self
            .app_state
            .get("bank")
            .ok_or_else(|| Error::missing_module_state("bank".to_string()))?;

        let genesis: BankGenesis = decode_module_state("bank", state)?;

        let Some(balance) = genesis.balances.iter().find(|b| b.address == account) else {
            return Ok(None);
        };

        let mut coins = Vec::with_capacity(balance.coins.len());
        for raw in &balance.coins {
            let coin = raw
                .to_coin()
                .map_err(|e| Error::genesis_state_invalid("bank".to_string(), e.to_string()))?;
            coins.push(coin);
        }

        Ok(Some(coins))
    }
}

impl BalanceReader for GenesisBalances<'_> {
    fn all_balances(&self, address: &AccountId) -> Result<Vec<Coin>, Error> {
        let account = address.account().map_err(Error::address_encode)?;

        Ok(self.balances_of(&account)?.unwrap_or_default())
    }
}

/// Check that the signing account exists in the genesis balance set with
/// at least the requested amount for every requested denomination.
///
/// Equality is sufficient; the account only fails the check when a
/// denomination is short or missing, or when the account is absent.
pub fn validate_account_in_genesis(
    app_state: &AppState,
    address: &AccountId,
    required: &[Coin],
) -> Result<(), Error> {
    let account = address.account().map_err(Error::address_encode)?;

    let balances = GenesisBalances::new(app_state)
        .balances_of(&account)?
        .ok_or_else(|| Error::account_not_in_genesis(account.clone()))?;

    for coin in required {
        let available = balances
            .iter()
            .filter(|c| c.denom == coin.denom)
            .map(|c| c.amount)
            .sum::<u128>();

        if available < coin.amount {
            return Err(Error::insufficient_genesis_balance(
                account,
                coin.denom.clone(),
                coin.amount,
                available,
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ErrorDetail;

    const ALICE: &str = "cosmos1ahx7f8wyertuus9r20284ej0asrs085case3kn";

    fn app_state_with_balance(address: &str, amount: u64) -> AppState {
        let state = json!({
            "auth": { "accounts": [ { "address": address } ] },
            "bank": {
                "balances": [
                    { "address": address, "coins": [ { "denom": "stake", "amount": amount.to_string() } ] }
                ]
            },
            "staking": { "params": { "bond_denom": "stake" } },
            "gravity": { "params": {} },
        });

        let doc = GenesisDocument {
            chain_id: "test-chain-1".to_string(),
            app_state: state,
        };

        decode_app_state(&doc).unwrap()
    }

    fn alice() -> AccountId {
        ALICE.parse().unwrap()
    }

    #[test]
    fn module_validation_passes_on_consistent_state() {
        let app_state = app_state_with_balance(ALICE, 2_000_000);
        let validators = default_validators();

        assert!(validate_genesis_state(&validators, &app_state).is_ok());
    }

    #[test]
    fn module_validation_requires_every_registered_module() {
        let mut app_state = app_state_with_balance(ALICE, 2_000_000);
        app_state.remove("gravity");

        let validators = default_validators();
        let err = validate_genesis_state(&validators, &app_state).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::MissingModuleState(_)));
    }

    #[test]
    fn module_validation_rejects_malformed_bank_state() {
        let mut app_state = app_state_with_balance(ALICE, 2_000_000);
        app_state.insert("bank".to_string(), json!({ "balances": "not-a-list" }));

        let validators = default_validators();
        let err = validate_genesis_state(&validators, &app_state).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::GenesisStateInvalid(_)));
    }

    #[test]
    fn module_validation_rejects_duplicate_balances() {
        let mut app_state = app_state_with_balance(ALICE, 2_000_000);
        app_state.insert(
            "bank".to_string(),
            json!({
                "balances": [
                    { "address": ALICE, "coins": [ { "denom": "stake", "amount": "1" } ] },
                    { "address": ALICE, "coins": [ { "denom": "stake", "amount": "2" } ] },
                ]
            }),
        );

        let validators = default_validators();
        assert!(validate_genesis_state(&validators, &app_state).is_err());
    }

    #[test]
    fn exact_balance_is_sufficient() {
        let app_state = app_state_with_balance(ALICE, 1_000_000);
        let required = vec![Coin::new("stake", 1_000_000)];

        assert!(validate_account_in_genesis(&app_state, &alice(), &required).is_ok());
    }

    #[test]
    fn one_unit_short_is_insufficient() {
        let app_state = app_state_with_balance(ALICE, 999_999);
        let required = vec![Coin::new("stake", 1_000_000)];

        let err = validate_account_in_genesis(&app_state, &alice(), &required).unwrap_err();
        assert!(matches!(
            err.detail(),
            ErrorDetail::InsufficientGenesisBalance(_)
        ));
    }

    #[test]
    fn absent_account_fails() {
        let other = AccountId::new([9u8; 20]).account().unwrap();
        let app_state = app_state_with_balance(&other, 2_000_000);
        let required = vec![Coin::new("stake", 1)];

        let err = validate_account_in_genesis(&app_state, &alice(), &required).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::AccountNotInGenesis(_)));
    }

    #[test]
    fn balance_reader_returns_empty_for_unknown_accounts() {
        let app_state = app_state_with_balance(ALICE, 5);
        let reader = GenesisBalances::new(&app_state);

        let known = reader.all_balances(&alice()).unwrap();
        assert_eq!(known, vec![Coin::new("stake", 5)]);

        let unknown = reader.all_balances(&AccountId::new([9u8; 20])).unwrap();
        assert!(unknown.is_empty());
    }
}
