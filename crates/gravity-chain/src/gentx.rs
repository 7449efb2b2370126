//! The genesis transaction pipeline.
//!
//! A single invocation runs the following steps in order, aborting on the
//! first failure: resolve the node identity files (creating them if
//! absent), load and validate the genesis document, resolve the signing
//! key, validate the Ethereum and orchestrator addresses, check the
//! signer's genesis balance, and assemble the two messages: the
//! `create-validator` self-delegation followed by the orchestrator
//! binding. What happens next depends on the key's custody kind: a local
//! key signs and persists the artifact, while an offline or multisig key
//! yields the unsigned document for an external signing flow.
//!
//! Nothing persists from a failed run except the node identity files,
//! whose generation is idempotent.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::HomeLayout;
use crate::error::Error;
use crate::genesis::{self, GenesisDocument};
use crate::keyring::{CustodyKind, KeyEntry, KeyRing};
use crate::node::{self, NodeIdentity};
use crate::tx::{document, encode};
use crate::types::address::{self, AccountId, ACCOUNT_PREFIX};
use crate::types::coin::{self, Coin};
use crate::types::decimal::Dec;

/// Gas limit applied when none is requested.
pub const DEFAULT_GAS_LIMIT: u64 = 200_000;

/// Genesis accounts have account number 0 and sequence 0.
const GENTX_ACCOUNT_NUMBER: u64 = 0;
const GENTX_SEQUENCE: u64 = 0;

/// Default p2p port used in the transaction memo.
const DEFAULT_P2P_PORT: u16 = 26656;

/// Validator metadata going into the `create-validator` message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorParams {
    pub moniker: String,
    pub identity: String,
    pub website: String,
    pub security_contact: String,
    pub details: String,
    pub commission_rate: Dec,
    pub commission_max_rate: Dec,
    pub commission_max_change_rate: Dec,
    pub min_self_delegation: u128,
    /// JSON-encoded consensus public key; overrides the one in
    /// `priv_validator_key.json` when present.
    pub consensus_pubkey: Option<String>,
    /// Overrides the node ID derived from `node_key.json` when present.
    pub node_id: Option<String>,
}

impl Default for ValidatorParams {
    fn default() -> Self {
        Self {
            moniker: "node".to_string(),
            identity: String::new(),
            website: String::new(),
            security_contact: String::new(),
            details: String::new(),
            commission_rate: "0.1".parse().expect("valid default rate"),
            commission_max_rate: "0.2".parse().expect("valid default rate"),
            commission_max_change_rate: "0.01".parse().expect("valid default rate"),
            min_self_delegation: 1,
            consensus_pubkey: None,
            node_id: None,
        }
    }
}

/// Everything a gentx invocation needs, resolved from arguments and flags.
#[derive(Clone, Debug)]
pub struct GenTxOptions {
    pub home: HomeLayout,
    /// Overrides the chain ID recorded in the genesis document.
    pub chain_id: Option<String>,
    pub key_name: String,
    /// Self-delegation amount, e.g. `1000000stake`.
    pub amount: String,
    pub eth_address: String,
    pub orchestrator_address: String,
    /// Advertised p2p address, used in the transaction memo.
    pub ip: String,
    /// Fees to pay along with the transaction; empty for none.
    pub fees: String,
    pub gas_limit: u64,
    /// Explicit output path; derived from the node ID when absent.
    pub output_document: Option<PathBuf>,
    pub validator: ValidatorParams,
}

/// The two ways a pipeline run can succeed.
#[derive(Clone, Debug)]
pub enum GenTxOutcome {
    /// A signed artifact was written to the given path.
    Signed { path: PathBuf },
    /// The key cannot sign locally; the unsigned document is handed back
    /// for an external signing flow. Nothing was written.
    Unsigned { tx: document::TxDocument },
}

/// Run the pipeline end to end.
pub fn run_gentx(keyring: &KeyRing, opts: &GenTxOptions) -> Result<GenTxOutcome, Error> {
    // Resolve the node identity, generating missing files.
    let identity = node::init_node_identity(&opts.home)?;
    let node_id = opts
        .validator
        .node_id
        .clone()
        .unwrap_or_else(|| identity.node_id.clone());
    debug!(node_id = %node_id, "resolved node identity");

    // Load the genesis document and run every module's own validator.
    let genesis_path = opts.home.genesis_file();
    let genesis_doc = GenesisDocument::read_from(&genesis_path)?;
    let app_state = genesis::decode_app_state(&genesis_doc)?;
    genesis::validate_genesis_state(&genesis::default_validators(), &app_state)?;

    // Resolve the signing key.
    let key = keyring
        .get_key(&opts.key_name)
        .map_err(|e| Error::key_not_found(opts.key_name.clone(), e))?;

    // Validate the bridged-chain and orchestrator addresses.
    address::validate_eth_address(&opts.eth_address).map_err(Error::invalid_eth_address)?;
    let orchestrator = AccountId::from_bech32(ACCOUNT_PREFIX, &opts.orchestrator_address)
        .map_err(|e| Error::invalid_orchestrator_address(opts.orchestrator_address.clone(), e))?;

    // The signer must hold the self-delegation in its genesis balance.
    let coins = coin::parse_coins_normalized(&opts.amount)
        .map_err(|e| Error::invalid_amount(opts.amount.clone(), e))?;
    genesis::validate_account_in_genesis(&app_state, &key.address, &coins)?;

    let self_delegation = coin::parse_coin_normalized(&opts.amount)
        .map_err(|e| Error::invalid_amount(opts.amount.clone(), e))?;

    // Assemble the messages; order is fixed, the validator must exist
    // before the orchestrator binding can reference it.
    let consensus_pubkey = resolve_consensus_pubkey(&opts.validator, &identity)?;
    let create_validator =
        build_create_validator_msg(&opts.validator, &key, &self_delegation, &consensus_pubkey)?;
    let set_orchestrator =
        build_set_orchestrator_msg(&key, &orchestrator, &opts.eth_address)?;

    let chain_id = opts
        .chain_id
        .clone()
        .unwrap_or_else(|| genesis_doc.chain_id.clone());

    let unsigned = build_unsigned_tx(opts, &node_id, create_validator, set_orchestrator)?;

    // The custody kind decides the rest exactly once.
    match key.custody {
        CustodyKind::Offline | CustodyKind::Multisig => {
            info!(
                key = %opts.key_name,
                "key has no local key material; emitting an unsigned transaction"
            );
            Ok(GenTxOutcome::Unsigned { tx: unsigned })
        }

        CustodyKind::Local => {
            // Round-trip through the canonical encoding so the bytes being
            // signed match what any decoder reconstructs.
            let rendered = unsigned.encode()?;
            let tx = document::TxDocument::decode(&rendered)?;

            let signed = sign_tx(keyring, &opts.key_name, &key, tx, &chain_id)?;

            let output = match &opts.output_document {
                Some(path) => path.clone(),
                None => make_output_filepath(&opts.home, &node_id)?,
            };

            write_signed_gentx(&output, &signed)?;
            info!(path = %output.display(), "genesis transaction written");

            Ok(GenTxOutcome::Signed { path: output })
        }
    }
}

/// Resolve the consensus public key with override precedence: an explicit,
/// successfully parsed key wins over the one in `priv_validator_key.json`.
fn resolve_consensus_pubkey(
    params: &ValidatorParams,
    identity: &NodeIdentity,
) -> Result<[u8; 32], Error> {
    match &params.consensus_pubkey {
        Some(raw) => parse_consensus_pubkey(raw),
        None => Ok(identity.consensus_pubkey),
    }
}

/// Parse a JSON-encoded `Any` consensus public key, e.g.
/// `{"@type":"/cosmos.crypto.ed25519.PubKey","key":"<base64>"}`.
pub fn parse_consensus_pubkey(raw: &str) -> Result<[u8; 32], Error> {
    #[derive(Deserialize)]
    struct AnyPubKey {
        #[serde(rename = "@type")]
        type_url: String,
        key: String,
    }

    let any: AnyPubKey = serde_json::from_str(raw)
        .map_err(|e| Error::consensus_key_decode(e.to_string()))?;

    if any.type_url != document::ED25519_PUBKEY_TYPE_URL {
        return Err(Error::consensus_key_decode(format!(
            "unsupported key type '{}'",
            any.type_url
        )));
    }

    let bytes =
        base64::decode(&any.key).map_err(|e| Error::consensus_key_decode(e.to_string()))?;

    bytes
        .as_slice()
        .try_into()
        .map_err(|_| Error::consensus_key_decode(format!("key is {} bytes, expected 32", bytes.len())))
}

/// Build the `create-validator` message. The delegator and the validator
/// are both the signer: a self-delegation.
pub fn build_create_validator_msg(
    params: &ValidatorParams,
    key: &KeyEntry,
    self_delegation: &Coin,
    consensus_pubkey: &[u8; 32],
) -> Result<document::Msg, Error> {
    validate_commission(params)?;

    if params.min_self_delegation == 0 {
        return Err(Error::invalid_min_self_delegation());
    }

    let valoper = key.address.valoper().map_err(Error::address_encode)?;

    Ok(document::Msg::CreateValidator(document::MsgCreateValidator {
        description: document::Description {
            moniker: params.moniker.clone(),
            identity: params.identity.clone(),
            website: params.website.clone(),
            security_contact: params.security_contact.clone(),
            details: params.details.clone(),
        },
        commission: document::CommissionRates {
            rate: params.commission_rate.to_string(),
            max_rate: params.commission_max_rate.to_string(),
            max_change_rate: params.commission_max_change_rate.to_string(),
        },
        min_self_delegation: params.min_self_delegation.to_string(),
        delegator_address: key.account.clone(),
        validator_address: valoper,
        pubkey: document::PublicKey::Ed25519 {
            key: base64::encode(consensus_pubkey),
        },
        value: document::Coin {
            denom: self_delegation.denom.clone(),
            amount: self_delegation.amount.to_string(),
        },
    }))
}

/// Build the orchestrator-binding message; pure assembly.
pub fn build_set_orchestrator_msg(
    key: &KeyEntry,
    orchestrator: &AccountId,
    eth_address: &str,
) -> Result<document::Msg, Error> {
    let valoper = key.address.valoper().map_err(Error::address_encode)?;
    let orchestrator = orchestrator.account().map_err(Error::address_encode)?;

    Ok(document::Msg::SetOrchestratorAddress(
        document::MsgSetOrchestratorAddress {
            validator: valoper,
            orchestrator,
            eth_address: eth_address.to_string(),
        },
    ))
}

fn validate_commission(params: &ValidatorParams) -> Result<(), Error> {
    if params.commission_max_rate > Dec::ONE {
        return Err(Error::invalid_commission_schedule(
            "maximum rate cannot be greater than 1.0".to_string(),
        ));
    }

    if params.commission_rate > params.commission_max_rate {
        return Err(Error::invalid_commission_schedule(
            "rate cannot be greater than the maximum rate".to_string(),
        ));
    }

    if params.commission_max_change_rate > params.commission_max_rate {
        return Err(Error::invalid_commission_schedule(
            "maximum change rate cannot be greater than the maximum rate".to_string(),
        ));
    }

    Ok(())
}

fn build_unsigned_tx(
    opts: &GenTxOptions,
    node_id: &str,
    create_validator: document::Msg,
    set_orchestrator: document::Msg,
) -> Result<document::TxDocument, Error> {
    let fee_amount = if opts.fees.trim().is_empty() {
        Vec::new()
    } else {
        coin::parse_coins_normalized(&opts.fees)
            .map_err(|e| Error::invalid_fees(opts.fees.clone(), e))?
            .into_iter()
            .map(|c| document::Coin {
                denom: c.denom,
                amount: c.amount.to_string(),
            })
            .collect()
    };

    Ok(document::TxDocument {
        body: document::Body {
            messages: vec![create_validator, set_orchestrator],
            memo: format!("{}@{}:{}", node_id, opts.ip, DEFAULT_P2P_PORT),
            timeout_height: "0".to_string(),
            extension_options: vec![],
            non_critical_extension_options: vec![],
        },
        auth_info: document::AuthInfo {
            signer_infos: vec![],
            fee: document::Fee {
                amount: fee_amount,
                gas_limit: opts.gas_limit.to_string(),
                payer: String::new(),
                granter: String::new(),
            },
        },
        signatures: vec![],
    })
}

/// Apply the single signature, replacing any prior signer info or
/// signature slot.
fn sign_tx(
    keyring: &KeyRing,
    key_name: &str,
    key: &KeyEntry,
    mut tx: document::TxDocument,
    chain_id: &str,
) -> Result<document::TxDocument, Error> {
    let key_pair = key
        .key_pair
        .as_ref()
        .ok_or_else(|| Error::signing(crate::keyring::errors::Error::cannot_sign(key_name.to_string())))?;

    tx.auth_info.signer_infos = vec![document::SignerInfo {
        public_key: document::PublicKey::Secp256k1 {
            key: base64::encode(key_pair.public_key_bytes()),
        },
        mode_info: document::ModeInfo {
            single: document::SingleMode {
                mode: document::SIGN_MODE_DIRECT.to_string(),
            },
        },
        sequence: GENTX_SEQUENCE.to_string(),
    }];

    let sign_bytes = encode::sign_bytes(&tx, chain_id, GENTX_ACCOUNT_NUMBER)?;
    let signature = keyring
        .sign_msg(key_name, &sign_bytes)
        .map_err(Error::signing)?;

    tx.signatures = vec![base64::encode(signature)];
    Ok(tx)
}

/// Default output path: `{home}/config/gentx/gentx-{node_id}.json`.
fn make_output_filepath(home: &HomeLayout, node_id: &str) -> Result<PathBuf, Error> {
    let write_path = home.gentx_dir();

    fs::create_dir_all(&write_path)
        .map_err(|e| Error::output_dir(write_path.display().to_string(), e))?;
    restrict_dir_permissions(&write_path)?;

    Ok(write_path.join(format!("gentx-{}.json", node_id)))
}

/// Write the signed document, failing closed if the target exists.
fn write_signed_gentx(path: &Path, tx: &document::TxDocument) -> Result<(), Error> {
    let json = tx.encode()?;

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            Error::output_already_exists(path.display().to_string())
        } else {
            Error::output_write(path.display().to_string(), e)
        }
    })?;

    file.write_all(&json)
        .and_then(|()| file.write_all(b"\n"))
        .map_err(|e| Error::output_write(path.display().to_string(), e))
}

#[cfg(unix)]
fn restrict_dir_permissions(path: &Path) -> Result<(), Error> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o700))
        .map_err(|e| Error::output_dir(path.display().to_string(), e))
}

#[cfg(not(unix))]
fn restrict_dir_permissions(_path: &Path) -> Result<(), Error> {
    Ok(())
}
