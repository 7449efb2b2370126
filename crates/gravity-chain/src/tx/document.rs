//! The JSON document form of a genesis transaction.
//!
//! This mirrors the proto-JSON rendering of `cosmos.tx.v1beta1.Tx`:
//! messages and public keys are `Any`-style objects discriminated by an
//! `@type` field, and 64-bit integers travel as strings. Serialization is
//! canonical: field order is fixed by the struct definitions, so encoding
//! a decoded document reproduces the input byte for byte. The pipeline
//! relies on that property when it re-decodes the rendered transaction
//! before signing.

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const CREATE_VALIDATOR_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgCreateValidator";
pub const SET_ORCHESTRATOR_TYPE_URL: &str = "/gravity.v1.MsgSetOrchestratorAddress";
pub const ED25519_PUBKEY_TYPE_URL: &str = "/cosmos.crypto.ed25519.PubKey";
pub const SECP256K1_PUBKEY_TYPE_URL: &str = "/cosmos.crypto.secp256k1.PubKey";

/// Textual name of the direct sign mode in proto-JSON.
pub const SIGN_MODE_DIRECT: &str = "SIGN_MODE_DIRECT";

/// A complete transaction document, signed or not.
///
/// An unsigned document has no signer infos and no signatures; signing
/// fills both, replacing whatever was there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxDocument {
    pub body: Body,
    pub auth_info: AuthInfo,
    /// Base64-encoded signatures, one per signer info.
    pub signatures: Vec<String>,
}

impl TxDocument {
    /// Canonical JSON encoding of the document.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(Error::tx_encode)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(bytes).map_err(Error::tx_decode)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub messages: Vec<Msg>,
    pub memo: String,
    pub timeout_height: String,
    pub extension_options: Vec<serde_json::Value>,
    pub non_critical_extension_options: Vec<serde_json::Value>,
}

/// The messages a genesis transaction can carry, discriminated by their
/// `Any` type URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum Msg {
    #[serde(rename = "/cosmos.staking.v1beta1.MsgCreateValidator")]
    CreateValidator(MsgCreateValidator),

    #[serde(rename = "/gravity.v1.MsgSetOrchestratorAddress")]
    SetOrchestratorAddress(MsgSetOrchestratorAddress),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateValidator {
    pub description: Description,
    pub commission: CommissionRates,
    pub min_self_delegation: String,
    pub delegator_address: String,
    pub validator_address: String,
    pub pubkey: PublicKey,
    pub value: Coin,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub moniker: String,
    pub identity: String,
    pub website: String,
    pub security_contact: String,
    pub details: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRates {
    pub rate: String,
    pub max_rate: String,
    pub max_change_rate: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSetOrchestratorAddress {
    pub validator: String,
    pub orchestrator: String,
    pub eth_address: String,
}

/// An `Any`-wrapped public key with base64 key material.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum PublicKey {
    #[serde(rename = "/cosmos.crypto.ed25519.PubKey")]
    Ed25519 { key: String },

    #[serde(rename = "/cosmos.crypto.secp256k1.PubKey")]
    Secp256k1 { key: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInfo {
    pub signer_infos: Vec<SignerInfo>,
    pub fee: Fee,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerInfo {
    pub public_key: PublicKey,
    pub mode_info: ModeInfo,
    pub sequence: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeInfo {
    pub single: SingleMode,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleMode {
    pub mode: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    pub amount: Vec<Coin>,
    pub gas_limit: String,
    pub payer: String,
    pub granter: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_unsigned() -> TxDocument {
        TxDocument {
            body: Body {
                messages: vec![
                    Msg::CreateValidator(MsgCreateValidator {
                        description: Description {
                            moniker: "myvalidator".to_string(),
                            identity: String::new(),
                            website: String::new(),
                            security_contact: String::new(),
                            details: String::new(),
                        },
                        commission: CommissionRates {
                            rate: "0.100000000000000000".to_string(),
                            max_rate: "0.200000000000000000".to_string(),
                            max_change_rate: "0.010000000000000000".to_string(),
                        },
                        min_self_delegation: "1".to_string(),
                        delegator_address: "cosmos1ahx7f8wyertuus9r20284ej0asrs085case3kn"
                            .to_string(),
                        validator_address:
                            "cosmosvaloper1ahx7f8wyertuus9r20284ej0asrs085cmfgvlv".to_string(),
                        pubkey: PublicKey::Ed25519 {
                            key: base64::encode([7u8; 32]),
                        },
                        value: Coin {
                            denom: "stake".to_string(),
                            amount: "1000000".to_string(),
                        },
                    }),
                    Msg::SetOrchestratorAddress(MsgSetOrchestratorAddress {
                        validator: "cosmosvaloper1ahx7f8wyertuus9r20284ej0asrs085cmfgvlv"
                            .to_string(),
                        orchestrator: "cosmos1ahx7f8wyertuus9r20284ej0asrs085case3kn".to_string(),
                        eth_address: "0x033030FEeBd93E3178487c35A9c8cA80874353C9".to_string(),
                    }),
                ],
                memo: "deadbeef@127.0.0.1:26656".to_string(),
                timeout_height: "0".to_string(),
                extension_options: vec![],
                non_critical_extension_options: vec![],
            },
            auth_info: AuthInfo {
                signer_infos: vec![],
                fee: Fee {
                    amount: vec![],
                    gas_limit: "200000".to_string(),
                    payer: String::new(),
                    granter: String::new(),
                },
            },
            signatures: vec![],
        }
    }

    #[test]
    fn encoding_is_idempotent_through_decode() {
        let doc = sample_unsigned();

        let encoded = doc.encode().unwrap();
        let decoded = TxDocument::decode(&encoded).unwrap();
        let re_encoded = decoded.encode().unwrap();

        assert_eq!(decoded, doc);
        assert_eq!(encoded, re_encoded);
    }

    #[test]
    fn messages_keep_their_order() {
        let doc = sample_unsigned();
        let encoded = doc.encode().unwrap();
        let decoded = TxDocument::decode(&encoded).unwrap();

        assert!(matches!(decoded.body.messages[0], Msg::CreateValidator(_)));
        assert!(matches!(
            decoded.body.messages[1],
            Msg::SetOrchestratorAddress(_)
        ));
    }

    #[test]
    fn type_urls_appear_in_the_wire_form() {
        let doc = sample_unsigned();
        let json = String::from_utf8(doc.encode().unwrap()).unwrap();

        assert!(json.contains(CREATE_VALIDATOR_TYPE_URL));
        assert!(json.contains(SET_ORCHESTRATOR_TYPE_URL));
        assert!(json.contains(ED25519_PUBKEY_TYPE_URL));
    }
}
