//! Protobuf encoding of the sign bytes for a transaction document.
//!
//! The document is converted to the canonical `cosmos.tx.v1beta1` wire
//! types and serialized into a `SignDoc`. Signing these bytes guarantees
//! that any verifier reconstructing the transaction from its canonical
//! encoding sees exactly what was signed.

use gravity_proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use gravity_proto::cosmos::crypto::{ed25519, secp256k1};
use gravity_proto::cosmos::staking::v1beta1 as staking;
use gravity_proto::cosmos::tx::signing::v1beta1::SignMode;
use gravity_proto::cosmos::tx::v1beta1::{
    mode_info::{Single, Sum},
    AuthInfo, Fee, ModeInfo, SignDoc, SignerInfo, TxBody,
};
use gravity_proto::google::protobuf::Any;
use gravity_proto::gravity::v1 as gravity;
use prost::Message;

use super::document;
use crate::error::Error;

/// Compute the `SIGN_MODE_DIRECT` sign bytes of a transaction document.
pub fn sign_bytes(
    doc: &document::TxDocument,
    chain_id: &str,
    account_number: u64,
) -> Result<Vec<u8>, Error> {
    let body_bytes = tx_body_bytes(&doc.body)?;
    let auth_info_bytes = auth_info_bytes(&doc.auth_info)?;

    let sign_doc = SignDoc {
        body_bytes,
        auth_info_bytes,
        chain_id: chain_id.to_string(),
        account_number,
    };

    encode_proto(&sign_doc, "SignDoc")
}

fn tx_body_bytes(body: &document::Body) -> Result<Vec<u8>, Error> {
    if !body.extension_options.is_empty() || !body.non_critical_extension_options.is_empty() {
        return Err(Error::tx_field(
            "extension_options".to_string(),
            "extension options are not supported in a genesis transaction".to_string(),
        ));
    }

    let messages = body
        .messages
        .iter()
        .map(proto_msg)
        .collect::<Result<Vec<_>, _>>()?;

    let body = TxBody {
        messages,
        memo: body.memo.clone(),
        timeout_height: parse_u64("timeout_height", &body.timeout_height)?,
        extension_options: Vec::new(),
        non_critical_extension_options: Vec::new(),
    };

    encode_proto(&body, "TxBody")
}

fn auth_info_bytes(auth_info: &document::AuthInfo) -> Result<Vec<u8>, Error> {
    let signer_infos = auth_info
        .signer_infos
        .iter()
        .map(proto_signer_info)
        .collect::<Result<Vec<_>, _>>()?;

    let amount = auth_info
        .fee
        .amount
        .iter()
        .map(proto_coin)
        .collect::<Result<Vec<_>, _>>()?;

    let fee = Fee {
        amount,
        gas_limit: parse_u64("gas_limit", &auth_info.fee.gas_limit)?,
        payer: auth_info.fee.payer.clone(),
        granter: auth_info.fee.granter.clone(),
    };

    let auth_info = AuthInfo {
        signer_infos,
        fee: Some(fee),
    };

    encode_proto(&auth_info, "AuthInfo")
}

fn proto_signer_info(info: &document::SignerInfo) -> Result<SignerInfo, Error> {
    if info.mode_info.single.mode != document::SIGN_MODE_DIRECT {
        return Err(Error::unsupported_sign_mode(info.mode_info.single.mode.clone()));
    }

    Ok(SignerInfo {
        public_key: Some(proto_pubkey(&info.public_key)?),
        mode_info: Some(ModeInfo {
            sum: Some(Sum::Single(Single {
                mode: SignMode::Direct as i32,
            })),
        }),
        sequence: parse_u64("sequence", &info.sequence)?,
    })
}

fn proto_msg(msg: &document::Msg) -> Result<Any, Error> {
    match msg {
        document::Msg::CreateValidator(m) => {
            let message = staking::MsgCreateValidator {
                description: Some(staking::Description {
                    moniker: m.description.moniker.clone(),
                    identity: m.description.identity.clone(),
                    website: m.description.website.clone(),
                    security_contact: m.description.security_contact.clone(),
                    details: m.description.details.clone(),
                }),
                commission: Some(staking::CommissionRates {
                    rate: m.commission.rate.clone(),
                    max_rate: m.commission.max_rate.clone(),
                    max_change_rate: m.commission.max_change_rate.clone(),
                }),
                min_self_delegation: m.min_self_delegation.clone(),
                delegator_address: m.delegator_address.clone(),
                validator_address: m.validator_address.clone(),
                pubkey: Some(proto_pubkey(&m.pubkey)?),
                value: Some(proto_coin(&m.value)?),
            };

            any(document::CREATE_VALIDATOR_TYPE_URL, &message, "MsgCreateValidator")
        }

        document::Msg::SetOrchestratorAddress(m) => {
            let message = gravity::MsgSetOrchestratorAddress {
                validator: m.validator.clone(),
                orchestrator: m.orchestrator.clone(),
                eth_address: m.eth_address.clone(),
            };

            any(
                document::SET_ORCHESTRATOR_TYPE_URL,
                &message,
                "MsgSetOrchestratorAddress",
            )
        }
    }
}

fn proto_pubkey(public_key: &document::PublicKey) -> Result<Any, Error> {
    match public_key {
        document::PublicKey::Ed25519 { key } => {
            let key =
                base64::decode(key).map_err(|e| Error::base64_field("pubkey".to_string(), e))?;

            any(
                document::ED25519_PUBKEY_TYPE_URL,
                &ed25519::PubKey { key },
                "PubKey",
            )
        }

        document::PublicKey::Secp256k1 { key } => {
            let key =
                base64::decode(key).map_err(|e| Error::base64_field("pubkey".to_string(), e))?;

            any(
                document::SECP256K1_PUBKEY_TYPE_URL,
                &secp256k1::PubKey { key },
                "PubKey",
            )
        }
    }
}

fn proto_coin(coin: &document::Coin) -> Result<ProtoCoin, Error> {
    // amounts stay strings on the wire, but must at least be numeric
    coin.amount
        .parse::<u128>()
        .map_err(|e| Error::tx_field("amount".to_string(), e.to_string()))?;

    Ok(ProtoCoin {
        denom: coin.denom.clone(),
        amount: coin.amount.clone(),
    })
}

fn parse_u64(field: &str, value: &str) -> Result<u64, Error> {
    value
        .parse::<u64>()
        .map_err(|e| Error::tx_field(field.to_string(), e.to_string()))
}

fn any<M: Message>(type_url: &str, message: &M, name: &str) -> Result<Any, Error> {
    Ok(Any {
        type_url: type_url.to_string(),
        value: encode_proto(message, name)?,
    })
}

fn encode_proto<M: Message>(message: &M, name: &str) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    message
        .encode(&mut buf)
        .map_err(|e| Error::protobuf_encode(name.to_string(), e))?;

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::document::{
        AuthInfo, Body, Coin, Fee, ModeInfo, Msg, MsgSetOrchestratorAddress, PublicKey,
        SignerInfo, SingleMode, TxDocument, SIGN_MODE_DIRECT,
    };

    fn minimal_doc() -> TxDocument {
        TxDocument {
            body: Body {
                messages: vec![Msg::SetOrchestratorAddress(MsgSetOrchestratorAddress {
                    validator: "cosmosvaloper1xyz".to_string(),
                    orchestrator: "cosmos1xyz".to_string(),
                    eth_address: "0x033030FEeBd93E3178487c35A9c8cA80874353C9".to_string(),
                })],
                memo: "node@127.0.0.1:26656".to_string(),
                timeout_height: "0".to_string(),
                extension_options: vec![],
                non_critical_extension_options: vec![],
            },
            auth_info: AuthInfo {
                signer_infos: vec![SignerInfo {
                    public_key: PublicKey::Secp256k1 {
                        key: base64::encode([2u8; 33]),
                    },
                    mode_info: ModeInfo {
                        single: SingleMode {
                            mode: SIGN_MODE_DIRECT.to_string(),
                        },
                    },
                    sequence: "0".to_string(),
                }],
                fee: Fee {
                    amount: vec![Coin {
                        denom: "stake".to_string(),
                        amount: "10".to_string(),
                    }],
                    gas_limit: "200000".to_string(),
                    payer: String::new(),
                    granter: String::new(),
                },
            },
            signatures: vec![],
        }
    }

    #[test]
    fn sign_bytes_are_deterministic() {
        let doc = minimal_doc();

        let a = sign_bytes(&doc, "test-chain-1", 0).unwrap();
        let b = sign_bytes(&doc, "test-chain-1", 0).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn sign_bytes_bind_the_chain_id() {
        let doc = minimal_doc();

        let a = sign_bytes(&doc, "test-chain-1", 0).unwrap();
        let b = sign_bytes(&doc, "other-chain", 0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn rejects_foreign_sign_modes() {
        let mut doc = minimal_doc();
        doc.auth_info.signer_infos[0].mode_info.single.mode =
            "SIGN_MODE_LEGACY_AMINO_JSON".to_string();

        assert!(sign_bytes(&doc, "test-chain-1", 0).is_err());
    }

    #[test]
    fn rejects_undecodable_key_material() {
        let mut doc = minimal_doc();
        doc.auth_info.signer_infos[0].public_key = PublicKey::Secp256k1 {
            key: "not base64!".to_string(),
        };

        assert!(sign_bytes(&doc, "test-chain-1", 0).is_err());
    }
}
