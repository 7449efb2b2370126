//! End-to-end tests for the gentx pipeline, running against a temporary
//! home directory with a generated keyring and genesis file.

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use gravity_chain::config::HomeLayout;
use gravity_chain::error::ErrorDetail;
use gravity_chain::gentx::{
    run_gentx, GenTxOptions, GenTxOutcome, ValidatorParams, DEFAULT_GAS_LIMIT,
};
use gravity_chain::keyring::{CustodyKind, KeyRing, Store};
use gravity_chain::tx::document::{Msg, TxDocument};

const MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

const ETH_ADDRESS: &str = "0x033030FEeBd93E3178487c35A9c8cA80874353C9";
const ORCHESTRATOR: &str = "cosmos1ahx7f8wyertuus9r20284ej0asrs085case3kn";

struct Node {
    // keeps the temporary directory alive for the duration of the test
    _dir: TempDir,
    home: HomeLayout,
    keyring: KeyRing,
    account: String,
}

fn setup(balance: &str) -> Node {
    let dir = tempfile::tempdir().unwrap();
    let home = HomeLayout::new(dir.path().to_path_buf());

    let mut keyring = KeyRing::new(Store::Test, &home.keyring_dir()).unwrap();
    let key_file = KeyRing::local_key_from_mnemonic("alice", MNEMONIC).unwrap();
    let account = key_file.address.clone();
    keyring.add_key(key_file).unwrap();

    write_genesis(&home, &account, balance);

    Node {
        _dir: dir,
        home,
        keyring,
        account,
    }
}

fn write_genesis(home: &HomeLayout, account: &str, amount: &str) {
    let genesis = json!({
        "genesis_time": "2021-02-01T00:00:00Z",
        "chain_id": "test-chain-1",
        "app_state": {
            "auth": { "accounts": [ { "address": account } ] },
            "bank": {
                "balances": [
                    { "address": account, "coins": [ { "denom": "stake", "amount": amount } ] }
                ]
            },
            "staking": { "params": { "bond_denom": "stake" } },
            "gravity": { "params": {} },
        }
    });

    fs::create_dir_all(home.config_dir()).unwrap();
    fs::write(
        home.genesis_file(),
        serde_json::to_string_pretty(&genesis).unwrap(),
    )
    .unwrap();
}

fn options(home: &HomeLayout) -> GenTxOptions {
    GenTxOptions {
        home: home.clone(),
        chain_id: None,
        key_name: "alice".to_string(),
        amount: "1000000stake".to_string(),
        eth_address: ETH_ADDRESS.to_string(),
        orchestrator_address: ORCHESTRATOR.to_string(),
        ip: "127.0.0.1".to_string(),
        fees: String::new(),
        gas_limit: DEFAULT_GAS_LIMIT,
        output_document: None,
        validator: ValidatorParams {
            moniker: "myvalidator".to_string(),
            ..ValidatorParams::default()
        },
    }
}

#[test]
fn produces_a_signed_artifact_at_the_derived_path() {
    let node = setup("2000000");

    let outcome = run_gentx(&node.keyring, &options(&node.home)).unwrap();
    let GenTxOutcome::Signed { path } = outcome else {
        panic!("expected a signed artifact");
    };

    // the default path is derived from the node ID
    assert!(path.starts_with(node.home.gentx_dir()));
    let filename = path.file_name().unwrap().to_str().unwrap();
    assert!(filename.starts_with("gentx-") && filename.ends_with(".json"));

    let contents = fs::read(&path).unwrap();
    let tx = TxDocument::decode(&contents).unwrap();

    // exactly two messages, in order
    assert_eq!(tx.body.messages.len(), 2);
    let Msg::CreateValidator(create) = &tx.body.messages[0] else {
        panic!("first message must create the validator");
    };
    let Msg::SetOrchestratorAddress(orch) = &tx.body.messages[1] else {
        panic!("second message must bind the orchestrator");
    };

    assert_eq!(create.delegator_address, node.account);
    assert_eq!(create.value.amount, "1000000");
    assert_eq!(create.value.denom, "stake");
    assert_eq!(create.description.moniker, "myvalidator");
    assert_eq!(orch.orchestrator, ORCHESTRATOR);
    assert_eq!(orch.eth_address, ETH_ADDRESS);
    assert_eq!(orch.validator, create.validator_address);

    // a single signature over a single signer info
    assert_eq!(tx.signatures.len(), 1);
    assert_eq!(tx.auth_info.signer_infos.len(), 1);
    assert_eq!(tx.auth_info.signer_infos[0].sequence, "0");

    // the memo advertises the node identity
    let node_id = filename
        .trim_start_matches("gentx-")
        .trim_end_matches(".json");
    assert_eq!(tx.body.memo, format!("{}@127.0.0.1:26656", node_id));
}

#[test]
fn second_run_fails_closed_and_keeps_the_artifact() {
    let node = setup("2000000");
    let opts = options(&node.home);

    let GenTxOutcome::Signed { path } = run_gentx(&node.keyring, &opts).unwrap() else {
        panic!("expected a signed artifact");
    };
    let first = fs::read(&path).unwrap();

    let err = run_gentx(&node.keyring, &opts).unwrap_err();
    assert!(matches!(err.detail(), ErrorDetail::OutputAlreadyExists(_)));

    // the first artifact is unmodified
    assert_eq!(fs::read(&path).unwrap(), first);
}

#[test]
fn offline_key_yields_an_unsigned_transaction_and_no_file() {
    let node = setup("2000000");

    // same address as alice, but without local key material
    let mut keyring = node.keyring.clone();
    keyring
        .add_key(
            KeyRing::address_only_key("warden", CustodyKind::Offline, &node.account).unwrap(),
        )
        .unwrap();

    let mut opts = options(&node.home);
    opts.key_name = "warden".to_string();

    let outcome = run_gentx(&keyring, &opts).unwrap();
    let GenTxOutcome::Unsigned { tx } = outcome else {
        panic!("expected an unsigned transaction");
    };

    assert_eq!(tx.body.messages.len(), 2);
    assert!(tx.signatures.is_empty());
    assert!(tx.auth_info.signer_infos.is_empty());

    // nothing was written
    assert!(!node.home.gentx_dir().exists());
}

#[test]
fn exact_genesis_balance_is_sufficient() {
    let node = setup("1000000");

    let outcome = run_gentx(&node.keyring, &options(&node.home)).unwrap();
    assert!(matches!(outcome, GenTxOutcome::Signed { .. }));
}

#[test]
fn one_unit_short_fails_the_balance_gate() {
    let node = setup("999999");

    let err = run_gentx(&node.keyring, &options(&node.home)).unwrap_err();
    assert!(matches!(
        err.detail(),
        ErrorDetail::InsufficientGenesisBalance(_)
    ));

    assert!(!node.home.gentx_dir().exists());
}

#[test]
fn missing_genesis_document_aborts_the_pipeline() {
    let node = setup("2000000");
    fs::remove_file(node.home.genesis_file()).unwrap();

    let err = run_gentx(&node.keyring, &options(&node.home)).unwrap_err();
    assert!(matches!(err.detail(), ErrorDetail::GenesisRead(_)));
}

#[test]
fn unknown_key_aborts_the_pipeline() {
    let node = setup("2000000");

    let mut opts = options(&node.home);
    opts.key_name = "bob".to_string();

    let err = run_gentx(&node.keyring, &opts).unwrap_err();
    assert!(matches!(err.detail(), ErrorDetail::KeyNotFound(_)));
}

#[test]
fn malformed_addresses_abort_the_pipeline() {
    let node = setup("2000000");

    let mut opts = options(&node.home);
    opts.eth_address = "0x033030".to_string();
    let err = run_gentx(&node.keyring, &opts).unwrap_err();
    assert!(matches!(err.detail(), ErrorDetail::InvalidEthAddress(_)));

    let mut opts = options(&node.home);
    opts.orchestrator_address = "cosmos1invalid".to_string();
    let err = run_gentx(&node.keyring, &opts).unwrap_err();
    assert!(matches!(
        err.detail(),
        ErrorDetail::InvalidOrchestratorAddress(_)
    ));
}

#[test]
fn explicit_output_document_is_respected() {
    let node = setup("2000000");

    let target = node.home.root().join("my-gentx.json");
    let mut opts = options(&node.home);
    opts.output_document = Some(target.clone());

    let GenTxOutcome::Signed { path } = run_gentx(&node.keyring, &opts).unwrap() else {
        panic!("expected a signed artifact");
    };

    assert_eq!(path, target);
    assert!(target.exists());
    assert!(!node.home.gentx_dir().exists());
}

#[test]
fn rendered_artifact_round_trips_through_the_codec() {
    let node = setup("2000000");

    let GenTxOutcome::Signed { path } = run_gentx(&node.keyring, &options(&node.home)).unwrap()
    else {
        panic!("expected a signed artifact");
    };

    let contents = fs::read(&path).unwrap();
    let decoded = TxDocument::decode(&contents).unwrap();

    let mut re_encoded = decoded.encode().unwrap();
    re_encoded.push(b'\n');
    assert_eq!(contents, re_encoded);
}
