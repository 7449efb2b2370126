use std::path::PathBuf;

use abscissa_core::{clap::Parser, Command, Runnable};

use gravity_chain::config::HomeLayout;
use gravity_chain::gentx::{
    run_gentx, GenTxOptions, GenTxOutcome, ValidatorParams, DEFAULT_GAS_LIMIT,
};
use gravity_chain::keyring::{KeyRing, Store};
use gravity_chain::types::decimal::Dec;

use crate::conclude::Output;

/// Generate a genesis transaction that creates a validator with a
/// self-delegation and an orchestrator key delegation, signed by the key
/// in the keyring referenced by a given name. A node ID and consensus
/// pubkey may optionally be provided; if they are omitted, they will be
/// retrieved from the `priv_validator_key.json` file, generating it if
/// necessary.
#[derive(Clone, Command, Debug, Parser, PartialEq, Eq)]
pub struct GenTxCmd {
    #[clap(
        value_name = "KEY_NAME",
        required = true,
        help = "Name of the signing key in the keyring"
    )]
    key_name: String,

    #[clap(
        value_name = "AMOUNT",
        required = true,
        help = "Amount of coins to self-delegate, e.g. 1000000stake"
    )]
    amount: String,

    #[clap(
        value_name = "ETH_ADDRESS",
        required = true,
        help = "Ethereum address the validator will use on the bridged chain"
    )]
    eth_address: String,

    #[clap(
        value_name = "ORCHESTRATOR_ADDRESS",
        required = true,
        help = "Account address of the orchestrator delegated to"
    )]
    orchestrator_address: String,

    #[clap(
        long = "home",
        value_name = "HOME",
        help = "The application home directory"
    )]
    home: Option<PathBuf>,

    #[clap(
        long = "output-document",
        value_name = "PATH",
        help = "Write the genesis transaction JSON document to the given file instead of the default location"
    )]
    output_document: Option<PathBuf>,

    #[clap(long = "chain-id", value_name = "CHAIN_ID", help = "The network chain ID")]
    chain_id: Option<String>,

    #[clap(
        long = "node-id",
        value_name = "NODE_ID",
        help = "The node's ID; derived from node_key.json if omitted"
    )]
    node_id: Option<String>,

    #[clap(
        long = "pubkey",
        value_name = "PUBKEY",
        help = "The validator's JSON-encoded consensus public key; taken from priv_validator_key.json if omitted"
    )]
    pubkey: Option<String>,

    #[clap(
        long = "ip",
        value_name = "IP",
        default_value = "127.0.0.1",
        help = "The node's public IP, used in the transaction memo"
    )]
    ip: String,

    #[clap(
        long = "moniker",
        value_name = "NAME",
        default_value = "node",
        help = "The validator's name"
    )]
    moniker: String,

    #[clap(
        long = "identity",
        value_name = "IDENTITY",
        default_value = "",
        help = "The optional identity signature (ex. UPort or Keybase)"
    )]
    identity: String,

    #[clap(
        long = "website",
        value_name = "WEBSITE",
        default_value = "",
        help = "The validator's (optional) website"
    )]
    website: String,

    #[clap(
        long = "security-contact",
        value_name = "EMAIL",
        default_value = "",
        help = "The validator's (optional) security contact email"
    )]
    security_contact: String,

    #[clap(
        long = "details",
        value_name = "DETAILS",
        default_value = "",
        help = "The validator's (optional) details"
    )]
    details: String,

    #[clap(
        long = "commission-rate",
        value_name = "RATE",
        default_value = "0.1",
        help = "The initial commission rate percentage"
    )]
    commission_rate: Dec,

    #[clap(
        long = "commission-max-rate",
        value_name = "RATE",
        default_value = "0.2",
        help = "The maximum commission rate percentage"
    )]
    commission_max_rate: Dec,

    #[clap(
        long = "commission-max-change-rate",
        value_name = "RATE",
        default_value = "0.01",
        help = "The maximum commission change rate percentage (per day)"
    )]
    commission_max_change_rate: Dec,

    #[clap(
        long = "min-self-delegation",
        value_name = "AMOUNT",
        default_value = "1",
        help = "The minimum self delegation required on the validator"
    )]
    min_self_delegation: u128,

    #[clap(
        long = "fees",
        value_name = "FEES",
        default_value = "",
        help = "Fees to pay along with the transaction, e.g. 10stake"
    )]
    fees: String,

    #[clap(
        long = "gas",
        value_name = "GAS",
        default_value_t = DEFAULT_GAS_LIMIT,
        help = "Gas limit to set per-transaction"
    )]
    gas: u64,
}

impl GenTxCmd {
    fn options(&self) -> Result<GenTxOptions, String> {
        let root = match &self.home {
            Some(home) => home.clone(),
            None => HomeLayout::default_root()
                .ok_or_else(|| "cannot determine the home directory; use --home".to_string())?,
        };

        Ok(GenTxOptions {
            home: HomeLayout::new(root),
            chain_id: self.chain_id.clone(),
            key_name: self.key_name.clone(),
            amount: self.amount.clone(),
            eth_address: self.eth_address.clone(),
            orchestrator_address: self.orchestrator_address.clone(),
            ip: self.ip.clone(),
            fees: self.fees.clone(),
            gas_limit: self.gas,
            output_document: self.output_document.clone(),
            validator: ValidatorParams {
                moniker: self.moniker.clone(),
                identity: self.identity.clone(),
                website: self.website.clone(),
                security_contact: self.security_contact.clone(),
                details: self.details.clone(),
                commission_rate: self.commission_rate,
                commission_max_rate: self.commission_max_rate,
                commission_max_change_rate: self.commission_max_change_rate,
                min_self_delegation: self.min_self_delegation,
                consensus_pubkey: self.pubkey.clone(),
                node_id: self.node_id.clone(),
            },
        })
    }
}

impl Runnable for GenTxCmd {
    fn run(&self) {
        let opts = match self.options() {
            Err(err) => Output::error(err).exit(),
            Ok(result) => result,
        };

        let keyring = match KeyRing::new(Store::Test, &opts.home.keyring_dir()) {
            Err(e) => Output::error(format!("{}", e)).exit(),
            Ok(keyring) => keyring,
        };

        match run_gentx(&keyring, &opts) {
            Ok(GenTxOutcome::Signed { path }) => {
                Output::success_msg(format!(
                    "Genesis transaction written to {}",
                    path.display()
                ))
                .exit()
            }

            Ok(GenTxOutcome::Unsigned { tx }) => {
                eprintln!("Offline or multisig key passed in. Use a separate signing flow to sign.");
                Output::success(tx).exit()
            }

            Err(e) => Output::error(format!("{}", e)).exit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GenTxCmd;

    use abscissa_core::clap::Parser;

    #[test]
    fn parses_the_four_positional_arguments() {
        let cmd = GenTxCmd::parse_from([
            "gentx",
            "alice",
            "1000000stake",
            "0x033030FEeBd93E3178487c35A9c8cA80874353C9",
            "cosmos1ahx7f8wyertuus9r20284ej0asrs085case3kn",
        ]);

        assert_eq!(cmd.key_name, "alice");
        assert_eq!(cmd.amount, "1000000stake");
        assert_eq!(cmd.gas, 200_000);
        assert_eq!(cmd.moniker, "node");
        assert!(cmd.home.is_none());
    }

    #[test]
    fn rejects_missing_positionals() {
        assert!(GenTxCmd::try_parse_from(["gentx", "alice", "1000000stake"]).is_err());
    }

    #[test]
    fn accepts_commission_overrides() {
        let cmd = GenTxCmd::parse_from([
            "gentx",
            "alice",
            "1000000stake",
            "0x033030FEeBd93E3178487c35A9c8cA80874353C9",
            "cosmos1ahx7f8wyertuus9r20284ej0asrs085case3kn",
            "--commission-rate",
            "0.07",
            "--commission-max-rate",
            "1.0",
            "--moniker",
            "myvalidator",
        ]);

        assert_eq!(cmd.commission_rate.to_string(), "0.070000000000000000");
        assert_eq!(cmd.moniker, "myvalidator");
    }

    #[test]
    fn rejects_malformed_commission_rates() {
        assert!(GenTxCmd::try_parse_from([
            "gentx",
            "alice",
            "1000000stake",
            "0x033030FEeBd93E3178487c35A9c8cA80874353C9",
            "cosmos1ahx7f8wyertuus9r20284ej0asrs085case3kn",
            "--commission-rate",
            "abc",
        ])
        .is_err());
    }
}
