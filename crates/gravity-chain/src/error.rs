//! Error type for the gentx pipeline and its collaborators.
//!
//! Each variant corresponds to a pipeline step, so a failure anywhere
//! surfaces with the step that produced it. The pipeline aborts on the
//! first error; there is no partial-success state.

use flex_error::{define_error, TraceError};

use crate::keyring::errors::Error as KeyringError;
use crate::types::errors::Error as TypesError;

define_error! {
    Error {
        NodeIdentityInit
            { path: String }
            [ TraceError<std::io::Error> ]
            |e| { format_args!("failed to initialize node validator file '{}'", e.path) },

        NodeIdentityDecode
            { path: String }
            [ TraceError<serde_json::Error> ]
            |e| { format_args!("failed to decode node validator file '{}'", e.path) },

        NodeIdentityEncode
            { path: String }
            [ TraceError<serde_json::Error> ]
            |e| { format_args!("failed to encode node validator file '{}'", e.path) },

        NodeIdentityFormat
            { path: String, reason: String }
            |e| { format_args!("malformed node validator file '{}': {}", e.path, e.reason) },

        GenesisRead
            { path: String }
            [ TraceError<std::io::Error> ]
            |e| { format_args!("failed to read genesis doc file '{}'", e.path) },

        GenesisParse
            { path: String }
            [ TraceError<serde_json::Error> ]
            |e| { format_args!("failed to parse genesis doc file '{}'", e.path) },

        GenesisAppState
            { reason: String }
            |e| { format_args!("failed to unmarshal genesis state: {}", e.reason) },

        MissingModuleState
            { module: String }
            |e| { format_args!("failed to validate genesis state: no state for module '{}'", e.module) },

        GenesisStateInvalid
            { module: String, reason: String }
            |e| { format_args!("invalid genesis state for module '{}': {}", e.module, e.reason) },

        AccountNotInGenesis
            { address: String }
            |e| { format_args!("account '{}' does not exist in genesis balances", e.address) },

        InsufficientGenesisBalance
            { address: String, denom: String, required: u128, available: u128 }
            |e| {
                format_args!("account '{}' has insufficient genesis balance: {}{} required, {}{} available",
                    e.address, e.required, e.denom, e.available, e.denom)
            },

        KeyNotFound
            { name: String }
            [ KeyringError ]
            |e| { format_args!("failed to fetch '{}' from the keyring", e.name) },

        Signing
            [ KeyringError ]
            |_| { "failed to sign the genesis transaction" },

        InvalidEthAddress
            [ TypesError ]
            |_| { "invalid ethereum address" },

        InvalidOrchestratorAddress
            { address: String }
            [ TypesError ]
            |e| { format_args!("failed to parse orchestrator address '{}'", e.address) },

        AddressEncode
            [ TypesError ]
            |_| { "failed to encode account address" },

        InvalidAmount
            { input: String }
            [ TypesError ]
            |e| { format_args!("failed to parse coins from '{}'", e.input) },

        InvalidFees
            { input: String }
            [ TypesError ]
            |e| { format_args!("failed to parse fees from '{}'", e.input) },

        InvalidCommissionSchedule
            { reason: String }
            |e| { format_args!("invalid commission schedule: {}", e.reason) },

        InvalidMinSelfDelegation
            |_| { "minimum self delegation must be a positive integer" },

        ConsensusKeyDecode
            { reason: String }
            |e| { format_args!("failed to decode consensus node public key: {}", e.reason) },

        TxEncode
            [ TraceError<serde_json::Error> ]
            |_| { "failed to encode transaction document" },

        TxDecode
            [ TraceError<serde_json::Error> ]
            |_| { "failed to decode transaction document" },

        ProtobufEncode
            { message: String }
            [ TraceError<prost::EncodeError> ]
            |e| { format_args!("failed to encode protobuf message '{}'", e.message) },

        TxField
            { field: String, reason: String }
            |e| { format_args!("invalid transaction field '{}': {}", e.field, e.reason) },

        UnsupportedSignMode
            { mode: String }
            |e| { format_args!("unsupported sign mode '{}'", e.mode) },

        Base64Field
            { field: String }
            [ TraceError<base64::DecodeError> ]
            |e| { format_args!("failed to decode base64 field '{}'", e.field) },

        OutputDir
            { path: String }
            [ TraceError<std::io::Error> ]
            |e| { format_args!("failed to create output directory '{}'", e.path) },

        OutputAlreadyExists
            { path: String }
            |e| { format_args!("output file '{}' already exists", e.path) },

        OutputWrite
            { path: String }
            [ TraceError<std::io::Error> ]
            |e| { format_args!("failed to write signed gen tx to '{}'", e.path) },
    }
}
