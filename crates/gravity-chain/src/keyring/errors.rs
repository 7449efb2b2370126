use flex_error::{define_error, TraceError};

use crate::types::errors::Error as TypesError;

define_error! {
    Error {
        KeyNotFound
            { name: String }
            |e| { format_args!("key '{}' not found in the key store", e.name) },

        ExistingKey
            { name: String }
            |e| { format_args!("a key named '{}' already exists", e.name) },

        KeyStoreIo
            { path: String }
            [ TraceError<std::io::Error> ]
            |e| { format_args!("key store i/o error on '{}'", e.path) },

        KeyFileDecode
            { path: String }
            [ TraceError<serde_json::Error> ]
            |e| { format_args!("cannot decode key file '{}'", e.path) },

        KeyFileEncode
            [ TraceError<serde_json::Error> ]
            |_| { "cannot encode key file" },

        InvalidMnemonic
            [ TraceError<anyhow::Error> ]
            |_| { "invalid mnemonic" },

        InvalidHdPath
            { path: String }
            |e| { format_args!("invalid derivation path: {}", e.path) },

        Bip32KeyGenerationFailed
            [ TraceError<bitcoin::util::bip32::Error> ]
            |_| { "cannot generate private key from mnemonic" },

        InvalidKeyBytes
            [ TraceError<k256::ecdsa::Error> ]
            |_| { "could not build signing key from private key bytes" },

        Address
            [ TypesError ]
            |_| { "invalid key address" },

        AddressMismatch
            { keyfile: String, derived: String }
            |e| {
                format_args!("address in key file ('{}') does not match the address derived from its mnemonic ('{}')",
                    e.keyfile, e.derived)
            },

        MissingMnemonic
            { name: String }
            |e| { format_args!("local key '{}' has no mnemonic to derive a signing key from", e.name) },

        CannotSign
            { name: String }
            |e| {
                format_args!("key '{}' has no local private key material; sign the transaction through a separate flow",
                    e.name)
            },
    }
}
