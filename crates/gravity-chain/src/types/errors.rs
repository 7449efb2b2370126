use flex_error::{define_error, TraceError};

define_error! {
    Error {
        Bech32Decode
            { address: String }
            [ TraceError<bech32::Error> ]
            |e| { format_args!("failed to decode bech32 address '{}'", e.address) },

        Bech32Encode
            [ TraceError<bech32::Error> ]
            |_| { "failed to encode bech32 address" },

        Bech32Data
            { address: String }
            [ TraceError<bech32::Error> ]
            |e| { format_args!("invalid bech32 data in address '{}'", e.address) },

        Bech32Prefix
            { address: String, expected: String, found: String }
            |e| {
                format_args!("address '{}' has prefix '{}', expected '{}'",
                    e.address, e.found, e.expected)
            },

        Bech32Variant
            { address: String }
            |e| { format_args!("address '{}' does not use the classic bech32 checksum", e.address) },

        AddressLength
            { address: String, length: usize }
            |e| { format_args!("address '{}' decodes to {} bytes, expected 20", e.address, e.length) },

        EthAddress
            { address: String, reason: String }
            |e| { format_args!("invalid ethereum address '{}': {}", e.address, e.reason) },

        EmptyCoins
            |_| { "empty coin string" },

        MissingDenom
            { input: String }
            |e| { format_args!("coin '{}' has no denomination", e.input) },

        InvalidCoinAmount
            { input: String }
            |e| { format_args!("invalid coin amount in '{}'", e.input) },

        InvalidDenom
            { denom: String }
            |e| { format_args!("invalid coin denomination '{}'", e.denom) },

        CoinOverflow
            { denom: String }
            |e| { format_args!("coin amount overflow for denomination '{}'", e.denom) },

        MultipleDenoms
            { input: String }
            |e| { format_args!("'{}' contains more than one denomination, a single coin is expected", e.input) },

        InvalidDecimal
            { input: String, reason: String }
            |e| { format_args!("invalid decimal '{}': {}", e.input, e.reason) },
    }
}
