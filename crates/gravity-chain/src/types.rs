//! Leaf value types shared across the pipeline: addresses, coin amounts
//! and fixed-point decimals, together with their validation rules.

pub mod address;
pub mod coin;
pub mod decimal;
pub mod errors;
