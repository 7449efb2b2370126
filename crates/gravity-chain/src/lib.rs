//! Core library for the Gravity chain genesis tooling.
//!
//! The centerpiece is [`gentx::run_gentx`], which assembles, validates and
//! signs a genesis transaction: a `MsgCreateValidator` self-delegation
//! followed by a `MsgSetOrchestratorAddress` binding the new validator to
//! an Ethereum address and an orchestrator account.

#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]

pub mod bank;
pub mod config;
pub mod error;
pub mod genesis;
pub mod gentx;
pub mod keyring;
pub mod node;
pub mod tx;
pub mod types;
