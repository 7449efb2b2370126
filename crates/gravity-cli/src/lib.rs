//! Cli for the Gravity chain genesis tooling
//!
//! Application based on the [Abscissa] framework.
//!
//! [Abscissa]: https://github.com/iqlusioninc/abscissa

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, trivial_casts, unused_lifetimes)]

pub mod application;
pub mod commands;
pub mod components;
pub mod conclude;
pub mod config;
pub mod entry;
pub mod prelude;
