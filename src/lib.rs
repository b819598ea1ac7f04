//! OTB Helper CLI
//!
//! Terminal client for the disc search backend. Filtering, cart and checkout
//! logic live in `otb-helper-common`; this crate adds HTTP, config and output.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
