//! Native-token balance lookup for EVM chains (Ethereum Mainnet, Mode
//! Mainnet), exposed as a library, an HTTP API, and a CLI.
//!
//! The pipeline is: validate the address and chain, resolve the static
//! chain config, query the cached per-chain RPC client under a time
//! bound, and return a normalized result. Failures collapse to a
//! single fetch-failure kind and are classified into the user-facing
//! taxonomy only at the boundary ([`classify`]).

pub mod api;
pub mod balance;
pub mod chains;
pub mod classify;
pub mod clients;
pub mod format;
pub mod validation;
