//! Chain details aggregator.
//!
//! Builds a local `chainDetails.json` for every chain that carries a
//! supported contract deployment: upstream chain metadata, filtered down to
//! live RPC endpoints, with a resolved icon and a mainnet flag. Results are
//! merged into the existing file so chains from earlier runs are kept.

pub mod config;
pub mod fetcher;
pub mod icons;
pub mod liveness;
pub mod pipeline;
