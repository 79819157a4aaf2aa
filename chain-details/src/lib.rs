//! Data model for aggregated EVM chain details.
//!
//! A wallet needs, per supported chain, a name, a set of working RPC
//! endpoints, an icon and a mainnet/testnet flag. This crate holds the types
//! that describe that data and its on-disk form:
//!
//! - [`ContractsRegistry`]: which chains carry a supported contract deployment.
//! - [`ChainDescriptor`]: one chain's metadata, as published upstream and
//!   augmented with a resolved [`IconRecord`] and a `mainnet` flag.
//! - [`ChainDetails`]: the merged, persisted mapping of chain ID to descriptor.
//! - [`Testnets`]: chain IDs that are always treated as testnets.

pub mod descriptor;
pub mod icon;
pub mod registry;
pub mod store;
pub mod testnets;

pub use descriptor::{ChainDescriptor, ChainIcon};
pub use icon::IconRecord;
pub use registry::ContractsRegistry;
pub use store::{ChainDetails, StoreError};
pub use testnets::Testnets;
