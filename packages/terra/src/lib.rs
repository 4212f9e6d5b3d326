#![deny(missing_docs)]
//! Client-side SDK for Terra-flavored Cosmos chains.
//!
//! Two areas of functionality: the bech32 address families (account,
//! validator operator, consensus, and their pubkey variants) with validation
//! and payload-preserving derivation between them, and per-message types
//! which convert between Amino JSON, Data (REST) JSON, and binary protobuf.

pub use address::{Address, AddressHrp, HasAddress, HasAddressHrp, RawAddress};
pub use coin::Coin;
pub use cosmos_sdk_proto as proto;
pub use cosmos_sdk_proto::Any;
pub use error::{AddressError, CoinError, MsgError};
pub use family::AddressFamily;
pub use msg::{AminoMsg, AnyMsg, Msg};

mod address;
mod coin;

pub mod alliance;
pub mod bank;
pub mod distribution;
pub mod error;
pub mod family;
pub mod msg;
pub mod staking;
pub mod tokenfactory;
