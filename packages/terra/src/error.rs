#![allow(missing_docs)]
//! Error types exposed by this package.

use crate::family::AddressFamily;

/// Errors that can occur while working with [crate::Address].
#[derive(thiserror::Error, Debug, Clone)]
pub enum AddressError {
    #[error("Invalid bech32 encoding in {address:?}: {source:?}")]
    InvalidBech32 {
        address: String,
        source: bech32::DecodeError,
    },
    #[error("Invalid byte count within {address:?}, expected 20 or 32 bytes, received {actual}")]
    InvalidByteCount { address: String, actual: usize },
    #[error("Invalid HRP provided: {hrp:?}")]
    InvalidHrp { hrp: String },
    #[error("Address {address:?} does not carry the {family} suffix {suffix:?}")]
    WrongFamily {
        address: String,
        family: AddressFamily,
        suffix: &'static str,
    },
}

/// Errors that can occur while parsing a [crate::Coin] from its string form.
#[derive(thiserror::Error, Debug, Clone)]
pub enum CoinError {
    #[error("Coin value is empty")]
    Empty,
    #[error("Coin value {input:?} is missing a denom")]
    MissingDenom { input: String },
    #[error("Coin value {input:?} is missing an amount")]
    MissingAmount { input: String },
    #[error("Invalid character in denom of coin value {input:?}")]
    InvalidDenom { input: String },
    #[error("Could not parse amount in coin value {input:?}: {source}")]
    InvalidAmount {
        input: String,
        source: std::num::ParseIntError,
    },
}

/// Errors that can occur while converting messages between their wire
/// representations.
#[derive(thiserror::Error, Debug)]
pub enum MsgError {
    #[error("Unknown protobuf type URL {type_url:?}")]
    UnknownTypeUrl { type_url: String },
    #[error("Unknown Amino type tag {amino_type:?}")]
    UnknownAminoType { amino_type: String },
    #[error("Mismatched type URL, expected {expected:?}, received {actual:?}")]
    MismatchedTypeUrl {
        expected: &'static str,
        actual: String,
    },
    #[error("Mismatched Amino type tag, expected {expected:?}, received {actual:?}")]
    MismatchedAminoType {
        expected: &'static str,
        actual: String,
    },
    #[error("Invalid protobuf encoding for {type_url}: {source}")]
    InvalidProtobuf {
        type_url: &'static str,
        source: prost::DecodeError,
    },
    #[error("Invalid JSON representation of {type_url}: {source}")]
    InvalidJson {
        type_url: &'static str,
        source: serde_json::Error,
    },
    #[error("Missing field {field:?} in {type_url}")]
    MissingField {
        type_url: &'static str,
        field: &'static str,
    },
    #[error("Data JSON must be an object carrying an \"@type\" key")]
    MalformedData,
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error(transparent)]
    Coin(#[from] CoinError),
}
