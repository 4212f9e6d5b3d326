//! Token factory module messages.
//!
//! The token factory protos are not shipped in `cosmos-sdk-proto`, so the
//! prost structs live in the [proto] submodule below.

use crate::{error::MsgError, msg::Msg, Address, Coin, HasAddress};

/// Create a new denom under the sender's namespace.
///
/// The resulting denom is `factory/{sender}/{subdenom}`, with the sender as
/// its initial admin.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MsgCreateDenom {
    /// Account creating and administering the denom
    pub sender: Address,
    /// Subdenom, up to 44 alphanumeric characters
    pub subdenom: String,
}

impl Msg for MsgCreateDenom {
    const TYPE_URL: &'static str = "/osmosis.tokenfactory.v1beta1.MsgCreateDenom";
    const AMINO_TYPE: &'static str = "tokenfactory/MsgCreateDenom";
    type Proto = proto::MsgCreateDenom;

    fn to_proto(&self) -> proto::MsgCreateDenom {
        proto::MsgCreateDenom {
            sender: self.sender.get_address_string(),
            subdenom: self.subdenom.clone(),
        }
    }

    fn from_proto(proto: proto::MsgCreateDenom) -> Result<Self, MsgError> {
        Ok(MsgCreateDenom {
            sender: proto.sender.parse()?,
            subdenom: proto.subdenom,
        })
    }
}

/// Mint more of a token factory denom. Only the denom admin may do this.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MsgMint {
    /// Denom admin
    pub sender: Address,
    /// Denom and amount to mint
    pub amount: Coin,
}

impl Msg for MsgMint {
    const TYPE_URL: &'static str = "/osmosis.tokenfactory.v1beta1.MsgMint";
    const AMINO_TYPE: &'static str = "tokenfactory/MsgMint";
    type Proto = proto::MsgMint;

    fn to_proto(&self) -> proto::MsgMint {
        proto::MsgMint {
            sender: self.sender.get_address_string(),
            amount: Some(self.amount.clone().into()),
        }
    }

    fn from_proto(proto: proto::MsgMint) -> Result<Self, MsgError> {
        Ok(MsgMint {
            sender: proto.sender.parse()?,
            amount: proto
                .amount
                .ok_or(MsgError::MissingField {
                    type_url: Self::TYPE_URL,
                    field: "amount",
                })?
                .try_into()?,
        })
    }
}

/// Burn some of a token factory denom. Only the denom admin may do this.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MsgBurn {
    /// Denom admin
    pub sender: Address,
    /// Denom and amount to burn
    pub amount: Coin,
    /// Account the burned tokens are taken from
    pub burn_from_address: Address,
}

impl Msg for MsgBurn {
    const TYPE_URL: &'static str = "/osmosis.tokenfactory.v1beta1.MsgBurn";
    const AMINO_TYPE: &'static str = "tokenfactory/MsgBurn";
    type Proto = proto::MsgBurn;

    fn to_proto(&self) -> proto::MsgBurn {
        proto::MsgBurn {
            sender: self.sender.get_address_string(),
            amount: Some(self.amount.clone().into()),
            burn_from_address: self.burn_from_address.get_address_string(),
        }
    }

    fn from_proto(proto: proto::MsgBurn) -> Result<Self, MsgError> {
        Ok(MsgBurn {
            sender: proto.sender.parse()?,
            amount: proto
                .amount
                .ok_or(MsgError::MissingField {
                    type_url: Self::TYPE_URL,
                    field: "amount",
                })?
                .try_into()?,
            burn_from_address: proto.burn_from_address.parse()?,
        })
    }
}

#[allow(missing_docs)]
pub mod proto {
    //! Hand-patched prost-build output for the token factory protos.

    use cosmos_sdk_proto::cosmos::base::v1beta1::Coin;

    /// Request creation of a new denom named `factory/{sender}/{subdenom}`.
    /// The (sender, subdenom) pair must be unique.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgCreateDenom {
        #[prost(string, tag = "1")]
        pub sender: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub subdenom: ::prost::alloc::string::String,
    }

    /// Mint tokens for a denom administered by the sender.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgMint {
        #[prost(string, tag = "1")]
        pub sender: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "2")]
        pub amount: ::core::option::Option<Coin>,
    }

    /// Burn tokens from a denom administered by the sender.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgBurn {
        #[prost(string, tag = "1")]
        pub sender: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "2")]
        pub amount: ::core::option::Option<Coin>,
        #[prost(string, tag = "3")]
        pub burn_from_address: ::prost::alloc::string::String,
    }
}
