//! Conversions between the three wire representations of chain messages.
//!
//! Every message supports three shapes: the Amino JSON envelope
//! (`{"type": "...", "value": {...}}`), the Data JSON shape used by REST
//! endpoints (`{"@type": "/...", ...fields}`), and the binary protobuf
//! encoding wrapped in an [Any].

use cosmos_sdk_proto::Any;
use prost::Message as _;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    alliance::MsgClaimDelegationRewards,
    bank::MsgSend,
    distribution::MsgWithdrawDelegatorReward,
    error::MsgError,
    staking::{MsgDelegate, MsgUndelegate},
    tokenfactory::{MsgBurn, MsgCreateDenom, MsgMint},
};

/// The Amino JSON envelope: a type tag plus the message body.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AminoMsg {
    /// Amino type tag, e.g. `bank/MsgSend`.
    #[serde(rename = "type")]
    pub type_: String,
    /// Message body.
    pub value: serde_json::Value,
}

/// A chain message convertible between Amino JSON, Data JSON, and protobuf.
///
/// Implementors provide the two type tags, the prost counterpart, and the
/// conversions to and from it; the three wire representations fall out of
/// the provided methods.
pub trait Msg: Serialize + DeserializeOwned + Sized {
    /// Protobuf type URL, e.g. `/cosmos.bank.v1beta1.MsgSend`.
    const TYPE_URL: &'static str;
    /// Amino type tag, e.g. `bank/MsgSend`.
    const AMINO_TYPE: &'static str;
    /// The prost struct this message encodes through.
    type Proto: prost::Message + Default;

    /// Convert to the prost representation.
    fn to_proto(&self) -> Self::Proto;

    /// Convert from the prost representation.
    ///
    /// This is where address strings are parsed and coin amounts are
    /// checked, so it can fail even when the protobuf itself decoded fine.
    fn from_proto(proto: Self::Proto) -> Result<Self, MsgError>;

    /// Encode as a protobuf [Any].
    fn to_any(&self) -> Any {
        Any {
            type_url: Self::TYPE_URL.to_owned(),
            value: self.to_proto().encode_to_vec(),
        }
    }

    /// Decode from a protobuf [Any], checking the type URL.
    fn from_any(any: &Any) -> Result<Self, MsgError> {
        if any.type_url != Self::TYPE_URL {
            return Err(MsgError::MismatchedTypeUrl {
                expected: Self::TYPE_URL,
                actual: any.type_url.clone(),
            });
        }
        let proto =
            Self::Proto::decode(any.value.as_slice()).map_err(|source| MsgError::InvalidProtobuf {
                type_url: Self::TYPE_URL,
                source,
            })?;
        Self::from_proto(proto)
    }

    /// Wrap in the Amino JSON envelope.
    fn to_amino(&self) -> Result<AminoMsg, MsgError> {
        Ok(AminoMsg {
            type_: Self::AMINO_TYPE.to_owned(),
            value: serde_json::to_value(self).map_err(|source| MsgError::InvalidJson {
                type_url: Self::TYPE_URL,
                source,
            })?,
        })
    }

    /// Unwrap from the Amino JSON envelope, checking the type tag.
    fn from_amino(amino: AminoMsg) -> Result<Self, MsgError> {
        if amino.type_ != Self::AMINO_TYPE {
            return Err(MsgError::MismatchedAminoType {
                expected: Self::AMINO_TYPE,
                actual: amino.type_,
            });
        }
        serde_json::from_value(amino.value).map_err(|source| MsgError::InvalidJson {
            type_url: Self::TYPE_URL,
            source,
        })
    }

    /// Produce the Data JSON shape: the fields flattened alongside an
    /// `@type` tag.
    fn to_data(&self) -> Result<serde_json::Value, MsgError> {
        let mut value = serde_json::to_value(self).map_err(|source| MsgError::InvalidJson {
            type_url: Self::TYPE_URL,
            source,
        })?;
        match value.as_object_mut() {
            Some(map) => {
                map.insert("@type".to_owned(), Self::TYPE_URL.into());
                Ok(value)
            }
            None => Err(MsgError::MalformedData),
        }
    }

    /// Parse the Data JSON shape, checking the `@type` tag.
    fn from_data(mut data: serde_json::Value) -> Result<Self, MsgError> {
        let tag = data
            .as_object_mut()
            .and_then(|map| map.remove("@type"))
            .ok_or(MsgError::MalformedData)?;
        match tag.as_str() {
            Some(url) if url == Self::TYPE_URL => {
                serde_json::from_value(data).map_err(|source| MsgError::InvalidJson {
                    type_url: Self::TYPE_URL,
                    source,
                })
            }
            Some(url) => Err(MsgError::MismatchedTypeUrl {
                expected: Self::TYPE_URL,
                actual: url.to_owned(),
            }),
            None => Err(MsgError::MalformedData),
        }
    }
}

/// Any message supported by this package.
///
/// Use this for parsing wire values whose concrete message type is not known
/// up front, e.g. the messages inside a transaction returned by a REST
/// endpoint.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyMsg {
    /// [MsgSend]
    Send(MsgSend),
    /// [MsgDelegate]
    Delegate(MsgDelegate),
    /// [MsgUndelegate]
    Undelegate(MsgUndelegate),
    /// [MsgWithdrawDelegatorReward]
    WithdrawDelegatorReward(MsgWithdrawDelegatorReward),
    /// [MsgCreateDenom]
    CreateDenom(MsgCreateDenom),
    /// [MsgMint]
    Mint(MsgMint),
    /// [MsgBurn]
    Burn(MsgBurn),
    /// [MsgClaimDelegationRewards]
    ClaimDelegationRewards(MsgClaimDelegationRewards),
}

impl AnyMsg {
    /// The protobuf type URL of the wrapped message.
    pub fn type_url(&self) -> &'static str {
        match self {
            AnyMsg::Send(_) => MsgSend::TYPE_URL,
            AnyMsg::Delegate(_) => MsgDelegate::TYPE_URL,
            AnyMsg::Undelegate(_) => MsgUndelegate::TYPE_URL,
            AnyMsg::WithdrawDelegatorReward(_) => MsgWithdrawDelegatorReward::TYPE_URL,
            AnyMsg::CreateDenom(_) => MsgCreateDenom::TYPE_URL,
            AnyMsg::Mint(_) => MsgMint::TYPE_URL,
            AnyMsg::Burn(_) => MsgBurn::TYPE_URL,
            AnyMsg::ClaimDelegationRewards(_) => MsgClaimDelegationRewards::TYPE_URL,
        }
    }

    /// The Amino type tag of the wrapped message.
    pub fn amino_type(&self) -> &'static str {
        match self {
            AnyMsg::Send(_) => MsgSend::AMINO_TYPE,
            AnyMsg::Delegate(_) => MsgDelegate::AMINO_TYPE,
            AnyMsg::Undelegate(_) => MsgUndelegate::AMINO_TYPE,
            AnyMsg::WithdrawDelegatorReward(_) => MsgWithdrawDelegatorReward::AMINO_TYPE,
            AnyMsg::CreateDenom(_) => MsgCreateDenom::AMINO_TYPE,
            AnyMsg::Mint(_) => MsgMint::AMINO_TYPE,
            AnyMsg::Burn(_) => MsgBurn::AMINO_TYPE,
            AnyMsg::ClaimDelegationRewards(_) => MsgClaimDelegationRewards::AMINO_TYPE,
        }
    }

    /// Decode from a protobuf [Any], dispatching on the type URL.
    pub fn from_any(any: &Any) -> Result<Self, MsgError> {
        tracing::debug!("decoding protobuf Any with type URL {}", any.type_url);
        match any.type_url.as_str() {
            url if url == MsgSend::TYPE_URL => MsgSend::from_any(any).map(AnyMsg::Send),
            url if url == MsgDelegate::TYPE_URL => MsgDelegate::from_any(any).map(AnyMsg::Delegate),
            url if url == MsgUndelegate::TYPE_URL => {
                MsgUndelegate::from_any(any).map(AnyMsg::Undelegate)
            }
            url if url == MsgWithdrawDelegatorReward::TYPE_URL => {
                MsgWithdrawDelegatorReward::from_any(any).map(AnyMsg::WithdrawDelegatorReward)
            }
            url if url == MsgCreateDenom::TYPE_URL => {
                MsgCreateDenom::from_any(any).map(AnyMsg::CreateDenom)
            }
            url if url == MsgMint::TYPE_URL => MsgMint::from_any(any).map(AnyMsg::Mint),
            url if url == MsgBurn::TYPE_URL => MsgBurn::from_any(any).map(AnyMsg::Burn),
            url if url == MsgClaimDelegationRewards::TYPE_URL => {
                MsgClaimDelegationRewards::from_any(any).map(AnyMsg::ClaimDelegationRewards)
            }
            _ => Err(MsgError::UnknownTypeUrl {
                type_url: any.type_url.clone(),
            }),
        }
    }

    /// Parse from the Amino JSON envelope, dispatching on the type tag.
    pub fn from_amino(amino: AminoMsg) -> Result<Self, MsgError> {
        tracing::debug!("decoding Amino message with type tag {}", amino.type_);
        match amino.type_.as_str() {
            tag if tag == MsgSend::AMINO_TYPE => MsgSend::from_amino(amino).map(AnyMsg::Send),
            tag if tag == MsgDelegate::AMINO_TYPE => {
                MsgDelegate::from_amino(amino).map(AnyMsg::Delegate)
            }
            tag if tag == MsgUndelegate::AMINO_TYPE => {
                MsgUndelegate::from_amino(amino).map(AnyMsg::Undelegate)
            }
            tag if tag == MsgWithdrawDelegatorReward::AMINO_TYPE => {
                MsgWithdrawDelegatorReward::from_amino(amino).map(AnyMsg::WithdrawDelegatorReward)
            }
            tag if tag == MsgCreateDenom::AMINO_TYPE => {
                MsgCreateDenom::from_amino(amino).map(AnyMsg::CreateDenom)
            }
            tag if tag == MsgMint::AMINO_TYPE => MsgMint::from_amino(amino).map(AnyMsg::Mint),
            tag if tag == MsgBurn::AMINO_TYPE => MsgBurn::from_amino(amino).map(AnyMsg::Burn),
            tag if tag == MsgClaimDelegationRewards::AMINO_TYPE => {
                MsgClaimDelegationRewards::from_amino(amino).map(AnyMsg::ClaimDelegationRewards)
            }
            _ => Err(MsgError::UnknownAminoType {
                amino_type: amino.type_,
            }),
        }
    }

    /// Parse from the Data JSON shape, dispatching on the `@type` tag.
    pub fn from_data(data: serde_json::Value) -> Result<Self, MsgError> {
        let type_url = data
            .as_object()
            .and_then(|map| map.get("@type"))
            .and_then(|tag| tag.as_str())
            .ok_or(MsgError::MalformedData)?;
        match type_url {
            url if url == MsgSend::TYPE_URL => MsgSend::from_data(data).map(AnyMsg::Send),
            url if url == MsgDelegate::TYPE_URL => {
                MsgDelegate::from_data(data).map(AnyMsg::Delegate)
            }
            url if url == MsgUndelegate::TYPE_URL => {
                MsgUndelegate::from_data(data).map(AnyMsg::Undelegate)
            }
            url if url == MsgWithdrawDelegatorReward::TYPE_URL => {
                MsgWithdrawDelegatorReward::from_data(data).map(AnyMsg::WithdrawDelegatorReward)
            }
            url if url == MsgCreateDenom::TYPE_URL => {
                MsgCreateDenom::from_data(data).map(AnyMsg::CreateDenom)
            }
            url if url == MsgMint::TYPE_URL => MsgMint::from_data(data).map(AnyMsg::Mint),
            url if url == MsgBurn::TYPE_URL => MsgBurn::from_data(data).map(AnyMsg::Burn),
            url if url == MsgClaimDelegationRewards::TYPE_URL => {
                MsgClaimDelegationRewards::from_data(data).map(AnyMsg::ClaimDelegationRewards)
            }
            _ => Err(MsgError::UnknownTypeUrl {
                type_url: type_url.to_owned(),
            }),
        }
    }

    /// Encode as a protobuf [Any].
    pub fn to_any(&self) -> Any {
        match self {
            AnyMsg::Send(msg) => msg.to_any(),
            AnyMsg::Delegate(msg) => msg.to_any(),
            AnyMsg::Undelegate(msg) => msg.to_any(),
            AnyMsg::WithdrawDelegatorReward(msg) => msg.to_any(),
            AnyMsg::CreateDenom(msg) => msg.to_any(),
            AnyMsg::Mint(msg) => msg.to_any(),
            AnyMsg::Burn(msg) => msg.to_any(),
            AnyMsg::ClaimDelegationRewards(msg) => msg.to_any(),
        }
    }

    /// Wrap in the Amino JSON envelope.
    pub fn to_amino(&self) -> Result<AminoMsg, MsgError> {
        match self {
            AnyMsg::Send(msg) => msg.to_amino(),
            AnyMsg::Delegate(msg) => msg.to_amino(),
            AnyMsg::Undelegate(msg) => msg.to_amino(),
            AnyMsg::WithdrawDelegatorReward(msg) => msg.to_amino(),
            AnyMsg::CreateDenom(msg) => msg.to_amino(),
            AnyMsg::Mint(msg) => msg.to_amino(),
            AnyMsg::Burn(msg) => msg.to_amino(),
            AnyMsg::ClaimDelegationRewards(msg) => msg.to_amino(),
        }
    }

    /// Produce the Data JSON shape.
    pub fn to_data(&self) -> Result<serde_json::Value, MsgError> {
        match self {
            AnyMsg::Send(msg) => msg.to_data(),
            AnyMsg::Delegate(msg) => msg.to_data(),
            AnyMsg::Undelegate(msg) => msg.to_data(),
            AnyMsg::WithdrawDelegatorReward(msg) => msg.to_data(),
            AnyMsg::CreateDenom(msg) => msg.to_data(),
            AnyMsg::Mint(msg) => msg.to_data(),
            AnyMsg::Burn(msg) => msg.to_data(),
            AnyMsg::ClaimDelegationRewards(msg) => msg.to_data(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{address::RawAddress, Address, AddressHrp, Coin};

    use super::*;

    fn addr(byte: u8) -> Address {
        RawAddress::from([byte; 20]).with_hrp(AddressHrp::from_static("terra"))
    }

    fn sample_send() -> MsgSend {
        MsgSend {
            from_address: addr(1),
            to_address: addr(2),
            amount: vec![Coin::new("uluna", 12345)],
        }
    }

    #[test]
    fn any_msg_roundtrip_via_all_representations() {
        let msg = AnyMsg::Send(sample_send());

        let any = msg.to_any();
        assert_eq!(any.type_url, "/cosmos.bank.v1beta1.MsgSend");
        assert_eq!(AnyMsg::from_any(&any).unwrap(), msg);

        let amino = msg.to_amino().unwrap();
        assert_eq!(amino.type_, "bank/MsgSend");
        assert_eq!(AnyMsg::from_amino(amino).unwrap(), msg);

        let data = msg.to_data().unwrap();
        assert_eq!(data["@type"], "/cosmos.bank.v1beta1.MsgSend");
        assert_eq!(AnyMsg::from_data(data).unwrap(), msg);
    }

    #[test]
    fn unknown_tags_are_rejected() {
        let any = Any {
            type_url: "/cosmos.gov.v1beta1.MsgVote".to_owned(),
            value: vec![],
        };
        match AnyMsg::from_any(&any).unwrap_err() {
            MsgError::UnknownTypeUrl { type_url } => {
                assert_eq!(type_url, "/cosmos.gov.v1beta1.MsgVote")
            }
            err => panic!("unexpected error: {err}"),
        }

        let amino = AminoMsg {
            type_: "gov/MsgVote".to_owned(),
            value: serde_json::json!({}),
        };
        match AnyMsg::from_amino(amino).unwrap_err() {
            MsgError::UnknownAminoType { amino_type } => assert_eq!(amino_type, "gov/MsgVote"),
            err => panic!("unexpected error: {err}"),
        }

        AnyMsg::from_data(serde_json::json!({"no_type": true})).unwrap_err();
        AnyMsg::from_data(serde_json::json!("just a string")).unwrap_err();
    }

    #[test]
    fn mismatched_tags_are_rejected() {
        let msg = sample_send();
        let mut any = msg.to_any();
        any.type_url = "/cosmos.staking.v1beta1.MsgDelegate".to_owned();
        MsgSend::from_any(&any).unwrap_err();

        let mut amino = msg.to_amino().unwrap();
        amino.type_ = "staking/MsgDelegate".to_owned();
        MsgSend::from_amino(amino).unwrap_err();

        let mut data = msg.to_data().unwrap();
        data["@type"] = "/cosmos.staking.v1beta1.MsgDelegate".into();
        MsgSend::from_data(data).unwrap_err();
    }

    #[test]
    fn corrupt_protobuf_is_rejected() {
        let any = Any {
            type_url: MsgSend::TYPE_URL.to_owned(),
            value: vec![0xff, 0xff, 0xff],
        };
        match MsgSend::from_any(&any).unwrap_err() {
            MsgError::InvalidProtobuf { type_url, .. } => assert_eq!(type_url, MsgSend::TYPE_URL),
            err => panic!("unexpected error: {err}"),
        }
    }
}
