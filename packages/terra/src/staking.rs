//! Staking module messages.

use cosmos_sdk_proto::cosmos::staking::v1beta1::{
    MsgDelegate as ProtoMsgDelegate, MsgUndelegate as ProtoMsgUndelegate,
};

use crate::{error::MsgError, msg::Msg, Address, Coin, HasAddress};

/// Delegate coins from an account to a validator.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MsgDelegate {
    /// Delegating account
    pub delegator_address: Address,
    /// Validator operator address receiving the delegation
    pub validator_address: Address,
    /// Amount to delegate
    pub amount: Coin,
}

impl Msg for MsgDelegate {
    const TYPE_URL: &'static str = "/cosmos.staking.v1beta1.MsgDelegate";
    const AMINO_TYPE: &'static str = "staking/MsgDelegate";
    type Proto = ProtoMsgDelegate;

    fn to_proto(&self) -> ProtoMsgDelegate {
        ProtoMsgDelegate {
            delegator_address: self.delegator_address.get_address_string(),
            validator_address: self.validator_address.get_address_string(),
            amount: Some(self.amount.clone().into()),
        }
    }

    fn from_proto(proto: ProtoMsgDelegate) -> Result<Self, MsgError> {
        Ok(MsgDelegate {
            delegator_address: proto.delegator_address.parse()?,
            validator_address: proto.validator_address.parse()?,
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

/// Undelegate coins from a validator back to an account.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MsgUndelegate {
    /// Delegating account
    pub delegator_address: Address,
    /// Validator operator address the delegation is withdrawn from
    pub validator_address: Address,
    /// Amount to undelegate
    pub amount: Coin,
}

impl Msg for MsgUndelegate {
    const TYPE_URL: &'static str = "/cosmos.staking.v1beta1.MsgUndelegate";
    const AMINO_TYPE: &'static str = "staking/MsgUndelegate";
    type Proto = ProtoMsgUndelegate;

    fn to_proto(&self) -> ProtoMsgUndelegate {
        ProtoMsgUndelegate {
            delegator_address: self.delegator_address.get_address_string(),
            validator_address: self.validator_address.get_address_string(),
            amount: Some(self.amount.clone().into()),
        }
    }

    fn from_proto(proto: ProtoMsgUndelegate) -> Result<Self, MsgError> {
        Ok(MsgUndelegate {
            delegator_address: proto.delegator_address.parse()?,
            validator_address: proto.validator_address.parse()?,
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
