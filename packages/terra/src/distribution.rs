//! Distribution module messages.

use cosmos_sdk_proto::cosmos::distribution::v1beta1::MsgWithdrawDelegatorReward as ProtoMsgWithdrawDelegatorReward;

use crate::{error::MsgError, msg::Msg, Address, HasAddress};

/// Withdraw the accumulated delegation rewards from a single validator.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MsgWithdrawDelegatorReward {
    /// Delegating account withdrawing its rewards
    pub delegator_address: Address,
    /// Validator operator address the rewards accrued with
    pub validator_address: Address,
}

impl Msg for MsgWithdrawDelegatorReward {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward";
    // The legacy Amino registration predates the proto rename and is missing
    // the "or": MsgWithdrawDelegationReward, not MsgWithdrawDelegatorReward.
    const AMINO_TYPE: &'static str = "distribution/MsgWithdrawDelegationReward";
    type Proto = ProtoMsgWithdrawDelegatorReward;

    fn to_proto(&self) -> ProtoMsgWithdrawDelegatorReward {
        ProtoMsgWithdrawDelegatorReward {
            delegator_address: self.delegator_address.get_address_string(),
            validator_address: self.validator_address.get_address_string(),
        }
    }

    fn from_proto(proto: ProtoMsgWithdrawDelegatorReward) -> Result<Self, MsgError> {
        Ok(MsgWithdrawDelegatorReward {
            delegator_address: proto.delegator_address.parse()?,
            validator_address: proto.validator_address.parse()?,
        })
    }
}
