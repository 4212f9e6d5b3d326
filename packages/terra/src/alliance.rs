//! Alliance module messages.
//!
//! Like the token factory, the alliance protos are not part of
//! `cosmos-sdk-proto`, so the prost struct is hand-patched below.

use crate::{error::MsgError, msg::Msg, Address, HasAddress};

/// Claim the rewards accrued by an alliance delegation for one alliance
/// denom.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MsgClaimDelegationRewards {
    /// Delegating account claiming its rewards
    pub delegator_address: Address,
    /// Validator operator address the delegation sits with
    pub validator_address: Address,
    /// Alliance denom the rewards accrued in
    pub denom: String,
}

impl Msg for MsgClaimDelegationRewards {
    const TYPE_URL: &'static str = "/alliance.alliance.MsgClaimDelegationRewards";
    const AMINO_TYPE: &'static str = "alliance/MsgClaimDelegationRewards";
    type Proto = proto::MsgClaimDelegationRewards;

    fn to_proto(&self) -> proto::MsgClaimDelegationRewards {
        proto::MsgClaimDelegationRewards {
            delegator_address: self.delegator_address.get_address_string(),
            validator_address: self.validator_address.get_address_string(),
            denom: self.denom.clone(),
        }
    }

    fn from_proto(proto: proto::MsgClaimDelegationRewards) -> Result<Self, MsgError> {
        Ok(MsgClaimDelegationRewards {
            delegator_address: proto.delegator_address.parse()?,
            validator_address: proto.validator_address.parse()?,
            denom: proto.denom,
        })
    }
}

#[allow(missing_docs)]
pub mod proto {
    //! Hand-patched prost-build output for the alliance protos.

    /// Claim rewards for one (delegator, validator, denom) triple.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgClaimDelegationRewards {
        #[prost(string, tag = "1")]
        pub delegator_address: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub validator_address: ::prost::alloc::string::String,
        #[prost(string, tag = "3")]
        pub denom: ::prost::alloc::string::String,
    }
}

#[cfg(test)]
mod tests {
    use crate::{address::RawAddress, family::val_oper_from_account, AddressHrp};

    use super::*;

    fn sample() -> MsgClaimDelegationRewards {
        let terra = AddressHrp::from_static("terra");
        let delegator = RawAddress::from([6; 20]).with_hrp(terra);
        let validator = val_oper_from_account(&delegator.to_string(), terra).unwrap();
        MsgClaimDelegationRewards {
            delegator_address: delegator,
            validator_address: validator,
            denom: "ibc/deadbeef".to_owned(),
        }
    }

    #[test]
    fn amino_roundtrip() {
        let amino = sample().to_amino().unwrap();
        assert_eq!(amino.type_, "alliance/MsgClaimDelegationRewards");
        assert_eq!(
            MsgClaimDelegationRewards::from_amino(amino).unwrap(),
            sample()
        );
    }

    #[test]
    fn data_roundtrip() {
        let data = sample().to_data().unwrap();
        assert_eq!(data["@type"], "/alliance.alliance.MsgClaimDelegationRewards");
        assert_eq!(data["denom"], "ibc/deadbeef");
        assert_eq!(
            MsgClaimDelegationRewards::from_data(data).unwrap(),
            sample()
        );
    }

    #[test]
    fn proto_roundtrip() {
        let any = sample().to_any();
        assert_eq!(
            MsgClaimDelegationRewards::from_any(&any).unwrap(),
            sample()
        );
    }
}
