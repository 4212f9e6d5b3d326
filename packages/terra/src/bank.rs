//! Bank module messages.

use cosmos_sdk_proto::cosmos::bank::v1beta1::MsgSend as ProtoMsgSend;

use crate::{error::MsgError, msg::Msg, Address, Coin, HasAddress};

/// Transfer coins from one account to another.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MsgSend {
    /// Source of funds
    pub from_address: Address,
    /// Destination of funds
    pub to_address: Address,
    /// Funds to be sent
    pub amount: Vec<Coin>,
}

impl Msg for MsgSend {
    const TYPE_URL: &'static str = "/cosmos.bank.v1beta1.MsgSend";
    const AMINO_TYPE: &'static str = "bank/MsgSend";
    type Proto = ProtoMsgSend;

    fn to_proto(&self) -> ProtoMsgSend {
        ProtoMsgSend {
            from_address: self.from_address.get_address_string(),
            to_address: self.to_address.get_address_string(),
            amount: self.amount.iter().cloned().map(Into::into).collect(),
        }
    }

    fn from_proto(proto: ProtoMsgSend) -> Result<Self, MsgError> {
        Ok(MsgSend {
            from_address: proto.from_address.parse()?,
            to_address: proto.to_address.parse()?,
            amount: proto
                .amount
                .into_iter()
                .map(Coin::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}
