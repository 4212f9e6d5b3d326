use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use terra::{AminoMsg, Any, AnyMsg};

#[derive(clap::Parser)]
pub(crate) enum Subcommand {
    /// Convert an Amino JSON message to Data JSON
    AminoToData {
        /// Amino JSON, e.g. {"type":"bank/MsgSend","value":{...}}
        json: String,
    },
    /// Convert a Data JSON message to Amino JSON
    DataToAmino {
        /// Data JSON, e.g. {"@type":"/cosmos.bank.v1beta1.MsgSend",...}
        json: String,
    },
    /// Encode a Data JSON message as its type URL plus base64 protobuf
    DataToProto {
        /// Data JSON
        json: String,
    },
    /// Decode a base64 protobuf message into Data JSON
    ProtoToData {
        /// Protobuf type URL, e.g. /cosmos.bank.v1beta1.MsgSend
        type_url: String,
        /// Base64-encoded protobuf body
        body: String,
    },
}

pub(crate) fn go(sub: Subcommand) -> Result<()> {
    match sub {
        Subcommand::AminoToData { json } => {
            let amino: AminoMsg = serde_json::from_str(&json)?;
            let msg = AnyMsg::from_amino(amino)?;
            println!("{}", serde_json::to_string_pretty(&msg.to_data()?)?);
        }
        Subcommand::DataToAmino { json } => {
            let msg = AnyMsg::from_data(serde_json::from_str(&json)?)?;
            println!("{}", serde_json::to_string_pretty(&msg.to_amino()?)?);
        }
        Subcommand::DataToProto { json } => {
            let msg = AnyMsg::from_data(serde_json::from_str(&json)?)?;
            let any = msg.to_any();
            println!("{}", any.type_url);
            println!("{}", STANDARD.encode(&any.value));
        }
        Subcommand::ProtoToData { type_url, body } => {
            let any = Any {
                type_url,
                value: STANDARD.decode(body)?,
            };
            let msg = AnyMsg::from_any(&any)?;
            println!("{}", serde_json::to_string_pretty(&msg.to_data()?)?);
        }
    }
    Ok(())
}
