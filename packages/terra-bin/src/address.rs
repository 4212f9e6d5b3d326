use anyhow::Result;
use terra::{
    family::{account_from_val_oper, val_oper_from_account},
    AddressFamily, AddressHrp, RawAddress,
};

#[derive(clap::Parser)]
pub(crate) enum Subcommand {
    /// Check whether an address belongs to a family
    Validate {
        /// Family to check against, e.g. account or validator-operator
        family: AddressFamily,
        /// Address to check
        address: String,
        /// Require this exact root prefix, e.g. terra
        #[clap(long)]
        prefix: Option<AddressHrp>,
    },
    /// Print the root chain prefix of an address
    Prefix {
        /// Family the address belongs to
        family: AddressFamily,
        /// Address to strip
        address: String,
    },
    /// Derive a family's string from an address sharing the same payload
    Derive {
        /// Target family
        family: AddressFamily,
        /// Source address
        address: String,
        /// Root prefix to derive under, e.g. terra
        #[clap(long)]
        prefix: AddressHrp,
    },
    /// Recover the account address embedded in a validator operator address
    AccountFromValoper {
        /// Validator operator address
        address: String,
    },
    /// Derive the validator operator address for an account address
    ValoperFromAccount {
        /// Account address
        address: String,
        /// Root prefix to derive under, e.g. terra
        #[clap(long)]
        prefix: AddressHrp,
    },
    /// Print the address for a different chain
    ChangeAddressType {
        /// Original address
        orig: RawAddress,
        /// Destination address HRP (human-readable part)
        hrp: AddressHrp,
    },
}

pub(crate) fn go(sub: Subcommand) -> Result<()> {
    match sub {
        Subcommand::Validate {
            family,
            address,
            prefix,
        } => {
            let valid = match prefix {
                Some(root) => family.is_valid_with_prefix(&address, root),
                None => family.is_valid(&address),
            };
            println!("{valid}");
        }
        Subcommand::Prefix { family, address } => {
            println!("{}", family.root_prefix(&address)?);
        }
        Subcommand::Derive {
            family,
            address,
            prefix,
        } => {
            println!("{}", family.derive(&address, prefix)?);
        }
        Subcommand::AccountFromValoper { address } => {
            println!("{}", account_from_val_oper(&address)?);
        }
        Subcommand::ValoperFromAccount { address, prefix } => {
            println!("{}", val_oper_from_account(&address, prefix)?);
        }
        Subcommand::ChangeAddressType { orig, hrp } => {
            println!("{}", orig.with_hrp(hrp));
        }
    }
    Ok(())
}
