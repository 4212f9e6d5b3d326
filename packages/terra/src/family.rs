//! The five bech32 address/pubkey families and conversions between them.
//!
//! Every family shares the same payload bytes and differs only in the fixed
//! suffix appended to the chain's root prefix: `terra`, `terravaloper`,
//! `terravalconspub` and friends all name the same underlying 20 bytes.

use strum_macros::{Display, EnumIter, EnumString};

use crate::{address::RawAddress, error::AddressError, Address, AddressHrp};

/// The closed set of address/pubkey families, each carrying its fixed
/// prefix suffix as data.
///
/// Validation and derivation are implemented once over this table rather
/// than per family.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumString, EnumIter)]
pub enum AddressFamily {
    /// Plain account address, no suffix.
    #[strum(serialize = "account")]
    Account,
    /// Public key associated with an account.
    #[strum(serialize = "account-pubkey")]
    AccountPubKey,
    /// A validator's operator key.
    #[strum(serialize = "validator-operator")]
    ValidatorOperator,
    /// Public key associated with a validator operator.
    #[strum(serialize = "validator-operator-pubkey")]
    ValidatorOperatorPubKey,
    /// A validator's consensus key.
    #[strum(serialize = "validator-consensus")]
    ValidatorConsensus,
}

impl AddressFamily {
    /// The fixed suffix appended to the root prefix for this family.
    pub const fn suffix(self) -> &'static str {
        match self {
            AddressFamily::Account => "",
            AddressFamily::AccountPubKey => "pub",
            AddressFamily::ValidatorOperator => "valoper",
            AddressFamily::ValidatorOperatorPubKey => "valoperpub",
            AddressFamily::ValidatorConsensus => "valcons",
        }
    }

    /// Accepted payload sizes. Only plain accounts come in the longer
    /// contract-account flavor.
    fn accepts_byte_count(self, count: usize) -> bool {
        match self {
            AddressFamily::Account => count == 20 || count == 32,
            _ => count == 20,
        }
    }

    /// Decode `s` and keep it only if the payload size fits this family.
    ///
    /// This is the single failure-absorbing point of the validators: any
    /// decode error (bad checksum, bad character set, bad separator, bad
    /// payload size) comes out as [None], never as an error.
    fn decode(self, s: &str) -> Option<(AddressHrp, RawAddress)> {
        let (hrp, raw_address) = RawAddress::parse_with_hrp(s).ok()?;
        let hrp = AddressHrp::from_hrp(hrp).ok()?;
        self.accepts_byte_count(raw_address.byte_count())
            .then_some((hrp, raw_address))
    }

    /// Does the decoded prefix look like a root prefix plus this family's
    /// suffix?
    ///
    /// The root portion must be 2 to 20 lowercase ASCII letters.
    fn matches_prefix_pattern(self, hrp: AddressHrp) -> bool {
        match hrp.as_str().strip_suffix(self.suffix()) {
            Some(root) => {
                (2..=20).contains(&root.len()) && root.bytes().all(|b| b.is_ascii_lowercase())
            }
            None => false,
        }
    }

    /// Check whether `s` is a well-formed address of this family under any
    /// plausible root prefix.
    ///
    /// Never fails: malformed input is simply not a valid address.
    pub fn is_valid(self, s: &str) -> bool {
        match self.decode(s) {
            Some((hrp, _)) => self.matches_prefix_pattern(hrp),
            None => false,
        }
    }

    /// Check whether `s` is a well-formed address of this family for the
    /// given root prefix exactly.
    pub fn is_valid_with_prefix(self, s: &str, root: AddressHrp) -> bool {
        match self.decode(s) {
            Some((hrp, _)) => {
                let expected = format!("{root}{}", self.suffix());
                hrp.as_str() == expected
            }
            None => false,
        }
    }

    /// The full HRP for this family under the given root prefix, e.g.
    /// `terravaloper` for [AddressFamily::ValidatorOperator] under `terra`.
    pub fn full_hrp(self, root: AddressHrp) -> Result<AddressHrp, AddressError> {
        match self {
            AddressFamily::Account => Ok(root),
            _ => AddressHrp::new(format!("{root}{}", self.suffix())),
        }
    }

    /// Strip this family's suffix off the decoded prefix of `s`, returning
    /// the chain's root prefix.
    ///
    /// Unlike the validators, decode failures propagate. An address whose
    /// prefix does not end in this family's suffix is also an error rather
    /// than a garbled slice.
    pub fn root_prefix(self, address: &str) -> Result<AddressHrp, AddressError> {
        let (hrp, _) = RawAddress::parse_with_hrp(address)?;
        let hrp = AddressHrp::from_hrp(hrp)?;
        match hrp.as_str().strip_suffix(self.suffix()) {
            Some(root) => AddressHrp::new(root),
            None => Err(AddressError::WrongFamily {
                address: address.to_owned(),
                family: self,
                suffix: self.suffix(),
            }),
        }
    }

    /// Re-encode the payload of `source` under this family's prefix for the
    /// given root.
    ///
    /// Derivation is payload-preserving: the bytes are never reinterpreted,
    /// only the prefix text changes. Decode failures propagate.
    pub fn derive(self, source: &str, root: AddressHrp) -> Result<Address, AddressError> {
        let (_, raw_address) = RawAddress::parse_with_hrp(source)?;
        Ok(raw_address.with_hrp(self.full_hrp(root)?))
    }
}

/// Derive the validator operator address sharing an account address's payload.
pub fn val_oper_from_account(account: &str, root: AddressHrp) -> Result<Address, AddressError> {
    AddressFamily::ValidatorOperator.derive(account, root)
}

/// Recover the account address embedded in a validator operator address.
///
/// This direction needs no explicit root prefix: it is recovered from the
/// operator address itself.
pub fn account_from_val_oper(val_oper: &str) -> Result<Address, AddressError> {
    let root = AddressFamily::ValidatorOperator.root_prefix(val_oper)?;
    AddressFamily::Account.derive(val_oper, root)
}

/// Derive the account pubkey string sharing an account address's payload.
pub fn acc_pubkey_from_account(account: &str, root: AddressHrp) -> Result<Address, AddressError> {
    AddressFamily::AccountPubKey.derive(account, root)
}

/// Derive the validator operator pubkey string sharing a validator operator
/// address's payload.
pub fn val_oper_pubkey_from_val_oper(
    val_oper: &str,
    root: AddressHrp,
) -> Result<Address, AddressError> {
    AddressFamily::ValidatorOperatorPubKey.derive(val_oper, root)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn terra() -> AddressHrp {
        AddressHrp::from_static("terra")
    }

    fn sample_account() -> Address {
        RawAddress::from([7; 20]).with_hrp(terra())
    }

    fn sample_contract_account() -> Address {
        RawAddress::from([9; 32]).with_hrp(terra())
    }

    #[test]
    fn validate_account_with_prefix() {
        let s = sample_account().to_string();
        assert!(AddressFamily::Account.is_valid_with_prefix(&s, terra()));
        assert!(!AddressFamily::Account.is_valid_with_prefix(&s, AddressHrp::from_static("terrax")));
        assert!(!AddressFamily::Account.is_valid_with_prefix(&s, AddressHrp::from_static("osmo")));
    }

    #[test]
    fn validate_account_pattern() {
        let s = sample_account().to_string();
        assert!(AddressFamily::Account.is_valid(&s));
        assert!(!AddressFamily::ValidatorOperator.is_valid(&s));
        assert!(!AddressFamily::ValidatorConsensus.is_valid(&s));
    }

    #[test]
    fn validate_contract_account_lengths() {
        let s = sample_contract_account().to_string();
        // 32-byte payloads are only valid for plain accounts
        assert!(AddressFamily::Account.is_valid_with_prefix(&s, terra()));
        let val_oper = AddressFamily::ValidatorOperator
            .derive(&s, terra())
            .unwrap()
            .to_string();
        assert!(!AddressFamily::ValidatorOperator.is_valid_with_prefix(&val_oper, terra()));
    }

    #[test]
    fn validate_garbage_never_panics() {
        for family in AddressFamily::iter() {
            assert!(!family.is_valid("not-a-valid-bech32-string"));
            assert!(!family.is_valid(""));
            assert!(!family.is_valid("terra1"));
            assert!(!family.is_valid_with_prefix("not-a-valid-bech32-string", terra()));
        }
    }

    #[test]
    fn uppercase_input_still_validates() {
        // Bech32 itself is case-insensitive, but the decoded prefix is
        // lowercased before the pattern check, so this stays valid.
        let s = sample_account().to_string().to_uppercase();
        assert!(AddressFamily::Account.is_valid(&s));
    }

    #[test]
    fn derive_val_oper() {
        let account = sample_account();
        let s = account.to_string();
        let val_oper = val_oper_from_account(&s, terra()).unwrap();
        assert_eq!(val_oper.hrp().as_str(), "terravaloper");
        assert_eq!(val_oper.raw(), account.raw());
        assert!(AddressFamily::ValidatorOperator.is_valid(&val_oper.to_string()));
        assert!(AddressFamily::ValidatorOperator
            .is_valid_with_prefix(&val_oper.to_string(), terra()));
    }

    #[test]
    fn derive_pubkeys() {
        let account = sample_account();
        let acc_pub = acc_pubkey_from_account(&account.to_string(), terra()).unwrap();
        assert_eq!(acc_pub.hrp().as_str(), "terrapub");
        assert_eq!(acc_pub.raw(), account.raw());

        let val_oper = val_oper_from_account(&account.to_string(), terra()).unwrap();
        let val_pub = val_oper_pubkey_from_val_oper(&val_oper.to_string(), terra()).unwrap();
        assert_eq!(val_pub.hrp().as_str(), "terravaloperpub");
        assert_eq!(val_pub.raw(), account.raw());
        assert!(AddressFamily::ValidatorOperatorPubKey.is_valid(&val_pub.to_string()));
    }

    #[test]
    fn round_trip_account_val_oper() {
        let account = sample_account();
        let val_oper = val_oper_from_account(&account.to_string(), terra()).unwrap();
        let back = account_from_val_oper(&val_oper.to_string()).unwrap();
        assert_eq!(account, back);
        assert_eq!(account.to_string(), back.to_string());
    }

    #[test]
    fn root_prefix_of_derived() {
        let account = sample_account();
        let s = account.to_string();
        for family in [
            AddressFamily::AccountPubKey,
            AddressFamily::ValidatorOperator,
            AddressFamily::ValidatorOperatorPubKey,
        ] {
            let derived = family.derive(&s, terra()).unwrap();
            assert_eq!(family.root_prefix(&derived.to_string()).unwrap(), terra());
        }
        assert_eq!(AddressFamily::Account.root_prefix(&s).unwrap(), terra());
    }

    #[test]
    fn root_prefix_wrong_family() {
        let s = sample_account().to_string();
        AddressFamily::ValidatorOperator.root_prefix(&s).unwrap_err();
        AddressFamily::ValidatorOperator
            .root_prefix("not-a-valid-bech32-string")
            .unwrap_err();
    }

    #[test]
    fn derive_garbage_fails() {
        val_oper_from_account("not-a-valid-bech32-string", terra()).unwrap_err();
        account_from_val_oper("not-a-valid-bech32-string").unwrap_err();
    }

    quickcheck::quickcheck! {
        fn derive_preserves_payload(raw_address: RawAddress, hrp: AddressHrp) -> bool {
            let account = raw_address.with_hrp(hrp);
            let val_oper = val_oper_from_account(&account.to_string(), hrp).unwrap();
            assert_eq!(val_oper.raw(), account.raw());
            let back = account_from_val_oper(&val_oper.to_string()).unwrap();
            assert_eq!(back, account);
            true
        }
    }
}
