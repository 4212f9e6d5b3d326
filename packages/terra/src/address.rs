use std::{
    collections::HashSet,
    fmt::{Debug, Display},
    str::FromStr,
    sync::OnceLock,
};

use bech32::{Bech32, Hrp};
use parking_lot::RwLock;
use serde::de::Visitor;

use crate::error::AddressError;

/// A raw address value not connected to a specific chain.
///
/// This is the payload of a bech32 address string with the human-readable
/// part stripped off. It is useful for re-encoding the same account under a
/// different prefix, or for accepting a command line parameter or config
/// value which is prefix-agnostic.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Ord, PartialOrd)]
pub struct RawAddress(RawAddressInner);

/// Standard addresses hold 20 bytes, contract accounts hold 32.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Ord, PartialOrd)]
enum RawAddressInner {
    Twenty { raw_address: [u8; 20] },
    ThirtyTwo { raw_address: [u8; 32] },
}

impl RawAddress {
    /// Parse a bech32 address string into an HRP and [RawAddress].
    pub fn parse_with_hrp(s: &str) -> Result<(Hrp, RawAddress), AddressError> {
        let (hrp, data) = bech32::decode(s).map_err(|source| AddressError::InvalidBech32 {
            address: s.to_owned(),
            source,
        })?;

        let data = data.as_slice();
        let raw_address_inner = match data.try_into() {
            Ok(raw_address) => RawAddressInner::Twenty { raw_address },
            Err(_) => data
                .try_into()
                .map(|raw_address| RawAddressInner::ThirtyTwo { raw_address })
                .map_err(|_| AddressError::InvalidByteCount {
                    address: s.to_owned(),
                    actual: data.len(),
                })?,
        };

        Ok((hrp, RawAddress(raw_address_inner)))
    }

    /// Number of payload bytes, either 20 or 32.
    pub fn byte_count(&self) -> usize {
        self.as_ref().len()
    }

    /// Generates a new [Address] given the raw address and HRP for the chain.
    pub fn with_hrp(self, hrp: AddressHrp) -> Address {
        Address {
            raw_address: self,
            hrp,
        }
    }
}

/// Note that using this instance throws away the Human Readable Part (HRP) of the address!
impl FromStr for RawAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RawAddress::parse_with_hrp(s).map(|x| x.1)
    }
}

/// Note that using this instance throws away the Human Readable Part (HRP) of the address!
impl<'de> serde::Deserialize<'de> for RawAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(RawAddressVisitor)
    }
}

struct RawAddressVisitor;

impl Visitor<'_> for RawAddressVisitor {
    type Value = RawAddress;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("RawAddress")
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        RawAddress::parse_with_hrp(s)
            .map(|x| x.1)
            .map_err(E::custom)
    }
}

impl AsRef<[u8]> for RawAddress {
    fn as_ref(&self) -> &[u8] {
        match &self.0 {
            RawAddressInner::Twenty { raw_address } => raw_address,
            RawAddressInner::ThirtyTwo { raw_address } => raw_address,
        }
    }
}

impl From<[u8; 20]> for RawAddress {
    fn from(raw_address: [u8; 20]) -> Self {
        RawAddress(RawAddressInner::Twenty { raw_address })
    }
}

impl From<[u8; 32]> for RawAddress {
    fn from(raw_address: [u8; 32]) -> Self {
        RawAddress(RawAddressInner::ThirtyTwo { raw_address })
    }
}

/// An address on a Cosmos blockchain.
///
/// This is composed of a [RawAddress] combined with the human-readable part
/// (HRP) for the given chain. HRP is part of the bech32 standard. Note that
/// the HRP here is the full decoded prefix: for a validator operator address
/// it would be e.g. `terravaloper`, not `terra`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    raw_address: RawAddress,
    hrp: AddressHrp,
}

impl Address {
    /// Get the raw bytes without the chain's HRP.
    pub fn raw(self) -> RawAddress {
        self.raw_address
    }

    /// Get the HRP for this address.
    pub fn hrp(self) -> AddressHrp {
        self.hrp
    }
}

impl Display for Address {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        let hrp = Hrp::parse(self.hrp.0).expect("Invalid HRP");
        bech32::encode_to_fmt::<Bech32, _>(fmt, hrp, self.raw_address.as_ref())
            .expect("Encode issue");
        Ok(())
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

impl From<&Address> for String {
    fn from(address: &Address) -> Self {
        address.to_string()
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RawAddress::parse_with_hrp(s).map(|(hrp, raw_address)| {
            raw_address.with_hrp(
                AddressHrp::from_hrp(hrp).expect("parse_with_hrp gave back an invalid HRP"),
            )
        })
    }
}

/// Anything which has an on-chain [Address].
pub trait HasAddress: HasAddressHrp {
    /// Get the raw address itself.
    fn get_address(&self) -> Address;

    /// Get the string representation of the address.
    fn get_address_string(&self) -> String {
        self.get_address().to_string()
    }
}

impl HasAddress for Address {
    fn get_address(&self) -> Address {
        *self
    }
}

impl<T: HasAddress> HasAddress for &T {
    fn get_address(&self) -> Address {
        HasAddress::get_address(*self)
    }
}

/// The human-readable part (HRP) of a bech32 address.
///
/// All addresses encoded with bech32--which includes all Cosmos chains--have
/// a human-readable part, such as `terra` for Terra or `osmo` for Osmosis.
///
/// This library internally shares multiple copies of the same HRP for both
/// efficiency and ease of use of this library: it allows both this data type,
/// as well as [Address], to be [Copy].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize)]
pub struct AddressHrp(&'static str);

impl FromStr for AddressHrp {
    type Err = AddressError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AddressHrp::new(s)
    }
}

impl<'de> serde::Deserialize<'de> for AddressHrp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(AddressHrpVisitor)
    }
}

struct AddressHrpVisitor;

impl Visitor<'_> for AddressHrpVisitor {
    type Value = AddressHrp;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("AddressHrp")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse::<AddressHrp>()
            .map_err(|e| E::custom(e.to_string()))
    }
}

impl Display for AddressHrp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

type AddressHrpSet = RwLock<HashSet<&'static str>>;
static ADDRESS_HRPS: OnceLock<AddressHrpSet> = OnceLock::new();

/// Look up an interned copy of the given HRP, leaking a new one if needed.
fn intern(s: &str) -> &'static str {
    let set = ADDRESS_HRPS.get_or_init(|| RwLock::new(HashSet::new()));
    {
        if let Some(s) = set.read().get(s) {
            return s;
        }
    }
    let mut guard = set.write();
    // Deal with race condition: was this added between our read and now?
    if let Some(s) = guard.get(s) {
        return s;
    }
    let s = Box::leak(s.to_owned().into_boxed_str());
    guard.insert(s);
    s
}

impl AddressHrp {
    /// Generate a new value from a [String]-like value.
    pub fn new(s: impl AsRef<str>) -> Result<Self, AddressError> {
        let s = s.as_ref();
        if !is_valid_hrp(s) {
            return Err(AddressError::InvalidHrp { hrp: s.to_owned() });
        }
        Ok(AddressHrp(intern(s)))
    }

    /// Minor optimization over [AddressHrp::new]: use a static string for initializing.
    ///
    /// Note that this bypasses the check that the HRP is valid.
    pub fn from_static(s: &'static str) -> Self {
        AddressHrp(intern(s))
    }

    /// Convert an already-decoded [Hrp] into an interned [AddressHrp].
    pub fn from_hrp(hrp: Hrp) -> Result<Self, AddressError> {
        Ok(AddressHrp(intern(&hrp.to_lowercase())))
    }

    /// Get the raw string HRP
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

fn is_valid_hrp(hrp: &str) -> bool {
    // Unfortunately `check_hrp` isn't exposed from bech32, so doing something silly...
    Hrp::parse(hrp).is_ok()
}

/// Trait for any values that can report their bech32 HRP (human-readable part).
pub trait HasAddressHrp {
    /// Return the HRP
    fn get_address_hrp(&self) -> AddressHrp;
}

impl<T: HasAddressHrp> HasAddressHrp for &T {
    fn get_address_hrp(&self) -> AddressHrp {
        (*self).get_address_hrp()
    }
}

impl HasAddressHrp for Address {
    fn get_address_hrp(&self) -> AddressHrp {
        self.hrp
    }
}

impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(AddressVisitor)
    }
}

struct AddressVisitor;

impl Visitor<'_> for AddressVisitor {
    type Value = Address;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("bech32 address")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse().map_err(|e| E::custom(e))
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::Arbitrary;

    use super::*;

    impl Arbitrary for AddressHrp {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            AddressHrp::from_static(
                g.choose(&["terra", "juno", "stars", "osmo", "wasm", "cosmos"])
                    .unwrap(),
            )
        }
    }

    impl Arbitrary for RawAddress {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            if bool::arbitrary(g) {
                let mut raw_address = [0; 20];
                for byte in &mut raw_address {
                    *byte = u8::arbitrary(g);
                }
                RawAddress::from(raw_address)
            } else {
                let mut raw_address = [0; 32];
                for byte in &mut raw_address {
                    *byte = u8::arbitrary(g);
                }
                RawAddress::from(raw_address)
            }
        }
    }

    quickcheck::quickcheck! {
        fn roundtrip_address(hrp: AddressHrp, raw_address: RawAddress) -> bool {
            let address1 = raw_address.with_hrp(hrp);
            let s1 = address1.to_string();
            let address2: Address = s1.parse().unwrap();
            let s2 = address2.to_string();
            assert_eq!(s1, s2);
            assert_eq!(address1, address2);
            true
        }
    }

    #[test]
    fn spot_roundtrip_osmo() {
        const S: &str = "osmo168gdk6r58jdwfv49kuesq2rs747jawnn4ryvyk";
        let address: Address = S.parse().unwrap();
        assert_eq!(S, &address.to_string());
    }

    #[test]
    fn spot_roundtrip_juno() {
        const S: &str = "juno168gdk6r58jdwfv49kuesq2rs747jawnnt2584c";
        let address: Address = S.parse().unwrap();
        assert_eq!(S, &address.to_string());
    }

    #[test]
    fn byte_count() {
        let address: Address = "osmo168gdk6r58jdwfv49kuesq2rs747jawnn4ryvyk".parse().unwrap();
        assert_eq!(address.raw().byte_count(), 20);
    }

    #[test]
    fn serde_roundtrip() {
        let address: Address = "juno168gdk6r58jdwfv49kuesq2rs747jawnnt2584c".parse().unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"juno168gdk6r58jdwfv49kuesq2rs747jawnnt2584c\"");
        let parsed: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(address, parsed);
    }

    #[test]
    fn valid_hrp() {
        AddressHrp::new("terra").unwrap();
        AddressHrp::new("osmo").unwrap();
        AddressHrp::new("terravaloper").unwrap();

        // To my surprise BIP-173 actually allows digits in the HRP
        AddressHrp::new("osmo1").unwrap();
        AddressHrp::new("foobar2").unwrap();
    }

    #[test]
    fn invalid_hrp() {
        AddressHrp::new("terra with space").unwrap_err();
    }
}
