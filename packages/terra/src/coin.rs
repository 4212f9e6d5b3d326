use std::{fmt::Display, str::FromStr};

use cosmos_sdk_proto::cosmos::base::v1beta1::Coin as ProtoCoin;

use crate::error::CoinError;

/// A denomination and amount pair.
///
/// Both JSON wire shapes carry the amount as a decimal string per Cosmos
/// convention, so the serde representation does too. The in-memory amount is
/// a plain integer.
#[derive(PartialEq, Eq, Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Coin {
    /// Denomination, e.g. `uluna` or a `factory/{creator}/{subdenom}` value.
    pub denom: String,
    /// Amount in the smallest unit of the denomination.
    #[serde(with = "string_amount")]
    pub amount: u128,
}

impl Coin {
    /// Convenience constructor.
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Coin {
            denom: denom.into(),
            amount,
        }
    }
}

mod string_amount {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(amount: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(amount)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

impl From<Coin> for ProtoCoin {
    fn from(Coin { denom, amount }: Coin) -> Self {
        ProtoCoin {
            denom,
            amount: amount.to_string(),
        }
    }
}

impl TryFrom<ProtoCoin> for Coin {
    type Error = CoinError;

    fn try_from(ProtoCoin { denom, amount }: ProtoCoin) -> Result<Self, CoinError> {
        let parsed = amount.parse().map_err(|source| CoinError::InvalidAmount {
            input: amount,
            source,
        })?;
        Ok(Coin {
            denom,
            amount: parsed,
        })
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = CoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CoinError::Empty);
        }

        let denom_first_index = s
            .char_indices()
            .find(|(_, char)| !char.is_ascii_digit())
            .map(|(index, _)| index);

        match denom_first_index {
            None => Err(CoinError::MissingDenom {
                input: s.to_owned(),
            }),
            Some(0) => Err(CoinError::MissingAmount {
                input: s.to_owned(),
            }),
            Some(denom_first_index) => {
                let amount = &s[..denom_first_index];
                let denom = &s[denom_first_index..];

                for char in denom.chars() {
                    if !char.is_ascii_alphanumeric() && char != '/' {
                        return Err(CoinError::InvalidDenom {
                            input: s.to_owned(),
                        });
                    }
                }

                Ok(Coin {
                    denom: denom.to_owned(),
                    amount: amount.parse().map_err(|source| CoinError::InvalidAmount {
                        input: s.to_owned(),
                        source,
                    })?,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::Arbitrary;

    use super::*;

    fn parse_coin(s: &str) -> Result<Coin, CoinError> {
        s.parse()
    }

    #[test]
    fn sanity() {
        assert_eq!(parse_coin("1uluna").unwrap(), Coin::new("uluna", 1));
        parse_coin("1.523uluna").unwrap_err();
        parse_coin("foobar").unwrap_err();
        parse_coin("123uluna!").unwrap_err();
        parse_coin("").unwrap_err();
        assert_eq!(
            parse_coin("123456factory/terra12g96ahplpf78558cv5pyunus2m66guykt96lvc/lvn1").unwrap(),
            Coin::new(
                "factory/terra12g96ahplpf78558cv5pyunus2m66guykt96lvc/lvn1",
                123456
            )
        );
    }

    #[test]
    fn json_amount_is_a_string() {
        let coin = Coin::new("uluna", 1000000);
        let json = serde_json::to_string(&coin).unwrap();
        assert_eq!(json, r#"{"denom":"uluna","amount":"1000000"}"#);
        let parsed: Coin = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, coin);
    }

    #[test]
    fn proto_roundtrip() {
        let coin = Coin::new("uluna", u128::MAX);
        let proto = ProtoCoin::from(coin.clone());
        assert_eq!(proto.amount, coin.amount.to_string());
        assert_eq!(Coin::try_from(proto).unwrap(), coin);

        Coin::try_from(ProtoCoin {
            denom: "uluna".to_owned(),
            amount: "not-a-number".to_owned(),
        })
        .unwrap_err();
    }

    #[derive(Clone, Debug)]
    struct DenomString(String);

    impl Arbitrary for DenomString {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            // See https://github.com/BurntSushi/quickcheck/issues/279
            let sizes = (3..20).collect::<Vec<_>>();
            let letters = ('a'..='z').collect::<Vec<_>>();
            DenomString(
                (1..*g.choose(&sizes).unwrap())
                    .map(|_| *g.choose(&letters).unwrap())
                    .collect(),
            )
        }
    }

    quickcheck::quickcheck! {
        fn roundtrip(amount: u128, denom: DenomString) -> bool {
            let denom = denom.0;
            let expected = Coin::new(&denom, amount);
            let actual = parse_coin(&format!("{amount}{denom}")).unwrap();
            assert_eq!(expected, actual);
            true
        }
    }
}
