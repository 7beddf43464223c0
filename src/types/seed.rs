use itertools::Itertools;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Level-1 seed of a trigger path.
///
/// The bit list is kept canonical: tokens sorted lexically and joined with a
/// single space, so that equal seed sets compare equal regardless of the order
/// they were logged in.
#[derive(PartialEq, Eq, Debug, Clone, Hash, Default)]
pub enum Seed {
    #[default]
    Undefined,
    Defined { logic: String, bits: String },
}

impl Seed {
    pub fn new(logic: impl Into<String>, bits: &str) -> Self {
        Seed::Defined {
            logic: logic.into(),
            bits: canonical_bits(bits),
        }
    }
}

pub fn canonical_bits(bits: &str) -> String {
    bits.split_whitespace().sorted().join(" ")
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seed::Undefined => write!(f, "-"),
            Seed::Defined { logic, bits } => write!(f, "{logic}({bits})"),
        }
    }
}

impl Serialize for Seed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Seed::Undefined => serializer.serialize_none(),
            Seed::Defined { logic, bits } => {
                let mut s = serializer.serialize_struct("Seed", 2)?;
                s.serialize_field("logic", logic)?;
                s.serialize_field("bits", bits)?;
                s.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{canonical_bits, Seed};

    #[test]
    fn test_canonical_bits() {
        let seed = Seed::new(
            "OR",
            "L1_HTT280/1 L1_HTT220/3500 L1_HTT270/1 L1_HTT320/1 L1_HTT300/1 L1_HTT160/5250 L1_HTT200/0 L1_HTT255/1 L1_HTT240/1",
        );
        let expected = "L1_HTT160/5250 L1_HTT200/0 L1_HTT220/3500 L1_HTT240/1 L1_HTT255/1 L1_HTT270/1 L1_HTT280/1 L1_HTT300/1 L1_HTT320/1";
        assert_eq!(
            seed,
            Seed::Defined {
                logic: "OR".to_owned(),
                bits: expected.to_owned()
            }
        );
        assert_eq!(canonical_bits(expected), expected);
    }

    #[test]
    fn test_seed_order_independence() {
        assert_eq!(
            Seed::new("OR", "L1_B/2  L1_A/1"),
            Seed::new("OR", " L1_A/1 L1_B/2")
        );
        assert_ne!(Seed::new("AND", "L1_A/1"), Seed::new("OR", "L1_A/1"));
        assert_ne!(Seed::new("OR", "L1_A/1"), Seed::Undefined);
        assert_eq!(canonical_bits(""), "");
    }

    #[test]
    fn test_seed_serialization() {
        assert_eq!(serde_json::to_string(&Seed::Undefined).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Seed::new("OR", "L1_B/1 L1_A/1")).unwrap(),
            r#"{"logic":"OR","bits":"L1_A/1 L1_B/1"}"#
        );
        assert_eq!(Seed::Undefined.to_string(), "-");
        assert_eq!(Seed::new("OR", "L1_A/1").to_string(), "OR(L1_A/1)");
    }
}
