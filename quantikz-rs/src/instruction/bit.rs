use std::fmt;

use serde::{Deserialize, Serialize};

/// A reference to a single wire of a circuit, either a qubit or a classical bit.
///
/// Bits are declared on a [`Circuit`](crate::program::Circuit) in order, and a bit's row in
/// the rendered diagram is its position in that declaration order.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bit {
    Fixed(u64),
    Register { name: String, index: u64 },
}

impl Bit {
    /// A bit belonging to the named register.
    pub fn register(name: impl Into<String>, index: u64) -> Self {
        Self::Register {
            name: name.into(),
            index,
        }
    }
}

impl From<u64> for Bit {
    fn from(index: u64) -> Self {
        Self::Fixed(index)
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bit::Fixed(index) => write!(f, "{index}"),
            Bit::Register { name, index } => write!(f, "{name}[{index}]"),
        }
    }
}

/// Which addressing space a [`Bit`] lives in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum WireKind {
    Qubit,
    #[strum(serialize = "classical bit")]
    Clbit,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Bit, WireKind};

    #[rstest]
    #[case(Bit::Fixed(3), "3")]
    #[case(Bit::register("anc", 1), "anc[1]")]
    fn display(#[case] bit: Bit, #[case] expected: &str) {
        assert_eq!(bit.to_string(), expected);
    }

    #[test]
    fn wire_kind_display() {
        assert_eq!(WireKind::Qubit.to_string(), "qubit");
        assert_eq!(WireKind::Clbit.to_string(), "classical bit");
    }

    #[test]
    fn deserialize_both_forms() {
        let bits: Vec<Bit> =
            serde_json::from_str(r#"[0, {"name": "q", "index": 2}]"#).expect("valid bits");
        assert_eq!(bits, vec![Bit::Fixed(0), Bit::register("q", 2)]);
    }
}
