use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A gate parameter, such as a rotation angle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ParameterRepr", into = "ParameterRepr")]
pub enum Parameter {
    /// A real number. When `literal` is set, it is the exact decimal text the value was
    /// written with and is reproduced verbatim when rendered.
    Real { value: f64, literal: Option<String> },
    /// An unbound, named parameter.
    Symbol(String),
}

/// Plain decimal numbers, i.e. without an exponent, whose text can be kept as-is.
static DECIMAL_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)$").expect("regex is valid"));

impl Parameter {
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// The numeric value, if this parameter is bound.
    pub fn value(&self) -> Option<f64> {
        match self {
            Parameter::Real { value, .. } => Some(*value),
            Parameter::Symbol(_) => None,
        }
    }
}

impl From<f64> for Parameter {
    fn from(value: f64) -> Self {
        Self::Real {
            value,
            literal: None,
        }
    }
}

impl From<&str> for Parameter {
    /// Numeric text becomes a [`Parameter::Real`]; anything else is a [`Parameter::Symbol`].
    fn from(text: &str) -> Self {
        let trimmed = text.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Real {
                value,
                literal: DECIMAL_LITERAL
                    .is_match(trimmed)
                    .then(|| trimmed.to_string()),
            },
            _ => Self::Symbol(trimmed.to_string()),
        }
    }
}

impl From<String> for Parameter {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Real {
                literal: Some(literal),
                ..
            } => write!(f, "{literal}"),
            // `Display` for f64 never switches to exponent notation
            Parameter::Real { value, .. } => write!(f, "{value}"),
            Parameter::Symbol(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ParameterRepr {
    Number(f64),
    Text(String),
}

impl From<ParameterRepr> for Parameter {
    fn from(repr: ParameterRepr) -> Self {
        match repr {
            ParameterRepr::Number(value) => Self::from(value),
            ParameterRepr::Text(text) => Self::from(text),
        }
    }
}

impl From<Parameter> for ParameterRepr {
    fn from(parameter: Parameter) -> Self {
        match parameter {
            Parameter::Real {
                literal: Some(literal),
                ..
            } => Self::Text(literal),
            Parameter::Real { value, .. } => Self::Number(value),
            Parameter::Symbol(name) => Self::Text(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Parameter;

    #[rstest]
    #[case(Parameter::from(0.5), "0.5")]
    #[case(Parameter::from(1.0), "1")]
    #[case(Parameter::from(-0.25), "-0.25")]
    #[case(Parameter::from(1e-7), "0.0000001")]
    #[case(Parameter::from(2.5e16), "25000000000000000")]
    #[case(Parameter::from("0.50"), "0.50")]
    #[case(Parameter::from("1.0"), "1.0")]
    #[case(Parameter::from("1e-3"), "0.001")]
    #[case(Parameter::from("theta"), "theta")]
    fn display(#[case] parameter: Parameter, #[case] expected: &str) {
        assert_eq!(parameter.to_string(), expected);
    }

    #[test]
    fn text_classification() {
        assert_eq!(Parameter::from("0.50").value(), Some(0.5));
        assert_eq!(Parameter::from("phi"), Parameter::symbol("phi"));
        assert_eq!(Parameter::from("inf"), Parameter::symbol("inf"));
    }

    #[test]
    fn serde_keeps_literal_text() {
        let parameters: Vec<Parameter> =
            serde_json::from_str(r#"[0.25, "3.140", "lambda"]"#).expect("valid parameters");
        assert_eq!(
            parameters
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec!["0.25", "3.140", "lambda"]
        );
        assert_eq!(
            serde_json::to_string(&parameters).expect("serializable"),
            r#"[0.25,"3.140","lambda"]"#
        );
    }
}
