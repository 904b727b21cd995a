use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Bit, Parameter};

/// The axis of a rotation gate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

/// What the target of a multiply-controlled gate looks like.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TargetStyle {
    /// A controlled-not target, `\targ{}`.
    Not,
    /// A phase-type target drawn as another control dot.
    Phase,
    /// The gate name in a box.
    Boxed,
}

impl TargetStyle {
    fn from_name(name: &str) -> Self {
        if name == "mct" || name.contains('x') {
            Self::Not
        } else if name == "ccz" || name.ends_with('z') {
            Self::Phase
        } else {
            Self::Boxed
        }
    }
}

/// The family of an [`Operation`], classified once from its name.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GateKind {
    Measure,
    /// An opaque unitary, drawn as a single box spanning its wires.
    Unitary,
    Swap,
    ControlledSwap,
    Rotation(Axis),
    ControlledRotation(Axis),
    ControlledX,
    ControlledZ,
    Other(TargetStyle),
}

impl GateKind {
    /// Classify a gate by name. Matching is case-insensitive.
    pub fn classify(name: &str) -> Self {
        static ROTATION: Lazy<Regex> =
            Lazy::new(|| Regex::new("^(?P<control>c?)r(?P<axis>[xyz])$").expect("regex is valid"));

        let name = name.to_lowercase();

        if let Some(captures) = ROTATION.captures(&name) {
            if let Some(axis) = captures
                .name("axis")
                .and_then(|axis| axis.as_str().parse().ok())
            {
                return match captures.name("control").map(|c| c.as_str()) {
                    Some("c") => Self::ControlledRotation(axis),
                    _ => Self::Rotation(axis),
                };
            }
        }

        match name.as_str() {
            "measure" => Self::Measure,
            "unitary" => Self::Unitary,
            "swap" => Self::Swap,
            "cswap" | "fredkin" => Self::ControlledSwap,
            "cx" | "cnot" => Self::ControlledX,
            "cz" => Self::ControlledZ,
            other => Self::Other(TargetStyle::from_name(other)),
        }
    }

    /// The target drawn when this gate is applied with two or more controls.
    pub fn target_style(&self) -> TargetStyle {
        match self {
            GateKind::ControlledX
            | GateKind::Rotation(Axis::X)
            | GateKind::ControlledRotation(Axis::X) => TargetStyle::Not,
            GateKind::ControlledZ
            | GateKind::Rotation(Axis::Z)
            | GateKind::ControlledRotation(Axis::Z) => TargetStyle::Phase,
            GateKind::Other(style) => *style,
            GateKind::Measure
            | GateKind::Unitary
            | GateKind::Swap
            | GateKind::ControlledSwap
            | GateKind::Rotation(Axis::Y)
            | GateKind::ControlledRotation(Axis::Y) => TargetStyle::Boxed,
        }
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("operation `{name}` must act on 1 or more qubits")]
    EmptyQubits { name: String },

    #[error("operation `{name}` uses qubit {qubit} more than once")]
    DuplicateQubit { name: String, qubit: Bit },
}

/// A single step of a circuit: a named gate or measurement applied to some wires.
///
/// The order of `qubits` is significant. For multi-qubit gates the leading qubits are
/// controls and the last is the target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OperationRepr", into = "OperationRepr")]
pub struct Operation {
    name: String,
    kind: GateKind,
    qubits: Vec<Bit>,
    clbits: Vec<Bit>,
    parameters: Vec<Parameter>,
}

impl Operation {
    /// Build a new operation.
    ///
    /// # Errors
    ///
    /// Returns an error if no qubits are given or if a qubit is given twice.
    pub fn new(
        name: impl Into<String>,
        qubits: Vec<Bit>,
        clbits: Vec<Bit>,
        parameters: Vec<Parameter>,
    ) -> Result<Self, OperationError> {
        let name = name.into();

        if qubits.is_empty() {
            return Err(OperationError::EmptyQubits { name });
        }

        let duplicate = {
            let mut seen = HashSet::with_capacity(qubits.len());
            qubits.iter().find(|qubit| !seen.insert(*qubit)).cloned()
        };
        if let Some(qubit) = duplicate {
            return Err(OperationError::DuplicateQubit { name, qubit });
        }

        Ok(Self {
            kind: GateKind::classify(&name),
            name,
            qubits,
            clbits,
            parameters,
        })
    }

    /// A parameterless gate.
    pub fn gate<I, B>(name: impl Into<String>, qubits: I) -> Result<Self, OperationError>
    where
        I: IntoIterator<Item = B>,
        B: Into<Bit>,
    {
        Self::new(
            name,
            qubits.into_iter().map(Into::into).collect(),
            vec![],
            vec![],
        )
    }

    /// Measure each of `qubits` into the corresponding entry of `clbits`.
    pub fn measure<I, J, B>(qubits: I, clbits: J) -> Result<Self, OperationError>
    where
        I: IntoIterator<Item = B>,
        J: IntoIterator<Item = B>,
        B: Into<Bit>,
    {
        Self::new(
            "measure",
            qubits.into_iter().map(Into::into).collect(),
            clbits.into_iter().map(Into::into).collect(),
            vec![],
        )
    }

    /// Return a copy of this operation with the given parameters.
    pub fn with_parameters<I, P>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Parameter>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    pub fn qubits(&self) -> &[Bit] {
        &self.qubits
    }

    pub fn clbits(&self) -> &[Bit] {
        &self.clbits
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

#[derive(Serialize, Deserialize)]
struct OperationRepr {
    name: String,
    qubits: Vec<Bit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    clbits: Vec<Bit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    parameters: Vec<Parameter>,
}

impl TryFrom<OperationRepr> for Operation {
    type Error = OperationError;

    fn try_from(repr: OperationRepr) -> Result<Self, Self::Error> {
        Self::new(repr.name, repr.qubits, repr.clbits, repr.parameters)
    }
}

impl From<Operation> for OperationRepr {
    fn from(operation: Operation) -> Self {
        Self {
            name: operation.name,
            qubits: operation.qubits,
            clbits: operation.clbits,
            parameters: operation.parameters,
        }
    }
}
