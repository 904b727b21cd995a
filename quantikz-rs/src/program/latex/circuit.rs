//! Higher-level construct which represents a circuit in a way that can be converted to a diagram.
//!
//! Every [`Operation`] is resolved against the wires of its circuit and classified into exactly
//! one [`CircuitElement`]. The classification is a precedence-ordered rule table; the last rule
//! accepts any shape, so resolution only fails on undeclared wires.

use std::collections::BTreeSet;

use crate::instruction::{Axis, GateKind, Operation, Parameter, TargetStyle};
use crate::program::{CircuitView, UnresolvedWireError};

use super::SliceAnnotation;

/// The text inside a `\gate{}` box.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum GateLabel {
    /// The upper-cased gate name.
    Name(String),
    /// `R_<axis>(<parameter>)`
    Rotation { axis: Axis, parameter: Parameter },
}

impl GateLabel {
    fn name(operation: &Operation) -> Self {
        Self::Name(operation.name().to_uppercase())
    }
}

impl std::fmt::Display for GateLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateLabel::Name(name) => write!(f, "{name}"),
            GateLabel::Rotation { axis, parameter } => write!(f, "R_{axis}({parameter})"),
        }
    }
}

/// What is drawn on the target wire of a controlled gate.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum Target {
    Not,
    /// Another control dot, with no line of its own.
    Phase,
    Gate(GateLabel),
}

/// One column of the diagram, in terms of rows. Rows not named by an element are idle.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum CircuitElement {
    Measurement {
        qubits: BTreeSet<usize>,
        clbits: BTreeSet<usize>,
    },
    /// A box spanning `span` wires, anchored at `anchor`.
    Unitary {
        anchor: usize,
        span: usize,
        name: String,
    },
    Swap {
        low: usize,
        high: usize,
    },
    /// `nearest` is the end of the swap that the control line is drawn to.
    ControlledSwap {
        control: usize,
        nearest: usize,
        low: usize,
        high: usize,
    },
    Controlled {
        controls: Vec<usize>,
        target: usize,
        target_kind: Target,
    },
    /// Two controls pointing at each other, as drawn for a controlled-Z.
    MutualControl {
        first: usize,
        second: usize,
    },
    Gate {
        rows: Vec<usize>,
        label: GateLabel,
    },
}

fn single_parameter(operation: &Operation) -> Option<&Parameter> {
    match operation.parameters() {
        [parameter] => Some(parameter),
        _ => None,
    }
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl CircuitElement {
    /// Classify an operation whose qubits resolved to `rows` and classical bits to `clbits`.
    fn resolve(operation: &Operation, rows: Vec<usize>, clbits: Vec<usize>) -> Self {
        let kind = operation.kind();

        match (kind, rows.as_slice()) {
            (GateKind::Unitary, _) => Self::Unitary {
                anchor: rows.iter().copied().min().unwrap_or_default(),
                span: rows.len(),
                name: operation.name().to_string(),
            },
            (GateKind::Measure, _) => Self::Measurement {
                qubits: rows.into_iter().collect(),
                clbits: clbits.into_iter().collect(),
            },
            (GateKind::Swap, &[a, b]) => {
                let (low, high) = ordered(a, b);
                Self::Swap { low, high }
            }
            (GateKind::ControlledSwap, &[control, first, second]) => {
                let nearest = if control.abs_diff(second) < control.abs_diff(first) {
                    second
                } else {
                    first
                };
                let (low, high) = ordered(first, second);
                Self::ControlledSwap {
                    control,
                    nearest,
                    low,
                    high,
                }
            }
            (kind, [controls @ .., target]) if controls.len() >= 2 => {
                if kind == GateKind::ControlledSwap {
                    Self::Gate {
                        label: GateLabel::name(operation),
                        rows,
                    }
                } else {
                    let target_kind = match kind.target_style() {
                        TargetStyle::Not => Target::Not,
                        TargetStyle::Phase => Target::Phase,
                        TargetStyle::Boxed => Target::Gate(GateLabel::name(operation)),
                    };
                    Self::Controlled {
                        controls: controls.to_vec(),
                        target: *target,
                        target_kind,
                    }
                }
            }
            (kind, &[control, target]) => {
                let target_kind = match (kind, single_parameter(operation)) {
                    (GateKind::ControlledRotation(axis), Some(parameter)) => {
                        Target::Gate(GateLabel::Rotation {
                            axis,
                            parameter: parameter.clone(),
                        })
                    }
                    (GateKind::ControlledX, _) => Target::Not,
                    (GateKind::ControlledZ, _) => {
                        return Self::MutualControl {
                            first: control,
                            second: target,
                        }
                    }
                    _ => Target::Gate(GateLabel::name(operation)),
                };
                Self::Controlled {
                    controls: vec![control],
                    target,
                    target_kind,
                }
            }
            (GateKind::Rotation(axis), &[_]) => match single_parameter(operation) {
                Some(parameter) => Self::Gate {
                    rows,
                    label: GateLabel::Rotation {
                        axis,
                        parameter: parameter.clone(),
                    },
                },
                None => Self::Gate {
                    label: GateLabel::name(operation),
                    rows,
                },
            },
            _ => Self::Gate {
                label: GateLabel::name(operation),
                rows,
            },
        }
    }

    /// The number of rows which carry something other than an idle wire.
    #[cfg(test)]
    pub(super) fn active_rows(&self) -> usize {
        match self {
            CircuitElement::Measurement { qubits, .. } => qubits.len(),
            CircuitElement::Unitary { .. } => 1,
            CircuitElement::Swap { .. } | CircuitElement::MutualControl { .. } => 2,
            CircuitElement::ControlledSwap { .. } => 3,
            CircuitElement::Controlled { controls, .. } => controls.len() + 1,
            CircuitElement::Gate { rows, .. } => rows.len(),
        }
    }
}

#[derive(Clone, Debug)]
pub(super) struct CircuitColumn {
    pub element: CircuitElement,
    /// The `\slice{}` label attached to every cell of this column, if any.
    pub slice: Option<String>,
}

/// A circuit resolved to rows and columns, ready to be drawn.
#[derive(Clone, Debug, Default)]
pub(super) struct Circuit {
    pub columns: Vec<CircuitColumn>,
    pub num_qubits: usize,
    /// Zero when classical wires are not drawn.
    pub num_clbits: usize,
}

impl Circuit {
    pub(super) fn try_from_view(
        view: &CircuitView<'_>,
        include_classical_wires: bool,
        annotation: Option<&SliceAnnotation<'_>>,
    ) -> Result<Self, UnresolvedWireError> {
        let source = view.circuit();

        let mut circuit = Circuit {
            columns: Vec::with_capacity(view.operations().len()),
            num_qubits: source.num_qubits(),
            num_clbits: if include_classical_wires {
                source.num_clbits()
            } else {
                0
            },
        };

        for (index, operation) in view.operations().iter().enumerate() {
            let rows = source.qubit_rows(operation)?;
            let clbits = source.clbit_rows(operation)?;
            let element = CircuitElement::resolve(operation, rows, clbits);

            tracing::trace!(column = index, gate = operation.name(), ?element, "resolved column");

            circuit.columns.push(CircuitColumn {
                element,
                slice: annotation.and_then(|annotation| annotation.label(index)),
            });
        }

        Ok(circuit)
    }
}
