use super::circuit::{Circuit, CircuitElement, GateLabel, Target};

/// Available commands used for building circuits with the same names taken
/// from the Quantikz documentation for easy reference. LaTeX string denoted
/// inside `backticks`.
///
/// # Available Commands
///
///   Single wire commands: lstick, gate, meter, qw, cw, slice
///   Multi-wire commands: ctrl, targ, swap, targX, gate[n]
#[derive(Clone, Debug, PartialEq)]
enum DiagramElement {
    /// `\lstick{${<prefix>_<index>}$}`: Label a wire on the left.
    Lstick { prefix: char, index: usize },
    /// `\gate{<label>}`: Make a gate on the wire.
    Gate(GateLabel),
    /// `\gate[<span>]{<name>}`: Make a gate covering `span` wires, starting at this one.
    MultiGate { span: usize, name: String },
    /// `\qw`: Connect the current cell to the previous cell i.e. "do nothing".
    Qw,
    /// `\cw`: A classical wire segment, drawn where a measurement is written.
    Cw,
    /// `\ctrl{distance}`: Make a control qubit with a line to the wire `distance` rows below
    /// (negative: above).
    Ctrl { distance: i64 },
    /// `\targ{}`: Make a controlled-not gate.
    Targ,
    /// `\swap{distance}`: One end of a swap, joined to the wire `distance` rows below.
    Swap { distance: i64 },
    /// `\targX{}`: The other end of a swap.
    TargX,
    /// `\meter{}`: Measurement.
    Meter,
    /// `\slice{<label>}`: Mark the end of a slice of the circuit.
    Slice(String),
    /// `&`: Start a new cell in the same row/wire
    Ampersand,
    /// `\\`: Start a new row
    Nr,
}

impl DiagramElement {
    fn qubit(index: usize) -> Self {
        Self::Lstick { prefix: 'q', index }
    }

    fn clbit(index: usize) -> Self {
        Self::Lstick { prefix: 'c', index }
    }
}

impl std::fmt::Display for DiagramElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagramElement::Lstick { prefix, index } => {
                write!(f, r"\lstick{{${{{prefix}_{index}}}$}}")
            }
            DiagramElement::Gate(label) => write!(f, r"\gate{{{label}}}"),
            DiagramElement::MultiGate { span, name } => write!(f, r"\gate[{span}]{{{name}}}"),
            DiagramElement::Qw => write!(f, r"\qw"),
            DiagramElement::Cw => write!(f, r"\cw"),
            DiagramElement::Ctrl { distance } => write!(f, r"\ctrl{{{distance}}}"),
            DiagramElement::Targ => write!(f, r"\targ{{}}"),
            DiagramElement::Swap { distance } => write!(f, r"\swap{{{distance}}}"),
            DiagramElement::TargX => write!(f, r"\targX{{}}"),
            DiagramElement::Meter => write!(f, r"\meter{{}}"),
            DiagramElement::Slice(label) => write!(f, r"\slice{{{label}}}"),
            DiagramElement::Ampersand => write!(f, "&"),
            DiagramElement::Nr => write!(f, r"\\"),
        }
    }
}

/// The signed row offset from `from` to `to`.
fn distance(from: usize, to: usize) -> i64 {
    to as i64 - from as i64
}

/// Wire == row
#[derive(Debug)]
struct DiagramWire {
    label: DiagramElement,
    /// One element per column.
    cells: Vec<DiagramElement>,
}

impl DiagramWire {
    fn new(label: DiagramElement, columns: usize) -> Self {
        Self {
            label,
            cells: Vec::with_capacity(columns),
        }
    }

    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        slices: &[Option<DiagramElement>],
    ) -> std::fmt::Result {
        write!(f, "{}", self.label)?;

        for (cell, slice) in self.cells.iter().zip(slices) {
            write!(f, " {} {cell}", DiagramElement::Ampersand)?;
            if let Some(slice) = slice {
                write!(f, "{slice}")?;
            }
        }

        write!(f, " {} {}", DiagramElement::Ampersand, DiagramElement::Nr)
    }
}

/// The row buffers of a diagram: every wire holds exactly one cell per column pushed.
#[derive(Debug)]
pub(super) struct Diagram {
    qubits: Vec<DiagramWire>,
    clbits: Vec<DiagramWire>,
    slices: Vec<Option<DiagramElement>>,
}

impl Diagram {
    const HEADER: &'static str = r"\begin{quantikz}";

    const FOOTER: &'static str = r"\end{quantikz}";

    fn new(num_qubits: usize, num_clbits: usize, columns: usize) -> Self {
        Self {
            qubits: (0..num_qubits)
                .map(|index| DiagramWire::new(DiagramElement::qubit(index), columns))
                .collect(),
            clbits: (0..num_clbits)
                .map(|index| DiagramWire::new(DiagramElement::clbit(index), columns))
                .collect(),
            slices: Vec::with_capacity(columns),
        }
    }

    /// Append one column: a cell on every wire, idle unless `element` names the row.
    fn push_column(&mut self, element: CircuitElement, slice: Option<String>) {
        let mut qubits = vec![DiagramElement::Qw; self.qubits.len()];
        let mut clbits = vec![DiagramElement::Qw; self.clbits.len()];

        let mut set = |row: usize, cell: DiagramElement| {
            if let Some(slot) = qubits.get_mut(row) {
                *slot = cell;
            }
        };

        match element {
            CircuitElement::Measurement {
                qubits: measured,
                clbits: written,
            } => {
                for row in measured {
                    set(row, DiagramElement::Meter);
                }
                for row in written {
                    if let Some(slot) = clbits.get_mut(row) {
                        *slot = DiagramElement::Cw;
                    }
                }
            }
            CircuitElement::Unitary { anchor, span, name } => {
                set(anchor, DiagramElement::MultiGate { span, name });
            }
            CircuitElement::Swap { low, high } => {
                set(low, DiagramElement::Swap {
                    distance: distance(low, high),
                });
                set(high, DiagramElement::TargX);
            }
            CircuitElement::ControlledSwap {
                control,
                nearest,
                low,
                high,
            } => {
                set(control, DiagramElement::Ctrl {
                    distance: distance(control, nearest),
                });
                set(low, DiagramElement::Swap {
                    distance: distance(low, high),
                });
                set(high, DiagramElement::TargX);
            }
            CircuitElement::Controlled {
                controls,
                target,
                target_kind,
            } => {
                for control in controls {
                    set(control, DiagramElement::Ctrl {
                        distance: distance(control, target),
                    });
                }
                let cell = match target_kind {
                    Target::Not => DiagramElement::Targ,
                    Target::Phase => DiagramElement::Ctrl { distance: 0 },
                    Target::Gate(label) => DiagramElement::Gate(label),
                };
                set(target, cell);
            }
            CircuitElement::MutualControl { first, second } => {
                set(first, DiagramElement::Ctrl {
                    distance: distance(first, second),
                });
                set(second, DiagramElement::Ctrl {
                    distance: distance(second, first),
                });
            }
            CircuitElement::Gate { rows, label } => {
                for row in rows {
                    set(row, DiagramElement::Gate(label.clone()));
                }
            }
        }

        for (wire, cell) in self.qubits.iter_mut().zip(qubits) {
            wire.cells.push(cell);
        }
        for (wire, cell) in self.clbits.iter_mut().zip(clbits) {
            wire.cells.push(cell);
        }
        self.slices.push(slice.map(DiagramElement::Slice));
    }

    /// The rendered rows, qubits first, without header or footer.
    #[cfg(test)]
    pub(super) fn rows(&self) -> Vec<String> {
        struct Row<'d>(&'d DiagramWire, &'d [Option<DiagramElement>]);

        impl std::fmt::Display for Row<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f, self.1)
            }
        }

        self.qubits
            .iter()
            .chain(&self.clbits)
            .map(|wire| Row(wire, &self.slices).to_string())
            .collect()
    }
}

impl std::fmt::Display for Diagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", Self::HEADER)?;

        for wire in self.qubits.iter().chain(&self.clbits) {
            wire.fmt(f, &self.slices)?;
            writeln!(f)?;
        }

        write!(f, "{}", Self::FOOTER)
    }
}

impl From<Circuit> for Diagram {
    fn from(circuit: Circuit) -> Self {
        let mut diagram = Diagram::new(
            circuit.num_qubits,
            circuit.num_clbits,
            circuit.columns.len(),
        );

        for column in circuit.columns {
            diagram.push_column(column.element, column.slice);
        }

        diagram
    }
}
