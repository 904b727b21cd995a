//! LaTeX circuit generation for circuits.
//!
//! This module enables generating quantum circuit diagrams using the LaTeX
//! package TikZ/[`Quantikz`] for a given [`Circuit`]. This feature is callable
//! on [`Circuit`] (or a [`CircuitView`] of one) and returns LaTeX text which
//! can be rendered in a LaTeX visualization tool. Every operation renders to
//! something: gates which are not recognized below are drawn as boxes labeled
//! with their upper-cased name.
//!
//! # Supported Gates
//!
//!   - Measurement:                  `measure`
//!   - Swaps:                        `swap`, `cswap`, `fredkin`
//!   - Rotations:                    `rx`, `ry`, `rz`, `crx`, `cry`, `crz`
//!   - Controlled X and Z:           `cx`, `cnot`, `cz`
//!   - Multiply controlled gates:    `ccx`, `mct`, `ccz`, and any name containing
//!     `x` or ending in `z`
//!   - Opaque unitaries:             `unitary`
//!
//! # Output
//!
//! Each row is the wire label followed by one cell per operation, separated by
//! ` & `, and closed by an empty cell and a row terminator, `& \\`. Every row,
//! including the last, is closed the same way:
//!
//! ```text
//! \begin{quantikz}
//! \lstick{${q_0}$} & \ctrl{1} & \\
//! \lstick{${q_1}$} & \targ{} & \\
//! \end{quantikz}
//! ```
//!
//! [`Quantikz`]: https://arxiv.org/pdf/1809.03842.pdf

mod circuit;
mod diagram;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::program::{
    Circuit, CircuitView, InvalidSliceBoundaryError, Partition, UnresolvedWireError,
};

use self::diagram::Diagram;

/// RenderSettings contains the metadata that allows the user to customize how
/// the circuit is rendered or use the default implementation.
///
/// A circuit is either split into independent sub-diagrams or annotated with
/// `\slice` markers in place, never both. In-place annotation takes precedence:
/// when `slice_all` is set or `slice_titles` is non-empty, the split settings
/// are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Draw a row for each classical bit.
    pub include_classical_wires: bool,
    /// Split the circuit into this many sub-diagrams of roughly equal length.
    pub subcircuit_count: Option<usize>,
    /// Split the circuit into sub-diagrams before each of these operation indices.
    /// Takes precedence over `subcircuit_count`.
    pub subcircuit_boundaries: Option<Vec<usize>>,
    /// Mark the operations at these indices with a titled `\slice`.
    pub slice_titles: BTreeMap<usize, String>,
    /// Mark every operation with a `\slice` numbered from 1.
    /// Takes precedence over `slice_titles`.
    pub slice_all: bool,
}

impl Default for RenderSettings {
    /// Returns the default RenderSettings.
    fn default() -> Self {
        Self {
            // false: measurements only show a meter on the qubit.
            include_classical_wires: true,
            // None or 1: a single diagram.
            subcircuit_count: None,
            // None or empty: a single diagram.
            subcircuit_boundaries: None,
            // empty: no titled slices.
            slice_titles: BTreeMap::new(),
            // true: `\slice{1}`, `\slice{2}`, ... after every column.
            slice_all: false,
        }
    }
}

/// How the `\slice` markers of a single diagram are chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SliceAnnotation<'s> {
    /// Every column, numbered from 1.
    Sequential,
    /// Only the columns present in the map.
    Titled(&'s BTreeMap<usize, String>),
}

impl SliceAnnotation<'_> {
    /// The `\slice` label for the given 0-based column, if it has one.
    fn label(&self, column: usize) -> Option<String> {
        match self {
            SliceAnnotation::Sequential => Some((column + 1).to_string()),
            SliceAnnotation::Titled(titles) => titles.get(&column).cloned(),
        }
    }
}

/// The resolved form of [`RenderSettings`] for a circuit of a given length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RenderMode<'s> {
    /// One plain diagram.
    Whole,
    /// One diagram with slice markers.
    Annotated(SliceAnnotation<'s>),
    /// Independent diagrams, one per slice of the partition.
    Split(Partition),
}

impl RenderSettings {
    pub(crate) fn render_mode(&self, operation_count: usize) -> RenderMode<'_> {
        if self.slice_all {
            return RenderMode::Annotated(SliceAnnotation::Sequential);
        }

        if !self.slice_titles.is_empty() {
            return RenderMode::Annotated(SliceAnnotation::Titled(&self.slice_titles));
        }

        let partition = match (&self.subcircuit_boundaries, self.subcircuit_count) {
            (Some(boundaries), _) if !boundaries.is_empty() => {
                Partition::at_indices(boundaries.iter().copied(), operation_count)
            }
            (_, Some(count)) if count > 1 => Partition::even(count, operation_count),
            _ => return RenderMode::Whole,
        };

        if partition.count() > 1 {
            RenderMode::Split(partition)
        } else {
            RenderMode::Whole
        }
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum LatexGenError {
    #[error(transparent)]
    UnresolvedWire(#[from] UnresolvedWireError),
    #[error(transparent)]
    InvalidSliceBoundary(#[from] InvalidSliceBoundaryError),
}

/// The LaTeX produced for a circuit: one diagram, or one per slice when the
/// circuit was split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatexOutput {
    Diagram(String),
    Subdiagrams(Vec<String>),
}

impl LatexOutput {
    /// The single diagram, if the circuit was not split.
    pub fn as_diagram(&self) -> Option<&str> {
        match self {
            LatexOutput::Diagram(diagram) => Some(diagram),
            LatexOutput::Subdiagrams(_) => None,
        }
    }

    /// Every diagram, in circuit order.
    pub fn into_diagrams(self) -> Vec<String> {
        match self {
            LatexOutput::Diagram(diagram) => vec![diagram],
            LatexOutput::Subdiagrams(diagrams) => diagrams,
        }
    }
}

pub trait ToLatex {
    fn to_latex(&self, settings: &RenderSettings) -> Result<LatexOutput, LatexGenError>;
}

/// Render one diagram for the whole view.
fn render_diagram(
    view: &CircuitView<'_>,
    settings: &RenderSettings,
    annotation: Option<&SliceAnnotation<'_>>,
) -> Result<String, LatexGenError> {
    let circuit =
        circuit::Circuit::try_from_view(view, settings.include_classical_wires, annotation)?;
    Ok(Diagram::from(circuit).to_string())
}

impl ToLatex for CircuitView<'_> {
    /// Returns a Result containing the view as Quantikz LaTeX or a
    /// [`LatexGenError`].
    ///
    /// # Arguments
    /// `settings` - Customizes the rendering of a circuit.
    ///
    /// # Examples
    /// ```
    /// use quantikz_rs::instruction::Operation;
    /// use quantikz_rs::program::{latex::{RenderSettings, ToLatex}, Circuit, Partition};
    ///
    /// let mut circuit = Circuit::new(2, 0);
    /// circuit.add_operations([
    ///     Operation::gate("h", [0]).unwrap(),
    ///     Operation::gate("cx", [0, 1]).unwrap(),
    /// ]);
    /// let views = circuit.split(&Partition::at_indices([1], 2));
    /// let latex = views[1].to_latex(&RenderSettings::default()).unwrap();
    /// assert!(latex.as_diagram().unwrap().contains(r"\ctrl{1}"));
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(columns = ?self.columns()))]
    fn to_latex(&self, settings: &RenderSettings) -> Result<LatexOutput, LatexGenError> {
        let mode = settings.render_mode(self.operations().len());
        tracing::debug!(?mode, "resolved render mode");

        match mode {
            RenderMode::Whole => render_diagram(self, settings, None).map(LatexOutput::Diagram),
            RenderMode::Annotated(annotation) => {
                render_diagram(self, settings, Some(&annotation)).map(LatexOutput::Diagram)
            }
            RenderMode::Split(partition) => render_subdiagrams(self, &partition, settings)
                .map(LatexOutput::Subdiagrams),
        }
    }
}

/// Render one plain diagram per slice of `partition`.
fn render_subdiagrams(
    view: &CircuitView<'_>,
    partition: &Partition,
    settings: &RenderSettings,
) -> Result<Vec<String>, LatexGenError> {
    view.split(partition)
        .iter()
        .map(|slice| {
            tracing::debug!(columns = ?slice.columns(), "rendering subdiagram");
            render_diagram(slice, settings, None)
        })
        .collect()
}

impl CircuitView<'_> {
    /// Render one diagram per slice, splitting at exactly the given boundaries.
    ///
    /// Unlike [`RenderSettings::subcircuit_boundaries`], the boundaries are not normalized:
    /// they must start at 0, end at the number of operations in this view and never decrease.
    /// Repeated boundaries produce diagrams with no operations. The split and annotation
    /// fields of `settings` are ignored.
    pub fn to_latex_partitioned(
        &self,
        boundaries: Vec<usize>,
        settings: &RenderSettings,
    ) -> Result<Vec<String>, LatexGenError> {
        let partition = Partition::try_from_boundaries(boundaries, self.operations().len())?;
        render_subdiagrams(self, &partition, settings)
    }
}

impl Circuit {
    /// See [`CircuitView::to_latex_partitioned`].
    pub fn to_latex_partitioned(
        &self,
        boundaries: Vec<usize>,
        settings: &RenderSettings,
    ) -> Result<Vec<String>, LatexGenError> {
        self.view().to_latex_partitioned(boundaries, settings)
    }
}

impl ToLatex for Circuit {
    /// Returns a Result containing the circuit as Quantikz LaTeX or a
    /// [`LatexGenError`].
    ///
    /// # Examples
    /// ```
    /// // To LaTeX for the Bell State circuit.
    /// use quantikz_rs::instruction::Operation;
    /// use quantikz_rs::program::{latex::{RenderSettings, ToLatex}, Circuit};
    ///
    /// let mut circuit = Circuit::new(2, 0);
    /// circuit.add_operations([
    ///     Operation::gate("h", [0]).unwrap(),
    ///     Operation::gate("cx", [0, 1]).unwrap(),
    /// ]);
    /// let latex = circuit.to_latex(&RenderSettings::default()).unwrap();
    /// assert_eq!(
    ///     latex.as_diagram().unwrap(),
    ///     r"\begin{quantikz}
    /// \lstick{${q_0}$} & \gate{H} & \ctrl{1} & \\
    /// \lstick{${q_1}$} & \qw & \targ{} & \\
    /// \end{quantikz}"
    /// );
    /// ```
    fn to_latex(&self, settings: &RenderSettings) -> Result<LatexOutput, LatexGenError> {
        self.view().to_latex(settings)
    }
}
