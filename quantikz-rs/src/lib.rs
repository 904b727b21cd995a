// Copyright 2021 Rigetti Computing
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Render quantum circuits as [Quantikz](https://ctan.org/pkg/quantikz) LaTeX diagrams.
//!
//! Within this crate you'll find:
//!
//! * A [circuit] model: ordered [operations] over declared qubits and classical bits
//! * A [renderer] which draws each operation as one column of a diagram
//! * [Slicing], either into independent sub-diagrams or as `\slice` markers in place
//!
//! Circuits may be built in code or deserialized with `serde`, so a circuit exported by
//! another framework as JSON can be rendered directly:
//!
//! ```
//! use quantikz_rs::program::latex::{RenderSettings, ToLatex};
//! use quantikz_rs::Circuit;
//!
//! let circuit: Circuit = serde_json::from_str(
//!     r#"{"qubits": [0, 1], "operations": [{"name": "cz", "qubits": [0, 1]}]}"#,
//! )
//! .unwrap();
//! let latex = circuit.to_latex(&RenderSettings::default()).unwrap();
//! assert_eq!(
//!     latex.as_diagram().unwrap(),
//!     "\\begin{quantikz}\n\\lstick{${q_0}$} & \\ctrl{1} & \\\\\n\\lstick{${q_1}$} & \\ctrl{-1} & \\\\\n\\end{quantikz}"
//! );
//! ```
//!
//! This crate does not claim a stable API. Prior to `v1.0`, minor-version changes are
//! considered breaking changes.
//!
//! [circuit]: crate::program::Circuit
//! [operations]: crate::instruction::Operation
//! [renderer]: crate::program::latex::ToLatex
//! [Slicing]: crate::program::Partition

pub mod instruction;
pub mod program;

pub use program::Circuit;
