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

use std::ops::Range;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::instruction::{Bit, Operation, WireKind};

pub use self::slice::{InvalidSliceBoundaryError, Partition};

pub mod latex;
mod slice;

/// A reference to a wire that the circuit does not declare.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[error("{kind} {bit} is not declared in the circuit")]
pub struct UnresolvedWireError {
    pub kind: WireKind,
    pub bit: Bit,
}

/// A Circuit is an ordered sequence of [`Operation`]s over a fixed set of declared wires.
///
/// Qubits and classical bits are declared separately; each set is ordered, and a wire's
/// position in its set is the row it occupies in a rendered diagram.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    #[serde(default)]
    qubits: IndexSet<Bit>,
    #[serde(default)]
    clbits: IndexSet<Bit>,
    #[serde(default)]
    operations: Vec<Operation>,
}

impl Circuit {
    /// A circuit over `num_qubits` qubits and `num_clbits` classical bits, addressed by
    /// [`Bit::Fixed`] indices starting at zero.
    pub fn new(num_qubits: u64, num_clbits: u64) -> Self {
        Self {
            qubits: (0..num_qubits).map(Bit::Fixed).collect(),
            clbits: (0..num_clbits).map(Bit::Fixed).collect(),
            operations: vec![],
        }
    }

    /// Declare the qubits `name[0]` through `name[size - 1]`.
    pub fn add_quantum_register(&mut self, name: &str, size: u64) -> &mut Self {
        self.qubits
            .extend((0..size).map(|index| Bit::register(name, index)));
        self
    }

    /// Declare the classical bits `name[0]` through `name[size - 1]`.
    pub fn add_classical_register(&mut self, name: &str, size: u64) -> &mut Self {
        self.clbits
            .extend((0..size).map(|index| Bit::register(name, index)));
        self
    }

    /// Append an operation to the end of the circuit.
    pub fn add_operation(&mut self, operation: Operation) -> &mut Self {
        self.operations.push(operation);
        self
    }

    pub fn add_operations<I>(&mut self, operations: I) -> &mut Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.operations.extend(operations);
        self
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn qubits(&self) -> &IndexSet<Bit> {
        &self.qubits
    }

    pub fn clbits(&self) -> &IndexSet<Bit> {
        &self.clbits
    }

    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    pub fn num_clbits(&self) -> usize {
        self.clbits.len()
    }

    /// A view of the whole circuit.
    pub fn view(&self) -> CircuitView<'_> {
        CircuitView {
            circuit: self,
            columns: 0..self.operations.len(),
        }
    }

    /// A view of the operations in `columns`, which keeps every wire of this circuit.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is not a valid range into the operations.
    pub fn slice(&self, columns: Range<usize>) -> CircuitView<'_> {
        assert!(
            columns.start <= columns.end && columns.end <= self.operations.len(),
            "column range {columns:?} is out of bounds for {} operations",
            self.operations.len()
        );
        CircuitView {
            circuit: self,
            columns,
        }
    }

    /// One view per slice of `partition`, in order.
    ///
    /// # Panics
    ///
    /// Panics if `partition` covers a different number of operations than this circuit has.
    pub fn split(&self, partition: &Partition) -> Vec<CircuitView<'_>> {
        self.view().split(partition)
    }

    /// The row of a declared qubit.
    pub fn qubit_row(&self, bit: &Bit) -> Result<usize, UnresolvedWireError> {
        self.qubits
            .get_index_of(bit)
            .ok_or_else(|| UnresolvedWireError {
                kind: WireKind::Qubit,
                bit: bit.clone(),
            })
    }

    /// The row of a declared classical bit, counted among classical bits only.
    pub fn clbit_row(&self, bit: &Bit) -> Result<usize, UnresolvedWireError> {
        self.clbits
            .get_index_of(bit)
            .ok_or_else(|| UnresolvedWireError {
                kind: WireKind::Clbit,
                bit: bit.clone(),
            })
    }

    /// Resolve every qubit of `operation` to its row, preserving the operation's order.
    pub fn qubit_rows(&self, operation: &Operation) -> Result<Vec<usize>, UnresolvedWireError> {
        operation
            .qubits()
            .iter()
            .map(|bit| self.qubit_row(bit))
            .collect()
    }

    /// Resolve every classical bit of `operation` to its row, preserving the operation's order.
    pub fn clbit_rows(&self, operation: &Operation) -> Result<Vec<usize>, UnresolvedWireError> {
        operation
            .clbits()
            .iter()
            .map(|bit| self.clbit_row(bit))
            .collect()
    }
}

/// A contiguous run of a [`Circuit`]'s operations, sharing all of the parent's wires.
#[derive(Clone, Debug)]
pub struct CircuitView<'c> {
    circuit: &'c Circuit,
    columns: Range<usize>,
}

impl<'c> CircuitView<'c> {
    pub fn circuit(&self) -> &'c Circuit {
        self.circuit
    }

    /// The range of the parent's operations covered by this view.
    pub fn columns(&self) -> Range<usize> {
        self.columns.clone()
    }

    pub fn operations(&self) -> &'c [Operation] {
        &self.circuit.operations[self.columns.clone()]
    }

    /// One view per slice of `partition`, in order. Partition columns are relative to the
    /// start of this view.
    ///
    /// # Panics
    ///
    /// Panics if `partition` covers a different number of operations than this view has.
    pub fn split(&self, partition: &Partition) -> Vec<CircuitView<'c>> {
        assert_eq!(
            partition.total(),
            self.columns.len(),
            "partition does not cover this view's operations"
        );
        let offset = self.columns.start;
        partition
            .ranges()
            .map(|columns| CircuitView {
                circuit: self.circuit,
                columns: offset + columns.start..offset + columns.end,
            })
            .collect()
    }
}
