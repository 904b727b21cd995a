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

//! The read-only circuit vocabulary consumed by the renderer: wire references, parameters and
//! the operations built from them.

mod bit;
mod operation;
mod parameter;

pub use self::bit::{Bit, WireKind};
pub use self::operation::{Axis, GateKind, Operation, OperationError, TargetStyle};
pub use self::parameter::Parameter;
