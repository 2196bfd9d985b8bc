// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The trace-event data model and its wire encoding.
//!
//! An emitted trace is a stream of newline-delimited JSON objects, one
//! self-contained [`TraceEvent`] per line, in the field layout understood
//! by Chrome's `about:tracing` and Perfetto importers. This module defines
//! the record itself, the closed sets it draws from ([`Phase`],
//! [`InstantScope`], [`FlowKind`], [`MetadataKind`]), the restricted
//! argument domain ([`ArgValue`], [`Arguments`]), and the error surface.

pub mod args;
pub mod error;
pub mod phase;
pub mod record;

pub use self::args::{ArgValue, Arguments};
pub use self::error::{TraceError, TraceResult};
pub use self::phase::{FlowKind, InstantScope, MetadataKind, Phase};
pub use self::record::{ContextId, CorrelationId, SessionId, TraceEvent};
