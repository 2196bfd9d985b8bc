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

//! # Chronicle Trace
//!
//! The emission engine over the `chronicle-core` event model: sessions own
//! an emitter, emitters turn lifecycle calls into newline-delimited event
//! records, and sinks carry the encoded lines out of the process.
//!
//! The engine runs entirely on its callers' execution contexts — no
//! internal threads, no buffering, no transport. Every public call is
//! synchronous and returns after writing at most a few lines.

pub mod context;
pub mod emitter;
pub mod registry;
pub mod scope;
pub mod session;
pub mod sink;

pub use context::ExecutionContext;
pub use emitter::TraceEmitter;
pub use registry::{ThreadKey, ThreadNameRegistry};
pub use scope::{ScopedSpan, ScopedTrace};
pub use session::SessionManager;
pub use sink::{MemorySink, StdoutSink, TraceSink, WriterSink};
