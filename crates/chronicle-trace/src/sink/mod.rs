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

//! Output sinks for encoded event lines.

pub mod memory;
pub mod stdout;
pub mod writer;

pub use self::memory::MemorySink;
pub use self::stdout::StdoutSink;
pub use self::writer::WriterSink;

use chronicle_core::TraceResult;
use std::fmt::Debug;

/// Destination for encoded event lines.
///
/// A sink must guarantee that concurrent writes never interleave within a
/// single line; beyond that it makes no ordering promises. Write failures
/// are fatal for the current call and propagate to the emitter's caller —
/// the engine performs no retries.
pub trait TraceSink: Send + Sync + Debug + 'static {
    /// Writes one encoded event line (without a trailing newline) as an
    /// atomic unit.
    fn write_line(&self, line: &str) -> TraceResult<()>;
}
