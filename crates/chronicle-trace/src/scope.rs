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

//! RAII helpers that close a trace scope on every exit path. (RAII =
//! Resource Acquisition Is Initialization)
//!
//! Both helpers put the closing emission in a `Drop` impl, so it fires
//! exactly once whether the wrapped work returns normally or unwinds. A
//! write error surfacing inside `Drop` cannot propagate; it is reported
//! through `log::warn!` and otherwise swallowed.

use crate::context::ExecutionContext;
use crate::emitter::TraceEmitter;
use chronicle_core::{clock, next_correlation_id, Arguments, CorrelationId, TraceResult};

/// Guard pairing a Begin record with a guaranteed End record.
///
/// The simple same-thread form: Begin is emitted when the guard is created,
/// End when it drops. Both records share a freshly allocated correlation
/// id. Not suitable for work that may resume on another thread — use
/// [`TraceEmitter::trace`] for that.
#[derive(Debug)]
pub struct ScopedSpan<'a> {
    emitter: &'a TraceEmitter,
    name: String,
    correlation_id: CorrelationId,
    category: Option<String>,
}

impl Drop for ScopedSpan<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.emitter.end(
            &self.name,
            Some(self.correlation_id),
            self.category.as_deref(),
            None,
        ) {
            log::warn!("[ScopedSpan] Failed to emit closing End event: {e}");
        }
    }
}

/// Guard emitting a single Complete record covering its whole lifetime.
///
/// The cross-thread-safe form: the starting context's identity is captured
/// at creation, and the Complete record emitted on drop carries both start
/// and end identity, so the slice renders correctly even when the work
/// resumed elsewhere.
#[derive(Debug)]
pub struct ScopedTrace<'a> {
    emitter: &'a TraceEmitter,
    name: String,
    correlation_id: CorrelationId,
    category: Option<String>,
    arguments: Option<Arguments>,
    start_context: ExecutionContext,
    start_time_ms: u64,
}

impl Drop for ScopedTrace<'_> {
    fn drop(&mut self) {
        let end_time_ms = clock::now_ms();
        if let Err(e) = self.emitter.complete(
            &self.name,
            self.start_time_ms,
            end_time_ms,
            self.category.as_deref(),
            self.arguments.take(),
            Some(self.correlation_id),
            Some(&self.start_context),
        ) {
            log::warn!("[ScopedTrace] Failed to emit closing Complete event: {e}");
        }
    }
}

impl TraceEmitter {
    /// Opens a Begin/End span around the returned guard's lifetime.
    ///
    /// The Begin record is emitted before this returns; the matching End
    /// fires when the guard drops, on normal return and unwind alike.
    pub fn span<'a>(&'a self, name: &str, category: Option<&str>) -> TraceResult<ScopedSpan<'a>> {
        let correlation_id = next_correlation_id();
        self.begin(name, Some(correlation_id), category, None)?;
        Ok(ScopedSpan {
            emitter: self,
            name: name.to_owned(),
            correlation_id,
            category: category.map(str::to_owned),
        })
    }

    /// Runs `work` and emits exactly one Complete record for it, on every
    /// exit path.
    ///
    /// A fresh correlation id is allocated, the calling context's identity
    /// and the start time are captured, and the closing record fires when
    /// the internal guard drops — after a normal return and during an
    /// unwind alike. The result of `work`, or its panic, propagates
    /// unchanged.
    pub fn trace<T>(
        &self,
        name: &str,
        category: Option<&str>,
        arguments: Option<Arguments>,
        work: impl FnOnce() -> T,
    ) -> T {
        let _guard = ScopedTrace {
            emitter: self,
            name: name.to_owned(),
            correlation_id: next_correlation_id(),
            category: category.map(str::to_owned),
            arguments,
            start_context: ExecutionContext::current(),
            start_time_ms: clock::now_ms(),
        };
        work()
    }
}
