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

//! The per-session trace emitter.

use crate::context::ExecutionContext;
use crate::registry::ThreadNameRegistry;
use crate::sink::TraceSink;
use chronicle_core::{
    clock, Arguments, CorrelationId, FlowKind, InstantScope, MetadataKind, Phase, SessionId,
    TraceEvent, TraceResult,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// Fixed argument keys letting a viewer show slices that begin and end on
// different contexts.
const ARGUMENT_STARTING_THREAD_ID: &str = "startingThreadId";
const ARGUMENT_STARTING_THREAD_NAME: &str = "startingThreadName";
const ARGUMENT_ENDING_THREAD_ID: &str = "endingThreadId";
const ARGUMENT_ENDING_THREAD_NAME: &str = "endingThreadName";

/// Emits trace events for one session.
///
/// An emitter owns one session id and one [`ThreadNameRegistry`]; the clock
/// and correlation-id allocator are process-wide. Every emission is
/// synchronous: the event is built, encoded, and handed to the sink before
/// the call returns. The only failure mode is the sink write (or the
/// encoding) erroring, which propagates to the caller — there is no
/// validation of call patterns, and mismatched Begin/End pairs or reused
/// correlation ids are emitted as-is for a downstream viewer to judge.
///
/// The session id is stored atomically, so a shared emitter needs no
/// external locking; later [`set_session`](Self::set_session) calls
/// overwrite the id without retroactively correcting prior records.
#[derive(Debug)]
pub struct TraceEmitter {
    session_id: AtomicU64,
    registry: ThreadNameRegistry,
    sink: Arc<dyn TraceSink>,
}

impl TraceEmitter {
    /// Creates an emitter over `sink` with session id 0; callers are
    /// expected to [`set_session`](Self::set_session) before the first
    /// event.
    pub fn new(sink: Arc<dyn TraceSink>) -> Self {
        Self {
            session_id: AtomicU64::new(0),
            registry: ThreadNameRegistry::new(),
            sink,
        }
    }

    /// Returns the current session id.
    pub fn session_id(&self) -> SessionId {
        self.session_id.load(Ordering::Relaxed)
    }

    /// Sets the session id and, when `name` is given, emits one
    /// Metadata/ProcessName record naming the session.
    ///
    /// The record's arguments are the supplied `arguments` merged with
    /// `{"name": name}`, the `name` key winning. The calling context's name
    /// is registered under the new session id as a side effect.
    pub fn set_session(
        &self,
        id: SessionId,
        name: Option<&str>,
        arguments: Option<Arguments>,
    ) -> TraceResult<()> {
        self.session_id.store(id, Ordering::Relaxed);

        let Some(name) = name else { return Ok(()) };

        let context = ExecutionContext::current();
        self.registry.register_if_absent(id, context.id, &context.name);

        let mut merged = arguments.unwrap_or_default();
        merged.insert("name", name);

        let event = TraceEvent::new(
            MetadataKind::ProcessName.key(),
            Phase::Metadata,
            clock::now_us(),
            id,
            context.id,
        )
        .with_arguments(merged);
        self.emit(&event)
    }

    /// Emits a Begin record at the current time.
    pub fn begin(
        &self,
        name: &str,
        correlation_id: Option<CorrelationId>,
        category: Option<&str>,
        arguments: Option<Arguments>,
    ) -> TraceResult<()> {
        self.emit_here(Phase::Begin, name, correlation_id, category, arguments, None)
    }

    /// Emits an End record at the current time.
    ///
    /// No check that a matching Begin was ever emitted; the contract is
    /// purely "emit this phase now".
    pub fn end(
        &self,
        name: &str,
        correlation_id: Option<CorrelationId>,
        category: Option<&str>,
        arguments: Option<Arguments>,
    ) -> TraceResult<()> {
        self.emit_here(Phase::End, name, correlation_id, category, arguments, None)
    }

    /// Emits a Complete record for a slice measured in caller-supplied
    /// millisecond timestamps.
    ///
    /// The record is stamped `ts = start_time_ms * 1000` with
    /// `dur = (end_time_ms - start_time_ms) * 1000` (saturating on a
    /// reversed interval). The ending (calling) context's name is
    /// registered; `start_context`, when given, is registered too — the
    /// slice may have begun on a different context than it ends on.
    /// Arguments are augmented with the four fixed starting/ending context
    /// keys; the starting pair degrades to empty strings when no start
    /// context is supplied.
    #[allow(clippy::too_many_arguments)]
    pub fn complete(
        &self,
        name: &str,
        start_time_ms: u64,
        end_time_ms: u64,
        category: Option<&str>,
        arguments: Option<Arguments>,
        correlation_id: Option<CorrelationId>,
        start_context: Option<&ExecutionContext>,
    ) -> TraceResult<()> {
        let timestamp_us = start_time_ms * 1000;
        let duration_us = end_time_ms.saturating_sub(start_time_ms) * 1000;

        let session_id = self.session_id();
        let context = ExecutionContext::current();
        self.registry
            .register_if_absent(session_id, context.id, &context.name);
        if let Some(start) = start_context {
            self.registry
                .register_if_absent(session_id, start.id, &start.name);
        }

        let mut merged = arguments.unwrap_or_default();
        match start_context {
            Some(start) => {
                merged.insert(ARGUMENT_STARTING_THREAD_ID, start.id as i64);
                merged.insert(ARGUMENT_STARTING_THREAD_NAME, start.name.as_str());
            }
            None => {
                merged.insert(ARGUMENT_STARTING_THREAD_ID, "");
                merged.insert(ARGUMENT_STARTING_THREAD_NAME, "");
            }
        }
        merged.insert(ARGUMENT_ENDING_THREAD_ID, context.id as i64);
        merged.insert(ARGUMENT_ENDING_THREAD_NAME, context.name.as_str());

        let mut event = TraceEvent::new(
            name,
            Phase::Complete,
            timestamp_us,
            session_id,
            context.id,
        )
        .with_arguments(merged)
        .with_duration(duration_us);
        if let Some(id) = correlation_id {
            event = event.with_correlation_id(id);
        }
        if let Some(category) = category {
            event = event.with_category(category);
        }
        self.emit(&event)
    }

    /// Emits a Counter record. `arguments` carries the sampled values and
    /// is required — a counter without values is meaningless.
    pub fn counter(
        &self,
        name: &str,
        arguments: Arguments,
        category: Option<&str>,
    ) -> TraceResult<()> {
        self.emit_here(Phase::Counter, name, None, category, Some(arguments), None)
    }

    /// Emits an Instant record tagged with `scope`.
    pub fn instant(
        &self,
        name: &str,
        scope: InstantScope,
        category: Option<&str>,
        arguments: Option<Arguments>,
    ) -> TraceResult<()> {
        self.emit_here(Phase::Instant, name, None, category, arguments, Some(scope))
    }

    /// Emits one flow record keyed by `kind`; all records sharing a
    /// correlation id form one logical flow across arbitrary contexts.
    pub fn flow(
        &self,
        correlation_id: CorrelationId,
        name: &str,
        kind: FlowKind,
        arguments: Option<Arguments>,
        category: Option<&str>,
    ) -> TraceResult<()> {
        self.emit_here(
            kind.phase(),
            name,
            Some(correlation_id),
            category,
            arguments,
            None,
        )
    }

    /// Drains the thread-name registry and emits one Metadata/ThreadName
    /// record per entry, all stamped with a single timestamp.
    ///
    /// The engine never flushes on its own; the session's owner must call
    /// this periodically for accumulated names to reach the stream.
    pub fn flush_thread_names(&self) -> TraceResult<()> {
        let timestamp_us = clock::now_us();
        for (key, name) in self.registry.drain() {
            let mut arguments = Arguments::new();
            arguments.insert("name", name);
            let event = TraceEvent::new(
                MetadataKind::ThreadName.key(),
                Phase::Metadata,
                timestamp_us,
                key.session_id,
                key.context_id,
            )
            .with_arguments(arguments);
            self.emit(&event)?;
        }
        Ok(())
    }

    /// Builds and emits an event on the calling context, registering the
    /// context's name as a side effect.
    fn emit_here(
        &self,
        phase: Phase,
        name: &str,
        correlation_id: Option<CorrelationId>,
        category: Option<&str>,
        arguments: Option<Arguments>,
        scope: Option<InstantScope>,
    ) -> TraceResult<()> {
        let session_id = self.session_id();
        let context = ExecutionContext::current();
        self.registry
            .register_if_absent(session_id, context.id, &context.name);

        let mut event = TraceEvent::new(name, phase, clock::now_us(), session_id, context.id);
        if let Some(scope) = scope {
            event = event.with_scope(scope);
        }
        if let Some(arguments) = arguments {
            event = event.with_arguments(arguments);
        }
        if let Some(id) = correlation_id {
            event = event.with_correlation_id(id);
        }
        if let Some(category) = category {
            event = event.with_category(category);
        }
        self.emit(&event)
    }

    fn emit(&self, event: &TraceEvent) -> TraceResult<()> {
        let line = event.to_json_line()?;
        self.sink.write_line(&line)
    }
}
