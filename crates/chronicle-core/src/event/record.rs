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

//! The canonical event record and its line encoding.

use crate::event::args::Arguments;
use crate::event::error::{TraceError, TraceResult};
use crate::event::phase::{InstantScope, Phase};
use serde::Serialize;

/// Caller-assigned grouping key for one logical stream of events (`pid` on
/// the wire). Need not correspond to an OS process id.
pub type SessionId = u64;

/// Identity of the thread or task an event occurred on (`tid` on the wire).
pub type ContextId = u64;

/// Integer linking events that must be interpreted as paired or related —
/// begin/end across contexts, flow steps (`id` on the wire).
pub type CorrelationId = u64;

/// One self-contained trace event.
///
/// Field declaration order fixes the JSON key order; optional fields are
/// absent from the encoded line when unset, while `name`, `ph`, `ts`, `pid`
/// and `tid` are always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEvent {
    /// Event name.
    pub name: String,
    /// Event kind, encoded as its short phase code.
    #[serde(rename = "ph")]
    pub phase: Phase,
    /// Monotonic, epoch-aligned microseconds.
    #[serde(rename = "ts")]
    pub timestamp_us: u64,
    /// Owning session.
    #[serde(rename = "pid")]
    pub session_id: SessionId,
    /// Emitting execution context.
    #[serde(rename = "tid")]
    pub context_id: ContextId,
    /// Visibility scope, [`Phase::Instant`] events only.
    #[serde(rename = "s", skip_serializing_if = "Option::is_none")]
    pub scope: Option<InstantScope>,
    /// Ordered scalar arguments.
    #[serde(rename = "args", skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Arguments>,
    /// Correlation id pairing this event with related ones.
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<CorrelationId>,
    /// Event category.
    #[serde(rename = "cat", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Slice duration in microseconds, [`Phase::Complete`] events only.
    #[serde(rename = "dur", skip_serializing_if = "Option::is_none")]
    pub duration_us: Option<u64>,
}

impl TraceEvent {
    /// Creates an event with the five required fields; everything optional
    /// starts unset and is attached with the `with_*` builders.
    pub fn new(
        name: impl Into<String>,
        phase: Phase,
        timestamp_us: u64,
        session_id: SessionId,
        context_id: ContextId,
    ) -> Self {
        Self {
            name: name.into(),
            phase,
            timestamp_us,
            session_id,
            context_id,
            scope: None,
            arguments: None,
            correlation_id: None,
            category: None,
            duration_us: None,
        }
    }

    /// Attaches an instant scope, returning the modified event.
    pub fn with_scope(mut self, scope: InstantScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Attaches arguments, returning the modified event.
    pub fn with_arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = Some(arguments);
        self
    }

    /// Attaches a correlation id, returning the modified event.
    pub fn with_correlation_id(mut self, correlation_id: CorrelationId) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    /// Attaches a category, returning the modified event.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Attaches a duration, returning the modified event.
    pub fn with_duration(mut self, duration_us: u64) -> Self {
        self.duration_us = Some(duration_us);
        self
    }

    /// Encodes the event as one self-contained JSON line (without the
    /// trailing newline).
    pub fn to_json_line(&self) -> TraceResult<String> {
        serde_json::to_string(self).map_err(|e| TraceError::Serialize(e.to_string()))
    }
}
