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

//! Closed sets of event kinds and their single-character wire codes.

use serde::Serialize;
use std::fmt::Display;

/// The kind of a trace event, serialized as its short phase code (`ph`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Opens a duration slice on the emitting context.
    #[serde(rename = "B")]
    Begin,
    /// Closes the most recent open slice with the same name on the
    /// emitting context.
    #[serde(rename = "E")]
    End,
    /// A whole slice in one record, carrying its own duration.
    #[serde(rename = "X")]
    Complete,
    /// A point-in-time marker.
    #[serde(rename = "i")]
    Instant,
    /// Out-of-band naming information (process or thread names).
    #[serde(rename = "M")]
    Metadata,
    /// A sampled set of named values drawn as stacked series.
    #[serde(rename = "C")]
    Counter,
    /// First event of a correlated flow.
    #[serde(rename = "s")]
    FlowStart,
    /// Intermediate event of a correlated flow.
    #[serde(rename = "t")]
    FlowStep,
    /// Last event of a correlated flow.
    #[serde(rename = "f")]
    FlowEnd,
}

impl Phase {
    /// Returns the single-character wire code for this phase.
    pub fn code(&self) -> &'static str {
        match self {
            Phase::Begin => "B",
            Phase::End => "E",
            Phase::Complete => "X",
            Phase::Instant => "i",
            Phase::Metadata => "M",
            Phase::Counter => "C",
            Phase::FlowStart => "s",
            Phase::FlowStep => "t",
            Phase::FlowEnd => "f",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Visibility scope of an [`Phase::Instant`] event, serialized as the `s`
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum InstantScope {
    /// Drawn across the entire timeline.
    #[serde(rename = "g")]
    Global,
    /// Drawn across all contexts of the owning session.
    #[serde(rename = "p")]
    Process,
    /// Drawn on the emitting context only.
    #[default]
    #[serde(rename = "t")]
    Thread,
}

impl InstantScope {
    /// Returns the single-character wire code for this scope.
    pub fn code(&self) -> &'static str {
        match self {
            InstantScope::Global => "g",
            InstantScope::Process => "p",
            InstantScope::Thread => "t",
        }
    }
}

/// Position of an event within a correlated flow.
///
/// All records of one flow share a correlation id; the kind selects which
/// of the three flow phases a given record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowKind {
    /// The flow's first event.
    Start,
    /// An intermediate event.
    Step,
    /// The flow's last event.
    End,
}

impl FlowKind {
    /// Maps the flow kind onto its event phase.
    pub fn phase(self) -> Phase {
        match self {
            FlowKind::Start => Phase::FlowStart,
            FlowKind::Step => Phase::FlowStep,
            FlowKind::End => Phase::FlowEnd,
        }
    }
}

/// What a [`Phase::Metadata`] record names.
///
/// The metadata record's `name` field carries the kind's key; the
/// human-readable name itself travels under `args.name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    /// Names a session ("process" in the viewer).
    ProcessName,
    /// Names one execution context of a session.
    ThreadName,
}

impl MetadataKind {
    /// Returns the metadata record name for this kind.
    pub fn key(self) -> &'static str {
        match self {
            MetadataKind::ProcessName => "process_name",
            MetadataKind::ThreadName => "thread_name",
        }
    }
}
