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

//! # Chronicle Core
//!
//! Foundational crate for the Chronicle trace-event engine: the event
//! record and its wire encoding, the closed argument-value domain, and the
//! process-wide clock and correlation-id allocator shared by every session.
//!
//! This crate defines the "common language" of the engine — the abstract
//! *what* of a trace stream — while `chronicle-trace` provides the emitters,
//! registries, and sinks that actually produce one.

#![warn(missing_docs)]

pub mod event;
pub mod time;

pub use event::{
    ArgValue, Arguments, ContextId, CorrelationId, FlowKind, InstantScope, MetadataKind, Phase,
    SessionId, TraceError, TraceEvent, TraceResult,
};
pub use time::clock;
pub use time::ids::next_correlation_id;
