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

//! Error surface of the trace engine.

use std::fmt::Display;

/// A specialized `Result` type for trace operations.
pub type TraceResult<T> = Result<T, TraceError>;

/// An error that can occur while emitting trace events.
///
/// Emission operations are total over their documented input domain; the
/// variants here cover the only real faults — the sink refusing a write,
/// a record failing to encode, and a value outside the scalar argument
/// domain arriving through the fallible conversion path.
#[derive(Debug, Clone)]
pub enum TraceError {
    /// The output sink rejected a write. Fatal for the current call; the
    /// engine performs no retries.
    Sink(String),
    /// The event record could not be encoded into a line.
    Serialize(String),
    /// A value outside the closed scalar domain was submitted as an event
    /// argument.
    UnsupportedArgument(String),
}

impl Display for TraceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceError::Sink(msg) => write!(f, "Sink write failed: {msg}"),
            TraceError::Serialize(msg) => write!(f, "Event serialization failed: {msg}"),
            TraceError::UnsupportedArgument(msg) => {
                write!(f, "Unsupported argument value: {msg}")
            }
        }
    }
}

impl std::error::Error for TraceError {}
