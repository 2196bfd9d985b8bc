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

use crate::sink::TraceSink;
use chronicle_core::{TraceError, TraceResult};
use std::io::Write;

/// Sink writing each line to stdout.
///
/// The whole line is written in a single call while holding the stdout
/// lock, so concurrent emitters never interleave within a line. An optional
/// tag is prepended to every line, letting trace output be extracted from a
/// stream that mixes in ordinary logging.
#[derive(Debug, Default)]
pub struct StdoutSink {
    tag: Option<String>,
}

impl StdoutSink {
    /// Creates an untagged stdout sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stdout sink prefixing every line with `tag` and a space.
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
        }
    }
}

impl TraceSink for StdoutSink {
    fn write_line(&self, line: &str) -> TraceResult<()> {
        let mut stdout = std::io::stdout().lock();
        let result = match &self.tag {
            Some(tag) => writeln!(stdout, "{tag} {line}"),
            None => writeln!(stdout, "{line}"),
        };
        result.map_err(|e| TraceError::Sink(e.to_string()))
    }
}
