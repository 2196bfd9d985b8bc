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
use std::sync::RwLock;

/// In-memory capture sink for tests and in-process inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: RwLock<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all captured lines, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .read()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Returns all captured lines and clears the capture.
    pub fn take_lines(&self) -> Vec<String> {
        match self.lines.write() {
            Ok(mut lines) => std::mem::take(&mut *lines),
            Err(_) => Vec::new(),
        }
    }

    /// Number of captured lines.
    pub fn len(&self) -> usize {
        self.lines.read().map(|lines| lines.len()).unwrap_or(0)
    }

    /// Whether nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TraceSink for MemorySink {
    fn write_line(&self, line: &str) -> TraceResult<()> {
        let mut lines = self
            .lines
            .write()
            .map_err(|_| TraceError::Sink("capture lock poisoned".to_owned()))?;
        lines.push(line.to_owned());
        Ok(())
    }
}
