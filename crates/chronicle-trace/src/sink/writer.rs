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
use std::fmt::Debug;
use std::io::Write;
use std::sync::Mutex;

/// Sink writing lines to an arbitrary `Write` target (a file, a pipe, a
/// `Vec<u8>` in tests) behind a mutex.
///
/// Holding the lock across the whole `writeln!` keeps each line atomic.
#[derive(Debug)]
pub struct WriterSink<W: Write + Send + Debug + 'static> {
    writer: Mutex<W>,
}

impl<W: Write + Send + Debug + 'static> WriterSink<W> {
    /// Wraps `writer` as a sink.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send + Debug + 'static> TraceSink for WriterSink<W> {
    fn write_line(&self, line: &str) -> TraceResult<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| TraceError::Sink("writer lock poisoned".to_owned()))?;
        writeln!(writer, "{line}").map_err(|e| TraceError::Sink(e.to_string()))
    }
}
