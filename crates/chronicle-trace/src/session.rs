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

//! Creation of independent trace sessions over one shared sink.

use crate::emitter::TraceEmitter;
use crate::sink::{StdoutSink, TraceSink};
use chronicle_core::{Arguments, SessionId, TraceResult};
use std::sync::Arc;

/// Creates independent [`TraceEmitter`] instances, each with its own
/// session id and thread-name registry, writing to one shared sink.
///
/// Unrelated logical streams never share thread-name state: a name
/// registered under one session is invisible to every other session's
/// flush. Sessions appear as separate processes in a timeline viewer.
#[derive(Debug)]
pub struct SessionManager {
    sink: Arc<dyn TraceSink>,
}

impl SessionManager {
    /// Creates a manager whose sessions write to `sink`.
    pub fn new(sink: Arc<dyn TraceSink>) -> Self {
        Self { sink }
    }

    /// Creates a manager whose sessions write untagged lines to stdout.
    pub fn stdout() -> Self {
        Self::new(Arc::new(StdoutSink::new()))
    }

    /// Creates an emitter for a new session.
    ///
    /// When `name` is given, the session's Metadata/ProcessName record is
    /// emitted immediately, so the session appears named in the viewer from
    /// its first event.
    pub fn create(
        &self,
        id: SessionId,
        name: Option<&str>,
        arguments: Option<Arguments>,
    ) -> TraceResult<TraceEmitter> {
        let emitter = TraceEmitter::new(self.sink.clone());
        emitter.set_session(id, name, arguments)?;
        Ok(emitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn test_named_session_announces_itself() {
        let sink = Arc::new(MemorySink::new());
        let manager = SessionManager::new(sink.clone());
        let emitter = manager.create(100, Some("ingest"), None).unwrap();

        assert_eq!(emitter.session_id(), 100);
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        let event: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(event["name"], "process_name");
        assert_eq!(event["args"]["name"], "ingest");
    }

    #[test]
    fn test_anonymous_session_is_silent() {
        let sink = Arc::new(MemorySink::new());
        let manager = SessionManager::new(sink.clone());
        let emitter = manager.create(7, None, None).unwrap();

        assert_eq!(emitter.session_id(), 7);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_sessions_do_not_share_registry_state() {
        let sink = Arc::new(MemorySink::new());
        let manager = SessionManager::new(sink.clone());
        let session_a = manager.create(100, None, None).unwrap();
        let session_b = manager.create(200, None, None).unwrap();

        // Registering under A (via an emission) is invisible to B's flush.
        session_a
            .instant("Start", Default::default(), None, None)
            .unwrap();
        sink.take_lines();

        session_b.flush_thread_names().unwrap();
        assert!(sink.is_empty());

        session_a.flush_thread_names().unwrap();
        assert_eq!(sink.len(), 1);
    }
}
