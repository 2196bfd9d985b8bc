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

//! Emits a small two-session trace to stdout.
//!
//! Pipe the output into a file, strip the leading tag, wrap the lines in
//! `[...]` with comma separators (or use a newline-delimited importer), and
//! load the result in `about:tracing` or Perfetto.

use anyhow::Result;
use chronicle_core::{next_correlation_id, Arguments, FlowKind, InstantScope};
use chronicle_trace::{SessionManager, StdoutSink};
use std::sync::Arc;

const TAG: &str = "Chronicle";

fn main() -> Result<()> {
    env_logger::init();

    let manager = SessionManager::new(Arc::new(StdoutSink::with_tag(TAG)));
    let pid = std::process::id() as u64;

    let main_session = Arc::new(manager.create(pid, Some("tracegen"), None)?);
    log::info!("emitting demo trace for session {pid}");

    // Nested scoped slices on the main thread.
    main_session.trace("startup", Some("demo"), None, || {
        main_session.trace("load-config", Some("demo"), None, || {
            std::thread::sleep(std::time::Duration::from_millis(5));
        });
        std::thread::sleep(std::time::Duration::from_millis(2));
    });

    // An explicit Begin/End pair with counters sampled in between.
    main_session.begin("churn", None, Some("demo"), None)?;
    for i in 0..10i64 {
        let values: Arguments = [("value", i * i)].into_iter().collect();
        main_session.counter("churn-progress", values, Some("demo"))?;
        std::thread::sleep(std::time::Duration::from_millis(1));
    }
    main_session.end("churn", None, Some("demo"), None)?;

    // A flow handed across a worker thread.
    let flow_id = next_correlation_id();
    main_session.flow(flow_id, "handoff", FlowKind::Start, None, None)?;
    {
        let session = Arc::clone(&main_session);
        std::thread::Builder::new()
            .name("worker".to_owned())
            .spawn(move || {
                session
                    .flow(flow_id, "handoff", FlowKind::Step, None, None)
                    .unwrap_or_else(|e| log::warn!("flow step dropped: {e}"));
                session.trace("worker-chunk", Some("demo"), None, || {
                    std::thread::sleep(std::time::Duration::from_millis(8));
                });
            })?
            .join()
            .expect("worker thread panicked");
    }
    main_session.flow(flow_id, "handoff", FlowKind::End, None, None)?;

    main_session.instant("demo-done", InstantScope::Process, None, None)?;

    // A second, independent session shows up as its own process row.
    let side_session = manager.create(pid + 1, Some("tracegen-side"), None)?;
    let mut values = Arguments::new();
    values.insert("queued", 3i64);
    values.insert("active", true);
    side_session.counter("side-load", values, None)?;

    // Names accumulate silently until their owner flushes them.
    main_session.flush_thread_names()?;
    side_session.flush_thread_names()?;

    Ok(())
}
