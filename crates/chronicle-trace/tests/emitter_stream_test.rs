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

//! End-to-end checks over the emitted stream: every line independently
//! parseable, field layout stable, sessions isolated.

use chronicle_core::{Arguments, FlowKind, InstantScope};
use chronicle_trace::{MemorySink, SessionManager, TraceEmitter};
use std::sync::Arc;

fn parse(line: &str) -> serde_json::Value {
    serde_json::from_str(line).expect("every emitted line must parse on its own")
}

#[test]
fn test_session_start_emits_one_process_name_record() {
    // --- 1. ARRANGE ---
    let sink = Arc::new(MemorySink::new());
    let manager = SessionManager::new(sink.clone());

    // --- 2. ACT ---
    let _emitter = manager.create(1234, Some("Proc"), None).unwrap();

    // --- 3. ASSERT ---
    let lines = sink.lines();
    assert_eq!(lines.len(), 1, "exactly one metadata record expected");
    let event = parse(&lines[0]);
    assert_eq!(event["name"], "process_name");
    assert_eq!(event["ph"], "M");
    assert_eq!(event["pid"], 1234);
    assert!(
        event["tid"].as_u64().is_some(),
        "metadata must carry the calling context id"
    );
    assert_eq!(event["args"]["name"], "Proc");
}

#[test]
fn test_begin_end_pair_is_ordered_on_one_context() {
    let sink = Arc::new(MemorySink::new());
    let emitter = TraceEmitter::new(sink.clone());
    emitter.set_session(1, None, None).unwrap();

    emitter.begin("A", None, None, None).unwrap();
    emitter.end("A", None, None, None).unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    let begin = parse(&lines[0]);
    let end = parse(&lines[1]);
    assert_eq!(begin["ph"], "B");
    assert_eq!(end["ph"], "E");
    assert_eq!(begin["name"], end["name"]);
    assert_eq!(begin["pid"], end["pid"]);
    assert_eq!(begin["tid"], end["tid"]);
    assert!(
        end["ts"].as_u64().unwrap() >= begin["ts"].as_u64().unwrap(),
        "End must not predate its Begin"
    );
}

#[test]
fn test_complete_timestamp_and_duration_scaling() {
    let sink = Arc::new(MemorySink::new());
    let emitter = TraceEmitter::new(sink.clone());

    emitter
        .complete("X", 1000, 1500, None, None, None, None)
        .unwrap();

    let event = parse(&sink.lines()[0]);
    assert_eq!(event["ph"], "X");
    assert_eq!(event["ts"], 1_000_000, "ts must be startMs * 1000");
    assert_eq!(event["dur"], 500_000, "dur must be (endMs - startMs) * 1000");
}

#[test]
fn test_two_sessions_differ_only_in_pid() {
    // --- 1. ARRANGE ---
    let sink = Arc::new(MemorySink::new());
    let manager = SessionManager::new(sink.clone());
    let session_a = manager.create(100, None, None).unwrap();
    let session_b = manager.create(200, None, None).unwrap();

    // --- 2. ACT ---
    session_a
        .instant("Start", InstantScope::default(), None, None)
        .unwrap();
    session_b
        .instant("Start", InstantScope::default(), None, None)
        .unwrap();

    // --- 3. ASSERT ---
    let lines = sink.take_lines();
    assert_eq!(lines.len(), 2);
    let a = parse(&lines[0]);
    let b = parse(&lines[1]);
    assert_eq!(a["pid"], 100);
    assert_eq!(b["pid"], 200);
    assert_eq!(a["name"], b["name"]);
    assert_eq!(a["tid"], b["tid"], "same calling thread for both sessions");

    // Registry state is per-session: each flush names the thread once,
    // under its own pid only.
    session_a.flush_thread_names().unwrap();
    let flush_a = sink.take_lines();
    assert_eq!(flush_a.len(), 1);
    assert_eq!(parse(&flush_a[0])["pid"], 100);

    session_b.flush_thread_names().unwrap();
    let flush_b = sink.take_lines();
    assert_eq!(flush_b.len(), 1);
    assert_eq!(parse(&flush_b[0])["pid"], 200);
}

#[test]
fn test_flow_sequence_across_threads() {
    let sink = Arc::new(MemorySink::new());
    let emitter = Arc::new(TraceEmitter::new(sink.clone()));
    emitter.set_session(5, None, None).unwrap();

    emitter.flow(7, "F", FlowKind::Start, None, None).unwrap();
    {
        let emitter = Arc::clone(&emitter);
        std::thread::spawn(move || emitter.flow(7, "F", FlowKind::Step, None, None).unwrap())
            .join()
            .unwrap();
    }
    emitter.flow(7, "F", FlowKind::End, None, None).unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 3);
    let events: Vec<serde_json::Value> = lines.iter().map(|l| parse(l)).collect();
    let phases: Vec<&str> = events.iter().map(|e| e["ph"].as_str().unwrap()).collect();
    assert_eq!(phases, vec!["s", "t", "f"]);
    for event in &events {
        assert_eq!(event["id"], 7, "all flow records share the correlation id");
    }
    let timestamps: Vec<u64> = events.iter().map(|e| e["ts"].as_u64().unwrap()).collect();
    assert!(
        timestamps.windows(2).all(|w| w[0] <= w[1]),
        "flow timestamps must be non-decreasing"
    );
    assert_ne!(
        events[0]["tid"], events[1]["tid"],
        "the step ran on a different context"
    );
}

#[test]
fn test_cross_context_complete_names_both_threads() {
    let sink = Arc::new(MemorySink::new());
    let emitter = Arc::new(TraceEmitter::new(sink.clone()));
    emitter.set_session(9, None, None).unwrap();

    // Work begins here, ends on a worker: the ending side emits the record
    // and hands over the starting identity explicitly.
    let start_context = chronicle_trace::ExecutionContext::current();
    {
        let emitter = Arc::clone(&emitter);
        std::thread::Builder::new()
            .name("finisher".to_owned())
            .spawn(move || {
                emitter
                    .complete("handoff", 10, 20, None, None, None, Some(&start_context))
                    .unwrap()
            })
            .unwrap()
            .join()
            .unwrap();
    }

    let event = parse(&sink.lines()[0]);
    let starting_id = event["args"]["startingThreadId"].as_i64().unwrap();
    let ending_id = event["args"]["endingThreadId"].as_i64().unwrap();
    assert_ne!(starting_id, ending_id);
    assert_eq!(event["args"]["endingThreadName"], "finisher");
    assert_eq!(
        event["tid"].as_u64().unwrap(),
        ending_id as u64,
        "the record is attributed to the ending context"
    );

    // Both identities were registered for the next flush.
    emitter.flush_thread_names().unwrap();
    let flushed = sink.take_lines();
    let name_records: Vec<serde_json::Value> = flushed
        .iter()
        .map(|l| parse(l))
        .filter(|e| e["name"] == "thread_name")
        .collect();
    assert_eq!(name_records.len(), 2, "starting and ending context named");
}

#[test]
fn test_flush_stamps_one_timestamp_per_cycle() {
    let sink = Arc::new(MemorySink::new());
    let emitter = Arc::new(TraceEmitter::new(sink.clone()));
    emitter.set_session(3, None, None).unwrap();

    // Touch the emitter from several contexts so the flush has entries.
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let emitter = Arc::clone(&emitter);
            scope.spawn(move || emitter.begin("warm", None, None, None).unwrap());
        }
    });
    sink.take_lines();

    emitter.flush_thread_names().unwrap();
    let flushed = sink.take_lines();
    assert_eq!(flushed.len(), 4);
    let stamps: Vec<u64> = flushed
        .iter()
        .map(|l| parse(l)["ts"].as_u64().unwrap())
        .collect();
    assert!(
        stamps.windows(2).all(|w| w[0] == w[1]),
        "one flush cycle shares a single timestamp"
    );

    // Nothing left behind.
    emitter.flush_thread_names().unwrap();
    assert!(sink.is_empty());
}

#[test]
fn test_arguments_survive_the_wire_in_order() {
    let sink = Arc::new(MemorySink::new());
    let emitter = TraceEmitter::new(sink.clone());

    let mut values = Arguments::new();
    values.insert("label", "ingest");
    values.insert("count", 12i64);
    values.insert("ratio", 0.75f64);
    values.insert("ok", true);
    emitter.counter("stats", values, None).unwrap();

    let line = &sink.lines()[0];
    let args_start = line.find("\"args\":").unwrap();
    assert!(
        line[args_start..].starts_with(
            r#""args":{"label":"ingest","count":12,"ratio":0.75,"ok":true}"#
        ),
        "argument order must match insertion order, got: {line}"
    );
}
