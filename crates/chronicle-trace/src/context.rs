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

//! Identity of the calling execution context.
//!
//! The engine never introspects scheduling; it only needs a stable integer
//! id and a human-readable name for whatever thread an event happens on.
//! Ids are handed out once per thread from a process-wide counter. They
//! identify — events that may begin and end on different contexts are
//! paired by correlation id, never by context id equality.

use chronicle_core::ContextId;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static CURRENT: ExecutionContext = ExecutionContext::assign();
}

/// Identity of one execution context: a process-unique id and a
/// human-readable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Stable id of this context, assigned on its first trace activity.
    pub id: ContextId,
    /// The OS thread name when set, otherwise `thread-<id>`.
    pub name: String,
}

impl ExecutionContext {
    /// Returns the calling thread's identity, assigning it on first use.
    pub fn current() -> Self {
        CURRENT.with(|context| context.clone())
    }

    fn assign() -> Self {
        let id = NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed) + 1;
        let name = match std::thread::current().name() {
            Some(name) => name.to_owned(),
            None => format!("thread-{id}"),
        };
        Self { id, name }
    }
}
