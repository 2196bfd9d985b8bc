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

//! Deduplicating cache of execution-context names awaiting a flush.

use chronicle_core::{ContextId, SessionId};
use std::collections::HashMap;
use std::sync::RwLock;

/// Key of one registry entry: names are tracked per session so two sessions
/// using the same underlying thread each emit that name independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThreadKey {
    /// Session the name was observed under.
    pub session_id: SessionId,
    /// The named execution context.
    pub context_id: ContextId,
}

/// Best-effort concurrent cache mapping (session, context) to a
/// human-readable name, so each name is emitted at most once per flush
/// cycle.
///
/// The presence check in [`register_if_absent`](Self::register_if_absent)
/// and the insert are two separate lock acquisitions, and registration is
/// not exclusive against [`drain`](Self::drain): a register racing a drain
/// may be lost or doubled. Duplicate thread-name metadata is harmless to a
/// downstream viewer, and the relaxed discipline keeps the hot emission
/// path from serializing on this cache.
#[derive(Debug, Default)]
pub struct ThreadNameRegistry {
    names: RwLock<HashMap<ThreadKey, String>>,
}

impl ThreadNameRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` for the given key unless the key is already present.
    pub fn register_if_absent(&self, session_id: SessionId, context_id: ContextId, name: &str) {
        let key = ThreadKey {
            session_id,
            context_id,
        };
        if let Ok(names) = self.names.read() {
            if names.contains_key(&key) {
                return;
            }
        }
        if let Ok(mut names) = self.names.write() {
            names.insert(key, name.to_owned());
        }
    }

    /// Returns a snapshot of all current entries and clears the registry.
    pub fn drain(&self) -> HashMap<ThreadKey, String> {
        match self.names.write() {
            Ok(mut names) => std::mem::take(&mut *names),
            Err(_) => HashMap::new(),
        }
    }

    /// Number of names currently awaiting a flush.
    pub fn len(&self) -> usize {
        self.names.read().map(|names| names.len()).unwrap_or(0)
    }

    /// Whether no names are awaiting a flush.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
