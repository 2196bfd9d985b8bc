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

//! Process-wide correlation-id allocator.

use crate::event::record::CorrelationId;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CORRELATION_ID: AtomicU64 = AtomicU64::new(0);

/// Allocates the next correlation id.
///
/// A single atomic increment: every returned id is globally unique and the
/// sequence is contiguous and strictly increasing under arbitrarily many
/// concurrent callers. Ids start at 1.
pub fn next_correlation_id() -> CorrelationId {
    NEXT_CORRELATION_ID.fetch_add(1, Ordering::Relaxed) + 1
}
