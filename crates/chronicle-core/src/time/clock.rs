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

//! Monotonic, epoch-aligned microsecond clock.
//!
//! Timestamps must satisfy two properties at once: they must be comparable
//! across a process lifetime without ever running backwards (so a closing
//! event can never predate its opening one), and they must be meaningful as
//! wall-clock instants so traces from different runs line up in a viewer.
//! A raw `SystemTime` read gives up the first under NTP steps; a raw
//! `Instant` gives up the second. The clock therefore captures one
//! (epoch, `Instant`) base pair at first use and derives every reading from
//! the elapsed monotonic time since.

use std::sync::OnceLock;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

#[derive(Debug)]
struct ClockBase {
    epoch_us: u64,
    origin: Instant,
}

static BASE: OnceLock<ClockBase> = OnceLock::new();

fn base() -> &'static ClockBase {
    BASE.get_or_init(|| ClockBase {
        // A system clock before the epoch collapses to zero rather than
        // panicking; traces stay well-formed, just unaligned.
        epoch_us: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or(0),
        origin: Instant::now(),
    })
}

/// Current time in microseconds since the Unix epoch, monotonic within this
/// process.
pub fn now_us() -> u64 {
    let base = base();
    base.epoch_us + base.origin.elapsed().as_micros() as u64
}

/// Current time in milliseconds on the same timebase as [`now_us`].
///
/// Callers of `complete` measure start and end in milliseconds; reading
/// them from the same base keeps Complete slices aligned with Begin/End
/// slices in the final timeline.
pub fn now_ms() -> u64 {
    now_us() / 1000
}
