//! Dispatch timing, compiled in with the `profiling` feature.
//!
//! `handle_event` times each dispatch under the event's name
//! (`"pointer_move"`, `"tick"`, ...) and `transition_from` times each walk
//! under `"transition"`. Samples land in per-thread [`OperationStats`] and
//! any scope slower than [`SLOW_SCOPE_MS`] is traced, indented by nesting.
//!
//! ```toml
//! [dependencies]
//! boardstate = { features = ["profiling"] }
//! ```

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::trace;

/// Scopes slower than this are traced
pub const SLOW_SCOPE_MS: f64 = 1.0;

/// Samples kept per operation
const STATS_SAMPLE_COUNT: usize = 100;

thread_local! {
    /// Live timers on this thread; a hook that transitions nests them
    static CURRENT_DEPTH: Cell<usize> = const { Cell::new(0) };

    static OPERATION_STATS: RefCell<HashMap<&'static str, OperationStats>> = RefCell::new(HashMap::new());
}

/// Time the rest of the enclosing scope under `name`. Expands to nothing
/// without the `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name);
    };
}

/// Rolling timings for one operation name.
#[derive(Debug, Clone)]
pub struct OperationStats {
    samples: VecDeque<f64>,
    count: u64,
    min_ms: f64,
    max_ms: f64,
    sum_ms: f64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            min_ms: f64::MAX,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl OperationStats {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() == STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.min_ms = self.min_ms.min(ms);
        self.max_ms = self.max_ms.max(ms);
    }

    /// Mean of the retained samples
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    /// 95th percentile of the retained samples
    pub fn p95(&self) -> f64 {
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(f64::total_cmp);
        let idx = (sorted.len() as f64 * 0.95) as usize;
        sorted.get(idx.min(sorted.len().saturating_sub(1))).copied().unwrap_or(0.0)
    }

    /// Samples ever recorded, including evicted ones
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min(&self) -> f64 {
        if self.count == 0 { 0.0 } else { self.min_ms }
    }

    pub fn max(&self) -> f64 {
        self.max_ms
    }
}

pub fn record_operation(name: &'static str, elapsed_ms: f64) {
    OPERATION_STATS.with(|stats| stats.borrow_mut().entry(name).or_default().record(elapsed_ms));
}

/// This thread's timings for `name`, if any were recorded.
pub fn operation_stats(name: &str) -> Option<OperationStats> {
    OPERATION_STATS.with(|stats| stats.borrow().get(name).cloned())
}

pub fn reset_operation_stats() {
    OPERATION_STATS.with(|stats| stats.borrow_mut().clear());
}

/// Records its lifetime under `name` when dropped.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    depth: usize,
}

impl ScopedTimer {
    pub fn new(name: &'static str) -> Self {
        let depth = CURRENT_DEPTH.with(|d| d.replace(d.get() + 1));
        Self {
            name,
            start: Instant::now(),
            depth,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Timers already live when this one started
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        CURRENT_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
        record_operation(self.name, elapsed_ms);

        if elapsed_ms > SLOW_SCOPE_MS {
            let indent = "  ".repeat(self.depth);
            trace!(depth = self.depth, "{}[PERF] {}: {:.2}ms", indent, self.name, elapsed_ms);
        }
    }
}
