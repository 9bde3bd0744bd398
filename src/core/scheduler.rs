use crate::domain::ports::{FrameScheduler, Workload};
use crate::utils::error::{Result, ShopfrontError};
use std::fmt;

pub const DEFAULT_TOTAL_ITERATIONS: u64 = 10_000_000;
pub const DEFAULT_CHUNK_SIZE: u64 = 100_000;

/// Immutable description of a subdividable unit of work: an upper bound on
/// the iteration count and the slice size processed between yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkRange {
    total: u64,
    chunk_size: u64,
}

impl WorkRange {
    /// Fails fast on `chunk_size == 0`; that input would otherwise never
    /// make progress. A chunk size larger than `total` is fine, the whole
    /// range is processed in one slice.
    pub fn new(total: u64, chunk_size: u64) -> Result<Self> {
        if chunk_size == 0 {
            return Err(ShopfrontError::InvalidConfigValueError {
                field: "chunk_size".to_string(),
                value: chunk_size.to_string(),
                reason: "Chunk size must be at least 1".to_string(),
            });
        }
        Ok(Self { total, chunk_size })
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    /// Number of slices a full run takes: `ceil(total / chunk_size)`.
    pub fn slice_count(&self) -> u64 {
        self.total.div_ceil(self.chunk_size)
    }
}

impl Default for WorkRange {
    fn default() -> Self {
        Self {
            total: DEFAULT_TOTAL_ITERATIONS,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Delivered exactly once, after the progress cursor reaches the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub slices: u64,
    pub iterations: u64,
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "done")
    }
}

/// Runs a large CPU-bound workload in bounded slices, yielding to the frame
/// scheduler between slices so one run never occupies the thread for longer
/// than a single chunk.
///
/// `run` consumes the scheduler: a completed run is terminal and a repeat
/// needs a fresh instance. There is no cancellation handle; once started a
/// run goes to completion or to the first failing slice.
pub struct ChunkedScheduler<W: Workload, F: FrameScheduler> {
    workload: W,
    frames: F,
}

impl<W: Workload, F: FrameScheduler> ChunkedScheduler<W, F> {
    pub fn new(workload: W, frames: F) -> Self {
        Self { workload, frames }
    }

    /// Processes `range` in `ceil(total / chunk_size)` slices. The cursor
    /// only moves forward and the final slice is clamped to `total`, so the
    /// loop always terminates. `total == 0` completes immediately without
    /// touching the workload or the frame scheduler.
    pub async fn run(self, range: WorkRange) -> Result<Completion> {
        let total = range.total();
        let chunk_size = range.chunk_size();
        let mut cursor: u64 = 0;
        let mut slices: u64 = 0;

        while cursor < total {
            let slice_end = cursor.saturating_add(chunk_size).min(total);
            self.workload.process(cursor..slice_end)?;
            cursor = slice_end;
            slices += 1;
            tracing::trace!(cursor, total, slices, "chunk processed");

            if cursor < total {
                self.frames.next_frame().await;
            }
        }

        Ok(Completion {
            slices,
            iterations: cursor,
        })
    }
}

/// Reference placeholder workload: the discarded square-root identity from
/// the original page script. `black_box` keeps the loop from being
/// optimized away; the point is to burn CPU proportional to the slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqrtWorkload;

impl Workload for SqrtWorkload {
    fn process(&self, range: std::ops::Range<u64>) -> Result<()> {
        for i in range {
            std::hint::black_box((i as f64).sqrt() * (i as f64).sqrt());
        }
        Ok(())
    }
}
