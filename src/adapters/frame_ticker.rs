use crate::domain::ports::FrameScheduler;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

/// One 60 Hz frame, the cadence the original page yields at.
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Production frame scheduler: approximates "resume before the next visual
/// refresh" by sleeping one frame interval between chunks.
#[derive(Debug, Clone, Copy)]
pub struct FrameTicker {
    interval: Duration,
}

impl FrameTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

impl Default for FrameTicker {
    fn default() -> Self {
        Self::from_millis(DEFAULT_FRAME_INTERVAL_MS)
    }
}

#[async_trait]
impl FrameScheduler for FrameTicker {
    async fn next_frame(&self) {
        sleep(self.interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_next_frame_waits_one_interval() {
        let ticker = FrameTicker::from_millis(16);
        let before = tokio::time::Instant::now();
        ticker.next_frame().await;
        assert_eq!(before.elapsed(), Duration::from_millis(16));
    }
}
