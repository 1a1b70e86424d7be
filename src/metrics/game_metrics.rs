use std::time::{Duration, Instant};

/// Session figures shown next to the score
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub peak_score: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            peak_score: 0,
        }
    }

    pub fn update(&mut self, score: u32) {
        self.elapsed_time = self.start_time.elapsed();
        self.peak_score = self.peak_score.max(score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
