use std::time::{Duration, Instant};

/// Session statistics shown alongside the board
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: usize,
    pub games_played: u32,
    /// Food eaten across all finished games
    pub total_food: usize,
    game_recorded: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            total_food: 0,
            game_recorded: false,
        }
    }

    /// Refresh the clock; frozen once the current game is over
    pub fn update(&mut self) {
        if !self.game_recorded {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.game_recorded = false;
    }

    /// Record a finished game. Repeated calls for the same game are ignored.
    pub fn on_game_over(&mut self, final_score: usize) {
        if self.game_recorded {
            return;
        }
        self.game_recorded = true;
        self.games_played += 1;
        self.total_food += final_score;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_food as f64 / self.games_played as f64
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10);
        metrics.on_game_start();
        metrics.on_game_over(5);
        metrics.on_game_start();
        metrics.on_game_over(15);

        assert_eq!(metrics.high_score, 15);
        assert_eq!(metrics.games_played, 3);
        assert_eq!(metrics.total_food, 30);
        assert_eq!(metrics.average_score(), 10.0);
    }

    #[test]
    fn test_game_over_recorded_once() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(4);
        metrics.on_game_over(4);

        assert_eq!(metrics.games_played, 1);
        assert_eq!(metrics.total_food, 4);
    }

    #[test]
    fn test_clock_freezes_after_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(9);
        metrics.on_game_over(0);
        metrics.update();
        assert_eq!(metrics.elapsed_time, Duration::from_secs(9));

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time < Duration::from_secs(1));
    }
}
