use std::time::{Duration, Instant};

use crate::game::{Phase, Snapshot};

/// Running totals across every game of one sitting, fed from engine snapshots.
/// Kept in memory only.
pub struct SessionStats {
    game_started: Instant,
    /// Play time of the current game; stops moving once it is over
    pub game_clock: Duration,
    pub best_score: u32,
    pub longest_snake: usize,
    pub food_eaten: u32,
    pub games_finished: u32,
    last_score: u32,
    last_phase: Phase,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            game_started: now,
            game_clock: Duration::ZERO,
            best_score: 0,
            longest_snake: 0,
            food_eaten: 0,
            games_finished: 0,
            last_score: 0,
            last_phase: Phase::Running,
        }
    }

    pub fn observe(&mut self, snapshot: &Snapshot) {
        self.observe_at(snapshot, Instant::now());
    }

    fn observe_at(&mut self, snapshot: &Snapshot, now: Instant) {
        // The clock also catches the tick that ended the game, then freezes
        if self.last_phase == Phase::Running {
            self.game_clock = now.saturating_duration_since(self.game_started);
        }

        self.food_eaten += snapshot.score.saturating_sub(self.last_score);
        self.last_score = snapshot.score;
        self.best_score = self.best_score.max(snapshot.score);
        self.longest_snake = self.longest_snake.max(snapshot.segments.len());

        if self.last_phase == Phase::Running && snapshot.phase == Phase::GameOver {
            self.games_finished += 1;
        }
        self.last_phase = snapshot.phase;
    }

    pub fn on_restart(&mut self) {
        self.restart_at(Instant::now());
    }

    fn restart_at(&mut self, now: Instant) {
        self.game_started = now;
        self.game_clock = Duration::ZERO;
        self.last_score = 0;
        self.last_phase = Phase::Running;
    }

    pub fn format_clock(&self) -> String {
        let secs = self.game_clock.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position};

    fn snapshot(len: usize, score: u32, phase: Phase) -> Snapshot {
        Snapshot {
            segments: (0..len as i32).map(|i| Position::new(10 - i, 5)).collect(),
            food: Position::new(3, 3),
            score,
            ticks: 0,
            direction: Direction::Right,
            phase,
        }
    }

    #[test]
    fn test_clock_freezes_at_game_over() {
        let start = Instant::now();
        let mut stats = SessionStats::starting_at(start);

        stats.observe_at(&snapshot(3, 0, Phase::Running), start + Duration::from_secs(42));
        assert_eq!(stats.format_clock(), "00:42");

        stats.observe_at(&snapshot(3, 0, Phase::GameOver), start + Duration::from_secs(71));
        assert_eq!(stats.format_clock(), "01:11");

        stats.observe_at(&snapshot(3, 0, Phase::GameOver), start + Duration::from_secs(600));
        assert_eq!(stats.game_clock, Duration::from_secs(71));
    }

    #[test]
    fn test_totals_span_games() {
        let start = Instant::now();
        let mut stats = SessionStats::starting_at(start);

        stats.observe_at(&snapshot(4, 1, Phase::Running), start);
        stats.observe_at(&snapshot(6, 3, Phase::Running), start);
        stats.observe_at(&snapshot(6, 3, Phase::GameOver), start);
        // Repeated game-over frames count once
        stats.observe_at(&snapshot(6, 3, Phase::GameOver), start);

        stats.restart_at(start + Duration::from_secs(5));
        assert_eq!(stats.game_clock, Duration::ZERO);

        stats.observe_at(&snapshot(3, 0, Phase::Running), start);
        stats.observe_at(&snapshot(5, 2, Phase::GameOver), start);

        assert_eq!(stats.food_eaten, 5);
        assert_eq!(stats.best_score, 3);
        assert_eq!(stats.longest_snake, 6);
        assert_eq!(stats.games_finished, 2);
    }
}
