//! Cross-round player statistics
//!
//! Cumulative counters updated only at round boundaries. Held in memory for
//! the lifetime of the process; the session owns one instance and passes it
//! around explicitly, there is no global.

/// Win/loss record, score total, and streaks for one player
///
/// Mutation happens only through [`record_win`](Self::record_win) and
/// [`record_loss`](Self::record_loss); abandoned rounds touch nothing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    games_played: u32,
    games_won: u32,
    total_score: u64,
    current_streak: u32,
    best_streak: u32,
    words_completed: Vec<String>,
}

impl PlayerStats {
    /// Fresh stats, all zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a winning round into the record
    pub fn record_win(&mut self, word: &str, score: u32) {
        self.games_played += 1;
        self.games_won += 1;
        self.total_score += u64::from(score);
        self.current_streak += 1;
        self.best_streak = self.best_streak.max(self.current_streak);
        self.words_completed.push(word.to_string());
    }

    /// Fold a losing round into the record
    ///
    /// Resets the current streak; the best streak stays.
    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.current_streak = 0;
    }

    /// Rounds finished (wins plus losses; abandoned rounds are not counted)
    #[inline]
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Rounds won
    #[inline]
    #[must_use]
    pub const fn games_won(&self) -> u32 {
        self.games_won
    }

    /// Sum of all winning scores
    #[inline]
    #[must_use]
    pub const fn total_score(&self) -> u64 {
        self.total_score
    }

    /// Consecutive wins since the last loss
    #[inline]
    #[must_use]
    pub const fn current_streak(&self) -> u32 {
        self.current_streak
    }

    /// Longest win streak ever recorded
    #[inline]
    #[must_use]
    pub const fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// Words guessed successfully, oldest first
    #[inline]
    #[must_use]
    pub fn words_completed(&self) -> &[String] {
        &self.words_completed
    }

    /// Percentage of finished rounds that were won
    ///
    /// Zero before the first finished round.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_stats_are_zero() {
        let stats = PlayerStats::new();
        assert_eq!(stats.games_played(), 0);
        assert_eq!(stats.games_won(), 0);
        assert_eq!(stats.total_score(), 0);
        assert_eq!(stats.current_streak(), 0);
        assert_eq!(stats.best_streak(), 0);
        assert!(stats.words_completed().is_empty());
        assert!((stats.win_rate() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn win_updates_every_counter() {
        let mut stats = PlayerStats::new();
        stats.record_win("pizza", 110);

        assert_eq!(stats.games_played(), 1);
        assert_eq!(stats.games_won(), 1);
        assert_eq!(stats.total_score(), 110);
        assert_eq!(stats.current_streak(), 1);
        assert_eq!(stats.best_streak(), 1);
        assert_eq!(stats.words_completed(), ["pizza"]);
    }

    #[test]
    fn loss_resets_current_streak_only() {
        let mut stats = PlayerStats::new();
        stats.record_win("pizza", 110);
        stats.record_win("sushi", 95);
        stats.record_loss();

        assert_eq!(stats.games_played(), 3);
        assert_eq!(stats.games_won(), 2);
        assert_eq!(stats.current_streak(), 0);
        assert_eq!(stats.best_streak(), 2);
        assert_eq!(stats.total_score(), 205);
    }

    #[test]
    fn best_streak_never_below_current() {
        let mut stats = PlayerStats::new();
        let outcomes = [true, true, false, true, true, true, false, true];

        for won in outcomes {
            if won {
                stats.record_win("word", 10);
            } else {
                stats.record_loss();
            }
            assert!(stats.best_streak() >= stats.current_streak());
        }
        assert_eq!(stats.best_streak(), 3);
        assert_eq!(stats.current_streak(), 1);
    }

    #[test]
    fn win_rate_over_mixed_record() {
        let mut stats = PlayerStats::new();
        stats.record_win("a", 1);
        stats.record_loss();
        stats.record_win("b", 1);
        stats.record_loss();

        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn completed_words_keep_order() {
        let mut stats = PlayerStats::new();
        stats.record_win("brazil", 10);
        stats.record_win("norway", 20);
        stats.record_win("japan", 30);

        assert_eq!(stats.words_completed(), ["brazil", "norway", "japan"]);
    }
}
