//! Session - the screen controller
//!
//! Owns the phase machine, the current round, the leaderboard and the
//! deferred tasks (countdown ticks and pair clears). All mutation happens in
//! response to one event at a time: an action from the player or an
//! [`Session::advance`] of the clock.

use tracing::{debug, info};

use crate::clock::{Clock, LocalClock};
use crate::config::SessionConfig;
use crate::core::{GameSnapshot, GameState, Leaderboard, LeaderboardEntry};
use crate::schedule::{Deferred, DeferredTask, Scheduler};
use crate::types::*;

/// Borrowed view of everything a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSnapshot<'a> {
    pub phase: Phase,
    pub game: GameSnapshot,
    pub leaderboard: &'a [LeaderboardEntry],
    pub cursor: CardId,
}

#[derive(Debug)]
pub struct Session<C: Clock = LocalClock> {
    phase: Phase,
    game: GameState,
    leaderboard: Leaderboard,
    scheduler: Scheduler,
    cursor: CardId,
    clock: C,
}

impl Session<LocalClock> {
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.resolve_seed(), LocalClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn new(seed: u32, clock: C) -> Self {
        Self {
            phase: Phase::Home,
            game: GameState::new(seed),
            leaderboard: Leaderboard::new(),
            scheduler: Scheduler::new(),
            cursor: 0,
            clock,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn cursor(&self) -> CardId {
        self.cursor
    }

    /// Milliseconds of session time elapsed so far.
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Dispatch a player action. Returns false if it was not valid in the current phase.
    pub fn apply(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::StartGame => self.start_game(),
            UiAction::ViewLeaderboard => self.view_leaderboard(),
            UiAction::BackHome => self.back_home(),
            UiAction::Tap(id) => self.tap(id) != TapResult::Ignored,
            UiAction::MoveCursor(mv) => self.move_cursor(mv),
            UiAction::FlipCursor => self.tap(self.cursor) != TapResult::Ignored,
        }
    }

    /// Home or Result → Playing, with a fresh round.
    pub fn start_game(&mut self) -> bool {
        if !matches!(self.phase, Phase::Home | Phase::Result) {
            return false;
        }

        self.game.reset();
        self.cursor = 0;
        self.enter(Phase::Playing);
        self.scheduler
            .schedule(TIMER_TICK_MS, self.game.episode_id(), DeferredTask::TimerTick);

        info!(
            episode = self.game.episode_id(),
            seed = self.game.seed(),
            "round started"
        );
        true
    }

    /// Home or Result → Leaderboard.
    pub fn view_leaderboard(&mut self) -> bool {
        if !matches!(self.phase, Phase::Home | Phase::Result) {
            return false;
        }
        self.enter(Phase::Leaderboard);
        true
    }

    /// Leaderboard → Home.
    pub fn back_home(&mut self) -> bool {
        if self.phase != Phase::Leaderboard {
            return false;
        }
        self.enter(Phase::Home);
        true
    }

    /// Tap a card. Ignored outside of Playing.
    pub fn tap(&mut self, id: CardId) -> TapResult {
        if self.phase != Phase::Playing {
            return TapResult::Ignored;
        }

        let result = self.game.tap(id);
        if let TapResult::Resolved(outcome) = result {
            self.scheduler.schedule(
                SELECTION_CLEAR_MS,
                self.game.episode_id(),
                DeferredTask::ClearSelection,
            );
            debug!(
                card = id,
                outcome = outcome.as_str(),
                score = self.game.score(),
                "pair resolved"
            );
        }
        result
    }

    /// Move the card cursor on the grid (Playing only). Clamped at the edges.
    pub fn move_cursor(&mut self, mv: CursorMove) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let next = step_cursor(self.cursor, mv);
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }

    /// Let `elapsed_ms` of time pass, running every deferred task that falls due.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let deadline = self.scheduler.now_ms().saturating_add(elapsed_ms);
        while let Some(deferred) = self.scheduler.pop_due_by(deadline) {
            self.run(deferred);
        }
        self.scheduler.advance_to(deadline);
    }

    fn run(&mut self, deferred: Deferred) {
        match deferred.task {
            DeferredTask::TimerTick => self.on_timer_tick(deferred.generation),
            DeferredTask::ClearSelection => {
                if !self.game.clear_selection(deferred.generation) {
                    debug!(
                        generation = deferred.generation,
                        current = self.game.episode_id(),
                        "discarded stale selection clear"
                    );
                }
            }
        }
    }

    fn on_timer_tick(&mut self, generation: u32) {
        if self.phase != Phase::Playing || generation != self.game.episode_id() {
            return;
        }

        let was_rush = self.game.rush();
        if self.game.tick_second() {
            self.end_game();
            return;
        }
        if self.game.rush() && !was_rush {
            debug!(time_left = self.game.time_left_secs(), "rush mode");
        }

        self.scheduler
            .schedule(TIMER_TICK_MS, generation, DeferredTask::TimerTick);
    }

    fn end_game(&mut self) {
        let timestamp = self.clock.timestamp();
        let score = self.game.score();
        info!(
            episode = self.game.episode_id(),
            score,
            matched = self.game.deck().matched_count(),
            timestamp = timestamp.as_str(),
            "round finished"
        );
        self.leaderboard.record(score, timestamp);
        self.enter(Phase::Result);
    }

    fn enter(&mut self, phase: Phase) {
        // Countdown ticks never outlive the phase that scheduled them.
        // Pair clears are left alone; their generation tag handles staleness.
        self.scheduler.cancel(DeferredTask::TimerTick);
        debug!(from = self.phase.as_str(), to = phase.as_str(), "phase change");
        self.phase = phase;
    }

    pub fn snapshot(&self) -> ScreenSnapshot<'_> {
        ScreenSnapshot {
            phase: self.phase,
            game: self.game.snapshot(),
            leaderboard: self.leaderboard.entries(),
            cursor: self.cursor,
        }
    }
}

/// Move a row-major grid position, staying inside the deck.
pub fn step_cursor(cursor: CardId, mv: CursorMove) -> CardId {
    let id = cursor as usize;
    let col = id % GRID_COLUMNS;
    let next = match mv {
        CursorMove::Left if col > 0 => id - 1,
        CursorMove::Right if col + 1 < GRID_COLUMNS && id + 1 < DECK_SIZE => id + 1,
        CursorMove::Up if id >= GRID_COLUMNS => id - GRID_COLUMNS,
        CursorMove::Down if id + GRID_COLUMNS < DECK_SIZE => id + GRID_COLUMNS,
        _ => id,
    };
    next as CardId
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn session() -> Session<FixedClock> {
        Session::new(12345, FixedClock("10:0:0".into()))
    }

    fn playing() -> Session<FixedClock> {
        let mut s = session();
        assert!(s.start_game());
        s
    }

    fn hidden(s: &Session<FixedClock>, kind: CardKind) -> CardId {
        s.game().deck().find_hidden(kind).unwrap()
    }

    #[test]
    fn starts_on_home() {
        let s = session();
        assert_eq!(s.phase(), Phase::Home);
        assert!(s.scheduler().is_empty());
    }

    #[test]
    fn phase_transitions_follow_the_graph() {
        let mut s = session();
        assert!(!s.back_home());
        assert!(s.view_leaderboard());
        assert_eq!(s.phase(), Phase::Leaderboard);
        assert!(!s.start_game());
        assert!(!s.view_leaderboard());
        assert!(s.back_home());
        assert_eq!(s.phase(), Phase::Home);

        assert!(s.start_game());
        assert_eq!(s.phase(), Phase::Playing);
        assert!(!s.start_game());
        assert!(!s.view_leaderboard());
        assert!(!s.back_home());
    }

    #[test]
    fn start_schedules_one_tick() {
        let s = playing();
        assert_eq!(s.scheduler().pending(DeferredTask::TimerTick), 1);
        assert_eq!(s.scheduler().next_due_ms(), Some(TIMER_TICK_MS));
    }

    #[test]
    fn taps_ignored_outside_playing() {
        let mut s = session();
        assert_eq!(s.tap(0), TapResult::Ignored);
        assert!(!s.apply(UiAction::FlipCursor));
        assert!(s.game().deck().iter().all(|c| !c.face_up()));
    }

    #[test]
    fn taps_after_round_leave_it_untouched() {
        let mut s = playing();
        s.advance(ROUND_SECS as u64 * TIMER_TICK_MS);
        assert_eq!(s.phase(), Phase::Result);

        let finished = s.game().snapshot();
        for id in 0..DECK_SIZE as CardId {
            assert_eq!(s.tap(id), TapResult::Ignored);
        }
        assert_eq!(s.game().snapshot(), finished);

        assert!(s.view_leaderboard());
        for id in 0..DECK_SIZE as CardId {
            assert_eq!(s.tap(id), TapResult::Ignored);
            assert!(!s.apply(UiAction::Tap(id)));
        }
        assert_eq!(s.game().snapshot(), finished);
        assert_eq!(s.leaderboard().len(), 1);
        assert!(s.scheduler().is_empty());
    }

    #[test]
    fn one_second_of_time_is_one_tick() {
        let mut s = playing();
        s.advance(999);
        assert_eq!(s.game().time_left_secs(), ROUND_SECS);
        s.advance(1);
        assert_eq!(s.game().time_left_secs(), ROUND_SECS - 1);
        s.advance(2500);
        assert_eq!(s.game().time_left_secs(), ROUND_SECS - 3);
    }

    #[test]
    fn full_round_without_taps_records_zero() {
        let mut s = playing();
        s.advance(ROUND_SECS as u64 * TIMER_TICK_MS);

        assert_eq!(s.phase(), Phase::Result);
        assert_eq!(s.game().time_left_secs(), 0);
        assert_eq!(s.leaderboard().len(), 1);
        assert_eq!(s.leaderboard().entries()[0].score, 0);
        assert_eq!(s.leaderboard().entries()[0].timestamp, "10:0:0");
        assert_eq!(s.scheduler().pending(DeferredTask::TimerTick), 0);
    }

    #[test]
    fn timer_stops_after_result() {
        let mut s = playing();
        s.advance(ROUND_SECS as u64 * TIMER_TICK_MS);
        s.advance(10 * TIMER_TICK_MS);

        assert_eq!(s.game().time_left_secs(), 0);
        assert_eq!(s.leaderboard().len(), 1);
    }

    #[test]
    fn rush_sets_in_below_twenty_seconds() {
        let mut s = playing();
        s.advance((ROUND_SECS - RUSH_THRESHOLD_SECS) as u64 * TIMER_TICK_MS);
        assert_eq!(s.game().time_left_secs(), RUSH_THRESHOLD_SECS);
        assert!(!s.game().rush());

        s.advance(TIMER_TICK_MS);
        assert!(s.game().rush());
        assert!(s.snapshot().game.rush);
    }

    #[test]
    fn resolved_pair_clears_after_half_a_second() {
        let mut s = playing();
        let a = hidden(&s, CardKind::Plastic);
        let b = hidden(&s, CardKind::Glass);
        s.tap(a);
        assert_eq!(s.tap(b), TapResult::Resolved(PairOutcome::Mismatched));
        assert_eq!(s.game().selection().len(), 2);

        s.advance(SELECTION_CLEAR_MS - 1);
        assert_eq!(s.game().selection().len(), 2);
        s.advance(1);
        assert!(s.game().selection().is_empty());
        assert!(s.game().card(a).unwrap().revealed);
        assert!(s.game().card(b).unwrap().revealed);
    }

    #[test]
    fn stale_clear_does_not_touch_the_next_round() {
        let mut s = playing();
        // Resolve a pair just before time runs out.
        s.advance((ROUND_SECS as u64 - 1) * TIMER_TICK_MS + 800);
        s.tap(hidden(&s, CardKind::Paper));
        s.tap(hidden(&s, CardKind::Glass));
        s.advance(200);
        assert_eq!(s.phase(), Phase::Result);
        assert_eq!(s.scheduler().pending(DeferredTask::ClearSelection), 1);

        // Replay before the clear fires, then reveal one card in the new round.
        assert!(s.start_game());
        let fresh = hidden(&s, CardKind::Plastic);
        s.tap(fresh);
        s.advance(300);

        assert_eq!(s.scheduler().pending(DeferredTask::ClearSelection), 0);
        assert_eq!(s.game().selection(), &[fresh]);
    }

    #[test]
    fn leaderboard_accumulates_in_play_order() {
        let mut s = playing();
        let a = hidden(&s, CardKind::Paper);
        s.tap(a);
        let b = hidden(&s, CardKind::Paper);
        s.tap(b);
        s.advance(ROUND_SECS as u64 * TIMER_TICK_MS);

        assert!(s.view_leaderboard());
        assert!(s.back_home());
        assert!(s.start_game());
        let c = hidden(&s, CardKind::Contaminant);
        s.tap(c);
        s.tap(hidden(&s, CardKind::Glass));
        s.advance(ROUND_SECS as u64 * TIMER_TICK_MS);

        assert!(s.start_game());
        s.advance(ROUND_SECS as u64 * TIMER_TICK_MS);

        let scores: Vec<i32> = s.leaderboard().entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![10, -5, 0]);
    }

    #[test]
    fn cursor_moves_inside_grid() {
        assert_eq!(step_cursor(0, CursorMove::Left), 0);
        assert_eq!(step_cursor(0, CursorMove::Up), 0);
        assert_eq!(step_cursor(0, CursorMove::Right), 1);
        assert_eq!(step_cursor(3, CursorMove::Right), 3);
        assert_eq!(step_cursor(1, CursorMove::Down), 5);
        assert_eq!(step_cursor(9, CursorMove::Down), 13);
        assert_eq!(step_cursor(10, CursorMove::Down), 10);
        assert_eq!(step_cursor(13, CursorMove::Right), 13);
        assert_eq!(step_cursor(12, CursorMove::Up), 8);
    }

    #[test]
    fn flip_cursor_taps_card_under_cursor() {
        let mut s = playing();
        assert!(s.apply(UiAction::MoveCursor(CursorMove::Down)));
        assert!(s.apply(UiAction::MoveCursor(CursorMove::Right)));
        assert_eq!(s.cursor(), 5);

        assert!(s.apply(UiAction::FlipCursor));
        assert!(s.game().card(5).unwrap().revealed);
        assert!(!s.apply(UiAction::FlipCursor));
    }

    #[test]
    fn replay_resets_round_state() {
        let mut s = playing();
        s.apply(UiAction::MoveCursor(CursorMove::Right));
        s.tap(hidden(&s, CardKind::Contaminant));
        s.tap(hidden(&s, CardKind::Plastic));
        s.advance(ROUND_SECS as u64 * TIMER_TICK_MS);
        let finished_episode = s.game().episode_id();

        assert!(s.apply(UiAction::StartGame));
        assert_eq!(s.game().episode_id(), finished_episode + 1);
        assert_eq!(s.game().score(), 0);
        assert_eq!(s.game().time_left_secs(), ROUND_SECS);
        assert!(!s.game().rush());
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.scheduler().pending(DeferredTask::TimerTick), 1);
    }
}
