use alloc::string::{String, ToString};
use core::time::Duration;
use rand::Rng;
use smallvec::smallvec;

use crate::protocol::{
    ApiCall, Badges, CallError, Difficulty, GameState, HOLE_COUNT, HitOutcome, HoleIndex, Reply,
};
use crate::{
    Board, ClientTimer, Config, Cue, Effect, Effects, EndReason, Summary, Task, TaskSchedule, UiMode,
};

/// Last values received from the server, as displayed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    pub hits: u32,
    pub misses: u32,
    pub max_misses: u32,
    pub badges: Badges,
}

impl Scoreboard {
    fn mirror(&mut self, state: &GameState) {
        *self = Self {
            score: state.score,
            hits: state.hits,
            misses: state.misses,
            max_misses: state.max_misses,
            badges: state.badges,
        };
    }
}

/// Identifies the round a request was sent in, replies from an earlier round are dropped.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Round(u32);

/// Client side of a round.
///
/// Mirrors the server's state and runs the small `Running`/`Paused`/`GameOver` machine that decides which requests
/// are sent and which periodic tasks are live. Every operation returns the [`Effects`] the host has to carry out, and
/// the results of [`Effect::Call`] come back through [`Controller::on_reply`].
#[derive(Debug)]
pub struct Controller<R> {
    config: Config,
    rng: R,
    round: Round,
    mode: UiMode,
    timer: ClientTimer,
    difficulty: Difficulty,
    tasks: TaskSchedule,
    board: Board,
    scoreboard: Scoreboard,
    last_error: Option<String>,
}

impl<R: Rng> Controller<R> {
    /// A controller that has not started a round yet, nothing is live until [`Controller::start_game`].
    pub fn new(config: Config, rng: R) -> Self {
        Self {
            config,
            rng,
            round: Round::default(),
            mode: UiMode::GameOver,
            timer: ClientTimer::new(config.game_seconds),
            difficulty: config.difficulty,
            tasks: TaskSchedule::default(),
            board: Board::default(),
            scoreboard: Scoreboard::default(),
            last_error: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tag for requests issued now, hand it back to [`Controller::on_reply`].
    pub fn round(&self) -> Round {
        self.round
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn timer(&self) -> &ClientTimer {
        &self.timer
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn tasks(&self) -> &TaskSchedule {
        &self.tasks
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn holes_enabled(&self) -> bool {
        self.mode.is_running()
    }

    fn refresh_period(&self) -> Duration {
        self.difficulty.spawn_interval()
    }

    fn start_task(&mut self, task: Task, period: Duration, effects: &mut Effects) {
        if let Some(old) = self.tasks.start(task, period) {
            log::trace!("{:?} task re-armed: {:?} -> {:?}", task, old, period);
        }
        effects.push(Effect::StartTask(task, period));
    }

    fn stop_tasks(&mut self, effects: &mut Effects) {
        for task in Task::ALL {
            if self.tasks.stop(task) {
                effects.push(Effect::StopTask(task));
            }
        }
    }

    /// Begin a fresh round, from any mode.
    pub fn start_game(&mut self) -> Effects {
        log::info!(
            "new game: {}s at {} difficulty",
            self.config.game_seconds,
            self.difficulty
        );
        self.round = Round(self.round.0.wrapping_add(1));
        self.mode = UiMode::Running;
        self.timer.reset(self.config.game_seconds);
        self.board.clear();
        self.scoreboard = Scoreboard::default();
        self.last_error = None;

        let mut effects = smallvec![Effect::Call(ApiCall::Reset)];
        self.start_task(Task::Countdown, self.config.countdown_period, &mut effects);
        self.start_task(Task::Refresh, self.refresh_period(), &mut effects);
        effects
    }

    pub fn hole_clicked(&mut self, hole: HoleIndex) -> Effects {
        if !self.mode.is_running() {
            log::trace!("hole {} ignored while {:?}", hole, self.mode);
            return Effects::new();
        }
        if hole as usize >= HOLE_COUNT {
            log::warn!("hole {} is not on the board", hole);
            return Effects::new();
        }
        log::debug!("whack hole {}", hole);
        smallvec![Effect::Call(ApiCall::Hit(hole))]
    }

    /// Takes effect on the server right away and on the local refresh task at its next tick.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Effects {
        log::debug!("difficulty: {} -> {}", self.difficulty, difficulty);
        self.difficulty = difficulty;
        smallvec![Effect::Call(ApiCall::SetDifficulty(difficulty))]
    }

    pub fn toggle_pause(&mut self) -> Effects {
        let mut effects = Effects::new();
        match self.mode {
            UiMode::GameOver => {}
            UiMode::Running => {
                log::debug!("pause with {}s left", self.timer.time_left());
                self.mode = UiMode::Paused;
                self.timer.halt();
                self.stop_tasks(&mut effects);
                effects.push(Effect::Call(ApiCall::Pause {
                    time_left_ms: self.timer.time_left_ms(),
                }));
            }
            UiMode::Paused => {
                log::debug!("resume with {}s left", self.timer.time_left());
                self.mode = UiMode::Running;
                self.timer.resume();
                effects.push(Effect::Call(ApiCall::Resume));
                self.start_task(Task::Countdown, self.config.countdown_period, &mut effects);
                self.start_task(Task::Refresh, self.refresh_period(), &mut effects);
            }
        }
        effects
    }

    pub fn refresh(&mut self) -> Effects {
        smallvec![Effect::Call(ApiCall::FetchState)]
    }

    /// A periodic task fired. Stray ticks, from tasks that were stopped after the host queued them, are ignored.
    pub fn tick(&mut self, task: Task) -> Effects {
        if !self.mode.is_running() || !self.tasks.is_live(task) {
            log::trace!("stray {:?} tick while {:?}", task, self.mode);
            return Effects::new();
        }
        match task {
            Task::Countdown => match self.timer.tick() {
                0 => self.end_game(EndReason::TimeUp),
                _ => self.refresh(),
            },
            Task::Refresh => {
                let mut effects = Effects::new();
                let period = self.refresh_period();
                if self.tasks.period(Task::Refresh) != Some(period) {
                    self.start_task(Task::Refresh, period, &mut effects);
                }
                effects.extend(self.refresh());
                effects
            }
        }
    }

    /// Outcome of an [`Effect::Call`] sent during `round`. Failures are recorded but never change the mode or the
    /// countdown, the next successful refresh puts the display right again.
    pub fn on_reply(
        &mut self,
        round: Round,
        call: ApiCall,
        reply: Result<Reply, CallError>,
    ) -> Effects {
        if round != self.round {
            log::debug!("dropping {} reply from {:?}, now in {:?}", call, round, self.round);
            return Effects::new();
        }
        let reply = match reply {
            Ok(reply) => reply,
            Err(err) => {
                log::warn!("{} failed: {}", call, err);
                self.last_error = Some(err.to_string());
                return Effects::new();
            }
        };
        self.last_error = None;

        match reply {
            Reply::Hit(outcome) => self.on_hit(call, outcome),
            Reply::State(state) => self.apply_state(&state),
            Reply::Ack if call == ApiCall::Reset => {
                // the server keeps its difficulty across resets
                let mut effects: Effects =
                    smallvec![Effect::Call(ApiCall::SetDifficulty(self.difficulty))];
                effects.extend(self.refresh());
                effects
            }
            Reply::Ack => Effects::new(),
        }
    }

    fn on_hit(&mut self, call: ApiCall, outcome: HitOutcome) -> Effects {
        log::debug!("hit result: {:?}", outcome);
        let mut effects = Effects::new();
        match outcome {
            HitOutcome::Hit => {
                // a mole respawning in the same hole shows up as a new one
                if let ApiCall::Hit(hole) = call {
                    self.board.vacate(hole);
                }
                effects.push(Effect::Play(Cue::Hit));
            }
            HitOutcome::Miss | HitOutcome::GameOver => effects.push(Effect::Play(Cue::Miss)),
        }
        if outcome == HitOutcome::GameOver {
            effects.extend(self.end_game(EndReason::Defeated));
        } else if !self.mode.is_over() {
            effects.extend(self.refresh());
        }
        effects
    }

    fn apply_state(&mut self, state: &GameState) -> Effects {
        let mut effects = Effects::new();
        let appeared = self.board.sync(state.active_holes(), &mut self.rng);
        if !self.mode.is_over() {
            for hole in appeared {
                log::trace!("pop at hole {}", hole);
                effects.push(Effect::PlayLater(Cue::Pop, self.config.pop_delay));
            }
        }
        self.scoreboard.mirror(state);

        if state.miss_limit_reached() && !self.mode.is_over() {
            log::debug!("miss limit reached: {}/{}", state.misses, state.max_misses);
            effects.extend(self.end_game(EndReason::MissLimit));
        }
        effects
    }

    /// Finish the round. Only the first call of a round has any effect.
    pub fn end_game(&mut self, reason: EndReason) -> Effects {
        if self.mode.is_over() {
            return Effects::new();
        }
        log::info!("game over ({:?}), score {}", reason, self.scoreboard.score);
        self.mode = UiMode::GameOver;
        self.timer.halt();

        let mut effects = Effects::new();
        self.stop_tasks(&mut effects);
        let summary = Summary {
            reason,
            score: self.scoreboard.score,
            badges: self.scoreboard.badges,
        };
        effects.push(Effect::ShowSummary(summary, self.config.summary_delay));
        effects
    }

    /// Stop everything that is still live, the controller can be started again afterwards.
    pub fn dispose(&mut self) -> Effects {
        let mut effects = Effects::new();
        self.stop_tasks(&mut effects);
        self.timer.halt();
        self.mode = UiMode::GameOver;
        effects
    }
}
