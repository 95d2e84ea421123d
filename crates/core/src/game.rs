//! Game controller - drives the phase state machine around the world.
//!
//! ```text
//! WaitingForStart --Start--> Playing --collision--> GameOver --Start--> Playing ...
//! ```
//!
//! The controller owns the phase, the score and the world's lifecycle. Only
//! `Playing` advances the world; the other phases are render-only.

use crate::generator::PipeGenerator;
use crate::snapshot::{DrawCmd, FrameSnapshot};
use crate::types::{GameAction, Phase};
use crate::world::{StepOutcome, World};

#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    phase: Phase,
    score: u32,
    /// Frames simulated in the current round.
    frame: u64,
    /// Monotonic round id (increments on every start/restart).
    round: u32,
    quit_requested: bool,
}

impl Game {
    /// Create a game whose pipe sequence is fixed by `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_generator(PipeGenerator::new(seed))
    }

    /// Create a game with an OS-seeded pipe sequence.
    pub fn from_entropy() -> Self {
        Self::with_generator(PipeGenerator::from_entropy())
    }

    pub fn with_generator(generator: PipeGenerator) -> Self {
        Self {
            world: World::new(generator),
            phase: Phase::WaitingForStart,
            score: 0,
            frame: 0,
            round: 0,
            quit_requested: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Apply a discrete input action.
    ///
    /// `Start` only has an effect from `WaitingForStart` or `GameOver`; while
    /// playing, the same key acts through the held jump state instead.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Start => {
                if self.phase.accepts_start() {
                    self.start_round();
                }
            }
            GameAction::Quit => {
                log::info!("quit requested (round {}, score {})", self.round, self.score);
                self.quit_requested = true;
            }
        }
    }

    fn start_round(&mut self) {
        self.score = 0;
        self.frame = 0;
        self.round = self.round.wrapping_add(1);
        self.world.reset();
        self.phase = Phase::Playing;
        match self.world.generator().seed() {
            Some(seed) => log::info!("round {} started (seed {seed})", self.round),
            None => log::info!("round {} started (entropy seed)", self.round),
        }
    }

    /// Advance one frame. Does nothing outside `Playing`.
    pub fn tick(&mut self, jump_held: bool) {
        if self.phase != Phase::Playing {
            return;
        }

        self.frame += 1;
        match self.world.step(jump_held) {
            StepOutcome::Collided => {
                self.phase = Phase::GameOver;
                log::info!(
                    "round {} over after {} frames, score {}",
                    self.round,
                    self.frame,
                    self.score
                );
            }
            StepOutcome::Advanced { scored } => {
                if scored > 0 {
                    self.score += scored;
                    log::debug!("score {}", self.score);
                }
            }
        }
    }

    /// Write the current frame into an existing snapshot.
    ///
    /// This is the allocation-free hot path; callers keep one snapshot alive
    /// across frames.
    pub fn snapshot_into(&self, out: &mut FrameSnapshot) {
        out.clear();
        out.phase = self.phase;
        out.score = self.score;
        out.frame = self.frame;
        out.round = self.round;

        for entity in self.world.entities() {
            let kind = entity.kind();
            for rect in entity.bounds() {
                let pushed = out.draw_list.try_push(DrawCmd { kind, rect });
                debug_assert!(pushed.is_ok(), "draw list exceeds MAX_DRAW_CMDS");
            }
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let mut snap = FrameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
