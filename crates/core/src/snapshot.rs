use arrayvec::ArrayVec;

use crate::types::{EntityKind, Phase, Rect};
use crate::world::MAX_PIPES;

/// Bird + two obstacles per pipe + ground.
pub const MAX_DRAW_CMDS: usize = 2 + 2 * MAX_PIPES;

/// One filled rectangle of the frame, tagged with the entity it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCmd {
    pub kind: EntityKind,
    pub rect: Rect,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub phase: Phase,
    pub score: u32,
    /// Frames simulated in the current round.
    pub frame: u64,
    /// Rounds started since launch.
    pub round: u32,
    /// Draw list in paint order: bird, pipes, ground.
    pub draw_list: ArrayVec<DrawCmd, MAX_DRAW_CMDS>,
}

impl FrameSnapshot {
    pub fn clear(&mut self) {
        self.phase = Phase::WaitingForStart;
        self.score = 0;
        self.frame = 0;
        self.round = 0;
        self.draw_list.clear();
    }

    pub fn playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Rectangles of a given kind, in paint order.
    pub fn rects_of(&self, kind: EntityKind) -> impl Iterator<Item = Rect> + '_ {
        self.draw_list
            .iter()
            .filter(move |cmd| cmd.kind == kind)
            .map(|cmd| cmd.rect)
    }
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::WaitingForStart,
            score: 0,
            frame: 0,
            round: 0,
            draw_list: ArrayVec::new(),
        }
    }
}
