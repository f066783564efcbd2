//! Match aggregate tying board, rules, protocol and log together
//!
//! A [`MatchState`] is created once per game with a rule mode and mutated
//! only through its public actions. Each action validates against the
//! current phase, mutates the board where applicable, appends to the
//! operation log, evaluates the rules for placements, and finally advances
//! the phase/turn. Rejected actions leave the state untouched.
//!
//! The engine is single-threaded and synchronous; callers sharing a match
//! across threads must serialize access themselves, since the phase check
//! and the mutation are not atomic across calls.

use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::log::{Operation, OperationLog};
use crate::protocol::{after_move, MoveStep, Phase};
use crate::rules::{evaluate, validate_dots, RuleMode, Verdict};
use crate::EngineError;

/// Scoring identity, independent of color once a swap has happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The player who opened the match.
    First,
    /// The other player.
    Second,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Terminal state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Pending,
    BlackWin,
    WhiteWin,
    Draw,
}

impl MatchResult {
    fn win_for(color: Stone) -> MatchResult {
        match color {
            Stone::Black => MatchResult::BlackWin,
            _ => MatchResult::WhiteWin,
        }
    }
}

/// What a successful placement did to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Whether this move ended the match.
    pub ended: bool,
    /// The forbidden rule the constrained color tripped, when the move
    /// forfeited the match. `None` for wins, draws and ordinary moves.
    pub violated_rule: Option<Verdict>,
}

/// One five-in-a-row match.
#[derive(Debug, Clone)]
pub struct MatchState {
    board: Board,
    mode: RuleMode,
    phase: Phase,
    next_color: Stone,
    active_side: Side,
    result: MatchResult,
    last_violation: Option<Verdict>,
    swapped: bool,
    dot_count: usize,
    log: OperationLog,
}

impl MatchState {
    /// Fresh match in the `Move` phase with Black to open.
    pub fn new(mode: RuleMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            phase: Phase::Move,
            next_color: Stone::Black,
            active_side: Side::First,
            result: MatchResult::Pending,
            last_violation: None,
            swapped: false,
            dot_count: 0,
            log: OperationLog::new(),
        }
    }

    /// Place a stone of `color` at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`EngineError::IllegalPhase`] outside the `Move` phase;
    /// [`EngineError::IllegalMove`] for the wrong color, an out-of-range
    /// coordinate or an occupied cell.
    pub fn play(&mut self, x: i32, y: i32, color: Stone) -> Result<PlayOutcome, EngineError> {
        if !matches!(self.phase, Phase::Move) {
            return Err(EngineError::IllegalPhase);
        }
        if color != self.next_color {
            return Err(EngineError::IllegalMove);
        }
        if !Pos::is_valid(x, y) {
            return Err(EngineError::IllegalMove);
        }
        let pos = Pos::new(x as u8, y as u8);
        self.board.place(pos, color)?;

        let verdict = evaluate(&self.board, pos);
        let mut outcome = PlayOutcome {
            ended: false,
            violated_rule: None,
        };
        match verdict {
            Verdict::Connect5 => {
                self.finish(MatchResult::win_for(color));
                outcome.ended = true;
            }
            Verdict::Overline | Verdict::DoubleFour | Verdict::DoubleThree
                if self.mode.constrained() == Some(color) =>
            {
                debug!(?verdict, ?pos, "forbidden move by the constrained color");
                self.last_violation = Some(verdict);
                outcome.violated_rule = Some(verdict);
                self.finish(MatchResult::win_for(color.opponent()));
                outcome.ended = true;
            }
            _ => {
                if self.board.is_full() {
                    self.finish(MatchResult::Draw);
                    outcome.ended = true;
                }
            }
        }

        self.log.push(Operation::Move {
            color,
            pos: Some(pos),
        });
        if !outcome.ended {
            self.advance_after_move();
        }
        Ok(outcome)
    }

    /// Skip a turn. Logs a move without a coordinate and advances exactly
    /// like a placement would.
    ///
    /// # Errors
    ///
    /// [`EngineError::IllegalPhase`] outside the `Move` phase;
    /// [`EngineError::IllegalMove`] in a Balanced match before the fourth
    /// stone is down.
    pub fn pass(&mut self) -> Result<(), EngineError> {
        if !matches!(self.phase, Phase::Move) {
            return Err(EngineError::IllegalPhase);
        }
        if self.mode.has_opening_protocol() && self.log.move_count() < 4 {
            return Err(EngineError::IllegalMove);
        }
        self.log.push(Operation::Move {
            color: self.next_color,
            pos: None,
        });
        self.advance_after_move();
        Ok(())
    }

    /// Announce how many dot candidates will be submitted later.
    pub fn announce(&mut self, count: usize) -> Result<(), EngineError> {
        if !matches!(self.phase, Phase::Announce) {
            return Err(EngineError::IllegalPhase);
        }
        self.dot_count = count;
        self.log.push(Operation::Announce {
            color: self.next_color,
            count,
        });
        self.active_side = self.active_side.opposite();
        self.set_phase(Phase::Swap);
        Ok(())
    }

    /// Accept or decline swapping sides. Either way, White moves next.
    pub fn swap(&mut self, accept: bool) -> Result<(), EngineError> {
        if !matches!(self.phase, Phase::Swap) {
            return Err(EngineError::IllegalPhase);
        }
        self.swapped = accept;
        self.log.push(Operation::Swap {
            color: self.next_color,
            accepted: accept,
        });
        self.next_color = Stone::White;
        if accept {
            self.active_side = self.active_side.opposite();
        }
        self.set_phase(Phase::Move);
        Ok(())
    }

    /// Submit the announced number of candidate points for the fifth stone.
    ///
    /// # Errors
    ///
    /// [`EngineError::IllegalPhase`] outside the `Dot` phase;
    /// [`EngineError::IllegalSubmission`] for a wrong candidate count, an
    /// occupied candidate cell, or candidates that are symmetry images of
    /// one another.
    pub fn submit_dots(&mut self, dots: &[Pos]) -> Result<(), EngineError> {
        let count = match &self.phase {
            Phase::Dot { count } => *count,
            _ => return Err(EngineError::IllegalPhase),
        };
        if dots.len() != count {
            return Err(EngineError::IllegalSubmission);
        }
        let (black, white) = self
            .reference_stones()
            .ok_or(EngineError::IllegalSubmission)?;
        if !validate_dots(&self.board, black, white, dots) {
            return Err(EngineError::IllegalSubmission);
        }
        self.log.push(Operation::Dot {
            color: self.next_color,
            candidates: dots.to_vec(),
        });
        self.active_side = self.active_side.opposite();
        self.set_phase(Phase::Choice {
            candidates: dots.to_vec(),
        });
        Ok(())
    }

    /// Pick one submitted candidate; a stone of the constrained color is
    /// placed there and normal play resumes.
    pub fn choose(&mut self, index: usize) -> Result<(), EngineError> {
        let pos = match &self.phase {
            Phase::Choice { candidates } => candidates
                .get(index)
                .copied()
                .ok_or(EngineError::IllegalSubmission)?,
            _ => return Err(EngineError::IllegalPhase),
        };
        let color = self.mode.constrained().unwrap_or(Stone::Black);
        self.board.place(pos, color)?;
        self.log.push(Operation::Choice { color, pos });
        self.set_phase(Phase::Move);
        Ok(())
    }

    /// Rebuild a match by replaying a log against a fresh match.
    ///
    /// # Errors
    ///
    /// Propagates the first rejection; a log taken from a live match with
    /// the same rule mode always replays cleanly.
    pub fn replay(mode: RuleMode, log: &OperationLog) -> Result<MatchState, EngineError> {
        let mut game = MatchState::new(mode);
        for op in log.entries() {
            match op {
                Operation::Move {
                    color,
                    pos: Some(pos),
                } => {
                    game.play(i32::from(pos.x), i32::from(pos.y), *color)?;
                }
                Operation::Move { pos: None, .. } => game.pass()?,
                Operation::Announce { count, .. } => game.announce(*count)?,
                Operation::Swap { accepted, .. } => game.swap(*accepted)?,
                Operation::Dot { candidates, .. } => game.submit_dots(candidates)?,
                Operation::Choice { pos, .. } => {
                    let index = match &game.phase {
                        Phase::Choice { candidates } => {
                            candidates.iter().position(|c| c == pos)
                        }
                        _ => None,
                    }
                    .ok_or(EngineError::IllegalSubmission)?;
                    game.choose(index)?;
                }
            }
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> RuleMode {
        self.mode
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The color expected to act next while the match is running.
    pub fn next_color(&self) -> Stone {
        self.next_color
    }

    /// The scoring side currently on the move.
    pub fn active_side(&self) -> Side {
        self.active_side
    }

    pub fn result(&self) -> MatchResult {
        self.result
    }

    /// The forbidden rule that ended the match, if one did.
    pub fn last_violation(&self) -> Option<Verdict> {
        self.last_violation
    }

    /// Whether the swap offer was taken.
    pub fn swapped(&self) -> bool {
        self.swapped
    }

    pub fn log(&self) -> &OperationLog {
        &self.log
    }

    /// Move count so far, passes included.
    pub fn move_count(&self) -> usize {
        self.log.move_count()
    }

    /// Black's and White's reference stones for the symmetry check: the
    /// first and second placement of each color.
    fn reference_stones(&self) -> Option<([Pos; 2], [Pos; 2])> {
        let mut moves = self.log.placed_moves();
        let b1 = moves.next()?;
        let w1 = moves.next()?;
        let b2 = moves.next()?;
        let w2 = moves.next()?;
        Some(([b1, b2], [w1, w2]))
    }

    fn advance_after_move(&mut self) {
        match after_move(self.mode, self.log.move_count()) {
            MoveStep::Alternate => {
                self.next_color = self.next_color.opponent();
            }
            MoveStep::AlternateAndFlipSide => {
                self.next_color = self.next_color.opponent();
                self.active_side = self.active_side.opposite();
            }
            MoveStep::EnterAnnounce => {
                self.set_phase(Phase::Announce);
            }
            MoveStep::EnterDot => {
                self.set_phase(Phase::Dot {
                    count: self.dot_count,
                });
            }
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!(from = %self.phase, to = %phase, "phase transition");
        self.phase = phase;
    }

    fn finish(&mut self, result: MatchResult) {
        info!(?result, moves = self.log.move_count() + 1, "match over");
        self.result = result;
        self.set_phase(Phase::End);
    }
}
