//! Move execution and game phase updates

use tracing::{debug, info};

use crate::game::components::{GamePhase, MoveRecord, Piece};
use crate::game::resources::{GameOverState, Terminal};
use crate::game::rules;
use crate::game::session::{GameSession, MoveRejection, MoveResult};
use crate::game::types::Square;

impl GameSession {
    /// Validate and apply a move for the side to move
    ///
    /// A rejected request leaves the board, turn, history, captures and
    /// selection exactly as they were.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveResult {
        let side = self.turn.color;

        let Some(piece) = self.board.get(from) else {
            debug!("[GAME] Rejected {from}→{to}: no piece on {from}");
            return self.rejected(MoveRejection::NoPiece);
        };
        if piece.color != side {
            debug!("[GAME] Rejected {from}→{to}: it is {side}'s turn");
            return self.rejected(MoveRejection::WrongColor);
        }
        if !rules::is_valid_move(&self.board, piece, from, to)
            || rules::is_in_check_after(&mut self.board, side, from, to)
        {
            debug!("[GAME] Rejected {from}→{to}: not a legal destination for {piece}");
            return self.rejected(MoveRejection::IllegalDestination);
        }

        let captured = self.execute_move(piece, from, to);

        let next_turn = self.turn.color;
        let terminal = self.update_game_phase();
        let in_check = matches!(self.phase, GamePhase::Check | GamePhase::Checkmate);

        self.history.add_move(MoveRecord {
            piece,
            from,
            to,
            captured,
            is_check: in_check,
            is_checkmate: terminal == Some(Terminal::Checkmate),
        });

        MoveResult {
            applied: true,
            captured,
            next_turn,
            in_check,
            terminal,
            rejection: None,
        }
    }

    /// Move the piece, record any capture and hand the turn over
    fn execute_move(&mut self, piece: Piece, from: Square, to: Square) -> Option<Piece> {
        let captured = self.board.get(to);

        self.board.set(to, Some(piece));
        self.board.set(from, None);

        if let Some(target) = captured {
            self.captured.add_capture(target);
            info!("[GAME] {piece} {from}→{to} captures {target}");
        } else {
            info!("[GAME] {piece} {from}→{to}");
        }

        self.selection.clear();
        self.turn.switch();
        captured
    }

    fn rejected(&self, reason: MoveRejection) -> MoveResult {
        let side = self.turn.color;
        MoveResult {
            applied: false,
            captured: None,
            next_turn: side,
            in_check: rules::is_in_check(&self.board, side),
            terminal: self.terminal(),
            rejection: Some(reason),
        }
    }

    /// Recompute check, checkmate and stalemate for the side to move
    ///
    /// Check and mobility are each evaluated once; checkmate is "in check with
    /// no legal move", stalemate "not in check with no legal move".
    pub(crate) fn update_game_phase(&mut self) -> Option<Terminal> {
        let color = self.turn.color;
        let previous_phase = self.phase;
        let in_check = rules::is_in_check(&self.board, color);
        let has_moves = rules::has_any_legal_moves(&mut self.board, color);

        self.phase = match (in_check, has_moves) {
            (true, false) => GamePhase::Checkmate,
            (false, false) => GamePhase::Stalemate,
            (true, true) => GamePhase::Check,
            (false, true) => GamePhase::Playing,
        };

        if !self.phase.is_terminal() {
            self.game_over = GameOverState::Playing;
            if self.phase == GamePhase::Check && previous_phase != GamePhase::Check {
                info!("[GAME] {color} King is in check");
            } else if previous_phase == GamePhase::Check && self.phase == GamePhase::Playing {
                info!("[GAME] Check escaped! Game continues normally");
            }
            return None;
        }

        let terminal = if in_check {
            info!("[GAME] ========== CHECKMATE! ==========");
            Terminal::Checkmate
        } else {
            info!("[GAME] ========== STALEMATE! ==========");
            Terminal::Stalemate
        };
        self.game_over = GameOverState::from_terminal(color, terminal);
        info!("[GAME] {}", self.game_over.message());
        info!("[GAME] Final Move: #{}", self.turn.move_number);

        Some(terminal)
    }
}
