//! Fixed-depth minimax with a root tie-break refinement
//!
//! One recursive function serves both sides, dispatched on an explicit
//! [`Role`], so the asymmetries between them stay visible in one place:
//!
//! - The maximizer carries a running best across columns; an illegal
//!   column inherits it rather than resetting it, strictly better scores
//!   take over the chosen column, and equal scores accumulate in a tie
//!   set. When several columns tie at the root, each is re-scored with a
//!   one-ply static probe and the probe comparison is `>=`, so the
//!   highest-indexed tied column wins. That bias is deliberate and
//!   load-bearing: tests and recorded games depend on it.
//! - The minimizer keeps the strictly smallest score (first column wins
//!   ties) and has no tie-break pass.
//!
//! Both loops stop as soon as a sentinel-magnitude score appears: once a
//! forced win (or loss) is on the table, the remaining columns cannot
//! change the value of the node.
//!
//! The search mutates the caller's board and restores it exactly before
//! returning; the [`crate::board::DropToken`] discipline makes a missed
//! or reordered undo unrepresentable.

use crate::board::{Board, Disc};
use crate::eval::{evaluate, Score};

/// Which side of the minimax a node plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The engine's own side: picks the highest score.
    Maximizer,
    /// The modeled opponent: picks the lowest score.
    Minimizer,
}

/// Outcome of a (sub)tree search.
///
/// `column` is `None` for leaf evaluations, and at the root when no
/// column ever improved on the worst case — the caller treats that as
/// the engine conceding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub column: Option<usize>,
}

/// Depth-first minimax searcher for one move decision.
///
/// Holds the maximizing side, the root depth (needed to recognize the
/// root call for the tie-break pass), and a visited-node counter.
pub struct Searcher {
    side: Disc,
    root_depth: u8,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher that maximizes for `side` with the given root
    /// ply budget.
    #[must_use]
    pub fn new(side: Disc, root_depth: u8) -> Self {
        debug_assert!(side != Disc::Empty);
        Self {
            side,
            root_depth,
            nodes: 0,
        }
    }

    /// Nodes visited so far, probes included.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search the given board for `depth` remaining plies.
    ///
    /// The board must have `role`'s side to move (the maximizer moves
    /// the searcher's own side). On return the board is exactly as it
    /// was passed in.
    pub fn search(&mut self, board: &mut Board, depth: u8, role: Role) -> SearchResult {
        self.nodes += 1;

        // Static score first: it doubles as the terminal win/loss test.
        let static_score = evaluate(board, self.side);
        if depth == 0 || board.is_full() || static_score.abs() == Score::WIN {
            return SearchResult {
                score: static_score,
                column: None,
            };
        }

        match role {
            Role::Maximizer => self.maximize(board, depth),
            Role::Minimizer => self.minimize(board, depth),
        }
    }

    fn maximize(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        let mut best = -Score::WIN;
        let mut column = None;
        let mut tied: Vec<usize> = Vec::new();

        for col in 0..board.cols() {
            if !board.is_legal(col) {
                // Inherit the running best: a full column must never
                // drag the maximum back down.
                continue;
            }

            let token = board.drop_disc(col);
            board.toggle_turn();
            let score = self.search(board, depth - 1, Role::Minimizer).score;
            board.toggle_turn();
            board.undo_drop(token);

            if score > best {
                best = score;
                column = Some(col);
                tied.clear();
                tied.push(col);
            } else if score == best {
                tied.push(col);
            }

            if best == Score::WIN {
                // Forced win found; later columns cannot beat it.
                break;
            }
        }

        // Root-only refinement: columns tied on the shallow value are
        // separated by a one-ply static probe.
        if tied.len() > 1 && depth == self.root_depth {
            let mut probe_best = -Score::WIN;
            for &col in &tied {
                let value = self.probe(board, col);
                if value >= probe_best {
                    probe_best = value;
                    column = Some(col);
                }
            }
        }

        SearchResult {
            score: best,
            column,
        }
    }

    fn minimize(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        let mut best = Score::WIN;
        let mut column = None;

        for col in 0..board.cols() {
            if !board.is_legal(col) {
                continue;
            }

            let token = board.drop_disc(col);
            board.toggle_turn();
            let score = self.search(board, depth - 1, Role::Maximizer).score;
            board.toggle_turn();
            board.undo_drop(token);

            if score < best {
                best = score;
                column = Some(col);
            }

            if best == -Score::WIN {
                break;
            }
        }

        SearchResult {
            score: best,
            column,
        }
    }

    /// Static score one ply after playing `col`: drop, evaluate, undo,
    /// without recursing.
    fn probe(&mut self, board: &mut Board, col: usize) -> i32 {
        self.nodes += 1;
        let token = board.drop_disc(col);
        board.toggle_turn();
        let value = evaluate(board, self.side);
        board.toggle_turn();
        board.undo_drop(token);
        value
    }
}
