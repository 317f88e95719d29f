//! Score constants for the evaluation function

/// Score constants shared by the evaluator and the search
pub struct Score;

impl Score {
    /// Sentinel for an already-decided position (a completed run).
    ///
    /// Must stay strictly above any reachable finite evaluation so a
    /// win/loss is distinguishable by exact value. A single window
    /// contributes at most a few hundred points and the largest board
    /// holds well under a thousand windows, so the finite total stays
    /// below ~10^6; one billion leaves orders of magnitude of headroom.
    pub const WIN: i32 = 1_000_000_000;

    /// Base weight of a window's completion ratio.
    pub const WINDOW_WEIGHT: f64 = 100.0;

    /// Numerator of the completion-cost discount: a window needing one
    /// drop scores twice its base weight, one needing two drops scores
    /// exactly its base weight, and cheaper-to-finish windows taper off
    /// from there.
    pub const URGENCY_WEIGHT: f64 = 2.0;
}
