//! Direct-mapped transposition table keyed by Zobrist hash.

use lucena_core::Move;

/// Bound classification of a stored score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The stored score is exact.
    Exact,
    /// The stored score is a lower bound (fail-high).
    LowerBound,
    /// The stored score is an upper bound (fail-low).
    UpperBound,
}

/// One transposition table slot.
///
/// `depth` is negative on empty slots; such entries never match a probe.
#[derive(Debug, Clone, Copy)]
pub struct TtEntry {
    pub hash: u64,
    pub score: i32,
    pub depth: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

const EMPTY_ENTRY: TtEntry = TtEntry {
    hash: 0,
    score: 0,
    depth: -1,
    bound: Bound::Exact,
    best_move: None,
};

/// Probe/store counters, for diagnostics after a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TtStats {
    pub hits: u64,
    pub misses: u64,
    pub stores: u64,
}

/// Fixed-capacity, direct-mapped transposition table.
///
/// Entries live at `hash % len` with no chaining; a deeper search result
/// always wins the slot, ties included. Probe results are hints: a hash
/// collision can surface a foreign entry, so callers must re-validate
/// the cached best move against the current legal moves.
pub struct TranspositionTable {
    entries: Vec<TtEntry>,
    stats: TtStats,
}

impl TranspositionTable {
    /// Default table budget in MiB.
    pub const DEFAULT_SIZE_MB: usize = 64;

    /// Create a table sized from a megabyte budget.
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<TtEntry>();
        let len = ((size_mb * 1024 * 1024) / entry_size).max(1);
        Self {
            entries: vec![EMPTY_ENTRY; len],
            stats: TtStats::default(),
        }
    }

    /// Look up the entry for `hash`.
    ///
    /// Returns `Some` only when the slot's stored hash matches and the
    /// slot is not empty (depth ≥ 0).
    pub fn probe(&mut self, hash: u64) -> Option<TtEntry> {
        let entry = self.entries[(hash % self.entries.len() as u64) as usize];
        if entry.hash == hash && entry.depth >= 0 {
            self.stats.hits += 1;
            Some(entry)
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Store a search result, replacing the slot when the new depth is at
    /// least the stored depth (ties overwrite, refreshing the move hint).
    pub fn store(&mut self, hash: u64, score: i32, depth: i32, bound: Bound, best_move: Option<Move>) {
        let idx = (hash % self.entries.len() as u64) as usize;
        let entry = &mut self.entries[idx];
        if depth >= entry.depth {
            *entry = TtEntry {
                hash,
                score,
                depth,
                bound,
                best_move,
            };
            self.stats.stores += 1;
        }
    }

    /// Empty every slot and reset the statistics.
    pub fn clear(&mut self) {
        self.entries.fill(EMPTY_ENTRY);
        self.stats = TtStats::default();
    }

    /// Return the probe/store counters.
    pub fn stats(&self) -> TtStats {
        self.stats
    }

    /// Zero the probe/store counters without touching the entries.
    pub fn reset_stats(&mut self) {
        self.stats = TtStats::default();
    }

    /// Number of slots in the table.
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Debug for TranspositionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranspositionTable")
            .field("capacity", &self.entries.len())
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Bound, TranspositionTable};

    #[test]
    fn sized_from_megabyte_budget() {
        let tt = TranspositionTable::new(1);
        let expected = (1024 * 1024) / std::mem::size_of::<super::TtEntry>();
        assert_eq!(tt.capacity(), expected);
    }

    #[test]
    fn empty_table_misses() {
        let mut tt = TranspositionTable::new(1);
        assert!(tt.probe(0xDEAD_BEEF).is_none());
        assert_eq!(tt.stats().misses, 1);
        assert_eq!(tt.stats().hits, 0);
    }

    #[test]
    fn store_then_probe_hits() {
        let mut tt = TranspositionTable::new(1);
        tt.store(0xDEAD_BEEF, 42, 5, Bound::Exact, None);
        let entry = tt.probe(0xDEAD_BEEF).expect("stored entry should be found");
        assert_eq!(entry.score, 42);
        assert_eq!(entry.depth, 5);
        assert_eq!(entry.bound, Bound::Exact);
        assert_eq!(tt.stats().hits, 1);
        assert_eq!(tt.stats().stores, 1);
    }

    #[test]
    fn hash_zero_on_empty_slot_does_not_match() {
        // Fresh slots carry hash 0; probing hash 0 must still miss
        // because the depth sentinel marks the slot empty.
        let mut tt = TranspositionTable::new(1);
        assert!(tt.probe(0).is_none());
    }

    #[test]
    fn shallower_store_does_not_evict() {
        let mut tt = TranspositionTable::new(1);
        tt.store(7, 100, 6, Bound::Exact, None);
        tt.store(7, 999, 3, Bound::LowerBound, None);
        let entry = tt.probe(7).unwrap();
        assert_eq!(entry.score, 100);
        assert_eq!(entry.depth, 6);
    }

    #[test]
    fn equal_depth_store_overwrites() {
        let mut tt = TranspositionTable::new(1);
        tt.store(7, 100, 4, Bound::Exact, None);
        tt.store(7, 200, 4, Bound::UpperBound, None);
        let entry = tt.probe(7).unwrap();
        assert_eq!(entry.score, 200);
        assert_eq!(entry.bound, Bound::UpperBound);
    }

    #[test]
    fn colliding_hash_same_slot_mismatches() {
        let mut tt = TranspositionTable::new(1);
        let len = tt.capacity() as u64;
        tt.store(3, 50, 4, Bound::Exact, None);
        // Same slot, different hash: must miss rather than lie.
        assert!(tt.probe(3 + len).is_none());
    }

    #[test]
    fn clear_empties_everything() {
        let mut tt = TranspositionTable::new(1);
        tt.store(7, 100, 4, Bound::Exact, None);
        tt.clear();
        assert!(tt.probe(7).is_none());
        assert_eq!(tt.stats().misses, 1);
        assert_eq!(tt.stats().stores, 0);
    }
}
