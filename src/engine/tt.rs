//! Transposition table.
//!
//! Fixed-size cache from position identity to a previously computed
//! score. Entries record the remaining depth they were searched to and
//! whether the score is exact or only an alpha/beta bound; the caller
//! enforces both before reusing a hit.

/// Entry type in the transposition table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum TTFlag {
    /// Exact score.
    Exact = 0,
    /// Lower bound (beta cutoff).
    LowerBound = 1,
    /// Upper bound (failed low).
    UpperBound = 2,
}

/// A single entry in the transposition table.
#[derive(Clone, Copy)]
pub struct TTEntry {
    /// Full key (for verification against index collisions).
    pub key: u64,
    /// Remaining search depth the score was computed to.
    pub depth: i8,
    /// Score; i32 to cover the mate range.
    pub score: i32,
    /// Entry type.
    pub flag: TTFlag,
    /// Age (for replacement).
    pub age: u8,
}

impl TTEntry {
    pub const EMPTY: TTEntry = TTEntry {
        key: 0,
        depth: 0,
        score: 0,
        flag: TTFlag::Exact,
        age: 0,
    };
}

/// Salt mixed into the key at maximizing nodes, so the two node roles
/// of one position never share an entry.
const ROLE_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Transposition table.
pub struct TranspositionTable {
    entries: Vec<TTEntry>,
    size: usize,
    age: u8,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in MB.
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<TTEntry>();
        let num_entries = (size_mb * 1024 * 1024) / entry_size;
        // Round down to power of 2 for efficient indexing; keep at least
        // one slot so the index mask never underflows.
        let size = (num_entries.next_power_of_two() / 2).max(1);

        TranspositionTable {
            entries: vec![TTEntry::EMPTY; size],
            size,
            age: 0,
        }
    }

    /// Combine a position hash with the node role into a table key.
    pub fn key_for(zobrist: u64, maximizing: bool) -> u64 {
        if maximizing {
            zobrist ^ ROLE_SALT
        } else {
            zobrist
        }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key as usize) & (self.size - 1)
    }

    /// Probe the table for an entry. Hits only on an exact key match;
    /// depth sufficiency is the caller's check.
    pub fn probe(&self, key: u64) -> Option<&TTEntry> {
        let entry = &self.entries[self.index(key)];
        if entry.key == key && key != 0 {
            Some(entry)
        } else {
            None
        }
    }

    /// Store an entry in the table.
    pub fn store(&mut self, key: u64, depth: i8, score: i32, flag: TTFlag) {
        let idx = self.index(key);
        let entry = &mut self.entries[idx];

        // Replace when the slot is empty, stale from a previous search,
        // or filled no deeper than the fresh result.
        let should_replace = entry.key == 0 || entry.age != self.age || depth >= entry.depth;
        if should_replace {
            *entry = TTEntry {
                key,
                depth,
                score,
                flag,
                age: self.age,
            };
        }
    }

    /// Clear the table.
    pub fn clear(&mut self) {
        self.entries.fill(TTEntry::EMPTY);
        self.age = 0;
    }

    /// Increment the age counter (call at the start of each search).
    pub fn new_search(&mut self) {
        self.age = self.age.wrapping_add(1);
    }

    /// Get the fill rate (permille of entries used).
    pub fn hashfull(&self) -> usize {
        let sample_size = 1000.min(self.size);
        let used = self.entries[..sample_size]
            .iter()
            .filter(|e| e.key != 0)
            .count();
        (used * 1000) / sample_size
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(64)
    }
}
