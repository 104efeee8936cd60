//! Generic multi-stage compressed lookup table.
//!
//! A `Trie` resolves a key (almost always a codepoint) through `k` stages
//! of [`MultiArray`](crate::packed::MultiArray) storage: stages `0..k-1`
//! hold page indices into the next stage, and the terminal stage holds
//! values directly. `TrieBuilder` accepts monotone `(key, value)` writes
//! and deduplicates identical pages as it goes, the same trick
//! `other_examples/858f31db_CAD97-mileage__src-trie-mod.rs.rs` uses to
//! keep a codepoint-indexed table small: many pages of a classification
//! table are identical (e.g. long runs of "not assigned").
//!
//! Values are `u32` — every value this crate's tries carry (general
//! category codes, bucket indices, page indices themselves) fits
//! comfortably, so there is no need for a type parameter here.

use crate::packed::{BitWidth, MultiArray};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `put`/`put_range` was called with a key less than one already
    /// written.
    Order { key: u32, last: u32 },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Order { key, last } => {
                write!(f, "non-monotone trie insertion: key {key} follows {last}")
            }
        }
    }
}

impl std::error::Error for Error {}

fn shifts_for(widths: &[u32]) -> Vec<u32> {
    let mut shifts = vec![0u32; widths.len()];
    let mut acc = 0u32;
    for i in (0..widths.len()).rev() {
        shifts[i] = acc;
        acc += widths[i];
    }
    shifts
}

fn prefix(key: u32, width: u32, shift: u32) -> u32 {
    (key >> shift) & ((1u32 << width) - 1)
}

/// An immutable, freely shareable multi-stage lookup table.
#[derive(Debug, Clone)]
pub struct Trie {
    widths: Vec<u32>,
    shifts: Vec<u32>,
    storage: MultiArray,
    fill: u32,
}

impl Trie {
    /// `k` array reads, one per stage.
    #[must_use]
    pub fn get(&self, key: u32) -> u32 {
        let k = self.widths.len();
        let mut idx = prefix(key, self.widths[0], self.shifts[0]) as usize;
        for i in 1..k {
            let page = self.storage.get(i - 1, idx);
            idx = ((page << self.widths[i]) | prefix(key, self.widths[i], self.shifts[i])) as usize;
        }
        self.storage.get(k - 1, idx)
    }

    #[must_use]
    pub fn fill_value(&self) -> u32 {
        self.fill
    }

    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.widths.len()
    }
}

/// Accumulates monotone `(key, value)` writes into a deduplicated
/// multi-stage table.
pub struct TrieBuilder {
    widths: Vec<u32>,
    shifts: Vec<u32>,
    value_width: BitWidth,
    fill: u32,
    cursor_terminal: u64,
    last_key: Option<u32>,
    /// In-progress page for each stage; stage 0's "page" is just the
    /// final flat root array, never committed/deduplicated since nothing
    /// addresses into it from above.
    stage_buffers: Vec<Vec<u32>>,
    committed_pages: Vec<Vec<Vec<u32>>>,
}

impl TrieBuilder {
    /// `widths[i]` is stage `i`'s page-address width `b_i`; `value_width`
    /// bounds the terminal stage's stored values; `fill` pads holes.
    #[must_use]
    pub fn new(widths: Vec<u32>, value_width: BitWidth, fill: u32) -> Self {
        assert!(!widths.is_empty(), "a trie needs at least one stage");
        let shifts = shifts_for(&widths);
        let k = widths.len();
        Self {
            widths,
            shifts,
            value_width,
            fill,
            cursor_terminal: 0,
            last_key: None,
            stage_buffers: vec![Vec::new(); k],
            committed_pages: vec![Vec::new(); k],
        }
    }

    /// Write `value` at `key`, padding every skipped key with the fill
    /// value. Keys must be non-decreasing across calls.
    pub fn put(&mut self, key: u32, value: u32) -> Result<(), Error> {
        self.put_range(key, key + 1, value)
    }

    /// Write `value` to every key in `[a, b)`.
    pub fn put_range(&mut self, a: u32, b: u32, value: u32) -> Result<(), Error> {
        if let Some(last) = self.last_key {
            if a <= last {
                return Err(Error::Order { key: a, last });
            }
        }
        while self.cursor_terminal < u64::from(a) {
            self.push_terminal(self.fill);
        }
        for _ in a..b {
            self.push_terminal(value);
        }
        self.last_key = Some(b.saturating_sub(1).max(a));
        Ok(())
    }

    fn push_terminal(&mut self, value: u32) {
        let k = self.widths.len();
        self.append_value(k - 1, value);
        self.cursor_terminal += 1;
    }

    fn append_value(&mut self, stage: usize, value: u32) {
        if stage == 0 {
            self.stage_buffers[0].push(value);
            return;
        }
        self.stage_buffers[stage].push(value);
        let page_size = 1usize << self.widths[stage];
        if self.stage_buffers[stage].len() == page_size {
            let page = std::mem::replace(&mut self.stage_buffers[stage], Vec::with_capacity(page_size));
            let page_index = self.commit_page(stage, page) as u32;
            self.append_value(stage - 1, page_index);
        }
    }

    fn commit_page(&mut self, stage: usize, page: Vec<u32>) -> usize {
        if let Some(existing) = self.committed_pages[stage].iter().position(|p| *p == page) {
            existing
        } else {
            self.committed_pages[stage].push(page);
            self.committed_pages[stage].len() - 1
        }
    }

    /// Pad to `domain_size` with the fill value and return the finished
    /// table. `domain_size` must be a multiple of every stage's page
    /// size from the terminal stage inward (true for `0x110000` with the
    /// page widths this crate actually uses).
    #[must_use]
    pub fn build(mut self, domain_size: u32) -> Trie {
        while self.cursor_terminal < u64::from(domain_size) {
            self.push_terminal(self.fill);
        }
        for stage in (1..self.widths.len()).rev() {
            debug_assert!(
                self.stage_buffers[stage].is_empty(),
                "stage {stage} has a dangling partial page; domain_size must align to its page size"
            );
        }

        let k = self.widths.len();
        let mut all_stage_arrays: Vec<(BitWidth, usize, Vec<u32>)> = Vec::with_capacity(k);

        // Root stage (stage 0): the flat, never-deduplicated array built
        // directly in stage_buffers[0]. Its entries are page indices into
        // stage 1 (or values directly, for a single-stage trie).
        let root_width = if k == 1 {
            self.value_width
        } else {
            let next_page_count = self.committed_pages[1].len().max(1);
            BitWidth::smallest_for(next_page_count as u32 - 1)
        };
        let root = std::mem::take(&mut self.stage_buffers[0]);
        let mut root_packed = crate::packed::PackedBitArray::new(root_width, root.len());
        for (i, &v) in root.iter().enumerate() {
            root_packed.set(i, v);
        }
        all_stage_arrays.push((root_width, root.len(), root_packed.into_words()));

        // Intermediate stages (1..k-1): each holds its committed pages
        // flattened back-to-back, storing page indices into the next
        // stage at the minimum width that can address it.
        for stage in 1..k.saturating_sub(1) {
            let page_count = self.committed_pages[stage].len().max(1);
            let width = BitWidth::smallest_for(page_count as u32 - 1);
            let flat: Vec<u32> = self.committed_pages[stage].iter().flatten().copied().collect();
            let mut packed = crate::packed::PackedBitArray::new(width, flat.len());
            for (i, &v) in flat.iter().enumerate() {
                packed.set(i, v);
            }
            all_stage_arrays.push((width, flat.len(), packed.into_words()));
        }

        // Terminal stage (k-1, when k > 1): committed pages hold actual
        // values, packed at the declared value width.
        if k > 1 {
            let terminal_flat: Vec<u32> =
                self.committed_pages[k - 1].iter().flatten().copied().collect();
            let mut terminal_packed =
                crate::packed::PackedBitArray::new(self.value_width, terminal_flat.len());
            for (i, &v) in terminal_flat.iter().enumerate() {
                terminal_packed.set(i, v);
            }
            all_stage_arrays.push((self.value_width, terminal_flat.len(), terminal_packed.into_words()));
        }

        Trie {
            widths: self.widths,
            shifts: self.shifts,
            storage: MultiArray::from_stage_words(all_stage_arrays),
            fill: self.fill,
        }
    }
}
