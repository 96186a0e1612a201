//! Memoized level thresholds
//!
//! Thresholds are accumulated step by step, exactly like the linear scan,
//! and kept in a table so later lookups can binary search. The table only
//! grows. Past `CACHE_LIMIT` levels lookups fall back to scanning from the
//! last cached entry without storing more.

use parking_lot::RwLock;

use super::level::Level;

/// Maximum number of thresholds kept in memory
pub(crate) const CACHE_LIMIT: usize = 1 << 16;

#[derive(Debug)]
struct Table {
    /// `thresholds[i]` is the cumulative XP needed for level `i + 1`
    thresholds: Vec<u64>,
    /// The next threshold does not fit in a `u64`
    exhausted: bool,
}

impl Table {
    fn last(&self) -> u64 {
        // thresholds always holds level 1
        self.thresholds[self.thresholds.len() - 1]
    }

    /// Append one threshold, or mark the table exhausted on overflow
    fn push_next<F>(&mut self, step_cost: &F)
    where
        F: Fn(Level) -> u64,
    {
        let len = self.thresholds.len();
        if len >= u32::MAX as usize {
            self.exhausted = true;
            return;
        }
        let top = Level::from_index(len - 1);
        match self.last().checked_add(step_cost(top)) {
            Some(next) => self.thresholds.push(next),
            None => self.exhausted = true,
        }
    }

    /// Largest cached level whose threshold is `<= xp`
    fn search(&self, xp: u64) -> Level {
        let count = self.thresholds.partition_point(|&t| t <= xp);
        Level::from_index(count.saturating_sub(1))
    }

    /// Whether the table already answers a lookup for `xp`
    fn covers(&self, xp: u64) -> bool {
        self.exhausted || self.last() > xp
    }
}

/// Grow-only threshold table shared between readers
#[derive(Debug)]
pub(crate) struct ThresholdCache {
    table: RwLock<Table>,
}

impl ThresholdCache {
    pub(crate) fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                thresholds: vec![0],
                exhausted: false,
            }),
        }
    }

    /// Number of cached thresholds
    #[cfg(test)]
    fn len(&self) -> usize {
        self.table.read().thresholds.len()
    }

    /// Cumulative XP for `level`, or `None` if it does not fit in a `u64`
    pub(crate) fn threshold<F>(&self, level: Level, step_cost: F) -> Option<u64>
    where
        F: Fn(Level) -> u64,
    {
        let index = level.index();
        {
            let table = self.table.read();
            if let Some(&t) = table.thresholds.get(index) {
                return Some(t);
            }
            if table.exhausted {
                return None;
            }
        }

        let mut table = self.table.write();
        let target = index.min(CACHE_LIMIT - 1);
        while table.thresholds.len() <= target && !table.exhausted {
            table.push_next(&step_cost);
        }
        log::debug!("Threshold cache holds {} levels", table.thresholds.len());

        if let Some(&t) = table.thresholds.get(index) {
            return Some(t);
        }
        if table.exhausted {
            return None;
        }

        // Beyond the cache: keep summing without storing
        let mut total = table.last();
        let start = table.thresholds.len() - 1;
        drop(table);
        for i in start..index {
            total = total.checked_add(step_cost(Level::from_index(i)))?;
        }
        Some(total)
    }

    /// Largest level whose threshold is `<= xp`
    pub(crate) fn level_for_xp<F>(&self, xp: u64, step_cost: F) -> Level
    where
        F: Fn(Level) -> u64,
    {
        {
            let table = self.table.read();
            if table.covers(xp) {
                return table.search(xp);
            }
        }

        let mut table = self.table.write();
        while !table.covers(xp) && table.thresholds.len() < CACHE_LIMIT {
            table.push_next(&step_cost);
        }
        log::debug!("Threshold cache holds {} levels", table.thresholds.len());

        if table.covers(xp) {
            return table.search(xp);
        }

        // Beyond the cache: scan upward from the last cached level
        let mut index = table.thresholds.len() - 1;
        let mut total = table.last();
        drop(table);
        while index + 1 < u32::MAX as usize {
            match total.checked_add(step_cost(Level::from_index(index))) {
                Some(next) if next <= xp => {
                    total = next;
                    index += 1;
                }
                _ => break,
            }
        }
        Level::from_index(index)
    }
}
