//! Keyed list diff: identity matching, LIS-based move detection, and ordered patch emission
use super::config::ReconcilerConfig;
use super::types::*;
use indexmap::IndexMap;

pub struct DiffEngine<'a> {
    old_list: &'a [Snapshot],
    new_list: &'a [LiveEvent],
    config: &'a ReconcilerConfig,
    operations: Vec<Operation>,
}

impl<'a> DiffEngine<'a> {
    pub fn new(
        old_list: &'a [Snapshot],
        new_list: &'a [LiveEvent],
        config: &'a ReconcilerConfig,
    ) -> Self {
        DiffEngine {
            old_list,
            new_list,
            config,
            operations: Vec::new(),
        }
    }

    /// Computes the operation sequence turning `old_list` into `new_list`.
    ///
    /// Operations come out in four phases: removals (highest index first), moves,
    /// insertions (ascending), then content updates at their final positions. Every
    /// index is relative to the list produced by the operations before it.
    pub fn reconcile(mut self) -> Vec<Operation> {
        log::debug!(
            "DiffEngine::reconcile: old_len={} new_len={} detect_moves={}",
            self.old_list.len(),
            self.new_list.len(),
            self.config.detect_moves
        );

        if self.old_list.is_empty() && self.new_list.is_empty() {
            return self.operations;
        }

        let mut new_to_old = self.match_identities();
        let mut claimed = vec![false; self.old_list.len()];
        for old_idx in new_to_old.iter().flatten() {
            claimed[*old_idx] = true;
        }

        // Matched old indices, in new order. The LIS of this sequence stays put.
        let sequence_for_lis: Vec<usize> = new_to_old.iter().flatten().copied().collect();
        let mut stable = vec![false; self.old_list.len()];
        for i in longest_increasing_subsequence(&sequence_for_lis) {
            stable[sequence_for_lis[i]] = true;
        }

        if !self.config.detect_moves {
            // Out-of-order rows are dropped and re-added instead of moved
            for slot in new_to_old.iter_mut() {
                if let Some(old_idx) = *slot {
                    if !stable[old_idx] {
                        claimed[old_idx] = false;
                        *slot = None;
                    }
                }
            }
        }

        let mut working = self.emit_removals(&claimed);
        self.emit_moves(&new_to_old, &stable, &mut working);
        self.emit_insertions(&new_to_old);
        self.emit_updates(&new_to_old);

        log::debug!(
            "DiffEngine::reconcile: produced {} operations",
            self.operations.len()
        );
        for op in &self.operations {
            log::trace!("DiffEngine::reconcile: {}", op);
        }
        self.operations
    }

    /// Pairs every new position with the old position holding the same identity.
    /// With duplicate identities the first unclaimed occurrence wins.
    fn match_identities(&self) -> Vec<Option<usize>> {
        let mut old_key_to_idx: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for (i, snap) in self.old_list.iter().enumerate() {
            old_key_to_idx.entry(snap.item_id()).or_default().push(i);
        }
        // Reverse so pop() yields the earliest occurrence
        for positions in old_key_to_idx.values_mut() {
            positions.reverse();
        }

        self.new_list
            .iter()
            .map(|item| {
                old_key_to_idx
                    .get_mut(item.item_id.as_str())
                    .and_then(|positions| positions.pop())
            })
            .collect()
    }

    /// Returns the surviving old indices in their original order.
    fn emit_removals(&mut self, claimed: &[bool]) -> Vec<usize> {
        for old_idx in (0..self.old_list.len()).rev() {
            if !claimed[old_idx] {
                self.operations.push(Operation::Remove { index: old_idx });
            }
        }
        (0..self.old_list.len()).filter(|&i| claimed[i]).collect()
    }

    /// Walks the new order and places each non-stable row right after the row that
    /// precedes it in the new order. Stable rows never move.
    ///
    /// Quadratic in the number of surviving rows: every move does a linear position
    /// lookup and a `Vec` shift.
    fn emit_moves(
        &mut self,
        new_to_old: &[Option<usize>],
        stable: &[bool],
        working: &mut Vec<usize>,
    ) {
        let mut previous: Option<usize> = None;
        for old_idx in new_to_old.iter().flatten().copied() {
            if !stable[old_idx] {
                let Some(from) = working.iter().position(|&k| k == old_idx) else {
                    continue;
                };
                working.remove(from);
                let to = match previous {
                    Some(prev) => working.iter().position(|&k| k == prev).map_or(0, |p| p + 1),
                    None => 0,
                };
                working.insert(to, old_idx);
                if from != to {
                    self.operations.push(Operation::Move { from, to });
                }
            }
            previous = Some(old_idx);
        }
    }

    fn emit_insertions(&mut self, new_to_old: &[Option<usize>]) {
        for (new_idx, slot) in new_to_old.iter().enumerate() {
            if slot.is_none() {
                self.operations.push(Operation::Insert { index: new_idx });
            }
        }
    }

    fn emit_updates(&mut self, new_to_old: &[Option<usize>]) {
        for (new_idx, slot) in new_to_old.iter().enumerate() {
            if let Some(old_idx) = *slot {
                if !self.old_list[old_idx].same_content(&self.new_list[new_idx]) {
                    self.operations.push(Operation::Update { index: new_idx });
                }
            }
        }
    }
}

/// O(n log n) longest strictly increasing subsequence. Returns positions into `seq`;
/// among equal-length candidates the one ending latest wins.
pub fn longest_increasing_subsequence(seq: &[usize]) -> Vec<usize> {
    if seq.is_empty() {
        return Vec::new();
    }

    let mut predecessors = vec![0; seq.len()];
    let mut indices = vec![0; seq.len()];
    let mut length = 0;

    for (i, &value) in seq.iter().enumerate() {
        let mut low = 0;
        let mut high = length;

        while low < high {
            let mid = low + (high - low) / 2;
            if seq[indices[mid]] < value {
                low = mid + 1;
            } else {
                high = mid;
            }
        }

        if low > 0 {
            predecessors[i] = indices[low - 1];
        }
        indices[low] = i;

        if low == length {
            length += 1;
        }
    }

    let mut lis = Vec::with_capacity(length);
    let mut k = indices[length - 1];
    for _ in 0..length {
        lis.push(k);
        k = predecessors[k];
    }
    lis.reverse();
    lis
}
