use super::request::Hit;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Ordered bounded collection of hits.
///
/// Workers deliver batches out of order, so the collector keeps a
/// max-heap on nonce capped at the hit limit: while under the limit
/// everything is kept, and once full an arriving hit only displaces the
/// highest-nonce resident when it is strictly earlier. the retained set
/// is therefore always the lowest-nonce `limit` matches seen so far.
pub struct Collector {
    limit: usize,
    heap: BinaryHeap<Entry>,
}

struct Entry(Hit);

impl Collector {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, hit: Hit) {
        if self.heap.len() < self.limit {
            self.heap.push(Entry(hit));
        } else if let Some(top) = self.heap.peek() {
            if hit.nonce < top.0.nonce {
                self.heap.pop();
                self.heap.push(Entry(hit));
            }
        }
    }

    /// the limit is met; the dispatcher can stop issuing new batches
    pub fn full(&self) -> bool {
        self.heap.len() >= self.limit
    }

    /// strictly ascending by nonce
    pub fn into_sorted(self) -> Vec<Hit> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|e| e.0)
            .collect()
    }
}

// nonces are unique within a scan, so ordering on them alone is total
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.nonce.cmp(&other.0.nonce)
    }
}
impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.0.nonce == other.0.nonce
    }
}
impl Eq for Entry {}
