//! Frontier containers for the four search disciplines.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::NodeId;

/// Heap entry ordered by priority, then by insertion sequence.
#[derive(Clone, Copy)]
pub(crate) struct Ranked {
    pub(crate) priority: f64,
    pub(crate) seq: u64,
    pub(crate) id: NodeId,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and among equal priorities the earliest insertion.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The set of discovered but not yet expanded nodes.
pub(crate) enum Frontier {
    /// First in, first out.
    Queue(VecDeque<NodeId>),
    /// Last in, first out.
    Stack(Vec<NodeId>),
    /// Lowest priority first, ties by insertion order.
    Heap { heap: BinaryHeap<Ranked>, seq: u64 },
}

impl Frontier {
    pub(crate) fn queue() -> Self {
        Frontier::Queue(VecDeque::new())
    }

    pub(crate) fn stack() -> Self {
        Frontier::Stack(Vec::new())
    }

    pub(crate) fn heap() -> Self {
        Frontier::Heap {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Insert a node. `priority` is ignored by the queue and stack.
    pub(crate) fn push(&mut self, id: NodeId, priority: f64) {
        match self {
            Frontier::Queue(q) => q.push_back(id),
            Frontier::Stack(s) => s.push(id),
            Frontier::Heap { heap, seq } => {
                heap.push(Ranked {
                    priority,
                    seq: *seq,
                    id,
                });
                *seq += 1;
            }
        }
    }

    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        match self {
            Frontier::Queue(q) => q.pop_front(),
            Frontier::Stack(s) => s.pop(),
            Frontier::Heap { heap, .. } => heap.pop().map(|r| r.id),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        match self {
            Frontier::Queue(q) => q.len(),
            Frontier::Stack(s) => s.len(),
            Frontier::Heap { heap, .. } => heap.len(),
        }
    }
}
