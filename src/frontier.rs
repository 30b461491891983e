//! Pending-exploration containers with pluggable ordering.
//!
//! - [`LifoFrontier`]: stack, used by depth-first search.
//! - [`FifoFrontier`]: queue, used by breadth-first search.
//! - [`PriorityFrontier`]: min-heap on f-cost, used by A*.
//!
//! Frontiers store [`NodeId`]s only; the nodes themselves live in the
//! search's [`NodeArena`](crate::node::NodeArena).

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::node::NodeId;

/// A pending-exploration container.
pub trait Frontier {
    /// Adds a node. `f_cost` is the node's priority; order-agnostic
    /// frontiers ignore it.
    fn push(&mut self, id: NodeId, f_cost: f64);

    /// Removes and returns the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    /// Number of pending nodes.
    fn len(&self) -> usize;

    /// Whether no node is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest number of nodes pending at once.
    fn high_water(&self) -> usize;
}

/// Last-in, first-out frontier.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
    high_water: usize,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, id: NodeId, _f_cost: f64) {
        self.stack.push(id);
        self.high_water = self.high_water.max(self.stack.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// First-in, first-out frontier.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
    high_water: usize,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, id: NodeId, _f_cost: f64) {
        self.queue.push_back(id);
        self.high_water = self.high_water.max(self.queue.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Priority ordering key: `(f_cost, creation_order)`.
///
/// Lower f-cost first; among equal f-costs the older entry wins, so ties
/// resolve in insertion order. f-costs are compared with [`f64::total_cmp`].
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub f_cost: f64,
    pub creation_order: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .total_cmp(&other.f_cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

/// `BinaryHeap` is a max-heap, so entries carry `Reverse<FrontierKey>`.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    id: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier ordered by ascending f-cost.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<FrontierEntry>,
    next_order: u64,
    high_water: usize,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, id: NodeId, f_cost: f64) {
        let key = FrontierKey {
            f_cost,
            creation_order: self.next_order,
        };
        self.next_order += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            id,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}
