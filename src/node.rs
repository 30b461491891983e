//! Search nodes, the per-invocation node arena, and path reconstruction.
//!
//! Nodes form a tree rooted at the initial state. Each node refers to its
//! parent by [`NodeId`], an index into the [`NodeArena`] that owns every node
//! created during one search. A parent is always allocated before its
//! children, so parent ids are strictly smaller than child ids and the
//! chain always terminates at the root.

/// Stable index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable search node: a discovered state plus its discovery context.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    state: T,
    parent: Option<NodeId>,
    cost: f64,
    heuristic: f64,
    depth: usize,
}

impl<T> Node<T> {
    /// The state stored in this node.
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Parent node id (`None` for the root).
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Accumulated cost from the initial state.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Heuristic estimate of the remaining cost to a goal.
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    /// Number of edges between the root and this node.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `cost + heuristic`, the informed-search priority.
    pub fn f_cost(&self) -> f64 {
        self.cost + self.heuristic
    }

    /// Consumes the node and returns its state.
    pub fn into_state(self) -> T {
        self.state
    }
}

/// Owner of every node created during one search invocation.
///
/// Nodes are only ever appended, never removed or mutated, so a [`NodeId`]
/// stays valid for the lifetime of the arena.
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> NodeArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocates the root node. Root nodes have zero cost and depth.
    pub fn push_root(&mut self, state: T, heuristic: f64) -> NodeId {
        self.alloc(Node {
            state,
            parent: None,
            cost: 0.0,
            heuristic,
            depth: 0,
        })
    }

    /// Allocates a child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this arena.
    pub fn push_child(&mut self, parent: NodeId, state: T, cost: f64, heuristic: f64) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        self.alloc(Node {
            state,
            parent: Some(parent),
            cost,
            heuristic,
            depth,
        })
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this arena.
    pub fn get(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been allocated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node allocated so far, indexed by [`NodeId`].
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// Consumes the arena, keeping only the chain from the root to `goal`.
    ///
    /// Parent ids in the returned solution are re-indexed so that node `i`
    /// of the chain has parent `i - 1`. Everything off the chain is dropped.
    pub fn into_solution(self, goal: NodeId) -> Solution<T> {
        let ids = chain_ids(&self.nodes, goal);
        let mut slots: Vec<Option<Node<T>>> = self.nodes.into_iter().map(Some).collect();
        let nodes = ids
            .iter()
            .enumerate()
            .filter_map(|(pos, id)| {
                slots[id.0].take().map(|node| Node {
                    parent: pos.checked_sub(1).map(NodeId),
                    ..node
                })
            })
            .collect();
        Solution { nodes }
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ids along the parent chain of `id` within `nodes`, root first.
fn chain_ids<T>(nodes: &[Node<T>], id: NodeId) -> Vec<NodeId> {
    let mut ids = Vec::with_capacity(nodes[id.0].depth + 1);
    let mut current = Some(id);
    while let Some(cur) = current {
        ids.push(cur);
        current = nodes[cur.0].parent;
    }
    ids.reverse();
    ids
}

/// Walks the parent chain of the terminal node `id` and returns its states,
/// root first.
///
/// `nodes` is any parent-linked node table: [`Solution::nodes`] together with
/// [`Solution::goal_id`] for a finished search, or [`NodeArena::nodes`] while
/// building one. The result always has `depth + 1` elements, starts with the
/// initial state and ends with the state of `id`.
///
/// # Panics
///
/// Panics if `id` or a parent on its chain is out of range for `nodes`.
pub fn reconstruct_path<T: Clone>(nodes: &[Node<T>], id: NodeId) -> Vec<T> {
    chain_ids(nodes, id)
        .into_iter()
        .map(|cur| nodes[cur.0].state.clone())
        .collect()
}

/// The retained root-to-goal chain of a successful search.
///
/// Never empty: the first node is the root, the last is the goal.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Solution<T> {
    /// The terminal node whose state satisfied the goal test.
    pub fn goal(&self) -> &Node<T> {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Id of the goal node within [`nodes`](Self::nodes).
    pub fn goal_id(&self) -> NodeId {
        NodeId(self.nodes.len() - 1)
    }

    /// The root node (initial state).
    pub fn root(&self) -> &Node<T> {
        &self.nodes[0]
    }

    /// Every node of the chain, root first.
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// Number of states on the path (edges + 1).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; a solution holds at least the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges on the path.
    pub fn depth(&self) -> usize {
        self.goal().depth
    }

    /// Accumulated cost of the goal node.
    pub fn cost(&self) -> f64 {
        self.goal().cost
    }

    /// States along the path, root first.
    pub fn path(&self) -> Vec<T>
    where
        T: Clone,
    {
        reconstruct_path(&self.nodes, self.goal_id())
    }

    /// Consumes the solution and returns its states, root first.
    pub fn into_path(self) -> Vec<T> {
        self.nodes.into_iter().map(Node::into_state).collect()
    }
}
