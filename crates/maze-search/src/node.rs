use maze_core::Point;

// ---------------------------------------------------------------------------
// SearchNode
// ---------------------------------------------------------------------------

/// Index of a node inside a [`NodeArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One grid cell reached during a search.
///
/// Nodes are immutable once created. A node's parent always has a strictly
/// smaller id, so parent chains cannot loop.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchNode {
    pub pos: Point,
    /// Steps taken from the start.
    pub g: u32,
    /// Heuristic estimate to the nearest goal (0 for uninformed searches).
    pub h: f64,
    pub parent: Option<NodeId>,
}

impl SearchNode {
    /// Total estimated cost `g + h`.
    #[inline]
    pub fn f(&self) -> f64 {
        f64::from(self.g) + self.h
    }
}

// ---------------------------------------------------------------------------
// NodeArena
// ---------------------------------------------------------------------------

/// Append-only storage for the nodes created by one search run.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the root node (no parent, `g = 0`).
    pub fn push_root(&mut self, pos: Point, h: f64) -> NodeId {
        self.push(SearchNode {
            pos,
            g: 0,
            h,
            parent: None,
        })
    }

    /// Add a node one step further than `parent`.
    pub fn push_child(&mut self, parent: NodeId, pos: Point, h: f64) -> NodeId {
        let g = self[parent].g + 1;
        self.push(SearchNode {
            pos,
            g,
            h,
            parent: Some(parent),
        })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes created.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parent links from `id` back to the root and return the
    /// positions in root-to-`id` order.
    pub fn path(&self, id: NodeId) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let node = &self[ci];
            path.push(node.pos);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = SearchNode;

    #[inline]
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }
}
