//! Road network representation and BFS-based routing.
//!
//! # Data layout
//!
//! The graph is undirected and unweighted — every edge is a single hop, so
//! distances are hop counts rather than travel times. Adjacency is stored as
//! CSR (Compressed Sparse Row): given a `NodeId n`, its neighbors occupy the
//! slice `neighbor_ids[node_start[n] .. node_start[n+1]]`. This keeps
//! BFS's inner loop a contiguous memory scan.
//!
//! Two distinguished node sets are carried alongside the adjacency: exit
//! nodes (`X`) and rendezvous nodes (`R`). For every node the graph
//! precomputes the shortest path to its nearest exit node at build time, so
//! [`RoadGraph::shortest_exit_path`] is an O(1) lookup on the hot tick path.

use std::collections::VecDeque;

use evac_core::NodeId;
use log::debug;

use crate::{GraphError, GraphResult};

/// Undirected, unweighted road graph plus precomputed exit routing.
///
/// All fields needed on hot paths are exposed as methods rather than raw
/// `pub` fields; construct via [`RoadGraphBuilder`].
pub struct RoadGraph {
    node_start: Vec<u32>,
    neighbor_ids: Vec<NodeId>,
    exit_nodes: Vec<NodeId>,
    rendezvous_nodes: Vec<NodeId>,
    /// `shortest_exit_path[v]` is the ordered node list from `v` to its
    /// nearest exit node (inclusive of both endpoints). Empty iff `v` is
    /// itself an exit node.
    shortest_exit_path: Vec<Vec<NodeId>>,
}

impl RoadGraph {
    /// Construct an empty graph with no nodes or edges.
    ///
    /// Any routing request against an empty graph returns
    /// [`GraphError::NoRoute`] or [`GraphError::NodeNotFound`].
    pub fn empty() -> Self {
        RoadGraphBuilder::new().build().expect("empty graph always builds")
    }

    pub fn node_count(&self) -> usize {
        self.node_start.len().saturating_sub(1)
    }

    pub fn edge_count(&self) -> usize {
        self.neighbor_ids.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Neighbors of `node` as a contiguous slice — no allocation.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.node_start[node.index()] as usize;
        let end = self.node_start[node.index() + 1] as usize;
        &self.neighbor_ids[start..end]
    }

    pub fn exit_nodes(&self) -> &[NodeId] {
        &self.exit_nodes
    }

    pub fn rendezvous_nodes(&self) -> &[NodeId] {
        &self.rendezvous_nodes
    }

    pub fn is_exit(&self, node: NodeId) -> bool {
        self.exit_nodes.contains(&node)
    }

    /// Ordered node list from `v` to its nearest exit node, starting at `v`.
    /// Returns a single-element path `[v]` if `v` is already an exit node.
    pub fn shortest_exit_path(&self, v: NodeId) -> &[NodeId] {
        &self.shortest_exit_path[v.index()]
    }

    /// BFS shortest path between two arbitrary nodes (inclusive of both
    /// endpoints). Returns a single-element path if `from == to`.
    pub fn shortest_path(&self, from: NodeId, to: NodeId) -> GraphResult<Vec<NodeId>> {
        if from.index() >= self.node_count() {
            return Err(GraphError::NodeNotFound(from));
        }
        if to.index() >= self.node_count() {
            return Err(GraphError::NodeNotFound(to));
        }
        if from == to {
            return Ok(vec![from]);
        }

        let n = self.node_count();
        let mut prev = vec![NodeId::INVALID; n];
        let mut visited = vec![false; n];
        visited[from.index()] = true;

        let mut queue = VecDeque::new();
        queue.push_back(from);

        while let Some(node) = queue.pop_front() {
            if node == to {
                return Ok(reconstruct_path(&prev, from, to));
            }
            for &nb in self.neighbors(node) {
                if !visited[nb.index()] {
                    visited[nb.index()] = true;
                    prev[nb.index()] = node;
                    queue.push_back(nb);
                }
            }
        }

        Err(GraphError::NoRoute { from, to })
    }

    /// Full |V|x|V| hop-distance matrix. `dist[u][v]` is the number of hops
    /// on the shortest path between `u` and `v`, or `u32::MAX` if
    /// unreachable. Symmetric by construction since the graph is undirected,
    /// so `dist(u, v) == dist(v, u)` — callers never need to worry about
    /// row/column orientation when indexing it.
    pub fn build_dist_matrix(&self) -> Vec<Vec<u32>> {
        let n = self.node_count();
        let mut matrix = vec![vec![u32::MAX; n]; n];
        for start in 0..n {
            let mut row = vec![u32::MAX; n];
            row[start] = 0;
            let mut queue = VecDeque::new();
            queue.push_back(NodeId(start as u32));
            while let Some(node) = queue.pop_front() {
                let d = row[node.index()];
                for &nb in self.neighbors(node) {
                    if row[nb.index()] == u32::MAX {
                        row[nb.index()] = d + 1;
                        queue.push_back(nb);
                    }
                }
            }
            matrix[start] = row;
        }
        matrix
    }

    /// Hop distance between two nodes, read from a precomputed matrix built
    /// by [`RoadGraph::build_dist_matrix`]. The matrix is symmetric, so this
    /// is equivalent whether called as `dist(u, v)` or `dist(v, u)`.
    pub fn dist(matrix: &[Vec<u32>], u: NodeId, v: NodeId) -> u32 {
        matrix[u.index()][v.index()]
    }
}

fn reconstruct_path(prev: &[NodeId], from: NodeId, to: NodeId) -> Vec<NodeId> {
    let mut path = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur.index()];
        path.push(cur);
    }
    path.reverse();
    path
}

// ── RoadGraphBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] incrementally, then call [`build`](Self::build).
///
/// Accepts nodes and undirected edges in any order. `build()` sorts
/// adjacency by node, constructs CSR arrays, and precomputes the
/// nearest-exit shortest path for every node via a multi-source BFS seeded
/// at all exit nodes simultaneously.
pub struct RoadGraphBuilder {
    node_count: usize,
    edges: Vec<(NodeId, NodeId)>,
    exit_nodes: Vec<NodeId>,
    rendezvous_nodes: Vec<NodeId>,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self {
            node_count: 0,
            edges: Vec::new(),
            exit_nodes: Vec::new(),
            rendezvous_nodes: Vec::new(),
        }
    }

    /// Add `n` nodes (sequential IDs starting at the current node count) and
    /// return the first new `NodeId`.
    pub fn add_nodes(&mut self, n: usize) -> NodeId {
        let first = NodeId(self.node_count as u32);
        self.node_count += n;
        first
    }

    /// Add an undirected edge between `a` and `b`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        self.edges.push((a, b));
    }

    pub fn mark_exit(&mut self, node: NodeId) {
        if !self.exit_nodes.contains(&node) {
            self.exit_nodes.push(node);
        }
    }

    pub fn mark_rendezvous(&mut self, node: NodeId) {
        if !self.rendezvous_nodes.contains(&node) {
            self.rendezvous_nodes.push(node);
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Consume the builder and produce a [`RoadGraph`].
    ///
    /// Fails with [`GraphError::NoExitNodes`] if at least one node was added
    /// but no exit node was marked — the nearest-exit precomputation would
    /// otherwise silently produce empty paths for every node.
    pub fn build(self) -> GraphResult<RoadGraph> {
        if self.node_count > 0 && self.exit_nodes.is_empty() {
            return Err(GraphError::NoExitNodes);
        }

        let mut degree = vec![0u32; self.node_count + 1];
        for &(a, b) in &self.edges {
            degree[a.index() + 1] += 1;
            degree[b.index() + 1] += 1;
        }
        for i in 1..=self.node_count {
            degree[i] += degree[i - 1];
        }

        let mut neighbor_ids = vec![NodeId::INVALID; degree[self.node_count] as usize];
        let mut cursor = degree.clone();
        for &(a, b) in &self.edges {
            neighbor_ids[cursor[a.index()] as usize] = b;
            cursor[a.index()] += 1;
            neighbor_ids[cursor[b.index()] as usize] = a;
            cursor[b.index()] += 1;
        }

        let graph_stub = RoadGraph {
            node_start: degree,
            neighbor_ids,
            exit_nodes: self.exit_nodes,
            rendezvous_nodes: self.rendezvous_nodes,
            shortest_exit_path: Vec::new(),
        };

        let shortest_exit_path = compute_exit_paths(&graph_stub);
        debug!(
            "built road graph: {} nodes, {} edges, {} exit nodes",
            graph_stub.node_count(),
            graph_stub.edge_count(),
            graph_stub.exit_nodes.len()
        );

        Ok(RoadGraph {
            shortest_exit_path,
            ..graph_stub
        })
    }
}

impl Default for RoadGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Multi-source BFS from every exit node simultaneously, recording for each
/// node the predecessor on its shortest path to whichever exit reaches it
/// first (ties broken by BFS discovery order, matching iterating exit nodes
/// in the order they were marked and taking the first-found shortest path).
fn compute_exit_paths(graph: &RoadGraph) -> Vec<Vec<NodeId>> {
    let n = graph.node_count();
    let mut next_hop = vec![NodeId::INVALID; n]; // next_hop[v] = node after v on the path toward its exit
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();

    for &x in &graph.exit_nodes {
        if !visited[x.index()] {
            visited[x.index()] = true;
            queue.push_back(x);
        }
    }

    while let Some(node) = queue.pop_front() {
        for &nb in graph.neighbors(node) {
            if !visited[nb.index()] {
                visited[nb.index()] = true;
                next_hop[nb.index()] = node;
                queue.push_back(nb);
            }
        }
    }

    (0..n)
        .map(|i| {
            let start = NodeId(i as u32);
            if graph.exit_nodes.contains(&start) {
                return vec![start];
            }
            let mut path = vec![start];
            let mut cur = start;
            while next_hop[cur.index()] != NodeId::INVALID {
                cur = next_hop[cur.index()];
                path.push(cur);
            }
            path
        })
        .collect()
}
