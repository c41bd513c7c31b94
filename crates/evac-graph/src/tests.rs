//! Unit tests for evac-graph.

#[cfg(test)]
mod helpers {
    use evac_core::NodeId;

    use crate::{RoadGraph, RoadGraphBuilder};

    /// 5-node path 0-1-2-3-4, exit = {4}.
    pub fn path_graph() -> (RoadGraph, [NodeId; 5]) {
        let mut b = RoadGraphBuilder::new();
        let n0 = b.add_nodes(5);
        let nodes = [
            n0,
            NodeId(n0.0 + 1),
            NodeId(n0.0 + 2),
            NodeId(n0.0 + 3),
            NodeId(n0.0 + 4),
        ];
        for w in nodes.windows(2) {
            b.add_edge(w[0], w[1]);
        }
        b.mark_exit(nodes[4]);
        (b.build().unwrap(), nodes)
    }

    /// Small grid: 0-1-2, 0-3, 2-4, 3-4. Exit = {4}, rendezvous = {2}.
    pub fn grid_graph() -> (RoadGraph, [NodeId; 5]) {
        let mut b = RoadGraphBuilder::new();
        let n0 = b.add_nodes(5);
        let nodes = [
            n0,
            NodeId(n0.0 + 1),
            NodeId(n0.0 + 2),
            NodeId(n0.0 + 3),
            NodeId(n0.0 + 4),
        ];
        b.add_edge(nodes[0], nodes[1]);
        b.add_edge(nodes[1], nodes[2]);
        b.add_edge(nodes[0], nodes[3]);
        b.add_edge(nodes[2], nodes[4]);
        b.add_edge(nodes[3], nodes[4]);
        b.mark_exit(nodes[4]);
        b.mark_rendezvous(nodes[2]);
        (b.build().unwrap(), nodes)
    }
}

#[cfg(test)]
mod builder {
    use evac_core::NodeId;

    use crate::{GraphError, RoadGraphBuilder};

    #[test]
    fn empty_build() {
        let graph = RoadGraphBuilder::new().build().unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn missing_exit_node_is_error() {
        let mut b = RoadGraphBuilder::new();
        let n0 = b.add_nodes(2);
        b.add_edge(n0, NodeId(n0.0 + 1));
        assert!(matches!(b.build(), Err(GraphError::NoExitNodes)));
    }

    #[test]
    fn undirected_adjacency() {
        let (graph, [n0, n1, ..]) = super::helpers::path_graph();
        assert!(graph.neighbors(n0).contains(&n1));
        assert!(graph.neighbors(n1).contains(&n0));
    }
}

#[cfg(test)]
mod shortest_path {
    use crate::GraphError;

    #[test]
    fn trivial_same_node() {
        let (graph, [n0, ..]) = super::helpers::path_graph();
        let path = graph.shortest_path(n0, n0).unwrap();
        assert_eq!(path, vec![n0]);
    }

    #[test]
    fn path_along_the_line() {
        let (graph, nodes) = super::helpers::path_graph();
        let path = graph.shortest_path(nodes[0], nodes[4]).unwrap();
        assert_eq!(path, nodes.to_vec());
    }

    #[test]
    fn no_route_disconnected() {
        use evac_core::NodeId;

        use crate::RoadGraphBuilder;

        let mut b = RoadGraphBuilder::new();
        let n0 = b.add_nodes(2);
        let n1 = NodeId(n0.0 + 1);
        b.mark_exit(n0);
        let graph = b.build().unwrap();
        assert!(matches!(
            graph.shortest_path(n0, n1),
            Err(GraphError::NoRoute { .. })
        ));
    }
}

#[cfg(test)]
mod exit_paths {
    #[test]
    fn exit_node_path_is_singleton() {
        let (graph, nodes) = super::helpers::path_graph();
        assert_eq!(graph.shortest_exit_path(nodes[4]), &[nodes[4]]);
    }

    #[test]
    fn nearest_exit_path_matches_line() {
        let (graph, nodes) = super::helpers::path_graph();
        assert_eq!(graph.shortest_exit_path(nodes[0]), nodes.as_slice());
        assert_eq!(graph.shortest_exit_path(nodes[2]), &nodes[2..]);
    }

    #[test]
    fn grid_picks_shorter_exit_route() {
        let (graph, nodes) = super::helpers::grid_graph();
        // From n0, both 0-1-2-4 and 0-3-4 are length-3 paths (3 nodes to 4 nodes);
        // either is a valid nearest-exit path since they tie in hop count.
        let path = graph.shortest_exit_path(nodes[0]);
        assert_eq!(*path.last().unwrap(), nodes[4]);
        assert_eq!(path[0], nodes[0]);
    }
}

#[cfg(test)]
mod dist_matrix {
    use crate::graph::RoadGraph;

    #[test]
    fn symmetric_and_correct_on_path() {
        let (graph, nodes) = super::helpers::path_graph();
        let matrix = graph.build_dist_matrix();
        assert_eq!(RoadGraph::dist(&matrix, nodes[0], nodes[4]), 4);
        assert_eq!(RoadGraph::dist(&matrix, nodes[4], nodes[0]), 4);
        assert_eq!(RoadGraph::dist(&matrix, nodes[1], nodes[1]), 0);
    }

    #[test]
    fn unreachable_is_max() {
        use evac_core::NodeId;

        use crate::RoadGraphBuilder;

        let mut b = RoadGraphBuilder::new();
        let n0 = b.add_nodes(2);
        let n1 = NodeId(n0.0 + 1);
        b.mark_exit(n0);
        let graph = b.build().unwrap();
        let matrix = graph.build_dist_matrix();
        assert_eq!(RoadGraph::dist(&matrix, n0, n1), u32::MAX);
    }
}

#[cfg(test)]
mod rendezvous {
    #[test]
    fn rendezvous_nodes_tracked() {
        let (graph, nodes) = super::helpers::grid_graph();
        assert_eq!(graph.rendezvous_nodes(), &[nodes[2]]);
        assert!(graph.is_exit(nodes[4]));
        assert!(!graph.is_exit(nodes[2]));
    }
}
