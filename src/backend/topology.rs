use std::collections::hash_map::Values;

use petgraph::Undirected;
use petgraph::graphmap::{Neighbors, UnGraphMap};
use thiserror::Error;

use super::COVERAGE_RADIUS;
use super::mathphysics::{Meter, Point2D, Position};
use super::node::{IdToNodeMap, Node, NodeId, NodeKind};


const FIRST_NODE_ID: NodeId = 1;


#[derive(Error, Debug)]
pub enum TopologyError {
    #[error("Node with id `{0}` is not present in the topology")]
    UnknownNode(NodeId),
}


/// The node registry and the undirected link set of the mesh.
///
/// Links are reconciled with node positions only on explicit
/// [`TopologyGraph::reconcile_links`] calls, so connectivity is eventually
/// consistent with geometry rather than continuously maintained. The edge
/// set is genuinely undirected: a link between two nodes is a single record,
/// and link symmetry holds by construction.
#[derive(Clone, Debug)]
pub struct TopologyGraph {
    node_map: IdToNodeMap,
    link_map: UnGraphMap<NodeId, ()>,
    coverage_radius: Meter,
    next_node_id: NodeId,
}

impl Default for TopologyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TopologyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::with_coverage_radius(COVERAGE_RADIUS)
    }

    #[must_use]
    pub fn with_coverage_radius(coverage_radius: Meter) -> Self {
        Self {
            node_map: IdToNodeMap::new(),
            link_map: UnGraphMap::new(),
            coverage_radius,
            next_node_id: FIRST_NODE_ID,
        }
    }

    #[must_use]
    pub fn coverage_radius(&self) -> Meter {
        self.coverage_radius
    }

    #[must_use]
    pub fn get(&self, node_id: NodeId) -> Option<&Node> {
        self.node_map.get(&node_id)
    }

    #[must_use]
    pub fn contains_node(&self, node_id: NodeId) -> bool {
        self.node_map.contains(&node_id)
    }

    #[must_use]
    pub fn nodes(&self) -> Values<'_, NodeId, Node> {
        self.node_map.nodes()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }

    #[must_use]
    pub fn neighbors(
        &self,
        node_id: NodeId
    ) -> Neighbors<'_, NodeId, Undirected> {
        self.link_map.neighbors(node_id)
    }

    #[must_use]
    pub fn are_linked(&self, a: NodeId, b: NodeId) -> bool {
        self.link_map.contains_edge(a, b)
    }

    #[must_use]
    pub fn links(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.link_map.all_edges().map(|(a, b, _)| (a, b))
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.link_map.edge_count()
    }

    /// Creates a node with no links and returns its id. Ids are sequential
    /// and never reused within one topology instance. The new node stays
    /// unlinked until the next [`TopologyGraph::reconcile_links`] call.
    pub fn add_node(&mut self, kind: NodeKind, position: Point2D) -> NodeId {
        let node_id = self.next_node_id;
        self.next_node_id += 1;

        self.node_map.insert(Node::new(node_id, kind, position));
        self.link_map.add_node(node_id);

        node_id
    }

    /// Removes the node and every link touching it.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `node_id` is not present in the topology.
    pub fn remove_node(
        &mut self,
        node_id: NodeId
    ) -> Result<Node, TopologyError> {
        let Some(node) = self.node_map.remove(&node_id) else {
            return Err(TopologyError::UnknownNode(node_id));
        };

        self.link_map.remove_node(node_id);

        debug_assert!(
            self.node_map
                .ids()
                .all(|other_id| !self.are_linked(*other_id, node_id)),
            "a removed node must not stay linked"
        );

        Ok(node)
    }

    /// Updates the node position without touching its links. The caller is
    /// expected to follow up with [`TopologyGraph::reconcile_links`].
    ///
    /// # Errors
    ///
    /// Will return `Err` if `node_id` is not present in the topology.
    pub fn move_node(
        &mut self,
        node_id: NodeId,
        position: Point2D
    ) -> Result<(), TopologyError> {
        let Some(node) = self.node_map.get_mut(&node_id) else {
            return Err(TopologyError::UnknownNode(node_id));
        };

        node.set_position(position);

        Ok(())
    }

    /// Reconciles the links of one node with current positions: every other
    /// node strictly closer than the coverage radius gets linked, every
    /// linked node at or beyond the radius gets unlinked. A node is never
    /// linked to itself.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `node_id` is not present in the topology.
    pub fn reconcile_links(
        &mut self,
        node_id: NodeId
    ) -> Result<(), TopologyError> {
        let Some(node) = self.node_map.get(&node_id) else {
            return Err(TopologyError::UnknownNode(node_id));
        };

        let mut new_links = Vec::new();
        let mut broken_links = Vec::new();

        for other_node in self.node_map.nodes() {
            let other_id = other_node.id();

            if other_id == node_id {
                continue;
            }

            let distance = node.distance_to(other_node);
            let linked = self.are_linked(node_id, other_id);

            if distance < self.coverage_radius && !linked {
                new_links.push(other_id);
            } else if distance >= self.coverage_radius && linked {
                broken_links.push(other_id);
            }
        }

        for other_id in new_links {
            self.link_map.add_edge(node_id, other_id, ());
        }
        for other_id in broken_links {
            self.link_map.remove_edge(node_id, other_id);
        }

        Ok(())
    }

    /// Removes the single link of every dead-end node not listed in
    /// `protected`, repeating until no such node remains, and returns the
    /// number of links removed.
    ///
    /// A node with exactly one link can never lie on a simple path between
    /// two other nodes, so pruning it does not change any planning result
    /// for the protected endpoints. Pruned links come back on the next
    /// reconciliation of either endpoint while the nodes are still in
    /// range.
    pub fn prune_dead_ends(&mut self, protected: &[NodeId]) -> usize {
        let mut removed_link_count = 0;

        loop {
            let dead_end_link = self.link_map
                .nodes()
                .filter(|node_id| !protected.contains(node_id))
                .find_map(|node_id| {
                    let mut neighbors = self.link_map.neighbors(node_id);
                    let neighbor = neighbors.next()?;

                    match neighbors.next() {
                        Some(_) => None,
                        None    => Some((node_id, neighbor)),
                    }
                });

            let Some((dead_end, neighbor)) = dead_end_link else {
                break;
            };

            self.link_map.remove_edge(dead_end, neighbor);
            removed_link_count += 1;
        }

        removed_link_count
    }
}
