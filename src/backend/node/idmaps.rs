use std::collections::HashMap;
use std::collections::hash_map::{Iter, Keys, Values, ValuesMut};

use super::{Node, NodeId};


#[derive(Clone, Debug, Default)]
pub struct IdToNodeMap(HashMap<NodeId, Node>);

impl IdToNodeMap {
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    #[must_use]
    pub fn get(&self, node_id: &NodeId) -> Option<&Node> {
        self.0.get(node_id)
    }

    #[must_use]
    pub fn get_mut(&mut self, node_id: &NodeId) -> Option<&mut Node> {
        self.0.get_mut(node_id)
    }

    #[must_use]
    pub fn contains(&self, node_id: &NodeId) -> bool {
        self.0.contains_key(node_id)
    }

    #[must_use]
    pub fn ids(&self) -> Keys<'_, NodeId, Node> {
        self.0.keys()
    }

    #[must_use]
    pub fn nodes(&self) -> Values<'_, NodeId, Node> {
        self.0.values()
    }

    #[must_use]
    pub fn nodes_mut(&mut self) -> ValuesMut<'_, NodeId, Node> {
        self.0.values_mut()
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, NodeId, Node> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, node: Node) -> Option<Node> {
        self.0.insert(node.id(), node)
    }

    #[must_use]
    pub fn remove(&mut self, node_id: &NodeId) -> Option<Node> {
        self.0.remove(node_id)
    }
}

impl<'a> IntoIterator for &'a IdToNodeMap {
    type Item = (&'a NodeId, &'a Node);
    type IntoIter = Iter<'a, NodeId, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const N: usize> From<[Node; N]> for IdToNodeMap {
    fn from(nodes: [Node; N]) -> Self {
        let hash_map = nodes
            .iter()
            .map(|node| (node.id(), node.clone()))
            .collect();

        Self(hash_map)
    }
}


#[cfg(test)]
mod tests {
    use crate::backend::mathphysics::Point2D;
    use crate::backend::node::NodeKind;

    use super::*;

    fn drone_at_origin(id: NodeId) -> Node {
        Node::new(id, NodeKind::Drone, Point2D::default())
    }


    #[test]
    fn insert_and_lookup() {
        let mut node_map = IdToNodeMap::new();

        assert!(node_map.is_empty());

        node_map.insert(drone_at_origin(1));
        node_map.insert(drone_at_origin(2));

        assert_eq!(2, node_map.len());
        assert!(node_map.contains(&1));
        assert!(node_map.get(&3).is_none());
    }

    #[test]
    fn removal() {
        let mut node_map = IdToNodeMap::from([
            drone_at_origin(1),
            drone_at_origin(2)
        ]);

        let removed_node = node_map.remove(&1);

        assert!(removed_node.is_some());
        assert_eq!(1, removed_node.unwrap().id());
        assert!(!node_map.contains(&1));
        assert!(node_map.remove(&1).is_none());
    }
}
