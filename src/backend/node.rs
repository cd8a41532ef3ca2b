use std::fmt;

use super::mathphysics::{Point2D, Position};

pub use idmaps::IdToNodeMap;


pub mod idmaps;


pub type NodeId = usize;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    Drone,
    Tower,
    CommandCenter,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Drone         => "drone",
            Self::Tower         => "tower",
            Self::CommandCenter => "command center",
        };

        write!(f, "{name}")
    }
}


/// A participant of the mesh: a mobile relay drone, a fixed relay tower or
/// the command center. Link state is not stored here; the topology graph is
/// the single source of truth for connectivity.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    position: Point2D,
}

impl Node {
    #[must_use]
    pub fn new(id: NodeId, kind: NodeKind, position: Point2D) -> Self {
        Self { id, kind, position }
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn set_position(&mut self, position: Point2D) {
        self.position = position;
    }
}

impl Position for Node {
    fn position(&self) -> &Point2D {
        &self.position
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_kind_names() {
        assert_eq!("drone", NodeKind::Drone.to_string());
        assert_eq!("tower", NodeKind::Tower.to_string());
        assert_eq!("command center", NodeKind::CommandCenter.to_string());
    }

    #[test]
    fn distance_between_nodes() {
        let drone = Node::new(1, NodeKind::Drone, Point2D::new(0.0, 0.0));
        let tower = Node::new(2, NodeKind::Tower, Point2D::new(6.0, 8.0));

        assert_eq!(10.0, drone.distance_to(&tower));
        assert_eq!(drone.distance_to(&tower), tower.distance_to(&drone));
    }

    #[test]
    fn moving_a_node() {
        let mut drone = Node::new(1, NodeKind::Drone, Point2D::new(0.0, 0.0));

        drone.set_position(Point2D::new(3.0, 4.0));

        assert_eq!(*drone.position(), Point2D::new(3.0, 4.0));
    }
}
