use crate::backend::node::NodeKind;
use crate::backend::routing::RoutePath;
use crate::backend::topology::TopologyGraph;


/// Renders a planned route as the multi-line text shown to the operator,
/// one hop per line.
#[must_use]
pub fn route_description(
    topology: &TopologyGraph,
    route: &RoutePath
) -> String {
    let mut description = String::new();

    for (hop, node_id) in route.iter().enumerate() {
        let Some(node) = topology.get(*node_id) else {
            continue;
        };

        let entry = if hop == 0 {
            format!("Starting route at: {} {}\n", node.kind(), node.id())
        } else if let NodeKind::CommandCenter = node.kind() {
            // The command center is unique, so it goes unnumbered.
            format!("routing to: {}\n", node.kind())
        } else {
            format!("routing to: {} {}\n", node.kind(), node.id())
        };

        description.push_str(&entry);
    }

    description.push_str("Route Complete!");

    description
}


#[cfg(test)]
mod tests {
    use crate::backend::mathphysics::Point2D;

    use super::*;

    #[test]
    fn describing_a_relay_route() {
        let mut topology = TopologyGraph::with_coverage_radius(10.0);

        let drone_id = topology.add_node(
            NodeKind::Drone,
            Point2D::new(0.0, 0.0)
        );
        let tower_id = topology.add_node(
            NodeKind::Tower,
            Point2D::new(7.0, 0.0)
        );
        let cc_id = topology.add_node(
            NodeKind::CommandCenter,
            Point2D::new(14.0, 0.0)
        );

        let route = vec![drone_id, tower_id, cc_id];

        let expected_description = format!(
            "Starting route at: drone {drone_id}\n\
            routing to: tower {tower_id}\n\
            routing to: command center\n\
            Route Complete!"
        );

        assert_eq!(
            expected_description,
            route_description(&topology, &route)
        );
    }

    #[test]
    fn describing_a_single_node_route() {
        let mut topology = TopologyGraph::with_coverage_radius(10.0);

        let drone_id = topology.add_node(
            NodeKind::Drone,
            Point2D::new(0.0, 0.0)
        );

        let description = route_description(&topology, &vec![drone_id]);

        assert_eq!(
            format!("Starting route at: drone {drone_id}\nRoute Complete!"),
            description
        );
    }
}
