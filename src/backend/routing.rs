use thiserror::Error;

use super::node::{NodeId, NodeKind};
use super::topology::TopologyGraph;


pub type RoutePath = Vec<NodeId>;


#[derive(Error, Debug)]
pub enum RouteError {
    #[error("No route between the given nodes was found")]
    NoPathFound,
    #[error("Node with id `{0}` is not present in the topology")]
    UnknownNode(NodeId),
}


/// Plans a route from `source` to `destination` over the current links.
///
/// Every simple path between the two nodes is enumerated by depth-first
/// traversal with backtracking, and the one visiting the fewest nodes wins.
/// Ties go to the first discovered path, which is stable across calls on an
/// unchanged topology but not otherwise specified. Towers are assumed to
/// have a direct backhaul: a path that reaches a tower continues only
/// towards a command center among its neighbors, never towards further
/// relays.
///
/// Planning never mutates the topology. Worst-case cost is exponential in
/// the node count, which is acceptable at the intended interactive scale of
/// tens of nodes.
///
/// # Errors
///
/// Will return `Err` if `source` or `destination` is not present in the
/// topology, or if no route between them exists.
pub fn plan_path(
    topology: &TopologyGraph,
    source: NodeId,
    destination: NodeId
) -> Result<RoutePath, RouteError> {
    if !topology.contains_node(source) {
        return Err(RouteError::UnknownNode(source));
    }
    if !topology.contains_node(destination) {
        return Err(RouteError::UnknownNode(destination));
    }

    let mut current_path = RoutePath::new();
    let mut found_paths = Vec::new();

    find_paths(
        topology,
        source,
        destination,
        &mut current_path,
        &mut found_paths
    );

    choose_best_path(found_paths).ok_or(RouteError::NoPathFound)
}

// Exhaustive depth-first enumeration of simple paths. `current_path` serves
// both as the visited set and as the path under construction; it is restored
// to its previous state before every return.
fn find_paths(
    topology: &TopologyGraph,
    current: NodeId,
    destination: NodeId,
    current_path: &mut RoutePath,
    found_paths: &mut Vec<RoutePath>
) {
    current_path.push(current);

    if current == destination {
        found_paths.push(current_path.clone());
        current_path.pop();
        return;
    }

    let at_tower = matches!(
        topology.get(current).map(|node| node.kind()),
        Some(NodeKind::Tower)
    );

    for neighbor_id in topology.neighbors(current) {
        if current_path.contains(&neighbor_id) {
            continue;
        }

        let Some(neighbor) = topology.get(neighbor_id) else {
            continue;
        };

        // Tower short-circuit: relaying onwards through other towers or
        // drones is never considered once a tower is reached.
        if at_tower && neighbor.kind() != NodeKind::CommandCenter {
            continue;
        }

        find_paths(
            topology,
            neighbor_id,
            destination,
            current_path,
            found_paths
        );
    }

    current_path.pop();
}

// Fewest nodes wins; `min_by_key` keeps the first of equally short paths.
fn choose_best_path(found_paths: Vec<RoutePath>) -> Option<RoutePath> {
    found_paths
        .into_iter()
        .min_by_key(Vec::len)
}
