use log::{info, trace};
use rand::prelude::*;
use thiserror::Error;

use crate::backend::mathphysics::{Meter, Point2D, Position};
use crate::backend::node::{Node, NodeId, NodeKind};
use crate::backend::routing::{RouteError, plan_path};
use crate::backend::topology::{TopologyError, TopologyGraph};

use super::report::route_description;


pub const SCENARIO_COUNT: u8 = 6;

const SCATTERED_DRONE_COUNT: usize = 12;


#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Topology operation failed with error `{0}`")]
    Topology(#[from] TopologyError),
    #[error("Route planning failed with error `{0}`")]
    Routing(#[from] RouteError),
    #[error("Unknown scenario number `{0}`")]
    UnknownScenario(u8),
}


/// # Errors
///
/// Will return `Err` if the scenario number is unknown or a scenario
/// operation fails on a valid topology.
pub fn run_scenario_by_number(
    scenario_number: u8,
    coverage_radius: Meter
) -> Result<(), ScenarioError> {
    match scenario_number {
        1 => relay_line(coverage_radius),
        2 => isolated_drone(coverage_radius),
        3 => tower_backhaul(coverage_radius),
        4 => twin_routes(coverage_radius),
        5 => roaming_drone(coverage_radius),
        6 => scattered_mesh(coverage_radius),
        _ => Err(ScenarioError::UnknownScenario(scenario_number)),
    }
}

fn add_and_reconcile(
    topology: &mut TopologyGraph,
    kind: NodeKind,
    position: Point2D
) -> Result<NodeId, TopologyError> {
    let node_id = topology.add_node(kind, position);

    topology.reconcile_links(node_id)?;

    trace!(
        "Placed {} {} at ({}, {})",
        kind,
        node_id,
        position.x,
        position.y
    );

    Ok(node_id)
}

fn plan_and_report(
    topology: &TopologyGraph,
    source: NodeId,
    destination: NodeId
) -> Result<(), ScenarioError> {
    info!(
        "Planning a route from node {} to node {} over {} links",
        source,
        destination,
        topology.link_count()
    );

    match plan_path(topology, source, destination) {
        Ok(route) => {
            info!("Found a route visiting {} nodes", route.len());

            println!("{}", route_description(topology, &route));
        },
        Err(RouteError::NoPathFound) => {
            println!("No route to the command center was found.");
        },
        Err(error) => return Err(error.into()),
    }

    Ok(())
}

// Two drones relay to the command center along a line; the first drone is
// out of direct range.
fn relay_line(coverage_radius: Meter) -> Result<(), ScenarioError> {
    info!("Scenario 1: relay line");

    let spacing = coverage_radius * 0.7;

    let mut topology = TopologyGraph::with_coverage_radius(coverage_radius);

    let drone1_id = add_and_reconcile(
        &mut topology,
        NodeKind::Drone,
        Point2D::new(0.0, 0.0)
    )?;
    let _drone2_id = add_and_reconcile(
        &mut topology,
        NodeKind::Drone,
        Point2D::new(spacing, 0.0)
    )?;
    let cc_id = add_and_reconcile(
        &mut topology,
        NodeKind::CommandCenter,
        Point2D::new(spacing * 2.0, 0.0)
    )?;

    plan_and_report(&topology, drone1_id, cc_id)
}

// A single drone with no neighbors has no route anywhere.
fn isolated_drone(coverage_radius: Meter) -> Result<(), ScenarioError> {
    info!("Scenario 2: isolated drone");

    let mut topology = TopologyGraph::with_coverage_radius(coverage_radius);

    let drone_id = add_and_reconcile(
        &mut topology,
        NodeKind::Drone,
        Point2D::new(0.0, 0.0)
    )?;
    let cc_id = add_and_reconcile(
        &mut topology,
        NodeKind::CommandCenter,
        Point2D::new(coverage_radius * 3.0, coverage_radius * 3.0)
    )?;

    plan_and_report(&topology, drone_id, cc_id)
}

// A tower with a command center backhaul never relays through its second
// tower neighbor.
fn tower_backhaul(coverage_radius: Meter) -> Result<(), ScenarioError> {
    info!("Scenario 3: tower backhaul");

    let spacing = coverage_radius * 0.7;

    let mut topology = TopologyGraph::with_coverage_radius(coverage_radius);

    let drone_id = add_and_reconcile(
        &mut topology,
        NodeKind::Drone,
        Point2D::new(0.0, 0.0)
    )?;
    let _tower1_id = add_and_reconcile(
        &mut topology,
        NodeKind::Tower,
        Point2D::new(spacing, 0.0)
    )?;
    let _tower2_id = add_and_reconcile(
        &mut topology,
        NodeKind::Tower,
        Point2D::new(spacing, -coverage_radius * 0.8)
    )?;
    let cc_id = add_and_reconcile(
        &mut topology,
        NodeKind::CommandCenter,
        Point2D::new(spacing * 2.0, 0.0)
    )?;

    plan_and_report(&topology, drone_id, cc_id)
}

// Two disjoint routes reach the command center; the two-hop one wins over
// the three-hop one.
fn twin_routes(coverage_radius: Meter) -> Result<(), ScenarioError> {
    info!("Scenario 4: twin routes");

    let scale = coverage_radius / 8.0;

    let mut topology = TopologyGraph::with_coverage_radius(coverage_radius);

    let drone1_id = add_and_reconcile(
        &mut topology,
        NodeKind::Drone,
        Point2D::new(0.0, 0.0)
    )?;
    let _drone2_id = add_and_reconcile(
        &mut topology,
        NodeKind::Drone,
        Point2D::new(7.0 * scale, 1.0 * scale)
    )?;
    let _drone3_id = add_and_reconcile(
        &mut topology,
        NodeKind::Drone,
        Point2D::new(3.0 * scale, -7.0 * scale)
    )?;
    let _drone4_id = add_and_reconcile(
        &mut topology,
        NodeKind::Drone,
        Point2D::new(10.0 * scale, -7.0 * scale)
    )?;
    let cc_id = add_and_reconcile(
        &mut topology,
        NodeKind::CommandCenter,
        Point2D::new(13.0 * scale, -1.0 * scale)
    )?;

    plan_and_report(&topology, drone1_id, cc_id)
}

// A drone roams out of tower coverage and back; each reconciliation flips
// its route availability.
fn roaming_drone(coverage_radius: Meter) -> Result<(), ScenarioError> {
    info!("Scenario 5: roaming drone");

    let spacing = coverage_radius * 0.7;

    let mut topology = TopologyGraph::with_coverage_radius(coverage_radius);

    let drone_id = add_and_reconcile(
        &mut topology,
        NodeKind::Drone,
        Point2D::new(-spacing, 0.0)
    )?;
    let _tower_id = add_and_reconcile(
        &mut topology,
        NodeKind::Tower,
        Point2D::new(0.0, 0.0)
    )?;
    let cc_id = add_and_reconcile(
        &mut topology,
        NodeKind::CommandCenter,
        Point2D::new(spacing, 0.0)
    )?;

    plan_and_report(&topology, drone_id, cc_id)?;

    info!("Drone {} roams out of coverage", drone_id);

    topology.move_node(drone_id, Point2D::new(-coverage_radius * 3.0, 0.0))?;
    topology.reconcile_links(drone_id)?;

    plan_and_report(&topology, drone_id, cc_id)?;

    info!("Drone {} returns into coverage", drone_id);

    topology.move_node(drone_id, Point2D::new(-spacing, 0.0))?;
    topology.reconcile_links(drone_id)?;

    plan_and_report(&topology, drone_id, cc_id)
}

// Drones scattered uniformly around a central command center, with dead
// ends pruned before planning from the farthest drone.
fn scattered_mesh(coverage_radius: Meter) -> Result<(), ScenarioError> {
    info!("Scenario 6: scattered mesh");

    let area_side = coverage_radius * 4.0;

    let mut rng = rand::rng();
    let mut topology = TopologyGraph::with_coverage_radius(coverage_radius);

    let cc_id = add_and_reconcile(
        &mut topology,
        NodeKind::CommandCenter,
        Point2D::new(area_side / 2.0, area_side / 2.0)
    )?;

    let _tower_id = add_and_reconcile(
        &mut topology,
        NodeKind::Tower,
        Point2D::new(area_side / 2.0, area_side / 4.0)
    )?;

    for _ in 0..SCATTERED_DRONE_COUNT {
        let position = Point2D::new(
            rng.random_range(0.0..area_side),
            rng.random_range(0.0..area_side)
        );

        add_and_reconcile(&mut topology, NodeKind::Drone, position)?;
    }

    let Some(source_id) = farthest_drone_from(&topology, cc_id) else {
        return Ok(());
    };

    let pruned_link_count = topology.prune_dead_ends(&[source_id, cc_id]);

    info!("Pruned {} dead-end links before planning", pruned_link_count);

    plan_and_report(&topology, source_id, cc_id)
}

fn farthest_drone_from(
    topology: &TopologyGraph,
    node_id: NodeId
) -> Option<NodeId> {
    let reference_node = topology.get(node_id)?;

    topology
        .nodes()
        .filter(|node| matches!(node.kind(), NodeKind::Drone))
        .max_by(|a, b| a.cmp_by_distance_to(*b, reference_node))
        .map(Node::id)
}
