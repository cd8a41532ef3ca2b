use mathphysics::Meter;


pub mod mathphysics;
pub mod node;
pub mod routing;
pub mod topology;


/// Maximum distance at which two nodes may hold a link, applied uniformly
/// regardless of node kind.
pub const COVERAGE_RADIUS: Meter = 100.0;
