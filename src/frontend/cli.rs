use clap::{Arg, ArgMatches, Command};

use crate::backend::COVERAGE_RADIUS;
use crate::backend::mathphysics::Meter;

use super::examples;
use super::examples::SCENARIO_COUNT;


const ARG_COVERAGE_RADIUS: &str = "coverage radius";
const ARG_SCENARIO_NUMBER: &str = "scenario number";


pub fn cli() {
    let matches = Command::new("relay_network")
        .version("0.1.0")
        .about(
            "Simulates mesh relay networks and plans routes to the command \
            center."
        )
        .arg(
            Arg::new(ARG_SCENARIO_NUMBER)
                .short('s')
                .long("scenario")
                .value_parser(
                    clap::value_parser!(u8).range(1..=i64::from(SCENARIO_COUNT))
                )
                .help("Run a scenario by its number")
        )
        .arg(
            Arg::new(ARG_COVERAGE_RADIUS)
                .short('r')
                .long("radius")
                .value_parser(clap::value_parser!(Meter))
                .help("Set the link coverage radius")
        )
        .arg_required_else_help(true)
        .get_matches();

    handle_arguments(&matches);
}

fn handle_arguments(matches: &ArgMatches) {
    let coverage_radius = matches
        .get_one::<Meter>(ARG_COVERAGE_RADIUS)
        .copied()
        .unwrap_or(COVERAGE_RADIUS);

    let Some(scenario_number) = matches.get_one::<u8>(ARG_SCENARIO_NUMBER)
    else {
        return;
    };

    if let Err(error) = examples::run_scenario_by_number(
        *scenario_number,
        coverage_radius
    ) {
        eprintln!("Scenario failed: {error}");
    }
}
