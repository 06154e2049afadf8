use std::env;
use std::io::{self, BufRead};
use std::path::Path;
use std::process;

use log::{error, warn};

use elevator_bank::building::Building;
use elevator_bank::dispatch::{assignment, coordinator, movement};
use elevator_bank::util::config::SimConfig;

fn main() {
    env_logger::init();

    // Config path from the command line, defaults otherwise
    let config = match env::args().nth(1) {
        Some(path) => match SimConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                error!("{}", err);
                process::exit(1);
            }
        },
        None => SimConfig::default(),
    };

    let mut building = match Building::initialize(
        config.total_floors,
        config.elevator_count,
        config.max_capacity,
        config.kind,
        config.step(),
    ) {
        Ok(building) => building,
        Err(err) => {
            error!("could not initialize building: {}", err);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        display_status(&building);

        let Some(floor_input) = prompt(&mut lines, "Enter floor to call elevator or 'exit' to quit:") else {
            break;
        };
        if floor_input.eq_ignore_ascii_case("exit") {
            break;
        }

        match floor_input.parse::<u8>() {
            Ok(floor) => {
                let Some(passenger_input) = prompt(&mut lines, "Enter number of passengers:") else {
                    break;
                };
                match passenger_input.parse::<u32>() {
                    Ok(passengers) => assignment::call_elevator(&mut building, floor, passengers),
                    Err(_) => warn!("could not parse passenger count '{}'", passenger_input),
                }
            }
            Err(_) => warn!("could not parse floor '{}'", floor_input),
        }

        movement::move_all(&building);
        coordinator::drain_pending(&mut building);
    }
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, message: &str) -> Option<String> {
    println!("{}", message);
    match lines.next()? {
        Ok(line) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

fn display_status(building: &Building) {
    match building.statuses() {
        Ok(statuses) if statuses.is_empty() => println!("No elevators are currently available."),
        Ok(statuses) => {
            println!("Elevator status:");
            for status in &statuses {
                println!("  {}", status);
            }
            println!();
        }
        Err(fault) => error!("could not read elevator statuses: {}", fault),
    }
}
