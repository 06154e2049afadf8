use log::{error, info, warn};

use crate::building::{Building, FloorRequest};
use crate::dispatch::validation;
use crate::elevator::car::{Direction, ElevatorStatus};
use crate::elevator::worker::ElevatorHandle;

/// Index of the best car for a call, or None when no car has capacity.
/// Candidates are ranked ascending by: already moving, distance to the
/// called floor, not stationary, passengers on board. Ties keep the
/// original elevator order.
pub fn best_candidate(cars: &[ElevatorStatus], floor: u8, passengers: u32) -> Option<usize> {
    cars.iter()
        .enumerate()
        .filter(|&(_, car)| car.fits(passengers))
        .min_by_key(|&(_, car)| rank(car, floor))
        .map(|(index, _)| index)
}

fn rank(car: &ElevatorStatus, floor: u8) -> (bool, u16, bool, u32) {
    (
        car.in_motion,
        distance(car.floor, floor),
        car.direction != Direction::Stationary,
        car.boarded,
    )
}

fn distance(a: u8, b: u8) -> u16 {
    (i16::from(a) - i16::from(b)).unsigned_abs()
}

/// Handles one call: validate it, then either queue the stop on the best
/// car or park the request in the pending queue. Rejected calls are
/// logged and dropped. A car whose worker died is skipped; the rest of
/// the bank keeps serving calls. Movement is started separately by
/// `move_all`.
pub fn call_elevator(building: &mut Building, floor: u8, passengers: u32) {
    // Snapshot the live cars, remembering each one's handle index.
    let mut live: Vec<(usize, ElevatorStatus)> = Vec::with_capacity(building.handles().len());
    for (index, handle) in building.handles().iter().enumerate() {
        match handle.status() {
            Ok(status) => live.push((index, status)),
            Err(fault) => error!("skipping elevator {}: {}", handle.id(), fault),
        }
    }
    let statuses: Vec<ElevatorStatus> = live.iter().map(|(_, status)| status.clone()).collect();

    if let Err(rejection) = validation::validate_request(building.total_floors(), &statuses, floor, passengers) {
        warn!("call for floor {} rejected: {}", floor, rejection);
        return;
    }

    match best_candidate(&statuses, floor, passengers) {
        Some(position) => {
            let handle = building.handles()[live[position].0].clone();
            assign_or_requeue(building, &handle, floor, passengers);
        }
        None => {
            info!("no elevator available for floor {}, request queued", floor);
            building.enqueue_request(FloorRequest { floor, passengers });
        }
    }
}

/// Queues the stop on the chosen car. If its worker died since the
/// snapshot was taken, the call is parked for a later drain instead of
/// being lost.
fn assign_or_requeue(building: &mut Building, handle: &ElevatorHandle, floor: u8, passengers: u32) {
    match handle.add_stop(floor, passengers) {
        Ok(()) => info!(
            "assigned elevator {} to floor {} for {} passengers",
            handle.id(),
            floor,
            passengers
        ),
        Err(fault) => {
            error!("could not assign elevator {}: {}", handle.id(), fault);
            building.enqueue_request(FloorRequest { floor, passengers });
        }
    }
}
