use crossbeam_channel as cbc;
use log::error;

use crate::building::Building;

/// Starts a run on every car with queued stops and waits for all of them
/// to serve their whole destination queue. There is no cancellation:
/// once started, a run completes. A car whose worker died is skipped so
/// the barrier cannot hang.
pub fn move_all(building: &Building) {
    let (done_tx, done_rx) = cbc::unbounded::<u8>();
    let mut dispatched = 0;

    for handle in building.handles() {
        match handle.status() {
            Ok(status) if !status.stops.is_empty() => match handle.start_run(done_tx.clone()) {
                Ok(()) => dispatched += 1,
                Err(fault) => error!("could not start elevator {}: {}", handle.id(), fault),
            },
            Ok(_) => {}
            Err(fault) => error!("skipping elevator {}: {}", handle.id(), fault),
        }
    }

    // Every live worker holds a clone of done_tx until its run ends, so
    // recv errors out instead of blocking if one of them dies mid-run.
    drop(done_tx);
    for _ in 0..dispatched {
        if done_rx.recv().is_err() {
            error!("an elevator stopped before finishing its run");
            break;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    use crate::dispatch::assignment;
    use crate::elevator::car::{Direction, ElevatorKind};

    fn test_building(elevators: u8) -> Building {
        Building::initialize(10, elevators, 10, ElevatorKind::Passenger, Duration::from_millis(0)).unwrap()
    }

    #[test]
    fn it_moves_a_car_to_its_destination() {
        let mut building = test_building(1);
        assignment::call_elevator(&mut building, 5, 2);
        move_all(&building);

        let status = &building.statuses().unwrap()[0];
        assert_eq!(status.floor, 5);
        assert!(status.stops.is_empty());
        assert!(!status.in_motion);
        assert_eq!(status.direction, Direction::Stationary);
    }

    #[test]
    fn it_moves_every_busy_car() {
        let building = test_building(2);
        building.handles()[0].add_stop(4, 1).unwrap();
        building.handles()[1].add_stop(7, 1).unwrap();
        move_all(&building);

        let statuses = building.statuses().unwrap();
        assert_eq!(statuses[0].floor, 4);
        assert_eq!(statuses[1].floor, 7);
    }

    #[test]
    fn it_returns_immediately_when_no_car_is_busy() {
        let building = test_building(3);
        move_all(&building);
        assert!(building.statuses().unwrap().iter().all(|status| status.floor == 1));
    }

    #[test]
    fn it_returns_when_a_worker_has_died() {
        let mut building = test_building(2);
        building.handles()[1].add_stop(6, 1).unwrap();
        building.kill_elevator(0);
        move_all(&building);

        let status = building.handles()[1].status().unwrap();
        assert_eq!(status.floor, 6);
        assert!(status.stops.is_empty());
    }

    #[test]
    fn it_leaves_idle_cars_alone() {
        let building = test_building(2);
        building.handles()[1].add_stop(6, 1).unwrap();
        move_all(&building);

        let statuses = building.statuses().unwrap();
        assert_eq!(statuses[0].floor, 1);
        assert_eq!(statuses[1].floor, 6);
    }
}
