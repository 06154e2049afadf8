use thiserror::Error;

use crate::elevator::car::ElevatorStatus;

/// Why a call was turned down. These are expected business-rule
/// failures, reported as values and never as panics.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    #[error("floor {floor} is out of range, valid range is 1 to {top}")]
    InvalidFloor { floor: u8, top: u8 },
    #[error("number of passengers must be greater than zero")]
    InvalidPassengerCount,
    #[error("no elevator has enough capacity for {0} passengers")]
    CapacityExceeded(u32),
}

pub type ValidationResult = Result<(), Rejection>;

/// Checks a call against the building, short-circuiting on the first
/// failure: floor range, then passenger count, then bank capacity.
/// Pure over the given snapshots.
pub fn validate_request(top_floor: u8, cars: &[ElevatorStatus], floor: u8, passengers: u32) -> ValidationResult {
    if floor < 1 || floor > top_floor {
        return Err(Rejection::InvalidFloor { floor, top: top_floor });
    }
    if passengers == 0 {
        return Err(Rejection::InvalidPassengerCount);
    }
    if !cars.iter().any(|car| car.fits(passengers)) {
        return Err(Rejection::CapacityExceeded(passengers));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::elevator::car::{Direction, ElevatorKind};

    fn car_status(id: u8, boarded: u32, capacity: u32) -> ElevatorStatus {
        ElevatorStatus {
            id,
            kind: ElevatorKind::Passenger,
            floor: 1,
            direction: Direction::Stationary,
            boarded,
            capacity,
            in_motion: false,
            stops: Vec::new(),
        }
    }

    #[test]
    fn it_rejects_a_floor_below_the_building() {
        let cars = [car_status(1, 0, 10)];
        assert_eq!(
            validate_request(10, &cars, 0, 5),
            Err(Rejection::InvalidFloor { floor: 0, top: 10 })
        );
    }

    #[test]
    fn it_rejects_a_floor_above_the_building() {
        let cars = [car_status(1, 0, 10)];
        assert_eq!(
            validate_request(10, &cars, 11, 5),
            Err(Rejection::InvalidFloor { floor: 11, top: 10 })
        );
    }

    #[test]
    fn it_rejects_a_call_without_passengers() {
        let cars = [car_status(1, 0, 10)];
        assert_eq!(validate_request(10, &cars, 5, 0), Err(Rejection::InvalidPassengerCount));
    }

    #[test]
    fn it_rejects_a_call_no_car_can_fit() {
        let cars = [car_status(1, 10, 10), car_status(2, 8, 10)];
        assert_eq!(validate_request(10, &cars, 5, 3), Err(Rejection::CapacityExceeded(3)));
    }

    #[test]
    fn it_rejects_a_passenger_count_that_would_overflow() {
        let cars = [car_status(1, 5, 10)];
        assert_eq!(
            validate_request(10, &cars, 5, u32::MAX),
            Err(Rejection::CapacityExceeded(u32::MAX))
        );
    }

    #[test]
    fn it_accepts_a_call_one_car_can_fit() {
        let cars = [car_status(1, 10, 10), car_status(2, 8, 10)];
        assert_eq!(validate_request(10, &cars, 5, 2), Ok(()));
    }

    #[test]
    fn it_checks_the_floor_before_the_passenger_count() {
        let cars = [car_status(1, 0, 10)];
        assert_eq!(
            validate_request(10, &cars, 0, 0),
            Err(Rejection::InvalidFloor { floor: 0, top: 10 })
        );
    }
}
