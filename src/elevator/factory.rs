use crate::elevator::car::{Elevator, ElevatorKind};

/// Builds a car of the requested kind. The kind is behaviorally inert
/// for now but part of the car's identity.
pub fn build_elevator(id: u8, kind: ElevatorKind, max_capacity: u32) -> Elevator {
    match kind {
        ElevatorKind::Passenger => Elevator::new(id, ElevatorKind::Passenger, max_capacity),
        ElevatorKind::Freight => Elevator::new(id, ElevatorKind::Freight, max_capacity),
        ElevatorKind::HighSpeed => Elevator::new(id, ElevatorKind::HighSpeed, max_capacity),
        ElevatorKind::Glass => Elevator::new(id, ElevatorKind::Glass, max_capacity),
    }
}
