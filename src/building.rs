use std::collections::VecDeque;
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::elevator::car::{ElevatorKind, ElevatorStatus};
use crate::elevator::factory;
use crate::elevator::worker::{self, DispatchFault, ElevatorHandle};

/// A call that could not be assigned yet: destination floor plus the
/// passengers waiting for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorRequest {
    pub floor: u8,
    pub passengers: u32,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InitError {
    #[error("elevator count must be greater than zero")]
    NoElevators,
    #[error("maximum capacity must be greater than zero")]
    NoCapacity,
}

/// The building: its floors, one worker handle per elevator, and the
/// queue of calls waiting for a car with free capacity.
pub struct Building {
    floors: u8,
    cars: Vec<ElevatorHandle>,
    pending: VecDeque<FloorRequest>,
}

impl Building {
    /// Creates the building and spawns one worker per elevator.
    pub fn initialize(
        total_floors: u8,
        elevator_count: u8,
        max_capacity: u32,
        kind: ElevatorKind,
        step: Duration,
    ) -> Result<Building, InitError> {
        if elevator_count == 0 {
            return Err(InitError::NoElevators);
        }
        if max_capacity == 0 {
            return Err(InitError::NoCapacity);
        }

        let mut cars = Vec::with_capacity(usize::from(elevator_count));
        for id in 1..=elevator_count {
            let car = factory::build_elevator(id, kind, max_capacity);
            cars.push(worker::spawn(car, step));
            info!("elevator {} added to the building", id);
        }
        info!("building initialized with {} floors and {} elevators", total_floors, elevator_count);

        Ok(Building {
            floors: total_floors,
            cars,
            pending: VecDeque::new(),
        })
    }

    pub fn total_floors(&self) -> u8 {
        self.floors
    }

    pub fn handles(&self) -> &[ElevatorHandle] {
        &self.cars
    }

    /// Snapshots every car, in elevator order.
    pub fn statuses(&self) -> Result<Vec<ElevatorStatus>, DispatchFault> {
        self.cars.iter().map(|handle| handle.status()).collect()
    }

    pub fn enqueue_request(&mut self, request: FloorRequest) {
        self.pending.push_back(request);
    }

    pub fn pop_request(&mut self) -> Option<FloorRequest> {
        self.pending.pop_front()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Replaces an elevator's handle with one whose worker has exited,
    /// to exercise the dead-worker fault paths.
    #[cfg(test)]
    pub(crate) fn kill_elevator(&mut self, index: usize) {
        let id = self.cars[index].id();
        self.cars[index] = worker::dead_handle(id);
    }
}
