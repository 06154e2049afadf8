use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Floor every elevator starts on.
pub const START_FLOOR: u8 = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElevatorKind {
    Passenger,
    Freight,
    HighSpeed,
    Glass,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Stationary,
}

/// A single elevator car. The car is owned exclusively by its worker
/// thread; everyone else sees it through `ElevatorStatus` snapshots.
#[derive(Clone, Debug)]
pub struct Elevator {
    id: u8,
    kind: ElevatorKind,
    current_floor: u8,
    max_capacity: u32,
    boarded: u32,
    in_motion: bool,
    direction: Direction,
    stops: VecDeque<u8>,
}

impl Elevator {
    pub fn new(id: u8, kind: ElevatorKind, max_capacity: u32) -> Elevator {
        Elevator {
            id,
            kind,
            current_floor: START_FLOOR,
            max_capacity,
            boarded: 0,
            in_motion: false,
            direction: Direction::Stationary,
            stops: VecDeque::new(),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    /// Queues a destination and boards the passengers waiting for it.
    /// A floor already in the queue is not queued twice; it can be
    /// queued again once it has been served.
    pub fn add_stop(&mut self, floor: u8, passengers: u32) {
        if !self.stops.contains(&floor) {
            self.stops.push_back(floor);
        }
        self.boarded = self.boarded.saturating_add(passengers);
        self.in_motion = true;
    }

    pub fn next_stop(&mut self) -> Option<u8> {
        self.stops.pop_front()
    }

    /// Moves one floor toward `target`, re-evaluating direction first.
    pub fn step_toward(&mut self, target: u8) {
        match self.current_floor.cmp(&target) {
            Ordering::Less => {
                self.direction = Direction::Up;
                self.current_floor += 1;
            }
            Ordering::Greater => {
                self.direction = Direction::Down;
                self.current_floor -= 1;
            }
            Ordering::Equal => {}
        }
    }

    /// Ends a run: the car goes stationary and its passengers disembark.
    pub fn finish_run(&mut self) {
        self.in_motion = false;
        self.direction = Direction::Stationary;
        self.boarded = 0;
    }

    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            id: self.id,
            kind: self.kind,
            floor: self.current_floor,
            direction: self.direction,
            boarded: self.boarded,
            capacity: self.max_capacity,
            in_motion: self.in_motion,
            stops: self.stops.iter().copied().collect(),
        }
    }
}

/// Point-in-time view of a car, used for validation, ranking and display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElevatorStatus {
    pub id: u8,
    pub kind: ElevatorKind,
    pub floor: u8,
    pub direction: Direction,
    pub boarded: u32,
    pub capacity: u32,
    pub in_motion: bool,
    pub stops: Vec<u8>,
}

impl ElevatorStatus {
    pub fn fits(&self, passengers: u32) -> bool {
        self.boarded
            .checked_add(passengers)
            .map_or(false, |total| total <= self.capacity)
    }
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "elevator {} ({:?}): floor {}, direction {:?}, passengers {}/{}, in motion: {}",
            self.id, self.kind, self.floor, self.direction, self.boarded, self.capacity, self.in_motion
        )
    }
}
