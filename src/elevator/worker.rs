use std::thread;
use std::time::Duration;

use crossbeam_channel as cbc;
use log::info;
use thiserror::Error;

use crate::elevator::car::{Elevator, ElevatorStatus};

/// Commands accepted by a car's worker thread. The worker is the only
/// place the car's state is mutated.
#[derive(Debug)]
pub enum Command {
    /// Queue a destination floor and board its passengers.
    AddStop { floor: u8, passengers: u32 },
    /// Serve every queued destination, then report the car id on `done`.
    Run { done: cbc::Sender<u8> },
    /// Reply with a snapshot of the car.
    Report { reply: cbc::Sender<ElevatorStatus> },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DispatchFault {
    #[error("elevator {0} worker is no longer running")]
    WorkerGone(u8),
}

/// Channel-backed handle to one car's worker thread.
#[derive(Clone, Debug)]
pub struct ElevatorHandle {
    id: u8,
    cmd_tx: cbc::Sender<Command>,
}

impl ElevatorHandle {
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn add_stop(&self, floor: u8, passengers: u32) -> Result<(), DispatchFault> {
        self.cmd_tx
            .send(Command::AddStop { floor, passengers })
            .map_err(|_| DispatchFault::WorkerGone(self.id))
    }

    pub fn start_run(&self, done: cbc::Sender<u8>) -> Result<(), DispatchFault> {
        self.cmd_tx
            .send(Command::Run { done })
            .map_err(|_| DispatchFault::WorkerGone(self.id))
    }

    pub fn status(&self) -> Result<ElevatorStatus, DispatchFault> {
        let (reply_tx, reply_rx) = cbc::bounded::<ElevatorStatus>(1);
        self.cmd_tx
            .send(Command::Report { reply: reply_tx })
            .map_err(|_| DispatchFault::WorkerGone(self.id))?;
        reply_rx.recv().map_err(|_| DispatchFault::WorkerGone(self.id))
    }
}

/// Spawns the worker thread that owns `car`. The thread exits once every
/// handle to it has been dropped.
/// Handle to a worker that has already exited, for exercising the
/// dead-worker fault paths.
#[cfg(test)]
pub(crate) fn dead_handle(id: u8) -> ElevatorHandle {
    let (cmd_tx, cmd_rx) = cbc::unbounded::<Command>();
    drop(cmd_rx);
    ElevatorHandle { id, cmd_tx }
}

pub fn spawn(car: Elevator, step: Duration) -> ElevatorHandle {
    let (cmd_tx, cmd_rx) = cbc::unbounded::<Command>();
    let id = car.id();
    thread::spawn(move || run_worker(car, cmd_rx, step));
    ElevatorHandle { id, cmd_tx }
}

fn run_worker(mut car: Elevator, cmd_rx: cbc::Receiver<Command>, step: Duration) {
    for cmd in cmd_rx.iter() {
        match cmd {
            Command::AddStop { floor, passengers } => car.add_stop(floor, passengers),
            Command::Report { reply } => {
                let _ = reply.send(car.status());
            }
            Command::Run { done } => {
                drive_to_completion(&mut car, step);
                let _ = done.send(car.id());
            }
        }
    }
}

enum Motion {
    Idle,
    Transiting { target: u8 },
    ArrivedAtStop { floor: u8 },
}

/// Serves the destination queue one floor per step until it is empty.
/// Not interruptible: stops queued while a run is in progress are
/// handled by the next run.
fn drive_to_completion(car: &mut Elevator, step: Duration) {
    let mut state = Motion::Idle;
    loop {
        state = match state {
            Motion::Idle => match car.next_stop() {
                Some(target) => {
                    info!(
                        "elevator {} heading from floor {} to floor {}",
                        car.id(),
                        car.current_floor(),
                        target
                    );
                    Motion::Transiting { target }
                }
                None => {
                    car.finish_run();
                    info!("elevator {} is idle at floor {}", car.id(), car.current_floor());
                    return;
                }
            },
            Motion::Transiting { target } if car.current_floor() == target => {
                Motion::ArrivedAtStop { floor: target }
            }
            Motion::Transiting { target } => {
                car.step_toward(target);
                info!("elevator {} is now at floor {}", car.id(), car.current_floor());
                thread::sleep(step);
                Motion::Transiting { target }
            }
            Motion::ArrivedAtStop { floor } => {
                info!("elevator {} reached destination floor {}", car.id(), floor);
                Motion::Idle
            }
        };
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::elevator::car::{Direction, ElevatorKind};

    fn spawn_test_car(id: u8, capacity: u32) -> ElevatorHandle {
        let car = Elevator::new(id, ElevatorKind::Passenger, capacity);
        spawn(car, Duration::from_millis(0))
    }

    #[test]
    fn it_runs_to_the_queued_floor() {
        let handle = spawn_test_car(1, 10);
        handle.add_stop(5, 2).unwrap();

        let (done_tx, done_rx) = cbc::unbounded::<u8>();
        handle.start_run(done_tx).unwrap();
        assert_eq!(done_rx.recv(), Ok(1));

        let status = handle.status().unwrap();
        assert_eq!(status.floor, 5);
        assert!(status.stops.is_empty());
        assert!(!status.in_motion);
        assert_eq!(status.direction, Direction::Stationary);
    }

    #[test]
    fn it_serves_stops_in_call_order() {
        let handle = spawn_test_car(1, 10);
        handle.add_stop(4, 1).unwrap();
        handle.add_stop(2, 1).unwrap();

        let (done_tx, done_rx) = cbc::unbounded::<u8>();
        handle.start_run(done_tx).unwrap();
        done_rx.recv().unwrap();

        assert_eq!(handle.status().unwrap().floor, 2);
    }

    #[test]
    fn it_ignores_duplicate_stops() {
        let handle = spawn_test_car(1, 10);
        handle.add_stop(3, 1).unwrap();
        handle.add_stop(3, 1).unwrap();
        assert_eq!(handle.status().unwrap().stops, vec![3]);
    }

    #[test]
    fn it_is_marked_in_motion_once_assigned() {
        let handle = spawn_test_car(1, 10);
        handle.add_stop(4, 3).unwrap();
        let status = handle.status().unwrap();
        assert!(status.in_motion);
        assert_eq!(status.boarded, 3);
    }

    #[test]
    fn it_reports_a_dead_worker_as_a_fault() {
        let handle = dead_handle(7);
        assert_eq!(handle.add_stop(3, 1), Err(DispatchFault::WorkerGone(7)));
        assert_eq!(handle.status(), Err(DispatchFault::WorkerGone(7)));
        let (done_tx, _done_rx) = cbc::unbounded::<u8>();
        assert_eq!(handle.start_run(done_tx), Err(DispatchFault::WorkerGone(7)));
    }

    #[test]
    fn it_serves_a_call_for_the_current_floor_without_moving() {
        let handle = spawn_test_car(1, 10);
        handle.add_stop(1, 1).unwrap();

        let (done_tx, done_rx) = cbc::unbounded::<u8>();
        handle.start_run(done_tx).unwrap();
        done_rx.recv().unwrap();

        let status = handle.status().unwrap();
        assert_eq!(status.floor, 1);
        assert!(status.stops.is_empty());
        assert!(!status.in_motion);
    }
}
