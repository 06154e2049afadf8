use log::info;

use crate::building::Building;
use crate::dispatch::assignment;

/// Retries every pending request exactly once by resubmitting it through
/// the assignment path. A retry may park a fresh request at the back of
/// the queue; the loop is bounded so each request is attempted once per
/// drain.
pub fn drain_pending(building: &mut Building) {
    let attempts = building.pending_len();
    for _ in 0..attempts {
        let Some(request) = building.pop_request() else {
            break;
        };
        info!(
            "retrying request for floor {} with {} passengers",
            request.floor, request.passengers
        );
        assignment::call_elevator(building, request.floor, request.passengers);
    }
}
