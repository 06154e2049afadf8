pub const NUM_FLOORS: u8 = 10;
pub const NUM_ELEVATORS: u8 = 4;
pub const ELEV_MAX_CAPACITY: u32 = 10;
pub const STEP_TIME_MS: u64 = 1000;
