pub mod elevator {
    pub mod car;
    pub mod factory;
    pub mod worker;
}

pub mod dispatch {
    pub mod assignment;
    pub mod coordinator;
    pub mod movement;
    pub mod validation;
}

pub mod building;

pub mod util {
    pub mod config;
    pub mod constants;
}
