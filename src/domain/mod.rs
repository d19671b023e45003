// Domain layer: wire and view models plus the ports the store is written against.

pub mod model;
pub mod ports;
