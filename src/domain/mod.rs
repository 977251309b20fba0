// Domain layer: the address value object and the port it satisfies.

pub mod model;
pub mod ports;
