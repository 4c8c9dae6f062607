// Domain layer: model contract, the closed model union and the registry port.

pub mod model;
pub mod ports;
