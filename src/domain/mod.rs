// Domain layer: report models and ports (rule capability, address source, config).

pub mod model;
pub mod ports;
