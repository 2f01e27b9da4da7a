// Domain layer: records, verdicts and the ports the checker depends on.

pub mod model;
pub mod ports;
