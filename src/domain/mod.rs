// Domain layer: record layout, extraction results and ports. No I/O in here.

pub mod model;
pub mod ports;
