// Domain layer: activity records and the store port. No HTTP or config concerns here.

pub mod model;
pub mod ports;
