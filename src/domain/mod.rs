// Domain layer: API entities, query parameters and the transport port.

pub mod item;
pub mod params;
pub mod ports;
