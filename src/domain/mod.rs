// Domain layer: resource models and ports to the cloud APIs. No SDK types here.

pub mod model;
pub mod ports;
