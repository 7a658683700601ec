// Domain layer: models and ports. Nothing in here touches the filesystem or the console.

pub mod model;
pub mod ports;
