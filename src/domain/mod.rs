// Domain layer: models and ports. Nothing here touches HTTP or the filesystem.

pub mod model;
pub mod ports;
