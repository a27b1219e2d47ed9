// Domain layer: menu models and ports (interfaces). Nothing here touches I/O.

pub mod model;
pub mod ports;
