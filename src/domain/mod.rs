// Domain layer: plain types and ports. Nothing here touches the DOM.

pub mod model;
pub mod ports;
