// Interface adapters: host-facing data shapes (draw commands, pointer events, SVG).

pub mod pointer;
pub mod surface;
pub mod svg;
pub mod utils;
