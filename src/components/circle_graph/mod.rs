//! Circular graph rendering: parse a spec string, place vertices on a
//! circle, paint the result to a canvas every frame.

mod component;
mod error;
mod layout;
mod parse;
mod render;
mod types;

pub use component::CircleGraphCanvas;
pub use error::GraphError;
pub use layout::{circular_layout, edge_endpoints};
pub use parse::parse;
pub use types::{Edge, EdgeStyler, GraphStyle, ParsedGraph, Point};
