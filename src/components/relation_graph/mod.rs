mod component;
mod render;
mod state;
mod types;

pub use component::RelationCanvas;
pub use state::{Property, RelationError, RelationState};
pub use types::{Edge, Node, NodeId};
