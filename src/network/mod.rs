//! Drug-target network: bipartite graph construction, force layout, styling
//! and rasterization.

mod graph;
mod layout;
mod render;
mod scene;
pub mod style;

pub use graph::{EdgeAttrs, NetworkEdge, NetworkGraph, NetworkNode, NodeKind};
pub use layout::{Layout, LayoutOptions, LayoutParams};
pub use render::{build_network_scene, paint, render_network};
pub use scene::{NetworkScene, SceneEdge, SceneNode};
