use super::graph::{NetworkGraph, NodeKind};
use super::layout::Layout;
use super::style::{EdgeStyle, NodeStyle, edge_style, node_style};
use crate::raster::CanvasSize;

/// Horizontal room kept for labels that overhang the outermost nodes.
const LABEL_MARGIN_MAX: f64 = 90.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneEdge {
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub style: EdgeStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
	pub center: (f64, f64),
	pub label: String,
	pub kind: NodeKind,
	pub style: NodeStyle,
}

/// Everything needed to paint a network: positioned, styled primitives in
/// canvas pixels. Edges come first so nodes are drawn over them.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkScene {
	pub size: CanvasSize,
	pub edges: Vec<SceneEdge>,
	pub nodes: Vec<SceneNode>,
}

impl NetworkScene {
	pub fn build(graph: &NetworkGraph, layout: &Layout, size: CanvasSize) -> Self {
		let margin = (size.width_f64() / 8.0).clamp(super::style::NODE_RADIUS * 2.0, LABEL_MARGIN_MAX);
		let points = layout.fit(size, margin);
		let at = |idx: usize| points.get(idx).copied().unwrap_or((0.0, 0.0));

		let edges = graph
			.edges()
			.map(|edge| SceneEdge {
				from: at(edge.drug),
				to: at(edge.target),
				style: edge_style(&edge.attrs),
			})
			.collect();

		let nodes = graph
			.nodes()
			.enumerate()
			.map(|(idx, node)| SceneNode {
				center: at(idx),
				style: node_style(node.kind),
				kind: node.kind,
				label: node.label,
			})
			.collect();

		Self { size, edges, nodes }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::layout::LayoutParams;
	use crate::network::style::{NOVEL_EDGE_COLOR, VALIDATED_EDGE_COLOR};
	use crate::predictions::PredictionRow;

	#[test]
	fn scene_mirrors_graph() {
		let rows = [
			PredictionRow::new("D1", "Aspirin", "X1", "Fever", 0.8, Some(77)),
			PredictionRow::new("D1", "Aspirin", "X2", "Gout", 0.5, None),
		];
		let graph = NetworkGraph::from_rows(&rows);
		let layout = Layout::compute(&graph, &LayoutParams::default(), 3);
		let scene = NetworkScene::build(&graph, &layout, CanvasSize::new(800, 600));

		assert_eq!(scene.nodes.len(), 3);
		assert_eq!(scene.nodes[0].label, "Aspirin (D1)");
		assert_eq!(scene.nodes[0].style.fill, "#1f78b4");
		assert_eq!(scene.nodes[1].style.fill, "#33a02c");

		assert_eq!(scene.edges.len(), 2);
		assert_eq!(scene.edges[0].style.color, VALIDATED_EDGE_COLOR);
		assert_eq!(scene.edges[0].style.width, 4.0);
		assert_eq!(scene.edges[1].style.color, NOVEL_EDGE_COLOR);
		assert_eq!(scene.edges[1].style.width, 2.5);
		assert_eq!(scene.edges[0].from, scene.nodes[0].center);
		assert_eq!(scene.edges[0].to, scene.nodes[1].center);
	}
}
