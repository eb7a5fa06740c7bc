use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::graph::NetworkGraph;
use crate::raster::CanvasSize;

/// Force simulation tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
	pub force_charge: f32,
	pub force_spring: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping_factor: f32,
	pub node_mass: f32,
	/// Half-width of the square the initial positions are drawn from.
	pub initial_spread: f32,
	pub iterations: u32,
	pub time_step: f32,
}

impl Default for LayoutParams {
	fn default() -> Self {
		Self {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			node_mass: 10.0,
			initial_spread: 100.0,
			iterations: 300,
			time_step: 0.016,
		}
	}
}

impl LayoutParams {
	fn simulation(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}

/// Layout settings for one render call. Without a seed every call draws a
/// fresh one, so repeated renders may place nodes differently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutOptions {
	pub params: LayoutParams,
	pub seed: Option<u64>,
}

impl LayoutOptions {
	pub fn seeded(params: LayoutParams, seed: u64) -> Self {
		Self {
			params,
			seed: Some(seed),
		}
	}

	pub fn resolve_seed(&self) -> u64 {
		self.seed.unwrap_or_else(rand::random)
	}
}

/// Simulation-space position per graph node, indexed like the graph's nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
	positions: Vec<(f64, f64)>,
}

impl Layout {
	/// Runs the spring simulation from seeded random starting points.
	pub fn compute(graph: &NetworkGraph, params: &LayoutParams, seed: u64) -> Self {
		let mut rng = StdRng::seed_from_u64(seed);
		let spread = params.initial_spread.max(1.0);
		let mut sim: ForceGraph<usize, ()> = ForceGraph::new(params.simulation());

		let indices: Vec<_> = (0..graph.node_count())
			.map(|i| {
				sim.add_node(NodeData {
					x: rng.gen_range(-spread..spread),
					y: rng.gen_range(-spread..spread),
					mass: params.node_mass,
					is_anchor: false,
					user_data: i,
				})
			})
			.collect();

		for edge in graph.edges() {
			sim.add_edge(indices[edge.drug], indices[edge.target], EdgeData::default());
		}

		for _ in 0..params.iterations {
			sim.update(params.time_step);
		}

		let mut positions = vec![(0.0, 0.0); graph.node_count()];
		sim.visit_nodes(|node| {
			let (x, y) = (node.x() as f64, node.y() as f64);
			// A diverged simulation collapses the node onto the origin.
			positions[node.data.user_data] = if x.is_finite() && y.is_finite() {
				(x, y)
			} else {
				(0.0, 0.0)
			};
		});

		Self { positions }
	}

	pub fn from_positions(positions: Vec<(f64, f64)>) -> Self {
		Self { positions }
	}

	pub fn len(&self) -> usize {
		self.positions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	pub fn position(&self, idx: usize) -> Option<(f64, f64)> {
		self.positions.get(idx).copied()
	}

	/// Scales and centers the layout into `size`, keeping `margin` pixels
	/// free on every side and preserving the aspect ratio.
	pub fn fit(&self, size: CanvasSize, margin: f64) -> Vec<(f64, f64)> {
		let (w, h) = (size.width_f64(), size.height_f64());
		let (cx, cy) = (w / 2.0, h / 2.0);
		if self.positions.is_empty() {
			return Vec::new();
		}

		let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
		let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
		for &(x, y) in &self.positions {
			min_x = min_x.min(x);
			min_y = min_y.min(y);
			max_x = max_x.max(x);
			max_y = max_y.max(y);
		}

		let (span_x, span_y) = (max_x - min_x, max_y - min_y);
		let (avail_x, avail_y) = ((w - 2.0 * margin).max(0.0), (h - 2.0 * margin).max(0.0));
		let scale = match (span_x > f64::EPSILON, span_y > f64::EPSILON) {
			(true, true) => (avail_x / span_x).min(avail_y / span_y),
			(true, false) => avail_x / span_x,
			(false, true) => avail_y / span_y,
			(false, false) => 0.0,
		};
		let (mid_x, mid_y) = ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);

		self.positions
			.iter()
			.map(|&(x, y)| (cx + (x - mid_x) * scale, cy + (y - mid_y) * scale))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::predictions::PredictionRow;

	fn graph() -> NetworkGraph {
		let rows = [
			PredictionRow::new("D1", "Aspirin", "X1", "Fever", 0.8, Some(1)),
			PredictionRow::new("D1", "Aspirin", "X2", "Gout", 0.4, None),
			PredictionRow::new("D2", "Ibuprofen", "X1", "Fever", 0.6, None),
		];
		NetworkGraph::from_rows(&rows)
	}

	#[test]
	fn one_position_per_node() {
		let graph = graph();
		let layout = Layout::compute(&graph, &LayoutParams::default(), 1);
		assert_eq!(layout.len(), graph.node_count());
	}

	#[test]
	fn same_seed_same_layout() {
		let graph = graph();
		let params = LayoutParams::default();
		assert_eq!(
			Layout::compute(&graph, &params, 42),
			Layout::compute(&graph, &params, 42)
		);
	}

	#[test]
	fn fitted_positions_stay_inside_margins() {
		let graph = graph();
		let layout = Layout::compute(&graph, &LayoutParams::default(), 9);
		let size = CanvasSize::new(800, 600);
		for (x, y) in layout.fit(size, 40.0) {
			assert!((40.0 - 1e-6..=760.0 + 1e-6).contains(&x), "x = {x}");
			assert!((40.0 - 1e-6..=560.0 + 1e-6).contains(&y), "y = {y}");
		}
	}

	#[test]
	fn degenerate_layout_is_centered() {
		let layout = Layout::from_positions(vec![(3.0, 3.0)]);
		assert_eq!(layout.fit(CanvasSize::new(200, 100), 10.0), vec![(100.0, 50.0)]);
	}

	#[test]
	fn fit_uses_the_limiting_axis() {
		let layout = Layout::from_positions(vec![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
		let fitted = layout.fit(CanvasSize::new(200, 100), 0.0);
		// Height limits: 100px for 10 units.
		assert_eq!(fitted[0], (50.0, 0.0));
		assert_eq!(fitted[1], (150.0, 0.0));
		assert_eq!(fitted[2], (50.0, 100.0));
	}
}
