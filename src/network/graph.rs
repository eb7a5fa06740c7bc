use indexmap::{IndexMap, IndexSet};

use crate::predictions::{PredictionRow, Validation};

/// Which side of the bipartite graph a node sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Drug,
	Target,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkNode {
	/// `"{name} ({id})"`; also the drawn label.
	pub label: String,
	pub kind: NodeKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeAttrs {
	pub weight: f64,
	pub validation: Validation,
}

/// An edge between node indices; `drug` always refers to a Drug node and
/// `target` to a Target node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetworkEdge {
	pub drug: usize,
	pub target: usize,
	pub attrs: EdgeAttrs,
}

/// Bipartite drug/target graph built from prediction rows.
///
/// Nodes and edges keep first-insertion order. A repeated drug/target pair
/// replaces the stored attributes in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkGraph {
	nodes: IndexSet<(NodeKind, String)>,
	edges: IndexMap<(usize, usize), EdgeAttrs>,
}

impl NetworkGraph {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a PredictionRow>) -> Self {
		let mut graph = Self::new();
		for row in rows {
			graph.add_prediction(row);
		}
		graph
	}

	/// Inserts both endpoints if absent, then inserts or overwrites the edge.
	pub fn add_prediction(&mut self, row: &PredictionRow) {
		let drug = self.add_node(NodeKind::Drug, row.drug_label());
		let target = self.add_node(NodeKind::Target, row.target_label());
		let attrs = EdgeAttrs {
			weight: row.confidence,
			validation: row.validation,
		};
		// Existing pairs keep their slot; only the attributes change.
		self.edges.insert((drug, target), attrs);
	}

	fn add_node(&mut self, kind: NodeKind, label: String) -> usize {
		self.nodes.insert_full((kind, label)).0
	}

	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn node(&self, idx: usize) -> Option<NetworkNode> {
		self.nodes
			.get_index(idx)
			.map(|(kind, label)| NetworkNode {
				label: label.clone(),
				kind: *kind,
			})
	}

	pub fn nodes(&self) -> impl Iterator<Item = NetworkNode> + '_ {
		self.nodes.iter().map(|(kind, label)| NetworkNode {
			label: label.clone(),
			kind: *kind,
		})
	}

	pub fn edges(&self) -> impl Iterator<Item = NetworkEdge> + '_ {
		self.edges
			.iter()
			.map(|(&(drug, target), &attrs)| NetworkEdge {
				drug,
				target,
				attrs,
			})
	}

	/// Index of the node with this kind and label.
	pub fn find_node(&self, kind: NodeKind, label: &str) -> Option<usize> {
		self.nodes.get_index_of(&(kind, label.to_string()))
	}

	/// Attributes of the edge between the labelled drug and target.
	pub fn edge_between(&self, drug_label: &str, target_label: &str) -> Option<EdgeAttrs> {
		let drug = self.find_node(NodeKind::Drug, drug_label)?;
		let target = self.find_node(NodeKind::Target, target_label)?;
		self.edges.get(&(drug, target)).copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn row(drug: &str, name: &str, disease: &str, disease_name: &str, conf: f64, pmid: Option<u64>) -> PredictionRow {
		PredictionRow::new(drug, name, disease, disease_name, conf, pmid)
	}

	#[test]
	fn single_row_builds_two_nodes_one_edge() {
		let rows = [row("D1", "Aspirin", "X1", "Fever", 0.8, Some(1))];
		let graph = NetworkGraph::from_rows(&rows);

		assert_eq!(graph.node_count(), 2);
		assert_eq!(graph.find_node(NodeKind::Drug, "Aspirin (D1)"), Some(0));
		assert_eq!(graph.find_node(NodeKind::Target, "Fever (X1)"), Some(1));
		assert_eq!(graph.edge_count(), 1);
		let attrs = graph.edge_between("Aspirin (D1)", "Fever (X1)").unwrap();
		assert_eq!(attrs.weight, 0.8);
		assert_eq!(attrs.validation, Validation::Validated);
	}

	#[test]
	fn shared_drug_collapses_to_one_node() {
		let rows = [
			row("D1", "Aspirin", "X1", "Fever", 0.8, None),
			row("D1", "Aspirin", "X2", "Gout", 0.3, None),
		];
		let graph = NetworkGraph::from_rows(&rows);
		let kinds: Vec<NodeKind> = graph.nodes().map(|n| n.kind).collect();
		assert_eq!(kinds, vec![NodeKind::Drug, NodeKind::Target, NodeKind::Target]);
		assert_eq!(graph.edge_count(), 2);
	}

	#[test]
	fn later_row_overwrites_edge_in_place() {
		let rows = [
			row("D1", "Aspirin", "X1", "Fever", 0.8, Some(5)),
			row("D2", "Ibuprofen", "X1", "Fever", 0.6, None),
			row("D1", "Aspirin", "X1", "Fever", 0.2, None),
		];
		let graph = NetworkGraph::from_rows(&rows);
		assert_eq!(graph.edge_count(), 2);

		let first = graph.edges().next().unwrap();
		assert_eq!(graph.node(first.drug).unwrap().label, "Aspirin (D1)");
		assert_eq!(first.attrs.weight, 0.2);
		assert_eq!(first.attrs.validation, Validation::NotValidated);
	}

	#[test]
	fn same_label_on_both_sides_stays_bipartite() {
		let rows = [row("1", "X", "1", "X", 0.5, None)];
		let graph = NetworkGraph::from_rows(&rows);
		assert_eq!(graph.node_count(), 2);
		let edge = graph.edges().next().unwrap();
		assert_ne!(edge.drug, edge.target);
	}

	#[test]
	fn edges_always_cross_kinds() {
		let rows = [
			row("D1", "A", "X1", "F", 0.1, None),
			row("D2", "B", "X1", "F", 0.2, None),
			row("D2", "B", "X2", "G", 0.3, None),
		];
		let graph = NetworkGraph::from_rows(&rows);
		for edge in graph.edges() {
			assert_eq!(graph.node(edge.drug).unwrap().kind, NodeKind::Drug);
			assert_eq!(graph.node(edge.target).unwrap().kind, NodeKind::Target);
		}
	}

	#[test]
	fn empty_rows_give_empty_graph() {
		let graph = NetworkGraph::from_rows(&[]);
		assert!(graph.is_empty());
		assert_eq!(graph.edge_count(), 0);
	}
}
