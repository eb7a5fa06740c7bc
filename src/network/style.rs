use super::graph::{EdgeAttrs, NodeKind};

pub const DRUG_COLOR: &str = "#1f78b4";
pub const TARGET_COLOR: &str = "#33a02c";
pub const VALIDATED_EDGE_COLOR: &str = "#008000";
pub const NOVEL_EDGE_COLOR: &str = "#ff0000";
pub const LABEL_COLOR: &str = "#000000";

/// Edge width per unit of confidence.
pub const EDGE_WIDTH_SCALE: f64 = 5.0;
pub const NODE_RADIUS: f64 = 16.0;
pub const LABEL_FONT_PX: f64 = 11.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
	pub color: &'static str,
	pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	pub fill: &'static str,
	pub radius: f64,
	pub font_px: f64,
}

pub fn node_style(kind: NodeKind) -> NodeStyle {
	let fill = match kind {
		NodeKind::Drug => DRUG_COLOR,
		NodeKind::Target => TARGET_COLOR,
	};
	NodeStyle {
		fill,
		radius: NODE_RADIUS,
		font_px: LABEL_FONT_PX,
	}
}

/// Width is `5 × weight`, unclamped: out-of-range confidences pass through.
pub fn edge_style(attrs: &EdgeAttrs) -> EdgeStyle {
	let color = if attrs.validation.is_validated() {
		VALIDATED_EDGE_COLOR
	} else {
		NOVEL_EDGE_COLOR
	};
	EdgeStyle {
		color,
		width: EDGE_WIDTH_SCALE * attrs.weight,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::predictions::Validation;

	#[test]
	fn node_fill_by_kind() {
		assert_eq!(node_style(NodeKind::Drug).fill, "#1f78b4");
		assert_eq!(node_style(NodeKind::Target).fill, "#33a02c");
	}

	#[test]
	fn edge_encoding() {
		let validated = edge_style(&EdgeAttrs {
			weight: 0.8,
			validation: Validation::Validated,
		});
		assert_eq!(validated.color, VALIDATED_EDGE_COLOR);
		assert_eq!(validated.width, 4.0);

		let novel = edge_style(&EdgeAttrs {
			weight: 0.8,
			validation: Validation::NotValidated,
		});
		assert_eq!(novel.color, NOVEL_EDGE_COLOR);
		assert_eq!(novel.width, 4.0);
	}

	#[test]
	fn out_of_range_weight_passes_through() {
		let style = edge_style(&EdgeAttrs {
			weight: 1.5,
			validation: Validation::NotValidated,
		});
		assert_eq!(style.width, 7.5);
	}
}
