use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::RelationState;
use super::types::Node;

const STROKE: &str = "#333";
const NODE_FILL: &str = "#fff";
const SELECTED_FILL: &str = "#ffcccc";
const LABEL_FONT: &str = "16px Arial";
const ARROW_SIZE: f64 = 8.0;
const LOOP_RADIUS: f64 = 15.0;

/// Read-only pass over the model. Edges first so node circles overdraw the
/// line ends beneath them.
pub fn render(state: &RelationState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width(), state.height());
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_edges(state: &RelationState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(STROKE);
	ctx.set_fill_style_str(STROKE);
	for edge in state.edges() {
		let (Some(from), Some(to)) = (state.node(edge.from), state.node(edge.to)) else {
			continue;
		};
		if edge.from == edge.to {
			draw_loop(from, ctx);
		} else {
			draw_arrow(from, to, ctx);
		}
	}
}

fn draw_arrow(from: &Node, to: &Node, ctx: &CanvasRenderingContext2d) {
	let Some(((start_x, start_y), (end_x, end_y), angle)) = arrow_endpoints(from, to) else {
		return;
	};

	ctx.begin_path();
	ctx.move_to(start_x, start_y);
	ctx.line_to(end_x, end_y);
	ctx.stroke();

	ctx.begin_path();
	ctx.move_to(end_x, end_y);
	ctx.line_to(
		end_x - ARROW_SIZE * (angle - PI / 6.0).cos(),
		end_y - ARROW_SIZE * (angle - PI / 6.0).sin(),
	);
	ctx.line_to(
		end_x - ARROW_SIZE * (angle + PI / 6.0).cos(),
		end_y - ARROW_SIZE * (angle + PI / 6.0).sin(),
	);
	ctx.fill();
}

/// Endpoints of a straight edge clipped to both circle boundaries, plus the
/// center-to-center angle. `None` for a degenerate near-zero segment.
fn arrow_endpoints(from: &Node, to: &Node) -> Option<((f64, f64), (f64, f64), f64)> {
	let (dx, dy) = (to.x - from.x, to.y - from.y);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return None;
	}
	let angle = dy.atan2(dx);
	Some((
		(
			from.x + from.radius * angle.cos(),
			from.y + from.radius * angle.sin(),
		),
		(to.x - to.radius * angle.cos(), to.y - to.radius * angle.sin()),
		angle,
	))
}

// Self-loops use fixed pixel offsets, not a parametric loop: a circle
// tangent below the node plus a small arrowhead above-right of it.
fn draw_loop(node: &Node, ctx: &CanvasRenderingContext2d) {
	ctx.begin_path();
	let _ = ctx.arc(node.x, node.y + node.radius, LOOP_RADIUS, 0.0, 2.0 * PI);
	ctx.stroke();

	ctx.begin_path();
	ctx.move_to(node.x + 10.0, node.y - 5.0);
	ctx.line_to(node.x + 15.0, node.y - 15.0);
	ctx.line_to(node.x + 20.0, node.y - 5.0);
	ctx.fill();
}

fn draw_nodes(state: &RelationState, ctx: &CanvasRenderingContext2d) {
	for node in state.nodes() {
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, node.radius, 0.0, 2.0 * PI);
		let fill = if state.selected() == Some(node.id) {
			SELECTED_FILL
		} else {
			NODE_FILL
		};
		ctx.set_fill_style_str(fill);
		ctx.fill();
		ctx.stroke();

		ctx.set_fill_style_str(STROKE);
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		ctx.set_font(LABEL_FONT);
		let _ = ctx.fill_text(&node.name, node.x, node.y);
	}
}

#[cfg(test)]
mod tests {
	use super::super::types::NodeId;
	use super::*;

	fn node(id: u32, x: f64, y: f64) -> Node {
		Node {
			id: NodeId(id),
			name: format!("n{id}"),
			x,
			y,
			radius: 20.0,
		}
	}

	#[test]
	fn endpoints_are_clipped_to_both_boundaries() {
		let from = node(0, 100.0, 100.0);
		let to = node(1, 200.0, 100.0);
		let ((sx, sy), (ex, ey), angle) = arrow_endpoints(&from, &to).unwrap();
		assert!((sx - 120.0).abs() < 1e-9);
		assert!((sy - 100.0).abs() < 1e-9);
		assert!((ex - 180.0).abs() < 1e-9);
		assert!((ey - 100.0).abs() < 1e-9);
		assert!(angle.abs() < 1e-9);
	}

	#[test]
	fn endpoints_follow_the_center_angle() {
		let from = node(0, 0.0, 0.0);
		let to = node(1, 0.0, 300.0);
		let ((sx, sy), (ex, ey), angle) = arrow_endpoints(&from, &to).unwrap();
		assert!((angle - PI / 2.0).abs() < 1e-9);
		assert!((sx.abs()) < 1e-9 && (sy - 20.0).abs() < 1e-9);
		assert!((ex.abs()) < 1e-9 && (ey - 280.0).abs() < 1e-9);
	}

	#[test]
	fn degenerate_segment_yields_no_geometry() {
		let from = node(0, 50.0, 50.0);
		let to = node(1, 50.0, 50.0);
		assert!(arrow_endpoints(&from, &to).is_none());
	}
}
