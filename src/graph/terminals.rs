//! Terminal augmentation: wiring Source and Sink to seeded pixels.
//!
//! After the interactive seed phase, the foreground set is attached to the
//! Source terminal and the background set to the Sink terminal, both with a
//! saturating weight that makes cutting through a terminal edge effectively
//! forbidden. The result is ready for a min-cut/max-flow solver; the solve
//! itself lives outside this crate.
//!
//! Sink edges occupy each pixel node's dedicated `terminal` slot instead of
//! replacing a grid edge, so all photometric edges survive augmentation.

use super::grid::{Edge, PixelGraph};

// ============================================================================
// Augmentation
// ============================================================================

/// Saturating weight for terminal edges. A cut never crosses one of these.
pub const INFINITE_WEIGHT: f64 = 1.0e30;

/// Default threshold above which a sink edge appears in the debug report.
pub const SINK_REPORT_THRESHOLD: f64 = 100.0;

/// Wire the terminals to the dilated seed sets, mutating the graph in place.
///
/// Foreground indices become Source edges, one per entry including
/// duplicates. Background indices set the pixel's terminal slot to an edge
/// into Sink; duplicates collapse into that single slot. Indices outside
/// `[0, width*height)` are skipped - dilation near the image border routinely
/// produces them.
///
/// Both terminal assignments replace earlier ones, so re-running with the
/// same sets leaves the graph unchanged.
///
/// # Arguments
/// * `graph` - Base grid graph from `build_graph`
/// * `foreground` - Dilated foreground seed indices
/// * `background` - Dilated background seed indices
pub fn attach_terminals(graph: &mut PixelGraph, foreground: &[i64], background: &[i64]) {
    let n = graph.pixel_count() as i64;
    let source = graph.source_index();
    let sink = graph.sink_index();

    let mut dropped = 0usize;

    let mut source_edges = Vec::with_capacity(foreground.len());
    for &index in foreground {
        if index < 0 || index >= n {
            dropped += 1;
            continue;
        }
        source_edges.push(Edge {
            target: index as usize,
            weight: INFINITE_WEIGHT,
        });
    }
    graph.node_mut(source).edges = source_edges;

    for &index in background {
        if index < 0 || index >= n {
            dropped += 1;
            continue;
        }
        graph.node_mut(index as usize).terminal = Some(Edge {
            target: sink,
            weight: INFINITE_WEIGHT,
        });
    }

    if dropped > 0 {
        log::warn!("terminal wiring skipped {dropped} out-of-range seed indices");
    }
    log::debug!(
        "attached terminals: {} source edges, {} sink-seeded pixels",
        graph.node(source).edges.len(),
        graph.nodes()[..graph.pixel_count()]
            .iter()
            .filter(|node| node.terminal.is_some())
            .count()
    );
}

// ============================================================================
// Diagnostics
// ============================================================================

/// One terminal edge in a debug report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalAttachment {
    /// Pixel column
    pub x: usize,
    /// Pixel row
    pub y: usize,
    /// Edge weight
    pub weight: f64,
}

/// Pixel coordinates and weights of every Source edge.
///
/// Debugging output, not a stable API.
pub fn source_report(graph: &PixelGraph) -> Vec<TerminalAttachment> {
    let stride = graph.stride();
    graph
        .node(graph.source_index())
        .edges
        .iter()
        .map(|edge| {
            let (y, x) = stride.coords(edge.target);
            TerminalAttachment {
                x,
                y,
                weight: edge.weight,
            }
        })
        .collect()
}

/// Pixel coordinates and weights of sink edges heavier than `threshold`.
///
/// With the saturating terminal weight, any threshold below
/// `INFINITE_WEIGHT` reports exactly the background-seeded pixels.
pub fn sink_report(graph: &PixelGraph, threshold: f64) -> Vec<TerminalAttachment> {
    let stride = graph.stride();
    graph.nodes()[..graph.pixel_count()]
        .iter()
        .enumerate()
        .filter_map(|(i, node)| {
            let edge = node.terminal?;
            if edge.weight > threshold {
                let (y, x) = stride.coords(i);
                Some(TerminalAttachment {
                    x,
                    y,
                    weight: edge.weight,
                })
            } else {
                None
            }
        })
        .collect()
}
