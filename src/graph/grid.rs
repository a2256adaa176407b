//! Weighted grid graph construction over a pixel buffer.
//!
//! One node per pixel, indexed row-major by `row * stride + col`, with one
//! weighted edge per in-bounds 4-connected neighbor. Two extra nodes are
//! appended after the pixels: the Source terminal at `width * height` and the
//! Sink terminal right after it. Both start empty and are wired by the
//! terminal augmentation step.
//!
//! ## Supported Formats
//!
//! Input is an ndarray view of shape (height, width, channels):
//! - **Grayscale (1 channel)**: the channel is replicated to R, G and B
//! - **RGB (3 channels)**: used directly
//! - **RGBA (4 channels)**: alpha is ignored
//!
//! Construction runs as two rayon passes over the pixel grid: features and
//! neighbor counts first, then edge lists. Pixels are independent within a
//! pass, so no ordering or locking applies.

use ndarray::ArrayView3;
use rayon::prelude::*;
use thiserror::Error;

use super::feature::{affinity, rgb_to_feature, PhotometricFeature};

// ============================================================================
// Indexing
// ============================================================================

/// Row-major pixel index stride, equal to the image width.
///
/// Every component that touches pixel indices (graph, seed dilation,
/// reports) goes through this one encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stride(usize);

impl Stride {
    /// Stride for an image of the given width.
    pub fn new(width: usize) -> Self {
        Stride(width)
    }

    /// The raw stride value.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Flat index of (row, col).
    #[inline]
    pub fn index(self, row: usize, col: usize) -> usize {
        row * self.0 + col
    }

    /// (row, col) of a flat index.
    #[inline]
    pub fn coords(self, index: usize) -> (usize, usize) {
        (index / self.0, index % self.0)
    }
}

// ============================================================================
// Graph Types
// ============================================================================

/// Weighted directed adjacency entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Flat node index of the other endpoint
    pub target: usize,
    /// Affinity in (0,1] for grid edges, `INFINITE_WEIGHT` for terminal edges
    pub weight: f64,
}

/// A single graph node.
///
/// Pixel nodes carry their feature and one edge per in-bounds grid neighbor.
/// The `terminal` slot is reserved for sink wiring so that attaching a seed
/// never displaces a photometric edge.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Photometric feature of the pixel (zeroed for terminal nodes)
    pub feature: PhotometricFeature,
    /// Grid edges for pixel nodes; seed edges for the Source terminal
    pub edges: Vec<Edge>,
    /// Optional edge to the Sink terminal, set during augmentation
    pub terminal: Option<Edge>,
}

/// Errors rejected before any graph storage is allocated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// Image with zero width or height
    #[error("image has zero area ({width}x{height})")]
    EmptyImage {
        /// Input width in pixels
        width: usize,
        /// Input height in pixels
        height: usize,
    },
    /// Channel count other than 1, 3 or 4
    #[error("unsupported channel count {0} (expected 1, 3 or 4)")]
    UnsupportedChannels(usize),
}

/// The pixel grid graph plus its two terminal nodes.
#[derive(Debug, Clone)]
pub struct PixelGraph {
    width: usize,
    height: usize,
    stride: Stride,
    nodes: Vec<Node>,
}

impl PixelGraph {
    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The index encoding shared with seed lists.
    pub fn stride(&self) -> Stride {
        self.stride
    }

    /// Number of pixel nodes (terminals excluded).
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Index of the Source terminal node.
    pub fn source_index(&self) -> usize {
        self.pixel_count()
    }

    /// Index of the Sink terminal node.
    pub fn sink_index(&self) -> usize {
        self.pixel_count() + 1
    }

    /// All nodes: pixels first, then Source, then Sink.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// A single node by flat index.
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> &mut Node {
        &mut self.nodes[index]
    }

    /// Total number of grid adjacency entries across all pixel nodes.
    ///
    /// Each undirected neighbor pair is counted twice, once per endpoint,
    /// so a full W x H grid yields `4*W*H - 2*(W+H)`.
    pub fn grid_edge_count(&self) -> usize {
        self.nodes[..self.pixel_count()]
            .iter()
            .map(|n| n.edges.len())
            .sum()
    }
}

// ============================================================================
// Construction
// ============================================================================

/// Neighbor probe order: west, south, east, north as (dx, dy).
const OFFSETS: [(i64, i64); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Number of in-bounds 4-connected neighbors of (row, col).
#[inline]
fn grid_degree(row: usize, col: usize, width: usize, height: usize) -> usize {
    let mut n = 4;
    if col == 0 || col == width - 1 {
        n -= 1;
    }
    if row == 0 || row == height - 1 {
        n -= 1;
    }
    n
}

/// Read one pixel as RGB regardless of channel layout.
#[inline]
pub(crate) fn read_rgb(image: &ArrayView3<u8>, row: usize, col: usize, channels: usize) -> (u8, u8, u8) {
    if channels == 1 {
        let v = image[[row, col, 0]];
        (v, v, v)
    } else {
        (
            image[[row, col, 0]],
            image[[row, col, 1]],
            image[[row, col, 2]],
        )
    }
}

/// Build the weighted grid graph for an image.
///
/// Zero-area input and unsupported channel counts are rejected up front;
/// apart from that the build is total. Allocation failure aborts, which is
/// acceptable for a one-shot fixed-size build with no partial-success mode.
///
/// # Arguments
/// * `image` - Pixel buffer of shape (height, width, channels), channels 1/3/4
///
/// # Returns
/// Graph with `width * height` pixel nodes plus the two empty terminals
pub fn build_graph(image: ArrayView3<u8>) -> Result<PixelGraph, GraphError> {
    let (height, width, channels) = image.dim();

    if width == 0 || height == 0 {
        return Err(GraphError::EmptyImage { width, height });
    }
    if !matches!(channels, 1 | 3 | 4) {
        return Err(GraphError::UnsupportedChannels(channels));
    }

    let stride = Stride::new(width);
    let n = width * height;

    // Pass 1: per-pixel feature and neighbor count. Each pixel writes only
    // its own slot, so the grid is mapped in parallel without coordination.
    let per_pixel: Vec<(PhotometricFeature, usize)> = (0..n)
        .into_par_iter()
        .map(|i| {
            let (row, col) = stride.coords(i);
            let (r, g, b) = read_rgb(&image, row, col, channels);
            (rgb_to_feature(r, g, b), grid_degree(row, col, width, height))
        })
        .collect();

    // Pass 2: edge lists, sized from pass 1 and filled by probing the four
    // axis-aligned offsets in fixed order, appending only in-bounds targets.
    let mut nodes: Vec<Node> = (0..n)
        .into_par_iter()
        .map(|i| {
            let (row, col) = stride.coords(i);
            let (feature, degree) = per_pixel[i];
            let mut edges = Vec::with_capacity(degree);
            for (dx, dy) in OFFSETS {
                let nx = col as i64 + dx;
                let ny = row as i64 + dy;
                if nx < 0 || nx >= width as i64 || ny < 0 || ny >= height as i64 {
                    continue;
                }
                let target = stride.index(ny as usize, nx as usize);
                edges.push(Edge {
                    target,
                    weight: affinity(&feature, &per_pixel[target].0),
                });
            }
            Node {
                feature,
                edges,
                terminal: None,
            }
        })
        .collect();

    // Terminal slots stay empty until augmentation.
    nodes.push(Node::default());
    nodes.push(Node::default());

    log::debug!(
        "built {}x{} grid graph: {} pixel nodes, {} grid edges",
        width,
        height,
        n,
        nodes[..n].iter().map(|node| node.edges.len()).sum::<usize>()
    );

    Ok(PixelGraph {
        width,
        height,
        stride,
        nodes,
    })
}
