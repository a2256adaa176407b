//! Grid graph construction for seed-based graph-cut segmentation.
//!
//! This module turns a pixel buffer into the structure a min-cut solver
//! consumes:
//! - **Feature extraction**: per-pixel HSV-derived photometric features
//! - **Grid building**: one node per pixel, affinity-weighted 4-neighbor edges
//! - **Terminal augmentation**: Source/Sink wiring for seeded pixels
//!
//! The graph is built once per image; augmentation runs once after seed
//! selection completes and hands the result to a downstream solver.

pub mod feature;
pub mod grid;
pub mod terminals;

pub use feature::{affinity, feature_distance, rgb_to_feature, PhotometricFeature, SIGMA};
pub use grid::{build_graph, Edge, GraphError, Node, PixelGraph, Stride};
pub use terminals::{
    attach_terminals, sink_report, source_report, TerminalAttachment, INFINITE_WEIGHT,
    SINK_REPORT_THRESHOLD,
};
