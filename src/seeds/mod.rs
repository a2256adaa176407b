//! Seed handling for interactive segmentation.
//!
//! Seeds arrive from an interactive front end as two ordered lists of pixel
//! indices, one per class (foreground, background). This module provides:
//! - **Dilation**: growing each click into a disc-shaped neighborhood
//! - **Transfer**: the length-prefixed wire format used to hand seed lists
//!   across a process boundary

pub mod dilate;
pub mod transfer;

pub use dilate::{dilate_seeds, DilationRule};
pub use transfer::{read_seed_list, write_seed_list};
