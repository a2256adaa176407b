//! Seedcut
//!
//! Graph construction for interactive seed-based foreground/background
//! segmentation. An image becomes a weighted 4-connected grid graph whose
//! edge weights encode photometric similarity; user-clicked seed regions are
//! dilated into discs and wired to two virtual terminal nodes (Source, Sink)
//! with saturating weight. The augmented graph is ready for a min-cut/
//! max-flow solver, which lives outside this crate.
//!
//! ## Image Format
//!
//! Input is an ndarray view of shape (height, width, channels):
//! - **Grayscale**: (height, width, 1) - single channel, replicated to RGB
//! - **RGB**: (height, width, 3) - 3 color channels
//! - **RGBA**: (height, width, 4) - alpha ignored
//!
//! ## Pipeline
//!
//! ```text
//! pixel buffer -> build_graph ----------------> base graph --+
//! seed clicks  -> dilate_seeds -> candidates -> attach_terminals
//! ```
//!
//! Graph construction parallelizes over pixels with rayon; dilation and
//! terminal wiring are cheap and single-threaded.

pub mod graph;
pub mod seeds;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use ndarray::Array3;
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::graph::feature::{affinity, rgb_to_feature, PhotometricFeature};
    use crate::graph::grid::read_rgb;
    use crate::graph::Stride;
    use crate::seeds::{dilate_seeds, DilationRule};

    fn check_channels(channels: usize) -> PyResult<()> {
        if matches!(channels, 1 | 3 | 4) {
            Ok(())
        } else {
            Err(PyValueError::new_err(format!(
                "unsupported channel count {channels} (expected 1, 3 or 4)"
            )))
        }
    }

    /// Per-pixel photometric features.
    ///
    /// Output shape is (height, width, 3) holding (value, sin_hue, cos_hue)
    /// per pixel.
    #[pyfunction]
    pub fn pixel_features<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<f64>>> {
        let input = image.as_array();
        let (height, width, channels) = input.dim();
        check_channels(channels)?;

        let mut out = Array3::<f64>::zeros((height, width, 3));
        for y in 0..height {
            for x in 0..width {
                let (r, g, b) = read_rgb(&input, y, x, channels);
                let f = rgb_to_feature(r, g, b);
                out[[y, x, 0]] = f.value;
                out[[y, x, 1]] = f.sin_hue;
                out[[y, x, 2]] = f.cos_hue;
            }
        }
        Ok(out.into_pyarray(py))
    }

    /// Affinity weights toward the four grid neighbors.
    ///
    /// Output shape is (height, width, 4) in west, south, east, north order;
    /// off-grid directions hold NaN.
    #[pyfunction]
    pub fn grid_edge_weights<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<f64>>> {
        let input = image.as_array();
        let (height, width, channels) = input.dim();
        check_channels(channels)?;

        let mut features = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let (r, g, b) = read_rgb(&input, y, x, channels);
                features.push(rgb_to_feature(r, g, b));
            }
        }

        let feature_at = |y: usize, x: usize| -> &PhotometricFeature { &features[y * width + x] };
        let offsets: [(i64, i64); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

        let mut out = Array3::<f64>::from_elem((height, width, 4), f64::NAN);
        for y in 0..height {
            for x in 0..width {
                for (slot, (dx, dy)) in offsets.iter().enumerate() {
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx < 0 || nx >= width as i64 || ny < 0 || ny >= height as i64 {
                        continue;
                    }
                    out[[y, x, slot]] =
                        affinity(feature_at(y, x), feature_at(ny as usize, nx as usize));
                }
            }
        }
        Ok(out.into_pyarray(py))
    }

    /// Dilate clicked seed indices into disc neighborhoods.
    ///
    /// Indices use the `row * width + col` encoding. Candidates are returned
    /// unclipped; out-of-range values are dropped during terminal wiring.
    #[pyfunction]
    #[pyo3(signature = (seeds, radius, width, exclude_axes=true))]
    pub fn dilate_seed_indices(
        seeds: Vec<i64>,
        radius: i64,
        width: usize,
        exclude_axes: bool,
    ) -> PyResult<Vec<i64>> {
        if width == 0 {
            return Err(PyValueError::new_err("width must be nonzero"));
        }
        let rule = if exclude_axes {
            DilationRule::OffAxis
        } else {
            DilationRule::ExcludeCenterOnly
        };
        Ok(dilate_seeds(&seeds, radius, Stride::new(width), rule))
    }

    /// Seedcut Python extension module
    #[pymodule]
    pub fn seedcut(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(pixel_features, m)?)?;
        m.add_function(wrap_pyfunction!(grid_edge_weights, m)?)?;
        m.add_function(wrap_pyfunction!(dilate_seed_indices, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::seedcut;
