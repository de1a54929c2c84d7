//! Common test fixtures for render tests.

/// Common ROI definitions (`[xmin, xmax, ymin, ymax]`).
pub mod roi {
    /// 5 x 5 world units, one unit per pixel on a 5 x 5 grid.
    pub const UNIT_5: [f64; 4] = [0.0, 5.0, 0.0, 5.0];

    /// 10 x 10 world units.
    pub const UNIT_10: [f64; 4] = [0.0, 10.0, 0.0, 10.0];

    /// A 12.8 um field of view in nm, typical of a 128 px camera crop.
    pub const FIELD_NM: [f64; 4] = [0.0, 12_800.0, 0.0, 12_800.0];

    /// Wider than tall, so x and y pixel scales differ on a square grid.
    pub const ANISOTROPIC: [f64; 4] = [0.0, 20.0, 0.0, 10.0];

    /// Zero-width x axis.
    pub const DEGENERATE: [f64; 4] = [3.0, 3.0, 0.0, 5.0];
}

/// Canned single-point tables in the six-column layout.
pub mod points {
    /// Build one `[I, x, y, sigmaX, sigmaY, frame]` row.
    pub fn single(intensity: f64, x: f64, y: f64, sigma: f64, frame: usize) -> Vec<f64> {
        vec![intensity, x, y, sigma, sigma, frame as f64]
    }

    /// Unit point at the center of pixel (2, 2) of [`super::roi::UNIT_5`].
    pub fn center_of_unit_5() -> Vec<f64> {
        single(1.0, 2.5, 2.5, 0.5, 0)
    }
}
