//! Localization tables.
//!
//! Points are handed over as a dense row-major table, one localization per
//! row. Column meaning is fixed (see [`columns`]); trailing columns beyond the
//! ones an operation reads are ignored.

use crate::error::{RenderError, RenderResult};
use crate::float::RenderFloat;

/// Column indices of the point table.
pub mod columns {
    pub const INTENSITY: usize = 0;
    pub const X: usize = 1;
    pub const Y: usize = 2;
    pub const SIGMA_X: usize = 3;
    pub const SIGMA_Y: usize = 4;
    /// 0-based frame index, stored as a float.
    pub const FRAME: usize = 5;
}

/// Which render operation a table is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLayout {
    /// `[I, x, y]`
    Hist,
    /// `[I, x, y, sigmaX, sigmaY]`
    Gauss,
    /// `[I, x, y, _, _, frame]`
    HistMovie,
    /// `[I, x, y, sigmaX, sigmaY, frame]`
    GaussMovie,
}

impl PointLayout {
    /// Minimum number of columns the operation reads.
    pub fn required_columns(self) -> usize {
        match self {
            PointLayout::Hist => 3,
            PointLayout::Gauss => 5,
            PointLayout::HistMovie | PointLayout::GaussMovie => 6,
        }
    }

    /// Operation name used in error messages.
    pub fn operation(self) -> &'static str {
        match self {
            PointLayout::Hist => "render_hist",
            PointLayout::Gauss => "render_gauss",
            PointLayout::HistMovie => "render_hist_movie",
            PointLayout::GaussMovie => "render_gauss_movie",
        }
    }

    /// Whether the sigma columns are read.
    pub fn uses_sigma(self) -> bool {
        matches!(self, PointLayout::Gauss | PointLayout::GaussMovie)
    }
}

/// Borrowed row-major view of a localization table.
#[derive(Debug, Clone, Copy)]
pub struct PointTable<'a, F> {
    data: &'a [F],
    n_cols: usize,
}

impl<'a, F: RenderFloat> PointTable<'a, F> {
    /// Wrap a row-major buffer of `data.len() / n_cols` rows.
    pub fn new(data: &'a [F], n_cols: usize) -> RenderResult<Self> {
        if n_cols == 0 {
            return Err(RenderError::NoColumns);
        }
        if data.len() % n_cols != 0 {
            return Err(RenderError::RaggedTable {
                len: data.len(),
                cols: n_cols,
            });
        }
        Ok(Self { data, n_cols })
    }

    /// Number of points (rows).
    pub fn len(&self) -> usize {
        self.data.len() / self.n_cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of columns per row.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Row `n` as a slice of `n_cols` values.
    pub fn row(&self, n: usize) -> &'a [F] {
        &self.data[n * self.n_cols..(n + 1) * self.n_cols]
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &'a [F]> + 'a {
        self.data.chunks_exact(self.n_cols)
    }

    /// Split into contiguous sub-tables of at most `rows_per_chunk` rows each.
    pub fn chunks(&self, rows_per_chunk: usize) -> impl Iterator<Item = PointTable<'a, F>> + 'a {
        let n_cols = self.n_cols;
        self.data
            .chunks(rows_per_chunk.max(1) * n_cols)
            .map(move |data| PointTable { data, n_cols })
    }

    /// Check that the table has enough columns for `layout`.
    pub fn require(&self, layout: PointLayout) -> RenderResult<()> {
        let required = layout.required_columns();
        if self.n_cols < required {
            return Err(RenderError::InsufficientColumns {
                operation: layout.operation(),
                required,
                found: self.n_cols,
            });
        }
        Ok(())
    }

    /// Sanity-check every point for `layout`: finite positive intensity,
    /// finite position and, when sigmas are read, finite positive sigmas.
    /// Reports the first offending row.
    pub fn check_points(&self, layout: PointLayout) -> RenderResult<()> {
        self.require(layout)?;
        for (row, p) in self.rows().enumerate() {
            let intensity = p[columns::INTENSITY];
            if !(intensity.is_finite() && intensity > F::zero()) {
                return Err(invalid(row, format!("intensity {:?} is not positive", intensity)));
            }
            if !p[columns::X].is_finite() || !p[columns::Y].is_finite() {
                return Err(invalid(row, "position is not finite".to_string()));
            }
            if layout.uses_sigma() {
                for col in [columns::SIGMA_X, columns::SIGMA_Y] {
                    let sigma = p[col];
                    if !(sigma.is_finite() && sigma > F::zero()) {
                        return Err(invalid(row, format!("sigma {:?} is not positive", sigma)));
                    }
                }
            }
        }
        Ok(())
    }
}

fn invalid(row: usize, message: String) -> RenderError {
    RenderError::InvalidPoint { row, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_and_len() {
        let data = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let table = PointTable::new(&data, 3).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(table.rows().count(), 2);
    }

    #[test]
    fn test_ragged_table_rejected() {
        let data = [1.0f32; 7];
        let err = PointTable::new(&data, 3).unwrap_err();
        assert!(matches!(err, RenderError::RaggedTable { len: 7, cols: 3 }));
        assert!(matches!(
            PointTable::new(&data, 0).unwrap_err(),
            RenderError::NoColumns
        ));
    }

    #[test]
    fn test_chunks_cover_all_rows() {
        let data: Vec<f64> = (0..30).map(|v| v as f64).collect();
        let table = PointTable::new(&data, 3).unwrap();
        let chunks: Vec<_> = table.chunks(4).collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 4);
        assert_eq!(chunks[2].len(), 2);
        assert_eq!(chunks[2].row(1), &[27.0, 28.0, 29.0]);
    }

    #[test]
    fn test_require_columns() {
        let data = [1.0f64; 10];
        let table = PointTable::new(&data, 5).unwrap();
        assert!(table.require(PointLayout::Hist).is_ok());
        assert!(table.require(PointLayout::Gauss).is_ok());
        let err = table.require(PointLayout::GaussMovie).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InsufficientColumns {
                required: 6,
                found: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_check_points() {
        let good = [1.0f64, 0.5, 0.5, 0.1, 0.1];
        let table = PointTable::new(&good, 5).unwrap();
        assert!(table.check_points(PointLayout::Gauss).is_ok());

        let bad_sigma = [1.0f64, 0.5, 0.5, 0.1, 0.1, 2.0, 0.5, 0.5, 0.0, 0.1];
        let table = PointTable::new(&bad_sigma, 5).unwrap();
        assert!(table.check_points(PointLayout::Hist).is_ok());
        let err = table.check_points(PointLayout::Gauss).unwrap_err();
        assert!(matches!(err, RenderError::InvalidPoint { row: 1, .. }));

        let bad_intensity = [-1.0f32, 0.5, 0.5];
        let table = PointTable::new(&bad_intensity, 3).unwrap();
        assert!(table.check_points(PointLayout::Hist).is_err());
    }
}
