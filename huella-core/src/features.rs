use crate::error::{Error, Result};

/// A rectangular matrix of spectral features: one row per feature dimension,
/// one column per time frame.
///
/// Produced by an external feature extractor (the core never touches raw
/// spectra). Both dimensions must be at least 1; emptiness and raggedness
/// are rejected at construction, before any downstream computation.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    /// Row-major storage: `data[row * num_frames + frame]`.
    data: Vec<f64>,
    num_features: usize,
    num_frames: usize,
}

impl FeatureMatrix {
    /// Build a matrix from per-feature rows. Every row must have the same
    /// nonzero length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(Error::EmptyFeatureMatrix);
        }
        let num_frames = rows[0].len();
        for (row, values) in rows.iter().enumerate().skip(1) {
            if values.len() != num_frames {
                return Err(Error::RaggedFeatureMatrix {
                    row,
                    expected: num_frames,
                    got: values.len(),
                });
            }
        }
        let mut data = Vec::with_capacity(rows.len() * num_frames);
        for row in rows {
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            num_features: rows.len(),
            num_frames,
        })
    }

    /// Number of feature dimensions (rows).
    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// Number of time frames (columns).
    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// One feature dimension across all time frames.
    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.num_frames;
        &self.data[start..start + self.num_frames]
    }
}

/// A fixed-length feature vector: one value per feature dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Canonical byte form: each element as an 8-byte IEEE-754 double,
    /// little-endian, in vector order. Identical logical vectors serialize
    /// identically on every platform, so they hash identically.
    pub fn to_canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.values.len() * 8);
        for value in &self.values {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }
}

/// Reduce a feature matrix to a fixed-length vector: the arithmetic mean of
/// each feature row across all time frames.
pub fn summarize(matrix: &FeatureMatrix) -> FeatureVector {
    let frames = matrix.num_frames() as f64;
    let values = (0..matrix.num_features())
        .map(|row| matrix.row(row).iter().sum::<f64>() / frames)
        .collect();
    FeatureVector::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_empty() {
        assert!(matches!(
            FeatureMatrix::from_rows(&[]),
            Err(Error::EmptyFeatureMatrix)
        ));
        assert!(matches!(
            FeatureMatrix::from_rows(&[vec![]]),
            Err(Error::EmptyFeatureMatrix)
        ));
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            FeatureMatrix::from_rows(&rows),
            Err(Error::RaggedFeatureMatrix { row: 1, .. })
        ));
    }

    #[test]
    fn summarize_is_row_mean() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let matrix = FeatureMatrix::from_rows(&rows).unwrap();
        let vector = summarize(&matrix);
        assert_eq!(vector.values(), &[2.0, 5.0]);
    }

    #[test]
    fn summarize_single_frame() {
        let matrix = FeatureMatrix::from_rows(&[vec![7.5]]).unwrap();
        assert_eq!(summarize(&matrix).values(), &[7.5]);
    }

    #[test]
    fn canonical_bytes_are_little_endian_doubles() {
        let vector = FeatureVector::new(vec![1.0, -2.5]);
        let bytes = vector.to_canonical_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..8], &1.0f64.to_le_bytes());
        assert_eq!(&bytes[8..], &(-2.5f64).to_le_bytes());
    }
}
