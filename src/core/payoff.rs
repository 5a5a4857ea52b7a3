use crate::errors::InputError;

use super::rectangular_width;

/// A rectangular payoff matrix for one player of a two player game.
///
/// Rows are player one's actions and columns are player two's actions for
/// both players' matrices. So `b.get(row, col)` is player two's payoff when
/// player one plays `row` and player two plays `col`.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffMatrix {
    rows: usize,
    cols: usize,
    // Row major
    values: Vec<f64>,
}

impl PayoffMatrix {
    /// Create a payoff matrix from its rows.
    ///
    /// # Errors
    ///
    /// Fails if there are no rows or columns, if the rows have different
    /// lengths, or if any value is not finite.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, InputError> {
        let cols = rectangular_width(&rows)?;
        Ok(Self {
            rows: rows.len(),
            cols,
            values: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a `rows x cols` matrix by calling `f(row, col)` for every entry.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self, InputError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        Self::new(
            (0..rows)
                .map(|row| (0..cols).map(|col| f(row, col)).collect())
                .collect(),
        )
    }

    /// Number of actions for player one.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of actions for player two.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }

    /// Matrix vector product `self · v`.
    ///
    /// `v` is indexed by column and the result by row. Callers pass a vector
    /// of length [`cols`](Self::cols).
    pub(crate) fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.cols);
        (0..self.rows)
            .map(|row| self.row(row).iter().zip(v).map(|(a, x)| a * x).sum::<f64>())
            .collect()
    }

    /// Transposed product `transpose(self) · v`.
    ///
    /// `v` is indexed by row and the result by column. Callers pass a vector
    /// of length [`rows`](Self::rows).
    pub(crate) fn transpose_mul_vec(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.rows);
        (0..self.cols)
            .map(|col| {
                (0..self.rows)
                    .map(|row| self.get(row, col) * v[row])
                    .sum::<f64>()
            })
            .collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values
            .chunks(self.cols)
            .map(|chunk| chunk.to_vec())
            .collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for PayoffMatrix {
    type Error = InputError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<PayoffMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PayoffMatrix) -> Self {
        matrix.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn two_by_three() -> PayoffMatrix {
        PayoffMatrix::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn test_shape_and_access() {
        let m = two_by_three();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 0), 4.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_mul_vec() {
        let m = two_by_three();
        let product = m.mul_vec(&[1.0, 0.0, 0.5]);
        assert_eq!(product.len(), 2);
        assert_abs_diff_eq!(product[0], 2.5);
        assert_abs_diff_eq!(product[1], 7.0);
    }

    #[test]
    fn test_transpose_mul_vec() {
        let m = two_by_three();
        let product = m.transpose_mul_vec(&[0.5, 0.5]);
        assert_eq!(product.len(), 3);
        assert_abs_diff_eq!(product[0], 2.5);
        assert_abs_diff_eq!(product[1], 3.5);
        assert_abs_diff_eq!(product[2], 4.5);
    }

    #[test]
    fn test_products_follow_shape() {
        // 3x2: products must come back sized by rows and columns respectively
        let m = PayoffMatrix::from_fn(3, 2, |r, c| (r * 2 + c) as f64).unwrap();

        let by_row = m.mul_vec(&[1.0, 1.0]);
        assert_eq!(by_row, vec![1.0, 5.0, 9.0]);

        let by_col = m.transpose_mul_vec(&[1.0, 0.0, 1.0]);
        assert_eq!(by_col, vec![4.0, 6.0]);
    }

    #[test]
    fn test_from_fn() {
        let m = PayoffMatrix::from_fn(3, 3, |r, c| if r == c { 1.0 } else { 0.0 }).unwrap();
        assert_eq!(m.to_rows()[1], vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_rejects_bad_rows() {
        assert_eq!(PayoffMatrix::new(vec![]), Err(InputError::EmptyMatrix));
        assert!(PayoffMatrix::new(vec![vec![1.0], vec![1.0, 2.0]]).is_err());
        assert!(PayoffMatrix::new(vec![vec![f64::INFINITY]]).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates() {
        let m: PayoffMatrix = serde_json::from_str("[[0, 1], [1, 0]]").unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(serde_json::to_string(&m).unwrap(), "[[0.0,1.0],[1.0,0.0]]");

        assert!(serde_json::from_str::<PayoffMatrix>("[[0, 1], [1]]").is_err());
    }
}
