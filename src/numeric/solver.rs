//! Dense linear system solver
//!
//! Gauss-Jordan elimination with partial pivoting. Near-zero pivots are
//! replaced by a signed epsilon instead of aborting, so ill-conditioned
//! normal equations still produce a (large but finite) answer.

use crate::error::{Error, Result};
use ndarray::{Array1, Array2};
use tracing::debug;

/// Pivot magnitudes below this are replaced by `±PIVOT_EPSILON`
pub const PIVOT_EPSILON: f64 = 1e-9;

/// Solve `matrix · x = rhs` for a square `matrix`.
pub fn gauss_jordan(matrix: &Array2<f64>, rhs: &Array1<f64>) -> Result<Array1<f64>> {
    let size = rhs.len();
    if size == 0 {
        return Err(Error::SingularMatrix);
    }
    if matrix.nrows() != size || matrix.ncols() != size {
        return Err(Error::DimensionMismatch {
            expected: size,
            got: matrix.nrows().max(matrix.ncols()),
        });
    }

    let mut mat = matrix.to_owned();
    let mut vec = rhs.to_owned();

    for i in 0..size {
        // Largest magnitude at or below the diagonal
        let mut pivot_index = i;
        for j in (i + 1)..size {
            if mat[[j, i]].abs() > mat[[pivot_index, i]].abs() {
                pivot_index = j;
            }
        }

        if pivot_index != i {
            for col in 0..size {
                mat.swap([i, col], [pivot_index, col]);
            }
            vec.swap(i, pivot_index);
        }

        let mut pivot = mat[[i, i]];
        if pivot.abs() < PIVOT_EPSILON {
            debug!(row = i, pivot, "near-zero pivot, substituting epsilon");
            pivot = if pivot >= 0.0 {
                PIVOT_EPSILON
            } else {
                -PIVOT_EPSILON
            };
        }

        for j in i..size {
            mat[[i, j]] /= pivot;
        }
        vec[i] /= pivot;

        for k in 0..size {
            if k == i {
                continue;
            }
            let multiplier = mat[[k, i]];
            for j in i..size {
                let pivot_value = mat[[i, j]];
                mat[[k, j]] -= multiplier * pivot_value;
            }
            let pivot_rhs = vec[i];
            vec[k] -= multiplier * pivot_rhs;
        }
    }

    Ok(vec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_solves_well_conditioned_system() {
        // 2x + y = 5, x + 3y = 10  =>  x = 1, y = 3
        let a = array![[2.0, 1.0], [1.0, 3.0]];
        let b = array![5.0, 10.0];
        let x = gauss_jordan(&a, &b).unwrap();

        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_requires_pivoting() {
        // Zero on the first diagonal entry
        let a = array![[0.0, 1.0], [1.0, 0.0]];
        let b = array![2.0, 3.0];
        let x = gauss_jordan(&a, &b).unwrap();

        assert!((x[0] - 3.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_singular_system_uses_epsilon() {
        let a = array![[1.0, 1.0], [1.0, 1.0]];
        let b = array![2.0, 2.0];
        let x = gauss_jordan(&a, &b).unwrap();

        // Second pivot collapses to 0 and is replaced by +1e-9: 0 / 1e-9 = 0
        assert_eq!(x[1], 0.0);
        assert_eq!(x[0], 2.0);
    }

    #[test]
    fn test_dimension_checks() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b = array![1.0, 2.0];
        assert!(matches!(
            gauss_jordan(&a, &b),
            Err(Error::DimensionMismatch { .. })
        ));

        let empty_a = Array2::<f64>::zeros((0, 0));
        let empty_b = Array1::<f64>::zeros(0);
        assert!(matches!(
            gauss_jordan(&empty_a, &empty_b),
            Err(Error::SingularMatrix)
        ));
    }
}
