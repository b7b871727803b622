use boruvka_core::{SparseMatrix, Weight};

/// Builds an `n x n` matrix from `(row, col, weight)` entries.
#[must_use]
pub fn matrix<W: Weight, M: SparseMatrix<W>>(n: usize, entries: &[(usize, usize, W)]) -> M {
    let mut matrix = M::create(n, n);
    for &(row, col, weight) in entries {
        matrix
            .set_element(row, col, weight)
            .expect("fixture entries are in bounds");
    }
    matrix
}

/// Two disjoint triangles: `{0, 1, 2}` and `{3, 4, 5}`.
pub const TWO_TRIANGLES: &[(usize, usize, u32)] = &[
    (0, 1, 1),
    (1, 2, 2),
    (0, 2, 3),
    (3, 4, 4),
    (4, 5, 5),
    (3, 5, 6),
];
