//! Betti numbers of a complex given by its facets.
//!
//! Boundary matrices are assembled per dimension and ranked by Gaussian
//! elimination over the prime field `Z/(2³¹ − 1)`. For the complexes this
//! crate produces (clique complexes of small graphs) this agrees with the
//! rational Betti numbers.

use std::collections::HashMap;

use nalgebra::DMatrix;
use tracing::trace;

use crate::complex::{Face, SimplicialComplex};
use crate::error::CoreError;

const PRIME: i64 = 2_147_483_647;

/// Computes unreduced Betti numbers `b₀ … b_dim` from a facet list.
pub trait HomologyOracle {
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyComplex`] for an empty facet list, or
    /// [`CoreError::TooLarge`] when a boundary matrix exceeds the oracle's
    /// guard.
    fn betti_numbers(&self, facets: &[Face]) -> Result<Vec<usize>, CoreError>;
}

/// Dense rank computation modulo a large prime.
#[derive(Debug, Clone, Copy)]
pub struct RankHomology {
    /// Maximum number of entries in one boundary matrix.
    pub max_entries: usize,
}

impl Default for RankHomology {
    fn default() -> Self {
        Self {
            max_entries: 16_000_000,
        }
    }
}

impl HomologyOracle for RankHomology {
    fn betti_numbers(&self, facets: &[Face]) -> Result<Vec<usize>, CoreError> {
        let complex = SimplicialComplex::from_faces(facets.iter().cloned());
        let Some(dimension) = complex.dimension() else {
            return Err(CoreError::EmptyComplex);
        };

        // faces_by_size[k] holds the faces with k + 1 vertices.
        let mut faces_by_size: Vec<Vec<Face>> = vec![Vec::new(); dimension + 1];
        for face in complex.faces(false) {
            faces_by_size[face.len() - 1].push(face);
        }

        // ranks[k] = rank of the boundary map from k-faces to (k-1)-faces.
        let mut ranks = vec![0usize; dimension + 2];
        for k in 1..=dimension {
            let matrix = self.boundary_matrix(&faces_by_size[k - 1], &faces_by_size[k])?;
            ranks[k] = rank_mod_prime(matrix);
            trace!(dimension = k, rank = ranks[k], "boundary rank");
        }

        Ok((0..=dimension)
            .map(|k| faces_by_size[k].len() - ranks[k] - ranks[k + 1])
            .collect())
    }
}

impl RankHomology {
    fn boundary_matrix(&self, rows: &[Face], cols: &[Face]) -> Result<DMatrix<i64>, CoreError> {
        let entries = rows.len().saturating_mul(cols.len());
        if entries > self.max_entries {
            return Err(CoreError::TooLarge {
                what: "boundary matrix",
                size: entries,
                limit: self.max_entries,
            });
        }

        let index: HashMap<&Face, usize> = rows.iter().enumerate().map(|(i, f)| (f, i)).collect();
        let mut matrix = DMatrix::<i64>::zeros(rows.len(), cols.len());
        for (col, face) in cols.iter().enumerate() {
            let mut sign = 1;
            for v in face {
                let mut boundary = face.clone();
                boundary.remove(v);
                if let Some(&row) = index.get(&boundary) {
                    matrix[(row, col)] = sign;
                }
                sign = -sign;
            }
        }
        Ok(matrix)
    }
}

fn rank_mod_prime(mut matrix: DMatrix<i64>) -> usize {
    let (rows, cols) = matrix.shape();
    matrix.apply(|x| *x = x.rem_euclid(PRIME));

    let mut rank = 0;
    for col in 0..cols {
        if rank == rows {
            break;
        }
        let Some(pivot) = (rank..rows).find(|&r| matrix[(r, col)] != 0) else {
            continue;
        };
        matrix.swap_rows(pivot, rank);

        let inverse = inverse_mod(matrix[(rank, col)]);
        for c in col..cols {
            matrix[(rank, c)] = matrix[(rank, c)] * inverse % PRIME;
        }
        for r in 0..rows {
            let factor = matrix[(r, col)];
            if r == rank || factor == 0 {
                continue;
            }
            for c in col..cols {
                let reduced = matrix[(r, c)] - factor * matrix[(rank, c)] % PRIME;
                matrix[(r, c)] = reduced.rem_euclid(PRIME);
            }
        }
        rank += 1;
    }
    rank
}

fn inverse_mod(value: i64) -> i64 {
    // Fermat: value^(p - 2) mod p.
    let mut result = 1i64;
    let mut base = value.rem_euclid(PRIME);
    let mut exponent = PRIME - 2;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base % PRIME;
        }
        base = base * base % PRIME;
        exponent >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::clique_complex;
    use crate::graph::Graph;

    fn betti(facets: &[&[u32]]) -> Vec<usize> {
        let facets: Vec<Face> = facets.iter().map(|f| f.iter().copied().collect()).collect();
        RankHomology::default().betti_numbers(&facets).expect("nonempty")
    }

    #[test]
    fn point_and_simplex() {
        assert_eq!(betti(&[&[0]]), vec![1]);
        assert_eq!(betti(&[&[0, 1, 2, 3]]), vec![1, 0, 0, 0]);
    }

    #[test]
    fn circle() {
        assert_eq!(betti(&[&[0, 1], &[1, 2], &[0, 2]]), vec![1, 1]);
    }

    #[test]
    fn boundary_of_tetrahedron_is_a_sphere() {
        assert_eq!(betti(&[&[0, 1, 2], &[0, 1, 3], &[0, 2, 3], &[1, 2, 3]]), vec![1, 0, 1]);
    }

    #[test]
    fn disjoint_pieces_count_components() {
        assert_eq!(betti(&[&[0, 1], &[2], &[3, 4, 5]]), vec![3, 0, 0]);
    }

    #[test]
    fn octahedron_clique_complex() {
        let octahedron = Graph::from_edges([
            (0, 2), (0, 3), (0, 4), (0, 5),
            (1, 2), (1, 3), (1, 4), (1, 5),
            (2, 4), (2, 5), (3, 4), (3, 5),
        ]);
        let facets: Vec<Face> = clique_complex(&octahedron).facets().iter().cloned().collect();
        let numbers = RankHomology::default().betti_numbers(&facets).expect("nonempty");
        assert_eq!(numbers, vec![1, 0, 1]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(RankHomology::default().betti_numbers(&[]), Err(CoreError::EmptyComplex));
    }

    #[test]
    fn guard_trips_on_large_matrices() {
        let oracle = RankHomology { max_entries: 2 };
        let facets = vec![Face::from([0, 1, 2])];
        assert!(matches!(oracle.betti_numbers(&facets), Err(CoreError::TooLarge { .. })));
    }

    #[test]
    fn inverse_is_multiplicative_inverse() {
        for value in [1, 2, 3, 12345, PRIME - 1] {
            assert_eq!(value * inverse_mod(value) % PRIME, 1);
        }
    }
}
