//! Intermediate-symbol solver.
//!
//! Solves `A * C = C1` for the L intermediate symbols by inactivation
//! decoding: a greedy sparse phase that grows an identity block on the left
//! while pushing troublesome columns into an inactivated tail, dense
//! Gaussian elimination over that tail, then back-substitution. Row and
//! symbol exchanges move `Vec` ownership, and column exchanges are tracked
//! through a permutation so the solved symbols can be put back at their
//! original column positions at the end.

use log::{debug, trace};

use crate::error::{FecError, Result};
use crate::gf::{octdiv, octmul};
use crate::matrix::ConstraintMatrix;
use crate::params::BlockParams;
use crate::symbol::Symbol;

/// Per-row degree bookkeeping over the first L-P columns.
struct Degrees {
    original: Vec<u32>,
    current: Vec<u32>,
    gtone: Vec<u32>,
}

impl Degrees {
    fn scan(rows: &[Vec<u8>], cols: usize) -> Self {
        let mut original = Vec::with_capacity(rows.len());
        let mut gtone = Vec::with_capacity(rows.len());
        for row in rows {
            let mut d = 0;
            let mut g = 0;
            for &v in &row[..cols] {
                if v != 0 {
                    d += 1;
                    if v > 1 {
                        g += 1;
                    }
                }
            }
            original.push(d);
            gtone.push(g);
        }
        Degrees {
            current: original.clone(),
            original,
            gtone,
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.original.swap(a, b);
        self.current.swap(a, b);
        self.gtone.swap(a, b);
    }
}

fn swap_col(rows: &mut [Vec<u8>], cpos: &mut [usize], j1: usize, j2: usize) {
    if j1 == j2 {
        return;
    }
    for row in rows.iter_mut() {
        row.swap(j1, j2);
    }
    cpos.swap(j1, j2);
}

/// Picks the next pivot row for phase 1: the lowest-index row with the
/// smallest nonzero current degree among gtone-free rows, tie-broken by
/// original degree; rows with entries above 1 are considered only once no
/// gtone-free candidate exists.
fn pick_row(deg: &Degrees, i0: usize, m: usize, l: usize) -> Option<usize> {
    for allow_gtone in [false, true] {
        let mut index = m;
        let mut o = l as u32;
        let mut r = l as u32;
        for i in i0..m {
            if (allow_gtone || deg.gtone[i] == 0) && deg.current[i] > 0 && deg.current[i] <= r {
                index = i;
                if deg.current[i] < r || (deg.current[i] == r && deg.original[i] < o) {
                    o = deg.original[i];
                    r = deg.current[i];
                }
            }
        }
        if index < m {
            return Some(index);
        }
    }
    None
}

/// Solves for the intermediate symbols, consuming the working symbols.
///
/// `c1` holds one working symbol per matrix row, already bound to the
/// received payloads. On success returns the L intermediate symbols ordered
/// by original column. The matrix rows are destroyed either way; the caller
/// restores from backup before any retry.
pub fn generate_intermediates(
    p: &BlockParams,
    matrix: &mut ConstraintMatrix,
    mut c1: Vec<Symbol>,
) -> Result<Vec<Symbol>> {
    let (m, l) = (p.m, p.l);
    debug_assert_eq!(matrix.rows.len(), m);
    debug_assert_eq!(c1.len(), m);

    let rows = &mut matrix.rows;
    let mut cpos: Vec<usize> = (0..l).collect();
    let mut deg = Degrees::scan(rows, l - p.p);

    // phase 1: greedy inactivation
    let mut i = 0usize;
    let mut u = p.p;
    while i + u < l {
        let index = pick_row(&deg, i, m, l).ok_or_else(|| {
            debug!("no eligible pivot row at step {} of {}", i, l - u);
            FecError::DecodeFailure
        })?;
        let r = deg.current[index] as usize;

        if index != i {
            rows.swap(i, index);
            c1.swap(i, index);
            deg.swap(i, index);
        }

        // partition the pivot row's active window into columns moving to the
        // front and zero columns vacating the tail
        let mut front = Vec::new();
        let mut tail = Vec::new();
        for j in i..l - u {
            if j < l - u - r + 1 {
                if rows[i][j] != 0 {
                    front.push(j);
                }
            } else if rows[i][j] == 0 {
                tail.push(j);
            }
        }
        if front.len() != tail.len() + 1 {
            return Err(FecError::MatrixInconsistency);
        }
        swap_col(rows, &mut cpos, i, front[0]);
        for (j, &t) in tail.iter().enumerate() {
            swap_col(rows, &mut cpos, t, front[j + 1]);
        }

        if rows[i][i] > 1 {
            let v = rows[i][i];
            c1[i].scalar_div(v);
            for j in i..l {
                rows[i][j] = octdiv(rows[i][j], v);
            }
        }

        let (pivot_rows, below_rows) = rows.split_at_mut(i + 1);
        let pivot_row = &pivot_rows[i];
        let (pivot_syms, below_syms) = c1.split_at_mut(i + 1);
        let pivot_sym = &pivot_syms[i];
        for (off, row) in below_rows.iter_mut().enumerate() {
            let ri = i + 1 + off;
            let v = row[i];
            if v != 0 {
                row[i] = 0;
                deg.current[ri] -= 1;
                if v > 1 {
                    deg.gtone[ri] -= 1;
                }
                for j in l - u - (r - 1)..l {
                    let old = row[j];
                    row[j] ^= octmul(v, pivot_row[j]);
                    if j < l - u {
                        if row[j] > 0 {
                            deg.current[ri] += 1;
                            if row[j] > 1 {
                                deg.gtone[ri] += 1;
                            }
                        }
                        if old > 0 {
                            deg.current[ri] -= 1;
                            if old > 1 {
                                deg.gtone[ri] -= 1;
                            }
                        }
                    }
                }
                below_syms[off].muladd(pivot_sym, v);
            }
            // the r-1 columns leaving the active window stop counting
            for j in l - u - (r - 1)..l - u {
                if row[j] != 0 {
                    deg.current[ri] -= 1;
                    if row[j] > 1 {
                        deg.gtone[ri] -= 1;
                    }
                }
            }
        }

        i += 1;
        u += r - 1;
    }
    let boundary = i;
    trace!(
        "phase 1 done: identity {}x{}, {} inactivated columns",
        boundary,
        boundary,
        l - boundary
    );

    // phase 2: dense elimination over the inactivated tail
    for jj in boundary..l {
        let mut low = Vec::new();
        let mut firstone = None;
        for ri in jj..m {
            if rows[ri][jj] != 0 {
                if rows[ri][jj] == 1 && firstone.is_none() {
                    firstone = Some(low.len());
                }
                low.push(ri);
            }
        }
        if low.is_empty() {
            debug!("column {} has no pivot candidate", jj);
            return Err(FecError::DecodeFailure);
        }
        if let Some(f) = firstone {
            if f > 0 {
                low.swap(0, f);
            }
        }
        let pivot = low[0];

        if rows[pivot][jj] != 1 {
            let v = rows[pivot][jj];
            c1[pivot].scalar_div(v);
            for q in jj..l {
                rows[pivot][q] = octdiv(rows[pivot][q], v);
            }
        }
        let targets: Vec<usize> = (boundary..m)
            .filter(|&ri| ri != pivot && rows[ri][jj] != 0)
            .collect();
        let pivot_row: Vec<u8> = rows[pivot][jj..l].to_vec();
        let pivot_sym = c1[pivot].clone();
        for ri in targets {
            let v = rows[ri][jj];
            c1[ri].muladd(&pivot_sym, v);
            for (q, &pv) in (jj..l).zip(&pivot_row) {
                rows[ri][q] ^= octmul(pv, v);
            }
        }
        if pivot != jj {
            rows.swap(jj, pivot);
            c1.swap(jj, pivot);
        }
    }

    // phase 3: clear remaining entries above the boundary
    for jj in boundary..l {
        let (upper, solved) = c1.split_at_mut(boundary);
        let col_sym = &solved[jj - boundary];
        for (ri, sym) in upper.iter_mut().enumerate() {
            let v = rows[ri][jj];
            if v != 0 {
                rows[ri][jj] = 0;
                sym.muladd(col_sym, v);
            }
        }
    }

    // finalization: row i now holds the symbol for original column cpos[i]
    let mut placed: Vec<(usize, Symbol)> = cpos
        .iter()
        .copied()
        .zip(c1.into_iter())
        .take(l)
        .collect();
    placed.sort_unstable_by_key(|&(col, _)| col);
    debug!("solved {} intermediate symbols", l);
    Ok(placed.into_iter().map(|(_, sym)| sym).collect())
}
