//! Constraint matrix construction.
//!
//! The M x L matrix stacks three row groups: S LDPC rows, H HDPC rows and N1
//! LT rows, one per active extended index. LDPC and HDPC structure depends
//! only on the size class, LT structure only on which indices are present,
//! so a pristine backup of the full matrix is kept and `prepare` restores
//! the fixed rows from it before regenerating the LT rows.

use log::trace;

use crate::gf::{oct_exp, octmul};
use crate::params::BlockParams;
use crate::tuple::{lt_walk, tuple};

#[derive(Debug, Clone)]
pub struct ConstraintMatrix {
    pub rows: Vec<Vec<u8>>,
    backup: Vec<Vec<u8>>,
}

impl ConstraintMatrix {
    /// Builds the full matrix for `isis` and snapshots the backup.
    pub fn build(p: &BlockParams, isis: &[u32]) -> Self {
        let mut rows = vec![vec![0u8; p.l]; p.m];
        fill_ldpc(p, &mut rows);
        fill_hdpc(p, &mut rows);
        fill_lt(p, isis, &mut rows);
        trace!(
            "built constraint matrix: {}x{} ({} LDPC, {} HDPC, {} LT rows)",
            p.m,
            p.l,
            p.s,
            p.h,
            isis.len()
        );
        let backup = rows.clone();
        ConstraintMatrix { rows, backup }
    }

    /// Rebinds the matrix to a new index set.
    ///
    /// The S+H fixed rows are restored from backup; LT rows are regenerated
    /// for `isis` and the row count resized to match. The backup is refreshed
    /// so a later restore covers the new shape.
    pub fn prepare(&mut self, p: &BlockParams, isis: &[u32]) {
        debug_assert_eq!(p.m, p.s + p.h + isis.len());
        self.rows.resize(p.m, Vec::new());
        for (row, saved) in self.rows.iter_mut().zip(&self.backup).take(p.s + p.h) {
            row.clone_from(saved);
        }
        for row in self.rows.iter_mut().skip(p.s + p.h) {
            row.clear();
            row.resize(p.l, 0);
        }
        fill_lt(p, isis, &mut self.rows);
        self.backup = self.rows.clone();
    }

    /// Restores the working rows to the last prepared state.
    pub fn restore(&mut self) {
        self.rows.resize(self.backup.len(), Vec::new());
        for (row, saved) in self.rows.iter_mut().zip(&self.backup) {
            row.clone_from(saved);
        }
    }
}

/// LDPC rows: a cyclic triple of ones per B-column, the S x S identity at
/// column offset B, and the double band at column offset W.
fn fill_ldpc(p: &BlockParams, rows: &mut [Vec<u8>]) {
    for i in 0..p.b {
        let a = 1 + i / p.s;
        let mut b = i % p.s;
        rows[b][i] = 1;
        b = (b + a) % p.s;
        rows[b][i] = 1;
        b = (b + a) % p.s;
        rows[b][i] = 1;
    }
    for i in 0..p.s {
        rows[i][p.b + i] = 1;
    }
    for i in 0..p.s {
        rows[i][p.w + i % p.p] = 1;
        rows[i][p.w + (i + 1) % p.p] = 1;
    }
}

/// HDPC rows: random pair entries per column, an alpha column at K1+S-1,
/// then a back-substitution that turns each row into a field-weighted XOR of
/// all columns at or after its pivot, and the H x H identity at K1+S.
fn fill_hdpc(p: &BlockParams, rows: &mut [Vec<u8>]) {
    use crate::tuple::rand_yim;

    let h = p.h as u32;
    for j in 0..p.k1 + p.s - 1 {
        let x = (j + 1) as u32;
        let i = rand_yim(x, 6, h) as usize;
        rows[p.s + i][j] = 1;
        let i = ((rand_yim(x, 6, h) + rand_yim(x, 7, h - 1) + 1) % h) as usize;
        rows[p.s + i][j] = 1;
    }
    for i in 0..p.h {
        rows[p.s + i][p.k1 + p.s - 1] = oct_exp(i);
    }
    for i in 0..p.h {
        let row = &rows[p.s + i];
        let mut newrow = vec![0u8; p.l];
        newrow[p.k1 + p.s..].copy_from_slice(&row[p.k1 + p.s..]);
        for j in 0..p.k1 + p.s {
            let mut acc = 0u8;
            for k in j..p.k1 + p.s {
                if row[k] != 0 {
                    acc ^= octmul(row[k], oct_exp(k - j));
                }
            }
            newrow[j] = acc;
        }
        rows[p.s + i] = newrow;
    }
    for i in 0..p.h {
        rows[p.s + i][p.k1 + p.s + i] = 1;
    }
}

/// LT rows: the tuple-driven column walk for each active extended index.
fn fill_lt(p: &BlockParams, isis: &[u32], rows: &mut [Vec<u8>]) {
    for (i, &isi) in isis.iter().enumerate() {
        let t = tuple(p, isi);
        let row = &mut rows[p.s + p.h + i];
        lt_walk(p, &t, |col| row[col] = 1);
    }
}
