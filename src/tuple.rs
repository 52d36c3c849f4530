//! Deterministic tuple generation for LT rows.
//!
//! Every encoding symbol is defined by a six-value tuple derived from its
//! extended index and the block's systematic seed J. The derivation has no
//! statistical requirement beyond exact reproducibility between encoder and
//! decoder.

use crate::params::BlockParams;
use crate::tables::{DEG_THRESHOLDS, V0, V1, V2, V3};

/// LT tuple for one encoding symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuple {
    pub d: u32,
    pub a: u32,
    pub b: u32,
    pub d1: u32,
    pub a1: u32,
    pub b1: u32,
}

/// Folds the four byte-planes of `y` through the mixing tables, XORs the
/// results and reduces modulo `m`.
pub fn rand_yim(y: u32, i: u8, m: u32) -> u32 {
    let i = i as u32;
    let x0 = V0[((y & 0xff).wrapping_add(i) & 0xff) as usize];
    let x1 = V1[(((y >> 8) & 0xff).wrapping_add(i) & 0xff) as usize];
    let x2 = V2[(((y >> 16) & 0xff).wrapping_add(i) & 0xff) as usize];
    let x3 = V3[(((y >> 24) & 0xff).wrapping_add(i) & 0xff) as usize];
    (x0 ^ x1 ^ x2 ^ x3) % m
}

/// Samples an LT degree: the first threshold index holding `v`, capped at
/// `w - 2`.
fn degree(v: u32, w: u32) -> u32 {
    let mut j = 0u32;
    while v > DEG_THRESHOLDS[j as usize] {
        j += 1;
    }
    j.min(w - 2)
}

/// Computes the tuple for extended index `x`.
pub fn tuple(p: &BlockParams, x: u32) -> Tuple {
    let w = p.w as u32;
    let p1 = p.p1 as u32;

    let mut a = 53591u32.wrapping_add(p.j.wrapping_mul(997));
    if a % 2 == 0 {
        a += 1;
    }
    let b = 10267u32.wrapping_mul(p.j.wrapping_add(1));
    let y = b.wrapping_add(x.wrapping_mul(a));

    let v = rand_yim(y, 0, 1 << 20);
    let d = degree(v, w);
    let a = 1 + rand_yim(y, 1, w - 1);
    let b = rand_yim(y, 2, w);
    let d1 = if d < 4 { 2 + rand_yim(x, 3, 2) } else { 2 };
    let a1 = 1 + rand_yim(x, 4, p1 - 1);
    let b1 = rand_yim(x, 5, p1);
    Tuple { d, a, b, d1, a1, b1 }
}

/// Walks the intermediate-symbol columns selected by `t`, calling `visit`
/// once per column. Shared by the constraint-matrix builder and the LT
/// encoder so both always agree on the selection.
pub fn lt_walk<F: FnMut(usize)>(p: &BlockParams, t: &Tuple, mut visit: F) {
    let w = p.w as u32;
    let p_ = p.p as u32;
    let p1 = p.p1 as u32;

    let mut b = t.b;
    visit(b as usize);
    for _ in 1..t.d {
        b = (b + t.a) % w;
        visit(b as usize);
    }

    let mut b = t.b1;
    while b >= p_ {
        b = (b + t.a1) % p1;
    }
    visit(p.w + b as usize);
    for _ in 1..t.d1 {
        b = (b + t.a1) % p1;
        while b >= p_ {
            b = (b + t.a1) % p1;
        }
        visit(p.w + b as usize);
    }
}
