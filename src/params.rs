//! Derivation of per-block code parameters from the systematic index table.

use crate::error::{FecError, Result};
use crate::tables::{SizeClass, MAX_K, SYSTEMATIC_INDEX};

/// All derived constants for one block.
///
/// Encoder and decoder must agree bit-for-bit on these, so every field is a
/// pure function of `(k, n)` and the table row selected for `k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockParams {
    /// Requested source symbol count.
    pub k: usize,
    /// Symbol count the block is currently bound to (K at encode time, the
    /// received count at decode time).
    pub n: usize,
    /// Padded source symbol count from the table (smallest tabulated K1 >= K).
    pub k1: usize,
    /// Systematic index seed for the tuple generator.
    pub j: u32,
    /// LDPC row count.
    pub s: usize,
    /// HDPC row count.
    pub h: usize,
    /// LT symbol count (always prime).
    pub w: usize,
    /// Extended row count: N plus the K1-K padding rows.
    pub n1: usize,
    /// Intermediate symbol count, K1 + S + H.
    pub l: usize,
    /// Constraint matrix row count, N1 + S + H.
    pub m: usize,
    /// Permanently inactivated column count, L - W.
    pub p: usize,
    /// Smallest prime >= P.
    pub p1: usize,
    /// P - H.
    pub u: usize,
    /// W - S.
    pub b: usize,
    /// ceil(H / 2).
    pub h1: usize,
}

impl BlockParams {
    /// Derives parameters for `k` source symbols bound to `n` symbols.
    ///
    /// Fails with `InvalidParameter` when `k` is outside the supported range
    /// and `InsufficientSymbols` when `n < k`.
    pub fn derive(k: usize, n: usize) -> Result<Self> {
        if k == 0 || k > MAX_K as usize {
            return Err(FecError::InvalidParameter(
                "source symbol count out of supported range",
            ));
        }
        if n < k {
            return Err(FecError::InsufficientSymbols { need: k, got: n });
        }
        let class: &SizeClass = SYSTEMATIC_INDEX
            .iter()
            .find(|c| c.k1 as usize >= k)
            .ok_or(FecError::InvalidParameter("no size class covers k"))?;

        let k1 = class.k1 as usize;
        let s = class.s as usize;
        let h = class.h as usize;
        let w = class.w as usize;
        let n1 = k1 - k + n;
        let l = k1 + s + h;
        let p = l - w;
        Ok(BlockParams {
            k,
            n,
            k1,
            j: class.j,
            s,
            h,
            w,
            n1,
            l,
            m: n1 + s + h,
            p,
            p1: next_prime(p),
            u: p - h,
            b: w - s,
            h1: (h + 1) / 2,
        })
    }

    /// Maps an external ESI to the internal extended index.
    ///
    /// Source indices pass through unchanged; repair indices shift past the
    /// K1-K padding range.
    pub fn esi_to_isi(&self, esi: u32) -> u32 {
        if (esi as usize) < self.k {
            esi
        } else {
            esi + (self.k1 - self.k) as u32
        }
    }
}

/// Smallest prime >= `p`, by trial division. P is small enough that nothing
/// faster is warranted.
fn next_prime(p: usize) -> usize {
    let mut n = p.max(2);
    loop {
        let mut i = 2;
        let mut prime = true;
        while i * i <= n {
            if n % i == 0 {
                prime = false;
                break;
            }
            i += 1;
        }
        if prime {
            return n;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_prime_basics() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(2), 2);
        assert_eq!(next_prime(8), 11);
        assert_eq!(next_prime(14), 17);
    }

    #[test]
    fn derive_small_block() {
        let p = BlockParams::derive(8, 8).unwrap();
        assert_eq!(p.k1, 10);
        assert_eq!(p.l, p.k1 + p.s + p.h);
        assert_eq!(p.m, p.n1 + p.s + p.h);
        assert_eq!(p.p, p.l - p.w);
        assert_eq!(p.u, p.p - p.h);
        assert_eq!(p.b, p.w - p.s);
        assert!(p.p1 >= p.p);
    }

    #[test]
    fn derive_rejects_out_of_range() {
        assert!(matches!(
            BlockParams::derive(0, 0),
            Err(FecError::InvalidParameter(_))
        ));
        assert!(matches!(
            BlockParams::derive(60000, 60000),
            Err(FecError::InvalidParameter(_))
        ));
    }

    #[test]
    fn derive_rejects_short_bind() {
        assert_eq!(
            BlockParams::derive(10, 7),
            Err(FecError::InsufficientSymbols { need: 10, got: 7 })
        );
    }

    #[test]
    fn esi_mapping_shifts_repairs() {
        let p = BlockParams::derive(8, 8).unwrap();
        assert_eq!(p.esi_to_isi(3), 3);
        assert_eq!(p.esi_to_isi(7), 7);
        // first repair lands just past the padding range
        assert_eq!(p.esi_to_isi(8), (8 + p.k1 - p.k) as u32);
    }

    #[test]
    fn table_rows_are_consistent() {
        let mut prev = 0;
        for c in SYSTEMATIC_INDEX.iter() {
            assert!(c.k1 > prev, "table must be strictly increasing");
            prev = c.k1;
            let l = c.k1 + c.s + c.h;
            assert!(c.w <= l);
            assert!(c.w > c.s);
            // the LT degree walk relies on W being prime
            assert_eq!(next_prime(c.w as usize), c.w as usize);
        }
        assert_eq!(prev, MAX_K);
    }
}
