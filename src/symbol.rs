//! A fixed-length symbol buffer and the octet-vector operations the solver
//! and LT encoder run over it.

use crate::gf::{octdiv, octmul};

/// One source, intermediate or repair unit of exactly T bytes.
///
/// The payload carries no framing; ESI and source-block metadata travel
/// out-of-band with the transport packet. During the solve, symbols move
/// between slots by ownership exchange (`std::mem::swap`), never by aliasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub data: Vec<u8>,
    pub esi: u32,
    pub sbn: u8,
}

impl Symbol {
    /// Allocate a zeroed symbol of `size` bytes.
    pub fn new(size: usize) -> Self {
        Symbol {
            data: vec![0; size],
            esi: 0,
            sbn: 0,
        }
    }

    /// Zero the buffer, reallocating only if the size changed.
    pub fn reset(&mut self, size: usize) {
        if self.data.len() != size {
            self.data = vec![0; size];
        } else {
            self.data.fill(0);
        }
    }

    /// Overwrite the payload from `src`, growing or shrinking as needed.
    pub fn fill(&mut self, src: &[u8]) {
        if self.data.len() != src.len() {
            self.data = src.to_vec();
        } else {
            self.data.copy_from_slice(src);
        }
    }

    /// `self ^= other`. Equal lengths are a caller contract.
    #[inline]
    pub fn xor(&mut self, other: &Symbol) {
        debug_assert_eq!(self.data.len(), other.data.len());
        for (d, s) in self.data.iter_mut().zip(other.data.iter()) {
            *d ^= *s;
        }
    }

    /// Multiply every byte by the field scalar `u`.
    pub fn scalar_mul(&mut self, u: u8) {
        for b in self.data.iter_mut() {
            *b = octmul(*b, u);
        }
    }

    /// Divide every byte by the field scalar `u` (`u != 0`).
    pub fn scalar_div(&mut self, u: u8) {
        for b in self.data.iter_mut() {
            *b = octdiv(*b, u);
        }
    }

    /// `self ^= u * other`, the solver's hottest inner loop. The `u == 1`
    /// case degenerates to a plain xor and skips the table lookups.
    #[inline]
    pub fn muladd(&mut self, other: &Symbol, u: u8) {
        debug_assert_eq!(self.data.len(), other.data.len());
        if u == 0 {
            return;
        }
        if u == 1 {
            self.xor(other);
            return;
        }
        for (d, s) in self.data.iter_mut().zip(other.data.iter()) {
            *d ^= octmul(*s, u);
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(bytes: &[u8]) -> Symbol {
        let mut s = Symbol::new(bytes.len());
        s.fill(bytes);
        s
    }

    #[test]
    fn xor_involution() {
        let mut a = sym(&[1, 2, 3, 4]);
        let b = sym(&[9, 8, 7, 6]);
        a.xor(&b);
        a.xor(&b);
        assert_eq!(a.data, &[1, 2, 3, 4]);
    }

    #[test]
    fn muladd_one_is_xor() {
        let mut a = sym(&[0x10, 0x20]);
        let mut a2 = a.clone();
        let b = sym(&[0x0f, 0xf0]);
        a.xor(&b);
        a2.muladd(&b, 1);
        assert_eq!(a.data, a2.data);
    }

    #[test]
    fn scalar_div_undoes_mul() {
        let orig = [0u8, 1, 37, 255, 128, 64];
        for u in 1..=255u8 {
            let mut s = sym(&orig);
            s.scalar_mul(u);
            s.scalar_div(u);
            assert_eq!(s.data, &orig);
        }
    }

    #[test]
    fn muladd_zero_is_noop() {
        let mut a = sym(&[5, 6, 7]);
        let b = sym(&[1, 2, 3]);
        a.muladd(&b, 0);
        assert_eq!(a.data, &[5, 6, 7]);
    }

    #[test]
    fn reset_reuses_buffer() {
        let mut s = sym(&[1, 2, 3, 4]);
        s.reset(4);
        assert_eq!(s.data, &[0, 0, 0, 0]);
        s.reset(8);
        assert_eq!(s.len(), 8);
    }
}
