//! GF(256) octet arithmetic via precomputed log/exponent tables.
//!
//! The field is GF(2^8) with the reduction polynomial
//! x^8 + x^4 + x^3 + x^2 + 1 (0x11D). Multiplication and division are
//! table additions in the log domain; the exponent table is laid out twice
//! over so `exp[log(u) + log(v)]` never needs a modular reduction.

use lazy_static::lazy_static;

const GF_ORDER: usize = 256;
const IRREDUCIBLE_POLY: u16 = 0x11D;

/// Exponent table length: two periods of the 255-cycle so that additive
/// indices up to 508 (mul) and 509 (div) stay in range.
const EXP_LEN: usize = GF_ORDER * 2 - 2;

struct FieldTables {
    log: [u8; GF_ORDER],
    exp: [u8; EXP_LEN],
}

impl FieldTables {
    fn build() -> Self {
        let mut log = [0u8; GF_ORDER];
        let mut exp = [0u8; EXP_LEN];
        let mut x: u16 = 1;
        for i in 0..255 {
            exp[i] = x as u8;
            exp[i + 255] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x >= 256 {
                x ^= IRREDUCIBLE_POLY;
            }
        }
        FieldTables { log, exp }
    }
}

lazy_static! {
    static ref TABLES: FieldTables = FieldTables::build();
}

/// Octet multiplication. Total over the byte domain; no error path.
#[inline(always)]
pub fn octmul(u: u8, v: u8) -> u8 {
    if u == 0 || v == 0 {
        return 0;
    }
    if v == 1 {
        return u;
    }
    if u == 1 {
        return v;
    }
    let t = &*TABLES;
    t.exp[t.log[u as usize] as usize + t.log[v as usize] as usize]
}

/// Octet division; `v` must be nonzero (`v == 0` is a caller bug).
#[inline(always)]
pub fn octdiv(u: u8, v: u8) -> u8 {
    if u == 0 {
        return 0;
    }
    if v == 1 {
        return u;
    }
    let t = &*TABLES;
    t.exp[t.log[u as usize] as usize + 255 - t.log[v as usize] as usize]
}

/// alpha^i for the HDPC row generator. Defined for any exponent; the cycle
/// length of the multiplicative group is 255.
#[inline(always)]
pub fn oct_exp(i: usize) -> u8 {
    TABLES.exp[i % 255]
}
