//! Block session: owns the parameters, constraint matrix, tuple cache,
//! working symbols and solved intermediates for one source block, and gates
//! the encode/decode operations through a status machine.

use log::{debug, warn};

use crate::error::{FecError, Result};
use crate::matrix::ConstraintMatrix;
use crate::params::BlockParams;
use crate::solver::generate_intermediates;
use crate::symbol::Symbol;
use crate::tuple::{lt_walk, tuple, Tuple};

/// How many tuples past the current row count get precomputed; repairs and
/// recovery usually stay inside this window.
const TUPLE_LOOKAHEAD: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Initialized,
    SourceBound,
    IntermediatesReady,
    RepairsReady,
}

pub struct Block {
    params: BlockParams,
    matrix: ConstraintMatrix,
    tuples: Vec<Tuple>,
    working: Vec<Symbol>,
    intermediates: Vec<Symbol>,
    symbol_size: usize,
    status: Status,
}

impl Block {
    /// Creates a block for `k` source symbols of `symbol_size` bytes each,
    /// building the constraint matrix for the encode-time index set.
    pub fn new(k: usize, symbol_size: usize) -> Result<Self> {
        if symbol_size == 0 {
            return Err(FecError::InvalidParameter("symbol size must be nonzero"));
        }
        let params = BlockParams::derive(k, k)?;
        let isis: Vec<u32> = (0..params.n1 as u32).collect();
        let matrix = ConstraintMatrix::build(&params, &isis);
        let mut block = Block {
            matrix,
            tuples: Vec::new(),
            working: Vec::new(),
            intermediates: Vec::new(),
            symbol_size,
            status: Status::Initialized,
            params,
        };
        block.ensure_tuples(block.params.m + TUPLE_LOOKAHEAD);
        debug!(
            "block initialized: k={} k1={} l={} s={} h={} w={}",
            block.params.k,
            block.params.k1,
            block.params.l,
            block.params.s,
            block.params.h,
            block.params.w
        );
        Ok(block)
    }

    pub fn params(&self) -> &BlockParams {
        &self.params
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn symbol_size(&self) -> usize {
        self.symbol_size
    }

    fn ensure_tuples(&mut self, upto: usize) {
        for isi in self.tuples.len()..upto {
            self.tuples.push(tuple(&self.params, isi as u32));
        }
    }

    fn tuple_for(&self, isi: u32) -> Tuple {
        self.tuples
            .get(isi as usize)
            .copied()
            .unwrap_or_else(|| tuple(&self.params, isi))
    }

    /// Binds symbol payloads to the block ahead of a solve.
    ///
    /// With `esis = None` (encode path) `symbols` must be the K source
    /// symbols in order. With an explicit ESI list (decode path) the matrix
    /// is resized and its LT rows rebuilt for the indices actually present,
    /// with the K1-K padding rows appended as zero symbols. May be called
    /// repeatedly; each call restores the fixed structure from backup first.
    pub fn prepare(&mut self, symbols: &[&[u8]], esis: Option<&[u32]>) -> Result<()> {
        let n = symbols.len();
        if n < self.params.k {
            return Err(FecError::InsufficientSymbols {
                need: self.params.k,
                got: n,
            });
        }
        if symbols.iter().any(|s| s.len() != self.symbol_size) {
            return Err(FecError::InvalidParameter("symbol payload size mismatch"));
        }

        match esis {
            None => {
                if n != self.params.k {
                    return Err(FecError::InvalidParameter(
                        "encode path requires exactly k source symbols",
                    ));
                }
                if self.params.n != n {
                    self.rebind(n, &(0..self.params.k1 as u32).collect::<Vec<_>>())?;
                } else {
                    self.matrix.restore();
                }
            }
            Some(esis) => {
                if esis.len() != n {
                    return Err(FecError::InvalidParameter(
                        "esi list length must match symbol count",
                    ));
                }
                let params = BlockParams::derive(self.params.k, n)?;
                let mut isis: Vec<u32> = esis.iter().map(|&e| params.esi_to_isi(e)).collect();
                for i in n..params.n1 {
                    isis.push((i - n + params.k) as u32);
                }
                self.rebind_with(params, &isis);
            }
        }

        self.working.clear();
        self.working
            .resize_with(self.params.m, || Symbol::new(self.symbol_size));
        for (slot, payload) in self.working[self.params.s + self.params.h..]
            .iter_mut()
            .zip(symbols)
        {
            slot.fill(payload);
        }
        self.intermediates.clear();
        self.status = Status::SourceBound;
        Ok(())
    }

    fn rebind(&mut self, n: usize, isis: &[u32]) -> Result<()> {
        let params = BlockParams::derive(self.params.k, n)?;
        self.rebind_with(params, isis);
        Ok(())
    }

    fn rebind_with(&mut self, params: BlockParams, isis: &[u32]) {
        self.params = params;
        self.matrix.prepare(&self.params, isis);
        self.ensure_tuples(self.params.m + TUPLE_LOOKAHEAD);
    }

    /// Runs the solver over the bound symbols.
    ///
    /// On success the block holds the L intermediate symbols and moves to
    /// `IntermediatesReady`. A `DecodeFailure` consumes the bound symbols,
    /// so the caller must `prepare()` again (with more symbols) to retry.
    pub fn generate_intermediates(&mut self) -> Result<()> {
        if self.status != Status::SourceBound {
            return Err(FecError::InvalidParameter(
                "no symbols bound; call prepare first",
            ));
        }
        let working = std::mem::take(&mut self.working);
        match generate_intermediates(&self.params, &mut self.matrix, working) {
            Ok(c) => {
                self.intermediates = c;
                self.status = Status::IntermediatesReady;
                Ok(())
            }
            Err(e) => {
                warn!("intermediate solve failed: {}", e);
                self.status = Status::Initialized;
                Err(e)
            }
        }
    }

    fn lt_encode(&self, isi: u32) -> Symbol {
        let t = self.tuple_for(isi);
        let mut out = Symbol::new(self.symbol_size);
        lt_walk(&self.params, &t, |col| out.xor(&self.intermediates[col]));
        out
    }

    /// Generates `count` repair symbols with ESIs `k, k+1, ..`.
    pub fn generate_repairs(&mut self, count: usize) -> Result<Vec<Symbol>> {
        if self.intermediates.is_empty() {
            return Err(FecError::InvalidParameter(
                "intermediates not ready; solve first",
            ));
        }
        let mut repairs = Vec::with_capacity(count);
        for i in 0..count {
            let isi = (self.params.k1 + i) as u32;
            let mut sym = self.lt_encode(isi);
            sym.esi = (self.params.k + i) as u32;
            repairs.push(sym);
        }
        self.status = Status::RepairsReady;
        Ok(repairs)
    }

    /// Re-derives the source symbol at position `x` from the intermediates.
    ///
    /// Does not mutate solver state; calling it twice, or for a position
    /// that was in fact received, is redundant but not an error.
    pub fn recover(&self, x: u32) -> Result<Symbol> {
        if x as usize >= self.params.k {
            return Err(FecError::InvalidIndex);
        }
        if self.intermediates.is_empty() {
            return Err(FecError::InvalidParameter(
                "intermediates not ready; solve first",
            ));
        }
        let mut sym = self.lt_encode(x);
        sym.esi = x;
        Ok(sym)
    }
}
