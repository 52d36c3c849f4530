//! Systematic encoder: binds K source symbols, solves for the intermediate
//! symbols once, then emits any number of repair symbols.

use log::debug;

use crate::block::Block;
use crate::error::Result;
use crate::symbol::Symbol;

pub struct Encoder {
    block: Block,
}

impl Encoder {
    /// Creates an encoder for blocks of `k` source symbols, each exactly
    /// `symbol_size` bytes.
    pub fn new(k: usize, symbol_size: usize) -> Result<Self> {
        Ok(Encoder {
            block: Block::new(k, symbol_size)?,
        })
    }

    /// Encodes one block: takes the K source payloads in order and returns
    /// `overhead` repair symbols with ESIs `k..k+overhead`.
    ///
    /// The source symbols themselves are transmitted as-is (the code is
    /// systematic); only the repairs need computing.
    pub fn encode(&mut self, source: &[&[u8]], overhead: usize) -> Result<Vec<Symbol>> {
        self.block.prepare(source, None)?;
        self.block.generate_intermediates()?;
        debug!(
            "encoded block: k={} t={} overhead={}",
            source.len(),
            self.block.symbol_size(),
            overhead
        );
        self.block.generate_repairs(overhead)
    }
}
