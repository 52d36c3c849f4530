//! Decoder: rebuilds the intermediate symbols from any sufficiently large
//! mix of source and repair symbols, then recovers missing source positions.

use log::debug;

use crate::block::Block;
use crate::error::{FecError, Result};
use crate::symbol::Symbol;

pub struct Decoder {
    block: Block,
    /// Source payloads captured from the received set; serves the trivial
    /// path when nothing was lost and short-circuits recovery of symbols
    /// that arrived intact.
    source_seen: Vec<Option<Vec<u8>>>,
    decoded: bool,
}

impl Decoder {
    /// Creates a decoder for blocks of `k` source symbols of `symbol_size`
    /// bytes each. Must match the encoder's `(k, symbol_size)` exactly.
    pub fn new(k: usize, symbol_size: usize) -> Result<Self> {
        let block = Block::new(k, symbol_size)?;
        Ok(Decoder {
            source_seen: vec![None; k],
            decoded: false,
            block,
        })
    }

    /// Decodes one received set.
    ///
    /// `received[i]` carries the payload for `esis[i]`; source ESIs are
    /// `< k`, repair ESIs `>= k`, order is arbitrary. When every source
    /// symbol is present no solve is needed. Fails with `DecodeFailure`
    /// when the set is linearly insufficient; the decoder may then be
    /// called again with more symbols.
    pub fn decode(&mut self, received: &[&[u8]], esis: &[u32]) -> Result<()> {
        let k = self.block.params().k;
        if esis.len() != received.len() {
            return Err(FecError::InvalidParameter(
                "esi list length must match symbol count",
            ));
        }
        if received.len() < k {
            return Err(FecError::InsufficientSymbols {
                need: k,
                got: received.len(),
            });
        }

        for slot in self.source_seen.iter_mut() {
            *slot = None;
        }
        for (&esi, payload) in esis.iter().zip(received) {
            if (esi as usize) < k {
                self.source_seen[esi as usize] = Some(payload.to_vec());
            }
        }

        if self.source_seen.iter().all(|s| s.is_some()) {
            debug!("all {} source symbols present, skipping solve", k);
            self.decoded = true;
            return Ok(());
        }

        self.block.prepare(received, Some(esis))?;
        self.block.generate_intermediates()?;
        self.decoded = true;
        Ok(())
    }

    /// Returns the source symbol at position `index` after a successful
    /// decode. Received positions are served from the captured payload;
    /// lost ones are re-derived from the intermediates.
    pub fn recover(&self, index: u32) -> Result<Symbol> {
        let k = self.block.params().k;
        if index as usize >= k {
            return Err(FecError::InvalidIndex);
        }
        if !self.decoded {
            return Err(FecError::InvalidParameter("decode has not succeeded yet"));
        }
        if let Some(bytes) = &self.source_seen[index as usize] {
            let mut sym = Symbol::new(bytes.len());
            sym.fill(bytes);
            sym.esi = index;
            return Ok(sym);
        }
        self.block.recover(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::Encoder;

    fn make_source(k: usize, t: usize) -> Vec<Vec<u8>> {
        (0..k)
            .map(|i| (0..t).map(|j| (i * 29 + j * 7 + 5) as u8).collect())
            .collect()
    }

    #[test]
    fn trivial_path_serves_received_bytes() {
        let src = make_source(8, 4);
        let refs: Vec<&[u8]> = src.iter().map(|s| s.as_slice()).collect();
        let esis: Vec<u32> = (0..8).collect();
        let mut dec = Decoder::new(8, 4).unwrap();
        dec.decode(&refs, &esis).unwrap();
        for i in 0..8 {
            assert_eq!(dec.recover(i as u32).unwrap().data, src[i]);
        }
    }

    #[test]
    fn recover_before_decode_fails() {
        let dec = Decoder::new(8, 4).unwrap();
        assert!(matches!(
            dec.recover(0),
            Err(FecError::InvalidParameter(_))
        ));
    }

    #[test]
    fn recover_out_of_range_fails() {
        let src = make_source(8, 4);
        let refs: Vec<&[u8]> = src.iter().map(|s| s.as_slice()).collect();
        let esis: Vec<u32> = (0..8).collect();
        let mut dec = Decoder::new(8, 4).unwrap();
        dec.decode(&refs, &esis).unwrap();
        assert_eq!(dec.recover(8), Err(FecError::InvalidIndex));
    }

    #[test]
    fn too_few_symbols_rejected() {
        let src = make_source(8, 4);
        let refs: Vec<&[u8]> = src[..6].iter().map(|s| s.as_slice()).collect();
        let esis: Vec<u32> = (0..6).collect();
        let mut dec = Decoder::new(8, 4).unwrap();
        assert_eq!(
            dec.decode(&refs, &esis),
            Err(FecError::InsufficientSymbols { need: 8, got: 6 })
        );
    }

    #[test]
    fn recovers_lost_source_from_repairs() {
        let src = make_source(8, 4);
        let refs: Vec<&[u8]> = src.iter().map(|s| s.as_slice()).collect();
        let mut enc = Encoder::new(8, 4).unwrap();
        let repairs = enc.encode(&refs, 4).unwrap();

        // drop source 1 and 6, fill in with two repairs
        let mut payloads: Vec<&[u8]> = Vec::new();
        let mut esis: Vec<u32> = Vec::new();
        for i in 0..8 {
            if i != 1 && i != 6 {
                payloads.push(&src[i]);
                esis.push(i as u32);
            }
        }
        for r in repairs.iter().take(2) {
            payloads.push(&r.data);
            esis.push(r.esi);
        }

        let mut dec = Decoder::new(8, 4).unwrap();
        dec.decode(&payloads, &esis).unwrap();
        assert_eq!(dec.recover(1).unwrap().data, src[1]);
        assert_eq!(dec.recover(6).unwrap().data, src[6]);
        // intact positions come back unchanged too
        assert_eq!(dec.recover(0).unwrap().data, src[0]);
    }
}
