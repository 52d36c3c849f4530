// Copyright (c) 2026, The RaptorFEC Project Authors.
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are
// met:
//
//     * Redistributions of source code must retain the above copyright
//       notice, this list of conditions and the following disclaimer.
//
//     * Redistributions in binary form must reproduce the above
//       copyright notice, this list of conditions and the following disclaimer
//       in the documentation and/or other materials provided with the
//       distribution.
//
//     * Neither the name of the copyright holder nor the names of its
//       contributors may be used to endorse or promote products derived from
//       this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
// "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
// LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR
// A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT
// OWNER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
// SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
// LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE,
// DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY
// THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT
// (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! # Systematic fountain-code FEC over GF(256)
//!
//! A RaptorQ-style erasure code for transport-layer loss recovery: K source
//! symbols of T bytes are extended with LDPC and HDPC parity structure,
//! solved into L intermediate symbols by inactivation decoding, and any
//! number of repair symbols are LT-encoded from those intermediates. The
//! code is systematic, so source symbols travel unmodified and repairs are
//! only computed on demand.
//!
//! ```
//! use raptorfec::{Decoder, Encoder};
//!
//! let source: Vec<Vec<u8>> = (0..8u8).map(|i| vec![i; 16]).collect();
//! let refs: Vec<&[u8]> = source.iter().map(|s| s.as_slice()).collect();
//!
//! let mut encoder = Encoder::new(8, 16).unwrap();
//! let repairs = encoder.encode(&refs, 2).unwrap();
//!
//! // lose source symbol 3, decode from the rest plus one repair
//! let mut payloads: Vec<&[u8]> = Vec::new();
//! let mut esis: Vec<u32> = Vec::new();
//! for i in [0u32, 1, 2, 4, 5, 6, 7] {
//!     payloads.push(refs[i as usize]);
//!     esis.push(i);
//! }
//! payloads.push(&repairs[0].data);
//! esis.push(repairs[0].esi);
//!
//! let mut decoder = Decoder::new(8, 16).unwrap();
//! decoder.decode(&payloads, &esis).unwrap();
//! assert_eq!(decoder.recover(3).unwrap().data, source[3]);
//! ```

pub mod block;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod gf;
pub mod matrix;
pub mod params;
pub mod solver;
pub mod symbol;
pub mod tables;
pub mod tuple;

pub use block::{Block, Status};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{FecError, Result};
pub use symbol::Symbol;
