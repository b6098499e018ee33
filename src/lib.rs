//! # combsamp-bv
//!
//! A succinct bit-vector supporting `access`, `rank_b` and `select_b`
//! in constant or near-constant time over an append-only bitmap of
//! arbitrary length, via Navarro & Providel's *Combined Sampling*
//! scheme (SEA 2012): one rank-sample array plus one select-pointer
//! array layered on top of a packed 64-bit-word bitmap.
//!
//! The facade is [`BitVector`]; [`BitVectorBuilder`] assembles one
//! from a run of appends, and [`BitVectorOptions`] tunes the
//! auxiliary sampling density.

pub use bit_string::BitString;
pub use bit_vector::{BitVector, BitVectorBuilder, BitVectorIter, BitVectorOptions};

pub mod bit_string;
mod bit_vector;
mod packed_bitmap;
mod rank_samples;
mod select_pointers;
pub mod word_ops;
