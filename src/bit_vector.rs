mod bit_vector;
mod bit_vector_builder;
mod bit_vector_iter;

pub use bit_vector::BitVector;
pub use bit_vector_builder::BitVectorBuilder;
pub use bit_vector_iter::BitVectorIter;

use crate::packed_bitmap::PackedBitmap;
use crate::rank_samples::RankSamples;
use crate::select_pointers::SelectPointers;

/// Tuning knobs for the auxiliary sampling tables.
///
/// `s_r` is the number of bits per rank-sample block (the source
/// calls this _S_R_); `s_s` is the number of set bits per
/// select-pointer block (_S_S_). Both must be a positive multiple of
/// 64. Smaller values trade memory for faster worst-case scans;
/// larger values trade a few extra words of scanning for a smaller
/// auxiliary footprint.
///
/// # Examples
/// ```
/// use combsamp_bv::BitVectorOptions;
///
/// let opts = BitVectorOptions::default();
/// assert_eq!(opts.s_r(), 1024);
/// assert_eq!(opts.s_s(), 8192);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitVectorOptions {
    s_r: u64,
    s_s: u64,
}

impl BitVectorOptions {
    /// Constructs custom options.
    ///
    /// # Panics
    /// When `s_r` or `s_s` is 0 or not a multiple of 64.
    pub fn new(s_r: u64, s_s: u64) -> Self {
        assert!(
            s_r > 0 && s_r % 64 == 0,
            "s_r = {} must be a positive multiple of 64",
            s_r
        );
        assert!(
            s_s > 0 && s_s % 64 == 0,
            "s_s = {} must be a positive multiple of 64",
            s_s
        );
        BitVectorOptions { s_r, s_s }
    }

    /// Rank-sample block size, in bits.
    pub fn s_r(&self) -> u64 {
        self.s_r
    }

    /// Select-pointer block size, in set bits.
    pub fn s_s(&self) -> u64 {
        self.s_s
    }
}

impl Default for BitVectorOptions {
    /// The defaults used throughout the design notes: one rank
    /// sample every 1024 bits, one select pointer every 8192 ones.
    fn default() -> Self {
        BitVectorOptions {
            s_r: 1024,
            s_s: 8192,
        }
    }
}

pub(crate) fn empty_aux(options: BitVectorOptions) -> (PackedBitmap, RankSamples, SelectPointers) {
    (
        PackedBitmap::new(),
        RankSamples::new(options.s_r()),
        SelectPointers::new(options.s_s()),
    )
}

pub(crate) fn empty_aux_with_capacity_hint(
    options: BitVectorOptions,
    bits: u64,
) -> (PackedBitmap, RankSamples, SelectPointers) {
    (
        PackedBitmap::with_capacity_hint(bits),
        RankSamples::with_capacity_hint(options.s_r(), bits),
        SelectPointers::with_capacity_hint(options.s_s(), bits / 2 + 1),
    )
}
