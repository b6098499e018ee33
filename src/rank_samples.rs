//! Rank sample table: cumulative popcount at every `S_R`-bit boundary.
//!
//! `samples[j]` holds the number of 1-bits in positions `[0, j * S_R)`.
//! `samples[0]` is always 0. The table grows by at most one entry per
//! call to [`RankSamples::maybe_push`], since appends are bounded to
//! 64 bits and `S_R` is always a multiple of 64.

/// Cumulative-popcount samples, one per `S_R`-bit block.
#[derive(Debug, Clone)]
pub struct RankSamples {
    samples: Vec<u64>,
    s_r: u64,
}

impl RankSamples {
    /// Constructs a table with a single `0` entry for block 0.
    pub fn new(s_r: u64) -> Self {
        RankSamples {
            samples: vec![0],
            s_r,
        }
    }

    /// As `new`, but reserves room for a bitmap of `bits` bits.
    pub fn with_capacity_hint(s_r: u64, bits: u64) -> Self {
        let mut samples = Vec::with_capacity((bits / s_r + 1) as usize);
        samples.push(0);
        RankSamples { samples, s_r }
    }

    /// Given the bitmap's length *after* an append of `width` bits
    /// whose popcount was `appended_popcount`, the total popcount
    /// *after* the append (`popcount_after`), and the freshly
    /// appended word's value (already masked to `width` bits),
    /// pushes a new sample if the append crossed a block boundary.
    ///
    /// # Panics
    /// When `width` is 0 or greater than 64, or not compatible with
    /// `s_r` being a multiple of 64 (debug assertion only).
    pub fn maybe_push(
        &mut self,
        len_after: u64,
        width: u8,
        value: u64,
        appended_popcount: u32,
        popcount_after: u64,
    ) {
        debug_assert!(self.s_r % 64 == 0);
        let l = self.samples.len() as u64;
        let overflow = len_after as i128 - (l as i128) * (self.s_r as i128);
        if overflow < 0 {
            return;
        }
        let overflow = overflow as u64;
        debug_assert!(overflow <= width as u64);

        // Popcount up to (but not including) the boundary: take the
        // popcount before this append, then add back the portion of
        // the newly appended bits that falls before the boundary.
        let popcount_before = popcount_after - appended_popcount as u64;
        let bits_of_new_word_before_boundary = (width as u64 - overflow) as u8;
        let partial = if bits_of_new_word_before_boundary == 0 {
            0
        } else {
            crate::word_ops::rank1_word(value, bits_of_new_word_before_boundary - 1) as u64
        };
        self.samples.push(popcount_before + partial);
    }

    /// The sample at block index `j` (0-based).
    pub fn get(&self, j: u64) -> u64 {
        self.samples[j as usize]
    }

    /// Number of samples currently stored (always `>= 1`).
    pub fn len(&self) -> u64 {
        self.samples.len() as u64
    }

    /// `S_R`, the number of bits per block.
    pub fn block_bits(&self) -> u64 {
        self.s_r
    }
}

#[cfg(test)]
mod tests {
    use super::RankSamples;
    use crate::word_ops::popcount;

    #[test]
    fn accumulates_across_many_small_blocks() {
        // Use a tiny S_R so boundary crossings happen every append.
        let mut rs = RankSamples::new(64);
        let mut total = 0u64;
        let mut len = 0u64;
        for value in [0u64, 0xFF, 0xFF00, 0, u64::MAX] {
            let p = popcount(value);
            total += p as u64;
            len += 64;
            rs.maybe_push(len, 64, value, p, total);
        }
        assert_eq!(rs.get(0), 0);
        assert_eq!(rs.get(1), 0);
        assert_eq!(rs.get(2), 8);
        assert_eq!(rs.get(3), 16);
        assert_eq!(rs.get(4), 16);
        assert_eq!(rs.get(5), 80);
        assert_eq!(rs.len(), 6);
    }

    #[test]
    fn no_push_before_first_boundary() {
        let mut rs = RankSamples::new(1024);
        rs.maybe_push(64, 64, 0xFF, 8, 8);
        assert_eq!(rs.len(), 1);
    }
}
