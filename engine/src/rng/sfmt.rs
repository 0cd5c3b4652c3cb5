//! SIMD-oriented Fast Mersenne Twister (SFMT-19937)
//!
//! Generation 7 draws all of its game randomness from this generator. The
//! state is 624 32-bit words viewed as 156 128-bit lanes; once every word has
//! been handed out the whole block is regenerated before the next draw.
//!
//! The recurrence is written over plain `u32` lanes so the output is
//! identical on every platform.

const N: usize = 156;
const N32: usize = N * 4;
const POS1: usize = 122;
const SL1: u32 = 18;
const SL2: u32 = 1;
const SR1: u32 = 11;
const SR2: u32 = 1;
const MASK: [u32; 4] = [0xDFFF_FFEF, 0xDDFE_CB7F, 0xBFFA_FFFF, 0xBFFF_FFF6];
const PARITY: [u32; 4] = [0x0000_0001, 0x0000_0000, 0x0000_0000, 0x13C9_E684];

/// SFMT-19937 generator
///
/// # Example
/// ```
/// use wild_finder_core::rng::Sfmt;
///
/// let mut sfmt = Sfmt::new(1234);
/// assert_eq!(sfmt.next_u32(), 3440181298);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sfmt {
    state: [u32; N32],
    index: usize,
}

impl Sfmt {
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; N32];
        state[0] = seed;
        for i in 1..N32 {
            let prev = state[i - 1];
            state[i] = 0x6C07_8965u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }

        let mut sfmt = Self { state, index: N32 };
        sfmt.certify_period();
        sfmt
    }

    /// Skip `advances` 64-bit draws
    pub fn advance(&mut self, advances: u32) {
        let mut words = self.index + 2 * advances as usize;
        while words >= N32 {
            self.shuffle();
            words -= N32;
        }
        self.index = words;
    }

    /// Merge the next two words into one 64-bit draw, low word first
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    /// Return the word at the current index and step past it
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N32 {
            self.shuffle();
        }
        let value = self.state[self.index];
        self.index += 1;
        value
    }

    /// Words left before the next regeneration
    pub fn remaining(&self) -> usize {
        N32 - self.index
    }

    fn certify_period(&mut self) {
        let mut inner = 0u32;
        for (word, parity) in self.state.iter().zip(PARITY) {
            inner ^= word & parity;
        }
        let mut shift = 16;
        while shift > 0 {
            inner ^= inner >> shift;
            shift >>= 1;
        }
        if inner & 1 == 1 {
            return;
        }

        for (i, parity) in PARITY.iter().enumerate() {
            let mut work = 1u32;
            for _ in 0..32 {
                if work & parity != 0 {
                    self.state[i] ^= work;
                    return;
                }
                work <<= 1;
            }
        }
    }

    /// Regenerate all 624 words
    fn shuffle(&mut self) {
        let mut r1 = N - 2;
        let mut r2 = N - 1;
        for i in 0..N {
            let j = if i < N - POS1 { i + POS1 } else { i + POS1 - N };
            let lane = recursion(
                self.lane(i),
                self.lane(j),
                self.lane(r1),
                self.lane(r2),
            );
            self.state[i * 4..i * 4 + 4].copy_from_slice(&lane);
            r1 = r2;
            r2 = i;
        }
        self.index = 0;
    }

    fn lane(&self, i: usize) -> [u32; 4] {
        [
            self.state[i * 4],
            self.state[i * 4 + 1],
            self.state[i * 4 + 2],
            self.state[i * 4 + 3],
        ]
    }
}

fn recursion(a: [u32; 4], b: [u32; 4], c: [u32; 4], d: [u32; 4]) -> [u32; 4] {
    let x = shift_left_128(a, SL2 * 8);
    let y = shift_right_128(c, SR2 * 8);
    let mut out = [0u32; 4];
    for k in 0..4 {
        out[k] = a[k] ^ x[k] ^ ((b[k] >> SR1) & MASK[k]) ^ y[k] ^ (d[k] << SL1);
    }
    out
}

fn split(lane: [u32; 4]) -> (u64, u64) {
    let high = (u64::from(lane[3]) << 32) | u64::from(lane[2]);
    let low = (u64::from(lane[1]) << 32) | u64::from(lane[0]);
    (high, low)
}

fn join(high: u64, low: u64) -> [u32; 4] {
    [low as u32, (low >> 32) as u32, high as u32, (high >> 32) as u32]
}

fn shift_left_128(lane: [u32; 4], bits: u32) -> [u32; 4] {
    let (high, low) = split(lane);
    join((high << bits) | (low >> (64 - bits)), low << bits)
}

fn shift_right_128(lane: [u32; 4], bits: u32) -> [u32; 4] {
    let (high, low) = split(lane);
    join(high >> bits, (low >> bits) | (high << (64 - bits)))
}
