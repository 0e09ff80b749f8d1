//! Seeded random stream carried inside `MatchState`.
//!
//! Serializes as `(seed, word_pos)` so a snapshot restores the exact stream.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform in [lo, hi). Degenerate ranges return `lo`.
    #[inline]
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi > lo {
            self.rng.gen_range(lo..hi)
        } else {
            lo
        }
    }

    /// Uniform in [-half, half)
    #[inline]
    pub fn symmetric(&mut self, half: f32) -> f32 {
        self.range(-half, half)
    }

    #[inline]
    pub fn unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    #[inline]
    pub fn chance(&mut self, p: f32) -> bool {
        self.unit() < p.clamp(0.0, 1.0)
    }

    /// Inclusive integer range
    #[inline]
    pub fn int_inclusive(&mut self, lo: u8, hi: u8) -> u8 {
        if hi > lo {
            self.rng.gen_range(lo..=hi)
        } else {
            lo
        }
    }

    fn word_pos(&self) -> u64 {
        // ChaCha8 word positions stay far below 2^64 within a match
        self.rng.get_word_pos() as u64
    }
}

impl RngCore for SimRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

impl PartialEq for SimRng {
    fn eq(&self, other: &Self) -> bool {
        self.seed == other.seed && self.rng.get_word_pos() == other.rng.get_word_pos()
    }
}

#[derive(Serialize, Deserialize)]
struct SimRngSnapshot {
    seed: u64,
    word_pos: u64,
}

impl Serialize for SimRng {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SimRngSnapshot {
            seed: self.seed,
            word_pos: self.word_pos(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SimRng {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snap = SimRngSnapshot::deserialize(deserializer)?;
        let mut rng = ChaCha8Rng::seed_from_u64(snap.seed);
        rng.set_word_pos(snap.word_pos as u128);
        Ok(Self { seed: snap.seed, rng })
    }
}
