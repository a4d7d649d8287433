use super::source::RandomSource;

/// Modulus, the Mersenne prime 2^31 - 1.
pub const MODULUS: u32 = 2_147_483_647;
/// Multiplier of the "minimal standard" generator.
pub const MULTIPLIER: u32 = 16_807;

/// Park–Miller minimal standard multiplicative congruential generator.
///
/// `state = state * 16807 mod (2^31 - 1)`, evaluated in 64-bit so the
/// product never wraps. Every value returned by [`RandomSource::next_f64`]
/// is `state / (2^31 - 1)`, which lies in (0, 1).
///
/// [`ParkMiller::wrapping`] instead truncates the product to 32 bits before
/// the reduction. That stream agrees for two draws and then drifts away from
/// the minimal standard, and exists only to replay runs made with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkMiller {
    current: u32,
    wrapping: bool,
}

impl ParkMiller {
    /// Generator seeded with 1.
    pub fn new() -> ParkMiller {
        ParkMiller { current: 1, wrapping: false }
    }

    /// Generator seeded with 1 whose multiply wraps at 32 bits.
    pub fn wrapping() -> ParkMiller {
        ParkMiller { current: 1, wrapping: true }
    }

    /// Seeds are reduced modulo 2^31 - 1. Zero is a fixed point of the
    /// recurrence, so a seed that reduces to zero becomes 1.
    pub fn with_seed(seed: u32) -> ParkMiller {
        let current = match seed % MODULUS {
            0 => 1,
            s => s,
        };
        ParkMiller { current, wrapping: false }
    }

    /// Same seed, with the 32-bit wrapping multiply switched on.
    pub fn into_wrapping(self) -> ParkMiller {
        ParkMiller { wrapping: true, ..self }
    }

    pub fn is_wrapping(&self) -> bool {
        self.wrapping
    }

    /// Current 31-bit state.
    pub fn state(&self) -> u32 {
        self.current
    }

    /// Advances the generator and returns the new raw state.
    pub fn next_u31(&mut self) -> u32 {
        self.current = if self.wrapping {
            self.current.wrapping_mul(MULTIPLIER) % MODULUS
        } else {
            let next = (u64::from(self.current) * u64::from(MULTIPLIER)) % u64::from(MODULUS);
            // always < 2^31
            next as u32
        };
        self.current
    }
}

impl Default for ParkMiller {
    fn default() -> Self {
        ParkMiller::new()
    }
}

impl RandomSource for ParkMiller {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u31()) / f64::from(MODULUS)
    }
}
