//! Randomness, kept in two separate channels:
//! - `SimRng`: the stream behind rule tie-breaks and brush sparsification
//! - `shade_hash`: a pure function of (x, y, seed) used only for render texture

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Simulation random stream. Seed it for reproducible runs.
#[derive(Clone, Debug)]
pub struct SimRng {
    inner: ChaCha8Rng,
}

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed from the host: `Math.random()` in the browser, the clock elsewhere.
    pub fn from_host_entropy() -> Self {
        Self::seeded(host_seed())
    }

    /// Uniform in [0, 1).
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// -1, 0 or +1 as the sign of `unit() - 0.5`.
    ///
    /// 0 only comes up when the draw is exactly 0.5 (probability 2^-53).
    #[inline]
    pub fn random_sign(&mut self) -> i32 {
        sign_of_offset(self.unit())
    }

    /// True with probability `p`, via `unit() > 1 - p`.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.unit() > 1.0 - p
    }
}

#[inline]
pub(crate) fn sign_of_offset(u: f64) -> i32 {
    let d = u - 0.5;
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(target_arch = "wasm32")]
fn host_seed() -> u64 {
    let hi = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    let lo = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    (hi << 32) | lo
}

#[cfg(not(target_arch = "wasm32"))]
fn host_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED_5A4D)
}

/// Deterministic per-cell value in [0, 1). Never touches `SimRng`.
#[inline]
pub fn shade_hash(x: u32, y: u32, seed: u32) -> f64 {
    let mut n = x
        .wrapping_mul(374_761_393)
        .wrapping_add(y.wrapping_mul(668_265_263))
        .wrapping_add(seed.wrapping_mul(0x7F4A_7C15)) as i32;
    n = (n ^ (n >> 13)).wrapping_mul(1_274_126_177);
    let out = (n ^ (n >> 16)) as u32;
    out as f64 / 4_294_967_296.0
}
