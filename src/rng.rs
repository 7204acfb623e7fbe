use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Injected source for every random decision the engine makes (IV rolls,
/// nature selection, accuracy, critical hits, damage variance). Routing all
/// of it through one trait keeps battle outcomes reproducible under test.
///
/// The `reason` string labels what each draw was consumed for, which makes
/// scripted test sequences much easier to debug.
pub trait RandomSource {
    /// Uniform roll in 1..=100. Accuracy checks compare this against a
    /// move's accuracy directly.
    fn percent(&mut self, reason: &str) -> u8;

    /// Uniform draw in [0.0, 1.0]. Feeds the triangular IV sampler, the
    /// critical-hit check, and the damage variance factor.
    fn unit(&mut self, reason: &str) -> f32;
}

/// Entropy-backed source for real play. `seeded` gives a reproducible
/// stream, which the demo binary uses so its transcript is stable.
#[derive(Debug, Clone)]
pub struct EntropyRng {
    rng: StdRng,
}

impl EntropyRng {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRng {
    fn percent(&mut self, _reason: &str) -> u8 {
        self.rng.random_range(1..=100)
    }

    fn unit(&mut self, _reason: &str) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Scripted source for tests: hand it the exact rolls to produce, in order.
/// Panics with the consumption reason when a script runs dry, so a test
/// that under-provisions its rolls fails loudly at the draw that starved.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    percents: Vec<u8>,
    percent_index: usize,
    units: Vec<f32>,
    unit_index: usize,
}

impl ScriptedRng {
    pub fn new(percents: Vec<u8>, units: Vec<f32>) -> Self {
        Self {
            percents,
            percent_index: 0,
            units,
            unit_index: 0,
        }
    }

    /// True once every scripted value has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.percent_index >= self.percents.len() && self.unit_index >= self.units.len()
    }
}

impl RandomSource for ScriptedRng {
    fn percent(&mut self, reason: &str) -> u8 {
        if self.percent_index >= self.percents.len() {
            panic!(
                "ScriptedRng exhausted! Tried to get a percent roll for: '{}'. Need more scripted values.",
                reason
            );
        }
        let outcome = self.percents[self.percent_index];

        #[cfg(test)]
        println!("[RNG] Consumed percent {} for: {}", outcome, reason);

        self.percent_index += 1;
        outcome
    }

    fn unit(&mut self, reason: &str) -> f32 {
        if self.unit_index >= self.units.len() {
            panic!(
                "ScriptedRng exhausted! Tried to get a unit draw for: '{}'. Need more scripted values.",
                reason
            );
        }
        let outcome = self.units[self.unit_index];

        #[cfg(test)]
        println!("[RNG] Consumed unit {} for: {}", outcome, reason);

        self.unit_index += 1;
        outcome
    }
}
