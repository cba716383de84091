//! Local fallback response generator
//!
//! When the remote generation call does not succeed, the console synthesizes
//! a reply from a small set of fixed templates, each interpolating the
//! original prompt and randomly chosen flavor words. Generation is pure and
//! local; the random source is seedable so tests can pin exact output.
//! Production use is unseeded on purpose: variety is the point.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Audit focus areas interpolated into the first template
const FOCUSES: &[&str] = &[
    "latency",
    "throughput",
    "modularity",
    "test coverage",
    "error handling",
    "caching",
];

/// Action phrases interpolated into the first template
const MODES: &[&str] = &[
    "trace the hot path",
    "map the dependency graph",
    "profile the critical sections",
    "tighten the interface contracts",
];

/// Seedable fallback response generator
#[derive(Debug)]
pub struct FallbackGenerator {
    rng: StdRng,
}

impl FallbackGenerator {
    /// Create a generator with an entropy-seeded random source
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed (for tests)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Synthesize a fallback response for the given prompt
    ///
    /// Always succeeds; picks one of four fixed templates and fills in the
    /// prompt verbatim plus random flavor words.
    pub fn generate(&mut self, prompt: &str) -> String {
        let focus = FOCUSES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("modularity");
        let mode = MODES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("trace the hot path");

        let templates = [
            format!(
                "Audit brief for \"{prompt}\": 1) Assess {focus} hotspots. 2) Plan to {mode}. 3) Ship a prioritized fix list."
            ),
            format!(
                "Engineering read for \"{prompt}\": 1) Map the core modules. 2) Validate boundary contracts. 3) Set a 7-day hardening window."
            ),
            format!(
                "Console insight for \"{prompt}\": 1) Identify primary risks. 2) Translate findings into actions. 3) Mark the next review checkpoint."
            ),
            format!(
                "Implementation note for \"{prompt}\": 1) Define the audit focus. 2) Extract key themes. 3) Deliver concise guidance."
            ),
        ];

        let index = self.rng.gen_range(0..templates.len());
        templates[index].clone()
    }
}

impl Default for FallbackGenerator {
    fn default() -> Self {
        Self::new()
    }
}
