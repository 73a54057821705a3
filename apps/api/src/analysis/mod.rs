//! Resume analysis feature: prompt construction, live invocation,
//! interpretation of free-form model output, and the deterministic fallback.

pub mod fallback;
pub mod handlers;
pub mod interpreter;
pub mod prompts;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// RNG seeded from the input text, so score jitter is spread out but every
/// run over the same input produces the same report.
pub(crate) fn seeded_rng(text: &str) -> StdRng {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    StdRng::seed_from_u64(hasher.finish())
}
