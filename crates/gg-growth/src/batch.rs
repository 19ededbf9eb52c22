//! Many independent runs at once.
//!
//! Each seed gets its own PRNG state and graph; nothing is shared between
//! runs, so results match running [`generate`] per seed.  With the
//! `parallel` feature the runs go to Rayon's thread pool.

use gg_core::Seed;

use crate::{generate, FinalizedGraph, GrowthResult, Settings};

/// One result per seed, in seed order.
pub fn generate_batch(seeds: &[Seed], settings: &Settings) -> Vec<GrowthResult<FinalizedGraph>> {
    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| generate(seed, settings)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(|&seed| generate(seed, settings)).collect()
    }
}
