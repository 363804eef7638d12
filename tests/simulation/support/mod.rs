#[allow(unused_imports)]
pub use rand::rngs::SmallRng;
#[allow(unused_imports)]
pub use rand::SeedableRng;
#[allow(unused_imports)]
pub use redymo::prelude::*;
use std::sync::Arc;

/// Mirrors the reference testing provider: a uniform landscape of
/// `1 / (size + 1)`, `size / 4` copies of the transcription region
/// `[0, 10)` and a single constitutive origin at base 70.
#[allow(dead_code)]
pub fn testing_provider(size: usize) -> MemoryDataProvider {
    MemoryDataProvider::new().with_chromosome(
        "1",
        vec![1.0 / (size as f64 + 1.0); size],
        vec![TranscriptionRegion { start: 0, end: 10 }; size / 4],
        vec![ConstitutiveOrigin { base: 70 }],
    )
}

#[allow(dead_code)]
pub fn create_chromosome(size: usize, code: &str) -> Chromosome {
    Chromosome::new(
        code,
        vec![1.0 / (size as f64 + 1.0); size],
        Arc::new(vec![TranscriptionRegion { start: 0, end: 10 }; size / 4]),
        Arc::new(vec![ConstitutiveOrigin { base: 70 }]),
    )
    .unwrap()
}

/// A bare chromosome: given landscape, no annotations.
#[allow(dead_code)]
pub fn bare_chromosome(landscape: Vec<f64>, code: &str) -> Chromosome {
    Chromosome::new(code, landscape, Arc::new(vec![]), Arc::new(vec![])).unwrap()
}

/// All-zero landscape with probability-1 spikes at the given bases.
#[allow(dead_code)]
pub fn spiked_landscape(length: usize, spikes: &[usize]) -> Vec<f64> {
    let mut landscape = vec![0.0; length];
    for &spike in spikes {
        landscape[spike] = 1.0;
    }
    landscape
}

/// A single-cell configuration for driving [CellCycle] directly.
#[allow(dead_code)]
pub fn cell_config(resources: usize, timeout: usize) -> SimulationConfig {
    SimulationConfig {
        cells: 1,
        resources,
        speed: 1,
        timeout: timeout as i64,
        period: 1,
        constitutive: 0,
        probability: 0.0,
        dormant: false,
        seed: 0,
        threads: 1,
    }
}
