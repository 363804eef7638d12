//! The ensemble driver: runs many independent cells over a shared genome
//! template and collects their finalized strands.
//!
//! Every cell is an isolated, deterministic [CellCycle](crate::cell_cycle::CellCycle);
//! the driver only shares the read-only template across worker threads
//! and joins all cells before returning.
//!
//! Example:
//! ```
//! use redymo::prelude::*;
//!
//! let provider = MemoryDataProvider::new()
//!     .with_chromosome("chr1", vec![0.02; 1_000], vec![], vec![]);
//! let simulation = Simulation::builder()
//!     .with_genome_template(GenomeTemplate::from_provider(&provider).unwrap())
//!     .with_cells(2)
//!     .with_resources(10)
//!     .with_timeout(10_000)
//!     .with_seed(42)
//!     .build()
//!     .unwrap();
//!
//! let results = simulation.call().unwrap();
//! assert_eq!(results.len(), 2);
//! assert!(results.iter().all(|cell| cell.chromosomes[0].strand.iter().all(|&t| t >= 0)));
//! ```
mod builder;

pub use self::builder::Builder as SimulationBuilder;

use crate::cell_cycle::CellCycle;
use crate::chromosome::ConstitutiveOrigin;
use crate::errors::SimulationError;
use crate::genome::GenomeTemplate;
use rayon::prelude::*;
use std::fmt;

/// The per-cell knobs of a run, shared verbatim with every cell.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub cells: usize,
    pub resources: usize,
    pub speed: usize,
    pub timeout: i64,
    pub period: usize,
    pub constitutive: usize,
    pub probability: f64,
    pub dormant: bool,
    pub seed: u64,
    pub threads: usize,
}

/// The finalized state of one chromosome of one cell.
#[derive(Clone, Debug)]
pub struct ChromosomeResult {
    pub code: String,
    pub strand: Vec<i64>,
    pub n_fired_origins: usize,
    pub fired_constitutive_origins: Vec<ConstitutiveOrigin>,
}

/// The outcome of one cell of the ensemble.
#[derive(Clone, Debug)]
pub struct CellResult {
    pub cell_index: usize,
    pub chromosomes: Vec<ChromosomeResult>,
    pub n_collisions: usize,
    pub end_time: i64,
}

pub struct Simulation {
    pub template: GenomeTemplate,
    pub config: SimulationConfig,
}

impl Simulation {
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::new()
    }

    /// Runs all cells over a worker pool of `threads` threads and joins
    /// them. A cell that aborts on a programmer-bug error is dropped from
    /// the ensemble in release builds (and panics in debug builds); all
    /// other cells still complete.
    pub fn call(&self) -> Result<Vec<CellResult>, SimulationError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build()
            .map_err(|error| SimulationError::ThreadPool(error.to_string()))?;

        let cell_results: Vec<Result<CellResult, SimulationError>> = pool.install(|| {
            (0..self.config.cells)
                .into_par_iter()
                .map(|cell_index| {
                    let genome = self.template.instantiate()?;
                    let mut cell = CellCycle::new(genome, self.config.clone(), cell_index);
                    let result = cell.run()?;
                    log::debug!(
                        "cell {}: finished at step {} with {} fired origins and {} conflicts",
                        cell_index,
                        result.end_time,
                        result
                            .chromosomes
                            .iter()
                            .map(|c| c.n_fired_origins)
                            .sum::<usize>(),
                        result.n_collisions,
                    );
                    Ok(result)
                })
                .collect()
        });

        let mut results = Vec::with_capacity(cell_results.len());
        for (cell_index, result) in cell_results.into_iter().enumerate() {
            match result {
                Ok(result) => results.push(result),
                Err(error) => {
                    debug_assert!(false, "cell {} aborted: {}", cell_index, error);
                    log::error!(
                        "cell {}: aborted: {}; dropping it from the ensemble",
                        cell_index,
                        error
                    );
                }
            }
        }
        Ok(results)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cells: 0,
            resources: 0,
            speed: 1,
            timeout: 0,
            period: 1,
            constitutive: 0,
            probability: 0.0,
            dormant: false,
            seed: 0,
            threads: 1,
        }
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "simulation:")?;
        writeln!(f, "  chromosomes: {}", self.template.chromosomes.len())?;
        write!(f, "{}", self.config)
    }
}

impl fmt::Display for SimulationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "simulation_config:")?;
        writeln!(f, "  cells: {}", self.cells)?;
        writeln!(f, "  resources: {}", self.resources)?;
        writeln!(f, "  speed: {}", self.speed)?;
        writeln!(f, "  timeout: {}", self.timeout)?;
        writeln!(f, "  period: {}", self.period)?;
        writeln!(f, "  constitutive: {}", self.constitutive)?;
        writeln!(f, "  probability: {}", self.probability)?;
        writeln!(f, "  dormant: {}", self.dormant)?;
        writeln!(f, "  seed: {}", self.seed)?;
        writeln!(f, "  threads: {}", self.threads)
    }
}
