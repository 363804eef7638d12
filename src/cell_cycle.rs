//! The per-cell replication engine: a discrete-time loop that fires
//! origins probabilistically along every chromosome, advances the
//! attached forks, resolves replication-transcription conflicts and stops
//! on completion or timeout.
//!
//! A cell owns all of its mutable state (genome replica, fork pool, rng);
//! only the genome template's annotations are shared with other cells.
//! Given its seed a cell is fully deterministic: the scan visits
//! chromosomes in declaration order and bases in ascending order, and the
//! single [SmallRng](rand::rngs::SmallRng) is seeded `seed ^ cell_index`.
use crate::chromosome::ConstitutiveOrigin;
use crate::errors::SimulationError;
use crate::fork_manager::ForkManager;
use crate::genome::Genome;
use crate::genomic_location::GenomicLocation;
use crate::simulation::{CellResult, ChromosomeResult, SimulationConfig};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub struct CellCycle {
    cell_index: usize,
    genome: Genome,
    fork_manager: ForkManager,
    rng: SmallRng,
    config: SimulationConfig,
    time: i64,
    n_conflicts: usize,
}

impl CellCycle {
    pub fn new(mut genome: Genome, config: SimulationConfig, cell_index: usize) -> Self {
        if config.probability > 0.0 {
            for index in 0..genome.len() {
                genome
                    .chromosome_mut(index)
                    .set_uniform_landscape(config.probability);
            }
        }
        Self {
            cell_index,
            genome,
            fork_manager: ForkManager::new(config.resources, config.speed),
            rng: SmallRng::seed_from_u64(config.seed ^ cell_index as u64),
            config,
            time: 0,
            n_conflicts: 0,
        }
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    pub fn fork_manager(&self) -> &ForkManager {
        &self.fork_manager
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn n_conflicts(&self) -> usize {
        self.n_conflicts
    }

    /// Runs the cell to completion or timeout and returns its finalized
    /// strands and counters.
    pub fn run(&mut self) -> Result<CellResult, SimulationError> {
        self.fire_constitutive_origins()?;
        loop {
            self.fire_origins()?;
            self.fork_manager
                .advance_attached_forks(&mut self.genome, self.time)?;
            self.n_conflicts += self.fork_manager.check_replication_transcription_conflicts(
                &self.genome,
                self.time,
                self.config.period,
            );
            log::trace!(
                "cell {}: step {}: {}/{} bases replicated, {}/{} forks free",
                self.cell_index,
                self.time,
                self.genome.n_replicated_bases(),
                self.genome.size(),
                self.fork_manager.free_forks(),
                self.fork_manager.total_forks(),
            );
            if self.genome.is_replicated() {
                break;
            }
            self.time += 1;
            if self.time >= self.config.timeout {
                break;
            }
        }
        Ok(self.result())
    }

    /// Pre-fires the configured number of randomly selected constitutive
    /// origins genome-wide, before the first scan step.
    fn fire_constitutive_origins(&mut self) -> Result<(), SimulationError> {
        if self.config.constitutive == 0 {
            return Ok(());
        }
        let mut candidates: Vec<(usize, ConstitutiveOrigin)> = Vec::new();
        for (index, chromosome) in self.genome.chromosomes().iter().enumerate() {
            for origin in chromosome.constitutive_origins() {
                candidates.push((index, *origin));
            }
        }
        let selected: Vec<(usize, ConstitutiveOrigin)> = candidates
            .choose_multiple(&mut self.rng, self.config.constitutive)
            .copied()
            .collect();
        for (chromosome_index, origin) in selected {
            if self.fork_manager.free_forks() == 0 {
                break;
            }
            let location = GenomicLocation::new(origin.base, chromosome_index, &self.genome)?;
            if location.is_replicated(&self.genome)? {
                continue;
            }
            let chromosome = self.genome.chromosome_mut(chromosome_index);
            chromosome.replicate(origin.base as i64, origin.base as i64, self.time)?;
            chromosome.add_fired_origin();
            chromosome.add_fired_constitutive_origin(origin);
            self.attach_bidirectional_forks(location)?;
        }
        Ok(())
    }

    /// Scans every unreplicated base for origin firing. A firing origin
    /// stamps its own base, attaches a fork pair and, with dormant origins
    /// enabled, boosts the landscape around itself. The whole firing is
    /// skipped while the pool has no free fork.
    fn fire_origins(&mut self) -> Result<(), SimulationError> {
        for chromosome_index in 0..self.genome.len() {
            for base in 0..self.genome.chromosome(chromosome_index).size() {
                if self
                    .genome
                    .chromosome(chromosome_index)
                    .base_is_replicated(base)?
                {
                    continue;
                }
                let location = GenomicLocation::new(base, chromosome_index, &self.genome)?;
                if !location.will_activate(&self.genome, self.config.period, &mut self.rng)? {
                    continue;
                }
                if self.fork_manager.free_forks() == 0 {
                    continue;
                }
                self.fire_origin(location)?;
            }
        }
        Ok(())
    }

    fn fire_origin(&mut self, location: GenomicLocation) -> Result<(), SimulationError> {
        let chromosome = self.genome.chromosome_mut(location.chromosome);
        chromosome.replicate(location.base as i64, location.base as i64, self.time)?;
        chromosome.add_fired_origin();
        if self.config.dormant {
            chromosome.set_dormant_activation_probability(location.base)?;
        }
        self.attach_bidirectional_forks(location)
    }

    /// Attaches a `+1` and a `-1` fork at `location`, settling for one
    /// fork when the pool runs out halfway.
    fn attach_bidirectional_forks(
        &mut self,
        location: GenomicLocation,
    ) -> Result<(), SimulationError> {
        for direction in [1i8, -1] {
            match self.fork_manager.attach_fork(location, direction, self.time) {
                Ok(()) => {}
                Err(SimulationError::ExhaustedPool) => break,
                Err(error) => return Err(error),
            }
        }
        Ok(())
    }

    fn result(&self) -> CellResult {
        CellResult {
            cell_index: self.cell_index,
            chromosomes: self
                .genome
                .chromosomes()
                .iter()
                .map(|chromosome| ChromosomeResult {
                    code: chromosome.code().to_string(),
                    strand: chromosome.strand().to_vec(),
                    n_fired_origins: chromosome.n_fired_origins(),
                    fired_constitutive_origins: chromosome.fired_constitutive_origins().to_vec(),
                })
                .collect(),
            n_collisions: self.n_conflicts,
            end_time: self.time,
        }
    }
}
