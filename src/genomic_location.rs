//! A transient cursor over one base of one chromosome, used by the engine
//! while scanning for origin firing and attaching forks. Locations are
//! index-plus-handle values: they name a chromosome inside the cell's
//! [Genome](crate::genome::Genome) and are created and dropped within a
//! single step.
use crate::chromosome::ConstitutiveOrigin;
use crate::errors::SimulationError;
use crate::genome::Genome;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenomicLocation {
    pub chromosome: usize,
    pub base: usize,
}

impl GenomicLocation {
    pub fn new(
        base: usize,
        chromosome: usize,
        genome: &Genome,
    ) -> Result<Self, SimulationError> {
        if base >= genome.chromosome(chromosome).size() {
            return Err(SimulationError::InvalidArgument(format!(
                "base {} is outside chromosome {} of length {}",
                base,
                genome.chromosome(chromosome).code(),
                genome.chromosome(chromosome).size()
            )));
        }
        Ok(Self { chromosome, base })
    }

    pub fn is_replicated(&self, genome: &Genome) -> Result<bool, SimulationError> {
        genome.chromosome(self.chromosome).base_is_replicated(self.base)
    }

    /// Draws the firing decision for this base. The landscape is
    /// parameterized over a reference period, so the per-step rate is the
    /// landscape value divided by `period`; the origin fires iff a uniform
    /// `[0, 1)` sample falls strictly below that rate.
    pub fn will_activate<R: Rng>(
        &self,
        genome: &Genome,
        period: usize,
        rng: &mut R,
    ) -> Result<bool, SimulationError> {
        let probability = genome
            .chromosome(self.chromosome)
            .activation_probability(self.base)?;
        Ok(rng.gen::<f64>() < probability / period as f64)
    }

    /// The nearest constitutive origin within `max_distance` bases that
    /// has not fired yet this cell, if any.
    pub fn constitutive_origin_near(
        &self,
        genome: &Genome,
        max_distance: usize,
    ) -> Option<ConstitutiveOrigin> {
        let chromosome = genome.chromosome(self.chromosome);
        chromosome
            .constitutive_origins()
            .iter()
            .filter(|origin| !chromosome.fired_constitutive_origins().contains(*origin))
            .map(|origin| (origin, origin.base.abs_diff(self.base)))
            .filter(|(_, distance)| *distance <= max_distance)
            .min_by_key(|(_, distance)| *distance)
            .map(|(origin, _)| *origin)
    }
}
