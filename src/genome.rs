//! The genome is the ordered collection of [Chromosomes](Chromosome) a
//! single cell replicates, plus the shared immutable template every cell
//! of an ensemble instantiates its private copy from.
use crate::chromosome::{Chromosome, ConstitutiveOrigin, TranscriptionRegion};
use crate::data_provider::DataProvider;
use crate::errors::SimulationError;
use crate::genomic_location::GenomicLocation;
use rand::Rng;
use std::sync::Arc;

/// The read-only facts of one chromosome, shared across all cells.
///
/// The probability landscape is a template: every cell copies it into its
/// private chromosome, since dormant-origin boosts mutate it per cell.
/// Transcription regions and constitutive origins are never mutated and
/// are shared by reference count.
#[derive(Clone, Debug)]
pub struct ChromosomeTemplate {
    pub code: String,
    pub length: usize,
    pub probability_landscape: Arc<Vec<f64>>,
    pub transcription_regions: Arc<Vec<TranscriptionRegion>>,
    pub constitutive_origins: Arc<Vec<ConstitutiveOrigin>>,
}

/// The shared immutable genome inputs of a whole ensemble.
#[derive(Clone, Debug, Default)]
pub struct GenomeTemplate {
    pub chromosomes: Vec<ChromosomeTemplate>,
}

impl GenomeTemplate {
    /// Loads every chromosome the provider lists, in declaration order.
    pub fn from_provider(provider: &impl DataProvider) -> Result<Self, SimulationError> {
        let mut chromosomes = Vec::new();
        for code in provider.codes() {
            let length = provider.length(&code)?;
            let probability_landscape = provider.probability_landscape(&code)?;
            if probability_landscape.len() != length {
                return Err(SimulationError::InvalidArgument(format!(
                    "chromosome {}: landscape has {} entries for length {}",
                    code,
                    probability_landscape.len(),
                    length
                )));
            }
            chromosomes.push(ChromosomeTemplate {
                length,
                probability_landscape: Arc::new(probability_landscape),
                transcription_regions: provider.transcription_regions(&code)?,
                constitutive_origins: provider.constitutive_origins(&code)?,
                code,
            });
        }
        Ok(Self { chromosomes })
    }

    /// Builds a private, fully unreplicated genome for one cell.
    pub fn instantiate(&self) -> Result<Genome, SimulationError> {
        let chromosomes = self
            .chromosomes
            .iter()
            .map(Chromosome::from_template)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Genome::new(chromosomes))
    }
}

#[derive(Clone, Debug)]
pub struct Genome {
    chromosomes: Vec<Chromosome>,
}

impl Genome {
    pub fn new(chromosomes: Vec<Chromosome>) -> Self {
        Self { chromosomes }
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn chromosome(&self, index: usize) -> &Chromosome {
        &self.chromosomes[index]
    }

    pub fn chromosome_mut(&mut self, index: usize) -> &mut Chromosome {
        &mut self.chromosomes[index]
    }

    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    pub fn size(&self) -> usize {
        self.chromosomes.iter().map(|c| c.size()).sum()
    }

    pub fn n_replicated_bases(&self) -> usize {
        self.chromosomes.iter().map(|c| c.n_replicated_bases()).sum()
    }

    pub fn is_replicated(&self) -> bool {
        self.chromosomes.iter().all(|c| c.is_replicated())
    }

    /// A uniform-random location: chromosomes are weighted by size, the
    /// base is uniform within the chosen chromosome.
    pub fn random_location<R: Rng>(&self, rng: &mut R) -> GenomicLocation {
        let mut offset = rng.gen_range(0..self.size());
        for (index, chromosome) in self.chromosomes.iter().enumerate() {
            if offset < chromosome.size() {
                return GenomicLocation {
                    chromosome: index,
                    base: offset,
                };
            }
            offset -= chromosome.size();
        }
        unreachable!("offset drawn within the genome total size")
    }
}
