//! The chromosome is a linear strand of bases with its replication state,
//! per-base origin-firing probabilities and shared genomic annotations.
//!
//! The strand stores one signed integer per base: `-1` while unreplicated,
//! the replication timestamp once a fork (or a firing origin) has passed
//! over it. Entries are write-once; [`Chromosome::replicate`] never
//! overwrites an assigned timestamp.
use crate::errors::SimulationError;
use crate::genome::ChromosomeTemplate;
use std::sync::Arc;

/// Standard deviation, in bases, of the dormant-origin activation bump.
const DORMANT_BUMP_SIGMA: f64 = 10_000.0;

/// A half-open interval `[start, end)` of bases under transcription.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranscriptionRegion {
    pub start: usize,
    pub end: usize,
}

/// A base where an origin is guaranteed to fire once per cell when enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstitutiveOrigin {
    pub base: usize,
}

#[derive(Clone, Debug)]
pub struct Chromosome {
    code: String,
    length: usize,
    strand: Vec<i64>,
    probability_landscape: Vec<f64>,
    transcription_regions: Arc<Vec<TranscriptionRegion>>,
    constitutive_origins: Arc<Vec<ConstitutiveOrigin>>,
    fired_constitutive_origins: Vec<ConstitutiveOrigin>,
    n_replicated_bases: usize,
    n_fired_origins: usize,
}

impl Chromosome {
    pub fn new(
        code: impl Into<String>,
        probability_landscape: Vec<f64>,
        transcription_regions: Arc<Vec<TranscriptionRegion>>,
        constitutive_origins: Arc<Vec<ConstitutiveOrigin>>,
    ) -> Result<Self, SimulationError> {
        let length = probability_landscape.len();
        if length == 0 {
            return Err(SimulationError::InvalidArgument(
                "chromosome length is not a positive number".to_string(),
            ));
        }
        let mut probability_landscape = probability_landscape;
        for probability in probability_landscape.iter_mut() {
            *probability = probability.clamp(0.0, 1.0);
        }
        Ok(Self {
            code: code.into(),
            length,
            strand: vec![-1; length],
            probability_landscape,
            transcription_regions,
            constitutive_origins,
            fired_constitutive_origins: Vec::new(),
            n_replicated_bases: 0,
            n_fired_origins: 0,
        })
    }

    pub fn from_template(template: &ChromosomeTemplate) -> Result<Self, SimulationError> {
        Self::new(
            template.code.clone(),
            template.probability_landscape.as_ref().clone(),
            template.transcription_regions.clone(),
            template.constitutive_origins.clone(),
        )
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn size(&self) -> usize {
        self.length
    }

    pub fn strand(&self) -> &[i64] {
        &self.strand
    }

    pub fn probability_landscape(&self) -> &[f64] {
        &self.probability_landscape
    }

    pub fn transcription_regions(&self) -> &[TranscriptionRegion] {
        &self.transcription_regions
    }

    pub fn constitutive_origins(&self) -> &[ConstitutiveOrigin] {
        &self.constitutive_origins
    }

    pub fn fired_constitutive_origins(&self) -> &[ConstitutiveOrigin] {
        &self.fired_constitutive_origins
    }

    pub fn n_replicated_bases(&self) -> usize {
        self.n_replicated_bases
    }

    pub fn n_fired_origins(&self) -> usize {
        self.n_fired_origins
    }

    pub fn base_is_replicated(&self, base: usize) -> Result<bool, SimulationError> {
        if base >= self.length {
            return Err(SimulationError::OutOfRange {
                base: base as i64,
                length: self.length,
            });
        }
        Ok(self.strand[base] != -1)
    }

    pub fn activation_probability(&self, base: usize) -> Result<f64, SimulationError> {
        if base >= self.length {
            return Err(SimulationError::OutOfRange {
                base: base as i64,
                length: self.length,
            });
        }
        Ok(self.probability_landscape[base])
    }

    /// Adds a Gaussian bump to the firing landscape around `base`, raising
    /// the chance that dormant origins in the neighborhood of a fired
    /// origin activate as backups. The bump is evaluated on the window
    /// `[base - 2σ, base + 2σ)` clipped to the chromosome, and every value
    /// stays capped at 1.
    pub fn set_dormant_activation_probability(
        &mut self,
        base: usize,
    ) -> Result<(), SimulationError> {
        if base >= self.length {
            return Err(SimulationError::OutOfRange {
                base: base as i64,
                length: self.length,
            });
        }
        let c = DORMANT_BUMP_SIGMA;
        let left_base = (base as i64 - 2 * c as i64).max(0) as usize;
        let right_base = (base + 2 * c as usize).min(self.length);
        for current_base in left_base..right_base {
            let offset = current_base as f64 - base as f64;
            let gaussian_value = (-offset.powi(2) / (2.0 * c.powi(2))).exp();
            let probability = &mut self.probability_landscape[current_base];
            *probability = (*probability + gaussian_value).min(1.0);
        }
        Ok(())
    }

    /// Overwrites the whole landscape with a single uniform probability.
    pub fn set_uniform_landscape(&mut self, probability: f64) {
        let probability = probability.clamp(0.0, 1.0);
        self.probability_landscape.fill(probability);
    }

    /// Writes `time` into every unreplicated base walked from `start`
    /// toward `end` inclusive, stepping by the sign of `end - start`.
    ///
    /// Returns `Ok(true)` only for a normal replication: the full
    /// requested span was walked without clamping `end` into the strand
    /// and without touching a base some other fork already replicated. An
    /// already-replicated base other than `start` stops the walk. A
    /// negative `end` is clamped to `0` and still walked, matching the
    /// inverted-walk behavior of the model.
    pub fn replicate(
        &mut self,
        start: i64,
        end: i64,
        time: i64,
    ) -> Result<bool, SimulationError> {
        if start < 0 || start >= self.length as i64 {
            return Err(SimulationError::OutOfRange {
                base: start,
                length: self.length,
            });
        }

        let mut normal_replication = true;
        let mut end = end;
        if end < 0 {
            end = 0;
            normal_replication = false;
        }
        if end >= self.length as i64 {
            end = self.length as i64 - 1;
            normal_replication = false;
        }

        let inverted = end < start;
        let mut base = start;
        loop {
            let index = base as usize;
            if self.strand[index] == -1 {
                self.strand[index] = time;
                self.n_replicated_bases += 1;
            } else if base != start {
                normal_replication = false;
                break;
            }
            if base == end {
                break;
            }
            base += if inverted { -1 } else { 1 };
        }

        Ok(normal_replication)
    }

    pub fn is_replicated(&self) -> bool {
        self.n_replicated_bases == self.length
    }

    pub fn add_fired_origin(&mut self) {
        self.n_fired_origins += 1;
    }

    pub fn add_fired_constitutive_origin(&mut self, origin: ConstitutiveOrigin) {
        self.fired_constitutive_origins.push(origin);
    }
}
