use super::{Simulation, SimulationConfig};
use crate::errors::SimulationError;
use crate::genome::GenomeTemplate;

/// Builder for a [Simulation]. The genome template, `cells`, `resources`
/// and `timeout` are mandatory; the remaining knobs default to a serial,
/// single-stride, non-dormant run.
#[derive(Clone, Debug)]
pub struct Builder {
    pub genome_template: Option<GenomeTemplate>,
    pub cells: Option<usize>,
    pub resources: Option<usize>,
    pub timeout: Option<usize>,
    pub speed: usize,
    pub period: usize,
    pub constitutive: usize,
    pub probability: f64,
    pub dormant: bool,
    pub seed: u64,
    pub threads: usize,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genome_template(mut self, genome_template: GenomeTemplate) -> Self {
        self.genome_template = Some(genome_template);
        self
    }

    pub fn with_cells(mut self, cells: usize) -> Self {
        self.cells = Some(cells);
        self
    }

    pub fn with_resources(mut self, resources: usize) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn with_timeout(mut self, timeout: usize) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_speed(mut self, speed: usize) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    pub fn with_constitutive(mut self, constitutive: usize) -> Self {
        self.constitutive = constitutive;
        self
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    pub fn with_dormant(mut self, dormant: bool) -> Self {
        self.dormant = dormant;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn build(self) -> Result<Simulation, SimulationError> {
        self.try_into()
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            genome_template: None,
            cells: None,
            resources: None,
            timeout: None,
            speed: 1,
            period: 1,
            constitutive: 0,
            probability: 0.0,
            dormant: false,
            seed: 0,
            threads: 1,
        }
    }
}

impl TryFrom<Builder> for Simulation {
    type Error = SimulationError;

    fn try_from(builder: Builder) -> Result<Self, Self::Error> {
        let Some(template) = builder.genome_template else {
            return Err(SimulationError::ConfigMissing("genome"));
        };
        if template.chromosomes.is_empty() {
            return Err(SimulationError::InvalidArgument(
                "genome template has no chromosomes".to_string(),
            ));
        }
        let cells = builder.cells.filter(|&cells| cells > 0);
        let resources = builder.resources.filter(|&resources| resources > 0);
        let timeout = builder.timeout.filter(|&timeout| timeout > 0);
        let (Some(cells), Some(resources), Some(timeout)) = (cells, resources, timeout) else {
            return Err(match (cells, resources) {
                (None, _) => SimulationError::ConfigMissing("cells"),
                (_, None) => SimulationError::ConfigMissing("resources"),
                _ => SimulationError::ConfigMissing("timeout"),
            });
        };
        if builder.speed == 0 {
            return Err(SimulationError::InvalidArgument(
                "speed must be greater than zero".to_string(),
            ));
        }
        if builder.period == 0 {
            return Err(SimulationError::InvalidArgument(
                "period must be greater than zero".to_string(),
            ));
        }
        if builder.threads == 0 {
            return Err(SimulationError::InvalidArgument(
                "threads must be greater than zero".to_string(),
            ));
        }
        Ok(Simulation {
            template,
            config: SimulationConfig {
                cells,
                resources,
                speed: builder.speed,
                timeout: timeout as i64,
                period: builder.period,
                constitutive: builder.constitutive,
                probability: builder.probability,
                dormant: builder.dormant,
                seed: builder.seed,
                threads: builder.threads,
            },
        })
    }
}
