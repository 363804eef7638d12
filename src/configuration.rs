//! Run parameters, assembled from command-line options and an optional
//! YAML configuration file.
//!
//! The file has a `simulation: <mode>` top-level entry and a `parameters:`
//! map mirroring [Parameters]. It is applied after the command line, so
//! file values override command-line values; the `--dormant` flag is the
//! one exception and always reflects the command line.
use crate::errors::SimulationError;
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Default)]
#[command(name = "redymo")]
#[command(about = "Stochastic dynamic model simulator of eukaryotic DNA replication")]
pub struct Cli {
    /// Number of independent cells to simulate
    #[arg(short, long)]
    pub cells: Option<usize>,

    /// Organism whose genome data to load
    #[arg(short, long)]
    pub organism: Option<String>,

    /// Number of replication forks available to each cell
    #[arg(short, long)]
    pub resources: Option<usize>,

    /// Bases each fork replicates per step
    #[arg(short, long)]
    pub speed: Option<usize>,

    /// Maximum number of steps per cell
    #[arg(short = 'T', long)]
    pub timeout: Option<usize>,

    /// Transcription period, also the landscape reference period
    #[arg(short = 'P', long)]
    pub period: Option<usize>,

    /// Number of constitutive origins to pre-fire per cell
    #[arg(short = 'k', long)]
    pub constitutive: Option<usize>,

    /// Directory holding the organism data
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Uniform firing probability overriding the landscape (0 disables)
    #[arg(short = 'p', long)]
    pub probability: Option<f64>,

    /// Output directory
    #[arg(short = 'O', long)]
    pub output: Option<PathBuf>,

    /// Number of worker threads
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Base random seed; each cell derives its own from it
    #[arg(short = 'x', long)]
    pub seed: Option<u64>,

    /// Name of this run, used as the output subdirectory
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// YAML configuration file, applied over the command-line values
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Enable dormant-origin activation boosting
    #[arg(long)]
    pub dormant: bool,

    /// Print a parameter summary before running
    #[arg(long)]
    pub summary: bool,

    /// Deprecated, ignored
    #[arg(long)]
    pub gpu: bool,
}

/// The full parameter record of a run.
#[derive(Clone, Debug)]
pub struct Parameters {
    pub cells: usize,
    pub organism: String,
    pub resources: usize,
    pub timeout: usize,
    pub speed: usize,
    pub dormant: bool,
    pub name: String,
    pub seed: u64,
    pub period: usize,
    pub constitutive: usize,
    pub data_dir: PathBuf,
    pub probability: f64,
    pub output: PathBuf,
    pub threads: usize,
    pub mode: String,
    pub evolution: EvolutionParameters,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            cells: 0,
            organism: String::new(),
            resources: 0,
            timeout: 0,
            speed: 1,
            dormant: false,
            name: String::new(),
            seed: 0,
            period: 1,
            constitutive: 0,
            data_dir: PathBuf::from("data"),
            probability: 0.0,
            output: PathBuf::from("output"),
            threads: 1,
            mode: "basic".to_string(),
            evolution: EvolutionParameters::default(),
        }
    }
}

impl Parameters {
    /// Builds the parameter record: defaults, then command line, then the
    /// configuration file when one is given.
    pub fn from_cli(cli: &Cli) -> Result<Self, SimulationError> {
        let mut parameters = Self::default();
        if let Some(cells) = cli.cells {
            parameters.cells = cells;
        }
        if let Some(organism) = &cli.organism {
            parameters.organism = organism.clone();
        }
        if let Some(resources) = cli.resources {
            parameters.resources = resources;
        }
        if let Some(speed) = cli.speed {
            parameters.speed = speed;
        }
        if let Some(timeout) = cli.timeout {
            parameters.timeout = timeout;
        }
        if let Some(period) = cli.period {
            parameters.period = period;
        }
        if let Some(constitutive) = cli.constitutive {
            parameters.constitutive = constitutive;
        }
        if let Some(data_dir) = &cli.data_dir {
            parameters.data_dir = data_dir.clone();
        }
        if let Some(probability) = cli.probability {
            parameters.probability = probability;
        }
        if let Some(output) = &cli.output {
            parameters.output = output.clone();
        }
        if let Some(threads) = cli.threads {
            parameters.threads = threads;
        }
        if let Some(seed) = cli.seed {
            parameters.seed = seed;
        }
        if let Some(name) = &cli.name {
            parameters.name = name.clone();
        }

        if let Some(path) = &cli.config {
            let file = ConfigFile::load(path)?;
            parameters.mode = file.simulation;
            file.parameters.apply_to(&mut parameters);
        }

        // The flag always wins, even over a configuration file.
        parameters.dormant = cli.dormant;

        Ok(parameters)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.cells == 0 {
            return Err(SimulationError::ConfigMissing("cells"));
        }
        if self.organism.is_empty() {
            return Err(SimulationError::ConfigMissing("organism"));
        }
        if self.resources == 0 {
            return Err(SimulationError::ConfigMissing("resources"));
        }
        if self.timeout == 0 {
            return Err(SimulationError::ConfigMissing("timeout"));
        }
        Ok(())
    }

    pub fn print_summary(&self) {
        println!();
        println!("Parameter summary ================================================");
        println!("Number of cells         : {}", self.cells);
        println!("Organism                : {}", self.organism);
        println!("Number of forks         : {}", self.resources);
        println!("Steps per iteration     : {}", self.speed);
        println!("Max iterations          : {}", self.timeout);
        println!("Use dormant origins     : {}", if self.dormant { "Yes" } else { "No" });
        println!("Transcription period    : {}", self.period);
        println!("Use constitutive origins: {}", self.constitutive);
        println!("Data directory          : {}", self.data_dir.display());
        if self.probability != 0.0 {
            println!("Uniform probability     : {}", self.probability);
        }
        println!("Output directory        : {}", self.output.display());
        println!("Thread count            : {}", self.threads);
        println!("Random seed             : {}", self.seed);
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    simulation: String,
    #[serde(default)]
    parameters: ParametersPatch,
}

impl ConfigFile {
    fn load(path: &Path) -> Result<Self, SimulationError> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|error| SimulationError::Parse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })
    }
}

/// The `parameters:` map of a configuration file; only present keys
/// overwrite the record built from the command line.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ParametersPatch {
    cells: Option<usize>,
    organism: Option<String>,
    resources: Option<usize>,
    timeout: Option<usize>,
    speed: Option<usize>,
    dormant: Option<bool>,
    name: Option<String>,
    seed: Option<u64>,
    period: Option<usize>,
    constitutive: Option<usize>,
    data_dir: Option<PathBuf>,
    probability: Option<f64>,
    output: Option<PathBuf>,
    threads: Option<usize>,
    evolution: Option<EvolutionParameters>,
}

impl ParametersPatch {
    fn apply_to(self, parameters: &mut Parameters) {
        if let Some(cells) = self.cells {
            parameters.cells = cells;
        }
        if let Some(organism) = self.organism {
            parameters.organism = organism;
        }
        if let Some(resources) = self.resources {
            parameters.resources = resources;
        }
        if let Some(timeout) = self.timeout {
            parameters.timeout = timeout;
        }
        if let Some(speed) = self.speed {
            parameters.speed = speed;
        }
        if let Some(dormant) = self.dormant {
            parameters.dormant = dormant;
        }
        if let Some(name) = self.name {
            parameters.name = name;
        }
        if let Some(seed) = self.seed {
            parameters.seed = seed;
        }
        if let Some(period) = self.period {
            parameters.period = period;
        }
        if let Some(constitutive) = self.constitutive {
            parameters.constitutive = constitutive;
        }
        if let Some(data_dir) = self.data_dir {
            parameters.data_dir = data_dir;
        }
        if let Some(probability) = self.probability {
            parameters.probability = probability;
        }
        if let Some(output) = self.output {
            parameters.output = output;
        }
        if let Some(threads) = self.threads {
            parameters.threads = threads;
        }
        if let Some(evolution) = self.evolution {
            parameters.evolution = evolution;
        }
    }
}

/// Parameters of the evolutionary search wrapper. They are parsed for
/// completeness of the record; nothing in this crate consumes them.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct EvolutionParameters {
    pub population: u64,
    pub generations: u64,
    pub survivors: u64,
    pub mutations: MutationParameters,
    pub fitness: FitnessWeights,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct MutationParameters {
    pub genes: GeneMutationParameters,
    pub probability_landscape: LandscapeMutationParameters,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneMutationParameters {
    #[serde(rename = "move")]
    pub move_: MoveMutationParameters,
    pub swap: SwapMutationParameters,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct MoveMutationParameters {
    pub prob: f64,
    pub std: f64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SwapMutationParameters {
    pub prob: f64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LandscapeMutationParameters {
    pub add: f64,
    pub del: f64,
    pub change_mean: ChangeMeanParameters,
    pub change_std: ChangeStdParameters,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChangeMeanParameters {
    pub prob: f64,
    pub std: f64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChangeStdParameters {
    pub prob: f64,
    pub std: f64,
    pub max: f64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FitnessWeights {
    pub min_sphase: f64,
    pub match_mfaseq: f64,
    pub max_coll_all: f64,
    pub min_coll_all: f64,
    pub max_coll: WeightedGene,
    pub min_coll: WeightedGene,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeightedGene {
    pub weight: f64,
    pub gene: String,
}
