//! Sources of genome facts, keyed by chromosome code.
//!
//! The simulator only depends on the [DataProvider] capability set;
//! [MemoryDataProvider] serves library use and tests, [FileDataProvider]
//! reads the on-disk layout of an organism's data directory.
use crate::chromosome::{ConstitutiveOrigin, TranscriptionRegion};
use crate::errors::SimulationError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub trait DataProvider {
    /// Chromosome codes in declaration order.
    fn codes(&self) -> Vec<String>;
    fn length(&self, code: &str) -> Result<usize, SimulationError>;
    /// One firing probability per base; the returned length matches
    /// [length](DataProvider::length).
    fn probability_landscape(&self, code: &str) -> Result<Vec<f64>, SimulationError>;
    fn transcription_regions(
        &self,
        code: &str,
    ) -> Result<Arc<Vec<TranscriptionRegion>>, SimulationError>;
    fn constitutive_origins(
        &self,
        code: &str,
    ) -> Result<Arc<Vec<ConstitutiveOrigin>>, SimulationError>;
}

#[derive(Clone, Debug)]
struct MemoryChromosome {
    code: String,
    probability_landscape: Vec<f64>,
    transcription_regions: Arc<Vec<TranscriptionRegion>>,
    constitutive_origins: Arc<Vec<ConstitutiveOrigin>>,
}

/// An in-memory provider, populated chromosome by chromosome.
#[derive(Clone, Debug, Default)]
pub struct MemoryDataProvider {
    chromosomes: Vec<MemoryChromosome>,
}

impl MemoryDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chromosome(
        mut self,
        code: impl Into<String>,
        probability_landscape: Vec<f64>,
        transcription_regions: Vec<TranscriptionRegion>,
        constitutive_origins: Vec<ConstitutiveOrigin>,
    ) -> Self {
        self.chromosomes.push(MemoryChromosome {
            code: code.into(),
            probability_landscape,
            transcription_regions: Arc::new(transcription_regions),
            constitutive_origins: Arc::new(constitutive_origins),
        });
        self
    }

    fn chromosome(&self, code: &str) -> Result<&MemoryChromosome, SimulationError> {
        self.chromosomes
            .iter()
            .find(|chromosome| chromosome.code == code)
            .ok_or_else(|| {
                SimulationError::InvalidArgument(format!("unknown chromosome code {:?}", code))
            })
    }
}

impl DataProvider for MemoryDataProvider {
    fn codes(&self) -> Vec<String> {
        self.chromosomes
            .iter()
            .map(|chromosome| chromosome.code.clone())
            .collect()
    }

    fn length(&self, code: &str) -> Result<usize, SimulationError> {
        Ok(self.chromosome(code)?.probability_landscape.len())
    }

    fn probability_landscape(&self, code: &str) -> Result<Vec<f64>, SimulationError> {
        Ok(self.chromosome(code)?.probability_landscape.clone())
    }

    fn transcription_regions(
        &self,
        code: &str,
    ) -> Result<Arc<Vec<TranscriptionRegion>>, SimulationError> {
        Ok(self.chromosome(code)?.transcription_regions.clone())
    }

    fn constitutive_origins(
        &self,
        code: &str,
    ) -> Result<Arc<Vec<ConstitutiveOrigin>>, SimulationError> {
        Ok(self.chromosome(code)?.constitutive_origins.clone())
    }
}

/// Reads an organism's genome facts from `<data_dir>/<organism>/`:
///
/// * `chromosomes.tsv` — one `code<TAB>length` line per chromosome
///   (mandatory, fixes the declaration order);
/// * `landscape/<code>.txt` — one probability per line (mandatory);
/// * `transcription_regions/<code>.tsv` — `start<TAB>end` lines
///   (optional, empty when absent);
/// * `constitutive_origins/<code>.txt` — one base per line (optional).
#[derive(Clone, Debug)]
pub struct FileDataProvider {
    root: PathBuf,
    chromosomes: Vec<(String, usize)>,
}

impl FileDataProvider {
    pub fn new(data_dir: &Path, organism: &str) -> Result<Self, SimulationError> {
        let root = data_dir.join(organism);
        let index = root.join("chromosomes.tsv");
        let content = fs::read_to_string(&index)?;
        let mut chromosomes = Vec::new();
        for line in non_empty_lines(&content) {
            let (code, length) = line.split_once('\t').ok_or_else(|| parse_error(
                &index,
                format!("expected code<TAB>length, got {:?}", line),
            ))?;
            let length: usize = length
                .trim()
                .parse()
                .map_err(|_| parse_error(&index, format!("invalid length {:?}", length)))?;
            chromosomes.push((code.trim().to_string(), length));
        }
        Ok(Self { root, chromosomes })
    }

    fn indexed_length(&self, code: &str) -> Result<usize, SimulationError> {
        self.chromosomes
            .iter()
            .find(|(indexed_code, _)| indexed_code == code)
            .map(|(_, length)| *length)
            .ok_or_else(|| {
                SimulationError::InvalidArgument(format!("unknown chromosome code {:?}", code))
            })
    }
}

impl DataProvider for FileDataProvider {
    fn codes(&self) -> Vec<String> {
        self.chromosomes.iter().map(|(code, _)| code.clone()).collect()
    }

    fn length(&self, code: &str) -> Result<usize, SimulationError> {
        self.indexed_length(code)
    }

    fn probability_landscape(&self, code: &str) -> Result<Vec<f64>, SimulationError> {
        let length = self.indexed_length(code)?;
        let path = self.root.join("landscape").join(format!("{}.txt", code));
        let content = fs::read_to_string(&path)?;
        let landscape = non_empty_lines(&content)
            .map(|line| {
                line.parse::<f64>()
                    .map_err(|_| parse_error(&path, format!("invalid probability {:?}", line)))
            })
            .collect::<Result<Vec<f64>, _>>()?;
        if landscape.len() != length {
            return Err(parse_error(
                &path,
                format!("{} probabilities for length {}", landscape.len(), length),
            ));
        }
        Ok(landscape)
    }

    fn transcription_regions(
        &self,
        code: &str,
    ) -> Result<Arc<Vec<TranscriptionRegion>>, SimulationError> {
        let path = self
            .root
            .join("transcription_regions")
            .join(format!("{}.tsv", code));
        if !path.exists() {
            return Ok(Arc::new(Vec::new()));
        }
        let content = fs::read_to_string(&path)?;
        let regions = non_empty_lines(&content)
            .map(|line| {
                let (start, end) = line.split_once('\t').ok_or_else(|| {
                    parse_error(&path, format!("expected start<TAB>end, got {:?}", line))
                })?;
                let start = start.trim().parse::<usize>();
                let end = end.trim().parse::<usize>();
                match (start, end) {
                    (Ok(start), Ok(end)) if start < end => {
                        Ok(TranscriptionRegion { start, end })
                    }
                    _ => Err(parse_error(&path, format!("invalid region {:?}", line))),
                }
            })
            .collect::<Result<Vec<TranscriptionRegion>, _>>()?;
        Ok(Arc::new(regions))
    }

    fn constitutive_origins(
        &self,
        code: &str,
    ) -> Result<Arc<Vec<ConstitutiveOrigin>>, SimulationError> {
        let path = self
            .root
            .join("constitutive_origins")
            .join(format!("{}.txt", code));
        if !path.exists() {
            return Ok(Arc::new(Vec::new()));
        }
        let content = fs::read_to_string(&path)?;
        let origins = non_empty_lines(&content)
            .map(|line| {
                line.parse::<usize>()
                    .map(|base| ConstitutiveOrigin { base })
                    .map_err(|_| parse_error(&path, format!("invalid origin base {:?}", line)))
            })
            .collect::<Result<Vec<ConstitutiveOrigin>, _>>()?;
        Ok(Arc::new(origins))
    }
}

fn non_empty_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn parse_error(path: &Path, message: String) -> SimulationError {
    SimulationError::Parse {
        path: path.to_path_buf(),
        message,
    }
}
