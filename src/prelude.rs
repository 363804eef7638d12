//! Flat re-exports of the whole public surface.
pub use crate::cell_cycle::CellCycle;
pub use crate::chromosome::{Chromosome, ConstitutiveOrigin, TranscriptionRegion};
pub use crate::configuration::{Cli, EvolutionParameters, Parameters};
pub use crate::data_provider::{DataProvider, FileDataProvider, MemoryDataProvider};
pub use crate::errors::SimulationError;
pub use crate::fork_manager::ForkManager;
pub use crate::genome::{ChromosomeTemplate, Genome, GenomeTemplate};
pub use crate::genomic_location::GenomicLocation;
pub use crate::output::{render_strand, write_results, CHRM_OUTPUT_STEP};
pub use crate::replication_fork::ReplicationFork;
pub use crate::simulation::{
    CellResult, ChromosomeResult, Simulation, SimulationBuilder, SimulationConfig,
};
