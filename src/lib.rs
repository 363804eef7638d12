//! A discrete-event stochastic simulator of eukaryotic DNA replication.
//!
//! Given a genome — a set of chromosomes, each with a per-base
//! firing-probability landscape, transcription regions and constitutive
//! origin sites — and a fixed budget of replication forks, the simulator
//! steps time in discrete units: origins fire probabilistically along the
//! strand, bidirectional forks extend until they collide or run off the
//! chromosome, and dormant origins near a fired origin can optionally get
//! a local activation boost. The output is the per-base activation time of
//! every chromosome across many independent cells, which downstream tools
//! aggregate into replication-timing profiles.
//!
//! There are three main elements:
//! * A [DataProvider](crate::data_provider) (the genome facts)
//! * The [CellCycle](crate::cell_cycle::CellCycle) engine (one cell's replication)
//! * The [Simulation](crate::simulation::Simulation) driver (the parallel ensemble)
//!
//! ## Quick Usage
//!
//! ```rust
//! use redymo::prelude::*;
//!
//! // the genome facts, here built in memory
//! let provider = MemoryDataProvider::new()
//!     .with_chromosome(
//!         "chr1",
//!         vec![0.02; 5_000],                         // firing probability per base
//!         vec![TranscriptionRegion { start: 100, end: 400 }],
//!         vec![ConstitutiveOrigin { base: 2_500 }],
//!     );
//!
//! // the ensemble
//! let simulation = Simulation::builder()
//!     .with_genome_template(GenomeTemplate::from_provider(&provider).unwrap())
//!     .with_cells(4)          // 4 independent cells
//!     .with_resources(10)     // 10 replication forks per cell
//!     .with_timeout(100_000)  // hard step limit per cell
//!     .with_speed(1)          // bases replicated per fork per step
//!     .with_period(50)        // transcription / landscape reference period
//!     .with_dormant(true)     // boost dormant origins around fired ones
//!     .with_seed(42)          // cell seeds derive from this
//!     .with_threads(2)
//!     .build()
//!     .unwrap();
//!
//! // per-cell replication timestamps
//! let results = simulation.call().unwrap();
//! assert_eq!(results.len(), 4);
//! ```
pub mod cell_cycle;
pub mod chromosome;
pub mod configuration;
pub mod data_provider;
pub mod errors;
pub mod fork_manager;
pub mod genome;
pub mod genomic_location;
pub mod output;
pub mod prelude;
pub mod replication_fork;
pub mod simulation;
