//! Rendering and writing of ensemble results.
//!
//! Each cell gets its own directory under the output root: one file per
//! chromosome with the strand sampled every [CHRM_OUTPUT_STEP] bases (one
//! replication timestamp per line), plus a `cell.txt` summary with the
//! counters downstream aggregation tools consume.
use crate::errors::SimulationError;
use crate::simulation::CellResult;
use itertools::Itertools;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Sampling stride of the strand rendering, in bases.
pub const CHRM_OUTPUT_STEP: usize = 500;

/// One sampled strand timestamp per line.
pub fn render_strand(strand: &[i64]) -> String {
    strand.iter().step_by(CHRM_OUTPUT_STEP).join("\n")
}

fn render_cell_summary(result: &CellResult) -> String {
    let mut summary = String::new();
    writeln!(summary, "end_time\t{}", result.end_time).unwrap_or(());
    writeln!(summary, "collisions\t{}", result.n_collisions).unwrap_or(());
    for chromosome in &result.chromosomes {
        writeln!(
            summary,
            "{}\tfired_origins\t{}\tfired_constitutive\t{}",
            chromosome.code,
            chromosome.n_fired_origins,
            chromosome
                .fired_constitutive_origins
                .iter()
                .map(|origin| origin.base)
                .join(","),
        )
        .unwrap_or(());
    }
    summary
}

/// Directory of one cell's files under the output root.
pub fn cell_directory(output: &Path, name: &str, cell_index: usize) -> PathBuf {
    let base = if name.is_empty() {
        output.to_path_buf()
    } else {
        output.join(name)
    };
    base.join(format!("cell_{}", cell_index))
}

/// Writes every cell's strands and summary below `output` (or
/// `output/name` when a run name is set).
pub fn write_results(
    output: &Path,
    name: &str,
    results: &[CellResult],
) -> Result<(), SimulationError> {
    for result in results {
        let cell_dir = cell_directory(output, name, result.cell_index);
        fs::create_dir_all(&cell_dir)?;
        for chromosome in &result.chromosomes {
            let mut rendered = render_strand(&chromosome.strand);
            rendered.push('\n');
            fs::write(cell_dir.join(format!("{}.txt", chromosome.code)), rendered)?;
        }
        fs::write(cell_dir.join("cell.txt"), render_cell_summary(result))?;
    }
    Ok(())
}
