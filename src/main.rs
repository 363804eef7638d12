use anyhow::Context;
use clap::Parser;
use redymo::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.gpu {
        log::warn!("GPU processing is broken for now. Ignoring option...");
    }

    let parameters = Parameters::from_cli(&cli)?;
    if let Err(error) = parameters.validate() {
        eprintln!("{}", error);
        std::process::exit(1);
    }
    if cli.summary {
        parameters.print_summary();
    }

    let provider = FileDataProvider::new(&parameters.data_dir, &parameters.organism)
        .with_context(|| {
            format!(
                "loading organism {:?} from {}",
                parameters.organism,
                parameters.data_dir.display()
            )
        })?;
    let template = GenomeTemplate::from_provider(&provider)?;

    let simulation = Simulation::builder()
        .with_genome_template(template)
        .with_cells(parameters.cells)
        .with_resources(parameters.resources)
        .with_timeout(parameters.timeout)
        .with_speed(parameters.speed)
        .with_period(parameters.period)
        .with_constitutive(parameters.constitutive)
        .with_probability(parameters.probability)
        .with_dormant(parameters.dormant)
        .with_seed(parameters.seed)
        .with_threads(parameters.threads)
        .build()?;

    log::info!(
        "simulating {} cells of {:?} over {} threads",
        parameters.cells,
        parameters.organism,
        parameters.threads
    );
    let results = simulation.call()?;

    write_results(&parameters.output, &parameters.name, &results)
        .with_context(|| format!("writing results to {}", parameters.output.display()))?;
    log::info!(
        "wrote {} cells to {}",
        results.len(),
        parameters.output.display()
    );
    Ok(())
}
