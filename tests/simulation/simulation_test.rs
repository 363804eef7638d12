use crate::support::*;

fn provider() -> MemoryDataProvider {
    MemoryDataProvider::new().with_chromosome("chr1", vec![0.05; 500], vec![], vec![])
}

fn builder() -> SimulationBuilder {
    Simulation::builder()
        .with_genome_template(GenomeTemplate::from_provider(&provider()).unwrap())
        .with_cells(4)
        .with_resources(8)
        .with_timeout(100_000)
        .with_seed(7)
        .with_threads(2)
}

#[test]
fn builder_requires_a_genome() {
    assert!(matches!(
        Simulation::builder().build(),
        Err(SimulationError::ConfigMissing("genome"))
    ));
}

#[test]
fn builder_requires_the_mandatory_parameters() {
    let template = GenomeTemplate::from_provider(&provider()).unwrap();
    assert!(matches!(
        Simulation::builder()
            .with_genome_template(template.clone())
            .build(),
        Err(SimulationError::ConfigMissing("cells"))
    ));
    assert!(matches!(
        Simulation::builder()
            .with_genome_template(template.clone())
            .with_cells(1)
            .build(),
        Err(SimulationError::ConfigMissing("resources"))
    ));
    assert!(matches!(
        Simulation::builder()
            .with_genome_template(template.clone())
            .with_cells(1)
            .with_resources(1)
            .build(),
        Err(SimulationError::ConfigMissing("timeout"))
    ));
    assert!(matches!(
        Simulation::builder()
            .with_genome_template(template)
            .with_cells(0)
            .with_resources(1)
            .with_timeout(1)
            .build(),
        Err(SimulationError::ConfigMissing("cells"))
    ));
}

#[test]
fn builder_rejects_zero_knobs() {
    assert!(matches!(
        builder().with_speed(0).build(),
        Err(SimulationError::InvalidArgument(_))
    ));
    assert!(matches!(
        builder().with_period(0).build(),
        Err(SimulationError::InvalidArgument(_))
    ));
    assert!(matches!(
        builder().with_threads(0).build(),
        Err(SimulationError::InvalidArgument(_))
    ));
}

#[test]
fn ensemble_runs_every_cell_to_completion() {
    let simulation = builder().build().unwrap();
    let results = simulation.call().unwrap();

    assert_eq!(results.len(), 4);
    for (index, result) in results.iter().enumerate() {
        assert_eq!(result.cell_index, index);
        assert_eq!(result.chromosomes[0].code, "chr1");
        assert!(result.chromosomes[0].strand.iter().all(|&t| t >= 0));
        assert!(result.chromosomes[0].n_fired_origins > 0);
    }
}

#[test]
fn ensemble_is_deterministic_for_a_seed() {
    let simulation = builder().build().unwrap();
    let first = simulation.call().unwrap();
    let second = simulation.call().unwrap();

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.chromosomes[0].strand, b.chromosomes[0].strand);
        assert_eq!(a.end_time, b.end_time);
    }
}

#[test]
fn cells_use_distinct_seeds() {
    let simulation = builder().build().unwrap();
    let results = simulation.call().unwrap();
    assert_ne!(
        results[0].chromosomes[0].strand,
        results[1].chromosomes[0].strand
    );
}
