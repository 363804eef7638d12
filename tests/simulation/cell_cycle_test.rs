use crate::support::*;
use std::sync::Arc;

fn single_chromosome(landscape: Vec<f64>) -> Genome {
    Genome::new(vec![bare_chromosome(landscape, "1")])
}

#[test]
fn single_base_chromosome_fires_at_once() {
    let genome = single_chromosome(vec![1.0]);
    let mut cell = CellCycle::new(genome, cell_config(2, 1), 0);
    let result = cell.run().unwrap();

    assert_eq!(result.chromosomes[0].strand, vec![0]);
    assert_eq!(result.chromosomes[0].n_fired_origins, 1);
    assert_eq!(result.end_time, 0);
    assert!(cell.genome().is_replicated());
}

#[test]
fn dead_landscape_times_out() {
    let genome = single_chromosome(vec![0.0, 0.0]);
    let mut cell = CellCycle::new(genome, cell_config(2, 10), 0);
    let result = cell.run().unwrap();

    assert_eq!(result.chromosomes[0].strand, vec![-1, -1]);
    assert_eq!(result.chromosomes[0].n_fired_origins, 0);
    assert_eq!(result.end_time, 10);
}

#[test]
fn forced_center_origin_sweeps_both_ways() {
    let genome = single_chromosome(spiked_landscape(300, &[150]));
    let mut cell = CellCycle::new(genome, cell_config(2, 400), 0);
    let result = cell.run().unwrap();

    let strand = &result.chromosomes[0].strand;
    assert_eq!(strand[150], 0);
    assert_eq!(strand[0], 149);
    assert_eq!(strand[299], 148);
    assert!(strand.iter().all(|&t| (0..=149).contains(&t)));
    assert_eq!(result.chromosomes[0].n_fired_origins, 1);
    assert_eq!(result.end_time, 149);
}

#[test]
fn converging_forks_collide_midway() {
    let genome = single_chromosome(spiked_landscape(100, &[20, 60]));
    let mut cell = CellCycle::new(genome, cell_config(4, 400), 0);
    let result = cell.run().unwrap();

    let strand = &result.chromosomes[0].strand;
    assert!(cell.genome().is_replicated());
    assert_eq!(result.chromosomes[0].n_fired_origins, 2);
    assert_eq!(strand[20], 0);
    assert_eq!(strand[60], 0);
    // the forks from 20 (+1) and 60 (-1) meet at base 40
    assert_eq!(strand[40], 19);
    assert_eq!(strand[99], 38);
    assert_eq!(result.end_time, 38);
    assert_eq!(
        cell.genome().chromosome(0).n_replicated_bases(),
        strand.iter().filter(|&&t| t != -1).count()
    );
}

#[test]
fn dormant_firing_boosts_the_neighborhood() {
    let genome = single_chromosome(spiked_landscape(100_000, &[50_000]));
    let mut config = cell_config(2, 1);
    config.dormant = true;
    let mut cell = CellCycle::new(genome, config, 0);
    cell.run().unwrap();

    let landscape = cell.genome().chromosome(0).probability_landscape();
    for base in 30_000..70_000 {
        assert!(landscape[base] > 0.0);
        assert!(landscape[base] <= 1.0);
    }
    assert_eq!(landscape[29_999], 0.0);
    assert_eq!(landscape[70_000], 0.0);
    assert_eq!(landscape[50_000], 1.0);
}

#[test]
fn constitutive_origins_prefire_at_time_zero() {
    let genome = Genome::new(vec![Chromosome::new(
        "1",
        vec![0.0; 300],
        Arc::new(vec![]),
        Arc::new(vec![ConstitutiveOrigin { base: 70 }]),
    )
    .unwrap()]);
    let mut config = cell_config(2, 400);
    config.constitutive = 1;
    let mut cell = CellCycle::new(genome, config, 0);
    let result = cell.run().unwrap();

    assert_eq!(result.chromosomes[0].strand[70], 0);
    assert_eq!(
        result.chromosomes[0].fired_constitutive_origins,
        vec![ConstitutiveOrigin { base: 70 }]
    );
    assert_eq!(result.chromosomes[0].n_fired_origins, 1);
    assert!(cell.genome().is_replicated());
}

#[test]
fn uniform_probability_overrides_the_landscape() {
    let genome = single_chromosome(vec![0.0; 3]);
    let mut config = cell_config(6, 5);
    config.probability = 1.0;
    let mut cell = CellCycle::new(genome, config, 0);
    let result = cell.run().unwrap();

    assert_eq!(result.chromosomes[0].strand, vec![0, 0, 0]);
    assert_eq!(result.chromosomes[0].n_fired_origins, 3);
    assert_eq!(result.end_time, 0);
}

#[test]
fn origin_scan_skips_firing_on_an_exhausted_pool() {
    let genome = single_chromosome(vec![1.0; 3]);
    let mut cell = CellCycle::new(genome, cell_config(2, 5), 0);
    let result = cell.run().unwrap();

    // base 0 fires and takes both forks; bases 1 and 2 are skipped and
    // get replicated by the surviving rightward fork instead
    assert_eq!(result.chromosomes[0].n_fired_origins, 1);
    assert_eq!(result.chromosomes[0].strand, vec![0, 0, 1]);
    assert_eq!(result.end_time, 1);
}

#[test]
fn transcription_conflicts_are_counted() {
    // polymerase phase matches the fork as it crosses the region
    let genome = Genome::new(vec![Chromosome::new(
        "1",
        spiked_landscape(300, &[150]),
        Arc::new(vec![TranscriptionRegion { start: 100, end: 140 }]),
        Arc::new(vec![]),
    )
    .unwrap()]);
    let mut config = cell_config(2, 400);
    config.period = 1;
    let mut cell = CellCycle::new(genome, config, 0);
    let result = cell.run().unwrap();

    // with period 1 every base of the region conflicts, so the leftward
    // fork dies on entry at base 139
    assert!(result.n_collisions >= 1);
    assert_eq!(cell.n_conflicts(), result.n_collisions);
}
