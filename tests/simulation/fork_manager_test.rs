use crate::support::*;
use std::sync::Arc;

fn genome_without_regions() -> Genome {
    Genome::new(vec![bare_chromosome(vec![0.0; 300], "1")])
}

fn genome_with_region(start: usize, end: usize) -> Genome {
    Genome::new(vec![Chromosome::new(
        "1",
        vec![0.0; 300],
        Arc::new(vec![TranscriptionRegion { start, end }]),
        Arc::new(vec![]),
    )
    .unwrap()])
}

#[test]
fn pool_starts_fully_free() {
    let manager = ForkManager::new(2, 1);
    assert_eq!(manager.total_forks(), 2);
    assert_eq!(manager.free_forks(), 2);
    assert_eq!(manager.attached_forks(), 0);
}

#[test]
fn attach_consumes_the_pool_and_fails_when_exhausted() {
    let genome = genome_without_regions();
    let mut manager = ForkManager::new(2, 1);
    let location = GenomicLocation::new(100, 0, &genome).unwrap();

    manager.attach_fork(location, 1, 0).unwrap();
    assert_eq!(manager.free_forks(), 1);
    manager.attach_fork(location, -1, 0).unwrap();
    assert_eq!(manager.free_forks(), 0);
    assert!(matches!(
        manager.attach_fork(location, 1, 0),
        Err(SimulationError::ExhaustedPool)
    ));
    assert!(manager.attached_forks() <= manager.total_forks());
}

#[test]
fn advances_every_attached_fork() {
    let mut genome = genome_without_regions();
    let mut manager = ForkManager::new(4, 1);
    let left = GenomicLocation::new(100, 0, &genome).unwrap();
    let right = GenomicLocation::new(200, 0, &genome).unwrap();
    manager.attach_fork(left, 1, 0).unwrap();
    manager.attach_fork(right, -1, 0).unwrap();

    manager.advance_attached_forks(&mut genome, 5).unwrap();
    assert_eq!(genome.chromosome(0).strand()[100], 5);
    assert_eq!(genome.chromosome(0).strand()[101], 5);
    assert_eq!(genome.chromosome(0).strand()[199], 5);
    assert_eq!(genome.chromosome(0).strand()[200], 5);
    assert_eq!(manager.attached_forks(), 2);
}

#[test]
fn releases_stalled_forks_one_step_later() {
    let mut genome = genome_without_regions();
    let mut manager = ForkManager::new(1, 1);
    let location = GenomicLocation::new(299, 0, &genome).unwrap();
    manager.attach_fork(location, 1, 0).unwrap();

    // the advance runs off the chromosome end: the fork stalls and is
    // neither attached nor free
    manager.advance_attached_forks(&mut genome, 0).unwrap();
    assert_eq!(manager.attached_forks(), 0);
    assert_eq!(manager.free_forks(), 0);

    // the next pass releases it back into the pool
    manager.advance_attached_forks(&mut genome, 1).unwrap();
    assert_eq!(manager.free_forks(), 1);
}

#[test]
fn transcription_conflict_at_matching_phase() {
    let genome = genome_with_region(10, 20);
    let mut manager = ForkManager::new(1, 1);
    let location = GenomicLocation::new(12, 0, &genome).unwrap();
    manager.attach_fork(location, 1, 0).unwrap();

    // fork at base 12 of region [10, 20): polymerase phase is
    // (12 - 10) % 5 == 2, so time 2 conflicts
    let conflicts = manager.check_replication_transcription_conflicts(&genome, 2, 5);
    assert_eq!(conflicts, 1);
    assert_eq!(manager.attached_forks(), 0);
    assert_eq!(manager.free_forks(), 0);
}

#[test]
fn no_conflict_at_other_phases_or_outside_regions() {
    let genome = genome_with_region(10, 20);
    let mut manager = ForkManager::new(2, 1);
    let inside = GenomicLocation::new(12, 0, &genome).unwrap();
    let outside = GenomicLocation::new(150, 0, &genome).unwrap();
    manager.attach_fork(inside, 1, 0).unwrap();
    manager.attach_fork(outside, 1, 0).unwrap();

    let conflicts = manager.check_replication_transcription_conflicts(&genome, 3, 5);
    assert_eq!(conflicts, 0);
    assert_eq!(manager.attached_forks(), 2);
}
