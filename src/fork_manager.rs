//! The fork manager arbitrates a fixed pool of replication forks over a
//! whole genome. The pool size is the cell's resource bound and never
//! changes during a cell's lifetime; the origin scan must tolerate an
//! exhausted pool.
use crate::errors::SimulationError;
use crate::genome::Genome;
use crate::genomic_location::GenomicLocation;
use crate::replication_fork::ReplicationFork;

#[derive(Clone, Debug)]
pub struct ForkManager {
    forks: Vec<ReplicationFork>,
    speed: usize,
}

impl ForkManager {
    pub fn new(total_forks: usize, speed: usize) -> Self {
        Self {
            forks: (0..total_forks).map(|_| ReplicationFork::new(speed)).collect(),
            speed,
        }
    }

    pub fn total_forks(&self) -> usize {
        self.forks.len()
    }

    pub fn speed(&self) -> usize {
        self.speed
    }

    pub fn free_forks(&self) -> usize {
        self.forks.iter().filter(|fork| fork.is_free()).count()
    }

    pub fn attached_forks(&self) -> usize {
        self.forks.iter().filter(|fork| fork.is_attached()).count()
    }

    pub fn forks(&self) -> &[ReplicationFork] {
        &self.forks
    }

    /// Attaches the first free fork of the pool at `location`.
    pub fn attach_fork(
        &mut self,
        location: GenomicLocation,
        direction: i8,
        time: i64,
    ) -> Result<(), SimulationError> {
        let Some(fork) = self.forks.iter_mut().find(|fork| fork.is_free()) else {
            return Err(SimulationError::ExhaustedPool);
        };
        fork.attach(location, direction, time)
    }

    /// Advances every attached fork by one stride. Forks stalled in the
    /// previous step are released first, so a stalled fork misses exactly
    /// one attachment window before rejoining the free pool.
    pub fn advance_attached_forks(
        &mut self,
        genome: &mut Genome,
        time: i64,
    ) -> Result<(), SimulationError> {
        for fork in self.forks.iter_mut() {
            if fork.get_just_detached() {
                fork.detach();
            }
            if fork.is_attached() {
                fork.advance(genome, time)?;
            }
        }
        Ok(())
    }

    /// Stalls every attached fork sitting on the base its transcription
    /// machinery occupies at phase `time mod period`. A region's
    /// polymerase cycles through it with the given period, so a fork at
    /// base `b` of region `[start, end)` conflicts when
    /// `(b - start) mod period == time mod period`. Returns the number of
    /// conflicts.
    pub fn check_replication_transcription_conflicts(
        &mut self,
        genome: &Genome,
        time: i64,
        period: usize,
    ) -> usize {
        let phase = time.rem_euclid(period as i64) as usize;
        let mut n_conflicts = 0;
        for fork in self.forks.iter_mut() {
            let Some(chromosome) = fork.get_chromosome() else {
                continue;
            };
            let base = fork.get_base() as usize;
            let conflict = genome
                .chromosome(chromosome)
                .transcription_regions()
                .iter()
                .any(|region| {
                    base >= region.start
                        && base < region.end
                        && (base - region.start) % period == phase
                });
            if conflict {
                fork.stall();
                n_conflicts += 1;
            }
        }
        n_conflicts
    }
}
