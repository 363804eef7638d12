//! A replication fork is a directional extender over one chromosome. It
//! cycles Detached → Attached → Detached; the detachment that happens
//! inside an advance (collision with an already-replicated tract, or the
//! chromosome end) stalls the fork for one step via the `just_detached`
//! flag, and only an explicit [detach](ReplicationFork::detach) makes it
//! attachable again.
use crate::errors::SimulationError;
use crate::genome::Genome;
use crate::genomic_location::GenomicLocation;

#[derive(Clone, Debug)]
pub struct ReplicationFork {
    speed: usize,
    chromosome: Option<usize>,
    base: i64,
    direction: i8,
    attach_time: i64,
    just_detached: bool,
}

impl ReplicationFork {
    pub fn new(speed: usize) -> Self {
        Self {
            speed,
            chromosome: None,
            base: -1,
            direction: 0,
            attach_time: 0,
            just_detached: false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.chromosome.is_some()
    }

    pub fn get_base(&self) -> i64 {
        self.base
    }

    pub fn get_direction(&self) -> i8 {
        self.direction
    }

    pub fn get_chromosome(&self) -> Option<usize> {
        self.chromosome
    }

    pub fn get_attach_time(&self) -> i64 {
        self.attach_time
    }

    pub fn get_just_detached(&self) -> bool {
        self.just_detached
    }

    /// A fork is attachable when it is detached and not stalled from a
    /// collision in the current step.
    pub fn is_free(&self) -> bool {
        !self.is_attached() && !self.just_detached
    }

    pub fn attach(
        &mut self,
        location: GenomicLocation,
        direction: i8,
        time: i64,
    ) -> Result<(), SimulationError> {
        if self.is_attached() || self.just_detached {
            return Err(SimulationError::AlreadyAttached);
        }
        self.chromosome = Some(location.chromosome);
        self.base = location.base as i64;
        self.direction = direction;
        self.attach_time = time;
        Ok(())
    }

    pub fn detach(&mut self) {
        self.chromosome = None;
        self.base = -1;
        self.direction = 0;
        self.just_detached = false;
    }

    /// Non-normal detach: the fork collided, ran off the chromosome end or
    /// hit transcription machinery mid-advance. Blocks reattachment until
    /// the pool explicitly releases it.
    pub fn stall(&mut self) {
        self.chromosome = None;
        self.base = -1;
        self.direction = 0;
        self.just_detached = true;
    }

    /// Extends the fork by `speed` bases, writing `time` into every base
    /// walked. A non-normal replication (overlap with a replicated tract,
    /// or an end clamp) stalls the fork. Returns whether the fork is still
    /// attached and actually moved.
    pub fn advance(&mut self, genome: &mut Genome, time: i64) -> Result<bool, SimulationError> {
        let Some(chromosome) = self.chromosome else {
            return Ok(false);
        };
        let end = self.base + self.direction as i64 * self.speed as i64;
        let normal = genome
            .chromosome_mut(chromosome)
            .replicate(self.base, end, time)?;
        if !normal {
            self.stall();
            return Ok(false);
        }
        self.base = end;
        Ok(true)
    }
}
