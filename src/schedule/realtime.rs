//! Wall-clock pacing with an embedded-hal delay.

use embedded_hal::delay::DelayNs;

use super::scheduler::{CommandScheduler, Sample};

/// Runs a scheduler at its sample rate, sleeping one interval per tick.
///
/// Pacing is open loop: planning and integration time is not subtracted
/// from the delay.
pub struct RealtimeRunner<DELAY>
where
    DELAY: DelayNs,
{
    scheduler: CommandScheduler,
    delay: DELAY,
    interval_ns: u32,
}

impl<DELAY> RealtimeRunner<DELAY>
where
    DELAY: DelayNs,
{
    /// Wrap a scheduler. Intervals longer than `u32::MAX` ns saturate.
    pub fn new(scheduler: CommandScheduler, delay: DELAY) -> Self {
        let interval_ns = scheduler.sample_rate().interval().as_nanos_u32();
        Self {
            scheduler,
            delay,
            interval_ns,
        }
    }

    /// Delay applied between ticks.
    #[inline]
    pub fn interval_ns(&self) -> u32 {
        self.interval_ns
    }

    /// Get the wrapped scheduler.
    #[inline]
    pub fn scheduler(&self) -> &CommandScheduler {
        &self.scheduler
    }

    /// Get the wrapped scheduler mutably, e.g. to queue more commands.
    #[inline]
    pub fn scheduler_mut(&mut self) -> &mut CommandScheduler {
        &mut self.scheduler
    }

    /// Produce one sample, then wait one interval.
    ///
    /// Returns `None` once the scheduler has reached its duration.
    pub fn step(&mut self) -> Option<Sample> {
        let sample = self.scheduler.next()?;
        self.delay.delay_ns(self.interval_ns);
        Some(sample)
    }

    /// Run at most `ticks` samples, handing each to `on_sample`.
    ///
    /// Returns the number of samples produced.
    pub fn run_for<F>(&mut self, ticks: u64, mut on_sample: F) -> u64
    where
        F: FnMut(&Sample),
    {
        let mut produced = 0;
        while produced < ticks {
            match self.step() {
                Some(sample) => on_sample(&sample),
                None => break,
            }
            produced += 1;
        }
        produced
    }

    /// Run until the scheduler's duration is reached.
    ///
    /// Never returns for a scheduler without a duration.
    pub fn run<F>(&mut self, mut on_sample: F) -> u64
    where
        F: FnMut(&Sample),
    {
        let mut produced = 0;
        while let Some(sample) = self.step() {
            on_sample(&sample);
            produced += 1;
        }
        debug!("realtime run finished after {} samples", produced);
        produced
    }

    /// Release the scheduler and the delay provider.
    pub fn into_parts(self) -> (CommandScheduler, DELAY) {
        (self.scheduler, self.delay)
    }
}
