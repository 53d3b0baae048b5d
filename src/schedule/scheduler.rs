//! Fixed-rate command scheduler.
//!
//! Owns the sample clock, the pending command queue, the integrator and the
//! active profile. Each tick fires any command whose trigger falls within
//! half a sample interval, then integrates one step with the acceleration
//! the active profile commands at that instant.
//!
//! Replanning while the axis sits at a goal it has just reached yields a hold
//! profile: the settle tolerances widen to the error the integrator can have
//! accumulated since the active profile was issued.

use heapless::Vec;

use crate::config::units::{SampleRate, Seconds};
use crate::config::{validate_config, ScenarioConfig};
use crate::error::{PlanError, Result, ScheduleError};
use crate::motion::{Integrator, KinematicState, MoveCommand, Planner, Profile};

use super::queue::{CommandQueue, ScheduledCommand, MAX_COMMANDS};

/// One integrated sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Sample time in seconds.
    pub time: f64,
    /// Position after the step.
    pub position: f64,
    /// Velocity after the step.
    pub velocity: f64,
    /// Acceleration commanded at this sample.
    pub acceleration: f64,
}

impl Sample {
    /// Position and velocity of this sample.
    #[inline]
    pub fn state(&self) -> KinematicState {
        KinematicState::new(self.position, self.velocity)
    }
}

/// A command that fired but could not be planned.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Requested trigger time.
    pub trigger_time: f64,
    /// Tick time at which it fired.
    pub fired_at: f64,
    /// The rejected command.
    pub command: MoveCommand,
    /// Why planning failed.
    pub error: PlanError,
}

/// The profile currently driving the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveProfile {
    /// Planned motion.
    pub profile: Profile,
    /// Tick time the profile was issued at.
    pub issued_at: f64,
    /// State the profile was planned from.
    pub origin: KinematicState,
}

impl ActiveProfile {
    /// Commanded acceleration at absolute time `t`.
    #[inline]
    pub fn acceleration_at(&self, t: f64) -> f64 {
        self.profile.acceleration_at(t - self.issued_at)
    }

    /// Absolute time at which the profile runs out.
    #[inline]
    pub fn ends_at(&self) -> f64 {
        self.issued_at + self.profile.duration()
    }

    /// Check if the profile has finished at absolute time `t`.
    #[inline]
    pub fn is_complete_at(&self, t: f64) -> bool {
        t >= self.ends_at()
    }
}

/// Drives one axis through a timeline of move commands.
#[derive(Debug, Clone)]
pub struct CommandScheduler {
    planner: Planner,
    queue: CommandQueue,
    integrator: Integrator,
    sample_rate: SampleRate,
    tick: u64,
    end_tick: Option<u64>,
    active: Option<ActiveProfile>,
    fired: usize,
    rejections: Vec<Rejection, MAX_COMMANDS>,
    evicted: usize,
}

impl CommandScheduler {
    /// Create a scheduler for an axis starting in `initial`.
    ///
    /// Without [`with_duration`](Self::with_duration) the scheduler ticks forever.
    pub fn new(initial: KinematicState, sample_rate: SampleRate) -> Self {
        Self {
            planner: Planner::default(),
            queue: CommandQueue::new(),
            integrator: Integrator::new(initial),
            sample_rate,
            tick: 0,
            end_tick: None,
            active: None,
            fired: 0,
            rejections: Vec::new(),
            evicted: 0,
        }
    }

    /// Use a planner with custom tolerances.
    pub fn with_planner(mut self, planner: Planner) -> Self {
        self.planner = planner;
        self
    }

    /// Stop producing samples once `duration` is reached.
    ///
    /// The last sample is the last tick strictly before `duration`.
    pub fn with_duration(mut self, duration: Seconds) -> Self {
        let ticks = libm::ceil(duration.value() * self.sample_rate.hz());
        self.end_tick = Some(if ticks > 0.0 { ticks as u64 } else { 0 });
        self
    }

    /// Build a scheduler from a scenario configuration.
    ///
    /// Commands whose goal is refused by the axis soft limits are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config(config: &ScenarioConfig) -> Result<Self> {
        validate_config(config)?;

        let mut scheduler = Self::new(config.axis.initial_state(), config.sample_rate)
            .with_planner(Planner::new(config.planner))
            .with_duration(config.duration);

        for (trigger, command) in config.move_commands() {
            scheduler.schedule(trigger, command)?;
        }

        info!(
            "scenario for axis {} loaded: {} commands at {} Hz",
            config.axis.name.as_str(),
            scheduler.pending(),
            config.sample_rate.hz()
        );

        Ok(scheduler)
    }

    /// Queue a command to fire at `trigger`.
    ///
    /// A trigger already in the past fires on the next tick.
    ///
    /// # Errors
    ///
    /// See [`CommandQueue::push`].
    pub fn schedule(&mut self, trigger: Seconds, command: MoveCommand) -> core::result::Result<(), ScheduleError> {
        self.queue.push(trigger, command)
    }

    /// Current integrator state.
    #[inline]
    pub fn state(&self) -> KinematicState {
        self.integrator.state()
    }

    /// Index of the next tick.
    #[inline]
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Time of the next tick.
    #[inline]
    pub fn next_time(&self) -> f64 {
        self.sample_rate.time_of(self.tick).value()
    }

    /// Get the sample rate.
    #[inline]
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Get the planner.
    #[inline]
    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    /// The profile driving the axis, if any.
    #[inline]
    pub fn active(&self) -> Option<&ActiveProfile> {
        self.active.as_ref()
    }

    /// Number of commands still waiting to fire.
    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of commands that fired, planned or not.
    #[inline]
    pub fn fired(&self) -> usize {
        self.fired
    }

    /// Commands that fired but failed to plan, oldest first.
    ///
    /// Holds the latest [`MAX_COMMANDS`] rejections; older ones are evicted.
    #[inline]
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Number of rejections evicted from [`rejections`](Self::rejections).
    #[inline]
    pub fn evicted_rejections(&self) -> usize {
        self.evicted
    }

    /// Check if nothing is pending and the active profile, if any, has run out.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
            && self
                .active
                .as_ref()
                .map_or(true, |a| a.is_complete_at(self.next_time()))
    }

    /// Check if the run has reached its duration.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.end_tick.is_some_and(|end| self.tick >= end)
    }

    /// Advance one sample.
    ///
    /// Ticks past the duration are still integrated; only the iterator stops.
    pub fn tick(&mut self) -> Sample {
        let t = self.next_time();
        let deadline = Seconds(t + 0.5 * self.sample_rate.interval().value());

        while let Some(entry) = self.queue.pop_due(deadline) {
            self.fire(entry, t);
        }

        let acceleration = self.acceleration_at(t);
        let state = self.integrator.step(acceleration, t);
        self.tick += 1;

        Sample {
            time: t,
            position: state.position,
            velocity: state.velocity,
            acceleration,
        }
    }

    fn acceleration_at(&self, t: f64) -> f64 {
        self.active.as_ref().map_or(0.0, |a| a.acceleration_at(t))
    }

    /// Planner whose settle tolerances cover the integration error since the
    /// active profile was issued.
    ///
    /// Each phase change costs at most `|Δa|·h/2` of velocity and a profile
    /// has at most four of them, so velocity is off by at most
    /// `2·h·peak_acceleration`. Position drifts by that much per second.
    fn firing_planner(&self, t: f64) -> Planner {
        match &self.active {
            Some(active) => {
                let h = self.sample_rate.interval().value();
                let velocity = 2.0 * h * active.profile.peak_acceleration();
                let position = velocity * (t - active.issued_at + h);
                Planner::new(self.planner.config().widened(position, velocity))
            }
            None => self.planner,
        }
    }

    fn fire(&mut self, entry: ScheduledCommand, t: f64) {
        self.fired += 1;

        // Plan from the state this tick will land on under the old profile
        let origin = self.integrator.predict(self.acceleration_at(t), t);

        match self.firing_planner(t).plan(&origin, &entry.command) {
            Ok(profile) => {
                info!(
                    "command {} s fired at {} s: {} profile, {} s long",
                    entry.trigger.value(),
                    t,
                    profile.shape.as_str(),
                    profile.duration()
                );
                self.active = Some(ActiveProfile {
                    profile,
                    issued_at: t,
                    origin,
                });
            }
            Err(error) => {
                warn!(
                    "command {} s rejected at {} s: {}",
                    entry.trigger.value(),
                    t,
                    error.as_str()
                );
                if self.rejections.is_full() {
                    self.rejections.remove(0);
                    self.evicted += 1;
                }
                // Room was made above
                let _ = self.rejections.push(Rejection {
                    trigger_time: entry.trigger.value(),
                    fired_at: t,
                    command: entry.command,
                    error,
                });
            }
        }
    }
}

impl Iterator for CommandScheduler {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.is_finished() {
            None
        } else {
            Some(self.tick())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.end_tick {
            Some(end) => {
                let left = end.saturating_sub(self.tick) as usize;
                (left, Some(left))
            }
            None => (usize::MAX, None),
        }
    }
}
