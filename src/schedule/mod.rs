//! Command scheduling and sampled execution.
//!
//! The [`CommandScheduler`] replays a timeline of move commands against one
//! axis at a fixed sample rate. It can be driven as an iterator, recorded
//! into a [`Trace`] (with `alloc`), or paced against wall time by a
//! [`RealtimeRunner`].

mod queue;
mod realtime;
mod scheduler;
#[cfg(feature = "alloc")]
mod trace;

pub use queue::{CommandQueue, ScheduledCommand, MAX_COMMANDS};
pub use realtime::RealtimeRunner;
pub use scheduler::{ActiveProfile, CommandScheduler, Rejection, Sample};
#[cfg(feature = "alloc")]
pub use trace::Trace;
