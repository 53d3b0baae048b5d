//! Time-ordered queue of pending move commands.

use heapless::Vec;

use crate::config::units::Seconds;
use crate::error::ScheduleError;
use crate::motion::MoveCommand;

/// Maximum number of commands one queue can hold.
pub const MAX_COMMANDS: usize = 32;

/// A move command waiting for its trigger time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledCommand {
    /// When the command should fire.
    pub trigger: Seconds,
    /// What to do when it fires.
    pub command: MoveCommand,
}

/// Pending commands, earliest trigger first.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    entries: Vec<ScheduledCommand, MAX_COMMANDS>,
}

impl CommandQueue {
    /// Create a new empty queue.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert a command, keeping the queue sorted by trigger time.
    ///
    /// # Errors
    ///
    /// - `ScheduleError::InvalidTriggerTime` for a negative or non-finite trigger
    /// - `ScheduleError::DuplicateTrigger` if another command fires at the same time
    /// - `ScheduleError::QueueFull` when the queue is at capacity
    pub fn push(&mut self, trigger: Seconds, command: MoveCommand) -> Result<(), ScheduleError> {
        let at = trigger.value();
        if !(at.is_finite() && at >= 0.0) {
            return Err(ScheduleError::InvalidTriggerTime(at));
        }

        if self.entries.iter().any(|e| e.trigger == trigger) {
            return Err(ScheduleError::DuplicateTrigger(at));
        }

        let index = self
            .entries
            .iter()
            .position(|e| e.trigger > trigger)
            .unwrap_or(self.entries.len());

        self.entries
            .insert(index, ScheduledCommand { trigger, command })
            .map_err(|_| ScheduleError::QueueFull)
    }

    /// Next command to fire, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&ScheduledCommand> {
        self.entries.first()
    }

    /// Remove and return the next command if it triggers strictly before `deadline`.
    pub fn pop_due(&mut self, deadline: Seconds) -> Option<ScheduledCommand> {
        match self.entries.first() {
            Some(next) if next.trigger < deadline => Some(self.entries.remove(0)),
            _ => None,
        }
    }

    /// Get the number of pending commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an iterator over pending commands in firing order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduledCommand> {
        self.entries.iter()
    }

    /// Drop all pending commands.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
