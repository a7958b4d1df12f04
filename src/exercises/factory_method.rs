// Factory Method: each notification channel decides which notification it
// creates. Callers only ever talk to the creator.

use std::str::FromStr;

use tracing::debug;

use crate::console::Console;
use crate::error::{ExerciseError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Email,
    Sms,
    Push,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::Email => "Sending an Email Notification...",
            Notification::Sms => "Sending an SMS Notification...",
            Notification::Push => "Sending a Push Notification...",
        }
    }

    pub fn notify_user(&self, console: &dyn Console) {
        console.line(self.message());
    }
}

/// The creator side: one variant per concrete factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Sms,
    Push,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Email, Channel::Sms, Channel::Push];

    pub fn create_notification(self) -> Notification {
        debug!(channel = ?self, "creating notification");
        match self {
            Channel::Email => Notification::Email,
            Channel::Sms => Notification::Sms,
            Channel::Push => Notification::Push,
        }
    }
}

impl FromStr for Channel {
    type Err = ExerciseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Channel::Email),
            "sms" => Ok(Channel::Sms),
            "push" => Ok(Channel::Push),
            _ => Err(ExerciseError::unrecognized("notification channel", s)),
        }
    }
}

pub fn run(console: &dyn Console) {
    for channel in Channel::ALL {
        channel.create_notification().notify_user(console);
    }
}
