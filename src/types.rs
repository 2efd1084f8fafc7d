use chrono::{prelude::DateTime, Local, Timelike};
use std::time::{SystemTime, UNIX_EPOCH};

// A Tick is a millisecond timestamp, used to stamp popups.
pub type Tick = u64;

pub const MILLISECONDS: Tick = 1;
pub const SECONDS: Tick = 1000 * MILLISECONDS;

pub type TournamentId = u64;
pub type CandidateId = u64;
pub type UserId = u64;
pub type CommentId = u64;

pub type AppResult<T> = Result<T, anyhow::Error>;

pub trait SystemTimeTick {
    fn now() -> Self;
    fn from_system_time(time: SystemTime) -> Self;
    fn as_secs(&self) -> Tick;
    fn as_system_time(&self) -> SystemTime;
    fn formatted_as_time(&self) -> String;
}

impl SystemTimeTick for Tick {
    fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    fn from_system_time(time: SystemTime) -> Tick {
        time.duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Tick
    }

    fn as_secs(&self) -> Tick {
        self / SECONDS
    }

    fn as_system_time(&self) -> SystemTime {
        UNIX_EPOCH + std::time::Duration::from_millis(*self)
    }

    fn formatted_as_time(&self) -> String {
        let dt: DateTime<Local> = self.as_system_time().into();
        format!("{:02}:{:02}:{:02}", dt.hour(), dt.minute(), dt.second())
    }
}
