// src/infrastructure/time.rs
use crate::application::ports::time::Clock;
use chrono::{DateTime, SubsecRound, Utc};

/// Wall clock truncated to microseconds, the precision of `timestamptz`.
#[derive(Debug, Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }
}
