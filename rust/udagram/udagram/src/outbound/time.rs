use chrono::{DateTime, Utc};

use crate::domain::ports::TimeGetter;

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTime;

impl TimeGetter for DefaultTime {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
