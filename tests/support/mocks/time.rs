// tests/support/mocks/time.rs
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use project_board::application::ports::time::Clock;

/// テスト用の固定タイムスタンプ
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// 決定論的なタイムスタンプを返す
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// 常に `fixed_now()` を返す時計
#[derive(Debug, Default, Clone)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// 呼び出すたびに `fixed_now()` から1分ずつ進む時計
#[derive(Debug, Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::minutes(tick)
    }
}
