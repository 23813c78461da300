// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod store;
pub mod time;

// 時刻関連
pub use time::{FixedClock, SteppingClock, fixed_now};

// ストア関連
pub use store::{InMemoryBoardStore, StoreCall, TEST_AUDITOR};
