// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repo;
pub mod store;
pub mod time;
pub mod util;

pub use repo::InMemoryDocumentRepo;
pub use store::RecordingStore;
pub use time::fixed_now;
pub use util::FixedClock;
