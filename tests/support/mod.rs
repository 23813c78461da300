// tests/support/mod.rs
// Shared by several integration test binaries; each binary uses only part of it.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use mocks::*;
