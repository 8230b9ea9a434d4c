//! Common test utilities
//!
//! This module is shared across all integration tests

pub mod fixtures;
pub mod recorder;

#[allow(unused_imports)]
pub use fixtures::{fixture_engine, fixture_store, FixtureFiles, INFO_JSON, MENU_JSON};
#[allow(unused_imports)]
pub use recorder::{Call, RecordingMessenger};
