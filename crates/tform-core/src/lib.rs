#![forbid(unsafe_code)]

//! Core terminal plumbing: the session guard, key decoding, the driver
//! trait, and the scripted test double behind `test-helpers`.

pub mod event;
pub mod session;
pub mod terminal;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;
