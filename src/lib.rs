//! Screen UI library - testable modules for the four-button Pico 2 UI.
//!
//! This library contains the screen host, list engine, Pong simulation and
//! the concrete screens. The binary (`main.rs`) and the desktop simulator
//! plug in the display, buttons, timers and platform services.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the firmware and simulator use the `no_std` build.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Configuration
pub mod colors;
pub mod config;
pub mod palette;

// Platform contracts
pub mod input;
pub mod services;
pub mod surface;
pub mod timers;

// Screen framework
pub mod error;
pub mod host;
pub mod log_buffer;
pub mod list;
pub mod screen;

// Game logic
pub mod pong;

// Application
pub mod app;
pub mod screens;

#[cfg(test)]
pub(crate) mod testing;
