//! # Q Connect Four
//!
//! Connect Four against an automated player that learns a tabular
//! state-action value function with one-step Q-learning and keeps it on disk
//! between sessions.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, state keys
//! - [`ai`] — Agent trait, move policy, value store
//! - [`session`] — Turn/reward state machine and self-play tallies
//! - [`checkpoint`] — Value table persistence
//! - [`ui`] — Console rendering, human input, mode menu
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`logging`] — Logger setup

pub mod ai;
pub mod checkpoint;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod session;
pub mod ui;
