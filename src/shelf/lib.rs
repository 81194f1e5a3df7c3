//! # Shelf Architecture
//!
//! Shelf is an interactive library desk: books, magazines and clients held in
//! memory and managed through a nested numeric menu. The menu is one client of
//! a small library core; nothing below the menu knows about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - Flags, config, logging setup, exit codes                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Menu Layer (menu/, input.rs)                               │
//! │  - Main / Client / Item menus over one shared Session       │
//! │  - Validated prompts, rendering of results and errors       │
//! │  - Generic over the reader and writer, never stdin directly │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns Result<CmdResult>     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Create / read / update / delete / list per entity        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, in-memory Library with ordered maps     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Repository misses and clashes come back as `ShelfError::NotFound` and
//! `ShelfError::DuplicateKey`. The menu action that triggered them prints a
//! message and the menu keeps running. Only end of input and I/O failures
//! leave the menu loop.
//!
//! ## Testing Strategy
//!
//! 1. **Store and commands**: unit tests against `Library` and its fixtures.
//! 2. **Menus**: scripted sessions over `Cursor` input and a `Vec<u8>` writer.
//! 3. **Binary**: `tests/` drives the built executable through stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each action
//! - [`store`]: Repository trait and the in-memory library
//! - [`model`]: `Item`, `Client` and their kinds
//! - [`validation`]: Integer, alphabetic and email predicates
//! - [`input`]: Re-prompting line reader
//! - [`menu`]: The menu state machine
//! - [`config`]: Configuration file
//! - [`logging`]: Tracing setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod menu;
pub mod model;
pub mod store;
pub mod validation;
