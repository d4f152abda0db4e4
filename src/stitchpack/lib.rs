//! # Stitchpack Architecture
//!
//! Stitchpack moves embroidery designs in and out of a small binary container
//! so that tools outside the Python embroidery ecosystem can read and write
//! stitch data without parsing any machine format themselves.
//!
//! Like any UI-agnostic library, the CLI is one client among many. The core
//! never prints and never exits.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, render.rs)                    │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Fills in configured defaults                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - export, import, inspect, config                          │
//! │  - Returns CmdResult with messages, never prints            │
//! └─────────────────────────────────────────────────────────────┘
//!                   │                          │
//!                   ▼                          ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Codec (codec/)               │ │  Backend (backend/)       │
//! │  - Container encode/decode    │ │  - PatternBackend trait   │
//! │  - Thread metadata as JSON    │ │  - pyembroidery, memory   │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## The Container
//!
//! A container is a stitch count, the stitches as little-endian `i32`
//! triples, then a length-prefixed JSON array of thread records. See
//! [`codec::container`] for the exact layout.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each command
//! - [`codec`]: The container format
//! - [`backend`]: Reading and writing real embroidery files
//! - [`model`]: Core data types (`Stitch`, `Thread`, `Pattern`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod backend;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
