// src/emit/mod.rs

//! Task registration and tag emission.
//!
//! - [`emitter`] writes the tag lines for a task.
//! - [`registrar`] applies the `active` switch and produces [`RunnerTask`]s.

pub mod emitter;
pub mod registrar;

pub use emitter::TagEmitter;
pub use registrar::{Discovery, Registrar, RunnerTask};
