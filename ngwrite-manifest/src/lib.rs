// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration objects and the `ngwrite.toml` manifest.
//!
//! [`Config`] is the open, insertion-ordered `key -> value` mapping every
//! Angular decorator argument is described with. The [`Manifest`] groups
//! configs by class and adds routes, application config and the locations of
//! external symbols.

mod config;
mod error;
mod file;
mod manifest;
mod route;
mod validate;

pub use config::{Config, ConfigValue};
pub use error::{Error, Result};
pub use file::{DEFAULT_FILENAME, ManifestFile, STARTER_MANIFEST};
pub use manifest::{ClassKind, Manifest, ProjectConfig};
pub use route::Route;
