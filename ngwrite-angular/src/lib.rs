// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Angular source generation for ngwrite.
//!
//! Turns configuration objects into TypeScript: decorator arguments for
//! `@Component`, `@Directive` and `@NgModule`, application config literals
//! and route tables.
//!
//! # Usage
//!
//! ```
//! use ngwrite_angular::{Config, write_component_decorator};
//! use ngwrite_codegen::CodeBuilder;
//!
//! let config = Config::new()
//!     .with("selector", "app-root")
//!     .with("changeDetection", 0);
//!
//! let mut writer = CodeBuilder::typescript();
//! write_component_decorator(&mut writer, &config)?;
//!
//! assert_eq!(
//!     writer.build(),
//!     "@Component({\n  selector: 'app-root',\n  changeDetection: ChangeDetectionStrategy.OnPush\n})\n"
//! );
//! # Ok::<(), ngwrite_angular::Error>(())
//! ```
//!
//! The [`Generator`] builds whole files from a [`Manifest`](ngwrite_manifest::Manifest).

mod code_file;
mod emit;
mod enums;
mod error;
mod generator;
mod policy;
mod serializer;
mod symbols;

pub mod ast;

pub use code_file::{CodeFile, Snippet};
pub use emit::{
    write_application_config, write_component_config, write_component_decorator,
    write_directive_config, write_directive_decorator, write_module_config,
    write_module_decorator, write_properties, write_route, write_routes,
};
pub use enums::{CHANGE_DETECTION_STRATEGY, EnumTable, VIEW_ENCAPSULATION};
pub use error::{Error, Result};
pub use generator::{GenerateResult, Generator, PreviewFile};
pub use ngwrite_manifest::{Config, ConfigValue, Route};
pub use policy::{APPLICATION, COMPONENT, DIRECTIVE, KeyPolicy, MODULE, PropertyPolicy};
pub use serializer::{Property, PropertySerializer};
