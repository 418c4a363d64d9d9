//! jvpp-gen-compiler
//!
//! This crate implements:
//!  1) Naming conversions and message classification (`naming`, `classify`),
//!  2) The wire type table and input verification (`types`, `verifier`),
//!  3) A language-neutral description of generated files (`ir`) printed by a
//!     `Backend` (`gen_java`),
//!  4) The callback, DTO and future facade generators,
//!  5) Configuration and the `compile_api` entry point.

pub mod error;
pub mod config;
pub mod naming;
pub mod classify;
pub mod types;
pub mod verifier;
pub mod ir;
pub mod traits;
pub mod utils;
pub mod gen_java;
pub mod output;
pub mod dump_reply;
pub mod callback_gen;
pub mod dto_gen;
pub mod future_gen;
pub mod compiler;

pub use compiler::{compile_api, compile_api_with, GenerationReport};
pub use config::{GeneratorConfig, NamingConfig, OutputLayout};
pub use error::GenError;
pub use gen_java::JavaBackend;
