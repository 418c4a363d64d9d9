//! jvpp-gen-schema
//!
//! The input side of the jvpp generator: API message descriptors as they
//! come out of the upstream `.api` parser, already flattened into
//! `name` / `args` / `types` triples.
//!
//! ```
//! use jvpp_gen_schema::ApiDescription;
//!
//! let api = ApiDescription::from_json(r#"[
//!     {"name": "show_version_reply",
//!      "args": ["context", "retval", "program"],
//!      "types": ["i32", "i32", "string"]}
//! ]"#).unwrap();
//!
//! assert_eq!(api.messages.len(), 1);
//! assert_eq!(api.messages[0].arguments().count(), 3);
//! ```

pub mod error;
pub mod message;

pub use error::DescriptorError;
pub use message::{ApiDescription, MessageDescriptor};
