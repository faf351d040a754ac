//! Fast native strip.
//!
//! Trims leading and trailing whitespace from text and exposes the trimmer to
//! a dynamic host as `cstrip.strip`.
//!
//! ## What we do
//!
//! - Edge trimming over exactly four characters: space, tab, LF, CR
//! - Byte-level trimming for input that is not UTF-8
//! - A small module registry so a host can call `strip` with untyped values
//! - Argument validation at that boundary (arity, type, embedded NUL)
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no shared state. The trimmer borrows its input and
//! returns a sub-slice; the host wrapper returns a fresh owned copy. Safe to
//! call from any number of threads.
//!
//! ## Invariants worth knowing
//!
//! - Output has no leading or trailing member of the whitespace set
//! - Output is a contiguous substring of the input, or empty
//! - Output is empty iff the input is empty or all whitespace
//! - `strip(strip(s)) == strip(s)`
//!
//! ```rust
//! use cstrip::{Module, strip};
//! use serde_json::json;
//!
//! assert_eq!(strip("\t\nfoo\r\n"), "foo");
//!
//! let module = Module::cstrip();
//! let out = module.call("strip", &[json!("  hello world  ")]);
//! assert_eq!(out, Some(Ok(json!("hello world"))));
//! ```

mod args;
mod config;
mod error;
mod module;
mod whitespace;

pub use crate::args::{parse_single_text, type_name};
pub use crate::config::{
    DEFAULT_METHOD_DOC, DEFAULT_METHOD_NAME, DEFAULT_MODULE_NAME, ModuleConfig,
};
pub use crate::error::{ArgumentError, ConfigError};
pub use crate::module::{Method, Module, NativeFn, strip_method};
pub use crate::whitespace::{
    WHITESPACE, is_strip_whitespace, strip, strip_bounds, strip_bytes, strip_owned,
};
