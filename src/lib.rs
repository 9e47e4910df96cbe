//! Schemautil – reading schema definition files and a few string helpers.
//!
//! ## Schema files
//! A schema file is plain text holding statements such as `CREATE TABLE ...;`
//! interleaved with comment lines. The [`schema`] module turns such a file
//! into the ordered list of its statements:
//! * Lines starting with `--` or `#` are comments and are dropped whole.
//! * Other lines are appended, without a separator, to the statement being built.
//! * A line ending in `;` closes the statement, which is then trimmed and kept
//!   unless it is empty.
//! * Anything left unterminated at the end of the input is dropped.
//!
//! This is not a SQL parser. It knows nothing about quoting, so a `;` at the
//! end of a line always terminates, even inside a string literal.
//!
//! Comment prefixes and the terminator can be changed through
//! [`settings::ReaderSettings`], which may also be loaded from a config file.
//!
//! ## Durations
//! [`duration::format_duration`] renders seconds as `"1 day, 2 hours"` and
//! [`duration::parse_duration`] reads compact forms like `"2h30m"`.
//!
//! ## Text
//! [`text::closest_match`] finds an identifier by case-insensitive prefix or
//! exact match, alongside the [`text::is_numeric`] and [`text::is_uuid`]
//! predicates.
//!
//! ## Quick Start
//! ```
//! use schemautil::{get_statements, format_duration, closest_match};
//! let schema = "-- users\nCREATE TABLE users (\n  id INT\n);\n";
//! let statements = get_statements(schema.as_bytes()).unwrap();
//! assert_eq!(statements, vec!["CREATE TABLE users (  id INT);"]);
//! assert_eq!(format_duration(3_660), "1 hour, 1 minute");
//! assert_eq!(closest_match(&["Users", "UserRoles"], "user", false), Some("Users"));
//! ```
//!
//! ## Logging
//! Events are emitted through `tracing`; install a subscriber in the
//! application to see them.

pub mod duration;
pub mod error;
pub mod schema;
pub mod settings;
pub mod text;

pub use duration::{format_duration, parse_duration, DurationUnit};
pub use error::{Result, SchemaUtilError};
pub use schema::{get_statements, get_statements_from_path, SchemaReader, Statements};
pub use settings::ReaderSettings;
pub use text::{closest_match, is_numeric, is_uuid};
