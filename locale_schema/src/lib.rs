//! Structural schema analysis for nested locale dictionaries.
//!
//! A locale dictionary maps keys to message templates or further nested
//! dictionaries. [`analyze`] derives the call contract of every logical
//! key: flattened dot-joined paths, addressable scopes, plural variant
//! groups recognized from `key#suffix` naming, and per-key
//! [`ParameterSchema`] values listing the placeholders a caller must
//! supply. The analysis is pure and order-preserving, so one dictionary
//! always produces one serialized schema, byte for byte.
//!
//! Malformed plural conventions never fail the analysis; they degrade to
//! ordinary handling and are reported as [`Diagnostic`] values.
//!
//! ```
//! use locale_schema::{LocaleTree, analyze};
//!
//! let tree: LocaleTree = serde_json::from_str(
//!     r#"{
//!         "hello": "Hello {name}",
//!         "cart": {"item#one": "an item", "item#other": "{count} items"}
//!     }"#,
//! )?;
//! let analysis = analyze(&tree)?;
//!
//! let hello = analysis.schema("hello").expect("hello is a key");
//! assert_eq!(hello.parameters(), ["name"]);
//! assert!(analysis.is_plural_in("cart", "item"));
//! assert!(analysis.scopes().contains("cart"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod analysis;
mod diagnostics;
mod error;
mod flatten;
pub mod params;
mod plural;
mod registry;
pub mod render;
pub mod routing;
mod schema;
mod scope;
mod value;

pub use analysis::{LocaleAnalysis, analyze};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::{SchemaError, SchemaResult};
pub use flatten::{FlattenedEntry, flatten, nest};
pub use params::extract_parameters;
pub use plural::{KeyPartition, PluralGroup, PluralSuffix, partition, split_suffix};
pub use registry::{LocaleRegistry, parse_locale_tag, read_locale_file};
pub use schema::{COUNT_PARAMETER, CountHint, MessageSchema, ParameterSchema, PluralSchema};
pub use scope::{ScopeSet, qualify, relative_key};
pub use value::{LocaleNode, LocaleTree, LocaleValue, MAX_DEPTH};

pub use unic_langid::LanguageIdentifier;
