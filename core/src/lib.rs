//! Schema types for launcher extensions.
//!
//! This crate defines the data contract between extension authors and a
//! command-palette host:
//!
//! - [`Extension`] / [`Manifest`] — what an extension contributes: display
//!   metadata, commands, and top-level actions.
//! - [`Command`] / [`ParamDef`] — one invocable entry point and the
//!   arguments it accepts, with a closed [`CommandMode`] and
//!   [`ParamType`] per field.
//! - [`Action`] — a single executable effect ([`CopyAction`],
//!   [`OpenAction`], [`RunAction`]), discriminated by its `type` tag.
//! - [`List`] / [`Detail`] — the page shapes a host renders from command
//!   output.
//!
//! Everything here is shape, not behavior. The types round-trip through
//! JSON via [`serde`], and decoding rejects unknown tags on the closed
//! enumerations. All other checking (name uniqueness, matching a run
//! action's params against the target command's declarations, resolving
//! cross-extension references) belongs to the host that consumes the
//! manifest.
//!
//! # Example
//!
//! ```
//! use extension_schema_core::*;
//!
//! let manifest = Manifest::new("GitHub Gists")
//!     .with_description("Browse and create gists")
//!     .with_command(
//!         Command::new("list", CommandMode::Filter)
//!             .with_param(ParamDef::optional("public", ParamType::Boolean)),
//!     )
//!     .with_action(OpenAction::new("Open Gists", "https://gist.github.com"));
//!
//! let extension = Extension::new("gists", manifest);
//!
//! let encoded = serde_json::to_string(&extension).unwrap();
//! let decoded: Extension = serde_json::from_str(&encoded).unwrap();
//! assert_eq!(decoded, extension);
//! ```

mod action;
mod manifest;
mod page;

pub use action::{Action, CopyAction, OpenAction, ParamValue, Params, RunAction};
pub use manifest::{Command, CommandMode, Extension, Manifest, ParamDef, ParamType, TagError};
pub use page::{Detail, EmptyView, List, ListItem, Metadata};
