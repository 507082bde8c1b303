//! Extension manifests: metadata, commands, and parameter declarations.
//!
//! A [`Manifest`] describes what an extension contributes to the host:
//! display metadata, the [`Command`]s a user can invoke, and any
//! top-level [`Action`]s. An [`Extension`] is a manifest plus the
//! registry name it is installed under.
//!
//! The manifest is a contract, not a checked artifact: this crate
//! guarantees the closed enumerations ([`CommandMode`], [`ParamType`])
//! reject unknown tags when decoding, and nothing more. Name uniqueness
//! and the match between a run action's params and the target command's
//! declared parameters are host policy.
//!
//! # Examples
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
//!     .with_command(Command::new("create", CommandMode::Silent));
//!
//! let extension = Extension::new("gists", manifest);
//! assert_eq!(extension.command("list").unwrap().mode, CommandMode::Filter);
//! assert!(extension.command("delete").is_none());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Action;

/// Failure to parse a closed enumeration tag from its wire form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// Not one of `filter`, `search`, `detail`, `silent`, `action`.
    #[error("unknown command mode: {0}")]
    CommandMode(String),
    /// Not one of `string`, `number`, `boolean`.
    #[error("unknown param type: {0}")]
    ParamType(String),
}

/// Value type a command parameter accepts.
///
/// Closed enumeration; a conforming decoder rejects any other tag.
///
/// # Examples
///
/// ```
/// use extension_schema_core::ParamType;
///
/// let ty: ParamType = "boolean".parse().unwrap();
/// assert_eq!(ty, ParamType::Boolean);
/// assert_eq!(ty.as_str(), "boolean");
/// assert!("list".parse::<ParamType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// Free-form string.
    String,
    /// Numeric value.
    Number,
    /// Boolean value.
    Boolean,
}

impl ParamType {
    /// Wire form of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamType {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ParamType::String),
            "number" => Ok(ParamType::Number),
            "boolean" => Ok(ParamType::Boolean),
            other => Err(TagError::ParamType(other.to_string())),
        }
    }
}

/// Declared shape of one argument a command accepts.
///
/// # Examples
///
/// ```
/// use extension_schema_core::{ParamDef, ParamType};
///
/// let def = ParamDef::required("query", ParamType::String)
///     .with_description("Text to search for");
/// assert!(def.is_required());
///
/// let def = ParamDef::optional("limit", ParamType::Number);
/// assert!(!def.is_required());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDef {
    /// Identifier, unique within the owning command's parameter list.
    /// Uniqueness is host policy; the schema does not check it.
    pub name: String,
    /// Expected value type.
    #[serde(rename = "type")]
    pub param_type: ParamType,
    /// Human-readable explanation shown when prompting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the argument may be omitted at invocation time. Absent on
    /// the wire means required.
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

impl ParamDef {
    /// Creates a required parameter.
    pub fn required(name: &str, param_type: ParamType) -> Self {
        Self {
            name: name.to_string(),
            param_type,
            description: None,
            optional: false,
        }
    }

    /// Creates an optional parameter.
    pub fn optional(name: &str, param_type: ParamType) -> Self {
        Self {
            name: name.to_string(),
            param_type,
            description: None,
            optional: true,
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Whether the argument must be supplied at invocation time.
    pub fn is_required(&self) -> bool {
        !self.optional
    }
}

/// How the host presents and executes a command.
///
/// Closed enumeration; a conforming decoder rejects any other tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandMode {
    /// Interactive list, filtered client-side as the user types.
    Filter,
    /// List re-generated from the user's search text.
    Search,
    /// Detail view.
    Detail,
    /// Side-effect-only run with no UI.
    Silent,
    /// Direct action dispatch.
    Action,
}

impl CommandMode {
    /// Wire form of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandMode::Filter => "filter",
            CommandMode::Search => "search",
            CommandMode::Detail => "detail",
            CommandMode::Silent => "silent",
            CommandMode::Action => "action",
        }
    }
}

impl fmt::Display for CommandMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandMode {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "filter" => Ok(CommandMode::Filter),
            "search" => Ok(CommandMode::Search),
            "detail" => Ok(CommandMode::Detail),
            "silent" => Ok(CommandMode::Silent),
            "action" => Ok(CommandMode::Action),
            other => Err(TagError::CommandMode(other.to_string())),
        }
    }
}

/// One invocable entry point exposed by an extension.
///
/// # Examples
///
/// ```
/// use extension_schema_core::{Command, CommandMode, ParamDef, ParamType};
///
/// let command = Command::new("search", CommandMode::Search)
///     .with_description("Search the docs")
///     .with_param(ParamDef::required("query", ParamType::String))
///     .with_param(ParamDef::optional("limit", ParamType::Number));
///
/// assert_eq!(command.params().len(), 2);
/// assert!(command.param("query").unwrap().is_required());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Identifier, unique within the owning extension's command list.
    /// Uniqueness is host policy; the schema does not check it.
    pub name: String,
    /// Human-readable summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared parameters, in prompting order. Absent and present-empty
    /// are distinct on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<ParamDef>>,
    /// Presentation/execution mode.
    pub mode: CommandMode,
}

impl Command {
    /// Creates a command with no description or parameters.
    pub fn new(name: &str, mode: CommandMode) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            params: None,
            mode,
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Appends a parameter declaration.
    pub fn with_param(mut self, param: ParamDef) -> Self {
        self.params.get_or_insert_with(Vec::new).push(param);
        self
    }

    /// Declared parameters, empty when none were declared.
    pub fn params(&self) -> &[ParamDef] {
        self.params.as_deref().unwrap_or_default()
    }

    /// Finds a parameter declaration by name.
    pub fn param(&self, name: &str) -> Option<&ParamDef> {
        self.params().iter().find(|p| p.name == name)
    }
}

/// Metadata, commands, and actions an extension contributes.
///
/// Everything an extension is, minus the registry name it is installed
/// under (see [`Extension`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Display title.
    pub title: String,
    /// Human-readable summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Commands in declaration order, which is also display order.
    /// Absent and present-empty are distinct on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<Command>>,
    /// Actions the host can dispatch directly, outside any command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
}

impl Manifest {
    /// Creates a manifest with only a title.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            commands: None,
            actions: None,
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Appends a command.
    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.get_or_insert_with(Vec::new).push(command);
        self
    }

    /// Appends a top-level action.
    pub fn with_action(mut self, action: impl Into<Action>) -> Self {
        self.actions.get_or_insert_with(Vec::new).push(action.into());
        self
    }

    /// Declared commands, empty when none were declared.
    pub fn commands(&self) -> &[Command] {
        self.commands.as_deref().unwrap_or_default()
    }

    /// Top-level actions, empty when none were declared.
    pub fn actions(&self) -> &[Action] {
        self.actions.as_deref().unwrap_or_default()
    }

    /// Finds a command by name.
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands().iter().find(|c| c.name == name)
    }
}

/// A [`Manifest`] plus the registry name it is installed under.
///
/// `name` is the unique registry key a host and other extensions refer
/// to; the manifest's `title` is display-only. On the wire the manifest
/// fields are flattened next to `name`:
///
/// ```json
/// { "name": "gists", "title": "GitHub Gists", "commands": [] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    /// Registry key, unique across the host's installed extensions.
    pub name: String,
    /// The contributed manifest.
    #[serde(flatten)]
    pub manifest: Manifest,
}

impl Extension {
    /// Binds a manifest to its registry name.
    pub fn new(name: &str, manifest: Manifest) -> Self {
        Self {
            name: name.to_string(),
            manifest,
        }
    }

    /// Finds a command by name.
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.manifest.command(name)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
