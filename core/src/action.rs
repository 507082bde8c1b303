//! Action definitions.
//!
//! An [`Action`] is one executable effect a host can dispatch on behalf of
//! an extension: copy text to the clipboard, open a target, or run a
//! command. Actions are pure data; the host owns dispatch and everything
//! that can fail during it.
//!
//! On the wire an action is a JSON object discriminated by its `type`
//! field, with exactly three legal tags:
//!
//! ```json
//! { "type": "copy", "title": "Copy URL", "text": "https://example.com" }
//! { "type": "open", "title": "Open Docs", "target": "https://docs.rs" }
//! { "type": "run",  "title": "Build", "command": "make", "params": { "target": "all" } }
//! ```
//!
//! # Examples
//!
//! ```
//! use extension_schema_core::{Action, RunAction};
//!
//! let action: Action = RunAction::new("Build", "make")
//!     .with_param("target", "all")
//!     .with_param("verbose", true)
//!     .into();
//!
//! assert_eq!(action.title(), "Build");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Argument payload supplied to a [`RunAction`] at invocation time.
///
/// Keys are parameter names. Ordering carries no meaning (the payload is
/// a set of key/value pairs, not a sequence); a sorted map keeps
/// encodings deterministic.
pub type Params = BTreeMap<String, ParamValue>;

/// A single argument value: a string, a number, or a boolean.
///
/// Serialized without a wrapper, as the bare JSON value.
///
/// # Examples
///
/// ```
/// use extension_schema_core::ParamValue;
///
/// let value = ParamValue::from("all");
/// assert_eq!(value.as_str(), Some("all"));
///
/// let value = ParamValue::from(true);
/// assert_eq!(value.as_bool(), Some(true));
/// assert_eq!(value.as_str(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// String value.
    String(String),
    /// Numeric value (JSON number).
    Number(f64),
    /// Boolean value.
    Bool(bool),
}

impl ParamValue {
    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Wire name of the value's type (`string`, `number`, or `boolean`),
    /// matching the tags of [`ParamType`](crate::ParamType).
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::String(_) => "string",
            ParamValue::Number(_) => "number",
            ParamValue::Bool(_) => "boolean",
        }
    }

    /// Converts a loosely typed JSON value into a param value.
    ///
    /// Returns `None` for JSON shapes that are not legal param values
    /// (null, arrays, objects).
    ///
    /// # Examples
    ///
    /// ```
    /// use extension_schema_core::ParamValue;
    ///
    /// let value = ParamValue::from_json(&serde_json::json!("all")).unwrap();
    /// assert_eq!(value, ParamValue::from("all"));
    ///
    /// assert!(ParamValue::from_json(&serde_json::json!([1, 2])).is_none());
    /// ```
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(ParamValue::String(s.clone())),
            serde_json::Value::Number(n) => n.as_f64().map(ParamValue::Number),
            serde_json::Value::Bool(b) => Some(ParamValue::Bool(*b)),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Number(value as f64)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<ParamValue> for serde_json::Value {
    fn from(value: ParamValue) -> Self {
        match value {
            ParamValue::String(s) => serde_json::Value::String(s),
            ParamValue::Number(n) => serde_json::Value::from(n),
            ParamValue::Bool(b) => serde_json::Value::Bool(b),
        }
    }
}

/// Copies literal text to the system clipboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyAction {
    /// Display label shown by the host.
    pub title: String,
    /// Literal payload placed on the clipboard.
    pub text: String,
}

impl CopyAction {
    /// Creates a copy action.
    pub fn new(title: &str, text: &str) -> Self {
        Self {
            title: title.to_string(),
            text: text.to_string(),
        }
    }
}

/// Opens a target with the system handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAction {
    /// Display label shown by the host.
    pub title: String,
    /// URI, filesystem path, or application identifier to open.
    pub target: String,
}

impl OpenAction {
    /// Creates an open action.
    pub fn new(title: &str, target: &str) -> Self {
        Self {
            title: title.to_string(),
            target: target.to_string(),
        }
    }
}

/// Invokes a command, optionally in another extension's namespace.
///
/// # Examples
///
/// ```
/// use extension_schema_core::RunAction;
///
/// let action = RunAction::new("Search Issues", "search")
///     .in_extension("github")
///     .with_param("state", "open");
///
/// assert_eq!(action.extension.as_deref(), Some("github"));
/// assert_eq!(action.params.unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunAction {
    /// Display label shown by the host.
    pub title: String,
    /// Name of the command to invoke.
    pub command: String,
    /// Registry name of the extension owning `command`; the invoking
    /// extension's own namespace when absent. This is a weak reference:
    /// the referenced extension may not exist, and resolving it is the
    /// host's job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Arguments forwarded to the command. Whether they match the
    /// command's declared parameters is checked by the host, not here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl RunAction {
    /// Creates a run action targeting `command` in the current extension.
    pub fn new(title: &str, command: &str) -> Self {
        Self {
            title: title.to_string(),
            command: command.to_string(),
            extension: None,
            params: None,
        }
    }

    /// Scopes the command to another extension's namespace.
    pub fn in_extension(mut self, name: &str) -> Self {
        self.extension = Some(name.to_string());
        self
    }

    /// Adds one argument to the params payload.
    pub fn with_param(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.params
            .get_or_insert_with(Params::new)
            .insert(name.to_string(), value.into());
        self
    }
}

/// One executable effect a host can dispatch.
///
/// Closed tagged union discriminated by the `type` field; a conforming
/// decoder rejects any tag other than `copy`, `open`, or `run`. Every
/// variant carries a `title` used as its display label.
///
/// # Examples
///
/// ```
/// use extension_schema_core::{Action, CopyAction};
///
/// let action = Action::from(CopyAction::new("Copy SHA", "deadbeef"));
/// let json = serde_json::to_value(&action).unwrap();
/// assert_eq!(json["type"], "copy");
///
/// // Unknown tags do not decode.
/// let bad = serde_json::json!({ "type": "exec", "title": "x", "command": "rm" });
/// assert!(serde_json::from_value::<Action>(bad).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// Copy text to the clipboard.
    Copy(CopyAction),
    /// Open a target.
    Open(OpenAction),
    /// Run a command.
    Run(RunAction),
}

impl Action {
    /// Display label, common to every variant.
    pub fn title(&self) -> &str {
        match self {
            Action::Copy(action) => &action.title,
            Action::Open(action) => &action.title,
            Action::Run(action) => &action.title,
        }
    }
}

impl From<CopyAction> for Action {
    fn from(action: CopyAction) -> Self {
        Action::Copy(action)
    }
}

impl From<OpenAction> for Action {
    fn from(action: OpenAction) -> Self {
        Action::Open(action)
    }
}

impl From<RunAction> for Action {
    fn from(action: RunAction) -> Self {
        Action::Run(action)
    }
}
