//! Page shapes a host renders from command output.
//!
//! Commands in `filter`, `search`, and `detail` modes emit one of these
//! shapes; the host turns them into UI. Like the manifest types they are
//! pure data, and any action attached to a row or view is dispatched by
//! the host.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Action;

/// A scrollable list of items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Shown in place of the rows when `items` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_view: Option<EmptyView>,
    /// Rows in display order. Always present on the wire, possibly empty.
    #[serde(default)]
    pub items: Vec<ListItem>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_item(mut self, item: ListItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_empty_view(mut self, view: EmptyView) -> Self {
        self.empty_view = Some(view);
        self
    }
}

/// One row of a [`List`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Stable identity across refreshes, when the producer has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Short trailing annotations rendered after the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessories: Option<Vec<String>>,
    /// Actions offered while the row is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Metadata>>,
}

impl ListItem {
    pub fn new(title: &str) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            subtitle: None,
            accessories: None,
            actions: None,
            metadata: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_accessory(mut self, accessory: &str) -> Self {
        self.accessories
            .get_or_insert_with(Vec::new)
            .push(accessory.to_string());
        self
    }

    pub fn with_action(mut self, action: impl Into<Action>) -> Self {
        self.actions.get_or_insert_with(Vec::new).push(action.into());
        self
    }

    pub fn with_metadata(mut self, name: &str, metadata: Metadata) -> Self {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(name.to_string(), metadata);
        self
    }
}

/// A block of text, optionally syntax highlighted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Actions offered while the view is open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
    /// Body text, rendered as markdown unless `language` selects syntax
    /// highlighting.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Detail {
    pub fn new(text: &str) -> Self {
        Self {
            title: None,
            actions: None,
            text: text.to_string(),
            language: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn with_action(mut self, action: impl Into<Action>) -> Self {
        self.actions.get_or_insert_with(Vec::new).push(action.into());
        self
    }
}

/// Placeholder shown when a list has no rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmptyView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
}

/// One named metadata entry on a [`ListItem`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
