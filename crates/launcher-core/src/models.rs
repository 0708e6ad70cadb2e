use serde::{Deserialize, Serialize};

/// A repository as seen by the pipeline, independent of the provider it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Fully-qualified "owner/name"
    pub identity: String,
    /// Repository description, if the provider returned one
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the repository is a fork of another one
    #[serde(default, rename = "fork")]
    pub is_fork: bool,
}

impl RepositoryRecord {
    pub fn new(identity: impl Into<String>, description: Option<String>, is_fork: bool) -> Self {
        Self {
            identity: identity.into(),
            description,
            is_fork,
        }
    }

    /// Records with a blank identity come from malformed provider payloads
    pub fn is_blank(&self) -> bool {
        self.identity.trim().is_empty()
    }

    /// Text the query filter matches against: identity followed by the description
    pub fn search_text(&self) -> String {
        match self.description.as_deref() {
            Some(desc) if !desc.is_empty() => format!("{} {}", self.identity, desc),
            _ => self.identity.clone(),
        }
    }
}

/// Alternate action shown while a modifier key is held
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierAction {
    pub subtitle: String,
    pub arg: String,
}

/// Modifier variants of an item, keyed by modifier key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<ModifierAction>,
}

/// One selectable launcher entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub title: String,
    pub subtitle: String,
    /// Primary target, usually a URL
    pub arg: String,
    #[serde(default)]
    pub mods: Modifiers,
}

impl ActionItem {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>, arg: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            arg: arg.into(),
            mods: Modifiers::default(),
        }
    }

    /// Attach a command-modifier variant that copies `arg` instead of opening it
    pub fn with_copy(mut self, subtitle: impl Into<String>) -> Self {
        self.mods.command = Some(ModifierAction {
            subtitle: subtitle.into(),
            arg: self.arg.clone(),
        });
        self
    }
}

/// Cache hint for the launcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheHint {
    pub seconds: u64,
    pub loosereload: bool,
}

/// The single response object emitted per invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub cache: CacheHint,
    pub items: Vec<ActionItem>,
}

impl Envelope {
    pub fn new(cache_seconds: u64, items: Vec<ActionItem>) -> Self {
        Self {
            cache: CacheHint {
                seconds: cache_seconds,
                loosereload: true,
            },
            items,
        }
    }
}
