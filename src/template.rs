//! Panel chrome loaded from console.toml

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result, ResultExt};

const TEMPLATE_DIR: &str = "termcon";
const TEMPLATE_FILENAME: &str = "console.toml";

/// Labels for the title-bar affordances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Affordances {
    /// Shown while wrap is off and entries scroll horizontally.
    pub scroll_label: String,
    /// Shown while wrap is on.
    pub wrap_label: String,
    /// Accessible title of the collapse toggle while collapsed.
    pub expand_title: String,
    /// Accessible title of the collapse toggle while expanded.
    pub collapse_title: String,
}

impl Default for Affordances {
    fn default() -> Self {
        Self {
            scroll_label: "Scroll".to_string(),
            wrap_label: "Wrap".to_string(),
            expand_title: "Expand Console".to_string(),
            collapse_title: "Collapse Console".to_string(),
        }
    }
}

/// Panel chrome: title, initial collapsed flag, affordance labels.
///
/// Loaded once at startup; every field falls back to its default when the
/// file omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelTemplate {
    pub title: String,
    /// Collapse the panel as soon as it becomes visible.
    pub start_collapsed: bool,
    pub affordances: Affordances,
}

impl Default for PanelTemplate {
    fn default() -> Self {
        Self {
            title: "Console".to_string(),
            start_collapsed: false,
            affordances: Affordances::default(),
        }
    }
}

impl PanelTemplate {
    /// Load a template from an explicitly requested path.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::TemplateNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template {}", path.display()))?;
        toml::from_str(&content).map_err(|e| Error::template_invalid(path, e.to_string()))
    }

    /// Resolve the template for startup.
    ///
    /// An explicit path must load; a missing or unparsable file there is a
    /// failure. The default path is merely optional configuration, so its
    /// absence yields the built-in chrome.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = default_path();
                if path.exists() {
                    Self::load(&path)
                } else {
                    debug!("No template at {:?}, using built-in chrome", path);
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Default template location under the user config dir.
pub fn default_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(TEMPLATE_DIR).join(TEMPLATE_FILENAME)
}
