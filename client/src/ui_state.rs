//! Dashboard UI state with partial persistence.
//!
//! View mode, theme, and the flagged-identity set survive a reload; the
//! current page, search text, sort key, and filters always start fresh.

use crate::api::ListParams;
use crate::error::ClientResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Tile,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub page: u64,
    pub limit: u64,
    pub sort_by: Option<String>,
    pub search: Option<String>,
    pub class_filter: Option<String>,
    pub min_attendance: Option<f64>,
    pub sidebar_open: bool,
    pub view_mode: ViewMode,
    pub theme: Theme,
    pub flagged_ids: BTreeSet<i64>,
}

/// The subset of the UI state that survives a reload.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedUi {
    view_mode: ViewMode,
    theme: Theme,
    flagged_ids: BTreeSet<i64>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            sort_by: None,
            search: None,
            class_filter: None,
            min_attendance: None,
            sidebar_open: true,
            view_mode: ViewMode::Tile,
            theme: Theme::Light,
            flagged_ids: BTreeSet::new(),
        }
    }
}

impl UiState {
    /// Loads the persisted subset from `path` on top of the defaults.
    ///
    /// A missing or unreadable file falls back to the defaults, matching how
    /// a corrupt persisted blob should never break startup.
    pub fn load(path: &Path) -> Self {
        let mut state = Self::default();

        if let Ok(raw) = fs::read_to_string(path) {
            if let Ok(persisted) = serde_json::from_str::<PersistedUi>(&raw) {
                state.view_mode = persisted.view_mode;
                state.theme = persisted.theme;
                state.flagged_ids = persisted.flagged_ids;
            }
        }

        state
    }

    /// Writes the persisted subset to `path`.
    pub fn save(&self, path: &Path) -> ClientResult<()> {
        let persisted = PersistedUi {
            view_mode: self.view_mode,
            theme: self.theme,
            flagged_ids: self.flagged_ids.clone(),
        };
        fs::write(path, serde_json::to_string(&persisted)?)?;
        Ok(())
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Tile => ViewMode::Grid,
            ViewMode::Grid => ViewMode::Tile,
        };
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_page(&mut self, page: u64) {
        self.page = page;
    }

    pub fn toggle_flag(&mut self, id: i64) {
        if !self.flagged_ids.remove(&id) {
            self.flagged_ids.insert(id);
        }
    }

    pub fn is_flagged(&self, id: i64) -> bool {
        self.flagged_ids.contains(&id)
    }

    /// Derives the listing request for the current UI state.
    pub fn to_list_params(&self) -> ListParams {
        ListParams {
            page: Some(self.page),
            limit: Some(self.limit),
            sort_by: self.sort_by.clone(),
            class: self.class_filter.clone(),
            min_attendance: self.min_attendance,
            query: self.search.clone(),
        }
    }
}
