//! Preference Persistence
//!
//! Saves and restores the session preferences through localStorage. All
//! four fields go through one `save_preferences` call so a state change
//! cannot persist a partial set.

pub const KEY_POD_INPUT: &str = "podInput";
pub const KEY_CURRENT_PAGE: &str = "currentPage";
pub const KEY_SORT_PREFERENCE: &str = "sortPreference";
pub const KEY_PAGE_SIZE: &str = "pageSize";

pub const DEFAULT_SORT: &str = "newestFirst";
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Client preference state persisted across sessions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub draft_input: String,
    pub current_page: usize,
    pub sort_preference: String,
    pub page_size: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            draft_input: String::new(),
            current_page: 1,
            sort_preference: DEFAULT_SORT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn parse_or(raw: Option<String>, default: usize) -> usize {
    raw.and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// Restore persisted preferences, falling back to defaults field by field.
pub fn load_preferences() -> Preferences {
    let defaults = Preferences::default();
    let Some(storage) = local_storage() else {
        return defaults;
    };

    let read = |key: &str| storage.get_item(key).ok().flatten();

    Preferences {
        draft_input: read(KEY_POD_INPUT).unwrap_or(defaults.draft_input),
        current_page: parse_or(read(KEY_CURRENT_PAGE), defaults.current_page),
        sort_preference: read(KEY_SORT_PREFERENCE).unwrap_or(defaults.sort_preference),
        page_size: parse_or(read(KEY_PAGE_SIZE), defaults.page_size),
    }
}

/// Persist all preference fields under their localStorage keys.
pub fn save_preferences(prefs: &Preferences) {
    let Some(storage) = local_storage() else {
        return;
    };

    let _ = storage.set_item(KEY_POD_INPUT, &prefs.draft_input);
    let _ = storage.set_item(KEY_CURRENT_PAGE, &prefs.current_page.to_string());
    let _ = storage.set_item(KEY_SORT_PREFERENCE, &prefs.sort_preference);
    let _ = storage.set_item(KEY_PAGE_SIZE, &prefs.page_size.to_string());
}
