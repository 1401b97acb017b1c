//! Selection persistence: JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use rangeslider_core::RangeSelection;

use crate::app::AppState;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Last selection; `None` means use the configured one.
    pub selection: Option<RangeSelection>,
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt state file");
            PersistedState::default()
        }),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        selection: Some(app.selection()),
    }
}

/// Apply persisted state to AppState. The saved selection is clamped into
/// the current configuration's range like any programmatic set.
pub fn apply(app: &mut AppState, state: PersistedState) {
    if let Some(selection) = state.selection {
        app.slider.set_selection(selection.lower, selection.upper);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::app::default_price_filter;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("rangeslider_persist_test");
        let path = dir.join("state.json");

        let state = PersistedState {
            selection: Some(RangeSelection {
                lower: 120.0,
                upper: 240.0,
            }),
        };

        save(&path, &state).unwrap();
        let loaded = load(&path);
        assert_eq!(loaded, state);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert_eq!(loaded.selection, None);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("rangeslider_persist_corrupt");
        let path = dir.join("state.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.selection, None);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn apply_clamps_into_configured_range() {
        let mut app = AppState::new(default_price_filter(), PathBuf::from("unused.json")).unwrap();
        apply(
            &mut app,
            PersistedState {
                selection: Some(RangeSelection {
                    lower: -40.0,
                    upper: 9_000.0,
                }),
            },
        );
        assert_eq!(app.selection(), RangeSelection { lower: 0.0, upper: 500.0 });
        assert_eq!(extract(&app).selection, Some(app.selection()));
    }
}
