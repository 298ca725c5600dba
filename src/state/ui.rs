#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared through context: the current dark-mode flag.
///
/// Derived state only; the cookie jar owns the persisted preference, and
/// this mirror is refreshed by the theme controller's change callback so
/// reactive views (toggle icon, sample styling) stay in sync.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
