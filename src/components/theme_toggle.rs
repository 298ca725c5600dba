//! Floating dark-mode toggle button.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme::{TOGGLE_BUTTON_ID, ThemeController};

/// Fixed-position toggle button. The theme controller binds its click
/// listener here once the button is mounted; icon and background track
/// the `UiState` mirror.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let controller: Rc<RefCell<Option<ThemeController>>> = Rc::new(RefCell::new(None));
    Effect::new(move || {
        if controller.borrow().is_some() {
            return;
        }
        let mut started = ThemeController::new(move |theme| {
            ui.update(|state| state.dark_mode = theme.is_dark());
        });
        started.start();
        *controller.borrow_mut() = Some(started);
    });

    let icon_class = move || {
        if ui.get().dark_mode {
            "theme-toggle theme-toggle--light-icon"
        } else {
            "theme-toggle theme-toggle--dark-icon"
        }
    };
    let background = move || if ui.get().dark_mode { "#313131" } else { "#868686" };

    view! {
        <button
            id=TOGGLE_BUTTON_ID
            class=icon_class
            style:background-color=background
            aria-label="Toggle dark mode"
        ></button>
    }
}
