//! Root application component: context providers, title rotation, and
//! the page layout.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::asking_guide::AskingGuide;
use crate::components::error_guide::ErrorGuide;
use crate::components::intro::Intro;
use crate::components::learning_sources::LearningSources;
use crate::components::page_footer::PageFooter;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::UiState;

/// Document titles cycled while the page stays open.
const PAGE_TITLES: [&str; 10] = [
    "JavaScript Foundations: A Prerequisite for Asking Questions",
    "Master JavaScript Basics: Ask Better Questions",
    "Before You Ask: Learn JavaScript Fundamentals",
    "JavaScript Proficiency: Enhance Your Inquiries",
    "Unlocking JavaScript: The Key to Informed Questions",
    "Building a Strong Foundation: Learn JavaScript First",
    "JavaScript Essentials: Ask with Confidence",
    "Level Up Your Questions: Learn JavaScript",
    "JavaScript Primer: Ask Smarter, Get Better Answers",
    "Empower Your Queries: Learn JavaScript",
];

/// Milliseconds between document-title rotations.
#[cfg(target_arch = "wasm32")]
const TITLE_ROTATION_MS: u32 = 3_000;

/// Root application component.
///
/// Provides the shared `UiState` context, rotates the document title,
/// and composes the page sections plus the dark-mode toggle.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    let title_index = RwSignal::new(0_usize);

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use gloo_timers::callback::Interval;

        // Held for the page lifetime; dropping the Interval would stop
        // the rotation.
        let rotation: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        Effect::new(move || {
            if rotation.borrow().is_some() {
                return;
            }
            let tick = Interval::new(TITLE_ROTATION_MS, move || {
                title_index.update(|index| *index = (*index + 1) % PAGE_TITLES.len());
            });
            *rotation.borrow_mut() = Some(tick);
        });
    }

    view! {
        <Title text=move || PAGE_TITLES[title_index.get()]/>

        <Intro/>
        <LearningSources/>
        <AskingGuide/>
        <ErrorGuide/>
        <PageFooter/>
        <ThemeToggle/>
    }
}
