//! Dark mode state, persistence, and style application.
//!
//! The persisted preference is the literal cookie value `"true"` or
//! `"false"` under the `dark-mode` name; every read re-derives the
//! [`Theme`] from that string comparison. Style application is absolute
//! (set the color, set the class present or absent), so applying the same
//! theme twice is indistinguishable from applying it once.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

use crate::util::cookies::{CookieJar, CookieOptions, CookieStore, DocumentJar, Expiry, SameSite};

/// Name of the preference cookie.
pub const DARK_MODE_COOKIE: &str = "dark-mode";

/// Id of the toggle button the controller binds to.
pub const TOGGLE_BUTTON_ID: &str = "dark-mode-toggle";

/// How long a written preference lives, in days.
const PREFERENCE_DAYS: i64 = 10;

/// Headings and paragraphs whose text color follows the theme. Headings
/// carrying the `heading-link` share class keep their own styling.
#[cfg(target_arch = "wasm32")]
const TEXT_SELECTOR: &str = "h1:not([class^=\"heading-link\"]), h2, h3, h4, h5, h6, p";
#[cfg(target_arch = "wasm32")]
const BULLET_SELECTOR: &str = "ul li";
#[cfg(target_arch = "wasm32")]
const FOOTER_SELECTOR: &str = "footer";
#[cfg(target_arch = "wasm32")]
const QUOTE_SELECTOR: &str = "blockquote";

#[cfg(target_arch = "wasm32")]
const WHITE_BULLETS_CLASS: &str = "white-bullets";
#[cfg(target_arch = "wasm32")]
const DARK_QUOTE_CLASS: &str = "dark-quote-background";
#[cfg(target_arch = "wasm32")]
const DARK_TEXT_CLASS: &str = "dark-text";

/// The two visual states of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Derive the theme from the persisted boolean preference.
    pub fn from_preference(enabled: bool) -> Self {
        if enabled { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn page_background(self) -> &'static str {
        match self {
            Self::Light => "#ffffff",
            Self::Dark => "#282828",
        }
    }

    pub fn text_color(self) -> &'static str {
        match self {
            Self::Light => "#000000",
            Self::Dark => "#ffffff",
        }
    }
}

/// Read the dark-mode preference: `true` iff the stored value is the
/// literal string `"true"`. Absence and every other value read as
/// `false`.
pub fn read_preference<J: CookieJar>(store: &CookieStore<J>) -> bool {
    store
        .get(DARK_MODE_COOKIE)
        .is_some_and(|value| value == "true")
}

/// Persist the preference as the literal `"true"`/`"false"` with the
/// fixed contract: 10-day expiry, `secure`, `SameSite=Strict`.
pub fn write_preference<J: CookieJar>(store: &mut CookieStore<J>, enabled: bool) {
    let options = CookieOptions {
        expires: Some(Expiry::Days(PREFERENCE_DAYS)),
        secure: true,
        same_site: Some(SameSite::Strict),
        ..CookieOptions::default()
    };
    store.create_or_rewrite(
        DARK_MODE_COOKIE,
        if enabled { "true" } else { "false" },
        Some(&options),
    );
}

/// Negate the stored preference, persist it, and re-derive the theme
/// from the jar so the returned state always matches what was written.
pub fn toggle_preference<J: CookieJar>(store: &mut CookieStore<J>) -> Theme {
    let next = !read_preference(store);
    write_preference(store, next);
    Theme::from_preference(read_preference(store))
}

/// Apply a theme to the current document: body background, text color on
/// headings and paragraphs (outside share-link headings), bullet-marker
/// and quote/footer classes. Idempotent; a no-op outside a browser.
pub fn apply(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        use crate::util::dom;

        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        if let Some(body) = document.body() {
            let _ = body
                .style()
                .set_property("background-color", theme.page_background());
        }
        for element in dom::query_all(TEXT_SELECTOR) {
            if let Some(element) = element.dyn_ref::<web_sys::HtmlElement>() {
                let _ = element.style().set_property("color", theme.text_color());
            }
        }
        for element in dom::query_all(BULLET_SELECTOR) {
            set_class(&element, WHITE_BULLETS_CLASS, theme.is_dark());
        }
        for element in dom::query_all(FOOTER_SELECTOR) {
            set_class(&element, DARK_QUOTE_CLASS, theme.is_dark());
        }
        for element in dom::query_all(QUOTE_SELECTOR) {
            set_class(&element, DARK_QUOTE_CLASS, theme.is_dark());
            set_class(&element, DARK_TEXT_CLASS, theme.is_dark());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

#[cfg(target_arch = "wasm32")]
fn set_class(element: &web_sys::Element, class: &str, present: bool) {
    let class_list = element.class_list();
    let _ = if present {
        class_list.add_1(class)
    } else {
        class_list.remove_1(class)
    };
}

/// Owns the toggle-button binding and the preference/apply cycle.
///
/// `start` reads the preference once, applies it, and attaches the click
/// listener; `stop` detaches it. The attach/detach pair is explicit and
/// independent of any UI-framework lifecycle, and repeated start/stop
/// cycles never accumulate duplicate bindings.
pub struct ThemeController {
    on_change: Rc<dyn Fn(Theme)>,
    #[cfg(target_arch = "wasm32")]
    click_handler: Option<wasm_bindgen::closure::Closure<dyn FnMut()>>,
}

impl ThemeController {
    /// `on_change` is invoked with the theme after every apply, so a
    /// reactive mirror (button icon, sample styling) can track it.
    pub fn new(on_change: impl Fn(Theme) + 'static) -> Self {
        Self {
            on_change: Rc::new(on_change),
            #[cfg(target_arch = "wasm32")]
            click_handler: None,
        }
    }

    /// Read the persisted preference, apply it, notify, and attach the
    /// toggle listener. The toggle button must be mounted by the time
    /// this runs.
    pub fn start(&mut self) {
        self.stop();

        let store = CookieStore::new(DocumentJar);
        let theme = Theme::from_preference(read_preference(&store));
        apply(theme);
        (self.on_change)(theme);
        log::debug!("theme controller started ({theme:?})");

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let on_change = Rc::clone(&self.on_change);
            let handler = Closure::wrap(Box::new(move || {
                let mut store = CookieStore::new(DocumentJar);
                let theme = toggle_preference(&mut store);
                apply(theme);
                on_change(theme);
                log::debug!("dark mode toggled ({theme:?})");
            }) as Box<dyn FnMut()>);

            let button: web_sys::HtmlElement = crate::util::dom::get_by_id(TOGGLE_BUTTON_ID);
            let _ = button
                .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
            self.click_handler = Some(handler);
        }
    }

    /// Detach the toggle listener if attached. Idempotent.
    pub fn stop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            if let Some(handler) = self.click_handler.take() {
                let button: web_sys::HtmlElement = crate::util::dom::get_by_id(TOGGLE_BUTTON_ID);
                let _ = button
                    .remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
                log::debug!("theme controller stopped");
            }
        }
    }
}
