//! Section headings that hand out shareable anchor links.

use leptos::prelude::*;

use crate::util::share_link;

/// `h1` heading that copies its own `#id` URL to the clipboard and
/// navigates there when clicked. The `heading-link` class also excludes
/// it from the theme's text-color sweep.
#[component]
pub fn LinkableHeading(id: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <h1 id=id class="heading-link" on:click=move |_| share_link::copy_section_link(id)>
            {text}
        </h1>
    }
}
