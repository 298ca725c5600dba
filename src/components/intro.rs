//! Page header explaining why the reader landed here.

use leptos::prelude::*;

#[component]
pub fn Intro() -> impl IntoView {
    view! {
        <header>
            <h1>"What is this?"</h1>
            <p>
                "If someone sent you to this page, you may have had a stupid question, "
                "or asked something you could easily find in "
                <a href="https://www.google.com">"google"</a>
                ". Or you maybe just didn't even understand your own code and they "
                "couldn't help you with it."
            </p>
            <br/>
            <p>
                "The point being you don't know enough JavaScript to ask a formal "
                "question, so please... " <b>"Learn JavaScript."</b>
            </p>
        </header>
    }
}
