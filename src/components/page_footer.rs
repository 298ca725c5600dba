//! Footer with related reading and the repository link.

use leptos::prelude::*;

#[component]
pub fn PageFooter() -> impl IntoView {
    view! {
        <footer>
            <div>
                <p>"Similar problems:"</p>
                <ul>
                    <li><a href="https://xyproblem.info/">"The XY problem"</a></li>
                    <li><a href="https://nohello.net/">"No hello"</a></li>
                    <li><a href="https://stackoverflow.com/help/how-to-ask">"How do i ask a good question?"</a></li>
                    <li><a href="https://nometa.xyz/">"No meta"</a></li>
                </ul>
            </div>
            <div>
                <p>
                    "Star this in "
                    <a href="https://github.com/stifskere/LearnJsBeforeAsking">"GitHub"</a>
                </p>
            </div>
        </footer>
    }
}
