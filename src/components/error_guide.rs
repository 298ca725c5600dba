//! Sections teaching how to read an error and its stack trace.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Example error shown in the walkthrough.
const ERROR_SAMPLE: &str = "An error occurred:\n\
TypeError: Cannot read property 'Symbol(Symbol.iterator)' of undefined\n\
\x20   at performDivision (/path/to/your/code.js:2:12)\n\
\x20   at Object.<anonymous> (/path/to/your/code.js:7:18)\n\
\x20   at Module._compile (internal/modules/cjs/loader.js:1085:14)\n\
\x20   at Object.Module._extensions..js (internal/modules/cjs/loader.js:1114:10)\n\
\x20   at Module.load (internal/modules/cjs/loader.js:950:32)\n\
\x20   at Function.Module._load (internal/modules/cjs/loader.js:790:12)\n\
\x20   at Function.executeUserEntryPoint [as runMain] (internal/modules/run_main.js:76:12)\n\
\x20   at internal/main/run_main_module.js:17:47";

#[component]
pub fn ErrorGuide() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // The sample block swaps highlight styles with the theme.
    let sample_class = move || {
        if ui.get().dark_mode {
            "error-sample error-sample--dark"
        } else {
            "error-sample"
        }
    };

    view! {
        <section>
            <h3>"Learn about your error"</h3>
            <p>"Learn to retrieve data from your error and read the stack trace, know how to separate it"</p>
        </section>
        <section>
            <p>"Here is an example error:"</p>
            <pre class=sample_class><code>{ERROR_SAMPLE}</code></pre>
        </section>
        <section>
            <p>
                "It basically tells us what the problem is at the first line in this "
                "case " <i>"\"Cannot read property 'Symbol(Symbol.iterator)' of undefined\""</i>
                ". This first line is what we should search on google"
            </p>
        </section>
        <section>
            <p>"What is the stack trace?"</p>
            <ul>
                <li><p>"The stack trace is basically every step your code had to go trough to call the function that threw the error."</p></li>
                <li><p>"The stack trace basically works from top being the closer to the function that threw to the bottom which is most likely runtime code."</p></li>
            </ul>
        </section>
        <section>
            <p>"How to find where the error happened? (step by step)"</p>
            <ul>
                <li>
                    <p>
                        "As mentioned earlier the top line is the closer to our code, so "
                        "we must check in this case "
                        <i>"\"performDivision (/path/to/your/code.js:2:12)\""</i>
                        " which is in the file /path/to/your/code.js in the line 2 character 12."
                    </p>
                </li>
                <li>
                    <p>
                        "If the error was thrown from a underlying function or handler "
                        "we can use "
                        <a href="https://code.visualstudio.com/docs/editor/editingevolved">"code navigation"</a>
                        " or go to the next stack trace line."
                    </p>
                </li>
            </ul>
            <p>
                "For more info on the Error object in JavaScript refer to "
                <a href="https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Error">"this page"</a>
                " in MDN."
            </p>
        </section>
        <section>
            <p>"When you know all of that, you can just ask a good question like:"</p>
            <br/>
            <blockquote>
                "\"I have this error, I don't understand what it means by " <i>"\"Symbol(Symbol.iterator)\""</i> "."<br/>
                "I searched the following on google: " <i>"\"Javascript Symbol.iterator\""</i> " but it didn't give me any result I could understand."<br/>
                "The stack trace says it's on this line but here is the whole function anyways, and here are the definitions for the custom functions ran inside."<br/>
                "<insert definitions here>\""
            </blockquote>
        </section>
    }
}
