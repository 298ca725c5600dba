//! Sections on how (and how not) to ask for help.

use leptos::prelude::*;

use crate::components::section_heading::LinkableHeading;

#[component]
pub fn AskingGuide() -> impl IntoView {
    view! {
        <section>
            <LinkableHeading id="doyoureallywanttoask" text="You really want to ask for help? ok."/>
            <h2>"What not to do?"</h2>
            <h3>"Don't ask or say the following things"</h3>
            <ul>
                <li><p>"I have this error, but I don't know what it means."</p></li>
                <li><p>"I can send zip and send you my code in DM (or not even in dm)."</p></li>
                <li><p>"What's that? (and then send a obvious copied code that you don't understand)."</p></li>
                <li><p>"How to solve this? (and again send obvious copied code that you don't understand)."</p></li>
            </ul>
            <h3>"Don't do the following things"</h3>
            <ul>
                <li><p>"Don't ask the same in multiple channels, search for the help channel and ask once there."</p></li>
                <li><p>"Don't ping staff or other members for help, wait for someone to answer, it's not their problem, it's yours."</p></li>
                <li><p>"Don't send zips and pretend other's to open them (covered next in this guide)."</p></li>
            </ul>
        </section>
        <section>
            <h2>"What to do!"</h2>
            <h3>"Good practices to send your code to someone else"</h3>
            <ul>
                <li>
                    <p>"If your code isn't hosted in a git repository:"</p>
                    <ul>
                        <li>
                            <p>
                                "You can use a paste site like "
                                <a href="https://pastebin.com/">"pastebin"</a> ", "
                                <a href="https://controlc.com/">"ControlC"</a> " or "
                                <a href="https://rentry.co/">"ReEntry"</a> "."
                            </p>
                        </li>
                        <li>
                            <p>
                                "You can also paste small portions of the code in discord "
                                <b>"ALWAYS USING CODEBLOCKS"</b> ", refer to the "
                                <a href="https://www.technipages.com/discord-code-blocks/">"following guide"</a>
                                " for the codeblocks."
                            </p>
                        </li>
                        <li>
                            <p>
                                "If you need your code to be tested by someone use sites like "
                                <a href="https://codepen.io/">"code pen"</a> " or "
                                <a href="https://jsfiddle.net/">"js fiddle"</a> "."
                            </p>
                        </li>
                    </ul>
                </li>
                <li>
                    <p>
                        "Otherwise you can send a link to your remote git repository "
                        "(with the exact code that gives the problem linked), you can use "
                        <a href="https://docs.github.com/en/get-started/writing-on-github/working-with-advanced-formatting/creating-a-permanent-link-to-a-code-snippet">"this guide"</a>
                        "."
                    </p>
                </li>
            </ul>
            <h3>"Avoid stupid questions"</h3>
            <ul>
                <li>
                    <p>
                        "Search on your topic before asking, your question may have "
                        "already been answered in some "
                        <a href="https://stackoverflow.com/">"Stack Overflow"</a>
                        " thread."
                    </p>
                </li>
                <li>
                    <p>
                        "If your problem is pretty general you can find it in the "
                        <a href="https://developer.mozilla.org/en-US/">"official JavaScript documentation"</a>
                        "."
                    </p>
                </li>
                <li>
                    <p>
                        "You can also maybe ask ChatGPT and try to reason yourself the "
                        "problem with it, this topic is already discussed "
                        <a href="https://www.searchenginejournal.com/when-to-use-chatgpt-and-when-to-use-google/484883/">"here"</a>
                        "."
                    </p>
                </li>
                <li><p>"If you are using a library maybe refer to the docs or a guide they may have first before asking."</p></li>
                <li><p>"If you are going to copy and paste code, always send the source of such."</p></li>
            </ul>
        </section>
    }
}
