//! Sections pointing at learning material and practice sites.

use leptos::prelude::*;

use crate::components::section_heading::LinkableHeading;

#[component]
pub fn LearningSources() -> impl IntoView {
    view! {
        <section>
            <LinkableHeading id="howdoilearn" text="How do I learn JavaScript?"/>
            <p>
                "Internet is full of guides, documentation... A lot of things for you "
                "to learn, most languages, libraries or programs that have a big user "
                "base also have documentation (and are pretty well documented), the "
                "first version of JavaScript was made in a week, but you can still "
                "find documentation for most of the stuff out there."
            </p>
        </section>
        <section>
            <p>"Here are some learning sources you can use"</p>
            <ul>
                <li>
                    <h4>"Videos"</h4>
                    <a href="https://www.youtube.com/watch?v=W6NZfCO5SIk">"Beginners tutorial from Programming with Mosh."</a><br/>
                    <a href="https://www.youtube.com/watch?v=8dWL3wF_OMw">"JavaScript full course by Bro Code."</a><br/>
                    <a href="https://www.youtube.com/watch?v=PkZNo7MFNFg">"Free code camp beginners tutorial."</a><br/>
                </li>
                <li>
                    <h4>"Official guides"</h4>
                    <a href="https://developer.mozilla.org/en-US/">"Mozilla developer documentation"</a><br/>
                    <a href="https://www.w3schools.com/js/default.asp">"W3 schools"</a><br/>
                    <a href="https://javascript.info/">"JavaScript.info"</a>
                </li>
            </ul>
            <p>"Here are sources to test your knowledge"</p>
            <ul>
                <li><a href="https://www.hackerrank.com/">"HackerRank"</a></li>
                <li><a href="https://codeforces.com/">"Codeforces"</a></li>
                <li><a href="https://www.topcoder.com/">"TopCoder"</a></li>
                <li><a href="https://www.codewars.com/">"Codewars"</a></li>
                <li><a href="https://exercism.io/">"Exercism"</a></li>
                <li><a href="https://projecteuler.net/">"Project Euler"</a></li>
                <li><a href="https://www.spoj.com/">"Spoj"</a></li>
                <li><a href="https://www.codechef.com/">"CodeChef"</a></li>
                <li><a href="https://atcoder.jp/">"AtCoder"</a></li>
                <li><a href="https://leetcode.com/">"LeetCode"</a></li>
            </ul>
        </section>
        <section>
            <p>
                "Real life projects are also a good way to improve your skills, to "
                "get started with that, there is a github repository called "
                <a href="https://github.com/Asabeneh/30-Days-Of-JavaScript">"30 days of javascript"</a>
                " made by Asabeneh."
            </p>
            <br/>
            <p>
                "The best programmers are also the best google searchers, you can "
                "get started with this "
                <a href="https://support.google.com/websearch/answer/134479?hl=en">"small guide"</a>
                " made by google."
            </p>
        </section>
    }
}
