//! URL entry card with language choice and usage steps.

use leptos::prelude::*;

use crate::components::language_select::LanguageSelect;
use crate::state::summary::SummaryState;

const HOWTO_STEPS: &[&str] = &[
    "Enter a website address",
    "The page is summarized for you",
    "Listen to the summary read aloud",
];

/// Landing card: URL field, language picker, submit button, usage steps.
///
/// The URL text lives in a page-owned signal so typing does not churn the
/// shared summary state.
#[component]
pub fn InputCard(url: RwSignal<String>, on_summarize: Callback<()>) -> impl IntoView {
    let summary = expect_context::<RwSignal<SummaryState>>();

    let loading = move || summary.get().loading;
    let submit_disabled = move || url.get().trim().is_empty() || summary.get().loading;
    let on_submit_click = move |_| on_summarize.run(());

    view! {
        <div class="card input-card">
            <div class="card__head">
                <div>
                    <h2 class="card__title">"Enter a webpage address"</h2>
                    <p class="card__subtitle">"Paste the address of the page you want summarized"</p>
                </div>
            </div>
            <div class="card__body">
                <input
                    class="input-card__url"
                    type="url"
                    placeholder="https://example.com/product-page"
                    aria-label="Webpage address"
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                />
                <div class="input-card__language">
                    <LanguageSelect />
                </div>
                <button
                    class="button button--primary input-card__submit"
                    on:click=on_submit_click
                    disabled=submit_disabled
                >
                    <Show when=loading>
                        <span class="input-card__spinner" aria-hidden="true"></span>
                    </Show>
                    {move || if loading() { "Analyzing..." } else { "Summarize" }}
                </button>
                <div class="input-card__howto">
                    <h3 class="input-card__howto-title">"How it works"</h3>
                    {HOWTO_STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <div class="howto-item">
                                    <div class="howto-item__step">{index + 1}</div>
                                    <span class="howto-item__text">{*step}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
