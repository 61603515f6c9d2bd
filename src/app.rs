//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::summarizer::SummarizerPage;
use crate::state::playback::PlaybackState;
use crate::state::settings::load_settings;
use crate::state::summary::SummaryState;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// Persisted settings are loaded once here so every consumer sees the
/// same record from first render on.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let settings = RwSignal::new(load_settings());
    let summary = RwSignal::new(SummaryState::default());
    let playback = RwSignal::new(PlaybackState::default());

    provide_context(settings);
    provide_context(summary);
    provide_context(playback);

    view! {
        <Title text="PageSpeak"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SummarizerPage/>
            </Routes>
        </Router>
    }
}
