use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::{Section, SectionToggle};
use crate::config::SectionEntry;
use crate::form::{SUBMITTED_MARKER, ToggleState, included_labels, toggle_states};

/// Server function returning the configured resume sections
#[server(FetchSections)]
pub async fn fetch_sections() -> Result<Vec<SectionEntry>, ServerFnError> {
    Ok(crate::config::sections_config().sections().to_vec())
}

#[component]
pub fn SectionsPage() -> impl IntoView {
    let sections = Resource::new(|| (), |_| fetch_sections());
    let query = use_query_map();

    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <header class="mb-8">
                <h1 class="text-2xl font-bold">"Resume Sections"</h1>
                <div class="text-gray-500 mt-2">"Pick the sections to include in the generated resume."</div>
            </header>

            <Suspense fallback=move || view! { <p class="text-gray-500">"Loading sections\u{2026}"</p> }>
                {move || {
                    sections.get().map(|result| {
                        match result {
                            Ok(entries) => {
                                let states = query.with(|q| toggle_states(&entries, |key| q.get(key).is_some()));
                                view! { <SectionsForm states=states /> }.into_any()
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to load resume sections");
                                view! {
                                    <div class="text-gray-500">"Resume sections are unavailable right now."</div>
                                }.into_any()
                            }
                        }
                    })
                }}
            </Suspense>
        </main>
    }
}

#[component]
fn SectionsForm(states: Vec<ToggleState>) -> impl IntoView {
    let included = included_labels(&states).join(", ");
    let included = if included.is_empty() { "none".to_string() } else { included };

    view! {
        <form method="get" action="/">
            <input type="hidden" name=SUBMITTED_MARKER value="1" />
            <Section id="sections" title="Sections">
                {states
                    .into_iter()
                    .map(|state| view! {
                        <SectionToggle section_name=state.label is_enabled_by_default=state.checked />
                    })
                    .collect_view()}
            </Section>
            <button
                type="submit"
                class="px-3 py-1 border border-gray-300 rounded hover:bg-gray-100 transition-colors cursor-pointer"
            >
                "Update"
            </button>
        </form>
        <div class="mt-4">
            <strong>"INCLUDED"</strong> "  " {included}
        </div>
    }
}
