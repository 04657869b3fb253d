use leptos::prelude::*;

/// Titled group of form controls, with an anchor link to the group
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    let anchor_href = format!("#{}", id);

    view! {
        <fieldset id=id class="mb-8 border border-gray-300 rounded p-4">
            <legend class="font-bold uppercase px-1">
                {title}
                <a href=anchor_href class="ml-1 text-gray-400 no-underline">"\u{00A7}"</a>
            </legend>
            {children()}
        </fieldset>
    }
}
