use leptos::prelude::*;

use crate::field_name::field_name;

const BOX_CLASS: &str = "m-2.5 p-2 border border-[#ccc] rounded";
const LABEL_CLASS: &str = "flex items-center cursor-pointer";
const TEXT_CLASS: &str = "ml-2 font-bold";

/// Labeled checkbox for including a resume section.
///
/// The checkbox name is derived from `section_name` (see [`field_name`]); the
/// text is shown verbatim. Only the initial checked state is set here, the
/// surrounding form owns the value after that.
#[component]
pub fn SectionToggle(
    /// Section label, e.g. "Work Experience"
    #[prop(into)]
    section_name: String,
    /// Initial checked state
    #[prop(optional)]
    is_enabled_by_default: bool,
) -> impl IntoView {
    if section_name.trim().is_empty() {
        tracing::warn!(label = ?section_name, "rendering section toggle with a blank label");
    }
    let name = field_name(&section_name);

    view! {
        <div class=BOX_CLASS>
            <label class=LABEL_CLASS>
                <input type="checkbox" name=name checked=is_enabled_by_default />
                <span class=TEXT_CLASS>{section_name}</span>
            </label>
        </div>
    }
}
