use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub color: String,
}

pub fn tag_label(name: &str) -> String {
    name.to_uppercase()
}

/// Chip with the tag color as background; the upper-cased name doubles
/// as the tooltip.
#[component]
pub fn ContactTag(tag: Tag) -> impl IntoView {
    let label = tag_label(&tag.name);
    let title = label.clone();
    view! {
        <span
            class="inline-flex items-center rounded-full px-2 py-0.5 text-xs font-medium text-white"
            style=format!("background-color: {};", tag.color)
            title=title
        >
            {label}
        </span>
    }
}
