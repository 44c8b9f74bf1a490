use leptos::ev::MouseEvent;

use super::*;

#[component]
/// Tab set container. Tabs and panels share a [`ControlledState`] handle
/// holding the active tab value.
pub fn Tabs(
    #[prop(optional)] theme: ThemeProps,
    #[prop(optional)] attributes: Attributes,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = theme_classes("frui-tabs", &theme, layout_class);
    let tabs = view! {
        <div class=class.class_name() style=class.style_attr()>
            {children()}
        </div>
    };
    forward_attributes(tabs, &attributes)
}

/// Whether the tab identified by `value` is the active one (tracked).
fn is_active(state: ControlledState<String>, value: &str) -> bool {
    state.get() == value
}

#[component]
/// Row of tab buttons.
pub fn TabList(
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=merge_class("frui-tab-list", layout_class) role="tablist" aria-label=aria_label>
            {children()}
        </div>
    }
}

#[component]
/// Tab trigger selecting `value`.
pub fn TabButton(
    state: ControlledState<String>,
    #[prop(into)] value: String,
    #[prop(optional)] theme: ThemeProps,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let base = store_value(theme_classes("frui-tab", &theme, layout_class));
    let value = store_value(value);
    let selected = Signal::derive(move || value.with_value(|value| is_active(state, value)));

    view! {
        <button
            type="button"
            role="tab"
            aria-selected=move || selected.get().to_string()
            class=move || {
                let mut class = base.get_value();
                if selected.get() {
                    class.push("frui-tab-active");
                }
                class.class_name()
            }
            style=move || base.with_value(ClassStyle::style_attr)
            on:click=move |_: MouseEvent| state.set(value.get_value())
        >
            {children()}
        </button>
    }
}

#[component]
/// Content rendered while its tab is active.
pub fn TabPanel(
    state: ControlledState<String>,
    #[prop(into)] value: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let value = store_value(value);
    let class = merge_class("frui-tab-panel", layout_class);

    view! {
        <Show when=move || value.with_value(|value| is_active(state, value)) fallback=|| ()>
            <div class=class.clone() role="tabpanel">
                {children()}
            </div>
        </Show>
    }
}
