use leptos::ev::MouseEvent;

use super::*;

#[component]
/// Themed push button.
pub fn Button(
    #[prop(optional)] theme: ThemeProps,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] attributes: Attributes,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = theme_classes("frui-button", &theme, layout_class);
    let button = view! {
        <button
            type="button"
            class=class.class_name()
            style=class.style_attr()
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    };
    forward_attributes(button, &attributes)
}

#[component]
/// Inline status label.
pub fn Badge(
    #[prop(optional)] theme: ThemeProps,
    #[prop(optional)] attributes: Attributes,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = theme_classes("frui-badge", &theme, layout_class);
    let badge = view! {
        <span class=class.class_name() style=class.style_attr()>
            {children()}
        </span>
    };
    forward_attributes(badge, &attributes)
}
