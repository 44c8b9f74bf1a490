use leptos::ev::{KeyboardEvent, MouseEvent};

use super::*;

#[component]
/// Modal dialog shown while `state` is open.
///
/// Clicking the overlay or pressing Escape requests a close through the
/// state handle; a controlled owner decides whether it actually closes.
pub fn Dialog(
    state: ControlledState<bool>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = true)] dismissable: bool,
    #[prop(optional)] theme: ThemeProps,
    #[prop(optional)] attributes: Attributes,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let surface = store_value(theme_classes("frui-dialog", &theme, layout_class));
    let attributes = store_value(attributes);
    let title = store_value(title);

    let overlay_ref = create_node_ref::<html::Div>();

    let request_close = move || {
        if dismissable {
            state.set(false);
        }
    };

    // Escape only reaches the overlay once focus is inside it.
    create_effect(move |_| {
        if state.get() {
            request_animation_frame(move || {
                let Some(overlay) = overlay_ref.get_untracked() else {
                    logging::debug_warn!("dialog opened before its overlay mounted");
                    return;
                };
                if let Err(err) = overlay.focus() {
                    logging::debug_warn!("dialog focus failed: {err:?}");
                }
            });
        }
    });

    view! {
        <Show when=move || state.get() fallback=|| ()>
            <div
                node_ref=overlay_ref
                class="frui-dialog-overlay"
                tabindex="-1"
                on:click=move |_: MouseEvent| request_close()
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        request_close();
                    }
                }
            >
                {
                    let surface = surface.get_value();
                    let dialog = view! {
                        <div
                            role="dialog"
                            aria-modal="true"
                            class=surface.class_name()
                            style=surface.style_attr()
                            on:click=move |ev: MouseEvent| ev.stop_propagation()
                        >
                            {title.get_value().map(|title| view! {
                                <header class="frui-dialog-header">
                                    <span class="frui-dialog-title">{title}</span>
                                    <Show when=move || dismissable fallback=|| ()>
                                        <button
                                            type="button"
                                            class="frui-dialog-close"
                                            aria-label="Close"
                                            on:click=move |_: MouseEvent| request_close()
                                        >
                                            "×"
                                        </button>
                                    </Show>
                                </header>
                            })}
                            <div class="frui-dialog-body">{children()}</div>
                        </div>
                    };
                    forward_attributes(dialog, &attributes.get_value())
                }
            </div>
        </Show>
    }
}
