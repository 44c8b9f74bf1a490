use leptos::ev::{KeyboardEvent, MouseEvent};

use super::*;

#[component]
/// Button that opens a menu laid out next to it.
///
/// The menu is a layout sibling of the trigger, so it is placed without a
/// gap or arrow. With no side flag it opens below, left-aligned.
pub fn Dropdown(
    #[prop(into)] label: MaybeSignal<String>,
    #[prop(optional)] state: Option<ControlledState<bool>>,
    #[prop(optional)] top: bool,
    #[prop(optional)] bottom: bool,
    #[prop(optional)] left: bool,
    #[prop(optional)] right: bool,
    #[prop(optional)] theme: ThemeProps,
    #[prop(optional)] attributes: Attributes,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let open = open_state(state);
    let requested = SideFlags {
        top,
        bottom,
        left,
        right,
    };
    let sides = if requested.is_empty() {
        SideFlags::only(Side::Bottom).with(Side::Left)
    } else {
        requested
    };

    let trigger_ref = create_node_ref::<html::Button>();
    let menu_ref = create_node_ref::<html::Div>();
    let layout = create_rw_signal(ClassStyle::with_class("frui-dropdown-menu"));
    let trigger_class = theme_classes("frui-dropdown-trigger", &theme, None).class_name();

    let reposition = move || {
        let (Some(trigger), Some(menu)) = (trigger_ref.get_untracked(), menu_ref.get_untracked())
        else {
            logging::debug_warn!("dropdown positioned before its nodes mounted");
            return;
        };
        layout.set(float_layout(
            "frui-dropdown-menu",
            &rect_of(&trigger),
            &rect_of(&menu),
            sides,
            PositionMode::Relative,
            0.0,
        ));
    };

    create_effect(move |_| {
        if open.get() {
            request_animation_frame(reposition);
        }
    });

    let container = view! {
        <div
            class=merge_class("frui-dropdown", layout_class)
            data-frui-state=move || open_token(open.get())
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" && open.get_untracked() {
                    ev.prevent_default();
                    open.set(false);
                }
            }
        >
            <button
                type="button"
                node_ref=trigger_ref
                class=trigger_class
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_: MouseEvent| open.toggle()
            >
                {move || label.get()}
            </button>
            <Show when=move || open.get() fallback=|| ()>
                <div
                    node_ref=menu_ref
                    role="menu"
                    class=move || layout.with(ClassStyle::class_name)
                    style=move || layout.with(ClassStyle::style_attr)
                >
                    {children()}
                </div>
            </Show>
        </div>
    };
    forward_attributes(container, &attributes)
}

#[component]
/// Menu entry that closes its dropdown when chosen.
pub fn DropdownItem(
    state: ControlledState<bool>,
    #[prop(optional)] theme: ThemeProps,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_select: Option<Callback<MouseEvent>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = theme_classes("frui-dropdown-item", &theme, layout_class);
    view! {
        <button
            type="button"
            role="menuitem"
            class=class.class_name()
            style=class.style_attr()
            disabled=move || disabled.get()
            on:click=move |ev| {
                select_and_close(state, || {
                    if let Some(on_select) = on_select.as_ref() {
                        on_select.call(ev);
                    }
                })
            }
        >
            {children()}
        </button>
    }
}

/// Runs the item's action, then closes the owning dropdown.
fn select_and_close(state: ControlledState<bool>, select: impl FnOnce()) {
    select();
    state.set(false);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn choosing_an_item_runs_it_then_closes() {
        let runtime = create_runtime();
        let open = ControlledState::new(true);
        let seen_open = create_rw_signal(None::<bool>);

        select_and_close(open, || seen_open.set(Some(open.get_untracked())));

        assert_eq!(seen_open.get_untracked(), Some(true));
        assert!(!open.get_untracked());
        runtime.dispose();
    }

    #[test]
    fn controlled_dropdown_reports_close_to_owner() {
        let runtime = create_runtime();
        let owner = create_rw_signal(true);
        let open = ControlledState::controlled(owner)
            .on_change(Callback::new(move |next| owner.set(next)));

        select_and_close(open, || {});

        assert!(!owner.get_untracked());
        assert!(!open.get_untracked());
        runtime.dispose();
    }
}
