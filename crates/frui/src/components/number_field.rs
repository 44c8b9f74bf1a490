use leptos::ev::{Event, FocusEvent, KeyboardEvent};

use super::*;

#[component]
/// Text input that keeps its value in grouped number form.
///
/// Input is reformatted on every keystroke, clamped to the bounds on blur,
/// and stepped with the arrow keys. Without an explicit `format` the
/// configured separator and decimal marks are used.
pub fn NumberField(
    #[prop(optional)] state: Option<ControlledState<String>>,
    #[prop(optional)] format: Option<NumberFormat>,
    #[prop(optional)] config: ThemeConfig,
    #[prop(default = 1.0)] step: f64,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] theme: ThemeProps,
    #[prop(optional)] attributes: Attributes,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let value = state.unwrap_or_else(|| ControlledState::new(String::new()));
    let format = store_value(format.unwrap_or_else(|| checked_config(config).number.format()));
    let base = store_value(theme_classes("frui-field", &theme, layout_class));
    let error = Signal::derive(move || error.get());
    let invalid = Signal::derive(move || error.with(Option::is_some));
    let input_ref = create_node_ref::<html::Input>();

    // A controlled owner may keep its value, in which case `prop:value` never
    // re-runs and the element would keep the raw text.
    let commit = move |next: String| {
        let rendered = commit_number(value, next);
        if let Some(input) = input_ref.get_untracked() {
            if input.value() != rendered {
                input.set_value(&rendered);
            }
        }
    };

    let on_input = move |ev: Event| {
        let raw = event_target_value(&ev);
        commit(format.with_value(|format| format.format(&raw)));
    };
    let on_blur = move |_: FocusEvent| {
        let current = value.get_untracked();
        let clamped = format.with_value(|format| format.clamp(&current));
        if clamped != current {
            commit(clamped);
        }
    };
    let on_keydown = move |ev: KeyboardEvent| {
        let delta = match ev.key().as_str() {
            "ArrowUp" => step,
            "ArrowDown" => -step,
            _ => return,
        };
        ev.prevent_default();
        let current = value.get_untracked();
        commit(format.with_value(|format| format.step(&current, delta)));
    };

    let input = view! {
        <input
            node_ref=input_ref
            type="text"
            inputmode="decimal"
            class=move || {
                let mut class = base.get_value();
                if invalid.get() {
                    class.push("frui-field-error");
                }
                class.class_name()
            }
            style=move || base.with_value(ClassStyle::style_attr)
            placeholder=placeholder
            aria-label=aria_label
            aria-invalid=move || invalid.get().to_string()
            prop:value=move || value.get()
            on:input=on_input
            on:blur=on_blur
            on:keydown=on_keydown
        />
    };

    view! {
        <div class="frui-field-container">
            {forward_attributes(input, &attributes)}
            <Show when=move || invalid.get() fallback=|| ()>
                <span class="frui-field-message" role="alert">
                    {move || error.get().unwrap_or_default()}
                </span>
            </Show>
        </div>
    }
}

/// Reports `next` and returns the text the field should now show.
fn commit_number(value: ControlledState<String>, next: String) -> String {
    value.set(next);
    value.get_untracked()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn uncontrolled_field_shows_the_formatted_text() {
        let runtime = create_runtime();
        let value = ControlledState::new(String::new());
        let format = NumberFormat::default();

        assert_eq!(commit_number(value, format.format("12a34.5")), "1,234.5");
        runtime.dispose();
    }

    #[test]
    fn controlled_field_shows_the_owner_value_when_rejected() {
        let runtime = create_runtime();
        let owner = create_rw_signal("10".to_string());
        let reported = create_rw_signal(Vec::<String>::new());
        let value = ControlledState::controlled(owner)
            .on_change(Callback::new(move |next| reported.update(|all| all.push(next))));

        assert_eq!(commit_number(value, "abc".to_string()), "10");
        assert_eq!(reported.get_untracked(), vec!["abc".to_string()]);
        runtime.dispose();
    }

    #[test]
    fn controlled_field_follows_an_owner_that_accepts() {
        let runtime = create_runtime();
        let owner = create_rw_signal(String::new());
        let value = ControlledState::controlled(owner)
            .on_change(Callback::new(move |next| owner.set(next)));

        assert_eq!(commit_number(value, "1,000".to_string()), "1,000");
        runtime.dispose();
    }
}
