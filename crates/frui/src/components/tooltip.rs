use std::time::Duration;

use super::*;

const TOOLTIP_CLASS: &str = "frui-tooltip";

#[component]
/// Tooltip anchored to its children.
///
/// Side flags pick the placement: `bottom` with `left` is the bottom-left
/// corner, no flag at all falls back to the configured default side. Passing
/// `show` makes visibility controlled; otherwise hovering opens it.
pub fn Tooltip(
    #[prop(into)] text: MaybeSignal<String>,
    #[prop(optional)] top: bool,
    #[prop(optional)] bottom: bool,
    #[prop(optional)] left: bool,
    #[prop(optional)] right: bool,
    #[prop(optional, into)] show: Option<MaybeSignal<bool>>,
    #[prop(optional)] theme: ThemeProps,
    #[prop(optional)] config: ThemeConfig,
    #[prop(optional)] attributes: Attributes,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let config = checked_config(config);
    let text = Signal::derive(move || text.get());
    let visible = match show {
        Some(show) => ControlledState::controlled(Signal::derive(move || show.get())),
        None => ControlledState::new(false),
    };
    let sides = SideFlags {
        top,
        bottom,
        left,
        right,
    }
    .or(config.default_side);
    let clearance = config.clearance;
    let delay = Duration::from_millis(u64::from(config.tooltip_delay_ms));

    let anchor_ref = create_node_ref::<html::Span>();
    let body_ref = create_node_ref::<html::Div>();
    let hovering = create_rw_signal(false);
    let layout = create_rw_signal(ClassStyle::with_class(TOOLTIP_CLASS));
    let themed = store_value(theme_classes("", &theme, None));

    let reposition = move || {
        let (Some(anchor), Some(body)) = (anchor_ref.get_untracked(), body_ref.get_untracked())
        else {
            logging::debug_warn!("tooltip positioned before its nodes mounted");
            return;
        };
        layout.set(float_layout(
            TOOLTIP_CLASS,
            &rect_of(&anchor),
            &rect_of(&body),
            sides,
            PositionMode::Absolute,
            clearance,
        ));
    };

    create_effect(move |_| {
        if visible.get() {
            request_animation_frame(reposition);
        }
    });

    let body = create_memo(move |_| {
        themed.with_value(|themed| layout.with(|layout| tooltip_body(themed, layout)))
    });

    let on_enter = move |_| {
        hovering.set(true);
        if delay.is_zero() {
            visible.set(true);
        } else {
            set_timeout(
                move || {
                    if hovering.get_untracked() {
                        visible.set(true);
                    }
                },
                delay,
            );
        }
    };
    let on_leave = move |_| {
        hovering.set(false);
        visible.set(false);
    };

    let container = view! {
        <span
            class=merge_class("frui-tooltip-container", layout_class)
            node_ref=anchor_ref
            data-frui-state=move || open_token(visible.get())
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            {children()}
            <Show when=move || visible.get() fallback=|| ()>
                <div
                    node_ref=body_ref
                    role="tooltip"
                    class=move || body.with(ClassStyle::class_name)
                    style=move || body.with(ClassStyle::style_attr)
                >
                    {move || text.get()}
                </div>
            </Show>
        </span>
    };
    forward_attributes(container, &attributes)
}

/// Caller and theme styles first, then placement; classes follow the layout.
fn tooltip_body(themed: &ClassStyle, layout: &ClassStyle) -> ClassStyle {
    let mut acc = ClassStyle::new().with_styles(themed.styles());
    acc.merge(layout);
    for class in themed.classes() {
        acc.push(class.clone());
    }
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unplaced_body_is_already_taken_out_of_flow() {
        let themed = theme_classes("", &ThemeProps::new().flag("info"), None);
        let body = tooltip_body(&themed, &ClassStyle::with_class(TOOLTIP_CLASS));

        assert_eq!(body.class_name(), "frui-tooltip frui-tx-info");
        assert_eq!(body.style_attr(), "");
    }

    #[test]
    fn placed_body_keeps_caller_offsets() {
        let themed = theme_classes("", &ThemeProps::new().style("top", "2px"), None);
        let layout = float_layout(
            TOOLTIP_CLASS,
            &Rect::sized(100.0, 20.0),
            &Rect::sized(50.0, 10.0),
            SideFlags::only(Side::Bottom).with(Side::Left),
            PositionMode::Absolute,
            frui_theme::DEFAULT_CLEARANCE,
        );
        let body = tooltip_body(&themed, &layout);

        assert!(body.contains("frui-tooltip-arrow-top"));
        assert_eq!(body.style("top"), Some("2px"));
        assert_eq!(body.style("left"), Some("0px"));
    }
}
