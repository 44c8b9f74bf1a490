use leptos::ev::MouseEvent;

use super::*;

#[component]
/// Star rating from 1 to `max`. Choosing the current value again clears it.
pub fn Rating(
    #[prop(optional)] state: Option<ControlledState<u8>>,
    #[prop(default = 5)] max: u8,
    #[prop(optional)] read_only: bool,
    #[prop(optional)] theme: ThemeProps,
    #[prop(optional)] attributes: Attributes,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let value = state.unwrap_or_else(|| ControlledState::new(0));
    let class = theme_classes("frui-rating", &theme, layout_class);
    let hovered = create_rw_signal(None::<u8>);

    let stars = (1..=max)
        .map(|star| {
            let lit = move || hovered.get().unwrap_or_else(|| value.get()) >= star;
            view! {
                <button
                    type="button"
                    role="radio"
                    aria-checked=move || (value.get() == star).to_string()
                    aria-label=format!("{star} of {max}")
                    class=move || {
                        if lit() {
                            "frui-rating-star frui-rating-star-active"
                        } else {
                            "frui-rating-star"
                        }
                    }
                    disabled=read_only
                    on:mouseenter=move |_| {
                        if !read_only {
                            hovered.set(Some(star));
                        }
                    }
                    on:click=move |_: MouseEvent| {
                        if read_only {
                            return;
                        }
                        value.set(next_rating(value.get_untracked(), star));
                    }
                >
                    "★"
                </button>
            }
        })
        .collect_view();

    let rating = view! {
        <div
            role="radiogroup"
            class=class.class_name()
            style=class.style_attr()
            aria-readonly=read_only.to_string()
            on:mouseleave=move |_| hovered.set(None)
        >
            {stars}
        </div>
    };
    forward_attributes(rating, &attributes)
}

/// Value after choosing `star`; choosing the current value clears it.
fn next_rating(current: u8, star: u8) -> u8 {
    if current == star {
        0
    } else {
        star
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reselecting_the_current_star_clears_the_rating() {
        assert_eq!(next_rating(0, 3), 3);
        assert_eq!(next_rating(3, 5), 5);
        assert_eq!(next_rating(3, 3), 0);
    }

    #[test]
    fn uncontrolled_rating_clears_on_second_click() {
        let runtime = create_runtime();
        let value = ControlledState::new(0u8);

        value.set(next_rating(value.get_untracked(), 4));
        assert_eq!(value.get_untracked(), 4);
        value.set(next_rating(value.get_untracked(), 4));
        assert_eq!(value.get_untracked(), 0);
        runtime.dispose();
    }
}
