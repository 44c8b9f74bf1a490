use super::*;

#[component]
/// Themed table. `striped` alternates row backgrounds.
pub fn Table(
    #[prop(optional)] striped: bool,
    #[prop(optional, into)] caption: Option<String>,
    #[prop(optional)] theme: ThemeProps,
    #[prop(optional)] attributes: Attributes,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let mut class = theme_classes("frui-table", &theme, layout_class);
    if striped {
        class.push("frui-table-striped");
    }
    let table = view! {
        <table class=class.class_name() style=class.style_attr()>
            {caption.map(|caption| view! { <caption>{caption}</caption> })}
            {children()}
        </table>
    };
    forward_attributes(table, &attributes)
}

#[component]
/// Header row group.
pub fn TableHead(children: Children) -> impl IntoView {
    view! { <thead class="frui-table-head">{children()}</thead> }
}

#[component]
/// Table row; `selected` sets `aria-selected`.
pub fn TableRow(
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <tr
            class="frui-table-row"
            aria-selected=move || selected.get().to_string()
        >
            {children()}
        </tr>
    }
}

#[component]
/// Table cell; header cells render as `th`.
pub fn TableCell(
    #[prop(optional)] header: bool,
    #[prop(optional)] theme: ThemeProps,
    children: Children,
) -> impl IntoView {
    let class = theme_classes("frui-table-cell", &theme, None);
    if header {
        view! {
            <th scope="col" class=class.class_name() style=class.style_attr()>
                {children()}
            </th>
        }
        .into_view()
    } else {
        view! {
            <td class=class.class_name() style=class.style_attr()>
                {children()}
            </td>
        }
        .into_view()
    }
}
