use super::*;

#[component]
/// Bordered content surface.
pub fn Card(
    #[prop(optional)] theme: ThemeProps,
    #[prop(optional)] attributes: Attributes,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = theme_classes("frui-card", &theme, layout_class);
    let card = view! {
        <section class=class.class_name() style=class.style_attr()>
            {children()}
        </section>
    };
    forward_attributes(card, &attributes)
}

#[component]
/// Card heading row with an optional title.
pub fn CardHeader(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class=merge_class("frui-card-header", layout_class)>
            {title.map(|title| view! { <h3 class="frui-card-title">{title}</h3> })}
            {children.map(|children| children())}
        </header>
    }
}

#[component]
/// Main card content.
pub fn CardBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! { <div class=merge_class("frui-card-body", layout_class)>{children()}</div> }
}
