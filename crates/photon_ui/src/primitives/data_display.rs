use super::*;

fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[component]
/// Surface container with optional header, footer and hover/glow effects.
///
/// Supplying `on_activate` makes the card keyboard-activatable (`role="button"`, Enter/Space).
pub fn Card(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = true)] padded: bool,
    #[prop(default = ComponentSize::Md)] padding: ComponentSize,
    #[prop(optional, into)] glow: Glow,
    #[prop(optional)] hover: HoverStyle,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] footer: Option<ViewFn>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_activate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let style = CardStyle {
        variant,
        padded,
        padding,
        glow,
        hover,
        interactive: on_activate.is_some(),
        class,
    };
    let parts = CardParts::project(
        &style,
        title.as_deref(),
        subtitle.as_deref(),
        footer.is_some(),
    );
    let activatable = parts.activatable;

    let header = parts.header.then(|| {
        view! {
            <header class="photon-card-header mb-4" data-ui-slot="header">
                {parts
                    .title
                    .map(|title| {
                        view! { <h3 class="photon-card-title text-lg font-semibold">{title}</h3> }
                    })}
                {parts
                    .subtitle
                    .map(|subtitle| {
                        view! { <p class="photon-card-subtitle text-sm text-photon-gray">{subtitle}</p> }
                    })}
            </header>
        }
    });
    let footer = footer.map(|footer| {
        view! {
            <footer class="photon-card-footer mt-4" data-ui-slot="footer">
                {footer.run()}
            </footer>
        }
    });

    view! {
        <div
            class=parts.class
            id=id
            role=activatable.then_some("button")
            tabindex=activatable.then_some("0")
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-variant=variant.token()
            data-ui-size=padding.token()
            data-ui-hover=hover.token()
            on:click=move |_| {
                if let Some(on_activate) = on_activate.as_ref() {
                    on_activate.call(());
                }
            }
            on:keydown=move |ev: KeyboardEvent| {
                if let Some(on_activate) = on_activate.as_ref() {
                    if is_activation_key(&ev.key()) {
                        ev.prevent_default();
                        on_activate.call(());
                    }
                }
            }
        >
            {header}
            <div class="photon-card-body" data-ui-slot="body">
                {children()}
            </div>
            {footer}
        </div>
    }
}


#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;
    use leptos::ssr::render_to_string;

    #[test]
    fn activatable_card_is_a_focusable_button() {
        let html = render_to_string(|| {
            view! {
                <Card title="Stats" subtitle="Last 7 days" on_activate=Callback::new(|_| ())>
                    "Body"
                </Card>
            }
        })
        .to_string();

        assert!(html.contains(r#"role="button""#));
        assert!(html.contains(r#"tabindex="0""#));
        assert!(html.contains(r#"data-ui-slot="header""#));
        assert!(html.contains("Last 7 days"));
    }

    #[test]
    fn plain_card_has_no_button_semantics_or_header() {
        let html = render_to_string(|| view! { <Card>"Body"</Card> }).to_string();

        assert!(html.contains(r#"data-ui-kind="card""#));
        assert!(!html.contains("role="));
        assert!(!html.contains("tabindex"));
        assert!(!html.contains(r#"data-ui-slot="header""#));
    }
}
