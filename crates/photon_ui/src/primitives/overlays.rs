use super::*;

#[component]
/// Controlled dialog rendered over a backdrop.
///
/// The parent owns `is_open`; the modal never flips it and only reports dismissal through
/// `on_close`. While closed nothing is mounted, including the escape listener.
pub fn Modal(
    #[prop(into)] is_open: MaybeSignal<bool>,
    on_close: Callback<()>,
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = ModalSize::Md)] size: ModalSize,
    #[prop(optional)] animation: ModalAnimation,
    #[prop(optional)] backdrop: Backdrop,
    #[prop(optional, into)] glow: Glow,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] footer: Option<ViewFn>,
    #[prop(default = true)] close_on_backdrop: bool,
    #[prop(default = true)] close_on_escape: bool,
    #[prop(default = true)] show_close_button: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let is_open = Signal::derive(move || is_open.get());
    let dismissal = DisclosureConfig {
        close_on_backdrop,
        close_on_escape,
    };
    let has_footer = footer.is_some();
    let title_id = id.as_ref().map(|id| format!("{id}-title"));

    let parts = create_memo(move |_| {
        let style = ModalStyle {
            variant,
            size,
            animation,
            backdrop,
            glow,
            class: class.clone(),
        };
        let content = ModalContent {
            title: title.as_deref(),
            subtitle: subtitle.as_deref(),
            has_footer,
            show_close_button,
        };
        ModalParts::project(&style, dismissal, &content, is_open.get())
    });

    let dismiss = move |reason: DismissReason| {
        dismissal.dismiss(is_open.get_untracked(), reason, || on_close.call(()));
    };

    create_effect(move |_| {
        if !dismissal.listens_for_escape(is_open.get()) {
            return;
        }
        let listener = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
            if let Some(reason) = DismissReason::from_key(&ev.key()) {
                dismiss(reason);
            }
        });
        on_cleanup(move || listener.remove());
    });

    move || {
        parts.get().map(|parts| {
            let header = (parts.title.is_some() || parts.subtitle.is_some()).then(|| {
                view! {
                    <header class="photon-modal-header mb-4 pr-8" data-ui-slot="header">
                        {parts
                            .title
                            .clone()
                            .map(|title| {
                                view! {
                                    <h2
                                        id=title_id.clone()
                                        class="photon-modal-title text-xl font-semibold"
                                    >
                                        {title}
                                    </h2>
                                }
                            })}
                        {parts
                            .subtitle
                            .clone()
                            .map(|subtitle| {
                                view! {
                                    <p class="photon-modal-subtitle text-sm text-photon-gray">
                                        {subtitle}
                                    </p>
                                }
                            })}
                    </header>
                }
            });
            let close_button = parts.close_button.then(|| {
                view! {
                    <button
                        type="button"
                        class="photon-modal-close absolute right-4 top-4 rounded-md p-1 opacity-70 hover:opacity-100 focus-visible:outline-none focus-visible:ring-2"
                        aria-label="Close"
                        data-ui-slot="close"
                        on:click=move |_| dismiss(DismissReason::CloseButton)
                    >
                        <Icon icon=IconName::Close size=ComponentSize::Sm />
                    </button>
                }
            });
            let footer = footer
                .as_ref()
                .filter(|_| parts.footer)
                .map(|footer| {
                    view! {
                        <footer
                            class="photon-modal-footer mt-6 flex justify-end gap-3"
                            data-ui-slot="footer"
                        >
                            {footer.run()}
                        </footer>
                    }
                });
            let labelled_by = parts.title.as_ref().and(title_id.clone());

            view! {
                <div
                    class=parts.container_class
                    id=id.clone()
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                    data-ui-variant=variant.token()
                    data-ui-size=size.token()
                    data-ui-state="open"
                    data-ui-animation=animation.token()
                >
                    <div
                        class=parts.backdrop_class
                        aria-hidden="true"
                        data-ui-slot="backdrop"
                        data-ui-backdrop=backdrop.token()
                        on:click=move |_| dismiss(DismissReason::Backdrop)
                    ></div>
                    <div
                        class=parts.panel_class
                        role="dialog"
                        aria-modal="true"
                        aria-labelledby=labelled_by
                        data-ui-slot="panel"
                    >
                        {close_button}
                        {header}
                        <div class="photon-modal-body" data-ui-slot="body">
                            {children()}
                        </div>
                        {footer}
                    </div>
                </div>
            }
        })
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;
    use leptos::ssr::render_to_string;

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render_to_string(|| {
            view! {
                <Modal is_open=false on_close=Callback::new(|_| ()) title="Test Modal">
                    <p>"Modal content"</p>
                </Modal>
            }
        })
        .to_string();

        assert!(!html.contains("Test Modal"));
        assert!(!html.contains("Modal content"));
        assert!(!html.contains(r#"role="dialog""#));
    }

    #[test]
    fn open_modal_renders_backdrop_before_labelled_dialog() {
        let html = render_to_string(|| {
            view! {
                <Modal
                    is_open=true
                    on_close=Callback::new(|_| ())
                    id="confirm"
                    title="Test Modal"
                    footer=|| view! { <span>"Footer actions"</span> }
                >
                    <p>"Modal content"</p>
                </Modal>
            }
        })
        .to_string();

        assert!(html.contains("Test Modal"));
        assert!(html.contains("Modal content"));
        assert!(html.contains("Footer actions"));
        assert!(html.contains(r#"aria-modal="true""#));
        assert!(html.contains(r#"aria-labelledby="confirm-title""#));
        assert!(html.contains(r#"id="confirm-title""#));
        assert!(html.contains(r#"data-ui-slot="close""#));

        let backdrop = html.find(r#"data-ui-slot="backdrop""#).expect("backdrop");
        let dialog = html.find(r#"role="dialog""#).expect("dialog");
        assert!(backdrop < dialog);
    }

    #[test]
    fn close_button_and_header_are_optional() {
        let html = render_to_string(|| {
            view! {
                <Modal is_open=true on_close=Callback::new(|_| ()) show_close_button=false>
                    "Body only"
                </Modal>
            }
        })
        .to_string();

        assert!(html.contains("Body only"));
        assert!(!html.contains(r#"data-ui-slot="close""#));
        assert!(!html.contains(r#"data-ui-slot="header""#));
        assert!(!html.contains("aria-labelledby"));
    }
}
