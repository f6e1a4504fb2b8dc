use super::*;

const PARTICLE_COUNT: usize = 6;

#[component]
/// Photon button with variant, size, effect flags, icon slots and a loading state.
///
/// While `loading` or `disabled` the native button is disabled and `on_click` is never called.
/// Loading also swaps the icon slots for a spinner.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ComponentSize::Md)] size: ComponentSize,
    #[prop(optional, into)] glow: Glow,
    #[prop(optional)] ripple: bool,
    #[prop(optional)] particles: bool,
    #[prop(optional)] hover: HoverStyle,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] speed: Option<AnimationSpeed>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let speed = speed.unwrap_or(theme.animations.speed);
    let particles = particles && theme.effects.particles;

    let parts = create_memo(move |_| {
        let style = ButtonStyle {
            variant,
            size,
            effects: EffectFlags {
                glow,
                ripple,
                particles,
                loading: loading.get(),
                hover,
                full_width,
            },
            speed,
            disabled: disabled.get(),
            class: class.clone(),
        };
        ButtonParts::project(&style, leading_icon, trailing_icon)
    });

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=move || parts.with(|parts| parts.class.clone())
            id=id
            aria-label=aria_label
            title=title
            disabled=move || parts.with(|parts| parts.disabled)
            aria-busy=move || parts.with(|parts| bool_token(parts.busy))
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || parts.with(|parts| parts.state)
            on:click=move |ev| {
                parts.with_untracked(|parts| {
                    parts.dispatch_click(|| {
                        if let Some(on_click) = on_click.as_ref() {
                            on_click.call(ev);
                        }
                    })
                });
            }
            on:focus=move |ev| {
                if let Some(on_focus) = on_focus.as_ref() {
                    on_focus.call(ev);
                }
            }
            on:blur=move |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            }
        >
            {move || parts.with(|parts| parts.spinner).then(|| view! { <Spinner size /> })}
            {move || {
                parts
                    .with(|parts| parts.leading_icon)
                    .map(|icon| view! { <Icon icon size /> })
            }}
            <span class="photon-button-label relative z-10" data-ui-slot="label">
                {children()}
            </span>
            {move || {
                parts
                    .with(|parts| parts.trailing_icon)
                    .map(|icon| view! { <Icon icon size /> })
            }}
            {move || parts.with(|parts| parts.particle_layer).then(|| view! { <ParticleLayer /> })}
        </button>
    }
}

#[component]
/// Indeterminate spinner announced as a loading status.
pub fn Spinner(#[prop(default = ComponentSize::Md)] size: ComponentSize) -> impl IntoView {
    view! {
        <span
            class=format!(
                "photon-spinner inline-block animate-spin rounded-full border-2 border-current border-t-transparent {}",
                size.icon_classes(),
            )
            role="status"
            aria-label="Loading"
            data-ui-primitive="true"
            data-ui-kind="spinner"
        ></span>
    }
}

#[component]
/// Decorative particle layer drawn behind a control's content.
pub fn ParticleLayer() -> impl IntoView {
    let particles = (0..PARTICLE_COUNT)
        .map(|index| {
            view! {
                <span
                    class="photon-particle absolute rounded-full"
                    style=format!("--photon-particle-index: {index};")
                ></span>
            }
        })
        .collect_view();

    view! {
        <span
            class="photon-particle-layer pointer-events-none absolute inset-0"
            aria-hidden="true"
            data-ui-slot="particles"
        >
            {particles}
        </span>
    }
}

#[component]
/// Labeled text input with validation messaging, icon gutters and focus tracking.
///
/// Only one message renders: `error` beats `success`, which beats `help_text`. Focus state is
/// local to the instance; `on_focus` / `on_blur` fire once per native event after the state
/// transition.
pub fn Input(
    #[prop(default = FieldVariant::Primary)] variant: FieldVariant,
    #[prop(default = ComponentSize::Md)] size: ComponentSize,
    #[prop(optional, into)] glow: Glow,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] success: MaybeSignal<Option<String>>,
    #[prop(optional, into)] help_text: Option<String>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_input: Option<Callback<ev::Event>>,
    #[prop(optional)] on_change: Option<Callback<ev::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    let focus = create_rw_signal(FocusState::default());
    let label_for = id.clone();
    let message_id = id.as_ref().map(|id| format!("{id}-message"));
    let described_by = message_id.clone();

    let parts = create_memo(move |_| {
        let style = FieldStyle {
            variant,
            size,
            glow,
            disabled: disabled.get(),
            class: class.clone(),
            ..FieldStyle::default()
        };
        let error = error.get();
        let success = success.get();
        let content = FieldContent {
            error: error.as_deref(),
            success: success.as_deref(),
            help: help_text.as_deref(),
            leading_icon,
            trailing_icon,
        };
        FieldParts::project(&style, &content, focus.get())
    });

    view! {
        <div
            class=move || parts.with(|parts| parts.wrapper_class)
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || parts.with(|parts| parts.state)
            data-ui-status=move || parts.with(|parts| parts.status.token())
        >
            {label.map(|label| {
                view! {
                    <label
                        class="photon-field-label text-sm font-medium"
                        for=label_for
                        data-ui-slot="label"
                    >
                        {label}
                        {required
                            .then(|| {
                                view! {
                                    <span class="ml-0.5 text-photon-danger" aria-hidden="true">
                                        "*"
                                    </span>
                                }
                            })}
                    </label>
                }
            })}
            <div class="relative flex items-center" data-ui-slot="control">
                {leading_icon
                    .map(|icon| {
                        view! {
                            <span
                                class="photon-field-icon pointer-events-none absolute left-3"
                                data-ui-slot="leading-icon"
                            >
                                <Icon icon size />
                            </span>
                        }
                    })}
                <input
                    class=move || parts.with(|parts| parts.input_class.clone())
                    id=id
                    name=name
                    type=input_type.unwrap_or("text")
                    placeholder=placeholder
                    autocomplete=autocomplete
                    required=required
                    node_ref=node_ref
                    prop:value=move || value.get()
                    disabled=move || disabled.get()
                    aria-invalid=move || parts.with(|parts| bool_token(parts.invalid))
                    aria-describedby=move || {
                        parts
                            .with(|parts| parts.message.is_some())
                            .then(|| described_by.clone())
                            .flatten()
                    }
                    on:input=move |ev| {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.call(ev);
                        }
                    }
                    on:change=move |ev| {
                        if let Some(on_change) = on_change.as_ref() {
                            on_change.call(ev);
                        }
                    }
                    on:keydown=move |ev| {
                        if let Some(on_keydown) = on_keydown.as_ref() {
                            on_keydown.call(ev);
                        }
                    }
                    on:focus=move |ev| {
                        focus.update(|state| *state = state.on_focus());
                        if let Some(on_focus) = on_focus.as_ref() {
                            on_focus.call(ev);
                        }
                    }
                    on:blur=move |ev| {
                        focus.update(|state| *state = state.on_blur());
                        if let Some(on_blur) = on_blur.as_ref() {
                            on_blur.call(ev);
                        }
                    }
                />
                {trailing_icon
                    .map(|icon| {
                        view! {
                            <span
                                class="photon-field-icon pointer-events-none absolute right-3"
                                data-ui-slot="trailing-icon"
                            >
                                <Icon icon size />
                            </span>
                        }
                    })}
            </div>
            {move || {
                parts
                    .with(|parts| parts.message.clone())
                    .map(|message| {
                        view! {
                            <span
                                id=message_id.clone()
                                class=message.kind.classes()
                                role=message.kind.role()
                                data-ui-slot="message"
                                data-ui-message=message.kind.token()
                            >
                                {message.text}
                            </span>
                        }
                    })
            }}
        </div>
    }
}
