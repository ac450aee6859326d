use leptos::*;
use validation::{
    field_class, has_label, label_target, message_class, FieldValidity, ValidationDisplayState,
    CONTAINER_CLASS, LABEL_CLASS,
};
use wasm_bindgen::JsCast;

/// Reads validity, platform message and value from the field that fired `ev`.
pub fn read_field_validity(ev: &ev::Event) -> Option<FieldValidity> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let validity = input.validity();
    Some(FieldValidity::new(
        validity.valid(),
        input.validation_message().unwrap_or_default(),
        input.value(),
    ))
}

/// Applies one change event to the display state, then hands the value to the
/// caller. The state is always updated before the handler runs.
pub fn process_change(
    state: RwSignal<ValidationDisplayState>,
    report: FieldValidity,
    ev: ev::Event,
    handle_change: Option<Callback<(String, ev::Event)>>,
) {
    state.update(|s| s.apply(&report));
    if let Some(callback) = handle_change {
        callback.call((report.value, ev));
    }
}

/// Entry point for the field's `input` events. Events whose target is not an
/// `<input>` leave the state and the handler untouched.
pub fn handle_input_event(
    state: RwSignal<ValidationDisplayState>,
    ev: ev::Event,
    handle_change: Option<Callback<(String, ev::Event)>>,
) {
    match read_field_validity(&ev) {
        Some(report) => process_change(state, report, ev, handle_change),
        None => logging::warn!("change event without an input target, ignoring"),
    }
}

/// Text input with an optional label and inline validation message.
///
/// Extra native attributes are passed with the `attr:` prefix and land on the
/// `<input>` unchanged, e.g. `attr:type="email" attr:required=true`.
///
/// `label` takes plain text; `label_view` takes arbitrary content and wins when
/// both are given. `value` drives the field's current value whenever it holds one.
#[component]
pub fn LabeledValidatedInput(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional, into)] label_view: Option<ViewFn>,
    #[prop(optional, into)] value: MaybeProp<String>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] name: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional)] handle_change: Option<Callback<(String, ev::Event)>>,
    #[prop(optional)] node_ref: Option<NodeRef<html::Input>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let state = create_rw_signal(ValidationDisplayState::default());
    let node_ref = node_ref.unwrap_or_else(create_node_ref);
    let has_error = move || state.with(ValidationDisplayState::has_error);

    let label_node = {
        let (id, name) = (id.clone(), name.clone());
        move || {
            let content = match &label_view {
                Some(content) => content.run(),
                None => {
                    let text = label.get();
                    if !has_label(text.as_deref()) {
                        return None;
                    }
                    text.into_view()
                }
            };
            let target = label_target(id.get().as_deref(), name.get().as_deref());
            Some(view! {
                <label for=target class=LABEL_CLASS>
                    {content}
                </label>
            })
        }
    };

    // Writing `undefined` would show up as literal text, so only real values reach the field.
    create_render_effect(move |_| {
        let Some(input) = node_ref.get() else {
            return;
        };
        if let Some(current) = value.get() {
            if input.value() != current {
                input.set_value(&current);
            }
        }
    });

    let input_class = move || field_class(disabled.get(), has_error(), class.get().as_deref());

    view! {
        <div class=CONTAINER_CLASS>
            {label_node}
            <input
                id=move || id.get()
                name=move || name.get()
                class=input_class
                disabled=disabled
                node_ref=node_ref
                on:input=move |ev| handle_input_event(state, ev, handle_change)
                {..attrs}
            />
            <span class=move || message_class(has_error())>
                {move || state.with(|s| s.message_text().to_string())}
            </span>
        </div>
    }
}
