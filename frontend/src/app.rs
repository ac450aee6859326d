use leptos::*;
use validation::InputOptions;

use crate::components::configured_input::ConfiguredInput;
use crate::components::labeled_validated_input::LabeledValidatedInput;

const PHONE_OPTIONS: &str = r#"{
    "id": "phone",
    "label": "Phone",
    "attributes": { "type": "tel", "pattern": "[0-9 +()-]{6,}", "placeholder": "+49 30 123456" }
}"#;

/// Demo page showing the labeled input in its common configurations.
#[component]
pub fn App() -> impl IntoView {
    let last_value = create_rw_signal(String::new());
    let on_change = Callback::new(move |(value, _): (String, ev::Event)| last_value.set(value));

    let name = create_rw_signal(String::new());
    let on_name_change = Callback::new(move |(value, _): (String, ev::Event)| {
        name.set(value.clone());
        last_value.set(value);
    });

    let phone = match InputOptions::from_json(PHONE_OPTIONS) {
        Ok(options) => Some(options),
        Err(err) => {
            logging::error!("invalid phone field options: {}", err);
            None
        }
    };

    view! {
        <main class="max-w-md mx-auto p-4">
            <form on:submit=|ev: ev::SubmitEvent| ev.prevent_default()>
                <LabeledValidatedInput
                    label="Name"
                    id="name"
                    value=name
                    handle_change=on_name_change
                    attr:required=true
                    attr:minlength="2"
                />
                <LabeledValidatedInput
                    label_view=|| view! { "Email " <span class="text-neutral-500">"(optional)"</span> }
                    name="email"
                    handle_change=on_change
                    attr:type="email"
                />
                <LabeledValidatedInput label="Account" id="account" disabled=true attr:value="read-only" />
                {phone.map(|options| view! { <ConfiguredInput options=options handle_change=on_change /> })}
                <button type="button" class="text-sm underline" on:click=move |_| name.set(String::new())>
                    "Clear name"
                </button>
            </form>
            <p class="text-sm text-neutral-900">"Last value: " {move || last_value.get()}</p>
        </main>
    }
}
