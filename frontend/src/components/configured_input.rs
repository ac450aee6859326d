use leptos::*;
use validation::InputOptions;

use super::labeled_validated_input::LabeledValidatedInput;

/// Labeled input described by [`InputOptions`] instead of individual props.
#[component]
pub fn ConfiguredInput(
    options: InputOptions,
    #[prop(optional)] handle_change: Option<Callback<(String, ev::Event)>>,
) -> impl IntoView {
    if let Err(err) = options.validate() {
        logging::warn!("input options rejected, dropping offending attributes: {}", err);
    }

    let node_ref = create_node_ref::<html::Input>();

    let attributes: Vec<(String, String)> = options
        .forwarded_attributes()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    node_ref.on_load(move |input| {
        for (name, value) in &attributes {
            if let Err(err) = input.set_attribute(name, value) {
                logging::warn!("could not set attribute {}: {:?}", name, err);
            }
        }
    });

    let InputOptions {
        id,
        name,
        label,
        disabled,
        class,
        ..
    } = options;

    match handle_change {
        Some(handle_change) => view! {
            <LabeledValidatedInput
                id=id
                name=name
                label=label
                disabled=disabled
                class=class
                handle_change=handle_change
                node_ref=node_ref
            />
        }
        .into_view(),
        None => view! {
            <LabeledValidatedInput
                id=id
                name=name
                label=label
                disabled=disabled
                class=class
                node_ref=node_ref
            />
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_options(options: InputOptions) -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document.body().unwrap().append_child(&container).unwrap();
        mount_to(container.clone(), move || view! { <ConfiguredInput options=options /> });
        container
    }

    #[wasm_bindgen_test]
    fn test_configured_input_forwards_attributes() {
        let options = InputOptions {
            id: Some("zip".to_string()),
            label: Some("Zip code".to_string()),
            ..Default::default()
        }
        .with_attribute("pattern", "[0-9]{5}")
        .with_attribute("oninput", "alert(1)");

        let container = mount_options(options);
        let input = container.query_selector("input").unwrap().unwrap();

        assert_eq!(input.get_attribute("id").as_deref(), Some("zip"));
        assert_eq!(input.get_attribute("pattern").as_deref(), Some("[0-9]{5}"));
        assert!(input.get_attribute("oninput").is_none());

        let label = container.query_selector("label").unwrap().unwrap();
        assert_eq!(label.get_attribute("for").as_deref(), Some("zip"));
    }

    #[wasm_bindgen_test]
    fn test_configured_input_disabled() {
        let options = InputOptions {
            name: Some("locked".to_string()),
            disabled: true,
            ..Default::default()
        };

        let container = mount_options(options);
        let input = container
            .query_selector("input")
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlInputElement>();

        assert!(input.disabled());
        assert!(container.query_selector("label").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_configured_input_keeps_component_styling() {
        let options = InputOptions {
            id: Some("styled".to_string()),
            ..Default::default()
        }
        .with_attribute("class", "x")
        .with_attribute("disabled", "");

        let container = mount_options(options);
        let input = container
            .query_selector("input")
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlInputElement>();

        assert!(input.class_name().starts_with("w-full block p-2 border rounded"));
        assert!(input.class_name().contains("bg-white"));
        assert!(!input.disabled());
    }
}
