//! Phone Input Component
//!
//! Country picker plus national-number field. The component emits the
//! stored form (dialling code + digits, e.g. `919876543210`) on every
//! change; an empty number emits an empty string.

use dioxus::prelude::*;
use intake_core::phone::{self, Country};

/// Properties for the PhoneInput component
#[derive(Clone, PartialEq, Props)]
pub struct PhoneInputProps {
    /// Stored value (dialling code + national digits)
    pub value: String,
    /// Country last picked by the user; wins ties between countries that
    /// share a dialling code, and is shown when the stored value is empty
    pub default_country: &'static Country,
    /// Handler called with the new stored value
    pub oninput: EventHandler<String>,
    /// Handler called when the user picks a different country
    pub oncountry: EventHandler<&'static Country>,
}

/// Country-aware phone capture.
#[component]
pub fn PhoneInput(props: PhoneInputProps) -> Element {
    let mut country = use_signal(|| initial_country(&props.value, props.default_country));

    // Re-derive the national part from the stored value so the field
    // clears when the wizard resets.
    let (_, national) = phone::split(&props.value, country());
    let dial_code = country().dial_code;

    let on_country = {
        let national = national.clone();
        move |e: FormEvent| match Country::find(&e.value()) {
            Ok(selected) => {
                country.set(selected);
                props.oncountry.call(selected);
                props.oninput.call(selected.compose(&national));
            }
            Err(err) => tracing::warn!("Ignoring country selection: {}", err),
        }
    };

    rsx! {
        div { class: "input-container phone-input",
            select {
                class: "country-select",
                "aria-label": "Country",
                value: "{country().iso}",
                onchange: on_country,
                for c in Country::all() {
                    option {
                        key: "{c.iso}",
                        value: "{c.iso}",
                        selected: c.iso == country().iso,
                        "{c}"
                    }
                }
            }
            span { class: "dial-code", "+{dial_code}" }
            input {
                class: "text-input",
                r#type: "tel",
                value: "{national}",
                placeholder: "Phone number",
                autofocus: true,
                oninput: move |e| props.oninput.call(country().compose(&e.value())),
            }
        }
    }
}

/// Country shown when the input mounts.
fn initial_country(value: &str, preferred: &'static Country) -> &'static Country {
    phone::split(value, preferred).0
}
