use dioxus::prelude::*;

const FIELD_CLASS: &str = "w-full px-3 py-2 mt-1 border rounded-md dark:bg-slate-700 dark:border-slate-600 dark:text-white";

#[component]
pub fn Input(
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] id: String,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let input_type = r#type.clone();

    rsx! {
        input {
            class: "{FIELD_CLASS} {class}",
            r#type: input_type,
            id: id,
            name: name,
            placeholder: placeholder,
            value: value,
            disabled: disabled,
            required: required,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn TextArea(
    #[props(default)] id: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default = 3)] rows: u32,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            class: FIELD_CLASS,
            id: id,
            placeholder: placeholder,
            rows: "{rows}",
            value: value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// `<select>` over a fixed list of string options.
#[component]
pub fn Select(
    #[props(default)] id: String,
    options: Vec<String>,
    value: String,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        select {
            class: FIELD_CLASS,
            id: id,
            value: value.clone(),
            onchange: move |evt| onchange.call(evt),
            for choice in options {
                option {
                    key: "{choice}",
                    value: "{choice}",
                    selected: choice == value,
                    "{choice}"
                }
            }
        }
    }
}

#[component]
pub fn Label(#[props(default)] r#for: String, children: Element) -> Element {
    let target = r#for.clone();
    rsx! {
        label {
            class: "block text-sm font-medium text-slate-700 dark:text-slate-300",
            r#for: target,
            {children}
        }
    }
}
