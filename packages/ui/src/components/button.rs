use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-indigo-600 text-white hover:bg-indigo-700 disabled:bg-indigo-400"
            }
            ButtonVariant::Secondary => {
                "bg-slate-200 text-slate-800 hover:bg-slate-300 dark:bg-slate-600 dark:text-slate-100"
            }
            ButtonVariant::Success => "bg-green-600 text-white hover:bg-green-700",
            ButtonVariant::Danger => "bg-red-100 text-red-700 hover:bg-red-200",
            ButtonVariant::Warning => "bg-yellow-100 text-yellow-700 hover:bg-yellow-200",
            ButtonVariant::Ghost => {
                "text-slate-600 hover:bg-black/5 dark:text-slate-300 dark:hover:bg-white/5"
            }
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] title: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let button_type = r#type.clone();
    let variant_class = variant.class();

    rsx! {
        button {
            class: "px-4 py-2 rounded-md font-medium transition-colors disabled:opacity-60 {variant_class} {class}",
            r#type: button_type,
            disabled: disabled,
            title: title,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
