use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Accent,
    Flat,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "c-button--primary",
            ButtonVariant::Accent => "c-button--accent",
            ButtonVariant::Flat => "c-button--flat",
        }
    }
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    /// Extra CSS classes appended to the variant
    #[props(default = "")]
    class: &'static str,
    /// Accessible name for icon-only buttons
    #[props(default = "")]
    label: &'static str,
    expanded: Option<bool>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Flat);
    let aria_label = (!label.is_empty()).then_some(label);
    let variant_class = variant.class();

    rsx! {
        button {
            class: "c-button {variant_class} {class}",
            r#type: "button",
            aria_label: aria_label,
            aria_expanded: expanded.map(|e| e.to_string()),
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPONENTS_CSS: &str = include_str!("../../../assets/css/components.css");

    #[test]
    fn test_every_variant_has_a_style_rule() {
        for variant in [ButtonVariant::Primary, ButtonVariant::Accent, ButtonVariant::Flat] {
            let selector = format!(".{} {{", variant.class());
            assert!(COMPONENTS_CSS.contains(&selector), "missing rule for {selector}");
        }
    }
}
