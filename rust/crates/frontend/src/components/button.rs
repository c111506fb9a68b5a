//! Button component.

use yew::prelude::*;

/// Properties for Button component.
#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub children: Html,
}

/// Primary action button.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!(
                "bg-blue-600", "text-white", "font-medium", "rounded-md", "px-4", "py-2",
                "hover:bg-blue-700", props.class.clone()
            )}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { props.children.clone() }
        </button>
    }
}
