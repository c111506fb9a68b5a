//! Controlled text input.

use yew::prelude::*;

/// Properties for Input component.
#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub value: AttrValue,
    /// Receives the full field text on every keystroke
    pub oninput: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Input component.
#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let oninput = {
        let on_change = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <input
            type={props.input_type.clone()}
            class={classes!(
                "w-full", "rounded-md", "border", "border-gray-300", "px-3", "py-2",
                props.class.clone()
            )}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            {oninput}
        />
    }
}
