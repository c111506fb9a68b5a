//! Card layout containers.
//!
//! Each container renders its base classes followed by the caller's
//! `class`, so callers can extend or override the default look.

use yew::prelude::*;

/// Properties shared by the card containers.
#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Outer card frame.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div
            id={props.id.clone()}
            class={classes!(
                "w-full", "max-w-md", "mx-auto", "bg-white", "rounded-xl", "shadow-lg",
                "p-6", "space-y-4", "border", "border-gray-200", "text-slate-700",
                props.class.clone()
            )}
        >
            { props.children.clone() }
        </div>
    }
}

#[function_component(CardHeader)]
pub fn card_header(props: &CardProps) -> Html {
    html! {
        <div id={props.id.clone()} class={classes!("text-center", "mb-4", props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}

#[function_component(CardTitle)]
pub fn card_title(props: &CardProps) -> Html {
    html! {
        <h3
            id={props.id.clone()}
            class={classes!("text-2xl", "font-bold", "text-slate-900", props.class.clone())}
        >
            { props.children.clone() }
        </h3>
    }
}

#[function_component(CardContent)]
pub fn card_content(props: &CardProps) -> Html {
    html! {
        <div id={props.id.clone()} class={classes!("space-y-3", props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}
