//! Progress bar component.

use funding_core::display::bar_width_style;
use yew::prelude::*;

/// Properties for Progress component.
#[derive(Properties, PartialEq)]
pub struct ProgressProps {
    /// Fill percentage, rendered as given
    #[prop_or_default]
    pub value: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Horizontal progress bar.
#[function_component(Progress)]
pub fn progress(props: &ProgressProps) -> Html {
    html! {
        <div class={classes!("w-full", "bg-white", "rounded-full", "h-2.5", props.class.clone())}>
            <div
                class="bg-blue-600 h-2.5 rounded-full"
                style={bar_width_style(props.value)}
            ></div>
        </div>
    }
}
