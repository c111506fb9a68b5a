//! Main application component.

use yew::prelude::*;

use crate::pages::DemoFunding;

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="bg-gray-400 min-h-screen">
            <DemoFunding />
        </div>
    }
}
