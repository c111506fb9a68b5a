//! Project Funding Panel - Yew WASM Frontend
//!
//! Connect a browser wallet, watch a crowdfunding contract's progress and
//! send funds to it.

mod app;
mod components;
mod pages;
mod rpc;
mod timer;
mod wallet;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    let _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
