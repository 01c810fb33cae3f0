//! TopHeader component - application top navigation bar.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=move |_| ctx.toggle_left()
                title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
            >
                {icon("menu")}
            </button>
            <div class="top-header__brand">
                <span class="top-header__title">"Sales Analytics"</span>
            </div>
            <div class="top-header__page">{move || ctx.active.get().label()}</div>
        </div>
    }
}
