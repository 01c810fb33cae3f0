//! Sidebar with one entry per page

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            <ul class="sidebar__menu">
                {Page::all()
                    .into_iter()
                    .map(|page| view! {
                        <li
                            class="sidebar__item"
                            class:sidebar__item--active=move || ctx.active.get() == page
                            on:click=move |_| ctx.navigate(page)
                        >
                            <span class="sidebar__icon">{icon(page.icon())}</span>
                            <span class="sidebar__label">{page.label()}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
