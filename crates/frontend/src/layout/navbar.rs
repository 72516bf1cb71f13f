use super::events::{use_app_controller, AppEvent};
use super::panel::Panel;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let controller = use_app_controller();
    let ctx = controller.ctx;

    view! {
        <nav class="app-nav">
            {Panel::ALL
                .into_iter()
                .map(|panel| {
                    view! {
                        <button
                            type="button"
                            class="app-nav__button"
                            class:active=move || ctx.is_active(panel)
                            on:click=move |_| controller.dispatch(AppEvent::Navigate(panel))
                        >
                            {icon(panel.icon())}
                            <span>{panel.title()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
