use crate::layout::{AppController, AppEvent, AppGlobalContext, Shell};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // All view-models live in the controller; views only dispatch events.
    let controller = AppController::new(ctx);
    provide_context(controller);

    ctx.init_router_integration();

    // carregar empresas ao abrir a página
    controller.dispatch(AppEvent::RefreshDirectory);

    view! {
        <Shell />
    }
}
