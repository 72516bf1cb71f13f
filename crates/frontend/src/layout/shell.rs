use super::events::use_app_controller;
use super::navbar::Navbar;
use super::panel::Panel;
use crate::domain::a001_company::ui::CompaniesPage;
use crate::usecases::u502_generate_invoice::InvoicePage;
use leptos::prelude::*;

/// Каркас: навигация + панели.
///
/// Обе панели остаются в DOM, видимость переключается классом `active`,
/// так что введённые данные не теряются при смене вкладки.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_app_controller().ctx;

    view! {
        <div class="app-shell">
            <header class="app-header">
                <h1 class="app-header__title">"Faturamento de Voos"</h1>
                <Navbar />
            </header>
            <main class="app-main">
                <section
                    id=Panel::Invoice.id()
                    class="tab-content"
                    class:active=move || ctx.is_active(Panel::Invoice)
                >
                    <InvoicePage />
                </section>
                <section
                    id=Panel::Companies.id()
                    class="tab-content"
                    class:active=move || ctx.is_active(Panel::Companies)
                >
                    <CompaniesPage />
                </section>
            </main>
        </div>
    }
}
