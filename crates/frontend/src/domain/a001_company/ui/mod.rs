pub mod details;
pub mod directory;

use details::CompanyDetails;
use directory::CompanyList;
use leptos::prelude::*;

/// Панель "Empresas": карточка новой компании + список сохранённых
#[component]
pub fn CompaniesPage() -> impl IntoView {
    view! {
        <div class="page companies-page">
            <CompanyDetails />
            <CompanyList />
        </div>
    }
}
