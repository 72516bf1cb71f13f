use crate::layout::{use_app_controller, AppEvent};
use contracts::domain::a001_company::Company;
use leptos::prelude::*;

/// Список сохранённых компаний: "razão (cnpj)"
#[component]
pub fn CompanyList() -> impl IntoView {
    let controller = use_app_controller();
    let vm = controller.directory;

    view! {
        <div class="details-container company-list">
            <div class="details-header">
                <h3>{Company::list_name()}</h3>
            </div>

            {move || vm.loading.get().then(|| view! { <div class="muted">"Carregando..."</div> })}
            {move || vm.error.get().map(|e| view! { <div class="warning">{e}</div> })}

            <ul id="listaEmpresas">
                {move || {
                    vm.companies
                        .get()
                        .iter()
                        .map(|c| view! { <li>{c.directory_label()}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

/// Выпадающий список компаний в форме fatura.
///
/// Значение `<option>` несёт полную запись в JSON; при каждом обновлении
/// справочника выбор сбрасывается на плейсхолдер.
#[component]
pub fn CompanySelect() -> impl IntoView {
    let controller = use_app_controller();
    let vm = controller.directory;

    view! {
        <div class="form-group">
            <label for="selectEmpresa">{Company::element_name()}</label>
            <select
                id="selectEmpresa"
                on:change=move |ev| controller.dispatch(AppEvent::ApplySelection(event_target_value(&ev)))
            >
                {move || {
                    let options = vm
                        .companies
                        .get()
                        .iter()
                        .map(|c| {
                            view! { <option value=c.to_option_value()>{c.razao.clone()}</option> }
                        })
                        .collect_view();
                    view! {
                        <option value="" selected=true>"-- Selecione --"</option>
                        {options}
                    }
                }}
            </select>
        </div>
    }
}
