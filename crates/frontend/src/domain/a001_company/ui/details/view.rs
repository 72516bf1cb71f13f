use crate::layout::{use_app_controller, AppEvent};
use crate::shared::components::form_field;
use crate::shared::icons::icon;
use contracts::domain::a001_company::CompanyField;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_cnpj_lookup::CnpjLookup;
use leptos::prelude::*;
use thaw::*;

const LOOKUP_BACKGROUND: &str = "#e8f0fe";

#[component]
pub fn CompanyDetails() -> impl IntoView {
    let controller = use_app_controller();
    let vm = controller.new_company;

    let fields = CompanyField::ALL
        .into_iter()
        .filter(|field| *field != CompanyField::Cnpj)
        .map(|field| {
            form_field(
                format!("c_{}", field.key()),
                field.label(),
                field.input_type(),
                move || vm.form.with(|f| field.get(f).to_string()),
                move |value| vm.form.update(|f| field.set(f, value)),
            )
        })
        .collect_view();

    view! {
        <div class="details-container company-details">
            <div class="details-header">
                <h3>"Nova Empresa"</h3>
            </div>

            <Card>
                <div class="details-form">
                    <div class="form-group">
                        <label for="c_cnpj">{CompanyField::Cnpj.label()}</label>
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <input
                                type="text"
                                id="c_cnpj"
                                placeholder="00.000.000/0000-00"
                                style:background=move || {
                                    if vm.lookup_busy.get() { LOOKUP_BACKGROUND } else { "white" }
                                }
                                prop:value=move || vm.form.with(|f| f.cnpj.clone())
                                on:input=move |ev| {
                                    vm.form.update(|f| f.cnpj = event_target_value(&ev));
                                }
                            />
                            <Button
                                on_click=move |_| controller.dispatch(AppEvent::LookupRegistry)
                                disabled=move || vm.lookup_busy.get()
                            >
                                {icon("search")}
                                {CnpjLookup::display_name()}
                            </Button>
                        </Flex>
                    </div>

                    {fields}
                </div>

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| controller.dispatch(AppEvent::SaveCompany)
                        disabled=move || vm.saving.get()
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { "Salvando..." } else { "Salvar Empresa" }}
                    </Button>
                </div>
            </Card>
        </div>
    }
}
