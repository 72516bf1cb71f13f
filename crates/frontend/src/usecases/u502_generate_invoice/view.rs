use crate::domain::a001_company::ui::directory::CompanySelect;
use crate::domain::a002_competitor::ui::CompetitorTableView;
use crate::layout::{use_app_controller, AppEvent};
use crate::shared::components::form_field;
use crate::shared::icons::icon;
use contracts::domain::a001_company::CompanyField;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_generate_invoice::{GenerateInvoice, InvoiceForm};
use leptos::html::Input;
use leptos::prelude::*;
use thaw::*;

/// Поле рейса (не из карточки компании)
fn flight_field(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: fn(&InvoiceForm) -> &str,
    set: fn(&mut InvoiceForm, String),
) -> impl IntoView {
    let vm = use_app_controller().invoice;
    form_field(
        id.to_string(),
        label,
        input_type,
        move || vm.form.with(|f| get(f).to_string()),
        move |value| vm.form.update(|f| set(f, value)),
    )
}

#[component]
pub fn InvoicePage() -> impl IntoView {
    let controller = use_app_controller();
    let vm = controller.invoice;
    let file_ref = NodeRef::<Input>::new();

    let company_fields = CompanyField::ALL
        .into_iter()
        .map(|field| {
            form_field(
                format!("f_{}", field.key()),
                field.label(),
                field.input_type(),
                move || vm.form.with(|f| field.get(&f.company).to_string()),
                move |value| vm.form.update(|f| field.set(&mut f.company, value)),
            )
        })
        .collect_view();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let attachment = file_ref
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        controller.dispatch(AppEvent::SubmitInvoice { attachment });
    };

    view! {
        <div class="page invoice-page">
            <div class="page__header">
                <h2 class="page__title">{GenerateInvoice::display_name()}</h2>
            </div>

            <form id="formFatura" on:submit=on_submit>
                <Card>
                    <h3>"Dados da Empresa"</h3>
                    <CompanySelect />
                    {company_fields}
                </Card>

                <Card>
                    <h3>"Dados do Voo"</h3>
                    {flight_field("f_aeronave", "Aeronave (matrícula)", "text", |f| f.aeronave.as_str(), |f, v| f.aeronave = v)}
                    {flight_field("f_data", "Data", "date", |f| f.data.as_str(), |f, v| f.data = v)}
                    <Flex gap=FlexGap::Large>
                        {flight_field("f_inicio", "Início", "time", |f| f.inicio.as_str(), |f, v| f.inicio = v)}
                        {flight_field("f_fim", "Fim", "time", |f| f.fim.as_str(), |f, v| f.fim = v)}
                    </Flex>
                    <div class="form-group">
                        <label for="f_observacoes">"Observações"</label>
                        <textarea
                            id="f_observacoes"
                            rows="3"
                            prop:value=move || vm.form.with(|f| f.observacoes.clone())
                            on:input=move |ev| {
                                vm.form.update(|f| f.observacoes = event_target_value(&ev));
                            }
                        />
                    </div>
                </Card>

                <Card>
                    <h3>"Concorrentes no período"</h3>
                    <CompetitorTableView />
                </Card>

                <Card>
                    <div class="form-group">
                        <label for="f_anexo">"Anexo"</label>
                        <input type="file" id="f_anexo" node_ref=file_ref />
                    </div>
                </Card>

                <div class="details-actions">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || vm.submitting.get()
                    >
                        {icon("download")}
                        {move || if vm.submitting.get() { "Gerando..." } else { "Gerar PDF" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
