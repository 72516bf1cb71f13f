use crate::layout::{use_app_controller, AppEvent};
use crate::shared::icons::icon;
use contracts::domain::a002_competitor::{CompetitorField, RowId};
use leptos::prelude::*;
use thaw::*;

fn cell_input(
    id: RowId,
    field: CompetitorField,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let controller = use_app_controller();
    let vm = controller.competitors;

    view! {
        <td>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || vm.cell(id, field)
                on:input=move |ev| {
                    controller.dispatch(AppEvent::EditRow {
                        id,
                        field,
                        value: event_target_value(&ev),
                    })
                }
            />
        </td>
    }
}

#[component]
fn CompetitorRowView(id: RowId) -> impl IntoView {
    let controller = use_app_controller();

    view! {
        <tr>
            {cell_input(id, CompetitorField::Matricula, "text", "PT-XYZ")}
            {cell_input(id, CompetitorField::Inicio, "time", "")}
            {cell_input(id, CompetitorField::Fim, "time", "")}
            <td>
                <button
                    type="button"
                    class="btn-remove"
                    title="Remover"
                    on:click=move |_| controller.dispatch(AppEvent::RemoveRow(id))
                >
                    {icon("close")}
                </button>
            </td>
        </tr>
    }
}

/// Таблица concorrentes: строки добавляются и удаляются вручную
#[component]
pub fn CompetitorTableView() -> impl IntoView {
    let controller = use_app_controller();
    let vm = controller.competitors;

    view! {
        <div class="competitors">
            <table id="tbConcorrentes" class="table">
                <thead>
                    <tr>
                        <th>"Matrícula"</th>
                        <th>"Início"</th>
                        <th>"Fim"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || vm.table.with(|t| t.ids())
                        key=|id| *id
                        children=move |id| view! { <CompetitorRowView id=id /> }
                    />
                </tbody>
            </table>
            <Button on_click=move |_| controller.dispatch(AppEvent::AddRow)>
                {icon("plus")}
                "Adicionar concorrente"
            </Button>
        </div>
    }
}
