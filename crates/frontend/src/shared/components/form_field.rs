use leptos::prelude::*;

/// Поле формы: `<label>` + `<input>` с двусторонней привязкой
pub fn form_field(
    id: String,
    label: &'static str,
    input_type: &'static str,
    value: impl Fn() -> String + Send + Sync + 'static,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                type=input_type
                id=id
                prop:value=value
                on:input=move |ev| on_input(event_target_value(&ev))
            />
        </div>
    }
}
