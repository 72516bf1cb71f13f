use contracts::shared::error::{UseCaseError, UseCaseResult};
use contracts::usecases::u502_generate_invoice::{InvoiceForm, FIELD_ANEXO, PDF_CONTENT_TYPE};
use wasm_bindgen::JsCast;
use web_sys::{Blob, FormData, RequestInit, RequestMode, Response};

use crate::shared::api_utils::{api_url, js_error};
use crate::shared::download::retype_blob;

fn build_form_data(
    form: &InvoiceForm,
    competitors_json: &str,
    attachment: Option<&web_sys::File>,
) -> UseCaseResult<FormData> {
    let form_data = FormData::new().map_err(js_error)?;
    for (name, value) in form.text_parts(competitors_json) {
        form_data.append_with_str(name, &value).map_err(js_error)?;
    }
    if let Some(file) = attachment {
        form_data
            .append_with_blob_and_filename(FIELD_ANEXO, file, &file.name())
            .map_err(js_error)?;
    }
    Ok(form_data)
}

/// POST /api/gerar_pdf (multipart)
///
/// Тело успешного ответа целиком считается PDF.
pub async fn generate_pdf(
    form: &InvoiceForm,
    competitors_json: &str,
    attachment: Option<web_sys::File>,
) -> UseCaseResult<Blob> {
    let form_data = build_form_data(form, competitors_json, attachment.as_ref())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url("/api/gerar_pdf");
    let request = web_sys::Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| UseCaseError::network("no window"))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| UseCaseError::decode("Not a Response"))?;

    if !resp.ok() {
        return Err(UseCaseError::http(resp.status()));
    }

    let blob = wasm_bindgen_futures::JsFuture::from(resp.blob().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let blob: Blob = blob
        .dyn_into()
        .map_err(|_| UseCaseError::decode("Not a Blob"))?;

    retype_blob(&blob, PDF_CONTENT_TYPE).map_err(UseCaseError::decode)
}
