use contracts::shared::error::{UseCaseError, UseCaseResult};
use contracts::usecases::u501_cnpj_lookup::{Cnpj, CnpjLookupResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::registry_base;

/// GET {registry}/api/cnpj/v1/{cnpj}
///
/// Без повторов и таймаута; любой не-2xx ответ считается ошибкой.
pub async fn lookup(cnpj: &Cnpj) -> UseCaseResult<CnpjLookupResponse> {
    let url = cnpj.lookup_url(&registry_base());

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| UseCaseError::network(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(UseCaseError::http(response.status()));
    }

    response
        .json::<CnpjLookupResponse>()
        .await
        .map_err(|e| UseCaseError::decode(format!("Failed to parse response: {}", e)))
}
