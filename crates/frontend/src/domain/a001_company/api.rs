use contracts::domain::a001_company::Company;
use contracts::shared::error::{UseCaseError, UseCaseResult};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

fn collection_url() -> String {
    api_url(&format!("/api/{}", Company::collection_name()))
}

/// GET /api/empresas
pub async fn fetch_companies() -> UseCaseResult<Vec<Company>> {
    let response = Request::get(&collection_url())
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| UseCaseError::network(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(UseCaseError::http(response.status()));
    }

    response
        .json::<Vec<Company>>()
        .await
        .map_err(|e| UseCaseError::decode(format!("Failed to parse response: {}", e)))
}

/// POST /api/empresas
pub async fn save_company(company: &Company) -> UseCaseResult<()> {
    let response = Request::post(&collection_url())
        .json(company)
        .map_err(|e| UseCaseError::decode(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| UseCaseError::network(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(UseCaseError::http(response.status()));
    }

    Ok(())
}
