pub mod request;
pub mod response;

pub use request::{Cnpj, DEFAULT_REGISTRY_BASE};
pub use response::CnpjLookupResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct CnpjLookup;

impl UseCaseMetadata for CnpjLookup {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "cnpj_lookup"
    }

    fn display_name() -> &'static str {
        "Consultar CNPJ"
    }

    fn description() -> &'static str {
        "Заполнение карточки новой компании из публичного реестра по CNPJ"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(CnpjLookup::full_name(), "u501_cnpj_lookup");
    }
}
