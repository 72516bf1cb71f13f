pub mod common;
pub mod u501_cnpj_lookup;
pub mod u502_generate_invoice;
