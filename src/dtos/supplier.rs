use serde::Deserialize;

// Used for both POST /supplier and PUT /supplier/{id}.
#[derive(Debug, Deserialize)]
pub struct SupplierRequest {
    pub supplier_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}
