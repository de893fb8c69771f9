use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Catalogue entry. The id is assigned once at generation and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: Uuid,
    #[schema(example = "Sleek Granite Keyboard")]
    pub product_name: String,
    #[schema(example = "Kuhn LLC")]
    pub manufacturer: String,
}

impl Product {
    pub fn new(
        product_id: Uuid,
        product_name: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            manufacturer: manufacturer.into(),
        }
    }
}
