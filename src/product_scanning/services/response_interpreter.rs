use crate::product_scanning::domain::ProductLookupResult;

/// Catalog status code meaning "barcode is known".
pub const STATUS_FOUND: i64 = 1;

/// ResponseInterpreter turns the catalog's loosely-typed answer into a lookup result
///
/// Rules:
/// 1. `status == 1` -> `Found`, with missing product fields replaced by "Unknown"
///    (this includes a `null` product object)
/// 2. any other status -> `NotFound`, carrying the server's `status_verbose`
pub struct ResponseInterpreter;

impl ResponseInterpreter {
    /// # Arguments
    /// * `status` - Numeric status from the response body
    /// * `product_name` - `product.product_name`, if the product object and field exist
    /// * `nutrition_grade` - `product.nutrition_grades`, if the product object and field exist
    /// * `status_verbose` - Human-readable status from the response body
    pub fn interpret(
        status: i64,
        product_name: Option<String>,
        nutrition_grade: Option<String>,
        status_verbose: String,
    ) -> ProductLookupResult {
        if status == STATUS_FOUND {
            ProductLookupResult::found(product_name, nutrition_grade, status_verbose)
        } else {
            ProductLookupResult::not_found(status_verbose)
        }
    }
}
