/// Fallback shown when the catalog knows a product but omits a field.
pub const UNKNOWN: &str = "Unknown";

/// Whether the catalog recognised the barcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    Found,
    NotFound,
}

/// Outcome of a catalog lookup that reached the server and was understood
///
/// Immutable once constructed. `NotFound` is a regular answer, not an error:
/// transport failures are reported separately as `LookupError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLookupResult {
    status: LookupStatus,
    product_name: Option<String>,
    nutrition_grade: Option<String>,
    status_message: String,
}

impl ProductLookupResult {
    /// A recognised product. Missing fields fall back to [`UNKNOWN`].
    pub fn found(
        product_name: Option<String>,
        nutrition_grade: Option<String>,
        status_message: impl Into<String>,
    ) -> Self {
        Self {
            status: LookupStatus::Found,
            product_name: Some(product_name.unwrap_or_else(|| UNKNOWN.to_string())),
            nutrition_grade: Some(nutrition_grade.unwrap_or_else(|| UNKNOWN.to_string())),
            status_message: status_message.into(),
        }
    }

    pub fn not_found(status_message: impl Into<String>) -> Self {
        Self {
            status: LookupStatus::NotFound,
            product_name: None,
            nutrition_grade: None,
            status_message: status_message.into(),
        }
    }

    pub fn status(&self) -> LookupStatus {
        self.status
    }

    pub fn is_found(&self) -> bool {
        self.status == LookupStatus::Found
    }

    pub fn product_name(&self) -> Option<&str> {
        self.product_name.as_deref()
    }

    pub fn nutrition_grade(&self) -> Option<&str> {
        self.nutrition_grade.as_deref()
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }
}
