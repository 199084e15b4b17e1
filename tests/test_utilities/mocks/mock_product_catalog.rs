use async_trait::async_trait;
use nutriscan::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock ProductCatalog with canned answers and a shared call log
///
/// Clones share the call log, so a test can keep one clone while the
/// pipeline owns another.
#[derive(Clone, Default)]
pub struct MockProductCatalog {
    answers: HashMap<String, std::result::Result<ProductLookupResult, LookupError>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, code: &str, name: &str, grade: &str) -> Self {
        self.answers.insert(
            code.to_string(),
            Ok(ProductLookupResult::found(
                Some(name.to_string()),
                Some(grade.to_string()),
                "product found",
            )),
        );
        self
    }

    pub fn with_error(mut self, code: &str, error: LookupError) -> Self {
        self.answers.insert(code.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductCatalog for MockProductCatalog {
    async fn lookup(
        &self,
        barcode: &Barcode,
    ) -> std::result::Result<ProductLookupResult, LookupError> {
        self.calls.lock().unwrap().push(barcode.to_string());
        self.answers
            .get(barcode.as_str())
            .cloned()
            .unwrap_or_else(|| Ok(ProductLookupResult::not_found("product not found")))
    }
}
