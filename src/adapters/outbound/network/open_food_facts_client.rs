use crate::ports::outbound::ProductCatalog;
use crate::product_scanning::domain::{Barcode, ProductLookupResult};
use crate::product_scanning::services::ResponseInterpreter;
use crate::shared::error::LookupError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Public Open Food Facts instance queried when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.net";

/// Field selector sent with every lookup; keeps responses small.
pub const LOOKUP_FIELDS: &str = "product_name,nutrition_grades";

#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    product: Option<ProductFields>,
    status: i64,
    #[serde(default)]
    status_verbose: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProductFields {
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    nutrition_grades: Option<String>,
}

/// `<app-id> - <platform> - Version <major>.<minor>`, as requested by the Open Food Facts API policy.
pub fn default_user_agent() -> String {
    format!(
        "NutriScan - {} - Version {}.{}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR")
    )
}

/// OpenFoodFactsClient adapter for looking up products by barcode
///
/// This adapter implements the ProductCatalog port on top of the
/// Open Food Facts v2 product API.
///
/// The reqwest client is created once and owned by this adapter; whoever owns
/// the adapter (normally the scan pipeline) owns the connection pool.
/// No retries and no caching: one scan, one request.
pub struct OpenFoodFactsClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    /// Creates a client for the public instance with the default user agent
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_BASE_URL, &default_user_agent())
    }

    /// Creates a client for a specific API host and user agent
    pub fn with_endpoint(base_url: &str, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the lookup URL. The field selector is written out literally so
    /// the comma is not percent-encoded.
    fn product_url(&self, barcode: &Barcode) -> String {
        format!(
            "{}/api/v2/product/{}?fields={}",
            self.base_url,
            urlencoding::encode(barcode.as_str()),
            LOOKUP_FIELDS
        )
    }

    async fn fetch(&self, barcode: &Barcode) -> std::result::Result<String, LookupError> {
        let url = self.product_url(barcode);
        debug!(%url, "sending product lookup");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Network {
                detail: describe(&e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Http {
                status: status.as_u16(),
                detail: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
            });
        }

        response.text().await.map_err(|e| LookupError::Network {
            detail: describe(&e),
        })
    }
}

/// Parses a product API body into a lookup result
pub(crate) fn parse_response(body: &str) -> std::result::Result<ProductLookupResult, LookupError> {
    let response: ProductResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Parse {
            detail: e.to_string(),
        })?;

    debug!(
        code = response.code.as_deref().unwrap_or(""),
        status = response.status,
        "product API response"
    );

    let (product_name, nutrition_grade) = match response.product {
        Some(product) => (product.product_name, product.nutrition_grades),
        None => (None, None),
    };

    Ok(ResponseInterpreter::interpret(
        response.status,
        product_name,
        nutrition_grade,
        response.status_verbose.unwrap_or_default(),
    ))
}

/// reqwest hides the interesting part (refused, DNS, timeout) in the source chain
fn describe(error: &reqwest::Error) -> String {
    let mut detail = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(err) = source {
        detail.push_str(": ");
        detail.push_str(&err.to_string());
        source = err.source();
    }
    detail
}

#[async_trait]
impl ProductCatalog for OpenFoodFactsClient {
    async fn lookup(&self, barcode: &Barcode) -> std::result::Result<ProductLookupResult, LookupError> {
        info!(%barcode, "looking up product");

        let outcome = self
            .fetch(barcode)
            .await
            .and_then(|body| parse_response(&body));

        if let Err(ref e) = outcome {
            warn!(%barcode, kind = %e.kind(), detail = e.detail(), "product lookup failed");
        }
        outcome
    }
}
