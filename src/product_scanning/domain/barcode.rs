use crate::shared::Result;

/// NewType wrapper for a decoded barcode value
///
/// Typically EAN-8, EAN-13 or UPC-A digits, but any non-blank value the
/// decoder produces is accepted and passed through to the catalog.
/// Surrounding whitespace is the one exception: it is trimmed, so a value
/// read from a line of text matches the decoder's raw output. Interior
/// characters are never touched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Barcode(String);

impl Barcode {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            anyhow::bail!("Barcode cannot be empty");
        }

        if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Barcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Barcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
