// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::common::i18n::DEFAULT_LOCALE;

// Extrator de idioma (subtag principal do Accept-Language)
#[derive(Debug, Clone)]
pub struct Locale(pub String);

impl Locale {
    pub fn from_parts(parts: &Parts) -> Self {
        let lang = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(|header_str| {
                accept_language::parse(header_str)
                    .first()
                    // "pt-BR" -> "pt"
                    .map(|tag| tag.split('-').next().unwrap_or(tag).to_lowercase())
            })
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        Locale(lang)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale(DEFAULT_LOCALE.to_string())
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Locale::from_parts(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with(value: Option<&str>) -> Parts {
        let mut builder = Request::builder();
        if let Some(v) = value {
            builder = builder.header(header::ACCEPT_LANGUAGE, v);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn picks_primary_subtag_of_preferred_language() {
        let parts = parts_with(Some("pt-BR,pt;q=0.9,en;q=0.8"));
        assert_eq!(Locale::from_parts(&parts).0, "pt");
    }

    #[test]
    fn defaults_to_english() {
        assert_eq!(Locale::from_parts(&parts_with(None)).0, "en");
    }
}
