//! Localized error messages.
//!
//! Services build NotFound and InvalidArgument messages through [`Messages`], which picks a
//! template by [`MessageKey`] for the request's [`Locale`]. Templates use `{0}` as the single
//! placeholder. The locale comes from the `Accept-Language` header and falls back to the
//! configured default.

use axum::{
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};
use std::{convert::Infallible, fmt::Display};

use crate::server::state::AppState;

/// Supported message locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    /// Parses a language tag such as `de`, `de-AT` or `EN`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.trim().to_ascii_lowercase();

        match primary.as_str() {
            "en" => Some(Locale::En),
            "de" => Some(Locale::De),
            _ => None,
        }
    }

    /// First supported locale in an `Accept-Language` header value.
    ///
    /// Quality weights are ignored; entries are taken in listed order.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        header
            .split(',')
            .filter_map(|entry| entry.split(';').next())
            .find_map(|tag| Locale::from_tag(tag.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    GameNotFound,
    GenreNotFound,
    PlatformNotFound,
    PublisherNotFound,
    DeveloperNotFound,
    FranchiseNotFound,
    ReleaseDateNotFound,
    DownloadableContentNotFound,
    BarcodeNotFound,
    CatalogNotFound,
    PageRequestMissing,
    FilterMissing,
    PatchMissing,
    IdsMissing,
    VersionConflict,
}

impl MessageKey {
    fn template(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (MessageKey::GameNotFound, Locale::En) => "Game with id {0} not found",
            (MessageKey::GameNotFound, Locale::De) => "Spiel mit der ID {0} wurde nicht gefunden",
            (MessageKey::GenreNotFound, Locale::En) => "Genre with id {0} not found",
            (MessageKey::GenreNotFound, Locale::De) => "Genre mit der ID {0} wurde nicht gefunden",
            (MessageKey::PlatformNotFound, Locale::En) => "Platform with id {0} not found",
            (MessageKey::PlatformNotFound, Locale::De) => {
                "Plattform mit der ID {0} wurde nicht gefunden"
            }
            (MessageKey::PublisherNotFound, Locale::En) => "Publisher with id {0} not found",
            (MessageKey::PublisherNotFound, Locale::De) => {
                "Publisher mit der ID {0} wurde nicht gefunden"
            }
            (MessageKey::DeveloperNotFound, Locale::En) => "Developer with id {0} not found",
            (MessageKey::DeveloperNotFound, Locale::De) => {
                "Entwickler mit der ID {0} wurde nicht gefunden"
            }
            (MessageKey::FranchiseNotFound, Locale::En) => "Franchise with id {0} not found",
            (MessageKey::FranchiseNotFound, Locale::De) => {
                "Franchise mit der ID {0} wurde nicht gefunden"
            }
            (MessageKey::ReleaseDateNotFound, Locale::En) => "Release date with id {0} not found",
            (MessageKey::ReleaseDateNotFound, Locale::De) => {
                "Erscheinungsdatum mit der ID {0} wurde nicht gefunden"
            }
            (MessageKey::DownloadableContentNotFound, Locale::En) => {
                "Downloadable content with id {0} not found"
            }
            (MessageKey::DownloadableContentNotFound, Locale::De) => {
                "Zusatzinhalt mit der ID {0} wurde nicht gefunden"
            }
            (MessageKey::BarcodeNotFound, Locale::En) => "Barcode {0} not found",
            (MessageKey::BarcodeNotFound, Locale::De) => "Barcode {0} wurde nicht gefunden",
            (MessageKey::CatalogNotFound, Locale::En) => "No catalog named '{0}'",
            (MessageKey::CatalogNotFound, Locale::De) => "Es gibt keinen Katalog '{0}'",
            (MessageKey::PageRequestMissing, Locale::En) => "Page request must not be null",
            (MessageKey::PageRequestMissing, Locale::De) => {
                "Seitenanfrage darf nicht null sein"
            }
            (MessageKey::FilterMissing, Locale::En) => "Filter must not be null",
            (MessageKey::FilterMissing, Locale::De) => "Filter darf nicht null sein",
            (MessageKey::PatchMissing, Locale::En) => "Patch document must not be null",
            (MessageKey::PatchMissing, Locale::De) => "Patch-Dokument darf nicht null sein",
            (MessageKey::IdsMissing, Locale::En) => "Id collection must not be null",
            (MessageKey::IdsMissing, Locale::De) => "ID-Sammlung darf nicht null sein",
            (MessageKey::VersionConflict, Locale::En) => {
                "Resource with id {0} was modified by another request"
            }
            (MessageKey::VersionConflict, Locale::De) => {
                "Ressource mit der ID {0} wurde zwischenzeitlich geändert"
            }
        }
    }
}

/// Message lookup bound to one locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Renders the template for `key` with `arg` in place of `{0}`.
    pub fn get(&self, key: MessageKey, arg: impl Display) -> String {
        key.template(self.locale).replace("{0}", &arg.to_string())
    }

    /// Renders a template that takes no argument.
    pub fn text(&self, key: MessageKey) -> String {
        key.template(self.locale).to_string()
    }
}

/// Resolves messages from the request's `Accept-Language` header.
impl FromRequestParts<AppState> for Messages {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let locale = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .and_then(Locale::from_accept_language)
            .unwrap_or(state.default_locale);

        Ok(Messages::new(locale))
    }
}
