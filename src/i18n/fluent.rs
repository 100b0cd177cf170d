// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle loading and message lookup.

use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Catalog;

const FALLBACK_LOCALE: &str = "en-US";

/// Loaded translation bundles plus the active locale.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Catalog::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            if let Some(content) = Catalog::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                let resource =
                    FluentResource::try_new(source).expect("embedded FTL file should parse");
                let mut bundle = FluentBundle::new(vec![locale.clone()]);
                bundle
                    .add_resource(resource)
                    .expect("embedded FTL resource should register");
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }

        let fallback: LanguageIdentifier = FALLBACK_LOCALE
            .parse()
            .expect("fallback locale is well-formed");
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(fallback);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Looks up a message by key in the active bundle.
    ///
    /// Missing keys return a marker string rather than panicking so a broken
    /// catalog stays visible instead of crashing the UI.
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, None, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = cli_lang
        .into_iter()
        .chain(config.language.clone())
        .chain(sys_locale::get_locale());

    for candidate in candidates {
        if let Ok(locale) = candidate.parse::<LanguageIdentifier>() {
            if available.contains(&locale) {
                return Some(locale);
            }
        }
    }
    None
}
