//! Localized UI strings.
//!
//! Only the locales bundled in the binary can be loaded, the requested locale is sanitized and
//! resolved by trying the exact locale, its base language and finally english.

use serde_json::Value;

pub const DEFAULT_LOCALE: &str = "en";

const MAX_LOCALE_LEN: usize = 10;

const BUNDLED: &[(&str, &str)] = &[
    ("en", include_str!("../translations/en.json")),
    ("es", include_str!("../translations/es.json")),
];

#[derive(thiserror::Error, Debug)]
pub enum I18nError {
    #[error("Translations for '{locale}' are not valid json: {source}")]
    Json {
        locale: String,
        source: serde_json::Error,
    },

    #[error("Failed to load translations")]
    NoTranslations,

    #[error("Missing translation: {0}")]
    MissingTranslation(String),

    #[error("Invalid translation for key: {0}")]
    InvalidTranslation(String),
}

/// Keep only ascii alphanumerics and `-`, at most 10 chars, `en` if nothing is left
///
/// ```
/// # use zapdesk::i18n::sanitize_locale;
/// assert_eq!(sanitize_locale("../../../etc/passwd"), "etcpasswd");
/// assert_eq!(sanitize_locale("!@#$%"), "en");
/// ```
pub fn sanitize_locale(locale: &str) -> String {
    let sanitized: String = locale
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .take(MAX_LOCALE_LEN)
        .collect();
    if sanitized.is_empty() {
        DEFAULT_LOCALE.to_string()
    } else {
        sanitized
    }
}

fn base_locale(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

/// The bundled messages for exactly `locale`, `None` if it's not bundled
pub fn bundled(locale: &str) -> Result<Option<Value>, I18nError> {
    BUNDLED
        .iter()
        .find(|(l, _)| *l == locale)
        .map(|(l, json)| {
            serde_json::from_str(json).map_err(|source| I18nError::Json {
                locale: l.to_string(),
                source,
            })
        })
        .transpose()
}

/// Find exact or base locale messages returning the resolved locale together with them
fn resolve(sanitized: &str) -> Result<Option<(String, Value)>, I18nError> {
    if let Some(messages) = bundled(sanitized)? {
        return Ok(Some((sanitized.to_string(), messages)));
    }
    let base = base_locale(sanitized);
    if base != sanitized {
        if let Some(messages) = bundled(base)? {
            return Ok(Some((base.to_string(), messages)));
        }
    }
    Ok(None)
}

#[derive(Debug, Clone)]
pub struct Translations {
    locale: String,
    messages: Value,
}

impl Translations {
    /// Load `locale`, falling back to its base language and then to english
    pub fn load(locale: &str) -> Result<Self, I18nError> {
        let sanitized = sanitize_locale(locale);
        let (locale, messages) = match resolve(&sanitized)? {
            Some(found) => found,
            None => {
                let messages = bundled(DEFAULT_LOCALE)?.ok_or(I18nError::NoTranslations)?;
                (DEFAULT_LOCALE.to_string(), messages)
            }
        };
        if locale == sanitized {
            log::debug!("loaded translations: {locale}");
        } else {
            log::warn!("loaded translations: {locale} (fallback from {sanitized})");
        }
        Ok(Translations { locale, messages })
    }

    /// Like [`Translations::load`] but keeps the current messages when `locale` is not bundled
    pub fn switch(&mut self, locale: &str) -> Result<(), I18nError> {
        let sanitized = sanitize_locale(locale);
        match resolve(&sanitized)? {
            Some((locale, messages)) => {
                log::debug!("switched translations to {locale}");
                self.locale = locale;
                self.messages = messages;
            }
            None => log::warn!("keeping {} translations, {sanitized} not found", self.locale),
        }
        Ok(())
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Translate the dotted `key`, replacing `{{placeholder}}`s with values from `context`
    ///
    /// ```
    /// # use zapdesk::i18n::Translations;
    /// let translations = Translations::load("es-MX").unwrap();
    /// assert_eq!(translations.t("ui.title", &[]).unwrap(), "Dale una propina en sats al agente");
    /// assert_eq!(translations.t("ui.satsLabel", &[("amount", "1000")]).unwrap(), "1000 sats");
    /// ```
    pub fn t(&self, key: &str, context: &[(&str, &str)]) -> Result<String, I18nError> {
        let mut template = &self.messages;
        for k in key.split('.') {
            template = template
                .as_object()
                .and_then(|o| o.get(k))
                .ok_or_else(|| I18nError::MissingTranslation(key.to_string()))?;
        }
        match template {
            Value::String(s) if !s.is_empty() => Ok(parse_placeholders(s, context)),
            Value::Null | Value::String(_) => Err(I18nError::MissingTranslation(key.to_string())),
            _ => Err(I18nError::InvalidTranslation(key.to_string())),
        }
    }
}

/// Unknown placeholders are replaced with the empty string
fn parse_placeholders(template: &str, context: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        let name = &rest[start + 2..start + 2 + len];
        result.push_str(&rest[..start]);
        if let Some((_, value)) = context.iter().find(|(k, _)| *k == name) {
            result.push_str(value);
        }
        rest = &rest[start + 2 + len + 2..];
    }
    result.push_str(rest);
    result
}
