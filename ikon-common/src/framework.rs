//! Framework registry
//!
//! Static table of supported output targets (component libraries and static
//! asset formats), loaded once from the embedded `frameworks.json`.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::debug;

const EMBEDDED_FRAMEWORKS: &str = include_str!("../data/frameworks.json");

/// Supported output targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameworkId {
    #[serde(rename = "svelte-runes")]
    SvelteRunes,
    #[serde(rename = "svelte")]
    Svelte,
    #[serde(rename = "react")]
    React,
    #[serde(rename = "react-native")]
    ReactNative,
    #[serde(rename = "vue")]
    Vue,
    #[serde(rename = "solidjs")]
    SolidJs,
    #[serde(rename = "preact")]
    Preact,
    #[serde(rename = "angular")]
    Angular,
    #[serde(rename = "web-components")]
    WebComponents,
    #[serde(rename = "svg")]
    Svg,
    #[serde(rename = "png")]
    Png,
    #[serde(rename = "sprite")]
    Sprite,
    #[serde(rename = "webfont")]
    Webfont,
}

impl FrameworkId {
    pub const ALL: [FrameworkId; 13] = [
        Self::SvelteRunes,
        Self::Svelte,
        Self::React,
        Self::ReactNative,
        Self::Vue,
        Self::SolidJs,
        Self::Preact,
        Self::Angular,
        Self::WebComponents,
        Self::Svg,
        Self::Png,
        Self::Sprite,
        Self::Webfont,
    ];

    /// Target used whenever an identifier cannot be resolved.
    pub const FALLBACK: FrameworkId = FrameworkId::Svg;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SvelteRunes => "svelte-runes",
            Self::Svelte => "svelte",
            Self::React => "react",
            Self::ReactNative => "react-native",
            Self::Vue => "vue",
            Self::SolidJs => "solidjs",
            Self::Preact => "preact",
            Self::Angular => "angular",
            Self::WebComponents => "web-components",
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Sprite => "sprite",
            Self::Webfont => "webfont",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Parse an identifier, resolving anything outside the closed set to
    /// [`FrameworkId::FALLBACK`].
    pub fn parse_or_fallback(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            debug!("Unknown framework id {:?}, falling back to svg", s);
            Self::FALLBACK
        })
    }
}

impl std::fmt::Display for FrameworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameworkCategory {
    ComponentLibrary,
    Static,
}

/// Metadata for one output target. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Framework {
    pub id: FrameworkId,
    pub name: String,
    pub package: String,
    pub cdn_package: String,
    pub has_cdn_package: bool,
    pub has_npm_package: bool,
    pub category: FrameworkCategory,
}

/// Shape of `frameworks.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworksConfig {
    pub cdn_version: String,
    pub frameworks: Vec<Framework>,
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid frameworks config: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("duplicate framework id: {0}")]
    DuplicateId(FrameworkId),
}

/// Read-only lookup over a [`FrameworksConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    config: FrameworksConfig,
}

impl Registry {
    pub fn new(config: FrameworksConfig) -> Result<Self, RegistryError> {
        for (i, framework) in config.frameworks.iter().enumerate() {
            if config.frameworks[..i].iter().any(|f| f.id == framework.id) {
                return Err(RegistryError::DuplicateId(framework.id));
            }
        }
        Ok(Self { config })
    }

    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// The registry shipped with the binary, parsed on first use.
    pub fn embedded() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            Registry::from_json(EMBEDDED_FRAMEWORKS).expect("embedded frameworks.json is valid")
        })
    }

    pub fn cdn_version(&self) -> &str {
        &self.config.cdn_version
    }

    pub fn frameworks(&self) -> &[Framework] {
        &self.config.frameworks
    }

    pub fn lookup(&self, id: FrameworkId) -> Option<&Framework> {
        self.config.frameworks.iter().find(|f| f.id == id)
    }

    pub fn by_category(&self, category: FrameworkCategory) -> Vec<&Framework> {
        self.config
            .frameworks
            .iter()
            .filter(|f| f.category == category)
            .collect()
    }

    pub fn has_npm_package(&self, id: FrameworkId) -> bool {
        self.lookup(id).is_some_and(|f| f.has_npm_package)
    }

    pub fn has_cdn_package(&self, id: FrameworkId) -> bool {
        self.lookup(id).is_some_and(|f| f.has_cdn_package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_ids() {
        assert_eq!(FrameworkId::parse("react"), Some(FrameworkId::React));
        assert_eq!(
            FrameworkId::parse("web-components"),
            Some(FrameworkId::WebComponents)
        );
        assert_eq!(FrameworkId::parse("solidjs"), Some(FrameworkId::SolidJs));
        assert_eq!(FrameworkId::parse("React"), None);
    }

    #[test]
    fn parse_or_fallback_resolves_to_svg() {
        assert_eq!(FrameworkId::parse_or_fallback("ember"), FrameworkId::Svg);
        assert_eq!(FrameworkId::parse_or_fallback(""), FrameworkId::Svg);
        assert_eq!(FrameworkId::parse_or_fallback("vue"), FrameworkId::Vue);
    }

    #[test]
    fn serde_names_match_as_str() {
        for id in FrameworkId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn embedded_registry_covers_every_id() {
        let registry = Registry::embedded();
        for id in FrameworkId::ALL {
            assert!(registry.lookup(id).is_some(), "missing {id}");
        }
        assert!(!registry.cdn_version().is_empty());
    }

    #[test]
    fn capability_flags() {
        let registry = Registry::embedded();
        assert!(!registry.has_npm_package(FrameworkId::Angular));
        assert!(!registry.has_npm_package(FrameworkId::WebComponents));
        assert!(!registry.has_cdn_package(FrameworkId::ReactNative));
        assert!(registry.has_npm_package(FrameworkId::React));
        assert!(registry.has_cdn_package(FrameworkId::Svg));
    }

    #[test]
    fn by_category_splits_the_table() {
        let registry = Registry::embedded();
        let static_ids: Vec<_> = registry
            .by_category(FrameworkCategory::Static)
            .iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(
            static_ids,
            vec![
                FrameworkId::Svg,
                FrameworkId::Png,
                FrameworkId::Sprite,
                FrameworkId::Webfont
            ]
        );
        assert_eq!(
            registry
                .by_category(FrameworkCategory::ComponentLibrary)
                .len(),
            9
        );
    }

    #[test]
    fn missing_entries_report_no_capabilities() {
        let registry = Registry::from_json(r#"{"cdnVersion":"1.0.0","frameworks":[]}"#).unwrap();
        assert!(registry.lookup(FrameworkId::Svg).is_none());
        assert!(!registry.has_npm_package(FrameworkId::Svg));
        assert!(!registry.has_cdn_package(FrameworkId::Svg));
    }

    #[test]
    fn rejects_bad_config() {
        assert!(matches!(
            Registry::from_json("not json"),
            Err(RegistryError::InvalidJson(_))
        ));

        let entry = r#"{"id":"svg","name":"SVG","package":"p","cdnPackage":"p","hasCdnPackage":true,"hasNpmPackage":true,"category":"static"}"#;
        let json = format!(r#"{{"cdnVersion":"1.0.0","frameworks":[{entry},{entry}]}}"#);
        assert!(matches!(
            Registry::from_json(&json),
            Err(RegistryError::DuplicateId(FrameworkId::Svg))
        ));
    }
}
