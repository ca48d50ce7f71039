//! jsDelivr address construction

use crate::framework::FrameworkId;
use crate::snippets::IconData;

pub const CDN_BASE: &str = "https://cdn.jsdelivr.net/npm";

/// `https://cdn.jsdelivr.net/npm/<package>@<version>/<path>`
pub fn package_url(package: &str, version: &str, path: &str) -> String {
    format!("{CDN_BASE}/{package}@{version}/{path}")
}

/// Root of a package on the CDN, used for "Browse:" links.
pub fn package_root(package: &str, version: &str) -> String {
    package_url(package, version, "")
}

/// Sprite sheet matching an icon style. Unknown styles get the stroked sheet.
pub fn sprite_filename(style: &str) -> &'static str {
    match style {
        "filled" => "tabler-sprite-filled.svg",
        "outline" => "tabler-sprite-nostroke.svg",
        _ => "tabler-sprite.svg",
    }
}

pub fn sprite_url(style: &str, version: &str) -> String {
    package_url(
        "@tabler/icons-sprite",
        version,
        &format!("dist/{}", sprite_filename(style)),
    )
}

/// Hosted address of a single icon for the given target.
///
/// Sprite sheets and webfonts bundle every icon into one file, so they have
/// no per-icon address and return an empty string.
pub fn cdn_url(id: FrameworkId, icon: &IconData, version: &str) -> String {
    let component = &icon.component_name;
    let name = &icon.name;
    let style = &icon.style;

    match id {
        FrameworkId::SvelteRunes | FrameworkId::Svelte => package_url(
            "@tabler/icons-svelte",
            version,
            &format!("dist/icons/{component}.svelte"),
        ),
        FrameworkId::React => package_url(
            "@tabler/icons-react",
            version,
            &format!("dist/esm/icons/{component}.mjs"),
        ),
        FrameworkId::ReactNative => package_url(
            "@tabler/icons-react-native",
            version,
            &format!("esm/icons/{component}.js"),
        ),
        FrameworkId::Vue => package_url(
            "@tabler/icons-vue",
            version,
            &format!("dist/esm/icons/{component}.js"),
        ),
        FrameworkId::SolidJs => package_url(
            "@tabler/icons-solidjs",
            version,
            &format!("dist/esm/icons/{component}.js"),
        ),
        FrameworkId::Preact => package_url(
            "@tabler/icons-preact",
            version,
            &format!("dist/esm/icons/{component}.js"),
        ),
        FrameworkId::Angular | FrameworkId::WebComponents | FrameworkId::Svg => package_url(
            "@tabler/icons",
            version,
            &format!("icons/{style}/{name}.svg"),
        ),
        FrameworkId::Png => package_url(
            "@tabler/icons-png",
            version,
            &format!("icons/{style}/{name}.png"),
        ),
        FrameworkId::Sprite | FrameworkId::Webfont => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> IconData {
        IconData::new("IconHome", "home", "outline")
    }

    #[test]
    fn svg_url() {
        assert_eq!(
            cdn_url(FrameworkId::Svg, &home(), "3.35.0"),
            "https://cdn.jsdelivr.net/npm/@tabler/icons@3.35.0/icons/outline/home.svg"
        );
    }

    #[test]
    fn component_urls_use_component_name() {
        assert_eq!(
            cdn_url(FrameworkId::React, &home(), "3.0.0"),
            "https://cdn.jsdelivr.net/npm/@tabler/icons-react@3.0.0/dist/esm/icons/IconHome.mjs"
        );
        assert_eq!(
            cdn_url(FrameworkId::SvelteRunes, &home(), "3.0.0"),
            cdn_url(FrameworkId::Svelte, &home(), "3.0.0")
        );
        assert!(cdn_url(FrameworkId::ReactNative, &home(), "3.0.0").ends_with("/esm/icons/IconHome.js"));
    }

    #[test]
    fn png_url_uses_style_directory() {
        let icon = IconData::new("IconHeartFilled", "heart", "filled");
        assert_eq!(
            cdn_url(FrameworkId::Png, &icon, "3.0.0"),
            "https://cdn.jsdelivr.net/npm/@tabler/icons-png@3.0.0/icons/filled/heart.png"
        );
    }

    #[test]
    fn bundled_formats_have_no_url() {
        assert_eq!(cdn_url(FrameworkId::Sprite, &home(), "3.0.0"), "");
        assert_eq!(cdn_url(FrameworkId::Webfont, &home(), "3.0.0"), "");
    }

    #[test]
    fn url_is_a_pure_function_of_inputs() {
        for id in FrameworkId::ALL {
            assert_eq!(cdn_url(id, &home(), "3.1.0"), cdn_url(id, &home(), "3.1.0"));
        }
        assert_ne!(
            cdn_url(FrameworkId::Svg, &home(), "3.1.0"),
            cdn_url(FrameworkId::Svg, &home(), "3.2.0")
        );
    }

    #[test]
    fn sprite_files_by_style() {
        assert_eq!(sprite_filename("filled"), "tabler-sprite-filled.svg");
        assert_eq!(sprite_filename("outline"), "tabler-sprite-nostroke.svg");
        assert_eq!(sprite_filename("duotone"), "tabler-sprite.svg");
        assert_eq!(
            sprite_url("filled", "3.0.0"),
            "https://cdn.jsdelivr.net/npm/@tabler/icons-sprite@3.0.0/dist/tabler-sprite-filled.svg"
        );
    }
}
