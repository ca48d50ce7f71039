use ikon_common::{
    cdn_url, generate, CodeExample, FrameworkId, IconData, InstallMethod, PackageManager, Registry,
};

fn home() -> IconData {
    IconData::new("IconHome", "home", "outline")
}

#[test]
fn every_framework_and_method_yields_three_snippets() {
    let registry = Registry::embedded();
    let icons = [home(), IconData::new("IconHeartFilled", "heart", "filled")];

    for icon in &icons {
        for framework in registry.frameworks() {
            for method in [InstallMethod::Package, InstallMethod::Cdn] {
                for pm in PackageManager::ALL {
                    let example = generate(
                        framework.id.as_str(),
                        icon,
                        framework,
                        method,
                        pm,
                        registry.cdn_version(),
                    );
                    assert!(!example.install.is_empty(), "{} {:?}", framework.id, method);
                    assert!(!example.import.is_empty(), "{} {:?}", framework.id, method);
                    assert!(!example.usage.is_empty(), "{} {:?}", framework.id, method);
                }
            }
        }
    }
}

#[test]
fn unknown_framework_matches_svg() {
    let registry = Registry::embedded();
    let svg = registry.lookup(FrameworkId::Svg).unwrap();

    for method in [InstallMethod::Package, InstallMethod::Cdn] {
        let unknown = generate(
            "qwik",
            &home(),
            svg,
            method,
            PackageManager::Npm,
            registry.cdn_version(),
        );
        let expected = generate(
            "svg",
            &home(),
            svg,
            method,
            PackageManager::Npm,
            registry.cdn_version(),
        );
        assert_eq!(unknown, expected);

        assert_eq!(
            registry.code_example("qwik", &home(), method, PackageManager::Npm),
            registry.code_example("svg", &home(), method, PackageManager::Npm),
        );
    }
}

#[test]
fn generation_is_deterministic() {
    let registry = Registry::embedded();
    for id in FrameworkId::ALL {
        let a = registry.code_example(id.as_str(), &home(), InstallMethod::Cdn, PackageManager::Bun);
        let b = registry.code_example(id.as_str(), &home(), InstallMethod::Cdn, PackageManager::Bun);
        assert_eq!(a, b);
    }
}

#[test]
fn bundled_formats_explain_the_alternative() {
    let registry = Registry::embedded();
    let version = registry.cdn_version();

    let sprite = registry.code_example("sprite", &home(), InstallMethod::Cdn, PackageManager::Pnpm);
    assert_eq!(cdn_url(FrameworkId::Sprite, &home(), version), "");
    assert!(sprite.install.contains("include a sprite sheet instead"));

    let webfont =
        registry.code_example("webfont", &home(), InstallMethod::Cdn, PackageManager::Pnpm);
    assert_eq!(cdn_url(FrameworkId::Webfont, &home(), version), "");
    assert!(webfont
        .install
        .contains("include the webfont stylesheet instead"));
}

#[test]
fn svg_cdn_example_scenario() {
    let registry = Registry::embedded();
    let version = registry.cdn_version();
    let framework = registry.lookup(FrameworkId::Svg).unwrap();
    let example = generate(
        "svg",
        &home(),
        framework,
        InstallMethod::Cdn,
        PackageManager::Pnpm,
        version,
    );
    let url = cdn_url(FrameworkId::Svg, &home(), version);

    assert!(example.install.contains(&framework.package));
    assert!(example.install.contains(version));
    assert_eq!(example.import, url);
    assert!(example.usage.contains(&format!("<img src=\"{url}\"")));
}

#[test]
fn plain_image_fallback_shape() {
    let example = CodeExample::plain_image("https://example.test/a.svg", "a");
    assert_eq!(example.install, "CDN: https://example.test/a.svg");
    assert_eq!(example.import, "https://example.test/a.svg");
    assert_eq!(
        example.usage,
        "<img src=\"https://example.test/a.svg\" alt=\"a\" />"
    );
}
