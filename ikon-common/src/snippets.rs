//! Install / import / usage snippet generation
//!
//! Every target has one template per install method, selected by an
//! exhaustive match on [`FrameworkId`]. Identifiers outside the closed set
//! resolve to [`FrameworkId::FALLBACK`] before dispatch, so generation never
//! fails.

use crate::cdn::{cdn_url, package_root, package_url, sprite_filename, sprite_url};
use crate::framework::{Framework, FrameworkId, Registry};
use crate::package_manager::{install_command, PackageManager};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The icon a snippet is generated for. Supplied by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconData {
    /// Generated component name, e.g. `IconHome`
    pub component_name: String,
    /// Canonical icon name, e.g. `home`
    pub name: String,
    /// `outline` or `filled`
    pub style: String,
}

impl IconData {
    pub fn new(
        component_name: impl Into<String>,
        name: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            component_name: component_name.into(),
            name: name.into(),
            style: style.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallMethod {
    #[default]
    Package,
    Cdn,
}

impl InstallMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Cdn => "cdn",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "package" => Some(Self::Package),
            "cdn" => Some(Self::Cdn),
            _ => None,
        }
    }
}

/// The three snippets shown for a selected icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    pub install: String,
    pub import: String,
    pub usage: String,
}

impl CodeExample {
    fn new(install: impl Into<String>, import: impl Into<String>, usage: impl Into<String>) -> Self {
        Self {
            install: install.into(),
            import: import.into(),
            usage: usage.into(),
        }
    }

    /// Last-resort snippet referencing a hosted URL directly.
    pub fn plain_image(url: &str, icon_name: &str) -> Self {
        Self::new(
            format!("CDN: {url}"),
            url,
            format!("<img src=\"{url}\" alt=\"{icon_name}\" />"),
        )
    }
}

/// Generate snippets for a framework identifier string.
///
/// Unknown identifiers produce exactly what `svg` would.
pub fn generate(
    framework_id: &str,
    icon: &IconData,
    framework: &Framework,
    method: InstallMethod,
    package_manager: PackageManager,
    version: &str,
) -> CodeExample {
    let id = FrameworkId::parse_or_fallback(framework_id);
    code_example(id, icon, framework, method, package_manager, version)
}

pub fn code_example(
    id: FrameworkId,
    icon: &IconData,
    framework: &Framework,
    method: InstallMethod,
    package_manager: PackageManager,
    version: &str,
) -> CodeExample {
    match method {
        InstallMethod::Cdn => cdn_example(id, icon, framework, version),
        InstallMethod::Package => package_example(id, icon, framework, package_manager),
    }
}

impl Registry {
    /// Look up metadata and generate snippets against this registry's version.
    ///
    /// Falls back to the `svg` entry when the identifier is unknown or has no
    /// metadata, and to [`CodeExample::plain_image`] when `svg` is missing too.
    pub fn code_example(
        &self,
        framework_id: &str,
        icon: &IconData,
        method: InstallMethod,
        package_manager: PackageManager,
    ) -> CodeExample {
        let id = FrameworkId::parse_or_fallback(framework_id);
        let version = self.cdn_version();

        let resolved = self
            .lookup(id)
            .map(|framework| (id, framework))
            .or_else(|| {
                debug!("No metadata for {}, using svg", id);
                self.lookup(FrameworkId::FALLBACK)
                    .map(|framework| (FrameworkId::FALLBACK, framework))
            });

        match resolved {
            Some((id, framework)) => {
                code_example(id, icon, framework, method, package_manager, version)
            }
            None => {
                debug!("Registry has no svg entry, using plain image snippet");
                let url = cdn_url(FrameworkId::FALLBACK, icon, version);
                CodeExample::plain_image(&url, &icon.name)
            }
        }
    }
}

fn hosted_install(source: &str, package: &str, version: &str) -> String {
    format!(
        "<!-- No installation required! -->
<!-- {source} via jsDelivr CDN -->

Package: {package}@{version}
Browse: {root}",
        root = package_root(package, version),
    )
}

/// CDN template family.
pub fn cdn_example(
    id: FrameworkId,
    icon: &IconData,
    framework: &Framework,
    version: &str,
) -> CodeExample {
    let component = icon.component_name.as_str();
    let name = icon.name.as_str();
    let style = icon.style.as_str();
    let pkg = framework.package.as_str();
    let url = cdn_url(id, icon, version);
    let svg_url = cdn_url(FrameworkId::Svg, icon, version);

    match id {
        FrameworkId::SvelteRunes | FrameworkId::Svelte => {
            let (label, script) = if id == FrameworkId::SvelteRunes {
                (
                    "Svelte 5",
                    format!(
                        "<script>
  let svgContent = $state('');

  fetch('{svg_url}')
    .then(res => res.text())
    .then(svg => svgContent = svg);
</script>"
                    ),
                )
            } else {
                (
                    "Svelte 4",
                    format!(
                        "<script>
  import {{ onMount }} from 'svelte';
  let svgContent = '';

  onMount(async () => {{
    const res = await fetch('{svg_url}');
    svgContent = await res.text();
  }});
</script>"
                    ),
                )
            };
            CodeExample::new(
                hosted_install("Served from NPM", pkg, version),
                format!(
                    "<!-- Direct CDN URL -->
{url}

<!-- Note: Svelte components can't be imported directly from CDN -->
<!-- Use the SVG fallback method below instead -->"
                ),
                format!(
                    "<!-- {label} - Use SVG from CDN -->
<!-- Direct import of .svelte files from CDN is not supported -->
<!-- Use the img tag or inline SVG instead -->

<img src=\"{svg_url}\"
     alt=\"{name}\" width=\"24\" height=\"24\" />

<!-- Or fetch and use inline -->
{script}

{{@html svgContent}}"
                ),
            )
        }
        FrameworkId::React => CodeExample::new(
            hosted_install("Served from NPM", pkg, version),
            format!(
                "// Direct CDN URL
{url}

// Or add to import map
<script type=\"importmap\">
{{
  \"imports\": {{
    \"{component}\": \"{url}\"
  }}
}}
</script>"
            ),
            format!(
                "// React with CDN
import {{ lazy, Suspense }} from 'react';

// Dynamic import
const {component} = lazy(() => import('{url}'));

function MyComponent() {{
  return (
    <Suspense fallback={{<div>Loading...</div>}}>
      <{component} size={{24}} stroke={{1.5}} />
    </Suspense>
  );
}}

// Or use img tag for SVG
<img src=\"{svg_url}\"
     alt=\"{name}\" width={{24}} height={{24}} />"
            ),
        ),
        FrameworkId::ReactNative => CodeExample::new(
            format!(
                "<!-- CDN not recommended for {0} -->
<!-- Use package manager instead -->

{0} requires native dependencies.
Please use the package manager installation method.",
                framework.name
            ),
            format!(
                "<!-- Not applicable for {} -->
<!-- Install via package manager -->",
                framework.name
            ),
            format!(
                "<!-- Not recommended for {} -->
<!-- Please use package manager installation -->",
                framework.name
            ),
        ),
        FrameworkId::Vue => CodeExample::new(
            hosted_install("Served from NPM", pkg, version),
            format!(
                "<!-- Direct CDN URL -->
{url}"
            ),
            format!(
                "<!-- Vue with CDN -->
<script setup>
import {{ defineAsyncComponent }} from 'vue';

const {component} = defineAsyncComponent(() =>
  import('{url}')
);
</script>

<template>
  <{component} :size=\"24\" :stroke-width=\"1.5\" />

  <!-- Or use img tag for SVG -->
  <img src=\"{svg_url}\"
       alt=\"{name}\" :width=\"24\" :height=\"24\" />
</template>"
            ),
        ),
        FrameworkId::SolidJs => CodeExample::new(
            hosted_install("Served from NPM", pkg, version),
            format!(
                "// Direct CDN URL
{url}"
            ),
            format!(
                "// SolidJS with CDN
import {{ lazy }} from 'solid-js';

const {component} = lazy(() => import('{url}'));

function MyComponent() {{
  return (
    <{component} size={{24}} stroke={{1.5}} />
  );
}}

// Or use img tag for SVG
<img src=\"{svg_url}\"
     alt=\"{name}\" width={{24}} height={{24}} />"
            ),
        ),
        FrameworkId::Preact => CodeExample::new(
            hosted_install("Served from NPM", pkg, version),
            format!(
                "// Direct CDN URL
{url}"
            ),
            format!(
                "// Preact with CDN
import {{ lazy, Suspense }} from 'preact/compat';

const {component} = lazy(() => import('{url}'));

function MyComponent() {{
  return (
    <Suspense fallback={{<div>Loading...</div>}}>
      <{component} size={{24}} stroke={{1.5}} />
    </Suspense>
  );
}}

// Or use img tag for SVG
<img src=\"{svg_url}\"
     alt=\"{name}\" width={{24}} height={{24}} />"
            ),
        ),
        FrameworkId::Angular => CodeExample::new(
            format!(
                "<!-- No Angular-specific package available -->
<!-- Using base SVG package instead -->

Package: @tabler/icons@{version}
Browse: {root}

Note: @tabler/icons-angular is not available on NPM.
CDN is the recommended installation method for Angular.",
                root = package_root("@tabler/icons", version),
            ),
            format!(
                "<!-- Direct SVG URL -->
{url}"
            ),
            format!(
                "<!-- Angular - SVG from CDN -->
<!-- CDN is the recommended method (no NPM package) -->

<img src=\"{url}\"
     alt=\"{name}\"
     width=\"24\"
     height=\"24\" />

<!-- Or fetch and use inline (component.ts) -->
import {{ Component, OnInit }} from '@angular/core';
import {{ DomSanitizer, SafeHtml }} from '@angular/platform-browser';

export class IconComponent implements OnInit {{
  svgContent: SafeHtml = '';

  constructor(private sanitizer: DomSanitizer) {{}}

  async ngOnInit() {{
    const res = await fetch('{url}');
    const svg = await res.text();
    this.svgContent = this.sanitizer.bypassSecurityTrustHtml(svg);
  }}
}}

<!-- In template -->
<div [innerHTML]=\"svgContent\"></div>"
            ),
        ),
        FrameworkId::WebComponents => CodeExample::new(
            format!(
                "<!-- No Web Components package available -->
<!-- Using base SVG package instead -->

Package: @tabler/icons@{version}
Browse: {root}

Note: @tabler/icons-webcomponents is not available on NPM.
CDN is the recommended installation method.",
                root = package_root("@tabler/icons", version),
            ),
            format!(
                "<!-- Direct SVG URL -->
{url}"
            ),
            format!(
                "<!-- Web Components - SVG from CDN -->
<img src=\"{url}\"
     alt=\"{name}\"
     width=\"24\"
     height=\"24\" />

<!-- Or create a custom element -->
<script>
class TablerIcon extends HTMLElement {{
  connectedCallback() {{
    fetch('{url}')
      .then(res => res.text())
      .then(svg => this.innerHTML = svg);
  }}
}}
customElements.define('tabler-{name}', TablerIcon);
</script>

<tabler-{name}></tabler-{name}>"
            ),
        ),
        FrameworkId::Svg => CodeExample::new(
            hosted_install("SVG from NPM", pkg, version),
            url.as_str(),
            format!(
                "<!-- SVG / HTML Usage -->
<img src=\"{url}\"
     alt=\"{name}\"
     width=\"24\"
     height=\"24\" />

<!-- CSS Background -->
<div style=\"background-image: url('{url}'); width: 24px; height: 24px;\"></div>

<!-- Fetch and inline -->
<script>
fetch('{url}')
  .then(res => res.text())
  .then(svg => document.getElementById('icon').innerHTML = svg);
</script>
<div id=\"icon\"></div>

<!-- Markdown -->
![{name}]({url})"
            ),
        ),
        FrameworkId::Png => CodeExample::new(
            hosted_install("PNG icons from NPM", pkg, version),
            format!(
                "<!-- Direct PNG URL -->
{url}"
            ),
            format!(
                "<!-- PNG Usage -->
<img src=\"{url}\"
     alt=\"{name}\"
     width=\"24\"
     height=\"24\" />"
            ),
        ),
        FrameworkId::Sprite => {
            let sheet = sprite_url(style, version);
            CodeExample::new(
                format!(
                    "<!-- No installation required! -->
<!-- Sprite from NPM via jsDelivr CDN -->
<!-- Individual icons have no direct URL: include a sprite sheet instead -->

Package: {pkg}@{version}

<!-- Three sprite files available: -->
<!-- tabler-sprite.svg (1.76 MB) - Regular icons with stroke -->
<!-- tabler-sprite-filled.svg (606.8 KB) - Filled style icons -->
<!-- tabler-sprite-nostroke.svg (1.68 MB) - Outline style icons -->"
                ),
                format!(
                    "<!-- Include the appropriate sprite file based on your needs -->

<!-- Regular (with stroke) -->
{regular}

<!-- Filled icons -->
{filled}

<!-- Outline (no stroke) -->
{outline}",
                    regular = sprite_url("", version),
                    filled = sprite_url("filled", version),
                    outline = sprite_url("outline", version),
                ),
                format!(
                    "<!-- Link to the specific sprite for this icon style: {style} -->
<svg class=\"icon\" width=\"24\" height=\"24\">
  <use xlink:href=\"{sheet}#tabler-{name}\"></use>
</svg>

<!-- Or preload the sprite in your HTML -->
<body>
  <!-- Hidden sprite definition -->
  <div hidden>
    <svg>
      <use xlink:href=\"{sheet}\"></use>
    </svg>
  </div>

  <!-- Use icons throughout your page -->
  <svg class=\"icon\" width=\"24\" height=\"24\">
    <use xlink:href=\"#tabler-{name}\"></use>
  </svg>
</body>"
                ),
            )
        }
        FrameworkId::Webfont => CodeExample::new(
            format!(
                "<!-- No installation required! -->
<!-- Webfont from NPM via jsDelivr CDN -->
<!-- Individual icons have no direct URL: include the webfont stylesheet instead -->

Package: {pkg}@{version}"
            ),
            format!(
                "<!-- Include webfont CSS from CDN -->
<link rel=\"stylesheet\" href=\"{css}\" />",
                css = package_url("@tabler/icons-webfont", version, "dist/tabler-icons.css"),
            ),
            webfont_usage(name),
        ),
    }
}

fn webfont_usage(name: &str) -> String {
    format!(
        "<!-- Use icon font -->
<i class=\"ti ti-{name}\"></i>

<!-- With custom size -->
<i class=\"ti ti-{name}\" style=\"font-size: 24px;\"></i>"
    )
}

fn npm_unavailable(framework_name: &str) -> CodeExample {
    CodeExample::new(
        format!(
            "<!-- No NPM package available for {framework_name} -->
<!-- Please use CDN installation method instead -->"
        ),
        "<!-- Not available -->",
        "<!-- Please use CDN method -->",
    )
}

/// Package-manager template family.
pub fn package_example(
    id: FrameworkId,
    icon: &IconData,
    framework: &Framework,
    package_manager: PackageManager,
) -> CodeExample {
    let component = icon.component_name.as_str();
    let name = icon.name.as_str();
    let pkg = framework.package.as_str();
    let named_import = format!("import {{ {component} }} from '{pkg}';");

    match id {
        FrameworkId::SvelteRunes
        | FrameworkId::Svelte
        | FrameworkId::React
        | FrameworkId::SolidJs
        | FrameworkId::Preact => CodeExample::new(
            install_command(package_manager, pkg),
            named_import,
            format!("<{component} size={{24}} stroke={{1.5}} />"),
        ),
        FrameworkId::ReactNative => CodeExample::new(
            install_command(package_manager, &format!("{pkg} react-native-svg")),
            named_import,
            format!("<{component} size={{24}} stroke={{1.5}} color=\"#000\" />"),
        ),
        FrameworkId::Vue => CodeExample::new(
            install_command(package_manager, pkg),
            named_import,
            format!("<{component} :size=\"24\" :stroke-width=\"1.5\" />"),
        ),
        FrameworkId::Angular | FrameworkId::WebComponents => npm_unavailable(&framework.name),
        FrameworkId::Svg => CodeExample::new(
            install_command(package_manager, pkg),
            format!(
                "// Node.js
const {{ {component} }} = require('{pkg}');"
            ),
            format!(
                "<!-- Direct SVG -->
<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\"
  viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\"
  stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\">
  <!-- Icon paths here -->
</svg>

// Or get SVG string from package:
const svgString = {component}.toSvg({{ size: 24, strokeWidth: 1.5 }});"
            ),
        ),
        FrameworkId::Png => CodeExample::new(
            install_command(package_manager, pkg),
            "// Download PNG files from package",
            format!(
                "<!-- Use PNG images -->
<img src=\"node_modules/{pkg}/icons/{style}/{name}.png\"
     alt=\"{name}\" width=\"24\" height=\"24\" />",
                style = icon.style,
            ),
        ),
        FrameworkId::Sprite => {
            let dist = format!("node_modules/{pkg}/dist");
            CodeExample::new(
                install_command(package_manager, pkg),
                format!(
                    "<!-- Three sprite files available after installation -->

<!-- Regular (with stroke) -->
{dist}/tabler-sprite.svg

<!-- Filled icons -->
{dist}/tabler-sprite-filled.svg

<!-- Outline (no stroke) -->
{dist}/tabler-sprite-nostroke.svg"
                ),
                format!(
                    "<!-- Use the appropriate sprite file for your icon style -->
<svg class=\"icon\" width=\"24\" height=\"24\">
  <use xlink:href=\"{dist}/{sheet}#tabler-{name}\"></use>
</svg>

<!-- Or load it in your HTML head and use references -->
<body>
  <!-- Include the sprite (choose one based on style needed) -->
  <object data=\"{dist}/{sheet}\"
          style=\"position: absolute; width: 0; height: 0;\"></object>

  <!-- Use icons throughout your page -->
  <svg class=\"icon\" width=\"24\" height=\"24\">
    <use xlink:href=\"#tabler-{name}\"></use>
  </svg>
</body>",
                    sheet = sprite_filename(&icon.style),
                ),
            )
        }
        FrameworkId::Webfont => CodeExample::new(
            install_command(package_manager, pkg),
            format!(
                "<!-- Include webfont CSS -->
<link rel=\"stylesheet\"
  href=\"node_modules/{pkg}/dist/tabler-icons.min.css\" />"
            ),
            webfont_usage(name),
        ),
    }
}
