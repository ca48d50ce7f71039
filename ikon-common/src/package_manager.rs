use serde::{Deserialize, Serialize};

/// JavaScript package manager used for install snippets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Pnpm,
    Npm,
    Yarn,
    Bun,
}

#[allow(clippy::derivable_impls)]
impl Default for PackageManager {
    fn default() -> Self {
        PackageManager::Pnpm
    }
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [Self::Pnpm, Self::Npm, Self::Yarn, Self::Bun];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pm| pm.as_str() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Npm => "npm",
            Self::Yarn => "Yarn",
            Self::Bun => "Bun",
        }
    }

    /// Command prefix that adds a dependency (e.g. "pnpm add").
    pub fn add_command(&self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm add",
            Self::Npm => "npm install",
            Self::Yarn => "yarn add",
            Self::Bun => "bun add",
        }
    }
}

/// Full install command for one or more space-separated packages.
pub fn install_command(package_manager: PackageManager, packages: &str) -> String {
    format!("{} {}", package_manager.add_command(), packages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_commands() {
        assert_eq!(
            install_command(PackageManager::Pnpm, "@tabler/icons-react"),
            "pnpm add @tabler/icons-react"
        );
        assert_eq!(
            install_command(PackageManager::Npm, "@tabler/icons-vue"),
            "npm install @tabler/icons-vue"
        );
        assert_eq!(install_command(PackageManager::Yarn, "a b"), "yarn add a b");
        assert_eq!(install_command(PackageManager::Bun, "x"), "bun add x");
    }

    #[test]
    fn parse() {
        assert_eq!(PackageManager::parse("yarn"), Some(PackageManager::Yarn));
        assert_eq!(PackageManager::parse("Yarn"), None);
        assert_eq!(PackageManager::default(), PackageManager::Pnpm);
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        assert_eq!(
            serde_json::to_string(&PackageManager::Bun).unwrap(),
            "\"bun\""
        );
        let pm: PackageManager = serde_json::from_str("\"npm\"").unwrap();
        assert_eq!(pm, PackageManager::Npm);
    }
}
