//! Bundled icon list
//!
//! A curated subset of the icon set so the grid has content without fetching
//! the full catalogue.

use ikon_common::IconData;
use ikon_ui::IconEntry;

/// (component name, icon name, style, category, tags)
const ICONS: &[(&str, &str, &str, &str, &[&str])] = &[
    ("IconHome", "home", "outline", "Buildings", &["house", "dashboard", "living"]),
    ("IconHomeFilled", "home", "filled", "Buildings", &["house", "dashboard", "living"]),
    ("IconBuilding", "building", "outline", "Buildings", &["office", "city", "company"]),
    ("IconArrowUp", "arrow-up", "outline", "Arrows", &["top", "north", "direction"]),
    ("IconArrowDown", "arrow-down", "outline", "Arrows", &["bottom", "south", "direction"]),
    ("IconArrowLeft", "arrow-left", "outline", "Arrows", &["back", "west", "direction"]),
    ("IconArrowRight", "arrow-right", "outline", "Arrows", &["next", "east", "direction"]),
    ("IconChevronDown", "chevron-down", "outline", "Arrows", &["expand", "more"]),
    ("IconRefresh", "refresh", "outline", "Arrows", &["reload", "sync", "update"]),
    ("IconHeart", "heart", "outline", "Health", &["love", "like", "favorite"]),
    ("IconHeartFilled", "heart", "filled", "Health", &["love", "like", "favorite"]),
    ("IconStar", "star", "outline", "System", &["favorite", "rate", "bookmark"]),
    ("IconStarFilled", "star", "filled", "System", &["favorite", "rate", "bookmark"]),
    ("IconSearch", "search", "outline", "System", &["find", "magnifier", "zoom"]),
    ("IconSettings", "settings", "outline", "System", &["gear", "preferences", "cog"]),
    ("IconBell", "bell", "outline", "System", &["notification", "alarm", "alert"]),
    ("IconTrash", "trash", "outline", "System", &["delete", "remove", "bin"]),
    ("IconLock", "lock", "outline", "System", &["secure", "password", "private"]),
    ("IconCopy", "copy", "outline", "Text", &["duplicate", "clipboard"]),
    ("IconCheck", "check", "outline", "System", &["done", "tick", "ok"]),
    ("IconX", "x", "outline", "System", &["close", "cancel", "remove"]),
    ("IconPlus", "plus", "outline", "Math", &["add", "new", "create"]),
    ("IconMinus", "minus", "outline", "Math", &["subtract", "remove"]),
    ("IconUser", "user", "outline", "Users", &["person", "account", "profile"]),
    ("IconUsers", "users", "outline", "Users", &["people", "group", "team"]),
    ("IconMail", "mail", "outline", "Communication", &["email", "inbox", "message"]),
    ("IconMessage", "message", "outline", "Communication", &["chat", "comment", "talk"]),
    ("IconPhone", "phone", "outline", "Communication", &["call", "mobile", "contact"]),
    ("IconCalendar", "calendar", "outline", "System", &["date", "event", "schedule"]),
    ("IconClock", "clock", "outline", "System", &["time", "hour", "watch"]),
    ("IconCamera", "camera", "outline", "Media", &["photo", "picture", "lens"]),
    ("IconPhoto", "photo", "outline", "Media", &["image", "picture", "gallery"]),
    ("IconMusic", "music", "outline", "Media", &["song", "audio", "note"]),
    ("IconPlayerPlay", "player-play", "outline", "Media", &["start", "video", "audio"]),
    ("IconPlayerPlayFilled", "player-play", "filled", "Media", &["start", "video", "audio"]),
    ("IconSun", "sun", "outline", "Weather", &["light", "day", "bright"]),
    ("IconMoon", "moon", "outline", "Weather", &["dark", "night"]),
    ("IconCloud", "cloud", "outline", "Weather", &["sky", "storage", "upload"]),
    ("IconBrandGithub", "brand-github", "outline", "Brand", &["git", "code", "repository"]),
    ("IconBrandRust", "brand-rust", "outline", "Brand", &["language", "programming"]),
    ("IconCode", "code", "outline", "Development", &["html", "brackets", "programming"]),
    ("IconTerminal", "terminal", "outline", "Development", &["console", "shell", "command"]),
    ("IconDatabase", "database", "outline", "Database", &["storage", "data", "sql"]),
    ("IconDownload", "download", "outline", "Arrows", &["save", "file", "import"]),
    ("IconUpload", "upload", "outline", "Arrows", &["send", "file", "export"]),
];

pub fn icon_entries() -> Vec<IconEntry> {
    ICONS
        .iter()
        .map(|(component, name, style, category, tags)| IconEntry {
            icon: IconData::new(*component, *name, *style),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn entries_are_unique_and_well_formed() {
        let entries = icon_entries();
        let mut seen = HashSet::new();
        for entry in &entries {
            assert!(entry.icon.component_name.starts_with("Icon"));
            assert!(!entry.icon.name.is_empty());
            assert!(matches!(entry.icon.style.as_str(), "outline" | "filled"));
            assert!(seen.insert((entry.icon.name.clone(), entry.icon.style.clone())));
        }
    }
}
