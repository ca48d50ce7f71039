//! Icon browsing state (search, selection, install method)

use crate::display_types::SnippetKind;
use dioxus::prelude::*;
use ikon_common::{IconData, InstallMethod};

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct BrowserState {
    /// Search box contents
    pub query: String,
    /// Icon whose snippets are shown
    pub selected: Option<IconData>,
    /// Package manager or CDN snippets
    pub install_method: InstallMethod,
    /// Snippet most recently copied, for the "Copied" badge
    pub copied: Option<SnippetKind>,
}
