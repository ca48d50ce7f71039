//! Shared UI components

pub mod button;
pub mod code_block;
pub mod framework_picker;
pub mod header;
pub mod icon_detail;
pub mod icon_grid;
pub mod icons;
pub mod preferences_bar;
pub mod segmented_control;

pub use button::{button_class, Button, ButtonVariant, ChromelessButton};
pub use code_block::CodeBlockView;
pub use framework_picker::FrameworkPickerView;
pub use header::{HeaderView, SEARCH_INPUT_ID};
pub use icon_detail::IconDetailView;
pub use icon_grid::IconGridView;
pub use icons::{CheckIcon, CopyIcon, MoonIcon, SearchIcon, SunIcon, XIcon};
pub use preferences_bar::PreferencesBarView;
pub use segmented_control::{Segment, SegmentedControl};
