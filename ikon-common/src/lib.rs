//! ikon-common - Icon framework registry, snippet generation and UI state
//!
//! Pure logic shared by the view components and the web app. Nothing in
//! here touches the DOM.

pub mod cdn;
pub mod framework;
pub mod grid;
pub mod layout;
pub mod package_manager;
pub mod preferences;
pub mod snippets;

pub use cdn::{cdn_url, sprite_filename};
pub use framework::{Framework, FrameworkCategory, FrameworkId, FrameworksConfig, Registry};
pub use grid::{grid_columns, GridColumns, GridSize};
pub use layout::{Breakpoint, DeviceClass, Orientation, WindowState};
pub use package_manager::{install_command, PackageManager};
pub use preferences::{MemoryStore, Persisted, PreferenceStore, Preferences, StorageError, Theme};
pub use snippets::{generate, CodeExample, IconData, InstallMethod};
