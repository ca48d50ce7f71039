use crate::layout::DeviceClass;
use serde::{Deserialize, Serialize};

/// Icon grid density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridSize {
    Small,
    Medium,
    Large,
}

#[allow(clippy::derivable_impls)]
impl Default for GridSize {
    fn default() -> Self {
        GridSize::Medium
    }
}

/// Column counts per device class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridColumns {
    pub mobile: usize,
    pub tablet: usize,
    pub desktop: usize,
}

impl GridSize {
    pub const ALL: [GridSize; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    pub fn columns(&self) -> GridColumns {
        match self {
            Self::Small => GridColumns {
                mobile: 4,
                tablet: 6,
                desktop: 10,
            },
            Self::Medium => GridColumns {
                mobile: 3,
                tablet: 4,
                desktop: 6,
            },
            Self::Large => GridColumns {
                mobile: 2,
                tablet: 3,
                desktop: 4,
            },
        }
    }
}

/// Number of grid columns for a density at the given viewport width.
pub fn grid_columns(size: GridSize, screen_width: f64) -> usize {
    let columns = size.columns();
    match DeviceClass::from_width(screen_width) {
        DeviceClass::Mobile => columns.mobile,
        DeviceClass::Tablet => columns.tablet,
        DeviceClass::Desktop => columns.desktop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_by_width() {
        assert_eq!(grid_columns(GridSize::Small, 500.0), 4);
        assert_eq!(grid_columns(GridSize::Small, 767.0), 4);
        assert_eq!(grid_columns(GridSize::Small, 768.0), 6);
        assert_eq!(grid_columns(GridSize::Small, 1024.0), 10);
        assert_eq!(grid_columns(GridSize::Medium, 900.0), 4);
        assert_eq!(grid_columns(GridSize::Large, 1920.0), 4);
        assert_eq!(grid_columns(GridSize::Large, 320.0), 2);
    }

    #[test]
    fn denser_grids_have_more_columns() {
        for width in [400.0, 800.0, 1200.0] {
            assert!(grid_columns(GridSize::Small, width) > grid_columns(GridSize::Medium, width));
            assert!(grid_columns(GridSize::Medium, width) > grid_columns(GridSize::Large, width));
        }
    }
}
