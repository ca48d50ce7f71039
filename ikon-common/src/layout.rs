//! Viewport dimensions and the breakpoint tiers derived from them
//!
//! Only width and height are stored. Everything else is recomputed on read.

use serde::{Deserialize, Serialize};

pub const BREAKPOINT_SM: f64 = 640.0;
pub const BREAKPOINT_MD: f64 = 768.0;
pub const BREAKPOINT_LG: f64 = 1024.0;
pub const BREAKPOINT_XL: f64 = 1280.0;
pub const BREAKPOINT_2XL: f64 = 1536.0;

/// Named width tier. A width equal to a threshold belongs to the larger tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Breakpoint {
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width < BREAKPOINT_SM {
            Self::Xs
        } else if width < BREAKPOINT_MD {
            Self::Sm
        } else if width < BREAKPOINT_LG {
            Self::Md
        } else if width < BREAKPOINT_XL {
            Self::Lg
        } else if width < BREAKPOINT_2XL {
            Self::Xl
        } else {
            Self::Xxl
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub fn from_width(width: f64) -> Self {
        if width < BREAKPOINT_MD {
            Self::Mobile
        } else if width < BREAKPOINT_LG {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

/// Last known viewport size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowState {
    width: f64,
    height: f64,
}

impl Default for WindowState {
    /// Size assumed before the first measurement.
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}

impl WindowState {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Overwrite both dimensions. Called on every resize event.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::from_width(self.width)
    }

    pub fn device_class(&self) -> DeviceClass {
        DeviceClass::from_width(self.width)
    }

    pub fn is_mobile(&self) -> bool {
        self.device_class() == DeviceClass::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.device_class() == DeviceClass::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.device_class() == DeviceClass::Desktop
    }

    pub fn orientation(&self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(width: f64) -> WindowState {
        WindowState::new(width, 800.0)
    }

    #[test]
    fn tablet_boundary_is_exclusive_below() {
        let state = at(767.0);
        assert_eq!(state.breakpoint(), Breakpoint::Sm);
        assert!(state.is_mobile());
        assert!(!state.is_tablet());
        assert!(!state.is_desktop());

        let state = at(768.0);
        assert_eq!(state.breakpoint(), Breakpoint::Md);
        assert!(state.is_tablet());
        assert!(!state.is_mobile());
    }

    #[test]
    fn desktop_boundary() {
        assert!(at(1023.0).is_tablet());
        let state = at(1024.0);
        assert!(state.is_desktop());
        assert!(!state.is_tablet());
        assert_eq!(state.breakpoint(), Breakpoint::Lg);
    }

    #[test]
    fn every_threshold_resolves_to_the_larger_tier() {
        let cases = [
            (639.0, Breakpoint::Xs),
            (640.0, Breakpoint::Sm),
            (1279.0, Breakpoint::Lg),
            (1280.0, Breakpoint::Xl),
            (1535.0, Breakpoint::Xl),
            (1536.0, Breakpoint::Xxl),
            (0.0, Breakpoint::Xs),
        ];
        for (width, expected) in cases {
            assert_eq!(at(width).breakpoint(), expected, "width {width}");
        }
        assert_eq!(Breakpoint::Xxl.as_str(), "2xl");
    }

    #[test]
    fn resize_overwrites_and_derivations_follow() {
        let mut state = WindowState::default();
        assert!(state.is_desktop());
        assert_eq!(state.orientation(), Orientation::Landscape);

        state.resize(390.0, 844.0);
        assert_eq!(state.width(), 390.0);
        assert_eq!(state.height(), 844.0);
        assert!(state.is_mobile());
        assert_eq!(state.breakpoint(), Breakpoint::Xs);
        assert_eq!(state.orientation(), Orientation::Portrait);
    }

    #[test]
    fn square_viewport_is_portrait() {
        assert_eq!(
            WindowState::new(800.0, 800.0).orientation(),
            Orientation::Portrait
        );
    }
}
