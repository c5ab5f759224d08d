use std::fmt;
use std::fmt::Display;

use crate::config::NAVBAR_SCROLL_THRESHOLD;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NavbarVisibility {
    Shown,
    Hidden,
}

impl NavbarVisibility {
    pub fn for_scroll_offset(offset: f64) -> Self {
        if offset > NAVBAR_SCROLL_THRESHOLD {
            Self::Shown
        } else {
            Self::Hidden
        }
    }

    /// CSS `transform` value for this state.
    pub fn transform(&self) -> &'static str {
        match self {
            NavbarVisibility::Shown => SHOWN_TRANSFORM,
            NavbarVisibility::Hidden => HIDDEN_TRANSFORM,
        }
    }
}

impl Display for NavbarVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            NavbarVisibility::Shown => "shown",
            NavbarVisibility::Hidden => "hidden",
        };

        write!(f, "{}", str)
    }
}

const SHOWN_TRANSFORM: &str = "translateY(0)";
const HIDDEN_TRANSFORM: &str = "translateY(-110%)";

/// Decides what the landing navbar should look like for a scroll offset.
/// Pages without the landing flag never get a decision.
#[derive(Debug, Copy, Clone)]
pub struct NavbarToggle {
    landing: bool,
}

impl NavbarToggle {
    pub fn new(landing: bool) -> Self {
        Self { landing }
    }

    pub fn from_flag(flag: Option<&str>) -> Self {
        Self::new(flag == Some(crate::config::LANDING_FLAG_ON))
    }

    pub fn is_landing(&self) -> bool {
        self.landing
    }

    pub fn on_scroll(&self, offset: f64) -> Option<NavbarVisibility> {
        self.landing
            .then(|| NavbarVisibility::for_scroll_offset(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_landing_page_is_left_alone() {
        let toggle = NavbarToggle::from_flag(None);
        for offset in [0., 50., 100., 150., 10_000.] {
            assert_eq!(toggle.on_scroll(offset), None);
        }
        assert_eq!(NavbarToggle::from_flag(Some("0")).on_scroll(500.), None);
        assert_eq!(NavbarToggle::from_flag(Some("true")).on_scroll(500.), None);
    }

    #[test]
    fn landing_page_follows_threshold() {
        let toggle = NavbarToggle::from_flag(Some("1"));
        assert_eq!(toggle.on_scroll(0.), Some(NavbarVisibility::Hidden));
        assert_eq!(toggle.on_scroll(150.), Some(NavbarVisibility::Shown));
        assert_eq!(toggle.on_scroll(50.), Some(NavbarVisibility::Hidden));
    }

    #[test]
    fn threshold_itself_is_hidden() {
        assert_eq!(
            NavbarVisibility::for_scroll_offset(100.),
            NavbarVisibility::Hidden
        );
        assert_eq!(
            NavbarVisibility::for_scroll_offset(100.5),
            NavbarVisibility::Shown
        );
    }

    #[test]
    fn transforms() {
        assert_eq!(NavbarVisibility::Shown.transform(), "translateY(0)");
        assert_eq!(NavbarVisibility::Hidden.transform(), "translateY(-110%)");
    }
}
