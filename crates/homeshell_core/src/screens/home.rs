//! Home menu: a fixed catalog of feature entries.

use crate::nav::{Navigator, Screen, ScreenParams};

/// One entry of the home menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Screen identifier this entry routes to.
    pub screen: &'static str,
}

/// Menu entries in display order. Only Weather and Todo have dedicated
/// screens; the rest route to identifiers rendered as the home menu.
pub const FEATURES: &[Feature] = &[
    Feature {
        id: "1",
        title: "Weather",
        description: "Current conditions and forecast",
        screen: "Weather",
    },
    Feature {
        id: "2",
        title: "Todo",
        description: "Keep track of things to do",
        screen: "Todo",
    },
    Feature {
        id: "3",
        title: "Calendar",
        description: "Schedule and appointments",
        screen: "Calendar",
    },
    Feature {
        id: "4",
        title: "News",
        description: "Latest headlines",
        screen: "News",
    },
    Feature {
        id: "5",
        title: "Settings",
        description: "App settings and preferences",
        screen: "Settings",
    },
    Feature {
        id: "6",
        title: "About",
        description: "About this app",
        screen: "About",
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct HomeScreen;

impl HomeScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn features(&self) -> &'static [Feature] {
        FEATURES
    }

    /// Navigates to the entry's screen. Returns `false` for unknown ids.
    pub fn open(&self, feature_id: &str, nav: &mut Navigator) -> bool {
        let Some(feature) = FEATURES.iter().find(|feature| feature.id == feature_id) else {
            return false;
        };
        nav.navigate(Screen::parse(feature.screen), ScreenParams::new());
        true
    }
}
