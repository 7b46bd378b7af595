use std::fmt::{Display, Formatter};

/// Routable screen identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Weather,
    Todo,
    TodoEdit,
    /// Identifier with no dedicated screen (Calendar, News, ...). Rendered as
    /// the home menu.
    Other(String),
}

impl Screen {
    /// Accepts any identifier; unknown names become `Other`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "Home" => Self::Home,
            "Weather" => Self::Weather,
            "Todo" => Self::Todo,
            "TodoEdit" => Self::TodoEdit,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Home => "Home",
            Self::Weather => "Weather",
            Self::Todo => "Todo",
            Self::TodoEdit => "TodoEdit",
            Self::Other(name) => name.as_str(),
        }
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Screen;

    #[test]
    fn parse_maps_known_names_and_keeps_unknown() {
        assert_eq!(Screen::parse("TodoEdit"), Screen::TodoEdit);
        assert_eq!(
            Screen::parse("Calendar"),
            Screen::Other("Calendar".to_string())
        );
        assert_eq!(Screen::parse("Calendar").as_str(), "Calendar");
    }
}
