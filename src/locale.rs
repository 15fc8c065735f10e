#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    He,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl Locale {
    pub const ALL: [Locale; 2] = [Self::En, Self::He];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::He => "he",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::He => "HE",
        }
    }

    pub fn from_code(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == value)
    }

    pub fn direction(self) -> Direction {
        match self {
            Self::He => Direction::Rtl,
            Self::En => Direction::Ltr,
        }
    }

    pub fn is_rtl(self) -> bool {
        self.direction() == Direction::Rtl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_code_round_trips() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn unsupported_codes_are_rejected() {
        for value in ["", "EN", "fr", "he-IL", " en", "english"] {
            assert_eq!(Locale::from_code(value), None, "{value:?} should be rejected");
        }
    }

    #[test]
    fn hebrew_is_the_only_right_to_left_locale() {
        assert_eq!(Locale::He.direction(), Direction::Rtl);
        assert_eq!(Locale::En.direction(), Direction::Ltr);
        assert_eq!(Locale::He.direction().as_str(), "rtl");
        assert!(!Locale::default().is_rtl());
    }
}
