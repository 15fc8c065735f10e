#[derive(Clone, Debug, PartialEq)]
pub enum Capability<T> {
    Available(T),
    Unavailable,
}

impl<T> Capability<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Capability<U> {
        match self {
            Self::Available(value) => Capability::Available(f(value)),
            Self::Unavailable => Capability::Unavailable,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Available(value) => Some(value),
            Self::Unavailable => None,
        }
    }

    pub fn unwrap_or_fallback(self, fallback: T) -> T {
        self.into_option().unwrap_or(fallback)
    }
}

impl<T> From<Option<T>> for Capability<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unavailable, Self::Available)
    }
}

pub const REDUCED_MOTION_FALLBACK: bool = false;

pub const ABOUT_VISIBLE_FALLBACK: bool = true;
