use crate::content::{TimelineEntry, TranslationBundle};
use crate::locale::Locale;
use crate::tilt::Tilt;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SelectLocale(String),
    Activate(usize),
    ResetTimeline,
    SetAboutVisible(bool),
    SetTilt(Tilt),
    ResetTilt,
    ToggleCertificates,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionState {
    locale: Locale,
    active_index: usize,
    tilt: Tilt,
    about_visible: bool,
    certificates_open: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionState {
    pub fn new() -> Self {
        Self {
            locale: Locale::default(),
            active_index: 0,
            tilt: Tilt::ZERO,
            about_visible: false,
            certificates_open: false,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    pub fn about_visible(&self) -> bool {
        self.about_visible
    }

    pub fn certificates_open(&self) -> bool {
        self.certificates_open
    }

    pub fn bundle(&self) -> &'static TranslationBundle {
        TranslationBundle::for_locale(self.locale)
    }

    pub fn active_entry(&self) -> &'static TimelineEntry {
        self.bundle().entry_or_fallback(self.active_index)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index == index
    }

    pub fn apply(&mut self, action: Action) -> bool {
        let changed = match action {
            Action::SelectLocale(code) => self.select_locale(&code),
            Action::Activate(index) => self.activate(index),
            Action::ResetTimeline => self.reset_timeline(),
            Action::SetAboutVisible(visible) => self.set_about_visible(visible),
            Action::SetTilt(tilt) => self.set_tilt(tilt),
            Action::ResetTilt => self.reset_tilt(),
            Action::ToggleCertificates => self.toggle_certificates(),
        };

        if changed {
            log::debug!(
                "interaction state: locale={} active={} about_visible={} certificates_open={}",
                self.locale.code(),
                self.active_index,
                self.about_visible,
                self.certificates_open
            );
        }

        changed
    }

    fn select_locale(&mut self, code: &str) -> bool {
        let Some(locale) = Locale::from_code(code) else {
            log::debug!("ignoring unsupported locale {code:?}");
            return false;
        };

        let locale_changed = locale != self.locale;
        self.locale = locale;
        let timeline_reset = self.reset_timeline();

        locale_changed || timeline_reset
    }

    fn activate(&mut self, index: usize) -> bool {
        if index >= self.bundle().timeline.len() {
            log::debug!("ignoring activation of timeline entry {index}");
            return false;
        }

        if self.active_index == index {
            return false;
        }

        self.active_index = index;
        true
    }

    fn reset_timeline(&mut self) -> bool {
        if self.active_index == 0 {
            return false;
        }

        self.active_index = 0;
        true
    }

    fn set_about_visible(&mut self, visible: bool) -> bool {
        let visibility_changed = self.about_visible != visible;
        self.about_visible = visible;

        let timeline_reset = !visible && self.reset_timeline();

        visibility_changed || timeline_reset
    }

    fn set_tilt(&mut self, tilt: Tilt) -> bool {
        if !tilt.is_finite() || self.tilt.is_close_to(tilt) {
            return false;
        }

        self.tilt = tilt;
        true
    }

    fn reset_tilt(&mut self) -> bool {
        if self.tilt.is_zero() {
            return false;
        }

        self.tilt = Tilt::ZERO;
        true
    }

    fn toggle_certificates(&mut self) -> bool {
        self.certificates_open = !self.certificates_open;
        true
    }
}

pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Direction;

    fn state_with(actions: impl IntoIterator<Item = Action>) -> InteractionState {
        let mut state = InteractionState::new();
        for action in actions {
            state.apply(action);
        }
        state
    }

    #[test]
    fn starts_on_first_entry_in_english() {
        let state = InteractionState::new();

        assert_eq!(state.locale(), Locale::En);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.tilt(), Tilt::ZERO);
        assert!(!state.about_visible());
        assert!(!state.certificates_open());
    }

    #[test]
    fn selecting_a_supported_locale_resets_the_timeline() {
        for locale in Locale::ALL {
            let mut state = state_with([Action::Activate(2)]);

            state.apply(Action::SelectLocale(locale.code().to_string()));

            assert_eq!(state.locale(), locale);
            assert_eq!(state.active_index(), 0);
        }
    }

    #[test]
    fn unsupported_locale_changes_nothing() {
        for value in ["fr", "", "HE", "he-IL"] {
            let mut state = state_with([Action::SelectLocale("he".to_string()), Action::Activate(1)]);
            let before = state.clone();

            let changed = state.apply(Action::SelectLocale(value.to_string()));

            assert!(!changed);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn every_entry_can_be_activated_and_leaving_resets() {
        let len = InteractionState::new().bundle().timeline.len();

        for index in 0..len {
            let mut state = InteractionState::new();

            state.apply(Action::Activate(index));
            assert_eq!(state.active_index(), index);

            state.apply(Action::ResetTimeline);
            assert_eq!(state.active_index(), 0);
        }
    }

    #[test]
    fn activating_the_active_entry_is_a_no_op() {
        let mut state = state_with([Action::Activate(1)]);

        assert!(!state.apply(Action::Activate(1)));
        assert!(!InteractionState::new().apply(Action::Activate(0)));
        assert!(!InteractionState::new().apply(Action::ResetTimeline));
    }

    #[test]
    fn out_of_range_activation_is_rejected() {
        let mut state = state_with([Action::Activate(1)]);

        assert!(!state.apply(Action::Activate(3)));
        assert!(!state.apply(Action::Activate(usize::MAX)));
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn hovering_an_entry_moves_the_portrait_then_leaving_restores_it() {
        let mut state = InteractionState::new();
        assert_eq!(state.bundle().timeline.len(), 3);

        state.apply(Action::Activate(2));
        assert_eq!(state.active_index(), 2);
        assert_eq!(state.active_entry().image, "/image.png");
        assert_eq!(state.active_entry().accent, "rgba(2, 13, 6, 0.45)");

        state.apply(Action::ResetTimeline);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.active_entry().image, "/image3.png");
    }

    #[test]
    fn losing_about_visibility_resets_the_timeline() {
        let mut state = state_with([Action::SetAboutVisible(true), Action::Activate(1)]);

        assert!(state.apply(Action::SetAboutVisible(false)));

        assert!(!state.about_visible());
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn gaining_about_visibility_keeps_the_active_entry() {
        let mut state = state_with([Action::Activate(2)]);

        state.apply(Action::SetAboutVisible(true));

        assert_eq!(state.active_index(), 2);
        assert!(!state.apply(Action::SetAboutVisible(true)));
    }

    #[test]
    fn switching_to_hebrew_resets_and_flips_direction() {
        let mut state = state_with([Action::Activate(2)]);

        state.apply(Action::SelectLocale("he".to_string()));

        assert_eq!(state.active_index(), 0);
        assert_eq!(state.locale().direction(), Direction::Rtl);
        assert_eq!(state.bundle().first_name, "דן");
    }

    #[test]
    fn tilt_updates_below_a_tenth_of_a_degree_are_dropped() {
        let mut state = InteractionState::new();

        assert!(state.apply(Action::SetTilt(Tilt { x: 3.0, y: -4.0 })));
        assert!(!state.apply(Action::SetTilt(Tilt { x: 3.05, y: -4.05 })));
        assert!(state.apply(Action::SetTilt(Tilt { x: 3.2, y: -4.0 })));
        assert_eq!(state.tilt(), Tilt { x: 3.2, y: -4.0 });
    }

    #[test]
    fn non_finite_tilt_is_rejected() {
        let mut state = InteractionState::new();

        assert!(!state.apply(Action::SetTilt(Tilt { x: f64::NAN, y: 1.0 })));
        assert!(!state.apply(Action::SetTilt(Tilt { x: 1.0, y: f64::INFINITY })));
        assert_eq!(state.tilt(), Tilt::ZERO);
    }

    #[test]
    fn reset_tilt_returns_to_rest() {
        let mut state = state_with([Action::SetTilt(Tilt { x: -9.0, y: 11.0 })]);

        assert!(state.apply(Action::ResetTilt));
        assert_eq!(state.tilt(), Tilt::ZERO);
        assert!(!state.apply(Action::ResetTilt));
    }

    #[test]
    fn certificates_panel_toggles() {
        let mut state = InteractionState::new();

        state.apply(Action::ToggleCertificates);
        assert!(state.certificates_open());

        state.apply(Action::ToggleCertificates);
        assert!(!state.certificates_open());
    }

    #[test]
    fn enter_and_space_activate_entries() {
        for key in ["Enter", " ", "Spacebar"] {
            assert!(is_activation_key(key), "{key:?}");
        }
        for key in ["Tab", "Escape", "ArrowDown", "space"] {
            assert!(!is_activation_key(key), "{key:?}");
        }
    }
}
