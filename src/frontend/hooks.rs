use gloo_events::EventListener;
use js_sys::{Array, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MediaQueryList,
};
use yew::prelude::*;

use crate::capability::{Capability, ABOUT_VISIBLE_FALLBACK, REDUCED_MOTION_FALLBACK};
use crate::visibility::{is_section_visible, OBSERVER_ROOT_MARGIN, OBSERVER_THRESHOLDS};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn reduced_motion_query() -> Capability<MediaQueryList> {
    window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .into()
}

#[hook]
pub fn use_prefers_reduced_motion() -> bool {
    let prefers_reduced_motion = use_state_eq(|| {
        reduced_motion_query()
            .map(|query| query.matches())
            .unwrap_or_fallback(REDUCED_MOTION_FALLBACK)
    });

    {
        let prefers_reduced_motion = prefers_reduced_motion.clone();
        use_effect_with((), move |_| {
            let listener = match reduced_motion_query() {
                Capability::Available(query) => {
                    prefers_reduced_motion.set(query.matches());
                    let watched = query.clone();
                    Some(EventListener::new(&query, "change", move |_| {
                        prefers_reduced_motion.set(watched.matches());
                    }))
                }
                Capability::Unavailable => {
                    log::debug!("matchMedia unavailable, keeping motion enabled");
                    None
                }
            };

            move || drop(listener)
        });
    }

    *prefers_reduced_motion
}

struct SectionObservation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for SectionObservation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn intersection_observer_supported() -> bool {
    window()
        .and_then(|w| Reflect::get(&w, &JsValue::from_str("IntersectionObserver")).ok())
        .is_some_and(|ctor| ctor.is_function())
}

fn observe_section(section: &Element, on_change: Callback<bool>) -> Capability<SectionObservation> {
    if !intersection_observer_supported() {
        return Capability::Unavailable;
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() else {
                return;
            };
            on_change.emit(is_section_visible(
                entry.is_intersecting(),
                entry.intersection_ratio(),
            ));
        },
    );

    let thresholds: Array = OBSERVER_THRESHOLDS
        .iter()
        .map(|ratio| JsValue::from_f64(*ratio))
        .collect();
    let options = IntersectionObserverInit::new();
    options.set_root_margin(OBSERVER_ROOT_MARGIN);
    options.set_threshold(&thresholds);

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return Capability::Unavailable;
    };
    observer.observe(section);

    Capability::Available(SectionObservation {
        observer,
        _callback: callback,
    })
}

#[hook]
pub fn use_section_visibility(section: NodeRef, on_change: Callback<bool>) {
    use_effect_with((), move |_| {
        let observation = section
            .cast::<Element>()
            .map(|element| observe_section(&element, on_change.clone()));

        if matches!(observation, Some(Capability::Unavailable)) {
            log::debug!("IntersectionObserver unavailable, treating about section as visible");
            on_change.emit(ABOUT_VISIBLE_FALLBACK);
        }

        move || drop(observation)
    });
}

thread_local! {
    static NEXT_ELEMENT_ID: std::cell::Cell<u32> = const { std::cell::Cell::new(0) };
}

#[hook]
pub fn use_element_id(prefix: &'static str) -> AttrValue {
    let id = use_state(|| {
        let next = NEXT_ELEMENT_ID.with(|counter| {
            let value = counter.get();
            counter.set(value.wrapping_add(1));
            value
        });
        AttrValue::from(format!("{prefix}-{next}"))
    });

    (*id).clone()
}
