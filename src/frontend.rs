mod hooks;
mod icons;

use gloo_render::{request_animation_frame, AnimationFrame};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{
    window, Element, FocusEvent, HtmlSelectElement, KeyboardEvent, MouseEvent, Node,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::assets::resolve_asset_url;
use crate::content::{Certificate, CERTIFICATES, GITHUB_URL, LINKEDIN_URL, OPEN_FOR_WORK, PROFILE_IMAGE};
use crate::locale::Locale;
use crate::state::{is_activation_key, Action, InteractionState};
use crate::tilt::{pointer_tilt, CardRect, FrameHandle, PendingFrame};
use hooks::{use_element_id, use_prefers_reduced_motion, use_section_visibility};
use icons::{GitHubIcon, LinkedInIcon, OpenForWorkRing, ScrollWheelIcon};

const CERTIFICATES_PANEL_ID: &str = "certificates-panel";
const ABOUT_SECTION_ID: &str = "about";

impl Reducible for InteractionState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

impl FrameHandle for AnimationFrame {
    fn cancel(self) {
        drop(self);
    }
}

fn timeline_details_id(index: usize) -> String {
    format!("timeline-details-{index}")
}

fn scroll_into_view(section: &NodeRef, prefers_reduced_motion: bool) {
    let Some(element) = section.cast::<Element>() else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if prefers_reduced_motion {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn focus_stays_within(container: &NodeRef, event: &FocusEvent) -> bool {
    let next = event
        .related_target()
        .and_then(|target| target.dyn_into::<Node>().ok());

    match (container.cast::<Node>(), next) {
        (Some(container), Some(next)) => container.contains(Some(&next)),
        _ => false,
    }
}

#[derive(Properties, PartialEq)]
struct LanguageSwitchProps {
    locale: Locale,
    on_select: Callback<String>,
}

#[function_component(LanguageSwitch)]
fn language_switch(props: &LanguageSwitchProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                on_select.emit(select.value());
            }
        })
    };

    html! {
        <div class="language-switch" aria-live="polite">
            <label class="sr-only" for="language-picker">{"Language"}</label>
            <select
                id="language-picker"
                class="language-switch__select"
                aria-label="Select language"
                {onchange}
            >
                { for Locale::ALL.iter().map(|locale| html! {
                    <option
                        key={locale.code()}
                        value={locale.code()}
                        selected={*locale == props.locale}
                    >
                        {locale.label()}
                    </option>
                }) }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CertificatesPanelProps {
    open: bool,
    on_close: Callback<MouseEvent>,
}

#[function_component(CertificatesPanel)]
fn certificates_panel(props: &CertificatesPanelProps) -> Html {
    let render_certificate = |certificate: &Certificate| {
        let logo_style = format!(
            "--certificate-logo: url({});",
            resolve_asset_url(certificate.logo)
        );
        html! {
            <li key={certificate.name} class="certificates-panel__item">
                <span class="certificates-panel__logo" style={logo_style} aria-hidden="true" />
                <div class="certificates-panel__details">
                    <p class="certificates-panel__name">{certificate.name}</p>
                    <p class="certificates-panel__issuer">{certificate.issuer}</p>
                    if let Some(credential) = certificate.credential {
                        <p class="certificates-panel__credential">{credential}</p>
                    }
                </div>
            </li>
        }
    };

    html! {
        <aside
            id={CERTIFICATES_PANEL_ID}
            class={classes!("certificates-panel", props.open.then_some("certificates-panel--visible"))}
            hidden={!props.open}
            aria-live="polite"
        >
            <header class="certificates-panel__header">
                <h3>{"Professional Certifications"}</h3>
                <button type="button" class="certificates-panel__close" onclick={props.on_close.clone()}>
                    {"Close"}
                </button>
            </header>
            <ul class="certificates-panel__list">
                { for CERTIFICATES.iter().map(render_certificate) }
            </ul>
        </aside>
    }
}

#[function_component(App)]
fn app() -> Html {
    let state = use_reducer(InteractionState::new);
    let prefers_reduced_motion = use_prefers_reduced_motion();
    let about_ref = use_node_ref();
    let timeline_ref = use_node_ref();
    let tilt_frame = use_mut_ref(PendingFrame::<AnimationFrame>::new);
    let ring_path_id = use_element_id("avatar-ring-path");

    use_section_visibility(about_ref.clone(), {
        let dispatcher = state.dispatcher();
        Callback::from(move |visible: bool| dispatcher.dispatch(Action::SetAboutVisible(visible)))
    });

    {
        let tilt_frame = tilt_frame.clone();
        use_effect_with((), move |_| {
            move || {
                tilt_frame.borrow_mut().cancel();
            }
        });
    }

    let on_select_locale = {
        let dispatcher = state.dispatcher();
        Callback::from(move |code: String| dispatcher.dispatch(Action::SelectLocale(code)))
    };

    let on_card_mouse_move = {
        let dispatcher = state.dispatcher();
        let tilt_frame = tilt_frame.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(card) = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            let bounds = card.get_bounding_client_rect();
            let rect = CardRect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            };
            let Some(next) = pointer_tilt(
                rect,
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                prefers_reduced_motion,
            ) else {
                return;
            };

            let dispatcher = dispatcher.clone();
            let slot = tilt_frame.clone();
            let frame = request_animation_frame(move |_| {
                slot.borrow_mut().settle();
                dispatcher.dispatch(Action::SetTilt(next));
            });
            tilt_frame.borrow_mut().schedule(frame);
        })
    };

    let on_card_mouse_leave = {
        let dispatcher = state.dispatcher();
        let tilt_frame = tilt_frame.clone();
        Callback::from(move |_: MouseEvent| {
            tilt_frame.borrow_mut().cancel();
            dispatcher.dispatch(Action::ResetTilt);
        })
    };

    let on_toggle_certificates = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Action::ToggleCertificates))
    };

    let on_scroll_to_about = {
        let about_ref = about_ref.clone();
        Callback::from(move |_: MouseEvent| scroll_into_view(&about_ref, prefers_reduced_motion))
    };

    let on_timeline_mouse_leave = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Action::ResetTimeline))
    };

    let on_timeline_focus_out = {
        let dispatcher = state.dispatcher();
        let timeline_ref = timeline_ref.clone();
        Callback::from(move |event: FocusEvent| {
            if !focus_stays_within(&timeline_ref, &event) {
                dispatcher.dispatch(Action::ResetTimeline);
            }
        })
    };

    let bundle = state.bundle();
    let locale = state.locale();
    let code = locale.code();
    let active_entry = state.active_entry();
    let profile_image_url = resolve_asset_url(PROFILE_IMAGE);
    let portrait_image_url = match resolve_asset_url(active_entry.image) {
        resolved if resolved.is_empty() => profile_image_url.clone(),
        resolved => resolved,
    };

    let card_style = state.tilt().card_style(prefers_reduced_motion);
    let avatar_style = format!("--avatar-image: url({profile_image_url});");
    let portrait_style = format!(
        "--portrait-image: url({portrait_image_url}); --portrait-accent: {};",
        active_entry.accent
    );

    let timeline_items = bundle.timeline.iter().enumerate().map(|(index, item)| {
        let activate = {
            let dispatcher = state.dispatcher();
            move || dispatcher.dispatch(Action::Activate(index))
        };
        let onmouseenter = {
            let activate = activate.clone();
            Callback::from(move |_: MouseEvent| activate())
        };
        let onfocus = {
            let activate = activate.clone();
            Callback::from(move |_: FocusEvent| activate())
        };
        let onclick = {
            let activate = activate.clone();
            Callback::from(move |_: MouseEvent| activate())
        };
        let onkeydown = Callback::from(move |event: KeyboardEvent| {
            if is_activation_key(&event.key()) {
                event.prevent_default();
                activate();
            }
        });
        let is_active = state.is_active(index);
        let detail_id = timeline_details_id(index);

        html! {
            <li
                key={item.timeframe}
                data-index={index.to_string()}
                class={classes!("timeline__item", is_active.then_some("timeline__item--active"))}
                tabindex="0"
                role="button"
                aria-expanded={is_active.to_string()}
                aria-controls={detail_id.clone()}
                {onmouseenter}
                {onfocus}
                {onclick}
                {onkeydown}
            >
                <span class="timeline__marker" aria-hidden="true" />
                <div class="timeline__content translate-group">
                    <p class="timeline__date translate-item">{item.timeframe}</p>
                    <h3 class="timeline__role translate-item">{item.title}</h3>
                    <p class="timeline__summary translate-item">{item.summary}</p>
                    <p class="timeline__details translate-item" id={detail_id}>{item.details}</p>
                </div>
            </li>
        }
    });

    html! {
        <main class={classes!("app", locale.is_rtl().then_some("app--rtl"))} dir={locale.direction().as_str()}>
            <div class="space" aria-hidden="true">
                <div class="space__gradient" />
                <div class="star-field star-field--distant" />
                <div class="star-field star-field--mid" />
                <div class="star-field star-field--near" />
            </div>
            <div class="hero">
                <section
                    class="profile-card"
                    style={card_style}
                    onmousemove={on_card_mouse_move}
                    onmouseleave={on_card_mouse_leave}
                >
                    <LanguageSwitch locale={locale} on_select={on_select_locale} />

                    <header class="profile-card__header">
                        <figure
                            class={classes!("avatar", OPEN_FOR_WORK.then_some("avatar--open"))}
                            aria-label={bundle.figure_label()}
                            style={avatar_style}
                        >
                            if OPEN_FOR_WORK {
                                <OpenForWorkRing path_id={ring_path_id} />
                            }
                        </figure>

                        <div class="profile-card__headline translate-group">
                            <p key={format!("{code}-subtitle")} class="profile-card__subtitle translate-item">
                                {bundle.subtitle}
                            </p>
                            <h1 key={format!("{code}-title")} class="profile-card__title translate-item">
                                <span class="profile-card__title-first">{bundle.first_name}</span>
                                <span class="profile-card__title-last">{bundle.last_name}</span>
                            </h1>
                        </div>
                    </header>

                    <div class="profile-card__body">
                        <p key={format!("{code}-bio")} class="profile-card__bio translate-item">
                            {bundle.hero_bio}
                        </p>

                        <nav class="profile-card__links" aria-label="Primary social links">
                            <a class="action-button" href={LINKEDIN_URL} target="_blank" rel="noreferrer">
                                <LinkedInIcon />
                                {"LinkedIn"}
                            </a>
                            <a class="action-button" href={GITHUB_URL} target="_blank" rel="noreferrer">
                                <GitHubIcon />
                                {"GitHub"}
                            </a>
                        </nav>

                        <button
                            type="button"
                            class={classes!("certificates-button", state.certificates_open().then_some("certificates-button--active"))}
                            disabled=true
                            aria-expanded={state.certificates_open().to_string()}
                            aria-controls={CERTIFICATES_PANEL_ID}
                            onclick={on_toggle_certificates.clone()}
                        >
                            <span aria-hidden="true">{"★"}</span>
                            <span>{"Show Certificates"}</span>
                        </button>

                        <button
                            type="button"
                            class="scroll-indicator"
                            aria-controls={ABOUT_SECTION_ID}
                            onclick={on_scroll_to_about}
                        >
                            <span key={format!("{code}-scroll")} class="scroll-indicator__label translate-item">
                                {bundle.scroll_label}
                            </span>
                            <ScrollWheelIcon />
                        </button>
                        <p class="profile-card__tagline translate-item" aria-live="polite">
                            {"❤ deployed via GitHub Pages "}
                            <span aria-hidden="true">{"❤"}</span>
                        </p>
                    </div>
                </section>
                <CertificatesPanel open={state.certificates_open()} on_close={on_toggle_certificates} />
            </div>

            <section
                id={ABOUT_SECTION_ID}
                ref={about_ref}
                class={classes!("about", state.about_visible().then_some("about--visible"))}
            >
                <div class="about__timeline">
                    <h2 key={format!("{code}-heading")} class="about__title translate-item">
                        {bundle.experience_title}
                    </h2>
                    <ol
                        ref={timeline_ref}
                        class="timeline"
                        onmouseleave={on_timeline_mouse_leave}
                        onfocusout={on_timeline_focus_out}
                    >
                        { for timeline_items }
                    </ol>
                </div>
                <figure class="about__portrait" style={portrait_style}>
                    <div
                        class="about__portrait-frame"
                        aria-hidden="true"
                        data-active-index={state.active_index().to_string()}
                    />
                    <span class="sr-only">
                        {format!("Portrait corresponding to {}: {}", active_entry.timeframe, active_entry.title)}
                    </span>
                </figure>
            </section>
        </main>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    let mount_point = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"));

    match mount_point {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => {
            log::warn!("missing #app mount point, rendering into <body>");
            yew::Renderer::<App>::new().render()
        }
    };
}
