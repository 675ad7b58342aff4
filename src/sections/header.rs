use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::components::book_call_button::{BookCallButton, ButtonVariant};
use crate::dom;
use crate::reveal::{observe, ObserveOptions};

const NAV_ITEMS: [(&str, &str); 5] = [
    ("Services", "services"),
    ("Results", "results"),
    ("About", "about"),
    ("Team", "team"),
    ("FAQ", "faq"),
];

const SCROLLED_AFTER: f64 = 100.0;
const HIDE_AFTER: f64 = 200.0;
const DIRECTION_SLACK: f64 = 10.0;

/// Scroll-derived header state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavScroll {
    pub scrolled: bool,
    pub hidden: bool,
    /// Page progress in percent, 0 to 100.
    pub progress: f64,
    last_y: f64,
}

impl NavScroll {
    pub fn on_scroll(self, y: f64, max_scroll: f64) -> Self {
        let progress = if max_scroll > 0.0 {
            (y / max_scroll * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        let hidden = if y > HIDE_AFTER {
            if y - self.last_y > DIRECTION_SLACK {
                true
            } else if self.last_y - y > DIRECTION_SLACK {
                false
            } else {
                self.hidden
            }
        } else {
            false
        };
        Self {
            scrolled: y > SCROLLED_AFTER,
            hidden,
            progress,
            last_y: y,
        }
    }
}

pub struct ScrollTo {
    pub y: f64,
    pub max: f64,
}

impl Reducible for NavScroll {
    type Action = ScrollTo;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.on_scroll(action.y, action.max))
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let mounted = use_state(|| false);
    let nav = use_reducer_eq(NavScroll::default);
    let active = use_state(|| None::<String>);
    let menu_open = use_state(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(100, move || mounted.set(true));
                move || drop(timer)
            },
            (),
        );
    }

    // Scroll direction and progress
    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || match dom::scroll_metrics() {
                    Ok((y, max)) => dispatcher.dispatch(ScrollTo { y, max }),
                    Err(e) => debug!("Scroll metrics unavailable: {:?}", e),
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        warn!("Header scroll listener failed: {:?}", e);
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    // Active section
    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let targets: Vec<Element> = NAV_ITEMS
                    .iter()
                    .filter_map(|(_, id)| document.as_ref()?.get_element_by_id(id))
                    .collect();
                let options = ObserveOptions::threshold(0.0).with_root_margin("-20% 0px -60% 0px");
                let observation = observe(&targets, options, move |target| active.set(Some(target.id())))
                    .map_err(|e| warn!("Active section tracking unavailable: {:?}", e))
                    .ok();
                move || drop(observation)
            },
            (),
        );
    }

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let on_logo = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_top();
    });
    let nav_click = |id: &'static str| {
        let close_menu = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dom::scroll_to_section(id);
            close_menu.emit(());
        })
    };

    let scrolled = nav.scrolled;
    let is_active = |id: &str| active.as_deref() == Some(id);

    html! {
        <header class={classes!(
            "site-header",
            (*mounted).then(|| "mounted"),
            if scrolled { "solid" } else { "glass" },
            (nav.hidden && !*menu_open).then(|| "tucked")
        )}>
            <div class="header-glass-glow"></div>
            <div class={classes!("header-progress", (scrolled && !*menu_open).then(|| "shown"))}>
                <div style={format!("width: {:.2}%;", nav.progress)}></div>
            </div>

            <nav class="header-nav">
                <a href="/" class="header-logo" onclick={on_logo}>
                    <img src="/images/maw-logo-white.png" alt="MAW Marketing" />
                </a>

                <div class="header-links">
                    { for NAV_ITEMS.iter().map(|(label, id)| html! {
                        <a
                            key={*label}
                            href={format!("#{}", id)}
                            class={classes!("header-link", is_active(*id).then(|| "active"))}
                            onclick={nav_click(*id)}
                        >
                            { *label }
                            <span class="header-underline"></span>
                        </a>
                    }) }
                </div>

                <div class="header-cta">
                    <BookCallButton variant={ButtonVariant::Header} {scrolled} />
                </div>

                <button
                    class={classes!("header-burger", (*menu_open).then(|| "open"))}
                    aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>

            <div class={classes!("header-mobile", (*menu_open).then(|| "open"))}>
                <div class="header-mobile-logo">
                    <img src="/images/maw-logo-white.png" alt="MAW Marketing" />
                </div>
                <div class="header-mobile-rule"></div>
                <ul>
                    { for NAV_ITEMS.iter().enumerate().map(|(index, (label, id))| html! {
                        <li
                            key={*label}
                            style={format!("transition-delay: {}ms;", if *menu_open { index * 75 } else { 0 })}
                        >
                            <a
                                href={format!("#{}", id)}
                                class={classes!(is_active(*id).then(|| "active"))}
                                onclick={nav_click(*id)}
                            >
                                if is_active(*id) {
                                    <span class="header-mobile-dot"></span>
                                }
                                { *label }
                            </a>
                        </li>
                    }) }
                </ul>
                <div class="header-mobile-cta">
                    <BookCallButton variant={ButtonVariant::Header} {scrolled} onclick={close_menu.clone()} />
                </div>
            </div>

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    z-index: 50;
                    top: 1rem;
                    left: 50%;
                    width: calc(100% - 2rem);
                    max-width: 48rem;
                    border: 1px solid;
                    border-radius: 1rem;
                    overflow: hidden;
                    opacity: 0;
                    transform: translate(-50%, -1rem);
                    transition: all 0.7s ease-out;
                }
                .site-header.mounted {
                    opacity: 1;
                    transform: translate(-50%, 0);
                }
                .site-header.glass {
                    background: rgba(255,255,255,0.08);
                    border-color: rgba(255,255,255,0.15);
                    backdrop-filter: blur(40px);
                    box-shadow: 0 20px 25px rgba(0,0,0,0.1);
                }
                .site-header.solid {
                    background: color-mix(in srgb, var(--accent) 95%, transparent);
                    border-color: color-mix(in srgb, var(--accent) 20%, transparent);
                    backdrop-filter: blur(24px);
                    box-shadow: 0 25px 50px color-mix(in srgb, var(--accent) 20%, transparent);
                }
                .site-header.mounted.tucked {
                    transform: translate(-50%, -150%);
                    opacity: 0;
                }
                .header-glass-glow {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: linear-gradient(to bottom, rgba(255,255,255,0.12), transparent 3rem);
                    transition: opacity 0.7s;
                }
                .solid .header-glass-glow {
                    opacity: 0.6;
                }
                .header-progress {
                    position: absolute;
                    bottom: 0;
                    left: 1rem;
                    right: 1rem;
                    z-index: 10;
                    height: 2px;
                    border-radius: 999px;
                    overflow: hidden;
                    background: rgba(255,255,255,0.2);
                    opacity: 0;
                    transition: opacity 0.3s;
                }
                .header-progress.shown {
                    opacity: 1;
                }
                .header-progress div {
                    height: 100%;
                    border-radius: 999px;
                    background: rgba(255,255,255,0.8);
                    transition: width 0.15s ease-out;
                }
                .header-nav {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.75rem 1.25rem;
                }
                .header-logo img {
                    height: 2.25rem;
                    width: auto;
                    transition: transform 0.3s;
                }
                .header-logo:hover img {
                    transform: scale(1.05);
                }
                .header-links {
                    display: none;
                    align-items: center;
                    gap: 0.25rem;
                }
                .header-link {
                    position: relative;
                    padding: 0.5rem 0.75rem;
                    font-size: 15px;
                    font-weight: 500;
                    color: rgba(255,255,255,0.7);
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .header-link:hover {
                    color: white;
                }
                .glass .header-link.active {
                    color: var(--accent);
                }
                .solid .header-link.active {
                    color: white;
                }
                .header-underline {
                    position: absolute;
                    bottom: 0.25rem;
                    left: 0.75rem;
                    right: 0.75rem;
                    height: 2px;
                    border-radius: 999px;
                    background: var(--accent);
                    transform: scaleX(0);
                    transform-origin: left;
                    transition: transform 0.3s;
                }
                .solid .header-underline {
                    background: white;
                }
                .header-link:hover .header-underline,
                .header-link.active .header-underline {
                    transform: scaleX(1);
                }
                .header-cta {
                    display: none;
                }
                .header-burger {
                    position: relative;
                    width: 2.5rem;
                    height: 2.5rem;
                    padding: 0.5rem;
                    border: none;
                    background: none;
                    color: white;
                    cursor: pointer;
                }
                .header-burger span {
                    position: absolute;
                    left: 0.5rem;
                    width: 1.5rem;
                    height: 2px;
                    background: currentColor;
                    transition: all 0.3s;
                }
                .header-burger span:nth-child(1) { top: 0.875rem; }
                .header-burger span:nth-child(2) { top: 1.25rem; }
                .header-burger span:nth-child(3) { top: 1.625rem; }
                .header-burger.open span:nth-child(1) { top: 1.25rem; transform: rotate(45deg); }
                .header-burger.open span:nth-child(2) { opacity: 0; transform: scale(0); }
                .header-burger.open span:nth-child(3) { top: 1.25rem; transform: rotate(-45deg); }
                .header-mobile {
                    position: relative;
                    z-index: 10;
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    transition: all 0.5s ease-out;
                }
                .header-mobile.open {
                    max-height: 500px;
                    opacity: 1;
                    padding-bottom: 1.5rem;
                }
                .header-mobile-logo {
                    display: flex;
                    justify-content: center;
                    margin-bottom: 1rem;
                }
                .header-mobile-logo img {
                    height: 2rem;
                    opacity: 0.4;
                }
                .header-mobile-rule {
                    height: 1px;
                    margin-bottom: 1rem;
                    background: rgba(255,255,255,0.1);
                }
                .header-mobile ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .header-mobile li {
                    opacity: 0;
                    transform: translateX(-1rem);
                    transition: all 0.3s;
                }
                .header-mobile.open li {
                    opacity: 1;
                    transform: none;
                }
                .header-mobile li a {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.625rem 0;
                    font-size: 1.25rem;
                    font-weight: 300;
                    color: white;
                    text-decoration: none;
                }
                .glass .header-mobile li a.active {
                    color: var(--accent);
                }
                .header-mobile-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: var(--accent);
                    animation: pulse 2s infinite;
                }
                .solid .header-mobile-dot {
                    background: white;
                }
                .header-mobile-cta {
                    display: flex;
                    justify-content: center;
                    margin-top: 1.5rem;
                }
                @media (min-width: 768px) {
                    .header-links { display: flex; }
                    .header-cta { display: block; }
                    .header-burger, .header-mobile { display: none; }
                    .header-nav { padding: 0.75rem 1.5rem; }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll(state: NavScroll, y: f64) -> NavScroll {
        state.on_scroll(y, 4000.0)
    }

    #[test]
    fn scrolled_past_one_hundred() {
        assert!(!scroll(NavScroll::default(), 100.0).scrolled);
        assert!(scroll(NavScroll::default(), 101.0).scrolled);
    }

    #[test]
    fn hides_on_scroll_down_and_shows_on_scroll_up() {
        let s = scroll(NavScroll::default(), 250.0);
        let s = scroll(s, 300.0);
        assert!(s.hidden);
        // Small jitter keeps the current state.
        let s = scroll(s, 295.0);
        assert!(s.hidden);
        let s = scroll(s, 280.0);
        assert!(!s.hidden);
    }

    #[test]
    fn always_shown_near_top() {
        let s = scroll(NavScroll::default(), 600.0);
        let s = scroll(s, 900.0);
        assert!(s.hidden);
        let s = scroll(s, 150.0);
        assert!(!s.hidden);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(NavScroll::default().on_scroll(2000.0, 4000.0).progress, 50.0);
        assert_eq!(NavScroll::default().on_scroll(9000.0, 4000.0).progress, 100.0);
        assert_eq!(NavScroll::default().on_scroll(-20.0, 4000.0).progress, 0.0);
        assert_eq!(NavScroll::default().on_scroll(300.0, 0.0).progress, 0.0);
    }
}
