use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{HtmlElement, HtmlVideoElement};
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config::cdn_video;
use crate::dom;

const VIDEO_FILES: [&str; 3] = ["000yuh.mp4", "000MAWW.mp4", "00hehehe.mp4"];
pub const CROSSFADE_MS: u32 = 1000;
pub const JUMP_MS: u32 = 500;

/// Which background video is showing and which one is fading in over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoRotation {
    len: usize,
    current: usize,
    next: usize,
    transitioning: bool,
}

pub enum RotationAction {
    /// The current video finished; fade to the following one.
    Ended,
    Jump(usize),
    Settle,
}

impl VideoRotation {
    pub fn new(len: usize) -> Self {
        let len = len.max(1);
        Self { len, current: 0, next: 1 % len, transitioning: false }
    }

    pub fn current(self) -> usize {
        self.current
    }

    pub fn is_transitioning(self) -> bool {
        self.transitioning
    }

    /// The video two steps ahead, rewound once the crossfade settles.
    pub fn after_next(self) -> usize {
        (self.current + 2) % self.len
    }

    pub fn apply(self, action: RotationAction) -> Self {
        match action {
            RotationAction::Ended => Self {
                next: (self.current + 1) % self.len,
                transitioning: true,
                ..self
            },
            RotationAction::Jump(index) if index < self.len => Self { next: index, transitioning: true, ..self },
            RotationAction::Jump(_) => self,
            RotationAction::Settle if self.transitioning => Self {
                current: self.next,
                transitioning: false,
                ..self
            },
            RotationAction::Settle => self,
        }
    }

    pub fn opacity(self, index: usize) -> f64 {
        if index == self.current {
            if self.transitioning {
                0.0
            } else {
                1.0
            }
        } else if index == self.next && self.transitioning {
            1.0
        } else {
            0.0
        }
    }
}

impl Reducible for VideoRotation {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Scroll-linked fade of the hero copy. `progress` runs 0..=1 over the first
/// 60% of the hero's height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFade {
    progress: f64,
}

impl HeroFade {
    pub fn from_scroll(scroll_y: f64, hero_height: f64) -> Self {
        let span = hero_height * 0.6;
        let progress = if span > 0.0 { (scroll_y / span).clamp(0.0, 1.0) } else { 0.0 };
        Self { progress }
    }

    pub fn progress(self) -> f64 {
        self.progress
    }

    /// Opacity of an element that vanishes `rate` times faster than the scroll.
    pub fn fade(self, rate: f64) -> f64 {
        (1.0 - self.progress * rate).max(0.0)
    }

    pub fn content_style(self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({}); will-change: transform, opacity;",
            self.fade(1.5),
            self.progress * -80.0,
            1.0 - self.progress * 0.1
        )
    }

    fn line_style(self, mounted: bool, rate: f64, lift: f64, rest: f64, delay: u32) -> String {
        if mounted {
            format!(
                "transition-delay: {}ms; opacity: {}; transform: translateY({}px);",
                delay,
                self.fade(rate),
                self.progress * -lift
            )
        } else {
            format!("transition-delay: {}ms; opacity: 0; transform: translateY({}px);", delay, rest)
        }
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let hero = use_node_ref();
    let videos = use_memo(|_| VIDEO_FILES.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ());
    let rotation = use_reducer_eq(|| VideoRotation::new(VIDEO_FILES.len()));
    let loaded = use_state(|| [false; VIDEO_FILES.len()]);
    let settle = use_mut_ref(|| None::<Timeout>);
    let mounted = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();

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

    {
        let videos = videos.clone();
        use_effect_with_deps(
            move |_| {
                for (index, node) in videos.iter().enumerate() {
                    if let Some(video) = node.cast::<HtmlVideoElement>() {
                        video.load();
                        if index == 0 {
                            dom::play_muted(&video);
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    {
        let videos = videos.clone();
        use_effect_with_deps(
            move |(current, loaded)| {
                if loaded[*current] {
                    if let Some(video) = videos[*current].cast::<HtmlVideoElement>() {
                        dom::play_muted(&video);
                    }
                }
                || ()
            },
            (rotation.current(), *loaded),
        );
    }

    {
        let settle = settle.clone();
        use_effect_with_deps(move |_| move || drop(settle.borrow_mut().take()), ());
    }

    let on_ended = {
        let rotation = rotation.clone();
        let videos = videos.clone();
        let settle = settle.clone();
        move |index: usize| {
            if index != rotation.current() {
                return;
            }
            let restart = rotation.apply(RotationAction::Ended).apply(RotationAction::Settle).after_next();
            debug!("Hero video {} ended, fading to the next one", index);
            rotation.dispatch(RotationAction::Ended);
            let dispatcher = rotation.dispatcher();
            let videos = videos.clone();
            *settle.borrow_mut() = Some(Timeout::new(CROSSFADE_MS, move || {
                dispatcher.dispatch(RotationAction::Settle);
                if let Some(video) = videos[restart].cast::<HtmlVideoElement>() {
                    dom::restart(&video);
                }
            }));
        }
    };

    let jump = {
        let rotation = rotation.clone();
        let settle = settle.clone();
        move |index: usize| {
            rotation.dispatch(RotationAction::Jump(index));
            let dispatcher = rotation.dispatcher();
            *settle.borrow_mut() = Some(Timeout::new(JUMP_MS, move || dispatcher.dispatch(RotationAction::Settle)));
        }
    };

    let height = hero.cast::<HtmlElement>().map(|h| h.offset_height() as f64).unwrap_or_else(dom::viewport_height);
    let fade = HeroFade::from_scroll(scroll_y, height);
    let on = *mounted;

    html! {
        <section id="hero" ref={hero.clone()} class="hero">
            <div class="hero-media">
                { for VIDEO_FILES.iter().enumerate().map(|(index, file)| {
                    let onloadeddata = {
                        let loaded = loaded.clone();
                        Callback::from(move |_: Event| {
                            let mut flags = *loaded;
                            flags[index] = true;
                            loaded.set(flags);
                        })
                    };
                    let onended = {
                        let on_ended = on_ended.clone();
                        Callback::from(move |_: Event| on_ended(index))
                    };
                    html! {
                        <video
                            key={*file}
                            ref={videos[index].clone()}
                            src={cdn_video(file)}
                            class="hero-video"
                            style={format!("opacity: {};", rotation.opacity(index))}
                            muted={true}
                            playsinline={true}
                            preload="auto"
                            {onloadeddata}
                            {onended}
                        />
                    }
                }) }
                <div class="hero-gradient"></div>
                <div class="hero-overlay"></div>
                <div class="hero-vignette"></div>
            </div>

            <div class="hero-indicators" style={format!("opacity: {};", fade.fade(3.0))}>
                { for (0..VIDEO_FILES.len()).map(|index| {
                    let onclick = {
                        let jump = jump.clone();
                        Callback::from(move |_: MouseEvent| jump(index))
                    };
                    html! {
                        <button
                            class={classes!("hero-dot", (index == rotation.current()).then(|| "current"))}
                            aria-label={format!("Play video {}", index + 1)}
                            {onclick}
                        ></button>
                    }
                }) }
            </div>

            <div class="container hero-content" style={fade.content_style()}>
                <div class="hero-float">
                    <p class="hero-eyebrow" style={fade.line_style(on, 2.0, 20.0, 4.0, 200)}>{"Growth Agency"}</p>
                    <h1 class="hero-title" style={fade.line_style(on, 1.8, 40.0, 6.0, 400)}>
                        {"We Turn Marketing Spend Into "}
                        <span class="hero-highlight">
                            <span>{"Predictable Revenue"}</span>
                            <svg class={classes!(on.then(|| "drawn"))} viewBox="0 0 200 8" preserveAspectRatio="none">
                                <path d="M0,5 Q50,0 100,5 T200,5" fill="none" stroke="currentColor" stroke-width="2" stroke-dasharray="200" />
                            </svg>
                        </span>
                    </h1>
                    <p class="hero-lead" style={fade.line_style(on, 2.2, 30.0, 6.0, 600)}>
                        {"MAW Marketing helps established companies optimize their existing marketing investments. We eliminate waste, amplify what works, and build systematic growth your team can maintain and scale."}
                    </p>
                    <div class="hero-ctas" style={fade.line_style(on, 2.5, 20.0, 6.0, 800)}>
                        <a href="#contact" class="hero-primary">{"Book Your Free Strategy Session →"}</a>
                        <a href="#results" class="hero-secondary">{"See Our Results"}</a>
                    </div>
                </div>
            </div>

            <div
                class="hero-scroll-cue"
                style={format!("transition-delay: 1200ms; opacity: {};", if on { fade.fade(5.0) } else { 0.0 })}
            >
                <span>{"Scroll"}</span>
                <div class="hero-scroll-line"></div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    overflow: hidden;
                    background: var(--primary);
                }
                .hero-media {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .hero-video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: opacity 1s ease-in-out;
                }
                .hero-gradient {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg,
                        color-mix(in srgb, var(--primary) 80%, transparent),
                        color-mix(in srgb, var(--primary) 50%, transparent),
                        color-mix(in srgb, var(--primary) 70%, transparent));
                    background-size: 400% 400%;
                    animation: gradient-shift 15s ease infinite;
                }
                @keyframes gradient-shift {
                    0%, 100% { background-position: 0% 50%; }
                    50% { background-position: 100% 50%; }
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom,
                        color-mix(in srgb, var(--primary) 40%, transparent),
                        transparent,
                        color-mix(in srgb, var(--primary) 60%, transparent));
                }
                .hero-vignette {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(ellipse at center, transparent 0%, rgba(0,0,0,0.3) 100%);
                }
                .hero-indicators {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    z-index: 20;
                    display: flex;
                    gap: 0.5rem;
                    transform: translateX(-50%);
                    transition: opacity 0.3s;
                }
                .hero-dot {
                    width: 0.5rem;
                    height: 0.375rem;
                    padding: 0;
                    border: none;
                    border-radius: 999px;
                    cursor: pointer;
                    background: rgba(255,255,255,0.3);
                    transition: all 0.5s;
                }
                .hero-dot:hover { background: rgba(255,255,255,0.5); }
                .hero-dot.current { width: 2rem; background: var(--accent); }
                .hero-content {
                    position: relative;
                    z-index: 10;
                }
                .hero-float {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                    animation: float 6s ease-in-out infinite;
                }
                .hero-float > * { transition: all 0.7s ease-out; }
                .hero-eyebrow {
                    margin: 0 0 1.5rem;
                    font-size: 0.875rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: var(--accent);
                }
                .hero-title {
                    margin: 0 0 1.5rem;
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 500;
                    line-height: 1.1;
                    letter-spacing: -0.025em;
                    color: white;
                }
                .hero-highlight {
                    position: relative;
                    display: inline-block;
                }
                .hero-highlight > span {
                    position: relative;
                    z-index: 1;
                    font-style: italic;
                    color: var(--accent);
                }
                .hero-highlight svg {
                    position: absolute;
                    left: 0;
                    bottom: -0.5rem;
                    width: 100%;
                    height: 0.75rem;
                    opacity: 0;
                    color: color-mix(in srgb, var(--accent) 50%, transparent);
                    transition: opacity 1s ease-out 1s;
                }
                .hero-highlight svg path {
                    stroke-dashoffset: 200;
                    transition: stroke-dashoffset 1.5s ease-out 1s;
                }
                .hero-highlight svg.drawn { opacity: 1; }
                .hero-highlight svg.drawn path { stroke-dashoffset: 0; }
                .hero-lead {
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                    font-size: 1.25rem;
                    line-height: 1.7;
                    color: rgba(255,255,255,0.8);
                }
                .hero-ctas {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    gap: 1rem;
                }
                @media (min-width: 640px) {
                    .hero-ctas { flex-direction: row; }
                }
                .hero-primary, .hero-secondary {
                    padding: 1rem 2rem;
                    border-radius: 999px;
                    font-size: 0.875rem;
                    letter-spacing: 0.025em;
                    text-decoration: none;
                    transition: all 0.3s;
                }
                .hero-primary {
                    color: var(--accent-foreground);
                    background: var(--accent);
                }
                .hero-primary:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 10px 15px color-mix(in srgb, var(--accent) 25%, transparent);
                }
                .hero-secondary {
                    border: 1px solid rgba(255,255,255,0.3);
                    color: white;
                    backdrop-filter: blur(4px);
                }
                .hero-secondary:hover { background: rgba(255,255,255,0.1); }
                .hero-scroll-cue {
                    position: absolute;
                    bottom: 6rem;
                    left: 50%;
                    z-index: 20;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    transform: translateX(-50%);
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: rgba(255,255,255,0.5);
                    transition: all 0.7s;
                }
                .hero-scroll-line {
                    width: 1px;
                    height: 2rem;
                    background: linear-gradient(to bottom, rgba(255,255,255,0.5), transparent);
                    animation: pulse 2s infinite;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ended_crossfades_then_settles() {
        let r = VideoRotation::new(3).apply(RotationAction::Ended);
        assert!(r.is_transitioning());
        assert_eq!(r.opacity(0), 0.0);
        assert_eq!(r.opacity(1), 1.0);

        let r = r.apply(RotationAction::Settle);
        assert_eq!(r.current(), 1);
        assert!(!r.is_transitioning());
        assert_eq!(r.opacity(1), 1.0);
        assert_eq!(r.after_next(), 0);
    }

    #[test]
    fn rotation_wraps_to_first_video() {
        let mut r = VideoRotation::new(3);
        for _ in 0..3 {
            r = r.apply(RotationAction::Ended).apply(RotationAction::Settle);
        }
        assert_eq!(r.current(), 0);
    }

    #[test]
    fn jump_targets_any_video() {
        let r = VideoRotation::new(3).apply(RotationAction::Jump(2)).apply(RotationAction::Settle);
        assert_eq!(r.current(), 2);
        let same = r.apply(RotationAction::Jump(5));
        assert_eq!(same, r);
    }

    #[test]
    fn settle_without_transition_is_noop() {
        let r = VideoRotation::new(3);
        assert_eq!(r.apply(RotationAction::Settle), r);
    }

    #[test]
    fn exactly_one_video_visible_at_rest() {
        let r = VideoRotation::new(3).apply(RotationAction::Jump(1)).apply(RotationAction::Settle);
        let total: f64 = (0..3).map(|i| r.opacity(i)).sum();
        assert_eq!(total, 1.0);
    }

    #[test]
    fn fade_progress_clamps() {
        assert_eq!(HeroFade::from_scroll(0.0, 1000.0).progress(), 0.0);
        assert_eq!(HeroFade::from_scroll(300.0, 1000.0).progress(), 0.5);
        assert_eq!(HeroFade::from_scroll(5000.0, 1000.0).progress(), 1.0);
        assert_eq!(HeroFade::from_scroll(-50.0, 1000.0).progress(), 0.0);
        assert_eq!(HeroFade::from_scroll(100.0, 0.0).progress(), 0.0);
    }

    #[test]
    fn fades_never_go_negative() {
        let fade = HeroFade::from_scroll(600.0, 1000.0);
        assert_eq!(fade.fade(1.5), 0.0);
        assert_eq!(fade.fade(5.0), 0.0);
        let half = HeroFade::from_scroll(300.0, 1000.0);
        assert_eq!(half.fade(1.5), 0.25);
    }
}
