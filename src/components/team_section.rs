use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;
use yew_hooks::use_interval;

pub const SPOTLIGHT_INTERVAL_MS: u32 = 13_000;

#[derive(PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
    pub socials: &'static [(&'static str, &'static str)],
}

/// Which member is highlighted. A hovered member wins over the rotating one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spotlight {
    len: usize,
    active: usize,
    hovered: Option<usize>,
    paused: bool,
}

pub enum SpotlightAction {
    Tick,
    Hover(usize),
    Leave,
    Select(usize),
    Resume,
}

impl Spotlight {
    pub fn new(len: usize) -> Self {
        Self { len: len.max(1), active: 0, hovered: None, paused: false }
    }

    pub fn shown(&self) -> usize {
        self.hovered.unwrap_or(self.active)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn apply(&self, action: SpotlightAction) -> Self {
        let mut next = self.clone();
        match action {
            SpotlightAction::Tick if !self.paused => next.active = (self.active + 1) % self.len,
            SpotlightAction::Tick => {}
            SpotlightAction::Hover(index) if index < self.len => {
                next.hovered = Some(index);
                next.paused = true;
            }
            SpotlightAction::Hover(_) => {}
            SpotlightAction::Leave => {
                next.hovered = None;
                next.paused = false;
            }
            SpotlightAction::Select(index) if index < self.len => {
                next.active = index;
                next.paused = true;
            }
            SpotlightAction::Select(_) => {}
            SpotlightAction::Resume => next.paused = false,
        }
        next
    }
}

impl Reducible for Spotlight {
    type Action = SpotlightAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamSpotlightProps {
    pub members: &'static [TeamMember],
}

#[function_component(TeamSpotlight)]
pub fn team_spotlight(props: &TeamSpotlightProps) -> Html {
    let spotlight = use_reducer_eq(|| Spotlight::new(props.members.len()));
    let resume = use_mut_ref(|| None::<Timeout>);

    {
        let spotlight = spotlight.clone();
        let millis = if spotlight.is_paused() { 0 } else { SPOTLIGHT_INTERVAL_MS };
        use_interval(move || spotlight.dispatch(SpotlightAction::Tick), millis);
    }

    let shown = spotlight.shown();
    let paused = spotlight.is_paused();

    html! {
        <>
            <div class="team-grid">
                { for props.members.iter().enumerate().map(|(index, member)| {
                    let active = shown == index;
                    let on_enter = {
                        let spotlight = spotlight.clone();
                        Callback::from(move |_: MouseEvent| spotlight.dispatch(SpotlightAction::Hover(index)))
                    };
                    let on_leave = {
                        let spotlight = spotlight.clone();
                        Callback::from(move |_: MouseEvent| spotlight.dispatch(SpotlightAction::Leave))
                    };
                    html! {
                        <div
                            class={classes!("team-member", active.then(|| "active"))}
                            key={member.name}
                            onmouseenter={on_enter}
                            onmouseleave={on_leave}
                        >
                            <div class="team-portrait">
                                <div class="team-glow"></div>
                                <div class="team-ring"></div>
                                <div class="team-photo">
                                    <img src={member.image} alt={member.name} />
                                    <div class="team-shade"></div>
                                    <div class="team-bio">
                                        <p>{ member.bio }</p>
                                        <div class="team-socials">
                                            { for member.socials.iter().map(|(label, href)| html! {
                                                <a
                                                    href={*href}
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                                                >{ *label }</a>
                                            }) }
                                        </div>
                                    </div>
                                </div>
                            </div>
                            <h3>{ member.name }</h3>
                            <p class="team-title">{ member.title }</p>
                        </div>
                    }
                }) }
            </div>
            <div class="team-indicators">
                { for props.members.iter().enumerate().map(|(index, member)| {
                    let onclick = {
                        let spotlight = spotlight.clone();
                        let resume = resume.clone();
                        Callback::from(move |_: MouseEvent| {
                            debug!("Spotlight pinned to member {}", index);
                            spotlight.dispatch(SpotlightAction::Select(index));
                            let dispatcher = spotlight.dispatcher();
                            *resume.borrow_mut() = Some(Timeout::new(SPOTLIGHT_INTERVAL_MS, move || {
                                dispatcher.dispatch(SpotlightAction::Resume)
                            }));
                        })
                    };
                    let current = shown == index;
                    html! {
                        <button
                            class={classes!("team-dot", current.then(|| "current"))}
                            aria-label={format!("View {}", member.name)}
                            {onclick}
                        >
                            if current && !paused {
                                <span
                                    class="team-dot-fill"
                                    style={format!("animation: team-progress {}ms linear;", SPOTLIGHT_INTERVAL_MS)}
                                ></span>
                            }
                        </button>
                    }
                }) }
            </div>
            <style>
                {r#"
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }
                @media (min-width: 1024px) {
                    .team-grid { grid-template-columns: repeat(4, 1fr); gap: 2.5rem; }
                }
                .team-member {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    transform: scale(0.95);
                    opacity: 0.5;
                    transition: all 0.7s ease-out;
                }
                .team-member.active {
                    transform: scale(1);
                    opacity: 1;
                }
                .team-portrait {
                    position: relative;
                    margin-bottom: 1.25rem;
                }
                .team-glow, .team-ring {
                    position: absolute;
                    border-radius: 50%;
                    opacity: 0;
                    transition: all 0.7s;
                }
                .team-glow { inset: -0.75rem; filter: blur(40px); }
                .team-ring { inset: -0.25rem; }
                .team-member.active .team-glow {
                    opacity: 1;
                    background: color-mix(in srgb, var(--accent) 30%, transparent);
                }
                .team-member.active .team-ring {
                    opacity: 1;
                    background: conic-gradient(from 0deg, transparent, var(--accent), transparent);
                    animation: spin 3s linear infinite;
                }
                .team-photo {
                    position: relative;
                    width: 11rem;
                    height: 11rem;
                    border-radius: 50%;
                    overflow: hidden;
                    background: var(--background);
                    box-shadow: 0 0 0 4px var(--muted);
                    transition: all 0.7s ease-out;
                }
                .team-member.active .team-photo {
                    box-shadow: 0 0 0 4px var(--accent), 0 25px 50px color-mix(in srgb, var(--accent) 40%, transparent);
                    transform: scale(1.05);
                }
                .team-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: all 0.7s ease-out;
                }
                .team-member.active .team-photo img {
                    transform: scale(1.1);
                    filter: brightness(0.35);
                }
                .team-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0,0,0,0.95), rgba(0,0,0,0.7), rgba(0,0,0,0.4));
                    opacity: 0;
                    transition: opacity 0.7s;
                }
                .team-bio {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 1.25rem;
                    opacity: 0;
                    transform: translateY(1.5rem);
                    transition: all 0.7s ease-out;
                }
                .team-bio p {
                    color: white;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .team-member.active .team-shade,
                .team-member.active .team-bio {
                    opacity: 1;
                    transform: none;
                }
                .team-socials {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1rem;
                }
                .team-socials a {
                    color: rgba(255,255,255,0.8);
                    font-size: 0.75rem;
                    padding: 0.4rem 0.6rem;
                    border-radius: 999px;
                    background: rgba(255,255,255,0.1);
                    text-decoration: none;
                }
                .team-member h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: color-mix(in srgb, var(--foreground) 70%, transparent);
                    transition: all 0.5s;
                }
                .team-member.active h3 {
                    color: var(--accent);
                }
                .team-title {
                    font-size: 0.875rem;
                    margin-top: 0.25rem;
                    color: var(--muted-foreground);
                }
                .team-indicators {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 3rem;
                }
                .team-dot {
                    position: relative;
                    width: 0.5rem;
                    height: 0.5rem;
                    border: none;
                    border-radius: 999px;
                    overflow: hidden;
                    cursor: pointer;
                    background: color-mix(in srgb, var(--muted-foreground) 30%, transparent);
                    transition: all 0.5s;
                }
                .team-dot.current {
                    width: 3rem;
                    background: var(--accent);
                }
                .team-dot-fill {
                    position: absolute;
                    inset: 0 auto 0 0;
                    border-radius: 999px;
                    background: rgba(255,255,255,0.3);
                }
                @keyframes team-progress {
                    from { width: 0%; }
                    to { width: 100%; }
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_wrap_around() {
        let mut s = Spotlight::new(4);
        for _ in 0..5 {
            s = s.apply(SpotlightAction::Tick);
        }
        assert_eq!(s.shown(), 1);
    }

    #[test]
    fn hover_pins_and_pauses() {
        let s = Spotlight::new(4).apply(SpotlightAction::Hover(2));
        assert_eq!(s.shown(), 2);
        assert!(s.is_paused());
        let s = s.apply(SpotlightAction::Tick);
        assert_eq!(s.shown(), 2);

        let s = s.apply(SpotlightAction::Leave);
        assert_eq!(s.shown(), 0);
        assert!(!s.is_paused());
    }

    #[test]
    fn select_pauses_until_resume() {
        let s = Spotlight::new(4).apply(SpotlightAction::Select(3));
        let s = s.apply(SpotlightAction::Tick);
        assert_eq!(s.shown(), 3);
        let s = s.apply(SpotlightAction::Resume).apply(SpotlightAction::Tick);
        assert_eq!(s.shown(), 0);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let s = Spotlight::new(4);
        assert_eq!(s.apply(SpotlightAction::Select(9)), s);
        assert_eq!(s.apply(SpotlightAction::Hover(4)), s);
    }

    #[test]
    fn shown_index_always_in_range() {
        let mut s = Spotlight::new(3);
        let actions = [0usize, 1, 2, 3, 4];
        for step in 0..40 {
            let action = match actions[step % actions.len()] {
                0 => SpotlightAction::Tick,
                1 => SpotlightAction::Hover(step % 3),
                2 => SpotlightAction::Leave,
                3 => SpotlightAction::Select((step * 7) % 3),
                _ => SpotlightAction::Resume,
            };
            s = s.apply(action);
            assert!(s.shown() < 3);
        }
    }
}
