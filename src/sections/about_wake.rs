use log::debug;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::reveal::{reveal_class, use_reveal};

const GALLERY: [&str; 3] = [
    "/images/skate.png",
    "/images/wake2.png",
    "/professional-skateboarder-in-action-performing-tri.jpg",
];

const GALLERY_INTERVAL_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AboutTab {
    #[default]
    Story,
    Approach,
    Results,
}

impl AboutTab {
    pub const ALL: [AboutTab; 3] = [AboutTab::Story, AboutTab::Approach, AboutTab::Results];

    pub fn label(self) -> &'static str {
        match self {
            AboutTab::Story => "My Story",
            AboutTab::Approach => "My Approach",
            AboutTab::Results => "Track Record",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            AboutTab::Story => "📖",
            AboutTab::Approach => "🎯",
            AboutTab::Results => "📈",
        }
    }
}

/// Slideshow position. Wraps on advance, ignores out of range picks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    current: usize,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self { len: len.max(1), current: 0 }
    }

    pub fn current(self) -> usize {
        self.current
    }

    pub fn advance(self) -> Self {
        Self { current: (self.current + 1) % self.len, ..self }
    }

    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self { current: index, ..self }
        } else {
            self
        }
    }
}

struct Stat {
    value: &'static str,
    label: &'static str,
    desc: &'static str,
}

static STATS: [Stat; 4] = [
    Stat { value: "95%", label: "Client Retention", desc: "They stay because it works" },
    Stat { value: "340%", label: "Average ROI", desc: "Return on ad spend" },
    Stat { value: "500+", label: "Campaigns", desc: "Launched and optimized" },
    Stat { value: "12+", label: "Industries", desc: "Deep expertise" },
];

const OLD_WAY: [&str; 4] = [
    "Chase vanity metrics that look good in reports",
    "Generic templated campaigns for every client",
    "Burn budget on vague \"brand awareness\"",
    "Hope something sticks eventually",
];

const MAW_WAY: [&str; 4] = [
    "Focus on revenue-driving metrics that matter",
    "Authentic story-driven campaigns unique to you",
    "Strategic spend with clear, trackable ROI",
    "Build systems that scale predictably",
];

fn story_tab() -> Html {
    html! {
        <div class="tab-body">
            <p class="tab-lead">
                {"The adrenaline was real. Standing at the top of a massive ramp with thousands of people watching, cameras rolling, and everything on the line, that was my world as a professional skater."}
            </p>
            <div class="tab-copy">
                <p>{"Every performance required complete focus, creative problem-solving, and the ability to execute under pressure. You had one shot to land the trick, and if you fell, you got back up and tried again. There was no room for excuses, only results."}</p>
                <p>{"But it was the stories that mattered most. Behind every stunt and every show, authentic human stories connected with audiences worldwide."}</p>
                <p>{"When I transitioned into marketing, I realized businesses face the same challenge: capturing attention in a crowded space, building genuine connections, and turning those connections into lasting success."}</p>
                <p>{"Today, as a husband and father, I'm driven by the same values that guided me through skating: authenticity, creativity, and relentless execution."}</p>
            </div>
            <div class="tab-quote">
                <p>{"\"The answer is always storytelling. Authentic stories backed by strategy, execution, and measurable results.\""}</p>
            </div>
        </div>
    }
}

fn way_list(title: &'static str, mark: &'static str, items: &[&'static str], class: &'static str) -> Html {
    html! {
        <div class={classes!("way", class)}>
            <h4><span class="way-mark">{ mark }</span>{ title }</h4>
            <ul>
                { for items.iter().map(|item| html! {
                    <li><span class="way-bullet">{ mark }</span><span>{ *item }</span></li>
                }) }
            </ul>
        </div>
    }
}

fn approach_tab() -> Html {
    html! {
        <div class="tab-body">
            <div>
                <h3>{"The MAW Difference"}</h3>
                <p class="tab-muted">{"Most agencies promise the world and deliver spreadsheets. We focus on what actually moves the needle."}</p>
            </div>
            { way_list("The Old Way", "✗", &OLD_WAY, "old") }
            { way_list("The MAW Way", "✓", &MAW_WAY, "new") }
        </div>
    }
}

fn results_tab() -> Html {
    html! {
        <div class="tab-body">
            <div>
                <h3>{"Numbers That Matter"}</h3>
                <p class="tab-muted">{"Real results from real partnerships. These aren't vanity metrics, they're business outcomes."}</p>
            </div>
            <div class="about-stats">
                { for STATS.iter().enumerate().map(|(i, stat)| html! {
                    <div key={stat.label} class="about-stat" style={format!("animation-delay: {}ms;", i * 80)}>
                        <p class="about-stat-value">{ stat.value }</p>
                        <p class="about-stat-label">{ stat.label }</p>
                        <p class="about-stat-desc">{ stat.desc }</p>
                    </div>
                }) }
            </div>
            <div class="about-case-link">
                <p class="about-case-title">{"Want to see specific case studies?"}</p>
                <p class="tab-muted">{"Check out our results section for detailed breakdowns."}</p>
                <a href="#results" class="accent-button small">{"View Case Studies →"}</a>
            </div>
        </div>
    }
}

#[function_component(AboutWake)]
pub fn about_wake() -> Html {
    let (intro, intro_visible) = use_reveal(0.3);
    let (tabs, tabs_visible) = use_reveal(0.1);
    let (connect, connect_visible) = use_reveal(0.2);
    let active = use_state(AboutTab::default);
    let gallery = use_state(|| Gallery::new(GALLERY.len()));

    {
        let gallery = gallery.clone();
        use_interval(move || gallery.set(gallery.advance()), GALLERY_INTERVAL_MS);
    }

    let content = match *active {
        AboutTab::Story => story_tab(),
        AboutTab::Approach => approach_tab(),
        AboutTab::Results => results_tab(),
    };

    html! {
        <section id="about" class="about">
            <div ref={intro} class="about-intro">
                <div class={classes!("container", "centered", reveal_class(intro_visible))}>
                    <p class="about-label">{"Meet the Founder"}</p>
                    <div class="about-title-row">
                        <div class="about-founder">
                            <div class="about-avatar">
                                <img src="/images/wake-headshot.png" alt="Wake Schepman" />
                                <span class="online-dot"></span>
                            </div>
                            <div>
                                <p class="about-name">{"Wake Schepman"}</p>
                                <p class="about-role">{"Founder & Growth Strategist"}</p>
                            </div>
                        </div>
                        <h1 class="about-title">
                            {"From Pro Skater to "}
                            <span class="accent-text">{"Growth Marketing"}</span>
                        </h1>
                    </div>
                    <div class="accent-line"></div>
                    <p class="about-subtitle">
                        {"How professional skating taught me that success comes from authentic storytelling and relentless execution."}
                    </p>
                    <a href="#contact" class="about-work-link">{"LET'S WORK TOGETHER →"}</a>
                </div>
            </div>

            <div class="about-tabs-band">
                <div ref={tabs} class={classes!("about-tabs", reveal_class(tabs_visible))}>
                    <div class="tab-nav">
                        { for AboutTab::ALL.iter().map(|&tab| {
                            let onclick = {
                                let active = active.clone();
                                Callback::from(move |_: MouseEvent| {
                                    debug!("About tab {:?}", tab);
                                    active.set(tab)
                                })
                            };
                            html! {
                                <button
                                    key={tab.label()}
                                    class={classes!("tab-button", (*active == tab).then(|| "active"))}
                                    {onclick}
                                >
                                    <span class="tab-icon">{ tab.icon() }</span>
                                    <span>{ tab.label() }</span>
                                </button>
                            }
                        }) }
                    </div>
                    <div class="tab-panel" key={active.label()}>
                        { content }
                    </div>
                    <footer class="about-contact">
                        <span>{"🌐 makeawake.com"}</span>
                        <span>{"📞 Book a Call"}</span>
                        <span>{"📍 Atlanta, GA"}</span>
                    </footer>
                </div>

                <div class="about-gallery">
                    <div class="gallery-edge"></div>
                    <div class="gallery-slide" key={gallery.current() as u64}>
                        <img src={GALLERY[gallery.current()]} alt="Wake Schepman" />
                        <div class="gallery-shade"></div>
                    </div>
                    <div class="gallery-dots">
                        { for (0..GALLERY.len()).map(|i| {
                            let onclick = {
                                let gallery = gallery.clone();
                                Callback::from(move |_: MouseEvent| gallery.set(gallery.select(i)))
                            };
                            html! {
                                <button
                                    class={classes!("gallery-dot", (gallery.current() == i).then(|| "current"))}
                                    aria-label={format!("Show photo {}", i + 1)}
                                    {onclick}
                                ></button>
                            }
                        }) }
                    </div>
                </div>
            </div>

            <div ref={connect} class="about-connect">
                <div class={classes!("container", reveal_class(connect_visible))}>
                    <div class="centered">
                        <h2 class="section-title bold">{"Ready to Discover Your Story?"}</h2>
                        <p class="section-lead">
                            {"Whether it's helping a PMI franchise owner connect with property owners or a treatment center reach families in crisis, the formula remains the same: identify the authentic story, tell it compellingly, and support it with data-driven marketing systems."}
                        </p>
                    </div>
                    <div class="connect-cards">
                        <div class="connect-card">
                            <div class="connect-icon">{"🌐"}</div>
                            <h4>{"Visit Our Site"}</h4>
                            <p>{"makeawake.com"}</p>
                        </div>
                        <div class="connect-card primary">
                            <div class="connect-icon">{"📞"}</div>
                            <h4>{"Book a Call"}</h4>
                            <p>{"Free 15-min strategy session"}</p>
                        </div>
                        <div class="connect-card">
                            <div class="connect-icon">{"📍"}</div>
                            <h4>{"Location"}</h4>
                            <p>{"Atlanta, GA"}</p>
                        </div>
                    </div>
                    <div class="centered">
                        <a href="#contact" class="dark-button">{"Start a Conversation →"}</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about-intro { background: #f8fafc; }
                .about-intro .container { padding-top: 3rem; padding-bottom: 3rem; }
                .about-label {
                    margin: 0 0 1.5rem;
                    font-size: 0.75rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: #64748b;
                }
                .about-title-row {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                @media (min-width: 768px) {
                    .about-title-row { flex-direction: row; gap: 1.5rem; }
                }
                .about-founder {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-align: left;
                }
                .about-avatar { position: relative; }
                .about-avatar img {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    object-fit: cover;
                    box-shadow: 0 0 0 2px #e2e8f0;
                }
                .online-dot {
                    position: absolute;
                    right: -2px;
                    bottom: -2px;
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    border: 2px solid #f8fafc;
                    background: #22c55e;
                }
                .about-name { margin: 0; font-weight: 700; color: #0f172a; }
                .about-role { margin: 0; font-size: 0.875rem; color: #64748b; }
                .about-title {
                    margin: 0;
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 700;
                    line-height: 1.1;
                    color: #0f172a;
                }
                .accent-line {
                    width: 5rem;
                    height: 4px;
                    margin: 0 auto 1rem;
                    background: var(--accent);
                }
                .about-subtitle {
                    max-width: 32rem;
                    margin: 0 auto 1rem;
                    line-height: 1.7;
                    color: #475569;
                }
                .about-work-link {
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    color: var(--accent);
                    text-decoration: none;
                }
                .about-tabs-band {
                    display: flex;
                    flex-direction: column;
                    min-height: 550px;
                    color: var(--background);
                    background: var(--foreground);
                }
                @media (min-width: 1024px) {
                    .about-tabs-band { flex-direction: row; }
                }
                .about-tabs {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    padding: 2.5rem 1.5rem;
                }
                @media (min-width: 1024px) {
                    .about-tabs { padding: 2.5rem 4rem; }
                }
                .tab-nav {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .tab-button {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.625rem 1rem;
                    border: none;
                    border-radius: 999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    color: rgba(255,255,255,0.7);
                    background: rgba(255,255,255,0.1);
                    transition: all 0.3s;
                }
                .tab-button:hover { background: rgba(255,255,255,0.2); color: white; }
                .tab-button.active {
                    color: var(--foreground);
                    background: var(--background);
                    box-shadow: 0 10px 15px rgba(0,0,0,0.2);
                }
                .tab-panel {
                    flex: 1;
                    max-height: 420px;
                    overflow-y: auto;
                    padding-right: 1rem;
                    scrollbar-width: thin;
                    scrollbar-color: rgba(255,255,255,0.2) transparent;
                    animation: fade-in-up 0.3s ease-out;
                }
                .tab-body {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .tab-body h3 { margin: 0 0 0.75rem; font-size: 1.5rem; font-weight: 700; }
                .tab-lead { margin: 0; font-size: 1.375rem; font-weight: 500; line-height: 1.6; }
                .tab-copy p, .tab-muted { color: rgba(255,255,255,0.7); line-height: 1.7; }
                .tab-quote {
                    padding: 1.25rem;
                    border-left: 4px solid var(--accent);
                    border-radius: 0.75rem;
                    background: rgba(255,255,255,0.1);
                }
                .tab-quote p { margin: 0; font-size: 1.125rem; font-style: italic; }
                .way {
                    padding: 1.25rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(255,255,255,0.1);
                    background: rgba(255,255,255,0.05);
                }
                .way.new {
                    border: 2px solid color-mix(in srgb, var(--accent) 40%, transparent);
                    background: color-mix(in srgb, var(--accent) 20%, transparent);
                }
                .way h4 {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin: 0 0 1rem;
                    font-size: 1.125rem;
                }
                .way ul {
                    display: flex;
                    flex-direction: column;
                    gap: 0.625rem;
                    margin: 0;
                    padding: 0;
                    list-style: none;
                    font-size: 0.875rem;
                    color: rgba(255,255,255,0.75);
                }
                .way li { display: flex; gap: 0.5rem; }
                .way.old .way-bullet, .way.old .way-mark { color: #f87171; font-weight: 700; }
                .way.new .way-bullet, .way.new .way-mark { color: var(--accent); font-weight: 700; }
                .about-stats {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 0.75rem;
                }
                .about-stat {
                    padding: 1rem;
                    text-align: center;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(255,255,255,0.1);
                    background: rgba(255,255,255,0.1);
                    animation: fade-in-up 0.4s ease-out both;
                }
                .about-stat-value { margin: 0 0 0.25rem; font-size: 1.75rem; font-weight: 700; color: var(--accent); }
                .about-stat-label { margin: 0; font-size: 0.875rem; font-weight: 600; }
                .about-stat-desc { margin: 0; font-size: 0.75rem; color: rgba(255,255,255,0.5); }
                .about-case-link {
                    padding: 1rem;
                    text-align: center;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(255,255,255,0.1);
                    background: rgba(255,255,255,0.1);
                }
                .about-case-title { margin: 0 0 0.375rem; font-weight: 600; }
                .accent-button {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    color: var(--accent-foreground);
                    background: var(--accent);
                    text-decoration: none;
                }
                .accent-button.small { padding: 0.5rem 1rem; font-size: 0.875rem; }
                .about-contact {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.5rem;
                    margin-top: 1.25rem;
                    padding-top: 1.25rem;
                    border-top: 1px solid rgba(255,255,255,0.1);
                    font-size: 0.75rem;
                    color: rgba(255,255,255,0.5);
                }
                .about-gallery {
                    position: relative;
                    width: 100%;
                    height: 20rem;
                    overflow: hidden;
                }
                @media (min-width: 1024px) {
                    .about-gallery { width: 45%; height: auto; }
                }
                .gallery-edge {
                    display: none;
                    position: absolute;
                    inset: 0 auto 0 0;
                    z-index: 10;
                    width: 6rem;
                    background: var(--foreground);
                    clip-path: polygon(0 0, 100% 0, 0 100%, 0 100%);
                }
                @media (min-width: 1024px) {
                    .gallery-edge { display: block; }
                }
                .gallery-slide {
                    position: absolute;
                    inset: 0;
                    animation: gallery-in 0.7s ease-in-out;
                }
                .gallery-slide img { width: 100%; height: 100%; object-fit: cover; }
                .gallery-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0,0,0,0.6), transparent);
                }
                @keyframes gallery-in {
                    from { opacity: 0; transform: scale(1.05); }
                    to { opacity: 1; transform: scale(1); }
                }
                .gallery-dots {
                    position: absolute;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 20;
                    display: flex;
                    gap: 0.5rem;
                }
                .gallery-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    padding: 0;
                    border: none;
                    border-radius: 999px;
                    cursor: pointer;
                    background: rgba(255,255,255,0.5);
                    transition: all 0.3s;
                }
                .gallery-dot.current { width: 1.5rem; background: var(--accent); }
                .about-connect {
                    padding: 4rem 0 6rem;
                    background: color-mix(in srgb, var(--secondary) 30%, transparent);
                }
                .connect-cards {
                    display: grid;
                    gap: 1.25rem;
                    max-width: 48rem;
                    margin: 2.5rem auto 2rem;
                }
                @media (min-width: 768px) {
                    .connect-cards { grid-template-columns: repeat(3, 1fr); }
                }
                .connect-card {
                    padding: 1.25rem;
                    text-align: center;
                    border: 1px solid var(--border);
                    border-radius: 0.75rem;
                    background: var(--card);
                    transition: all 0.3s;
                }
                .connect-card:hover { box-shadow: 0 10px 15px rgba(0,0,0,0.1); }
                .connect-card.primary {
                    border: none;
                    color: var(--accent-foreground);
                    background: var(--accent);
                }
                .connect-card.primary:hover { transform: scale(1.05); }
                .connect-icon { font-size: 1.5rem; margin-bottom: 0.75rem; }
                .connect-card h4 { margin: 0 0 0.25rem; font-weight: 600; }
                .connect-card p { margin: 0; font-size: 0.875rem; opacity: 0.8; }
                .dark-button {
                    display: inline-block;
                    padding: 0.875rem 2rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    color: var(--background);
                    background: var(--primary);
                    text-decoration: none;
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
    fn story_is_the_first_tab() {
        assert_eq!(AboutTab::default(), AboutTab::Story);
        assert_eq!(AboutTab::ALL[0], AboutTab::Story);
    }

    #[test]
    fn tab_labels_are_distinct() {
        let labels: Vec<_> = AboutTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["My Story", "My Approach", "Track Record"]);
    }

    #[test]
    fn gallery_wraps() {
        let mut g = Gallery::new(GALLERY.len());
        for _ in 0..GALLERY.len() {
            g = g.advance();
        }
        assert_eq!(g.current(), 0);
    }

    #[test]
    fn gallery_ignores_out_of_range_select() {
        let g = Gallery::new(3).select(2);
        assert_eq!(g.current(), 2);
        assert_eq!(g.select(7).current(), 2);
        assert_eq!(g.advance().current(), 0);
    }
}
