use yew::prelude::*;

use crate::components::team_section::{TeamMember, TeamSpotlight};

static MEMBERS: [TeamMember; 4] = [
    TeamMember {
        name: "Sam Olsen",
        title: "Social Media & Content Strategist",
        bio: "Creative storyteller who brings brands to life across platforms. Specializes in social media, video, and content strategies that engage and convert. Partner in driving consistent digital presence and audience growth.",
        image: "/images/sam.png",
        socials: &[("LinkedIn", "#"), ("Instagram", "#")],
    },
    TeamMember {
        name: "Zach Coder",
        title: "SEO & Website Strategist",
        bio: "Teacher at heart with 17+ years helping people connect the dots. Runs a digital agency focused on SEO, websites, and Google Business Profiles. Builds systems that drive measurable growth, not just quick tactics.",
        image: "/images/zac.png",
        socials: &[("LinkedIn", "#"), ("Twitter", "#")],
    },
    TeamMember {
        name: "Chanler Godfrey",
        title: "AI & Automations Specialist",
        bio: "Known for figuring it out when no one else can. Deep background in business development and sales, scaling startups to new heights. Expert in mapping customer journeys and building automation systems that scale.",
        image: "/images/chanler.png",
        socials: &[("LinkedIn", "#"), ("Twitter", "#")],
    },
    TeamMember {
        name: "Savanna Schepman",
        title: "Director of Finance & Operations",
        bio: "Adventurous soul with an organized mind that keeps the team on track. Balances creativity and structure to make sure projects run smoothly. Brings warmth, clarity, and focus that grounds the entire operation.",
        image: "/images/savanna.png",
        socials: &[("LinkedIn", "#"), ("Instagram", "#")],
    },
];

#[function_component(Team)]
pub fn team() -> Html {
    html! {
        <div id="team">
            <section class="section team">
                <svg class="team-pattern" fill="none">
                    <defs>
                        <pattern id="team-grid" x="0" y="0" width="40" height="40" patternUnits="userSpaceOnUse">
                            <path d="M40 0L0 0 0 40" fill="none" stroke="currentColor" stroke-width="1" />
                        </pattern>
                    </defs>
                    <rect width="100%" height="100%" fill="url(#team-grid)" />
                </svg>
                <div class="container team-inner">
                    <div class="section-intro">
                        <p class="eyebrow">{"The Team"}</p>
                        <h2 class="section-title">
                            {"Meet the "}
                            <span class="team-highlight">
                                <span class="accent-text">{"Experts"}</span>
                                <svg viewBox="0 0 200 8" preserveAspectRatio="none">
                                    <path d="M0,5 Q50,0 100,5 T200,5" fill="none" stroke="currentColor" stroke-width="2" />
                                </svg>
                            </span>
                        </h2>
                        <p class="section-lead">
                            {"A team of specialists aligned to grow your business. Each brings unique expertise to ensure your marketing success."}
                        </p>
                    </div>
                    <TeamSpotlight members={&MEMBERS[..]} />
                </div>
                <style>
                    {r#"
                    .team {
                        position: relative;
                        overflow: hidden;
                        background: var(--background);
                    }
                    .team-pattern {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        opacity: 0.03;
                        color: var(--muted-foreground);
                    }
                    .team-inner {
                        position: relative;
                        z-index: 10;
                    }
                    .team-highlight {
                        position: relative;
                        display: inline-block;
                    }
                    .team-highlight svg {
                        position: absolute;
                        left: 0;
                        bottom: -0.5rem;
                        width: 100%;
                        height: 0.75rem;
                        color: color-mix(in srgb, var(--accent) 40%, transparent);
                    }
                    "#}
                </style>
            </section>
        </div>
    }
}
