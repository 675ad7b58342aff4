use yew::prelude::*;

use crate::components::highlighted_text::HighlightedText;
use crate::reveal::{reveal_class, use_reveal_list};

struct Industry {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

static INDUSTRIES: [Industry; 4] = [
    Industry {
        title: "Behavioral Health & Healthcare",
        description: "Deep experience navigating compliance requirements, HIPAA considerations, and the unique conversion challenges in treatment center marketing. We understand the sensitivity required when reaching families in crisis.",
        icon: "♥",
    },
    Industry {
        title: "Education & EdTech",
        description: "From K-12 institutions to higher education and online learning platforms, we build campaigns that speak to students, parents, and administrators with distinct messaging tracks.",
        icon: "🎓",
    },
    Industry {
        title: "Automotive & Motorsports",
        description: "High-consideration purchases require sophisticated full-funnel strategies. We've helped racing companies identify ideal customer profiles and map complex buyer journeys from awareness to advocacy.",
        icon: "🚗",
    },
    Industry {
        title: "Home Services & Local Business",
        description: "Roofing, contracting, cleaning services: we've generated over $1.5M in tracked revenue for service businesses through non-traditional outreach and hyper-targeted local campaigns.",
        icon: "🏠",
    },
];

const STAGGER_MS: usize = 150;

#[function_component(WhoWeWorkWith)]
pub fn who_we_work_with() -> Html {
    let (items, revealed) = use_reveal_list(INDUSTRIES.len(), 0.2);

    html! {
        <section class="section">
            <div class="container">
                <div class="section-intro">
                    <p class="eyebrow">{"Who We Work With"}</p>
                    <h2 class="section-title">
                        {"Built for Marketing Leaders Who Demand "}
                        <HighlightedText>{"Results"}</HighlightedText>
                    </h2>
                    <p class="section-lead">
                        {"We partner with companies that have existing marketing budgets and established operations. Our clients \
                          aren't looking for flashy campaigns. They want systematic improvements backed by data."}
                    </p>
                </div>

                <div class="industry-grid">
                    { for INDUSTRIES.iter().enumerate().map(|(index, industry)| {
                        let visible = revealed.is_visible(index);
                        html! {
                            <div
                                key={industry.title}
                                ref={items[index].clone()}
                                data-index={index.to_string()}
                                class={classes!("industry", reveal_class(visible))}
                                style={format!("transition-delay: {}ms;", index * STAGGER_MS)}
                            >
                                <div class={classes!("industry-icon", visible.then(|| "drawn"))}>{ industry.icon }</div>
                                <h3>{ industry.title }</h3>
                                <p>{ industry.description }</p>
                            </div>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .industry-grid {
                    display: grid;
                    gap: 3rem;
                }
                @media (min-width: 768px) {
                    .industry-grid { grid-template-columns: repeat(2, 1fr); }
                }
                .industry {
                    position: relative;
                    padding-left: 2rem;
                    border-left: 1px solid var(--border);
                }
                .industry-icon {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                    color: var(--accent);
                    opacity: 0.2;
                    transition: opacity 1s;
                }
                .industry-icon.drawn {
                    opacity: 1;
                }
                .industry h3 {
                    font-size: 1.25rem;
                    font-weight: 500;
                    margin: 0 0 0.75rem;
                }
                .industry p {
                    color: var(--muted-foreground);
                    line-height: 1.7;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
