use yew::prelude::*;

use crate::components::highlighted_text::HighlightedText;
use crate::reveal::{reveal_class, use_reveal};

struct Principle {
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

static PRINCIPLES: [Principle; 3] = [
    Principle {
        title: "Authentic Storytelling",
        description: "Every business has a unique story. We help you identify and communicate yours in a way that resonates with your ideal customers.",
        image: "https://images.unsplash.com/photo-1552664730-d307ca884978?q=80&w=800&auto=format&fit=crop",
    },
    Principle {
        title: "Data-Driven Decisions",
        description: "Every strategy is backed by performance data and clear ROI analysis. We focus on sustainable growth, not vanity metrics.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=800&auto=format&fit=crop",
    },
    Principle {
        title: "Flexible Partnership",
        description: "Whether you need ongoing support, a specific project, or team training, we adapt to your business needs and growth stage.",
        image: "https://images.unsplash.com/photo-1600880292203-757bb62b4baf?q=80&w=800&auto=format&fit=crop",
    },
];

#[function_component(CorePrinciples)]
pub fn core_principles() -> Html {
    let (section, visible) = use_reveal(0.2);

    html! {
        <section ref={section} class="section principles">
            <div class="container">
                <div class={classes!("principles-intro", reveal_class(visible))}>
                    <span class="outline-badge">{"Core Principles"}</span>
                    <h2 class="section-title bold">
                        {"The Foundation Behind Every "}
                        <HighlightedText>{"Strategy"}</HighlightedText>
                    </h2>
                    <p class="section-lead">
                        {"These aren't just words on a wall. They're the foundation of every campaign we build."}
                    </p>
                </div>

                <div class="principle-grid">
                    { for PRINCIPLES.iter().enumerate().map(|(index, principle)| html! {
                        <div
                            key={principle.title}
                            class={classes!("principle", reveal_class(visible))}
                            style={format!("transition-delay: {}ms;", (index + 1) * 100)}
                        >
                            <div class="principle-image">
                                <img src={principle.image} alt={principle.title} />
                            </div>
                            <h3>{ principle.title }</h3>
                            <p>{ principle.description }</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .principles {
                    background: white;
                }
                .principles-intro {
                    max-width: 42rem;
                    margin-bottom: 4rem;
                }
                .outline-badge {
                    display: inline-block;
                    margin-bottom: 1rem;
                    padding: 0.125rem 0.625rem;
                    border: 1px solid var(--border);
                    border-radius: 999px;
                    font-size: 0.75rem;
                    font-weight: 600;
                }
                .principle-grid {
                    display: grid;
                    gap: 2rem;
                }
                @media (min-width: 640px) {
                    .principle-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .principle-grid { grid-template-columns: repeat(3, 1fr); }
                }
                .principle {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .principle.is-visible:hover {
                    transform: translateY(-8px);
                }
                .principle-image {
                    aspect-ratio: 16 / 9;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    background: #f1f5f9;
                }
                .principle-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s;
                }
                .principle:hover .principle-image img {
                    transform: scale(1.05);
                }
                .principle h3 {
                    margin: 0;
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #0f172a;
                }
                .principle p {
                    margin: 0;
                    line-height: 1.7;
                    color: #475569;
                }
                "#}
            </style>
        </section>
    }
}
