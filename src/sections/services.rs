use yew::prelude::*;

use crate::components::highlighted_text::HighlightedText;
use crate::reveal::{reveal_class, use_reveal};

struct Service {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    href: &'static str,
}

static SERVICES: [Service; 3] = [
    Service {
        id: "paid-ads",
        title: "Paid Advertising Management",
        description: "Cross-platform campaign management for Google, Meta, TikTok, and LinkedIn with measurable ROI.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?q=80&w=800&auto=format&fit=crop",
        href: "#contact",
    },
    Service {
        id: "full-funnel",
        title: "Full Funnel Marketing Systems",
        description: "Transform scattered campaigns into predictable, scalable lead generation infrastructure.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=800&auto=format&fit=crop",
        href: "#contact",
    },
    Service {
        id: "content-strategy",
        title: "Content Strategy & Media",
        description: "Ongoing content development that builds authority and drives consistent engagement.",
        image: "https://images.unsplash.com/photo-1499750310107-5fef28a66643?q=80&w=800&auto=format&fit=crop",
        href: "#contact",
    },
];

/// Delay for the n-th element of the staggered fade-up (three header lines, then the cards).
fn stagger(step: usize) -> String {
    format!("transition-delay: {}ms;", step * 150)
}

#[function_component(Services)]
pub fn services() -> Html {
    let (section, visible) = use_reveal(0.2);

    html! {
        <section id="services" ref={section} class="section tinted">
            <div class="container narrow">
                <div class="section-intro centered">
                    <p class={classes!("eyebrow", reveal_class(visible))} style={stagger(0)}>{"Our Services"}</p>
                    <h2 class={classes!("section-title", "bold", reveal_class(visible))} style={stagger(1)}>
                        {"Three Paths to "}
                        <HighlightedText>{"Systematic Growth"}</HighlightedText>
                    </h2>
                    <p class={classes!("section-lead", reveal_class(visible))} style={stagger(2)}>
                        {"Strategic marketing services designed to meet you where you are and take you where you want to go."}
                    </p>
                </div>

                <div class="service-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <a
                            key={service.id}
                            href={service.href}
                            class={classes!("service-card", reveal_class(visible))}
                            style={stagger(index + 3)}
                        >
                            <div class="service-image">
                                <img src={service.image} alt={service.title} />
                            </div>
                            <div class="service-body">
                                <div>
                                    <h3>{ service.title }</h3>
                                    <p>{ service.description }</p>
                                </div>
                                <span class="service-arrow">{"→"}</span>
                            </div>
                        </a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .service-grid {
                    display: grid;
                    gap: 1.5rem;
                }
                @media (min-width: 768px) {
                    .service-grid { grid-template-columns: repeat(3, 1fr); }
                }
                .service-card {
                    display: block;
                    overflow: hidden;
                    border: 1px solid color-mix(in srgb, var(--border) 50%, transparent);
                    border-radius: 1rem;
                    background: var(--card);
                    color: inherit;
                    text-decoration: none;
                    box-shadow: 0 1px 2px rgba(0,0,0,0.05);
                }
                .service-card.is-visible:hover {
                    transform: scale(1.03) translateY(-5px);
                    box-shadow: 0 20px 25px rgba(0,0,0,0.1);
                    border-color: color-mix(in srgb, var(--accent) 30%, transparent);
                }
                .service-image {
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                }
                .service-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease-out;
                }
                .service-card:hover .service-image img {
                    transform: scale(1.1);
                }
                .service-body {
                    display: flex;
                    align-items: flex-start;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 1.5rem;
                }
                .service-body h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    transition: color 0.3s;
                }
                .service-card:hover h3 {
                    color: var(--accent);
                }
                .service-body p {
                    margin: 0;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: var(--muted-foreground);
                }
                .service-arrow {
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: color-mix(in srgb, var(--muted) 50%, transparent);
                    transition: all 0.3s;
                }
                .service-card:hover .service-arrow {
                    background: var(--accent);
                    color: var(--accent-foreground);
                    transform: scale(1.1);
                }
                "#}
            </style>
        </section>
    }
}
