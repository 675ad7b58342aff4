use yew::prelude::*;

use crate::components::highlighted_text::HighlightedText;
use crate::components::video_background::VideoBackground;
use crate::config::{cdn_video, mailto, CONTACT_EMAIL};
use crate::reveal::{reveal_class, use_reveal};

const BENEFITS: [(&str, &str, &str); 3] = [
    (
        "🎁",
        "Free Strategy Insights",
        "Walk away with actionable recommendations you can implement immediately.",
    ),
    (
        "🛡",
        "No Pressure Approach",
        "Our conversation is about understanding your needs, not making a sale.",
    ),
    (
        "📊",
        "Personalized Analysis",
        "Get specific feedback on your current marketing approach and opportunities.",
    ),
];

#[function_component(StrategySession)]
pub fn strategy_session() -> Html {
    let (section, visible) = use_reveal(0.2);

    html! {
        <section ref={section} class="section video-section">
            <VideoBackground src={cdn_video("0000d.mp4")} overlay={classes!("clear")} />
            <div class="container video-section-content">
                <div class="session">
                    <div class={classes!("glass", "session-head", reveal_class(visible))}>
                        <p class="session-eyebrow">{"Get Started"}</p>
                        <h2>
                            {"Book Your Free 30-Minute "}
                            <HighlightedText>{"Strategy Session"}</HighlightedText>
                        </h2>
                        <p class="session-lead">
                            {"Every engagement starts with understanding your unique situation. In your free strategy session, we'll discuss your business goals, current marketing challenges, and opportunities for growth."}
                        </p>
                    </div>

                    <div class={classes!("session-benefits", reveal_class(visible))} style="transition-delay: 200ms;">
                        { for BENEFITS.iter().map(|(icon, title, description)| html! {
                            <div class="glass benefit" key={*title}>
                                <div class="benefit-icon">{ *icon }</div>
                                <h3>{ *title }</h3>
                                <p>{ *description }</p>
                            </div>
                        }) }
                    </div>

                    <div class={classes!("glass", "session-cta", reveal_class(visible))} style="transition-delay: 300ms;">
                        <div class="session-facts">
                            <span>{"⏱ 30 minutes"}</span>
                            <span>{"🎥 Via Google Meet"}</span>
                            <span>{"✉ Response within 24 hours"}</span>
                        </div>
                        <a href="#contact" class="session-button">{"Book Your Strategy Session →"}</a>
                        <div class="session-direct">
                            <p>{"Prefer Direct Contact?"}</p>
                            <p>{"Feel free to reach out directly for quick questions or immediate needs."}</p>
                            <a href={mailto(CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .video-background-overlay.clear { background: transparent; }
                .session {
                    max-width: 56rem;
                    margin: 0 auto;
                    color: white;
                }
                .glass {
                    border: 1px solid rgba(255,255,255,0.3);
                    background: rgba(255,255,255,0.2);
                    backdrop-filter: blur(24px);
                }
                .session-head {
                    margin-bottom: 2rem;
                    padding: 3rem;
                    border-radius: 1.5rem;
                    text-align: center;
                }
                .session-eyebrow {
                    margin: 0 0 1.5rem;
                    font-size: 0.875rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: rgba(255,255,255,0.7);
                }
                .session-head h2 {
                    margin: 0 0 1.5rem;
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 500;
                    line-height: 1.15;
                    letter-spacing: -0.025em;
                }
                .session-lead {
                    max-width: 42rem;
                    margin: 0 auto;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: rgba(255,255,255,0.8);
                }
                .session-benefits {
                    display: grid;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                @media (min-width: 768px) {
                    .session-benefits { grid-template-columns: repeat(3, 1fr); }
                }
                .benefit {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    text-align: center;
                }
                .benefit-icon { font-size: 2rem; margin-bottom: 1rem; }
                .benefit h3 { margin: 0 0 0.5rem; font-size: 1.125rem; font-weight: 500; }
                .benefit p { margin: 0; font-size: 0.875rem; line-height: 1.6; color: rgba(255,255,255,0.7); }
                .session-cta {
                    padding: 2.5rem;
                    border-radius: 1.5rem;
                    text-align: center;
                }
                .session-facts {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                    color: rgba(255,255,255,0.8);
                }
                .session-button {
                    display: inline-block;
                    margin-bottom: 1.5rem;
                    padding: 1rem 2rem;
                    border-radius: 999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #171717;
                    background: white;
                    text-decoration: none;
                }
                .session-direct {
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255,255,255,0.2);
                    font-size: 0.875rem;
                }
                .session-direct p { margin: 0 0 0.5rem; color: rgba(255,255,255,0.6); }
                .session-direct a { font-weight: 500; color: white; }
                "#}
            </style>
        </section>
    }
}
