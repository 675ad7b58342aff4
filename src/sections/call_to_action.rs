use yew::prelude::*;

use crate::components::highlighted_text::HighlightedText;
use crate::components::video_background::VideoBackground;
use crate::config::{cdn_video, mailto, CONTACT_EMAIL};

const PROMISES: [&str; 4] = [
    "Complete campaign audit",
    "ROI improvement roadmap",
    "No obligation",
    "Implementable insights",
];

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    let promises = PROMISES.iter().enumerate().map(|(i, promise)| {
        html! {
            <>
                if i > 0 {
                    <span>{"•"}</span>
                }
                <span>{ *promise }</span>
            </>
        }
    });

    html! {
        <section id="contact" class="section video-section">
            <VideoBackground src={cdn_video("0000wakewater.mp4")} />
            <div class="container video-section-content">
                <div class="cta-copy">
                    <p class="cta-eyebrow">{"Let's Talk"}</p>
                    <h2 class="cta-title">
                        {"Ready to Be Our Next "}
                        <HighlightedText>{"Success Story"}</HighlightedText>
                        {"?"}
                    </h2>
                    <p class="cta-lead">
                        {"Every successful campaign starts with understanding your unique story and goals. Let's discuss how we can create similar results for your business."}
                    </p>
                    <div class="cta-promises">{ for promises }</div>
                    <a href={mailto(CONTACT_EMAIL)} class="cta-button">{"Discuss Your Goals →"}</a>
                    <p class="cta-direct">
                        {"Direct contact: "}
                        <a href={mailto(CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
                    </p>
                </div>
            </div>
            <style>
                {r#"
                .video-section {
                    position: relative;
                    overflow: hidden;
                }
                .video-section-content {
                    position: relative;
                    z-index: 10;
                }
                .cta-copy {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                    color: white;
                }
                .cta-eyebrow {
                    margin: 0 0 2rem;
                    font-size: 0.875rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: rgba(255,255,255,0.6);
                }
                .cta-title {
                    margin: 0 0 2rem;
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 500;
                    line-height: 1.1;
                    letter-spacing: -0.025em;
                }
                .cta-lead {
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: rgba(255,255,255,0.7);
                }
                .cta-promises {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 2.5rem;
                    font-size: 0.875rem;
                    color: rgba(255,255,255,0.6);
                }
                .cta-button {
                    display: inline-block;
                    margin-bottom: 2.5rem;
                    padding: 1rem 2rem;
                    font-size: 0.875rem;
                    letter-spacing: 0.025em;
                    color: var(--accent-foreground);
                    background: var(--accent);
                    text-decoration: none;
                    transition: background 0.3s;
                }
                .cta-direct {
                    font-size: 0.875rem;
                    color: rgba(255,255,255,0.5);
                }
                .cta-direct a { color: var(--accent); }
                "#}
            </style>
        </section>
    }
}
