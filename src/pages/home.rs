use yew::prelude::*;

use crate::components::wake_ai::WakeAi;
use crate::sections::{
    about_wake::AboutWake, blog_section::BlogSection, call_to_action::CallToAction, case_studies::CaseStudies,
    core_principles::CorePrinciples, faq::Faq, footer::Footer, header::Header, hero::Hero, problem::Problem,
    services::Services, strategy_session::StrategySession, team::Team, testimonials::Testimonials,
    who_we_work_with::WhoWeWorkWith,
};

/// The single landing page, sections in scroll order with the chat widget on top.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="page">
            <Header />
            <Hero />
            <Problem />
            <WhoWeWorkWith />
            <Services />
            <CaseStudies />
            <Testimonials />
            <AboutWake />
            <CorePrinciples />
            <Team />
            <StrategySession />
            <BlogSection />
            <Faq />
            <CallToAction />
            <Footer />
            <WakeAi />
            <style>
                {r#"
                :root {
                    --background: #ffffff;
                    --foreground: #171717;
                    --card: #ffffff;
                    --primary: #171717;
                    --secondary: #f4f4f5;
                    --muted: #f4f4f5;
                    --muted-foreground: #71717a;
                    --accent: #2f6bff;
                    --accent-foreground: #ffffff;
                    --border: #e4e4e7;
                }
                *, *::before, *::after { box-sizing: border-box; }
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    font-family: "Geist Mono", ui-monospace, SFMono-Regular, Menlo, monospace;
                    color: var(--foreground);
                    background: var(--background);
                    -webkit-font-smoothing: antialiased;
                }
                .page { min-height: 100vh; }
                .container {
                    width: 100%;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                @media (min-width: 768px) {
                    .container { padding: 0 3rem; }
                }
                .container.narrow { max-width: 72rem; }
                .section { padding: 6rem 0; }
                @media (min-width: 768px) {
                    .section { padding: 8rem 0; }
                }
                .section.tinted { background: color-mix(in srgb, var(--secondary) 30%, transparent); }
                .centered { text-align: center; }
                .section-intro {
                    max-width: 48rem;
                    margin-bottom: 4rem;
                }
                .section-intro.centered { margin-left: auto; margin-right: auto; }
                .eyebrow {
                    margin: 0 0 1.5rem;
                    font-size: 0.875rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: var(--muted-foreground);
                }
                .section-title {
                    margin: 0 0 1.5rem;
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 500;
                    line-height: 1.15;
                    letter-spacing: -0.025em;
                    text-wrap: balance;
                }
                .section-title.bold { font-weight: 700; }
                .section-lead {
                    margin: 0;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: var(--muted-foreground);
                }
                .centered .section-lead { max-width: 42rem; margin: 0 auto; }
                .accent-text { color: var(--accent); }
                .highlighted-text {
                    font-style: italic;
                    color: var(--accent);
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(2rem);
                    transition: opacity 0.7s ease-out, transform 0.7s ease-out, box-shadow 0.3s, background 0.3s, border-color 0.3s;
                }
                .reveal.is-visible {
                    opacity: 1;
                    transform: none;
                }
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0,0,0,0.5);
                    backdrop-filter: blur(4px);
                    animation: fade-in 0.2s ease-out;
                }
                .modal-backdrop.dark { background: rgba(0,0,0,0.8); }
                .modal-panel {
                    position: relative;
                    width: 100%;
                    max-height: 90vh;
                    overflow-y: auto;
                    border-radius: 1rem;
                    background: var(--card);
                    box-shadow: 0 25px 50px rgba(0,0,0,0.25);
                    animation: fade-in-up 0.3s ease-out;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    z-index: 2;
                    width: 2.25rem;
                    height: 2.25rem;
                    border: none;
                    border-radius: 50%;
                    cursor: pointer;
                    color: inherit;
                    background: rgba(128,128,128,0.15);
                }
                @keyframes fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes fade-in-up {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: none; }
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-10px); }
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </main>
    }
}
