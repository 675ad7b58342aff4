use yew::prelude::*;

use crate::config::{mailto, HELLO_EMAIL};
use crate::dom;

const SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("LinkedIn", "in", "https://linkedin.com"),
    ("Twitter", "𝕏", "https://twitter.com"),
    ("Instagram", "◎", "https://instagram.com"),
];

const MAIN_LINKS: [(&str, &str); 6] = [
    ("services", "Services"),
    ("results", "Results"),
    ("about", "About"),
    ("team", "Team"),
    ("blog", "Blog"),
    ("faq", "FAQ"),
];

const LEGAL_LINKS: [&str; 2] = ["Privacy Policy", "Terms of Service"];

fn anchor_click(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if dom::scroll_to_section(id) {
            e.prevent_default();
        }
    })
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let logo_click = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_top();
    });

    html! {
        <footer class="site-footer">
            <div class="footer-rule"></div>
            <div class="footer-fade"></div>
            <div class="container footer-inner">
                <div class="footer-top">
                    <a href="/" class="footer-brand" onclick={logo_click}>
                        <div class="footer-logo">
                            <img src="/images/maw-logo.png" alt="MAW Marketing" />
                        </div>
                        <div>
                            <span class="footer-name">{"MAW Marketing"}</span>
                            <span class="footer-tagline">{"Growth Through Storytelling"}</span>
                        </div>
                    </a>
                    <ul class="footer-socials">
                        { for SOCIAL_LINKS.iter().map(|(label, glyph, href)| html! {
                            <li key={*label}>
                                <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*label}>{ *glyph }</a>
                            </li>
                        }) }
                        <li>
                            <a href={mailto(HELLO_EMAIL)} aria-label="Email">{"✉"}</a>
                        </li>
                    </ul>
                </div>

                <div class="footer-banner">
                    <div>
                        <h3>{"Ready to grow?"}</h3>
                        <p>{"Let's talk about turning your marketing into predictable revenue."}</p>
                    </div>
                    <a href="#contact" onclick={anchor_click("contact")}>{"Book a Call ↗"}</a>
                </div>

                <div class="footer-links">
                    <div class="footer-copyright">
                        <div>{"© 2026 MAW Marketing"}</div>
                        <div>{"Wake Schepman. All rights reserved."}</div>
                    </div>
                    <div class="footer-nav">
                        <nav>
                            <ul>
                                { for MAIN_LINKS.iter().map(|(id, label)| html! {
                                    <li key={*id}>
                                        <a href={format!("#{}", id)} onclick={anchor_click(*id)}>{ *label }</a>
                                    </li>
                                }) }
                            </ul>
                        </nav>
                        <ul class="legal">
                            { for LEGAL_LINKS.iter().map(|label| html! {
                                <li key={*label}><a href="#">{ *label }</a></li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="footer-flourish">
                    <span class="flourish-line"></span>
                    <span>{"Made with strategy + storytelling"}</span>
                    <span class="flourish-line"></span>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    overflow: hidden;
                }
                .footer-rule {
                    position: absolute;
                    inset: 0 0 auto 0;
                    height: 1px;
                    background: linear-gradient(to right, transparent, var(--accent), transparent);
                }
                .footer-fade {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: linear-gradient(to bottom, var(--background), var(--background), color-mix(in srgb, var(--muted) 30%, transparent));
                }
                .footer-inner {
                    position: relative;
                    padding-top: 5rem;
                    padding-bottom: 2rem;
                }
                .footer-top {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                @media (min-width: 768px) {
                    .footer-top { flex-direction: row; justify-content: space-between; align-items: flex-start; }
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    color: inherit;
                    text-decoration: none;
                }
                .footer-logo {
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    background: color-mix(in srgb, var(--foreground) 5%, transparent);
                    transition: background 0.3s;
                }
                .footer-brand:hover .footer-logo { background: color-mix(in srgb, var(--foreground) 10%, transparent); }
                .footer-logo img { display: block; height: 2.5rem; transition: transform 0.3s; }
                .footer-brand:hover .footer-logo img { transform: scale(1.1); }
                .footer-name { display: block; font-size: 1.25rem; font-weight: 700; }
                .footer-tagline { font-size: 0.75rem; color: var(--muted-foreground); }
                .footer-socials {
                    display: flex;
                    gap: 0.75rem;
                    margin: 0;
                    padding: 0;
                    list-style: none;
                }
                .footer-socials a {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.75rem;
                    height: 2.75rem;
                    border-radius: 50%;
                    font-weight: 700;
                    color: var(--foreground);
                    background: var(--secondary);
                    text-decoration: none;
                    transition: all 0.3s;
                }
                .footer-socials a:hover {
                    transform: scale(1.1);
                    color: var(--accent-foreground);
                    background: var(--accent);
                }
                .footer-banner {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                    padding: 2rem;
                    border-radius: 1rem;
                    color: var(--background);
                    background: var(--foreground);
                }
                @media (min-width: 768px) {
                    .footer-banner { flex-direction: row; align-items: center; justify-content: space-between; }
                }
                .footer-banner h3 { margin: 0 0 0.5rem; font-size: 1.5rem; font-weight: 700; }
                .footer-banner p { margin: 0; color: color-mix(in srgb, var(--background) 70%, transparent); }
                .footer-banner a {
                    padding: 0.75rem 1.5rem;
                    border-radius: 999px;
                    font-weight: 500;
                    white-space: nowrap;
                    color: var(--accent-foreground);
                    background: var(--accent);
                    text-decoration: none;
                    transition: transform 0.3s;
                }
                .footer-banner a:hover { transform: scale(1.05); }
                .footer-links {
                    display: flex;
                    flex-direction: column-reverse;
                    gap: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid var(--border);
                }
                @media (min-width: 1024px) {
                    .footer-links { flex-direction: row; justify-content: space-between; }
                }
                .footer-nav ul {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem 1.5rem;
                    margin: 0 0 1rem;
                    padding: 0;
                    list-style: none;
                }
                @media (min-width: 1024px) {
                    .footer-nav ul { justify-content: flex-end; }
                }
                .footer-nav a {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--foreground);
                    text-underline-offset: 4px;
                    text-decoration: none;
                }
                .footer-nav a:hover { color: var(--accent); text-decoration: underline; }
                .footer-nav .legal a { font-weight: 400; color: var(--muted-foreground); }
                .footer-copyright {
                    font-size: 0.875rem;
                    line-height: 1.5rem;
                    color: var(--muted-foreground);
                }
                .footer-flourish {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 3rem;
                    font-size: 0.75rem;
                    color: color-mix(in srgb, var(--muted-foreground) 50%, transparent);
                }
                .flourish-line { width: 3rem; height: 1px; background: var(--border); }
                "#}
            </style>
        </footer>
    }
}
