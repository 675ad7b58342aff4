use log::debug;
use yew::prelude::*;

use crate::components::highlighted_text::HighlightedText;
use crate::reveal::{reveal_class, use_reveal};

#[derive(PartialEq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(PartialEq)]
pub struct CaseStudy {
    pub number: &'static str,
    pub title: &'static str,
    pub industry: &'static str,
    pub before: Metric,
    pub after: Metric,
    pub highlight: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
}

pub static CASE_STUDIES: [CaseStudy; 6] = [
    CaseStudy {
        number: "01",
        title: "Healthcare Practice",
        industry: "Behavioral Health",
        before: Metric { value: "300", label: "visits/month" },
        after: Metric { value: "10M+", label: "impressions" },
        highlight: "99% More Calls",
        challenge: "A behavioral health organization relied almost entirely on organic search and paid search for website traffic. Social channels contributed fewer than 300 visits per month and generated virtually zero leads.",
        solution: "We launched coordinated paid campaigns across Meta, TikTok, and LinkedIn with messaging specifically crafted for healthcare compliance.",
    },
    CaseStudy {
        number: "02",
        title: "Nomi Health",
        industry: "Health Tech",
        before: Metric { value: "Fragmented", label: "processes" },
        after: Metric { value: "+103%", label: "utilization" },
        highlight: "+74% Revenue",
        challenge: "Nomi Health was scaling rapidly across multiple healthcare products but faced a dual challenge: boost utilization and revenue with fragmented processes.",
        solution: "We designed and executed multi-audience engagement campaigns across digital and traditional channels with dashboards tying performance to outcomes.",
    },
    CaseStudy {
        number: "03",
        title: "Racecar Company",
        industry: "Automotive",
        before: Metric { value: "0", label: "customer clarity" },
        after: Metric { value: "3", label: "buyer personas" },
        highlight: "Full Journey Map",
        challenge: "The company needed clarity on who their ideal customers were and how to prioritize product development and marketing channels.",
        solution: "We conducted in-depth customer interviews and developed Ideal Customer Profiles with three detailed buyer personas.",
    },
    CaseStudy {
        number: "04",
        title: "Rain Roofing Pros",
        industry: "Home Services",
        before: Metric { value: "Saturated", label: "channels" },
        after: Metric { value: "40+", label: "leads in 30min" },
        highlight: "$1M+ Revenue",
        challenge: "Scaling quickly with plans to expand into five major Texas metroplexes. Traditional lead-gen channels were saturated and expensive.",
        solution: "We designed non-traditional outreach campaigns including voicemail drops and targeted email campaigns for high-conversion.",
    },
    CaseStudy {
        number: "05",
        title: "Window Washing Co",
        industry: "Local Services",
        before: Metric { value: "$4,500", label: "struggling" },
        after: Metric { value: "$50K+", label: "revenue" },
        highlight: "10x ROAS",
        challenge: "Struggling to make Facebook ads profitable with costs adding up and little return. Needed a simple, effective strategy.",
        solution: "We built a single high-performing Facebook ad that ran profitably for over a year, cutting cost per lead in half.",
    },
    CaseStudy {
        number: "06",
        title: "Google Ads Coaching",
        industry: "Education",
        before: Metric { value: "0", label: "trained" },
        after: Metric { value: "300+", label: "entrepreneurs" },
        highlight: "400+ Hours",
        challenge: "Business owners wanted to run Google Ads but felt overwhelmed. Most wasted money on poorly structured campaigns.",
        solution: "We coached 3-5 entrepreneurs every week for 2.5-3 years, totaling 300-400+ hours of hands-on training.",
    },
];

fn before_after(study: &CaseStudy, class: &'static str) -> Html {
    html! {
        <div class={class}>
            <div>
                <p class="metric-before">{ study.before.value }</p>
                <p class="metric-label">{ study.before.label }</p>
            </div>
            <span class="metric-arrow">{"→"}</span>
            <div>
                <p class="metric-after">{ study.after.value }</p>
                <p class="metric-label">{ study.after.label }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CaseStudyModalProps {
    study: &'static CaseStudy,
    on_close: Callback<()>,
}

#[function_component(CaseStudyModal)]
fn case_study_modal(props: &CaseStudyModalProps) -> Html {
    let study = props.study;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop dark" onclick={close.clone()}>
            <div class="modal-panel case-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="case-modal-head">
                    <button class="modal-close" onclick={close.clone()}>{"✕"}</button>
                    <span class="case-modal-number">{ study.number }</span>
                    <div class="case-modal-title">
                        <span class="case-industry">{ study.industry }</span>
                        <h3>{ study.title }</h3>
                    </div>
                </div>
                <div class="case-modal-body">
                    { before_after(study, "case-modal-metrics") }
                    <div class="case-modal-highlight">
                        <span>{ study.highlight }</span>
                    </div>
                    <div class="case-modal-story">
                        <div>
                            <h4>{"The Challenge"}</h4>
                            <p>{ study.challenge }</p>
                        </div>
                        <div>
                            <h4>{"Our Solution"}</h4>
                            <p>{ study.solution }</p>
                        </div>
                    </div>
                    <a href="#contact" class="case-modal-cta" onclick={close}>
                        {"Start Your Success Story →"}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    let (section, visible) = use_reveal(0.1);
    let selected = use_state(|| None::<&'static CaseStudy>);

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <section id="results" ref={section} class="section case-studies">
            <div class="container">
                <div class={classes!("section-intro", "centered", reveal_class(visible))}>
                    <p class="eyebrow">{"Case Studies"}</p>
                    <h2 class="section-title bold">
                        {"Real Results. "}
                        <HighlightedText>{"Measurable Growth."}</HighlightedText>
                    </h2>
                    <p class="section-lead">{"See the transformation we've driven for our clients."}</p>
                </div>

                <div class="case-grid">
                    { for CASE_STUDIES.iter().enumerate().map(|(index, study)| {
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| {
                                debug!("Opening case study {}", study.number);
                                selected.set(Some(study))
                            })
                        };
                        html! {
                            <div
                                key={study.number}
                                class={classes!("case-card", reveal_class(visible))}
                                style={format!("transition-delay: {}ms;", (index + 1) * 80)}
                                {onclick}
                            >
                                <span class="case-number">{ study.number }</span>
                                <div class="case-content">
                                    <span class="case-industry">{ study.industry }</span>
                                    <h3>{ study.title }</h3>
                                    { before_after(study, "case-metrics") }
                                    <div class="case-footer">
                                        <span class="case-highlight">{ study.highlight }</span>
                                        <span class="case-more">{"Read more →"}</span>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>

            if let Some(study) = *selected {
                <CaseStudyModal {study} {on_close} />
            }

            <style>
                {r#"
                .case-studies {
                    background: #0a0a0a;
                }
                .case-studies .eyebrow { color: #737373; }
                .case-studies .section-title { color: white; }
                .case-studies .section-lead { color: #a3a3a3; }
                .case-grid {
                    display: grid;
                    gap: 1.5rem;
                }
                @media (min-width: 768px) {
                    .case-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .case-grid { grid-template-columns: repeat(3, 1fr); }
                }
                .case-card {
                    position: relative;
                    height: 100%;
                    padding: 2rem;
                    border: 1px solid #262626;
                    border-radius: 1rem;
                    background: #171717;
                    cursor: pointer;
                }
                .case-card.is-visible:hover {
                    transform: translateY(-8px);
                    border-color: #404040;
                    background: #1f1f1f;
                }
                .case-number {
                    position: absolute;
                    top: 1rem;
                    right: 1.5rem;
                    font-size: 6rem;
                    font-weight: 700;
                    line-height: 1;
                    color: #262626;
                    user-select: none;
                }
                .case-content {
                    position: relative;
                    z-index: 1;
                }
                .case-industry {
                    display: block;
                    margin-bottom: 1.5rem;
                    font-size: 0.75rem;
                    font-weight: 500;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    color: #737373;
                }
                .case-content h3 {
                    margin: 0 0 1.5rem;
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: white;
                }
                .case-metrics {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                    padding-bottom: 1.5rem;
                    border-bottom: 1px solid #262626;
                }
                .case-metrics > div { flex: 1; }
                .metric-before, .metric-after {
                    margin: 0;
                    font-size: 1.5rem;
                    font-weight: 600;
                }
                .metric-before { color: #737373; }
                .metric-after { color: white; }
                .metric-label {
                    margin: 0.25rem 0 0;
                    font-size: 0.75rem;
                    color: #525252;
                }
                .metric-arrow { color: #525252; }
                .case-footer {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .case-highlight {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: white;
                }
                .case-more {
                    font-size: 0.875rem;
                    color: #737373;
                    transition: color 0.3s;
                }
                .case-card:hover .case-more { color: white; }
                .case-modal {
                    max-width: 42rem;
                    background: #171717;
                    border: 1px solid #262626;
                    color: white;
                }
                .case-modal-head {
                    position: relative;
                    padding: 2rem 2rem 0;
                }
                .case-modal-number {
                    font-size: 120px;
                    font-weight: 700;
                    line-height: 1;
                    color: #262626;
                }
                .case-modal-title {
                    position: relative;
                    z-index: 1;
                    margin-top: -40px;
                }
                .case-modal-title .case-industry { margin-bottom: 0.5rem; }
                .case-modal-title h3 {
                    margin: 0;
                    font-size: 1.875rem;
                    font-weight: 700;
                }
                .case-modal-body { padding: 2rem; }
                .case-modal-metrics {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    padding: 1.5rem;
                    margin-bottom: 2rem;
                    text-align: center;
                    border: 1px solid #262626;
                    border-radius: 0.75rem;
                    background: rgba(38,38,38,0.5);
                }
                .case-modal-metrics .metric-before,
                .case-modal-metrics .metric-after {
                    font-size: 1.875rem;
                    font-weight: 700;
                }
                .case-modal-highlight {
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .case-modal-highlight span {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    border-radius: 999px;
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #171717;
                    background: white;
                }
                .case-modal-story {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }
                .case-modal-story h4 {
                    margin: 0 0 0.75rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                }
                .case-modal-story p {
                    margin: 0;
                    color: #a3a3a3;
                    line-height: 1.7;
                }
                .case-modal-cta {
                    display: flex;
                    justify-content: center;
                    width: 100%;
                    padding: 1rem 0;
                    border-radius: 0.75rem;
                    font-weight: 600;
                    color: #171717;
                    background: white;
                    text-decoration: none;
                }
                "#}
            </style>
        </section>
    }
}
