use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::components::book_call_button::{BookCallButton, ButtonVariant};
use crate::components::testimonial_card::{Industry, Testimonial, TestimonialCard, TestimonialModal};
use crate::reveal::{use_reveal, RevealAction, RevealSet};

const CARD_STAGGER_MS: u32 = 100;

static TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "Brian Rhinehart, CEM",
        title: "Director of Marketing",
        company: "Healthcare Organization",
        quote: "Partnering with Wake has been a game-changer for our paid social strategy and because of him we've consistently outperformed health industry benchmarks. His expertise in full-funnel optimization and tracking has allowed us to reach tens of millions of people driving hundreds of thousands of content visits and high-quality leads across multiple platforms: Meta, TikTok, and LinkedIn. Wake's data-driven approach ensures our creative and messaging not only resonates but delivers measurable results. Plus, Wake is down to earth and so easy to work with, we're so grateful to have him as part of our extended team.",
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face",
        rating: 5.0,
        industry: Industry::Healthcare,
    },
    Testimonial {
        name: "Nicole Bazzinotti",
        title: "VP, Marketing",
        company: "Healthcare Organization",
        quote: "I've had the pleasure of working with Wake both in my current organization and previously, and I can confidently say he's an invaluable partner. Since joining us at the beginning of the year, Wake has elevated our competitive paid social presence and consistently brings fresh, creative ideas to the table. His dedication to the work is clear, he's proactive, thoughtful, and always looking for ways to help us grow. Beyond his professional strengths, Wake is simply a genuine and kind human being.",
        avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&h=150&fit=crop&crop=face",
        rating: 5.0,
        industry: Industry::Healthcare,
    },
    Testimonial {
        name: "Johanna H.",
        title: "Entrepreneur",
        company: "Small Business Owner",
        quote: "Wake has been so helpful with helping me set up my first Google Ad. I was a bit intimidated by the whole process, and through his 1:1 coaching, I have a much better grasp on getting my Ads going. I am grateful for his expertise and his willingness to help!",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face",
        rating: 5.0,
        industry: Industry::Business,
    },
    Testimonial {
        name: "Jeremy Thompson",
        title: "Owner & Operator",
        company: "Window Washing Company",
        quote: "Wake pretty much taught me everything I know. Once we got that first ad going, I didn't even have to touch it for a year and a half. One change later, and my costs dropped in half.",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
        rating: 5.0,
        industry: Industry::HomeServices,
    },
    Testimonial {
        name: "Gavin",
        title: "Owner",
        company: "Rain Roofing Pros",
        quote: "What surprised me most was the conversion rates from our campaigns and the constant leads we could distribute to my other reps. I'd never seen anything like it.",
        avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150&h=150&fit=crop&crop=face",
        rating: 5.0,
        industry: Industry::Roofing,
    },
];

const STATS: [(&str, &str); 3] = [("50+", "Happy Clients"), ("340%", "Avg ROI"), ("5.0", "Rating")];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let (section, section_visible) = use_reveal(0.1);
    let cards = use_reducer_eq(RevealSet::default);
    let timers = use_mut_ref(Vec::<Timeout>::new);
    let selected = use_state(|| None::<&'static Testimonial>);

    {
        let dispatcher = cards.dispatcher();
        let timers = timers.clone();
        use_effect_with_deps(
            move |visible| {
                if *visible {
                    debug!("Testimonials in view, staggering {} cards", TESTIMONIALS.len());
                    let mut pending = timers.borrow_mut();
                    for index in 0..TESTIMONIALS.len() {
                        let dispatcher = dispatcher.clone();
                        pending.push(Timeout::new(index as u32 * CARD_STAGGER_MS, move || {
                            dispatcher.dispatch(RevealAction::Enter(index))
                        }));
                    }
                }
                move || timers.borrow_mut().clear()
            },
            section_visible,
        );
    }

    let on_expand = {
        let selected = selected.clone();
        Callback::from(move |t: &'static Testimonial| selected.set(Some(t)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <section ref={section} class="section testimonials">
            <div class="testimonials-backdrop"></div>
            <div class="container testimonials-inner">
                <div class="testimonials-head">
                    <div class="testimonials-title">
                        <div class="live-tag">
                            <span class="live-dot"></span>
                            <span>{"Client Love"}</span>
                        </div>
                        <h2>
                            {"Relationships "}
                            <span class="accent-text">{"> Revenue"}</span>
                        </h2>
                        <p>{"Because great marketing starts with trust."}</p>
                    </div>
                    <div class="stat-pills">
                        { for STATS.iter().map(|(value, label)| html! {
                            <div class="stat-pill" key={*label}>
                                <span class="stat-pill-value">{ *value }</span>
                                <span class="stat-pill-label">{ *label }</span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="bento">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <TestimonialCard
                            key={testimonial.name}
                            {testimonial}
                            featured={index == 0}
                            visible={cards.is_visible(index)}
                            {index}
                            on_expand={on_expand.clone()}
                        />
                    }) }
                </div>

                <div class="testimonials-ctas">
                    <a href="#results" class="outline-button">{"See Results"}</a>
                    <BookCallButton variant={ButtonVariant::Compact} label="Book a Call" />
                </div>
            </div>

            <TestimonialModal testimonial={*selected} {on_close} />

            <style>
                {r#"
                .testimonials {
                    position: relative;
                    overflow: hidden;
                }
                .testimonials-backdrop {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, color-mix(in srgb, var(--secondary) 30%, transparent), var(--background), var(--background));
                }
                .testimonials-inner {
                    position: relative;
                    z-index: 10;
                }
                .testimonials-head {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    margin-bottom: 2.5rem;
                }
                @media (min-width: 768px) {
                    .testimonials-head {
                        flex-direction: row;
                        align-items: flex-end;
                        justify-content: space-between;
                    }
                }
                .testimonials-title { max-width: 36rem; }
                .testimonials-title h2 {
                    margin: 0 0 0.5rem;
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 700;
                    letter-spacing: -0.025em;
                }
                .testimonials-title p { margin: 0; color: var(--muted-foreground); }
                .live-tag {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                    padding: 0.375rem 1rem;
                    border: 1px solid var(--border);
                    border-radius: 999px;
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                    background: color-mix(in srgb, var(--card) 50%, transparent);
                }
                .live-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #22c55e;
                    animation: pulse 2s infinite;
                }
                .stat-pills { display: flex; gap: 0.75rem; }
                .stat-pill {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 0.75rem 1.25rem;
                    border: 1px solid var(--border);
                    border-radius: 0.75rem;
                    background: var(--card);
                    transition: all 0.3s;
                }
                .stat-pill:hover { box-shadow: 0 10px 15px rgba(0,0,0,0.1); }
                .stat-pill-value { font-size: 1.75rem; font-weight: 700; color: var(--accent); }
                .stat-pill-label { font-size: 0.75rem; color: var(--muted-foreground); }
                .bento {
                    display: grid;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                @media (min-width: 768px) {
                    .bento { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .bento { grid-template-columns: repeat(3, 1fr); }
                }
                .testimonial-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    height: 100%;
                    padding: 1.25rem;
                    border: 1px solid var(--border);
                    border-radius: 0.75rem;
                    background: var(--card);
                    opacity: 0;
                    transform: translateY(2rem);
                    transition: all 0.5s;
                }
                .testimonial-card.is-visible { opacity: 1; transform: none; }
                .testimonial-card.is-visible:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 20px 25px color-mix(in srgb, var(--accent) 5%, transparent);
                }
                @media (min-width: 768px) {
                    .testimonial-card.featured { grid-column: span 2; }
                }
                .testimonial-card.featured {
                    border-color: color-mix(in srgb, var(--accent) 20%, transparent);
                    background: linear-gradient(135deg, color-mix(in srgb, var(--accent) 5%, transparent), var(--card));
                }
                .featured-badge {
                    position: absolute;
                    top: -0.75rem;
                    left: 1rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    font-weight: 500;
                    color: var(--accent-foreground);
                    background: var(--accent);
                }
                .testimonial-head {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }
                .testimonial-avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    object-fit: cover;
                    box-shadow: 0 0 0 2px color-mix(in srgb, var(--accent) 20%, transparent);
                }
                .testimonial-avatar.large { width: 5rem; height: 5rem; }
                .testimonial-who { flex: 1; min-width: 0; }
                .testimonial-who p { margin: 0; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
                .testimonial-who h3 { display: flex; align-items: center; gap: 0.5rem; margin: 0 0 0.25rem; }
                .testimonial-name { font-weight: 600; }
                .testimonial-title { font-size: 0.875rem; color: var(--muted-foreground); }
                .testimonial-company { font-size: 0.875rem; color: var(--accent); }
                .industry-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.25rem;
                    padding: 0.25rem 0.5rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    font-weight: 500;
                }
                .badge-rose { color: #e11d48; background: #ffe4e6; }
                .badge-blue { color: #2563eb; background: #dbeafe; }
                .badge-green { color: #16a34a; background: #dcfce7; }
                .badge-orange { color: #ea580c; background: #ffedd5; }
                .badge-gray { color: #4b5563; background: #f3f4f6; }
                .testimonial-rating {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                }
                .star { color: #d1d5db; }
                .star.filled { color: #facc15; }
                .rating-value { font-size: 0.875rem; font-weight: 500; color: var(--muted-foreground); }
                .rating-value.large { font-size: 1.125rem; font-weight: 700; color: var(--foreground); }
                .testimonial-quote {
                    flex: 1;
                    margin: 0;
                    line-height: 1.6;
                    color: color-mix(in srgb, var(--foreground) 80%, transparent);
                }
                .testimonial-card.featured .testimonial-quote { font-size: 1.0625rem; }
                .read-full {
                    margin-top: 0.75rem;
                    padding: 0;
                    border: none;
                    background: none;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--accent);
                    cursor: pointer;
                    text-align: left;
                }
                .testimonial-modal { max-width: 42rem; }
                .testimonial-modal-head {
                    position: relative;
                    padding: 1.5rem 1.5rem 1rem;
                    background: linear-gradient(135deg, color-mix(in srgb, var(--accent) 10%, transparent), transparent);
                }
                .testimonial-modal-body { padding: 0.5rem 1.5rem 1.5rem; }
                .quote-mark {
                    display: block;
                    font-size: 3rem;
                    line-height: 1;
                    color: color-mix(in srgb, var(--accent) 20%, transparent);
                }
                .testimonial-modal-body blockquote {
                    margin: 0;
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                .testimonials-ctas {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }
                @media (min-width: 640px) {
                    .testimonials-ctas { flex-direction: row; }
                }
                .outline-button {
                    padding: 0.75rem 2rem;
                    border: 1px solid var(--border);
                    border-radius: 999px;
                    font-weight: 500;
                    color: var(--foreground);
                    background: var(--background);
                    text-decoration: none;
                    transition: box-shadow 0.3s;
                }
                .outline-button:hover { box-shadow: 0 10px 15px rgba(0,0,0,0.1); }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testimonial_card::{truncate_quote, FEATURED_QUOTE_LIMIT, QUOTE_LIMIT};

    #[test]
    fn lead_quote_is_truncated_even_when_featured() {
        assert!(truncate_quote(TESTIMONIALS[0].quote, FEATURED_QUOTE_LIMIT).is_some());
    }

    #[test]
    fn short_quote_only_truncated_at_regular_limit() {
        let quote = TESTIMONIALS[4].quote;
        assert!(truncate_quote(quote, QUOTE_LIMIT).is_some());
        assert!(truncate_quote(quote, FEATURED_QUOTE_LIMIT).is_none());
    }
}
