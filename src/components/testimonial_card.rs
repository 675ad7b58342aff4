use yew::prelude::*;

pub const QUOTE_LIMIT: usize = 150;
pub const FEATURED_QUOTE_LIMIT: usize = 350;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Industry {
    Healthcare,
    Business,
    HomeServices,
    Roofing,
    Other,
}

impl Industry {
    pub fn label(self) -> &'static str {
        match self {
            Industry::Healthcare => "Healthcare",
            Industry::Business | Industry::Other => "Business",
            Industry::HomeServices => "Home Services",
            Industry::Roofing => "Roofing",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Industry::Healthcare => "♥",
            Industry::Business => "💼",
            Industry::HomeServices => "🏠",
            Industry::Roofing => "🔧",
            Industry::Other => "🏢",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            Industry::Healthcare => "badge-rose",
            Industry::Business => "badge-blue",
            Industry::HomeServices => "badge-green",
            Industry::Roofing => "badge-orange",
            Industry::Other => "badge-gray",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
    pub avatar: &'static str,
    pub rating: f32,
    pub industry: Industry,
}

/// Shortens `quote` to `limit` characters plus "...". `None` when it already fits.
pub fn truncate_quote(quote: &str, limit: usize) -> Option<String> {
    if quote.chars().count() <= limit {
        return None;
    }
    let cut: String = quote.chars().take(limit).collect();
    Some(format!("{}...", cut.trim()))
}

pub fn filled_stars(rating: f32) -> usize {
    (rating.max(0.0).floor() as usize).min(5)
}

fn stars(rating: f32) -> Html {
    let filled = filled_stars(rating);
    html! {
        <span class="stars">
            { for (0..5).map(|i| html! {
                <span class={classes!("star", (i < filled).then(|| "filled"))}>{"★"}</span>
            }) }
        </span>
    }
}

fn industry_badge(industry: Industry) -> Html {
    html! {
        <span class={classes!("industry-badge", industry.badge_class())}>
            <span>{ industry.icon() }</span>
            <span class="industry-label">{ industry.label() }</span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: &'static Testimonial,
    #[prop_or_default]
    pub featured: bool,
    pub visible: bool,
    pub index: usize,
    pub on_expand: Callback<&'static Testimonial>,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = props.testimonial;
    let limit = if props.featured { FEATURED_QUOTE_LIMIT } else { QUOTE_LIMIT };
    let short = truncate_quote(t.quote, limit);
    let long = short.is_some();
    let shown = short.unwrap_or_else(|| t.quote.to_string());

    let on_read = {
        let on_expand = props.on_expand.clone();
        Callback::from(move |_: MouseEvent| on_expand.emit(t))
    };

    html! {
        <div
            class={classes!(
                "testimonial-card",
                props.featured.then(|| "featured"),
                props.visible.then(|| "is-visible")
            )}
            style={format!("transition-delay: {}ms;", props.index * 100)}
        >
            if props.featured {
                <div class="featured-badge">{"Featured Review"}</div>
            }
            <div class="testimonial-head">
                <img class="testimonial-avatar" src={t.avatar} alt={t.name} />
                <div class="testimonial-who">
                    <p class="testimonial-name">{ t.name }</p>
                    <p class="testimonial-title">{ t.title }</p>
                    <p class="testimonial-company">{ t.company }</p>
                </div>
                { industry_badge(t.industry) }
            </div>
            <div class="testimonial-rating">
                { stars(t.rating) }
                <span class="rating-value">{ format!("{:.1}", t.rating) }</span>
            </div>
            <blockquote class="testimonial-quote">{ format!("\"{}\"", shown) }</blockquote>
            if long {
                <button class="read-full" onclick={on_read}>{"Read Full →"}</button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialModalProps {
    pub testimonial: Option<&'static Testimonial>,
    pub on_close: Callback<()>,
}

#[function_component(TestimonialModal)]
pub fn testimonial_modal(props: &TestimonialModalProps) -> Html {
    let Some(t) = props.testimonial else {
        return html! {};
    };
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-panel testimonial-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="testimonial-modal-head">
                    <button class="modal-close" onclick={close}>{"✕"}</button>
                    <div class="testimonial-head">
                        <img class="testimonial-avatar large" src={t.avatar} alt={t.name} />
                        <div class="testimonial-who">
                            <h3>{ t.name } { industry_badge(t.industry) }</h3>
                            <p class="testimonial-title">{ t.title }</p>
                            <p class="testimonial-company">{ t.company }</p>
                        </div>
                    </div>
                    <div class="testimonial-rating">
                        <span class="rating-value large">{ format!("{:.1}", t.rating) }</span>
                        { stars(t.rating) }
                    </div>
                </div>
                <div class="testimonial-modal-body">
                    <span class="quote-mark">{"“"}</span>
                    <blockquote>{ format!("\"{}\"", t.quote) }</blockquote>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_quotes_are_left_alone() {
        assert_eq!(truncate_quote("Great work.", QUOTE_LIMIT), None);
        let exact = "x".repeat(QUOTE_LIMIT);
        assert_eq!(truncate_quote(&exact, QUOTE_LIMIT), None);
    }

    #[test]
    fn long_quotes_get_ellipsis() {
        let quote = "word ".repeat(60);
        let short = truncate_quote(&quote, QUOTE_LIMIT).unwrap();
        assert!(short.ends_with("..."));
        assert!(!short.ends_with(" ..."));
        assert!(short.chars().count() <= QUOTE_LIMIT + 3);
    }

    #[test]
    fn featured_limit_is_larger() {
        let quote = "a".repeat(200);
        assert!(truncate_quote(&quote, QUOTE_LIMIT).is_some());
        assert!(truncate_quote(&quote, FEATURED_QUOTE_LIMIT).is_none());
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let quote = "é".repeat(151);
        let short = truncate_quote(&quote, QUOTE_LIMIT).unwrap();
        assert_eq!(short.chars().count(), QUOTE_LIMIT + 3);
    }

    #[test]
    fn stars_floor_and_cap() {
        assert_eq!(filled_stars(5.0), 5);
        assert_eq!(filled_stars(4.7), 4);
        assert_eq!(filled_stars(9.0), 5);
        assert_eq!(filled_stars(-1.0), 0);
    }

    #[test]
    fn other_industry_reads_as_business() {
        assert_eq!(Industry::Other.label(), Industry::Business.label());
    }
}
