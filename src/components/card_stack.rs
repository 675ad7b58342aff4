use log::debug;
use yew::prelude::*;

pub struct BlogPost {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub slug: &'static str,
}

pub static BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "5 Paid Social Mistakes Costing You Thousands",
        description: "The hidden budget killers most businesses don't catch until it's too late.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=500&fit=crop",
        slug: "#",
    },
    BlogPost {
        title: "Why Your Landing Page Isn't Converting",
        description: "The psychology behind high-converting pages and the fixes that actually work.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=500&fit=crop",
        slug: "#",
    },
    BlogPost {
        title: "The ROI of Storytelling in B2B Marketing",
        description: "How authentic narratives outperform generic campaigns every time.",
        image: "https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&h=500&fit=crop",
        slug: "#",
    },
];

/// Scale and vertical offset (px) for the front, middle and back slot.
const SLOTS: [(f64, i32); 3] = [(1.0, 12), (0.95, -16), (0.9, -44)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackCard {
    pub id: u32,
    pub post: usize,
}

/// Three visible cards, front first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardStack {
    cards: [StackCard; 3],
    next_id: u32,
    post_count: usize,
}

impl CardStack {
    pub fn new(post_count: usize) -> Self {
        let post_count = post_count.max(1);
        Self {
            cards: [
                StackCard { id: 1, post: 0 },
                StackCard { id: 2, post: 1 % post_count },
                StackCard { id: 3, post: 2 % post_count },
            ],
            next_id: 4,
            post_count,
        }
    }

    pub fn cards(&self) -> &[StackCard; 3] {
        &self.cards
    }

    /// Drops the front card and appends the post after the back one.
    pub fn advance(&self) -> Self {
        let back = self.cards[2].post;
        let incoming = StackCard {
            id: self.next_id,
            post: (back + 1) % self.post_count,
        };
        Self {
            cards: [self.cards[1], self.cards[2], incoming],
            next_id: self.next_id + 1,
            post_count: self.post_count,
        }
    }
}

fn slot_style(slot: usize) -> String {
    let slot = slot.min(SLOTS.len() - 1);
    let (scale, y) = SLOTS[slot];
    format!(
        "z-index: {}; transform: translateX(-50%) translateY({}px) scale({});",
        SLOTS.len() - slot,
        y,
        scale
    )
}

#[function_component(CardStackView)]
pub fn card_stack_view() -> Html {
    let stack = use_state(|| CardStack::new(BLOG_POSTS.len()));

    let on_next = {
        let stack = stack.clone();
        Callback::from(move |_: MouseEvent| {
            let next = stack.advance();
            debug!("Card stack front is now post {}", next.cards()[0].post);
            stack.set(next);
        })
    };

    html! {
        <div class="card-stack">
            <div class="card-stack-frame">
                { for stack.cards().iter().enumerate().map(|(slot, card)| {
                    let post = &BLOG_POSTS[card.post];
                    html! {
                        <div class="stack-card" key={card.id} style={slot_style(slot)}>
                            <div class="stack-card-image">
                                <img src={post.image} alt={post.title} />
                            </div>
                            <div class="stack-card-body">
                                <div class="stack-card-text">
                                    <span class="stack-card-title">{ post.title }</span>
                                    <span class="stack-card-description">{ post.description }</span>
                                </div>
                                <a class="stack-card-read" href={post.slug}>{"Read ›"}</a>
                            </div>
                        </div>
                    }
                }) }
            </div>
            <div class="card-stack-controls">
                <button class="card-stack-next" onclick={on_next}>{"Next Article →"}</button>
            </div>
            <style>
                {r#"
                .card-stack {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    width: 100%;
                    padding-top: 0.5rem;
                }
                .card-stack-frame {
                    position: relative;
                    height: 380px;
                    width: 100%;
                    max-width: 644px;
                    overflow: hidden;
                }
                .stack-card {
                    position: absolute;
                    left: 50%;
                    bottom: 0;
                    width: 324px;
                    height: 280px;
                    padding: 0.25rem;
                    border: 1px solid var(--border);
                    border-bottom: none;
                    border-radius: 0.75rem 0.75rem 0 0;
                    background: var(--card);
                    box-shadow: 0 10px 25px rgba(0,0,0,0.15);
                    overflow: hidden;
                    transition: transform 1s cubic-bezier(0.22, 1, 0.36, 1);
                    will-change: transform;
                }
                @media (min-width: 640px) {
                    .stack-card { width: 512px; }
                }
                .stack-card-image {
                    height: 200px;
                    border-radius: 0.75rem;
                    overflow: hidden;
                }
                .stack-card-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    user-select: none;
                }
                .stack-card-body {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 0.5rem;
                    padding: 1rem 0.75rem 1.5rem;
                }
                .stack-card-text {
                    display: flex;
                    flex-direction: column;
                    min-width: 0;
                }
                .stack-card-title {
                    font-weight: 500;
                    white-space: nowrap;
                    overflow: hidden;
                    text-overflow: ellipsis;
                }
                .stack-card-description {
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                }
                .stack-card-read {
                    flex-shrink: 0;
                    padding: 0.6rem 1rem;
                    border-radius: 999px;
                    background: var(--foreground);
                    color: var(--background);
                    font-size: 0.875rem;
                    text-decoration: none;
                }
                .card-stack-controls {
                    width: 100%;
                    display: flex;
                    justify-content: center;
                    border-top: 1px solid var(--border);
                    padding: 1rem 0;
                }
                .card-stack-next {
                    height: 2.25rem;
                    padding: 0 1rem;
                    border: 1px solid var(--border);
                    border-radius: 0.5rem;
                    background: var(--background);
                    color: var(--foreground);
                    font-weight: 500;
                    cursor: pointer;
                }
                .card-stack-next:active {
                    transform: scale(0.98);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_first_three_posts() {
        let stack = CardStack::new(3);
        let posts: Vec<usize> = stack.cards().iter().map(|c| c.post).collect();
        assert_eq!(posts, vec![0, 1, 2]);
    }

    #[test]
    fn advance_rotates_posts_with_fresh_ids() {
        let stack = CardStack::new(3).advance();
        let posts: Vec<usize> = stack.cards().iter().map(|c| c.post).collect();
        let ids: Vec<u32> = stack.cards().iter().map(|c| c.id).collect();
        assert_eq!(posts, vec![1, 2, 0]);
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn ids_stay_unique_over_many_rotations() {
        let mut stack = CardStack::new(BLOG_POSTS.len());
        for _ in 0..10 {
            stack = stack.advance();
            let c = stack.cards();
            assert!(c[0].id < c[1].id && c[1].id < c[2].id);
            assert!(c.iter().all(|card| card.post < BLOG_POSTS.len()));
        }
        assert_eq!(stack.cards()[0].post, 10 % 3);
    }

    #[test]
    fn slot_styles_stack_front_on_top() {
        assert!(slot_style(0).starts_with("z-index: 3;"));
        assert!(slot_style(2).contains("scale(0.9)"));
        assert_eq!(slot_style(7), slot_style(2));
    }

    #[test]
    fn slots_past_the_back_share_its_depth() {
        for slot in 3..10 {
            assert!(slot_style(slot).starts_with("z-index: 1;"));
        }
    }
}
