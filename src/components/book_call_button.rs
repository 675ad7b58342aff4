use log::warn;
use yew::prelude::*;

use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Compact,
    /// Sits in the floating header; colours follow the header's scroll state.
    Header,
}

impl ButtonVariant {
    pub fn is_compact(self) -> bool {
        matches!(self, ButtonVariant::Compact | ButtonVariant::Header)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub border: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

pub fn palette(variant: ButtonVariant, hovered: bool, scrolled: bool) -> Palette {
    match (variant, hovered, scrolled) {
        (ButtonVariant::Header, true, true) => Palette {
            border: "rgba(255,255,255,0.9)",
            background: "rgba(255,255,255,1)",
            text: "var(--accent)",
        },
        (ButtonVariant::Header, true, false) => Palette {
            border: "var(--accent)",
            background: "var(--accent)",
            text: "var(--accent-foreground)",
        },
        (ButtonVariant::Header, false, true) => Palette {
            border: "rgba(255,255,255,0.3)",
            background: "transparent",
            text: "white",
        },
        (ButtonVariant::Header, false, false) => Palette {
            border: "var(--border)",
            background: "transparent",
            text: "white",
        },
        (_, true, _) => Palette {
            border: "var(--foreground)",
            background: "var(--foreground)",
            text: "var(--background)",
        },
        (_, false, _) => Palette {
            border: "var(--border)",
            background: "transparent",
            text: "var(--foreground)",
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct BookCallButtonProps {
    #[prop_or(AttrValue::Static("#contact"))]
    pub href: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or(true)]
    pub show_lines: bool,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or(AttrValue::Static("Book a call"))]
    pub label: AttrValue,
    #[prop_or_default]
    pub scrolled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
}

#[function_component(BookCallButton)]
pub fn book_call_button(props: &BookCallButtonProps) -> Html {
    let hovered = use_state(|| false);

    let on_click = {
        let href = props.href.clone();
        let extra = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(extra) = &extra {
                extra.emit(());
            }
            if href.starts_with("http") {
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.open_with_url_and_target(&href, "_blank") {
                        warn!("Could not open booking page: {:?}", e);
                    }
                }
            } else {
                dom::scroll_to_section(&href);
            }
        })
    };
    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let compact = props.variant.is_compact();
    let lines = props.show_lines && !compact;
    let colors = palette(props.variant, *hovered, props.scrolled);
    let shell_style = format!(
        "border-color: {}; background-color: {};",
        colors.border, colors.background
    );
    let text_style = format!("color: {};", colors.text);
    let line_style = if *hovered {
        "transform: scaleX(0); opacity: 0;"
    } else {
        "transform: scaleX(1); opacity: 0.5;"
    };

    html! {
        <div class={classes!("book-call", (!compact).then(|| "book-call--stacked"))}>
            <button
                class={classes!("book-call-trigger", (*hovered).then(|| "hovered"))}
                onclick={on_click}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
            >
                if lines {
                    <span class="book-call-line" style={line_style}></span>
                }
                <span
                    class={classes!("book-call-pill", if compact { "compact" } else { "full" })}
                    style={shell_style}
                >
                    <span class="book-call-icon" style={text_style.clone()}>{"📅"}</span>
                    <span class="book-call-label" style={text_style.clone()}>{ props.label.clone() }</span>
                    <span class="book-call-arrow" style={text_style}>{"↗"}</span>
                </span>
                if lines {
                    <span class="book-call-line" style={line_style}></span>
                }
            </button>
            if let Some(subtitle) = props.subtitle.as_ref().filter(|_| !compact) {
                <span class="book-call-subtitle">{ subtitle.clone() }</span>
            }
            <style>
                {r#"
                .book-call {
                    display: flex;
                    align-items: center;
                }
                .book-call--stacked {
                    flex-direction: column;
                    gap: 1rem;
                }
                .book-call-trigger {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    transition: transform 0.5s;
                }
                .book-call-trigger.hovered {
                    transform: scale(1.02);
                }
                .book-call-line {
                    height: 1px;
                    width: 3rem;
                    background: var(--border);
                    transition: all 0.5s;
                }
                .book-call-pill {
                    display: flex;
                    align-items: center;
                    border: 1px solid;
                    border-radius: 999px;
                    transition: all 0.5s;
                }
                .book-call-pill.full {
                    gap: 0.75rem;
                    padding: 1rem 2rem;
                    font-size: 1rem;
                }
                .book-call-pill.compact {
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    font-size: 0.75rem;
                }
                .book-call-trigger.hovered .book-call-arrow {
                    transform: translate(2px, -2px) scale(1.1);
                }
                .book-call-arrow {
                    transition: transform 0.5s;
                }
                .book-call-subtitle {
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: var(--muted-foreground);
                    opacity: 0.5;
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
    fn header_and_compact_are_compact() {
        assert!(ButtonVariant::Header.is_compact());
        assert!(ButtonVariant::Compact.is_compact());
        assert!(!ButtonVariant::Default.is_compact());
    }

    #[test]
    fn header_hover_inverts_when_scrolled() {
        let glass = palette(ButtonVariant::Header, true, false);
        let solid = palette(ButtonVariant::Header, true, true);
        assert_eq!(glass.background, "var(--accent)");
        assert_eq!(solid.background, "rgba(255,255,255,1)");
        assert_eq!(solid.text, "var(--accent)");
    }

    #[test]
    fn resting_buttons_are_transparent() {
        for variant in [ButtonVariant::Default, ButtonVariant::Compact, ButtonVariant::Header] {
            for scrolled in [false, true] {
                assert_eq!(palette(variant, false, scrolled).background, "transparent");
            }
        }
    }
}
