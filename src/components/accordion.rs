use yew::prelude::*;

/// At most one panel open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn toggle(self, index: usize) -> Self {
        if self.open == Some(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }

    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open(self) -> Option<usize> {
        self.open
    }
}

#[derive(Clone, PartialEq)]
pub struct AccordionItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct AccordionListProps {
    pub items: &'static [AccordionItem],
}

#[function_component(AccordionList)]
pub fn accordion_list(props: &AccordionListProps) -> Html {
    let state = use_state(Accordion::default);

    html! {
        <div class="accordion">
            { for props.items.iter().enumerate().map(|(index, item)| {
                let open = state.is_open(index);
                let onclick = {
                    let state = state.clone();
                    Callback::from(move |_: MouseEvent| state.set(state.toggle(index)))
                };
                html! {
                    <div class="accordion-item" key={index}>
                        <button class="accordion-question" {onclick} aria-expanded={open.to_string()}>
                            <span>{ item.question }</span>
                            <span class={classes!("accordion-icon", open.then(|| "open"))}>{"+"}</span>
                        </button>
                        <div class={classes!("accordion-answer", open.then(|| "open"))}>
                            <p>{ item.answer }</p>
                        </div>
                    </div>
                }
            }) }
            <style>
                {r#"
                .accordion-item {
                    border-bottom: 1px solid var(--border);
                }
                .accordion-question {
                    width: 100%;
                    padding: 1.5rem 0;
                    display: flex;
                    align-items: flex-start;
                    justify-content: space-between;
                    gap: 1.5rem;
                    text-align: left;
                    background: none;
                    border: none;
                    color: var(--foreground);
                    font-size: 1.125rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                .accordion-question:hover span:first-child {
                    opacity: 0.7;
                }
                .accordion-icon {
                    font-size: 1.5rem;
                    line-height: 1;
                    flex-shrink: 0;
                    transition: transform 0.3s;
                }
                .accordion-icon.open {
                    transform: rotate(45deg);
                }
                .accordion-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.5s ease-in-out;
                }
                .accordion-answer.open {
                    max-height: 24rem;
                    opacity: 1;
                }
                .accordion-answer p {
                    color: var(--muted-foreground);
                    line-height: 1.7;
                    padding: 0 3rem 1.5rem 0;
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
    fn starts_closed() {
        let acc = Accordion::default();
        assert_eq!(acc.open(), None);
        assert!(!acc.is_open(0));
    }

    #[test]
    fn opening_another_closes_the_first() {
        let acc = Accordion::default().toggle(1).toggle(3);
        assert!(acc.is_open(3));
        assert!(!acc.is_open(1));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        let acc = Accordion::default().toggle(2).toggle(2);
        assert_eq!(acc.open(), None);
    }

    #[test]
    fn never_more_than_one_open() {
        let mut acc = Accordion::default();
        for index in [0, 4, 4, 1, 2, 2, 0] {
            acc = acc.toggle(index);
            assert!((0..5).filter(|i| acc.is_open(*i)).count() <= 1);
        }
    }
}
