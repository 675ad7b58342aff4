use yew::prelude::*;

use crate::components::highlighted_text::HighlightedText;
use crate::reveal::{reveal_class, use_reveal};

#[function_component(Problem)]
pub fn problem() -> Html {
    let (section, visible) = use_reveal(0.2);

    html! {
        <section ref={section} class="section tinted">
            <div class="container">
                <div class="problem-body">
                    <p class="eyebrow">{"The Problem We Solve"}</p>
                    <h2 class={classes!("section-title", reveal_class(visible))}>
                        {"Most Agencies Want to Rebuild Everything. "}
                        <HighlightedText>{"We Don't."}</HighlightedText>
                    </h2>
                    <div class={classes!("problem-copy", reveal_class(visible))}>
                        <p>
                            {"Established companies with dedicated marketing budgets face a frustrating reality: agencies want to tear \
                              everything down and start fresh. They dismiss your existing campaigns, ignore your institutional \
                              knowledge, and charge premium fees to \"reimagine your brand.\""}
                        </p>
                        <p class="problem-turn">{"We take a different approach."}</p>
                        <p>
                            {"MAW Marketing specializes in optimization over reconstruction. We audit your current spend, identify \
                              what's already working, eliminate the waste, and systematically improve performance, all while training \
                              your team to maintain the systems we build together."}
                        </p>
                        <p>
                            {"The result? Better ROAS, predictable lead flow, and marketing infrastructure that actually scales with \
                              your business."}
                        </p>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .problem-body {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .problem-copy {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: var(--muted-foreground);
                    transition-delay: 200ms;
                }
                .problem-copy p {
                    margin: 0;
                }
                .problem-turn {
                    color: var(--foreground);
                    font-weight: 500;
                }
                "#}
            </style>
        </section>
    }
}
