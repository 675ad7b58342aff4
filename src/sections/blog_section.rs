use yew::prelude::*;

use crate::components::card_stack::CardStackView;

#[function_component(BlogSection)]
pub fn blog_section() -> Html {
    html! {
        <section id="blog" class="section tinted">
            <div class="container">
                <div class="section-intro centered">
                    <p class="eyebrow">{"Latest Articles"}</p>
                    <h2 class="blog-title">{"Insights"}</h2>
                    <p class="section-lead">
                        {"Strategies, tips, and lessons learned from helping businesses grow through authentic marketing."}
                    </p>
                </div>
                <CardStackView />
            </div>
            <style>
                {r#"
                .blog-title {
                    margin: 0 0 1rem;
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    letter-spacing: -0.025em;
                }
                "#}
            </style>
        </section>
    }
}
