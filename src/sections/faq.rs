use yew::prelude::*;

use crate::components::accordion::{AccordionItem, AccordionList};

static FAQS: [AccordionItem; 5] = [
    AccordionItem {
        question: "What happens during the strategy session?",
        answer: "We'll discuss your business goals, current marketing challenges, and identify opportunities for growth. You'll receive specific recommendations regardless of whether we work together.",
    },
    AccordionItem {
        question: "Is there any cost for the initial consultation?",
        answer: "No, the 30-minute strategy session is completely free. It's designed to provide you with value while helping us understand if we're a good fit to work together.",
    },
    AccordionItem {
        question: "How quickly can we start working together?",
        answer: "Depending on the service, we can typically start within 1-2 weeks of our initial conversation. Full funnel projects may have a longer setup time.",
    },
    AccordionItem {
        question: "What industries do you specialize in?",
        answer: "We have deep experience in behavioral health, healthcare, education, automotive/motorsports, and home services. Our optimization methodology applies across industries, but these verticals benefit from our compliance knowledge and conversion pattern expertise.",
    },
    AccordionItem {
        question: "Do you replace our existing marketing team?",
        answer: "No. We train and support your existing team rather than replacing them. Our goal is building internal capabilities while delivering immediate performance improvements.",
    },
];

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="section">
            <div class="container">
                <div class="section-intro">
                    <p class="eyebrow">{"FAQ"}</p>
                    <h2 class="section-title">{"Questions & Answers"}</h2>
                </div>
                <div class="faq-list">
                    <AccordionList items={&FAQS[..]} />
                </div>
            </div>
            <style>
                {".faq-list { max-width: 48rem; }"}
            </style>
        </section>
    }
}
