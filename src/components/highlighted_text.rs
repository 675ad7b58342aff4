use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HighlightedTextProps {
    pub children: Children,
}

/// Accent-coloured italic run used inside section headings.
#[function_component(HighlightedText)]
pub fn highlighted_text(props: &HighlightedTextProps) -> Html {
    html! {
        <span class="highlighted-text">
            { for props.children.iter() }
        </span>
    }
}
