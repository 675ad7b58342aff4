use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct VideoBackgroundProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub overlay: Classes,
}

/// Muted looping video filling its parent. Fades in once the first frame is loaded.
#[function_component(VideoBackground)]
pub fn video_background(props: &VideoBackgroundProps) -> Html {
    let video = use_node_ref();
    let loaded = use_state(|| false);

    {
        let video = video.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video.cast::<HtmlVideoElement>() {
                    dom::play_muted(&video);
                }
                || ()
            },
            (),
        );
    }

    let on_loaded = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };

    html! {
        <div class="video-background">
            <video
                ref={video}
                class={classes!("video-background-media", (*loaded).then(|| "loaded"))}
                autoplay={true}
                loop={true}
                muted={true}
                playsinline={true}
                onloadeddata={on_loaded}
            >
                <source src={props.src.clone()} type="video/mp4" />
            </video>
            <div class={classes!("video-background-overlay", props.overlay.clone())}></div>
            <style>
                {r#"
                .video-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .video-background-media {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0;
                    transition: opacity 1s;
                }
                .video-background-media.loaded {
                    opacity: 1;
                }
                .video-background-overlay {
                    position: absolute;
                    inset: 0;
                    background: color-mix(in srgb, var(--primary) 50%, transparent);
                }
                "#}
            </style>
        </div>
    }
}
