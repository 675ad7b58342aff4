use chrono::Utc;
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::{HtmlElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::chat::session::ChatSession;
use crate::chat::script::{self, Segment};
use crate::chat::window::{ChatSize, ChatWindow, ResizeGrip};
use crate::dom;

const AVATAR: &str = "/images/wake-ai-avatar.png";
/// Fraction of the viewport to scroll before the launcher shows up.
const APPEAR_AT: f64 = 0.4;
const BUBBLE_DELAY_MS: u32 = 1_000;
const GREETING_DELAY_MS: u32 = 1_000;

/// Simulated thinking time for a reply, 1000 to 2000 ms.
pub fn reply_delay_ms(roll: f64) -> u32 {
    1_000 + (roll.clamp(0.0, 1.0) * 1_000.0) as u32
}

/// The launcher shows once the page is scrolled past 40% of the viewport.
fn launcher_appears(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height * APPEAR_AT
}

fn random_pick(len: usize) -> usize {
    (Math::random() * len as f64) as usize
}

pub enum WakeAiMsg {
    Scrolled,
    ShowBubble,
    Open,
    Minimize,
    Close,
    ToggleExpand,
    Backdrop,
    Greet,
    Input(String),
    Send(Option<String>),
    Reply(&'static str),
    ResizeStart(i32, i32),
    ResizeMove(i32, i32),
    ResizeEnd,
}

type MouseListener = Closure<dyn FnMut(MouseEvent)>;

pub struct WakeAi {
    appeared: bool,
    bubble: bool,
    window: ChatWindow,
    session: ChatSession,
    size: ChatSize,
    grip: Option<ResizeGrip>,
    input_ref: NodeRef,
    end_ref: NodeRef,
    focus_input: bool,
    scroll_to_end: bool,
    // Scroll detaches once the launcher shows, resize once the drag ends.
    scroll_listener: Option<Closure<dyn FnMut()>>,
    resize_listeners: Option<(MouseListener, MouseListener)>,
    bubble_timer: Option<Timeout>,
    greeting_timer: Option<Timeout>,
    reply_timers: Vec<Timeout>,
}

impl WakeAi {
    fn schedule_bubble(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.bubble_timer = Some(Timeout::new(BUBBLE_DELAY_MS, move || {
            link.send_message(WakeAiMsg::ShowBubble)
        }));
    }

    // These can run from inside the listener being removed, so the closure
    // is dropped on a later tick instead of under its own call.
    fn detach_scroll(&mut self) {
        if let Some(listener) = self.scroll_listener.take() {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref()) {
                    warn!("Could not remove chat scroll listener: {:?}", e);
                }
            }
            Timeout::new(0, move || drop(listener)).forget();
        }
    }

    fn detach_resize(&mut self) {
        if let Some((on_move, on_up)) = self.resize_listeners.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
                let _ = window.remove_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref());
            }
            Timeout::new(0, move || drop((on_move, on_up))).forget();
        }
    }

    fn attach_resize(&mut self, ctx: &Context<Self>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let link = ctx.link().clone();
        let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
            link.send_message(WakeAiMsg::ResizeMove(e.client_x(), e.client_y()))
        }) as Box<dyn FnMut(MouseEvent)>);
        let link = ctx.link().clone();
        let on_up = Closure::wrap(Box::new(move |_: MouseEvent| {
            link.send_message(WakeAiMsg::ResizeEnd)
        }) as Box<dyn FnMut(MouseEvent)>);
        window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())?;
        self.resize_listeners = Some((on_move, on_up));
        Ok(())
    }

    fn view_message_body(content: &str) -> Html {
        html! {
            { for script::emphasis_segments(content).into_iter().map(|segment| match segment {
                Segment::Plain(text) => html! { { text.to_string() } },
                Segment::Strong(text) => html! { <strong>{ text.to_string() }</strong> },
            }) }
        }
    }
}

impl Component for WakeAi {
    type Message = WakeAiMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            appeared: false,
            bubble: false,
            window: ChatWindow::default(),
            session: ChatSession::new(),
            size: ChatSize::default(),
            grip: None,
            input_ref: NodeRef::default(),
            end_ref: NodeRef::default(),
            focus_input: false,
            scroll_to_end: false,
            scroll_listener: None,
            resize_listeners: None,
            bubble_timer: None,
            greeting_timer: None,
            reply_timers: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            WakeAiMsg::Scrolled => {
                if self.appeared {
                    return false;
                }
                let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                if !launcher_appears(y, dom::viewport_height()) {
                    return false;
                }
                debug!("Chat launcher appears at scroll {}", y);
                self.appeared = true;
                self.detach_scroll();
                self.schedule_bubble(ctx);
                true
            }
            WakeAiMsg::ShowBubble => {
                self.bubble_timer = None;
                self.bubble = !self.window.is_open();
                true
            }
            WakeAiMsg::Open => {
                self.window = self.window.open();
                self.bubble = false;
                self.bubble_timer = None;
                self.focus_input = true;
                if self.session.begin_greeting() {
                    let link = ctx.link().clone();
                    self.greeting_timer = Some(Timeout::new(GREETING_DELAY_MS, move || {
                        link.send_message(WakeAiMsg::Greet)
                    }));
                }
                true
            }
            WakeAiMsg::Minimize | WakeAiMsg::Close => {
                self.window = self.window.close();
                self.grip = None;
                if !self.bubble {
                    self.schedule_bubble(ctx);
                }
                true
            }
            WakeAiMsg::ToggleExpand => {
                self.window = self.window.toggle_expand();
                true
            }
            WakeAiMsg::Backdrop => {
                if self.window.is_expanded() {
                    self.window = self.window.toggle_expand();
                    return true;
                }
                false
            }
            WakeAiMsg::Greet => {
                self.greeting_timer = None;
                self.session.greet(Utc::now());
                self.scroll_to_end = true;
                true
            }
            WakeAiMsg::Input(value) => {
                self.session.set_input(value);
                true
            }
            WakeAiMsg::Send(text) => {
                let answer = match self.session.submit(text, random_pick, Utc::now()) {
                    Some(answer) => answer,
                    None => return false,
                };
                self.scroll_to_end = true;

                let delay = reply_delay_ms(Math::random());
                debug!("Chat reply scheduled in {} ms", delay);
                let link = ctx.link().clone();
                self.reply_timers.push(Timeout::new(delay, move || {
                    link.send_message(WakeAiMsg::Reply(answer))
                }));
                true
            }
            WakeAiMsg::Reply(answer) => {
                if self.session.receive(answer, Utc::now()) {
                    self.reply_timers.clear();
                }
                self.scroll_to_end = true;
                true
            }
            WakeAiMsg::ResizeStart(x, y) => {
                if self.window.is_expanded() {
                    return false;
                }
                if self.resize_listeners.is_none() {
                    if let Err(e) = self.attach_resize(ctx) {
                        warn!("Chat resize unavailable: {:?}", e);
                        return false;
                    }
                }
                self.grip = Some(self.size.grip(x, y));
                false
            }
            WakeAiMsg::ResizeMove(x, y) => match &self.grip {
                Some(grip) => {
                    let size = ChatSize::resized(grip, x, y);
                    let changed = size != self.size;
                    self.size = size;
                    changed
                }
                None => false,
            },
            WakeAiMsg::ResizeEnd => {
                self.grip = None;
                self.detach_resize();
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            let listener = Closure::wrap(Box::new(move || link.send_message(WakeAiMsg::Scrolled)) as Box<dyn FnMut()>);
            match web_sys::window() {
                Some(window) => {
                    match window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref()) {
                        Ok(()) => self.scroll_listener = Some(listener),
                        Err(e) => warn!("Chat scroll listener failed: {:?}", e),
                    }
                }
                None => warn!("No window, chat launcher stays hidden"),
            }
            ctx.link().send_message(WakeAiMsg::Scrolled);
        }

        if std::mem::take(&mut self.focus_input) {
            if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        }
        if std::mem::take(&mut self.scroll_to_end) {
            if let Some(end) = self.end_ref.cast::<HtmlElement>() {
                let mut options = ScrollIntoViewOptions::new();
                options.behavior(ScrollBehavior::Smooth);
                end.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.detach_scroll();
        self.detach_resize();
        self.bubble_timer = None;
        self.greeting_timer = None;
        self.reply_timers.clear();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.appeared {
            return html! {};
        }

        let link = ctx.link();
        let open = self.window.is_open();
        let expanded = self.window.is_expanded();
        let typing = self.session.typing();
        let can_send = self.session.can_send();

        let on_input = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            WakeAiMsg::Input(input.value())
        });
        let on_keydown = link.batch_callback(|e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                Some(WakeAiMsg::Send(None))
            } else {
                None
            }
        });
        let on_resize_start = link.callback(|e: MouseEvent| {
            e.prevent_default();
            WakeAiMsg::ResizeStart(e.client_x(), e.client_y())
        });
        let window_style = (!expanded)
            .then(|| format!("width: {}px; height: {}px;", self.size.width, self.size.height));

        html! {
            <>
                <div class={classes!("wake-launcher", open.then(|| "hidden"))}>
                    <div class={classes!("wake-bubble", (self.bubble && !open).then(|| "shown"))}>
                        <p>{"Hey! I'm Wake 👋"}</p>
                    </div>
                    <button class="wake-avatar-button" onclick={link.callback(|_| WakeAiMsg::Open)}>
                        <span class="wake-ping"></span>
                        <img src={AVATAR} alt="Chat with Wake" />
                        <span class="wake-online"></span>
                    </button>
                </div>

                <div
                    class={classes!(
                        "wake-frame",
                        if expanded { "expanded" } else { "docked" },
                        open.then(|| "open")
                    )}
                    onclick={link.callback(|_| WakeAiMsg::Backdrop)}
                >
                    <div
                        class={classes!("wake-window", expanded.then(|| "expanded"))}
                        style={window_style}
                        onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    >
                        if !expanded {
                            <div class="wake-resize" onmousedown={on_resize_start}>
                                <span></span>
                            </div>
                        }
                        <div class="wake-header">
                            <div class="wake-identity">
                                <div class="wake-header-avatar">
                                    <img src={AVATAR} alt="Wake" />
                                    <span></span>
                                </div>
                                <div>
                                    <h3>{"Wake AI ✨"}</h3>
                                    <p>{"Your friendly marketing guide"}</p>
                                </div>
                            </div>
                            <div class="wake-controls">
                                <button title="Minimize" onclick={link.callback(|_| WakeAiMsg::Minimize)}>{"–"}</button>
                                <button
                                    title={if expanded { "Shrink" } else { "Expand" }}
                                    onclick={link.callback(|_| WakeAiMsg::ToggleExpand)}
                                >
                                    { if expanded { "⤡" } else { "⤢" } }
                                </button>
                                <button title="Close" onclick={link.callback(|_| WakeAiMsg::Close)}>{"✕"}</button>
                            </div>
                        </div>

                        <div class="wake-messages">
                            { for self.session.conversation().messages().iter().map(|message| html! {
                                <div
                                    key={message.id}
                                    class={classes!("wake-row", if message.is_user() { "from-user" } else { "from-wake" })}
                                >
                                    if !message.is_user() {
                                        <img class="wake-row-avatar" src={AVATAR} alt="Wake" />
                                    }
                                    <div class="wake-message" title={message.sent_at.format("%H:%M").to_string()}>
                                        { Self::view_message_body(&message.content) }
                                    </div>
                                </div>
                            }) }
                            if typing {
                                <div class="wake-row from-wake">
                                    <img class="wake-row-avatar" src={AVATAR} alt="Wake" />
                                    <div class="wake-message wake-typing">
                                        <span style="animation-delay: 0ms"></span>
                                        <span style="animation-delay: 150ms"></span>
                                        <span style="animation-delay: 300ms"></span>
                                    </div>
                                </div>
                            }
                            if self.session.shows_quick_replies() {
                                <div class="wake-quick-replies">
                                    { for script::QUICK_REPLIES.iter().map(|(label, key)| {
                                        let label = *label;
                                        html! {
                                            <button key={*key} onclick={link.callback(move |_| WakeAiMsg::Send(Some(label.to_string())))}>
                                                { label }
                                            </button>
                                        }
                                    }) }
                                </div>
                            }
                            <div ref={self.end_ref.clone()}></div>
                        </div>

                        <div class="wake-input">
                            <div class="wake-input-row">
                                <input
                                    ref={self.input_ref.clone()}
                                    type="text"
                                    value={self.session.input().to_string()}
                                    oninput={on_input}
                                    onkeydown={on_keydown}
                                    placeholder="Ask me anything..."
                                />
                                <button
                                    class={classes!("wake-send", can_send.then(|| "ready"))}
                                    disabled={!can_send}
                                    onclick={link.callback(|_| WakeAiMsg::Send(None))}
                                >{"➤"}</button>
                            </div>
                            <p>{"Wake AI is here to help, not sell. Real answers only."}</p>
                        </div>
                    </div>
                </div>

                <style>
                    {r#"
                    .wake-launcher {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 50;
                        transition: all 0.5s ease-out;
                    }
                    .wake-launcher.hidden {
                        opacity: 0;
                        pointer-events: none;
                        transform: scale(0.9);
                    }
                    .wake-bubble {
                        position: absolute;
                        bottom: 100%;
                        right: 0;
                        margin-bottom: 0.75rem;
                        padding: 0.75rem 1rem;
                        white-space: nowrap;
                        background: white;
                        border: 1px solid #f3f4f6;
                        border-radius: 1rem 1rem 0.25rem 1rem;
                        box-shadow: 0 20px 25px rgba(0,0,0,0.1);
                        opacity: 0;
                        transform: translateY(0.5rem);
                        pointer-events: none;
                        transition: all 0.3s;
                    }
                    .wake-bubble.shown {
                        opacity: 1;
                        transform: none;
                    }
                    .wake-bubble p {
                        margin: 0;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                    }
                    .wake-avatar-button {
                        position: relative;
                        width: 7rem;
                        height: 7rem;
                        padding: 0;
                        border: none;
                        border-radius: 50%;
                        overflow: hidden;
                        cursor: pointer;
                        box-shadow: 0 0 0 4px rgba(255,255,255,0.8), 0 25px 50px color-mix(in srgb, var(--accent) 30%, transparent);
                        transition: transform 0.3s;
                        animation: fade-in-up 0.6s ease-out;
                    }
                    .wake-avatar-button:hover {
                        transform: scale(1.05);
                    }
                    .wake-avatar-button img {
                        position: relative;
                        z-index: 1;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .wake-ping {
                        position: absolute;
                        inset: 0;
                        border-radius: 50%;
                        background: color-mix(in srgb, var(--accent) 20%, transparent);
                        animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }
                    .wake-online {
                        position: absolute;
                        bottom: 0.5rem;
                        right: 0.5rem;
                        z-index: 2;
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 50%;
                        background: #22c55e;
                        border: 3px solid white;
                    }
                    .wake-frame {
                        position: fixed;
                        z-index: 50;
                        opacity: 0;
                        transform: scale(0.95);
                        pointer-events: none;
                        transition: all 0.5s ease-out;
                    }
                    .wake-frame.open {
                        opacity: 1;
                        transform: none;
                        pointer-events: auto;
                    }
                    .wake-frame.docked {
                        bottom: 1.5rem;
                        right: 1.5rem;
                    }
                    .wake-frame.expanded {
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1.5rem;
                        background: rgba(0,0,0,0.5);
                        backdrop-filter: blur(4px);
                    }
                    .wake-window {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                        background: white;
                        border: 1px solid #e5e7eb;
                        border-radius: 1.5rem;
                        box-shadow: 0 25px 50px rgba(0,0,0,0.25);
                        transition: all 0.3s;
                    }
                    .wake-window.expanded {
                        width: 100%;
                        max-width: 42rem;
                        height: 80vh;
                    }
                    .wake-resize {
                        position: absolute;
                        top: 0;
                        left: 0;
                        z-index: 20;
                        width: 1.5rem;
                        height: 1.5rem;
                        cursor: nw-resize;
                    }
                    .wake-resize span {
                        position: absolute;
                        top: 0.5rem;
                        left: 0.5rem;
                        width: 0.75rem;
                        height: 0.75rem;
                        border-left: 2px solid #d1d5db;
                        border-top: 2px solid #d1d5db;
                        border-top-left-radius: 0.25rem;
                    }
                    .wake-resize:hover span {
                        border-color: var(--accent);
                    }
                    .wake-header {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem;
                        background: linear-gradient(135deg, var(--accent), color-mix(in srgb, var(--accent) 80%, transparent));
                    }
                    .wake-identity {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        flex: 1;
                    }
                    .wake-header-avatar {
                        position: relative;
                    }
                    .wake-header-avatar img {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        object-fit: cover;
                    }
                    .wake-header-avatar span {
                        position: absolute;
                        bottom: 0;
                        right: 0;
                        width: 0.875rem;
                        height: 0.875rem;
                        border-radius: 50%;
                        background: #4ade80;
                        border: 2px solid var(--accent);
                    }
                    .wake-header h3 {
                        margin: 0;
                        color: white;
                        font-weight: 600;
                    }
                    .wake-header p {
                        margin: 0;
                        color: rgba(255,255,255,0.7);
                        font-size: 0.75rem;
                    }
                    .wake-controls {
                        display: flex;
                        gap: 0.25rem;
                    }
                    .wake-controls button {
                        padding: 0.5rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: none;
                        color: rgba(255,255,255,0.7);
                        cursor: pointer;
                    }
                    .wake-controls button:hover {
                        color: white;
                        background: rgba(255,255,255,0.1);
                    }
                    .wake-messages {
                        flex: 1;
                        overflow-y: auto;
                        padding: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        background: linear-gradient(to bottom, #f9fafb, white);
                    }
                    .wake-row {
                        display: flex;
                    }
                    .wake-row.from-user {
                        justify-content: flex-end;
                    }
                    .wake-row-avatar {
                        width: 2rem;
                        height: 2rem;
                        margin-right: 0.5rem;
                        flex-shrink: 0;
                        border-radius: 50%;
                        object-fit: cover;
                    }
                    .wake-message {
                        max-width: 80%;
                        padding: 0.75rem 1rem;
                        border-radius: 1rem;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        white-space: pre-wrap;
                    }
                    .from-user .wake-message {
                        background: var(--accent);
                        color: white;
                        border-bottom-right-radius: 0.375rem;
                    }
                    .from-wake .wake-message {
                        background: white;
                        color: #374151;
                        border: 1px solid #f3f4f6;
                        border-bottom-left-radius: 0.375rem;
                        box-shadow: 0 4px 6px rgba(0,0,0,0.07);
                    }
                    .wake-typing {
                        display: flex;
                        gap: 0.375rem;
                    }
                    .wake-typing span {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: color-mix(in srgb, var(--accent) 60%, transparent);
                        animation: bounce 1s infinite;
                    }
                    .wake-quick-replies {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        padding-top: 0.5rem;
                    }
                    .wake-quick-replies button {
                        padding: 0.375rem 0.75rem;
                        font-size: 0.75rem;
                        color: var(--accent);
                        background: color-mix(in srgb, var(--accent) 10%, transparent);
                        border: 1px solid color-mix(in srgb, var(--accent) 20%, transparent);
                        border-radius: 999px;
                        cursor: pointer;
                    }
                    .wake-input {
                        padding: 1rem;
                        border-top: 1px solid #f3f4f6;
                        background: white;
                    }
                    .wake-input-row {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .wake-input input {
                        flex: 1;
                        padding: 0.75rem 1rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: #f3f4f6;
                        font-size: 0.875rem;
                    }
                    .wake-input input:focus {
                        outline: none;
                        background: white;
                        box-shadow: 0 0 0 2px color-mix(in srgb, var(--accent) 30%, transparent);
                    }
                    .wake-send {
                        padding: 0.75rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: #e5e7eb;
                        color: #9ca3af;
                        cursor: not-allowed;
                    }
                    .wake-send.ready {
                        background: var(--accent);
                        color: white;
                        cursor: pointer;
                    }
                    .wake-input p {
                        margin: 0.5rem 0 0;
                        font-size: 10px;
                        text-align: center;
                        color: #9ca3af;
                    }
                    @keyframes ping {
                        75%, 100% { transform: scale(2); opacity: 0; }
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); }
                        50% { transform: none; }
                    }
                    "#}
                </style>
            </>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_delay_stays_in_window() {
        assert_eq!(reply_delay_ms(0.0), 1_000);
        assert_eq!(reply_delay_ms(0.5), 1_500);
        assert!(reply_delay_ms(0.999) < 2_000);
        assert_eq!(reply_delay_ms(7.0), 2_000);
        assert_eq!(reply_delay_ms(-1.0), 1_000);
    }

    #[test]
    fn launcher_appears_past_forty_percent() {
        assert!(!launcher_appears(0.0, 1_000.0));
        assert!(!launcher_appears(400.0, 1_000.0));
        assert!(launcher_appears(401.0, 1_000.0));
    }
}
