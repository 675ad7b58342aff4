//! Send and reply bookkeeping for one chat widget, kept free of timers and DOM.

use chrono::{DateTime, Utc};

use super::conversation::Conversation;
use super::script;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    conversation: Conversation,
    input: String,
    pending_replies: usize,
    greeted: bool,
    greeting_pending: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Marks the opener as on its way. Only the first call per session returns true.
    pub fn begin_greeting(&mut self) -> bool {
        if self.greeted {
            return false;
        }
        self.greeted = true;
        self.greeting_pending = true;
        true
    }

    pub fn greet(&mut self, now: DateTime<Utc>) {
        self.greeting_pending = false;
        self.conversation.push_assistant(script::opening_line(), now);
    }

    /// Records the user's message and returns the reply to deliver later.
    /// `text` is a quick reply; `None` sends the input box, which is then cleared.
    /// Blank messages are ignored.
    pub fn submit<F>(&mut self, text: Option<String>, pick: F, now: DateTime<Utc>) -> Option<&'static str>
    where
        F: FnOnce(usize) -> usize,
    {
        let text = match text {
            Some(text) => text.trim().to_string(),
            None => self.input.trim().to_string(),
        };
        if text.is_empty() {
            return None;
        }
        let answer = script::reply(&text, pick);
        self.conversation.push_user(text, now);
        self.input.clear();
        self.pending_replies += 1;
        Some(answer)
    }

    /// Appends a delivered reply. Returns true once no reply is outstanding.
    pub fn receive(&mut self, answer: &str, now: DateTime<Utc>) -> bool {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.conversation.push_assistant(answer, now);
        self.pending_replies == 0
    }

    pub fn typing(&self) -> bool {
        self.pending_replies > 0 || self.greeting_pending
    }

    pub fn shows_quick_replies(&self) -> bool {
        self.conversation.len() <= 1 && !self.typing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::conversation::Role;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn first(_: usize) -> usize {
        0
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = ChatSession::new();
        session.set_input("   \t ".to_string());
        assert!(!session.can_send());
        assert_eq!(session.submit(None, first, at(0)), None);
        assert_eq!(session.submit(Some("  ".to_string()), first, at(0)), None);
        assert!(session.conversation().is_empty());
        assert!(!session.typing());
    }

    #[test]
    fn sending_clears_input_and_trims() {
        let mut session = ChatSession::new();
        session.set_input("  how much does it cost?  ".to_string());
        assert!(session.can_send());
        assert_eq!(session.submit(None, first, at(0)), Some(script::PRICING));
        assert_eq!(session.input(), "");
        assert_eq!(session.conversation().messages()[0].content, "how much does it cost?");
    }

    #[test]
    fn user_record_comes_before_its_reply() {
        let mut session = ChatSession::new();
        let answer = session.submit(Some("Tell me about your services".to_string()), first, at(0));
        assert_eq!(answer, Some(script::SERVICES));
        assert!(session.receive(script::SERVICES, at(2)));

        let roles: Vec<Role> = session.conversation().messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
        assert_eq!(session.conversation().messages()[1].content, script::SERVICES);
    }

    #[test]
    fn typing_lasts_until_every_reply_arrives() {
        let mut session = ChatSession::new();
        let a = session.submit(Some("pricing".to_string()), first, at(0)).unwrap();
        let b = session.submit(Some("contact".to_string()), first, at(1)).unwrap();
        assert!(session.typing());

        assert!(!session.receive(a, at(2)));
        assert!(session.typing());
        assert!(session.receive(b, at(3)));
        assert!(!session.typing());
    }

    #[test]
    fn quick_replies_hide_after_the_opener() {
        let mut session = ChatSession::new();
        assert!(session.begin_greeting());
        assert!(!session.shows_quick_replies());
        session.greet(at(1));
        assert!(session.shows_quick_replies());

        let answer = session.submit(Some("hello".to_string()), first, at(2)).unwrap();
        assert!(!session.shows_quick_replies());
        session.receive(answer, at(3));
        assert_eq!(session.conversation().len(), 3);
        assert!(!session.shows_quick_replies());
    }

    #[test]
    fn greeting_only_begins_once() {
        let mut session = ChatSession::new();
        assert!(session.begin_greeting());
        session.greet(at(0));
        assert!(!session.begin_greeting());
        assert!(!session.typing());
        assert_eq!(session.conversation().messages()[0].content, script::opening_line());
    }
}
