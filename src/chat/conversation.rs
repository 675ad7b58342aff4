use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Append-only chat log. Ids grow strictly and timestamps never go backwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>, now: DateTime<Utc>) -> &ChatMessage {
        let sent_at = match self.messages.last() {
            Some(last) if last.sent_at > now => last.sent_at,
            _ => now,
        };
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            role,
            content: content.into(),
            sent_at,
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn push_user(&mut self, content: impl Into<String>, now: DateTime<Utc>) -> &ChatMessage {
        self.push(Role::User, content, now)
    }

    pub fn push_assistant(&mut self, content: impl Into<String>, now: DateTime<Utc>) -> &ChatMessage {
        self.push(Role::Assistant, content, now)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn appends_in_order_with_increasing_ids() {
        let mut log = Conversation::new();
        log.push_assistant("hi", at(0));
        log.push_user("pricing?", at(5));
        log.push_assistant("answer", at(7));

        let ids: Vec<u64> = log.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(log.messages()[1].role, Role::User);
        assert!(log.messages()[1].is_user());
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn clock_skew_never_reorders_timestamps() {
        let mut log = Conversation::new();
        log.push_user("first", at(10));
        let second = log.push_assistant("second", at(10) - Duration::seconds(3)).sent_at;
        assert_eq!(second, at(10));

        let stamps: Vec<_> = log.messages().iter().map(|m| m.sent_at).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn starts_empty() {
        let log = Conversation::new();
        assert!(log.is_empty());
        assert!(log.messages().is_empty());
    }
}
