//! Wake's canned answers and the keyword matcher that picks one.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    Pricing,
    Services,
    Industries,
    About,
    Results,
    Contact,
    Greeting,
}

// Checked top to bottom, first hit wins.
const KEYWORD_GROUPS: &[(Topic, &[&str])] = &[
    (Topic::Pricing, &["price", "cost", "how much", "pricing"]),
    (Topic::Services, &["service", "offer", "do you do", "help with"]),
    (Topic::Industries, &["industry", "work with", "clients"]),
    (Topic::About, &["about", "who", "story", "background", "wake"]),
    (Topic::Results, &["result", "case stud", "success", "roi"]),
    (Topic::Contact, &["contact", "call", "email", "talk", "meet", "book"]),
    (Topic::Greeting, &["hi", "hello", "hey", "sup", "what's up", "whats up"]),
];

pub static GREETINGS: [&str; 4] = [
    "Hey there! 👋 I'm Wake. What brings you to MAW Marketing today?",
    "Hi! I'm Wake - great to meet you! How can I help you out?",
    "Hey! Welcome to MAW. I'm here if you have any questions - no sales pitch, just real answers!",
    "Hey! 😊 Good to hear from you. What can I help you with today? Feel free to ask about our services, pricing, results - whatever's on your mind!",
];

pub const SERVICES: &str = "We've got three main ways we help businesses:\n\n• **Paid Ads** ($1,500+/mo) - Google, Meta, LinkedIn campaigns\n• **Full Funnel Marketing** (custom) - complete marketing systems\n• **Content Strategy** ($1,250+/mo) - storytelling that actually works\n\nWhat sounds most relevant to where you're at?";

pub const PRICING: &str = "Totally fair question! Our services start at $1,250/month for content work, and $1,500/month for paid ads management (plus your ad spend). Full funnel stuff is custom since every business is different.\n\nThe cool thing is we focus on optimizing what you already have - not rebuilding everything from scratch. Usually means faster results and better ROI.";

pub const INDUSTRIES: &str = "We work with a bunch of different industries, but we've gotten really good results in:\n\n• Healthcare & HealthTech\n• Education\n• Automotive\n• Home Services\n\nThat said, our approach works for most B2B and service businesses. What industry are you in?";

pub const ABOUT: &str = "So here's the quick version - I started MAW after years in the marketing world, and honestly? I was frustrated with how most agencies operate. Lots of promises, not much transparency.\n\nWe do things differently. We optimize what's working, cut what isn't, and build systems your team can actually maintain. No fluff, no BS.\n\nOh, and fun fact - I used to be a professional skateboarder before getting into marketing. Life's weird like that! 😄";

pub const RESULTS: &str = "We've got some pretty solid case studies! A few highlights:\n\n• Healthcare client: 340% increase in qualified leads\n• Auto dealership: Cut cost-per-lead by 60%\n• HealthTech startup: 5x return on ad spend\n\nWant me to go into detail on any of these?";

pub const CONTACT: &str = "Best way to connect is booking a free 30-minute strategy call - no pressure, just a real conversation about your marketing.\n\nOr you can email me directly at wake@mawmarketing.com\n\nI personally respond to everything, so you won't get stuck talking to a bot... well, besides me right now 😂";

pub static FALLBACKS: [&str; 3] = [
    "Good question! Let me think about how to best answer that...\n\nIf you want, you can also book a quick call with me (the real me, not AI me) and we can chat through it. No sales pitch - I genuinely just like helping people figure out their marketing.",
    "Hmm, that's a bit outside what I know off the top of my head. But hey - shoot me an email at wake@mawmarketing.com and I'll get back to you personally!",
    "That's a great question! I'd love to dig deeper into that with you. Want to book a free strategy call? It's just 30 minutes and I promise it won't be a sales pitch.",
];

/// Chips offered under the opening greeting: (label sent as the message, key).
pub const QUICK_REPLIES: [(&str, &str); 4] = [
    ("What services do you offer?", "services"),
    ("How much does it cost?", "pricing"),
    ("Tell me about Wake", "about"),
    ("See case studies", "results"),
];

/// Line shown first whenever the chat opens for the first time.
pub fn opening_line() -> &'static str {
    GREETINGS[0]
}

pub fn classify(message: &str) -> Option<Topic> {
    let lower = message.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(topic, _)| *topic)
}

/// Picks Wake's reply. `pick` receives the number of candidates and returns
/// an index; out-of-range picks wrap around.
pub fn reply<F>(message: &str, pick: F) -> &'static str
where
    F: FnOnce(usize) -> usize,
{
    let choose = |options: &'static [&'static str]| options[pick(options.len()) % options.len()];
    match classify(message) {
        Some(Topic::Pricing) => PRICING,
        Some(Topic::Services) => SERVICES,
        Some(Topic::Industries) => INDUSTRIES,
        Some(Topic::About) => ABOUT,
        Some(Topic::Results) => RESULTS,
        Some(Topic::Contact) => CONTACT,
        Some(Topic::Greeting) => choose(GREETINGS.as_slice()),
        None => choose(FALLBACKS.as_slice()),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Strong(&'a str),
}

/// Splits `**bold**` runs out of a reply. An unmatched `**` stays literal.
pub fn emphasis_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };
        if open > 0 {
            segments.push(Segment::Plain(&rest[..open]));
        }
        segments.push(Segment::Strong(&after_open[..close]));
        rest = &after_open[close + 2..];
    }
    if !rest.is_empty() {
        segments.push(Segment::Plain(rest));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_question_gets_pricing_verbatim() {
        assert_eq!(reply("How much does it cost?", |_| 0), PRICING);
        assert_eq!(reply("how much does it cost", |_| 2), PRICING);
    }

    #[test]
    fn hello_gets_a_greeting_variant() {
        for i in 0..8 {
            let answer = reply("hello", |_| i);
            assert!(GREETINGS.contains(&answer));
        }
    }

    #[test]
    fn hello_can_answer_with_the_warm_variant() {
        let answer = reply("hello", |len| len - 1);
        assert_eq!(answer, GREETINGS[3]);
        assert!(answer.starts_with("Hey! 😊"));
    }

    #[test]
    fn unknown_input_falls_back() {
        for i in 0..3 {
            assert_eq!(reply("xyzzy", |_| i), FALLBACKS[i]);
        }
        assert!(FALLBACKS.contains(&reply("xyzzy", |n| n + 7)));
    }

    #[test]
    fn earlier_groups_win() {
        // "service" and "cost" both match, pricing is checked first.
        assert_eq!(classify("what do your services cost"), Some(Topic::Pricing));
        // "who" is an about keyword even though "hi" is also present.
        assert_eq!(classify("hi, who are you"), Some(Topic::About));
        assert_eq!(classify("Can I BOOK a meeting"), Some(Topic::Contact));
        assert_eq!(classify("Show me a case study"), Some(Topic::Results));
        assert_eq!(classify("which industry?"), Some(Topic::Industries));
    }

    #[test]
    fn quick_replies_route_to_their_topic() {
        assert_eq!(classify(QUICK_REPLIES[0].0), Some(Topic::Services));
        assert_eq!(classify(QUICK_REPLIES[1].0), Some(Topic::Pricing));
        assert_eq!(classify(QUICK_REPLIES[2].0), Some(Topic::About));
        assert_eq!(classify(QUICK_REPLIES[3].0), Some(Topic::Results));
    }

    #[test]
    fn opening_line_is_first_greeting() {
        assert_eq!(opening_line(), GREETINGS[0]);
    }

    #[test]
    fn contact_copy_mentions_inbox() {
        assert!(CONTACT.contains("wake@mawmarketing.com"));
        assert!(FALLBACKS[1].contains("wake@mawmarketing.com"));
    }

    #[test]
    fn splits_bold_markup() {
        assert_eq!(
            emphasis_segments("a **b** c"),
            vec![Segment::Plain("a "), Segment::Strong("b"), Segment::Plain(" c")]
        );
        assert_eq!(emphasis_segments("**x**"), vec![Segment::Strong("x")]);
        assert_eq!(emphasis_segments("no marks"), vec![Segment::Plain("no marks")]);
        assert_eq!(
            emphasis_segments("open ** only"),
            vec![Segment::Plain("open ** only")]
        );
    }

    #[test]
    fn services_reply_has_three_bold_names() {
        let strong = emphasis_segments(SERVICES)
            .into_iter()
            .filter(|s| matches!(s, Segment::Strong(_)))
            .count();
        assert_eq!(strong, 3);
    }
}
