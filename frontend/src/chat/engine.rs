use super::options::{project_menu, root_menu, services_menu, ChatOption};

pub const WELCOME: &str = "👋 Hello! Welcome to OmRadixSolutions. How can I help you today?";
pub const FALLBACK: &str = "🤖 I’ll note that. Please choose an option below.";

/// Delay before the bot reply lands in the transcript.
pub const REPLY_DELAY_MS: u32 = 600;
/// Delay before "Contact us" scrolls the contact section into view.
pub const SCROLL_DELAY_MS: u32 = 1200;
pub const CONTACT_ANCHOR: &str = "contact";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn bot(text: impl Into<String>) -> Self {
        Self { sender: Sender::Bot, text: text.into() }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into() }
    }
}

/// Side effects the view layer runs on behalf of the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEffect {
    ScrollTo { anchor: &'static str, delay_ms: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub reply: &'static str,
    pub next: Vec<ChatOption>,
    pub effect: Option<ViewEffect>,
}

impl Transition {
    fn to(reply: &'static str, next: Vec<ChatOption>) -> Self {
        Self { reply, next, effect: None }
    }

    fn fallback() -> Self {
        Self::to(FALLBACK, root_menu())
    }
}

/// Maps the selected label to a reply and the next option set.
///
/// Total over all strings: a label that is unknown, or known but not part of
/// `current`, falls back to the generic reply and the root menu.
pub fn transition(current: &[ChatOption], label: &str) -> Transition {
    let Some(option) = ChatOption::from_label(label).filter(|o| current.contains(o)) else {
        return Transition::fallback();
    };

    match option {
        ChatOption::KnowServices => Transition::to(
            "We provide: 🌐 Web Development, 🎨 UI/UX Design, 📢 Social Media Marketing, 📊 Data Analytics, 🔍 SEO, and 🤝 Long-term Partnerships. Would you like me to explain any of these in detail?",
            services_menu(),
        ),
        // Service details keep whichever submenu the user picked them from.
        ChatOption::Service(service) => Transition::to(service.description(), current.to_vec()),
        ChatOption::AboutCompany => Transition::to(
            "We are OmRadixSolutions 🚀 based in Pune & Ghoti (Nashik). Founder: Om Shinde (Full Stack Developer), Co-Founder: Vijay Kalantre (UI/UX). We focus on quality, innovation & long-term success.",
            vec![ChatOption::WhyChooseUs, ChatOption::GoBack],
        ),
        ChatOption::WhyChooseUs => Transition::to(
            "✅ We blend creativity, modern technology, and personalized strategies. Our goal: long-term success for our clients.",
            vec![ChatOption::GoBack],
        ),
        ChatOption::ContactUs => Transition {
            reply: "✉️ Opening contact form for you...",
            next: vec![ChatOption::StartProject, ChatOption::GoBack],
            effect: Some(ViewEffect::ScrollTo {
                anchor: CONTACT_ANCHOR,
                delay_ms: SCROLL_DELAY_MS,
            }),
        },
        ChatOption::RequestProject => Transition::to(
            "Great choice 🚀 Please share:\n1️⃣ Which service you need\n2️⃣ Short project description\n3️⃣ Timeline\n👉 Our team will reach out to you!",
            project_menu(),
        ),
        ChatOption::TalkToHuman => Transition::to(
            "✅ Sure! Our team will connect with you soon. Meanwhile, you can call us at 9373545169.",
            vec![ChatOption::GoBack],
        ),
        ChatOption::GoBack => Transition::to("Alright! What would you like to explore?", root_menu()),
        ChatOption::StartProject => Transition::fallback(),
    }
}

/// A bot reply waiting for its delay to elapse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply {
    epoch: u64,
    text: &'static str,
}

impl PendingReply {
    pub fn text(&self) -> &'static str {
        self.text
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub reply: PendingReply,
    pub effect: Option<ViewEffect>,
}

/// Transcript plus current options for one open chat widget.
#[derive(Debug)]
pub struct Dialogue {
    transcript: Vec<ChatMessage>,
    options: Vec<ChatOption>,
    epoch: u64,
}

impl Default for Dialogue {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialogue {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage::bot(WELCOME)],
            options: root_menu(),
            epoch: 0,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn options(&self) -> &[ChatOption] {
        &self.options
    }

    /// Appends the user's choice and swaps in the next options. The bot reply
    /// is returned for the caller to deliver once `REPLY_DELAY_MS` has passed.
    pub fn select(&mut self, label: &str) -> Selection {
        self.transcript.push(ChatMessage::user(label));
        let Transition { reply, next, effect } = transition(&self.options, label);
        self.options = next;
        Selection {
            reply: PendingReply { epoch: self.epoch, text: reply },
            effect,
        }
    }

    /// Returns false when the reply belongs to a conversation that was reset.
    pub fn deliver(&mut self, reply: PendingReply) -> bool {
        if reply.epoch != self.epoch {
            return false;
        }
        self.transcript.push(ChatMessage::bot(reply.text));
        true
    }

    /// Starts over with the welcome message; replies still in flight are dropped.
    pub fn reset(&mut self) {
        self.transcript = vec![ChatMessage::bot(WELCOME)];
        self.options = root_menu();
        self.epoch += 1;
    }
}
