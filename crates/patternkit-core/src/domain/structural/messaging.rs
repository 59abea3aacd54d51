//! Bridge: message kinds (abstraction) over delivery channels (implementation).

/// Messages this long or longer are refused by [`ShortMessage`].
pub const SHORT_MESSAGE_LIMIT: usize = 10;

/// Implementation side: how a message leaves the building.
pub trait MessageSender {
    fn send(&self, message: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SmsSender;

impl MessageSender for SmsSender {
    fn send(&self, message: &str) -> String {
        format!("{message} this message send by SMS")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailSender;

impl MessageSender for EmailSender {
    fn send(&self, message: &str) -> String {
        format!("{message} this message send by Email")
    }
}

/// Outcome of handing a message to a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The sender accepted it; carries the sender's status line.
    Sent(String),
    /// Refused before reaching the sender; carries the rejection line.
    Rejected(String),
}

impl Delivery {
    pub fn line(&self) -> &str {
        match self {
            Self::Sent(line) | Self::Rejected(line) => line,
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }
}

/// Abstraction side.
pub trait Message {
    fn send(&self, message: &str) -> Delivery;
}

/// Forwards every message.
pub struct LongMessage {
    sender: Box<dyn MessageSender>,
}

impl LongMessage {
    pub fn new(sender: Box<dyn MessageSender>) -> Self {
        Self { sender }
    }
}

impl Message for LongMessage {
    fn send(&self, message: &str) -> Delivery {
        Delivery::Sent(self.sender.send(message))
    }
}

/// Forwards only messages shorter than [`SHORT_MESSAGE_LIMIT`] characters.
pub struct ShortMessage {
    sender: Box<dyn MessageSender>,
}

impl ShortMessage {
    pub fn new(sender: Box<dyn MessageSender>) -> Self {
        Self { sender }
    }
}

impl Message for ShortMessage {
    fn send(&self, message: &str) -> Delivery {
        if message.chars().count() < SHORT_MESSAGE_LIMIT {
            Delivery::Sent(self.sender.send(message))
        } else {
            Delivery::Rejected(format!(
                "Unable to send message, length size >= {SHORT_MESSAGE_LIMIT}"
            ))
        }
    }
}

/// Which message/sender pairing a numeric menu choice selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRoute {
    /// Long message over SMS.
    LongSms,
    /// Short message over email.
    ShortEmail,
}

impl MessageRoute {
    /// `1` picks long/SMS; any other number picks short/email.
    pub fn from_selector(selector: i64) -> Self {
        if selector == 1 {
            Self::LongSms
        } else {
            Self::ShortEmail
        }
    }

    pub fn build(self) -> Box<dyn Message> {
        match self {
            Self::LongSms => Box::new(LongMessage::new(Box::new(SmsSender))),
            Self::ShortEmail => Box::new(ShortMessage::new(Box::new(EmailSender))),
        }
    }
}
