use super::message::Message;
use serde::{Deserialize, Serialize};

/// The ordered messages of a single request. Messages can be appended but never removed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, builder style
    pub fn with_message(mut self, message: Message) -> Self {
        self.push(message);
        self
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// The message a reply should respond to
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }
}

impl From<Vec<Message>> for Conversation {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

impl FromIterator<Message> for Conversation {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut conversation = Conversation::new()
            .with_message(Message::user("one"))
            .with_message(Message::agent("two"));
        conversation.push(Message::user("three"));

        let contents: Vec<&str> = conversation.iter().map(Message::content).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation.last(), Some(&Message::user("three")));
    }

    #[test]
    fn test_empty_conversation() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert!(conversation.last().is_none());
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let conversation: Conversation = vec![Message::user("hi")].into();
        let value = serde_json::to_value(&conversation).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["content"], "hi");
    }
}
