//! Canvasser chat page. Local mock data only.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: &'static str,
    pub text: &'static str,
}

pub struct ChatView {
    selected: &'static str,
    messages: Vec<ChatMessage>,
}

impl ChatView {
    pub const CORRESPONDENTS: [&'static str; 3] =
        ["Canvasser 1", "Canvasser 2", "Canvasser Group 1"];

    pub fn new() -> Self {
        Self {
            selected: Self::CORRESPONDENTS[0],
            messages: conversation(Self::CORRESPONDENTS[0]),
        }
    }

    pub fn selected(&self) -> &str {
        self.selected
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Unknown names get the group conversation.
    pub fn select(&mut self, correspondent: &str) {
        self.selected = Self::CORRESPONDENTS
            .iter()
            .copied()
            .find(|name| *name == correspondent)
            .unwrap_or(Self::CORRESPONDENTS[2]);
        self.messages = conversation(self.selected);
    }
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

fn conversation(correspondent: &str) -> Vec<ChatMessage> {
    let (opening, reply) = match correspondent {
        "Canvasser 1" => (
            ChatMessage {
                sender: "Canvasser 1",
                text: "Hi there! How can I help you?",
            },
            "Just checking in on the new canvassing area.",
        ),
        "Canvasser 2" => (
            ChatMessage {
                sender: "Canvasser 2",
                text: "Hello! Are we set for the upcoming event?",
            },
            "Yes, everything is ready.",
        ),
        _ => (
            ChatMessage {
                sender: "Canvasser Group 1",
                text: "Team, please update your progress.",
            },
            "I’ve completed my area.",
        ),
    };

    vec![
        opening,
        ChatMessage {
            sender: "You",
            text: reply,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_canvasser() {
        let view = ChatView::new();
        assert_eq!(view.selected(), "Canvasser 1");
        assert_eq!(view.messages()[0].text, "Hi there! How can I help you?");
    }

    #[test]
    fn selecting_swaps_the_conversation() {
        let mut view = ChatView::new();

        view.select("Canvasser 2");
        assert_eq!(view.selected(), "Canvasser 2");
        assert_eq!(view.messages()[1].text, "Yes, everything is ready.");

        view.select("Canvasser Group 1");
        assert_eq!(view.messages()[0].sender, "Canvasser Group 1");
        assert_eq!(view.messages().len(), 2);
    }
}
