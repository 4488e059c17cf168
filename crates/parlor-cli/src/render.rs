//! Terminal rendering for transcript entries and the welcome view.

use std::sync::OnceLock;

use colored::Colorize;
use parlor_core::config::ChatConfig;
use parlor_core::session::{ChatMessage, MessageRole};
use regex::Regex;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"</?[a-zA-Z][^>]*>").expect("tag pattern is valid"))
}

/// Strips HTML tags and decodes the handful of entities the backend emits.
///
/// The backend is prompted to answer in HTML fragments; unless the user
/// opted into `trust_markup`, tags have no meaning in a terminal and are
/// dropped before display.
pub fn strip_markup(content: &str) -> String {
    let stripped = tag_pattern().replace_all(content, "");
    stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Formats one transcript entry for the terminal.
pub fn render_message(message: &ChatMessage, trust_markup: bool) -> String {
    let content = if trust_markup {
        message.content.clone()
    } else {
        strip_markup(&message.content)
    };
    match message.role {
        MessageRole::User => format!("{} {}", "you:".green().bold(), content),
        MessageRole::Assistant => format!("{} {}", "assistant:".cyan().bold(), content),
    }
}

/// The welcome view shown on startup and after a confirmed reset.
pub fn welcome_banner(config: &ChatConfig) -> String {
    let mut lines = vec![
        "Welcome to Parlor.".bold().to_string(),
        "Pick a chat memory endpoint and ask away.".to_string(),
        String::new(),
    ];
    for choice in &config.endpoints {
        lines.push(format!(
            "  {}  {}",
            choice.label.yellow(),
            choice.path.dimmed()
        ));
    }
    lines.push(String::new());
    lines.push(
        "Commands: /endpoint <path>, /endpoints, /new, /help, /quit"
            .dimmed()
            .to_string(),
    );
    lines.join("\n")
}

/// The line shown while a request is in flight.
pub fn typing_indicator() -> String {
    "assistant is typing...".dimmed().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_decodes_entities() {
        let html = "<div>The answer is <b>42</b>.&nbsp;See &lt;manual&gt;.</div>";
        assert_eq!(strip_markup(html), "The answer is 42. See <manual>.");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_markup("just text"), "just text");
    }

    #[test]
    fn trust_markup_renders_the_raw_body() {
        colored::control::set_override(false);
        let message = ChatMessage::assistant("<b>bold</b>");
        assert_eq!(render_message(&message, true), "assistant: <b>bold</b>");
        assert_eq!(render_message(&message, false), "assistant: bold");
    }
}
