//! Post-text helpers: truncation, splitting and hashtag formatting.

/// Per-post character limit on the platform.
pub const POST_CHAR_LIMIT: usize = 280;

/// Hard-truncates `text` to `max_len` characters, ending with `...` when
/// anything was cut.
pub fn truncate_post(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Splits long text into post-sized chunks on word boundaries.
///
/// A single word longer than `max_len` becomes its own oversized chunk
/// rather than being broken mid-word.
pub fn split_into_posts(text: &str, max_len: usize) -> Vec<String> {
    let mut posts = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let needed = word_len + usize::from(current_len > 0);

        if current_len + needed <= max_len {
            if current_len > 0 {
                current.push(' ');
            }
            current.push_str(word);
            current_len += needed;
        } else {
            if current_len > 0 {
                posts.push(std::mem::take(&mut current));
            }
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        posts.push(current);
    }

    posts
}

/// Appends a hashtag line to a post, re-truncated to the platform limit.
pub fn format_post(text: &str, hashtags: &[String]) -> String {
    if hashtags.is_empty() {
        return text.to_string();
    }

    let tags = hashtags
        .iter()
        .map(|tag| format!("#{}", tag.trim_matches('#')))
        .collect::<Vec<_>>()
        .join(" ");

    truncate_post(&format!("{}\n\n{}", text, tags), POST_CHAR_LIMIT)
}

/// Whether a post fits the platform limit.
pub fn validate_post(text: &str) -> bool {
    text.chars().count() <= POST_CHAR_LIMIT
}
