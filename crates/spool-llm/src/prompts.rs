//! Prompt templates for the research and composition calls.
//!
//! Placeholders are literal `{name}` markers replaced with
//! [`str::replace`]; everything else, including the JSON braces, is sent
//! verbatim.

/// Research prompt for grounded search. Requests citations alongside the
/// analysis and findings.
pub const GROUNDED_RESEARCH_PROMPT: &str = r#"Research the following topic using search results: {topic}

Please provide:
1. A comprehensive analysis
2. Key findings and insights
3. Citations for all sources used

Format the response as a JSON with the following structure:
{
    "analysis": "detailed analysis here",
    "key_findings": ["finding1", "finding2", ...],
    "citations": ["citation1", "citation2", ...]
}"#;

/// Research prompt without grounding. No citations are requested.
pub const UNGROUNDED_RESEARCH_PROMPT: &str = r#"Research the following topic using your knowledge: {topic}

Please provide:
1. A comprehensive analysis
2. Key findings and insights

Format the response as a JSON with the following structure:
{
    "analysis": "detailed analysis here",
    "key_findings": ["finding1", "finding2", ...]
}"#;

/// Composition prompt. The length and count budgets are advisory
/// instructions to the model.
pub const COMPOSE_THREAD_PROMPT: &str = r#"Convert this research into an engaging social media thread.
Write at most {max_posts} posts and keep each post under {max_post_length} characters.
Make it informative yet conversational, flowing naturally from one post to the next.
Include relevant hashtags where appropriate.
Return ONLY a JSON array of post texts, nothing else.

Research data:
{research_json}"#;
