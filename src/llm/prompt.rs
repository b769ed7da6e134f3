//! System prompt shared by every provider.

/// Conventional commit prefixes the model may choose from, with their meaning.
pub const COMMIT_PREFIXES: &[(&str, &str)] = &[
    ("feat", "new features"),
    ("fix", "bug fixes"),
    ("chore", "maintenance tasks"),
    ("docs", "documentation updates"),
    ("refactor", "code restructuring"),
    ("test", "adding or updating tests"),
    ("style", "formatting changes"),
    ("perf", "performance improvements"),
];

/// Build the system prompt for a given style and token budget.
///
/// The diff itself is sent separately as the user message.
pub fn build_system_prompt(style: &str, max_tokens: u32) -> String {
    let prefixes: String = COMMIT_PREFIXES
        .iter()
        .map(|(prefix, meaning)| format!("   - {prefix}: for {meaning}\n"))
        .collect();

    format!(
        r#"You are an AI assistant designed to generate Git commit messages. Analyze the provided code diff and produce a {style} commit message that accurately describes the changes.

Follow these guidelines:

1. Prefix: Start the commit message with an appropriate prefix based on the type of change:
{prefixes}
2. Style: Generate the message in a {style} style.

3. Length: Write a single line and limit the message to {max_tokens} tokens.

4. Language: Use clear and professional language.

5. Format: Do not include any additional explanations or formatting; output only the commit message.
"#
    )
}
