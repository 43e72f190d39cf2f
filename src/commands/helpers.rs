//! Formatting helpers shared across commands

const RULE_WIDTH: usize = 200;
const TITLE_INDENT: usize = 59;

/// Section banner: a rule, an indented title, another rule
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{rule}\n{:indent$}{title}\n{rule}",
        "",
        indent = TITLE_INDENT
    )
}

/// Render a weight the way it was written: `3.0`, `5.1`, `106.0`
pub fn weight(value: f64) -> String {
    format!("{value:?}")
}

/// `A -> B -> C`
pub fn arrow_path(nodes: &[String]) -> String {
    nodes.join(" -> ")
}

/// `[A, B, C]`
pub fn bracket_path(nodes: &[String]) -> String {
    format!("[{}]", nodes.join(", "))
}
