use unidecode::unidecode;

/// Normalizes an ingredient spelling for lookup: ASCII-folded, lowercased,
/// with `_` and `-` read as spaces and whitespace runs collapsed.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
