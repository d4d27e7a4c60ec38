//! Markup stripping for free-text fields.
//!
//! Tags are removed, the content of `<script>` and `<style>` elements is
//! dropped, and the result is trimmed. A `<` that does not start a tag
//! (`a < b`) is kept as text.

const DROPPED_ELEMENTS: [&str; 2] = ["script", "style"];

/// Strip markup from `input` and trim surrounding whitespace.
///
/// Text between tags is kept as written. A single space is inserted only
/// where a removed tag separated two words.
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    let mut after_tag = false;

    while let Some(start) = rest.find('<') {
        push_text(&mut out, &rest[..start], &mut after_tag);
        let candidate = &rest[start..];

        if !starts_tag(candidate) {
            push_text(&mut out, "<", &mut after_tag);
            rest = &candidate[1..];
            continue;
        }
        let Some(end) = candidate.find('>') else {
            // Unterminated tag: keep it as text.
            push_text(&mut out, candidate, &mut after_tag);
            rest = "";
            break;
        };

        let tag = &candidate[1..end];
        rest = &candidate[end + 1..];
        if let Some(element) = dropped_element(tag) {
            rest = skip_past_closing(rest, element);
        }
        after_tag = true;
    }
    push_text(&mut out, rest, &mut after_tag);

    out.trim().to_string()
}

fn push_text(out: &mut String, text: &str, after_tag: &mut bool) {
    if text.is_empty() {
        return;
    }
    let joins_words = out.chars().next_back().is_some_and(|c| !c.is_whitespace())
        && text.chars().next().is_some_and(|c| !c.is_whitespace());
    if *after_tag && joins_words {
        out.push(' ');
    }
    out.push_str(text);
    *after_tag = false;
}

fn starts_tag(candidate: &str) -> bool {
    candidate[1..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
}

fn dropped_element(tag: &str) -> Option<&'static str> {
    let name: String = tag
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    DROPPED_ELEMENTS.into_iter().find(|e| *e == name)
}

fn skip_past_closing<'a>(rest: &'a str, element: &str) -> &'a str {
    let closing = format!("</{element}");
    let lower = rest.to_ascii_lowercase();
    match lower.find(&closing) {
        Some(pos) => match rest[pos..].find('>') {
            Some(end) => &rest[pos + end + 1..],
            None => "",
        },
        None => "",
    }
}
