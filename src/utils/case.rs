//! Header key normalization

/// Converts a header key into lower camel case
///
/// Words are separated by runs of non-alphanumeric characters, by a lowercase letter
/// or digit followed by an uppercase letter, and by the last capital of an acronym
/// that starts a new capitalized word. A word that starts with a digit is joined
/// with `_` so it stays readable.
///
/// # Examples
///
/// ```
/// use chatlog_explorer::utils::to_lower_camel_case;
///
/// assert_eq!(to_lower_camel_case("Session started"), "sessionStarted");
/// assert_eq!(to_lower_camel_case("Channel ID"), "channelId");
/// assert_eq!(to_lower_camel_case("Version 2"), "version_2");
/// ```
pub fn to_lower_camel_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for (index, word) in split_words(input).into_iter().enumerate() {
        let lower = word.to_lowercase();
        if index == 0 {
            result.push_str(&lower);
            continue;
        }

        let mut chars = lower.chars();
        match chars.next() {
            Some(first) if first.is_numeric() => {
                result.push('_');
                result.push_str(&lower);
            }
            Some(first) => {
                result.extend(first.to_uppercase());
                result.push_str(chars.as_str());
            }
            None => {}
        }
    }

    result
}

fn split_words(input: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut words = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, &(pos, ch)) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            if let Some(start) = word_start.take() {
                words.push(&input[start..pos]);
            }
            continue;
        }

        let Some(start) = word_start else {
            word_start = Some(pos);
            continue;
        };

        // A word in progress means the previous char is alphanumeric
        let prev = chars[i - 1].1;
        let next_is_lower = chars.get(i + 1).is_some_and(|&(_, c)| c.is_lowercase());
        let boundary = ch.is_uppercase()
            && (prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower));

        if boundary {
            words.push(&input[start..pos]);
            word_start = Some(pos);
        }
    }

    if let Some(start) = word_start {
        words.push(&input[start..]);
    }

    words
}
