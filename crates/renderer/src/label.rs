/// Turn a wire key into a display heading: underscores become spaces, word
/// boundaries are cut where lowercase meets uppercase-or-digit (and where a
/// digit meets uppercase), and every word is capitalized.
///
/// `dream_state` -> `Dream State`, `archetypeName` -> `Archetype Name`,
/// `item2Id` -> `Item 2 Id`.
pub fn heading_label(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for ch in key.chars() {
        if ch == '_' {
            spaced.push(' ');
            prev = Some(' ');
            continue;
        }
        if let Some(p) = prev {
            let boundary = (p.is_ascii_lowercase() && (ch.is_ascii_uppercase() || ch.is_ascii_digit()))
                || (p.is_ascii_digit() && ch.is_ascii_uppercase());
            if boundary {
                spaced.push(' ');
            }
        }
        spaced.push(ch);
        prev = Some(ch);
    }

    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_keys() {
        assert_eq!(heading_label("dream_state"), "Dream State");
        assert_eq!(heading_label("actionable_notes"), "Actionable Notes");
    }

    #[test]
    fn camel_case_keys() {
        assert_eq!(heading_label("archetypeName"), "Archetype Name");
        assert_eq!(heading_label("lesson1"), "Lesson 1");
    }

    #[test]
    fn digit_boundaries() {
        assert_eq!(heading_label("item2Id"), "Item 2 Id");
    }

    #[test]
    fn degenerate_keys() {
        assert_eq!(heading_label(""), "");
        assert_eq!(heading_label("___"), "");
        assert_eq!(heading_label("a"), "A");
        assert_eq!(heading_label("Already Spaced"), "Already Spaced");
    }
}
