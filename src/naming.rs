//! Field key → nested class name.

/// Derive a PascalCase, naively singularized class name from a JSON key.
///
/// Title-case each alphabetic run (underscores and other non-letters start a
/// new run), drop the underscores, then strip at most one trailing lowercase
/// `s`. Total over any input; an empty key yields an empty name.
///
/// The singularization is deliberately dumb: `cats` → `Cat`, but also
/// `alias` → `Alia`. Callers that care can pick their own root name.
pub fn type_name_for_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_alpha = false;
    for ch in key.chars() {
        if ch == '_' {
            prev_alpha = false;
            continue;
        }
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    match out.strip_suffix('s') {
        Some(stripped) => stripped.to_string(),
        None => out,
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_and_strips_one_plural_s() {
        assert_eq!(type_name_for_key("cats"), "Cat");
        assert_eq!(type_name_for_key("pets"), "Pet");
        assert_eq!(type_name_for_key("address"), "Addres");
        // no trailing `s`, so the irregular plural sails through
        assert_eq!(type_name_for_key("data"), "Data");
        // not actually a plural; stripped anyway
        assert_eq!(type_name_for_key("alias"), "Alia");
    }

    #[test]
    fn underscores_become_word_boundaries() {
        assert_eq!(type_name_for_key("home_address"), "HomeAddres");
        assert_eq!(type_name_for_key("line_items"), "LineItem");
        assert_eq!(type_name_for_key("__kind__"), "Kind");
    }

    #[test]
    fn non_letters_restart_capitalization() {
        // mirrors str.title(): uncased chars begin a new word
        assert_eq!(type_name_for_key("top10s"), "Top10S");
        assert_eq!(type_name_for_key("geo-point"), "Geo-Point");
        assert_eq!(type_name_for_key("URL"), "Url");
    }

    #[test]
    fn degenerate_keys() {
        assert_eq!(type_name_for_key(""), "");
        assert_eq!(type_name_for_key("_"), "");
        // title-casing runs before the strip, so a lone `s` survives as `S`
        assert_eq!(type_name_for_key("s"), "S");
        assert_eq!(type_name_for_key("ss"), "S");
    }
}
