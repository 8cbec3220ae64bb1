// src/util/text.rs
use html_escape::decode_html_entities;
use regex::Regex;

/// Text content of an HTML fragment, the way a DOM `textContent` reads it.
///
/// Tags are removed before entities are decoded, so escaped markup in the
/// data (`&lt;b&gt;`) survives as literal text. Whitespace runs collapse to
/// a single space.
///
/// Unlike a DOM, every tag counts as a word break: `a@b.com</p><p>Phone`
/// reads as `a@b.com Phone`, not `a@b.comPhone`. A search term spanning two
/// adjacent elements therefore needs the space.
///
/// # Examples
///
/// ```
/// use crmview::util::text::text_content;
///
/// let html = "<h3>Ada &amp; Co</h3>\n<p><strong>Email:</strong> ada@example.com</p>";
/// assert_eq!(text_content(html), "Ada & Co Email: ada@example.com");
/// ```
pub fn text_content(html: &str) -> String {
    let tag_re = Regex::new(r"<[^>]*>").unwrap();
    let no_tags = tag_re.replace_all(html, " ");
    let decoded = decode_html_entities(&no_tags);

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive substring test used by the list filter; an empty term matches everything
pub fn matches_filter(text: &str, term: &str) -> bool {
    text.to_lowercase().contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_adjacent_elements_when_extracting_text_then_tag_boundary_is_a_space() {
        let html = "<p><strong>Email:</strong> a@b.com</p><p><strong>Phone:</strong> 555</p>";

        assert_eq!(text_content(html), "Email: a@b.com Phone: 555");
        assert!(!matches_filter(&text_content(html), "a@b.comPhone"));
    }

    #[test]
    fn given_nested_tags_when_extracting_text_then_removes_all_tags() {
        let html = "<div><strong>Bold</strong> and <em>italic</em></div>";
        assert_eq!(text_content(html), "Bold and italic");
    }

    #[test]
    fn given_escaped_markup_when_extracting_text_then_keeps_it_literal() {
        let html = "<h3>&lt;script&gt;alert(1)&lt;/script&gt;</h3>";
        assert_eq!(text_content(html), "<script>alert(1)</script>");
    }

    #[test]
    fn given_empty_html_when_extracting_text_then_returns_empty_string() {
        assert_eq!(text_content(""), "");
        assert_eq!(text_content("<div></div><p></p>"), "");
    }

    #[rstest]
    #[case("Ada Lovelace Email: ada@example.com", "", true)]
    #[case("Ada Lovelace Email: ada@example.com", "LOVE", true)]
    #[case("Ada Lovelace Email: ada@example.com", "example.COM", true)]
    #[case("Ada Lovelace Email: ada@example.com", "babbage", false)]
    fn given_term_when_matching_filter_then_is_case_insensitive_containment(
        #[case] text: &str,
        #[case] term: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(matches_filter(text, term), expected);
    }
}
