/// Search terms must be longer than this many characters before they affect ordering.
pub const SEARCH_THRESHOLD_CHARS: usize = 2;

/// Case-insensitive substring matcher for item text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatcher {
    needle: String,
}

impl TextMatcher {
    /// Build a matcher for any non-empty query.
    #[must_use]
    pub fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        Some(Self {
            needle: query.to_lowercase(),
        })
    }

    /// Build a matcher only when `term` is long enough to drive search ordering.
    ///
    /// Terms of up to [`SEARCH_THRESHOLD_CHARS`] characters yield `None` so that
    /// single keystrokes do not reshuffle the list.
    #[must_use]
    pub fn for_search(term: &str) -> Option<Self> {
        if term.chars().count() > SEARCH_THRESHOLD_CHARS {
            Self::new(term)
        } else {
            None
        }
    }

    /// Whether `text` contains the query, ignoring case.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }
}

/// A run of item text, flagged when it matched the search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Slice of the original text.
    pub text: &'a str,
    /// True for runs equal (ignoring case) to the search term.
    pub matched: bool,
}

/// Split `text` into matched and unmatched runs for highlighting.
///
/// Matching is case-insensitive and slices always fall on character
/// boundaries of the original text. An empty term yields a single unmatched
/// segment (or nothing for empty text).
#[must_use]
pub fn highlight<'a>(text: &'a str, term: &str) -> Vec<Segment<'a>> {
    let needle = term.to_lowercase();
    let mut segments = Vec::new();
    if needle.is_empty() {
        if !text.is_empty() {
            segments.push(Segment { text, matched: false });
        }
        return segments;
    }

    let mut plain_start = 0;
    let mut cursor = 0;
    while let Some(rest) = text.get(cursor..).filter(|rest| !rest.is_empty()) {
        if let Some(len) = match_len_at(rest, &needle) {
            if plain_start < cursor {
                segments.push(Segment {
                    text: &text[plain_start..cursor],
                    matched: false,
                });
            }
            segments.push(Segment {
                text: &rest[..len],
                matched: true,
            });
            cursor += len;
            plain_start = cursor;
        } else {
            cursor += rest.chars().next().map_or(1, char::len_utf8);
        }
    }
    if plain_start < text.len() {
        segments.push(Segment {
            text: &text[plain_start..],
            matched: false,
        });
    }
    segments
}

/// Byte length of the prefix of `haystack` whose lowercase form equals `needle`.
fn match_len_at(haystack: &str, needle: &str) -> Option<usize> {
    let mut lowered = String::with_capacity(needle.len());
    for (idx, ch) in haystack.char_indices() {
        lowered.extend(ch.to_lowercase());
        if lowered.len() >= needle.len() {
            return (lowered == needle).then_some(idx + ch.len_utf8());
        }
        if !needle.starts_with(&lowered) {
            return None;
        }
    }
    None
}
