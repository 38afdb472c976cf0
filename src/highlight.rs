//! Match highlighting for result titles
//!
//! Pure text segmentation: splits a title into matched/unmatched pieces so
//! the renderer can style the parts of the title that contain the query.
//! Case-insensitive, no state, no knowledge of the widget lifecycle.

/// A contiguous piece of a title, flagged when it matches the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Split `text` into segments, marking every case-insensitive occurrence
/// of `needle` as matched. An empty or whitespace-only needle yields the
/// whole text as a single unmatched segment.
pub fn match_segments<'a>(text: &'a str, needle: &str) -> Vec<Segment<'a>> {
    let needle = needle.trim();
    if needle.is_empty() || text.is_empty() {
        return vec![Segment {
            text,
            matched: false,
        }];
    }

    // Lowercase both sides while remembering, for every lowercased char,
    // which byte of the original text it came from. Lowercasing can change
    // a char's length (e.g. 'İ'), so indices into the lowered string cannot
    // be used on the original directly.
    let mut lowered = String::with_capacity(text.len());
    let mut byte_map: Vec<usize> = Vec::with_capacity(text.len());
    for (idx, ch) in text.char_indices() {
        for low in ch.to_lowercase() {
            byte_map.push(idx);
            let mut buf = [0u8; 4];
            let encoded = low.encode_utf8(&mut buf);
            for _ in 1..encoded.len() {
                byte_map.push(idx);
            }
            lowered.push_str(encoded);
        }
    }
    byte_map.push(text.len());

    let lowered_needle = needle.to_lowercase();
    let mut segments = Vec::new();
    let mut cursor = 0; // byte position in `text`
    let mut search_from = 0; // byte position in `lowered`

    while let Some(found) = lowered[search_from..].find(&lowered_needle) {
        let low_start = search_from + found;
        let low_end = low_start + lowered_needle.len();
        let orig_start = byte_map[low_start];
        let orig_end = byte_map[low_end];

        if orig_start > cursor {
            segments.push(Segment {
                text: &text[cursor..orig_start],
                matched: false,
            });
        }
        segments.push(Segment {
            text: &text[orig_start..orig_end],
            matched: true,
        });
        cursor = orig_end;
        search_from = low_end;
    }

    if cursor < text.len() {
        segments.push(Segment {
            text: &text[cursor..],
            matched: false,
        });
    }

    segments
}
