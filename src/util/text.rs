use std::borrow::Cow;

/// Literal CDATA delimiters that occasionally leak through the XML layer.
///
/// The XML deserializer already unwraps genuine CDATA sections; these markers
/// only survive when a feed double-wraps its fields (Medium's exporter does
/// this for titles and creator names). They are matched literally, not via
/// general CDATA-section parsing.
const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Repairs for UTF-8 bytes that were misread as Latin-1 somewhere upstream.
///
/// Each artifact is the character sequence produced when the UTF-8 encoding of
/// a punctuation codepoint is decoded byte-by-byte. Order matters: the
/// truncated double-quote artifact is a prefix of the two longer entries and
/// must run after them. The table is exhaustive for the artifacts it targets;
/// unknown mis-encodings pass through untouched.
const MOJIBAKE_REPAIRS: &[(&str, &str)] = &[
    // "â€™" — right single quotation mark (U+2019)
    ("\u{e2}\u{20ac}\u{2122}", "'"),
    // "â€œ" — left double quotation mark (U+201C)
    ("\u{e2}\u{20ac}\u{153}", "\""),
    // "â€" — right double quotation mark (U+201D) with its final byte lost
    ("\u{e2}\u{20ac}", "\""),
    // "Â" — stray non-breaking-space marker
    ("\u{c2}", ""),
];

/// Cleans a raw narrative field from a feed document.
///
/// Strips surrounding whitespace and literal CDATA markers, then repairs the
/// fixed table of mojibake artifacts. Stripping and repair alternate until
/// neither applies: a repair can expose a fresh wrapper (a stray marker
/// glued to a CDATA delimiter) and a stripped wrapper can expose fresh
/// artifacts, so a single pass of each is not enough to make the function a
/// no-op on its own output. The loop terminates because every round strictly
/// shrinks the string.
///
/// Returns `Cow::Borrowed` when the input needs no rewriting (common case).
pub fn clean_text(raw: &str) -> Cow<'_, str> {
    let stripped = strip_wrappers(raw);
    if !needs_repair(stripped) {
        return Cow::Borrowed(stripped);
    }

    let mut out = repair(stripped);
    loop {
        let stripped = strip_wrappers(&out);
        if !needs_repair(stripped) {
            if stripped.len() != out.len() {
                out = stripped.to_string();
            }
            return Cow::Owned(out);
        }
        out = repair(stripped);
    }
}

fn needs_repair(s: &str) -> bool {
    MOJIBAKE_REPAIRS
        .iter()
        .any(|(artifact, _)| s.contains(artifact))
}

/// Removes surrounding whitespace and literal CDATA markers until neither
/// remains. Pure slicing; never allocates.
fn strip_wrappers(mut s: &str) -> &str {
    loop {
        let stripped = strip_cdata_markers(s.trim());
        if stripped.len() == s.len() {
            return stripped;
        }
        s = stripped;
    }
}

/// Strips one leading CDATA open marker and one trailing close marker.
/// Either may be present independently.
fn strip_cdata_markers(s: &str) -> &str {
    let s = s.strip_prefix(CDATA_OPEN).unwrap_or(s);
    s.strip_suffix(CDATA_CLOSE).unwrap_or(s)
}

/// Applies the repair table in order over the whole string.
fn repair(s: &str) -> String {
    let mut out = s.to_string();
    for (artifact, replacement) in MOJIBAKE_REPAIRS {
        out = out.replace(artifact, replacement);
    }
    out
}
