/// Characters that cannot appear in a corpus file name
pub const RESERVED_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Substituted for every reserved or control character
pub const REPLACEMENT_CHAR: char = '_';

/// Extension of corpus entries
pub const ENTRY_EXTENSION: &str = "txt";

/// Longest file stem in bytes; leaves room for the extension under the
/// 255-byte name limit of common filesystems
pub const MAX_STEM_BYTES: usize = 200;

/// Makes an untrusted song title safe to use as a file stem
///
/// Every reserved character and every control character is replaced with
/// [`REPLACEMENT_CHAR`]; surrounding whitespace is trimmed. The result is
/// cut to at most [`MAX_STEM_BYTES`] bytes on a character boundary. An empty
/// title becomes a single replacement character so the result is never empty.
///
/// # Examples
///
/// ```
/// use lyric_harvest::naming::sanitize_title;
///
/// assert_eq!(sanitize_title("What's Up? (Live)"), "What's Up_ (Live)");
/// assert_eq!(sanitize_title("AC/DC: <Remix>"), "AC_DC_ _Remix_");
/// ```
pub fn sanitize_title(title: &str) -> String {
    let sanitized: String = title
        .trim()
        .chars()
        .map(|c| {
            if RESERVED_CHARS.contains(&c) || c.is_control() {
                REPLACEMENT_CHAR
            } else {
                c
            }
        })
        .collect();
    let sanitized = truncate_bytes(&sanitized, MAX_STEM_BYTES).trim_end();

    if sanitized.is_empty() {
        REPLACEMENT_CHAR.to_string()
    } else {
        sanitized.to_string()
    }
}

/// Longest prefix of `s` that fits in `max` bytes without splitting a char
fn truncate_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let end = (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0);
    &s[..end]
}

/// File name of the corpus entry for a song title
pub fn entry_file_name(title: &str) -> String {
    format!("{}.{}", sanitize_title(title), ENTRY_EXTENSION)
}

/// Directory name for an artist inside its genre directory
///
/// Whitespace runs become a single underscore and characters other than
/// alphanumerics and hyphens are dropped, so `"dan + shay"` maps to
/// `"dan_shay"`. The downstream preprocessing step recovers a display name
/// by turning underscores back into spaces.
pub fn artist_dir_name(name: &str) -> String {
    let dir = name
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if dir.is_empty() {
        REPLACEMENT_CHAR.to_string()
    } else {
        dir
    }
}
