//! Insertion planning over a document's line sequence
//!
//! All positional reasoning works on a `Vec<String>` of lines. The video and
//! ad planners mutate the same buffer in turn, so ad boundaries are found on
//! the lines as they stand after the video marker went in.

use crate::markers::Slot;

/// Characters that end a line, alongside the `\r\n` pair
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text into lines on `\r\n` or any single line-break character
///
/// Besides `\n` and `\r` this breaks on vertical tab, form feed, the
/// `\x1c`..`\x1e` separators, NEL, and U+2028/U+2029. A trailing terminator
/// does not produce an empty final line, and empty text yields no lines.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(LINE_BREAKS) {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let tail = &rest[pos..];
                let break_len = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                rest = &tail[break_len..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}

/// Join lines back into text with single `\n` separators
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Trim whitespace, counting the `\x1c`..`\x1f` separators as whitespace too
fn strip(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

fn is_blank(line: &str) -> bool {
    strip(line).is_empty()
}

/// Index of the first line that is a second-level heading
pub fn find_first_h2(lines: &[String]) -> Option<usize> {
    lines.iter().position(|line| strip(line).starts_with("## "))
}

/// Indices of blank lines that sit between two non-blank lines
///
/// Runs of several blank lines never count, and neither do blank lines at
/// the very start or end of the document.
pub fn find_paragraph_boundaries(lines: &[String]) -> Vec<usize> {
    lines
        .windows(3)
        .enumerate()
        .filter(|(_, w)| !is_blank(&w[0]) && is_blank(&w[1]) && !is_blank(&w[2]))
        .map(|(i, _)| i + 1)
        .collect()
}

/// Positions into a boundary sequence of length `count` for ad slots 1 and 2
///
/// Returns `None` when fewer than two boundaries exist. Slot 1 sits at
/// floor(0.4n); slot 2 at floor(0.8n), bumped past slot 1 on a tie and
/// clamped to the last boundary.
pub fn ad_slot_positions(count: usize) -> Option<(usize, usize)> {
    if count < 2 {
        return None;
    }

    let first = count * 2 / 5;
    let mut second = count * 4 / 5;
    if second <= first {
        second = first + 1;
    }
    if second >= count {
        second = count - 1;
    }

    Some((first, second))
}

/// Insert the video marker and a blank line before the first H2 heading
///
/// Returns the line index the marker was placed at, or `None` if the
/// document has no H2 heading (the buffer is left unchanged).
pub fn insert_video_slot(lines: &mut Vec<String>) -> Option<usize> {
    let index = find_first_h2(lines)?;
    lines.insert(index, Slot::Video.tag().to_string());
    lines.insert(index + 1, String::new());
    Some(index)
}

/// Where the two ad markers went, as boundary line indices before insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdPlacement {
    /// Number of paragraph boundaries found
    pub boundary_count: usize,
    /// Blank line index after which ad slot 1 was inserted
    pub first_line: usize,
    /// Blank line index after which ad slot 2 was inserted
    pub second_line: usize,
}

/// Insert both ad markers after paragraph boundaries near 40% and 80%
///
/// Each marker goes directly after its boundary's blank line and is followed
/// by a new blank line. The later boundary is filled first so the earlier
/// index stays valid. Returns `None` (buffer unchanged) when there are fewer
/// than two boundaries.
pub fn insert_ad_slots(lines: &mut Vec<String>) -> Option<AdPlacement> {
    let boundaries = find_paragraph_boundaries(lines);
    let (first, second) = ad_slot_positions(boundaries.len())?;

    let placement = AdPlacement {
        boundary_count: boundaries.len(),
        first_line: boundaries[first],
        second_line: boundaries[second],
    };

    for (line, slot) in [
        (placement.second_line, Slot::Ad2),
        (placement.first_line, Slot::Ad1),
    ] {
        lines.insert(line + 1, slot.tag().to_string());
        lines.insert(line + 2, String::new());
    }

    Some(placement)
}
