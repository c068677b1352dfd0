// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for search results.
//!
//! The web UI turns segments into text nodes and `<span class="...">`
//! marks; here marks become bold yellow. Colors are skipped when stdout is
//! not a TTY or `NO_COLOR` is set, so piping into a file stays clean.

use docfind::types::{Segment, SegmentKind};

const RESET: &str = "\x1b[0m";
const BOLD_YELLOW: &str = "\x1b[1;33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";

/// Whether to emit ANSI escapes at all.
pub fn use_color() -> bool {
    atty::is(atty::Stream::Stdout) && std::env::var_os("NO_COLOR").is_none()
}

/// Flatten a segment list into one line, highlighting marks.
pub fn render_segments(segments: &[Segment], color: bool) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment.kind {
            SegmentKind::Text => out.push_str(&segment.text),
            SegmentKind::Mark => {
                if color {
                    out.push_str(BOLD_YELLOW);
                    out.push_str(&segment.text);
                    out.push_str(RESET);
                } else {
                    out.push_str(&segment.text);
                }
            }
        }
    }
    out
}

/// A component/version group header, like the dropdown's section headers.
pub fn render_header(text: &str, color: bool) -> String {
    if color {
        format!("{DIM}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// A result title line.
pub fn render_title(segments: &[Segment], color: bool) -> String {
    if color {
        format!("{BOLD}{}{RESET}", render_segments(segments, color))
    } else {
        render_segments(segments, color)
    }
}
