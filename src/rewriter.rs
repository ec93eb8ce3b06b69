//! Text rewriting applied to every file when a project is created.
//!
//! Rewriting is two passes over one file body:
//! 1. every placeholder with a bound value is replaced by that value,
//! 2. annotation markers are stripped and the line following each marker is
//!    dropped.
//!
//! ```text
//! // @replace const PORT: u16 = @PORT@;
//! const PORT: u16 = 8080;
//! ```
//!
//! The second line keeps the project buildable while it serves as the
//! template source. With `PORT` bound to `9000` the two lines above become
//! `const PORT: u16 = 9000;`.

use crate::binder::ValueMap;
use crate::scanner::PLACEHOLDER;
use log::debug;
use regex::Captures;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Markers recognized when no configuration overrides them.
pub const DEFAULT_MARKERS: [&str; 2] = ["//@replace", "// @replace"];

/// Backs the free [`rewrite`] function.
static DEFAULT_REWRITER: LazyLock<Rewriter> = LazyLock::new(Rewriter::default);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    Scanning,
    LineConsumed,
}

/// Rewrites file bodies with a fixed marker list.
#[derive(Debug, Clone)]
pub struct Rewriter {
    markers: Vec<String>,
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::new(DEFAULT_MARKERS)
    }
}

impl Rewriter {
    /// Creates a rewriter recognizing `markers`. Empty markers are dropped
    /// since they would match every line.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let markers = markers
            .into_iter()
            .map(Into::into)
            .filter(|marker: &String| !marker.is_empty())
            .collect();
        Self { markers }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Substitutes placeholders, then strips annotations.
    pub fn rewrite(&self, content: &str, values: &ValueMap) -> String {
        let substituted = substitute(content, values);
        self.strip_annotations(&substituted)
    }

    /// Finds the leftmost marker on `line`. On a tie the marker listed first
    /// wins.
    fn find_marker(&self, line: &str) -> Option<(usize, &str)> {
        self.markers
            .iter()
            .filter_map(|marker| line.find(marker.as_str()).map(|pos| (pos, marker.as_str())))
            .min_by_key(|(pos, _)| *pos)
    }

    /// Removes annotation markers and the line following each of them.
    ///
    /// The text after the last `\n` is emitted as is and never inspected for
    /// a marker. That matches how existing templates have always been
    /// rendered, so a marker on the final unterminated line survives.
    pub fn strip_annotations(&self, text: &str) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let last = lines.len() - 1;
        let mut output = String::with_capacity(text.len());
        let mut state = LineState::Scanning;

        for (index, line) in lines.iter().enumerate() {
            if state == LineState::LineConsumed {
                debug!("Dropping line {} after annotation", index + 1);
                state = LineState::Scanning;
                continue;
            }

            if index == last {
                output.push_str(line);
                break;
            }

            match self.find_marker(line) {
                Some((pos, marker)) => {
                    output.push_str(&line[..pos]);
                    output.push_str(line[pos + marker.len()..].trim_start_matches(' '));
                    state = LineState::LineConsumed;
                }
                None => output.push_str(line),
            }
            output.push('\n');
        }

        output
    }
}

/// Replaces every bound placeholder with its value. Unbound placeholders are
/// left in place. Values are inserted verbatim and never re-scanned.
pub fn substitute<'a>(content: &'a str, values: &ValueMap) -> Cow<'a, str> {
    PLACEHOLDER.replace_all(content, |caps: &Captures| match values.get(&caps[1]) {
        Some(value) => value.clone(),
        None => caps[0].to_string(),
    })
}

/// Rewrites `content` with the default markers.
pub fn rewrite(content: &str, values: &ValueMap) -> String {
    DEFAULT_REWRITER.rewrite(content, values)
}
