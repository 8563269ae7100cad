// SPDX-License-Identifier: PMPL-1.0-or-later

//! Substitution rules.
//!
//! One phrase pair expands into five rules. The comment rules match the phrase
//! anywhere after their prefix; the quoted rules only match a literal whose
//! whole body is the phrase.

use regex::{NoExpand, Regex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// `* phrase` inside a block comment.
    CommentContinuation,
    /// `*phrase` with no space; normalised to `* target`.
    CommentContinuationTight,
    /// `// phrase`.
    LineComment,
    /// `"phrase"` as a complete literal.
    DoubleQuoted,
    /// `'phrase'` as a complete literal.
    SingleQuoted,
}

impl RuleKind {
    /// Application order for a single phrase pair.
    pub const ORDER: [RuleKind; 5] = [
        RuleKind::CommentContinuation,
        RuleKind::CommentContinuationTight,
        RuleKind::LineComment,
        RuleKind::DoubleQuoted,
        RuleKind::SingleQuoted,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RuleKind::CommentContinuation => "comment_continuation",
            RuleKind::CommentContinuationTight => "comment_continuation_tight",
            RuleKind::LineComment => "line_comment",
            RuleKind::DoubleQuoted => "double_quoted",
            RuleKind::SingleQuoted => "single_quoted",
        }
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    Literal(String),
    FullLiteral(Regex),
}

/// A single find/replace step over the whole text.
#[derive(Debug, Clone)]
pub struct Substitution {
    kind: RuleKind,
    matcher: Matcher,
    replacement: String,
}

impl Substitution {
    pub fn new(kind: RuleKind, source: &str, target: &str) -> Self {
        let (matcher, replacement) = match kind {
            RuleKind::CommentContinuation => (
                Matcher::Literal(format!("* {}", source)),
                format!("* {}", target),
            ),
            RuleKind::CommentContinuationTight => (
                Matcher::Literal(format!("*{}", source)),
                format!("* {}", target),
            ),
            RuleKind::LineComment => (
                Matcher::Literal(format!("// {}", source)),
                format!("// {}", target),
            ),
            RuleKind::DoubleQuoted => (quoted(source, '"'), format!("\"{}\"", target)),
            RuleKind::SingleQuoted => (quoted(source, '\''), format!("'{}'", target)),
        };
        Self {
            kind,
            matcher,
            replacement,
        }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Apply the rule, returning the rewritten text and the number of matches.
    pub fn apply(&self, content: &str) -> (String, usize) {
        match &self.matcher {
            Matcher::Literal(pattern) => {
                let count = content.matches(pattern.as_str()).count();
                if count == 0 {
                    (content.to_string(), 0)
                } else {
                    (content.replace(pattern.as_str(), &self.replacement), count)
                }
            }
            Matcher::FullLiteral(regex) => {
                let count = regex.find_iter(content).count();
                if count == 0 {
                    (content.to_string(), 0)
                } else {
                    let replaced = regex.replace_all(content, NoExpand(self.replacement.as_str()));
                    (replaced.into_owned(), count)
                }
            }
        }
    }
}

fn quoted(source: &str, quote: char) -> Matcher {
    let pattern = format!("{q}{}{q}", regex::escape(source), q = quote);
    let regex = Regex::new(&pattern).expect("escaped literal is a valid regex");
    Matcher::FullLiteral(regex)
}

/// Expand a phrase pair into its rules, in application order.
pub fn rules_for(source: &str, target: &str) -> Vec<Substitution> {
    RuleKind::ORDER
        .iter()
        .map(|kind| Substitution::new(*kind, source, target))
        .collect()
}
