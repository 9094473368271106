//! Pattern rules for punctuation mapping
//!
//! Each rule pairs an anchored regex with the replacement it emits.
//! A pattern may consume neighboring characters to decide quote
//! orientation, but capture group 1 delimits the span the directive
//! actually covers. Rules are tried in list order at every position;
//! the first that fires wins, so the single-quote sub-rules encode
//! their priority by placement.

use regex::Regex;

use crate::category::{self, Category};
use crate::config::Config;
use crate::directive::Directive;
use crate::error::Result;

/// Context check run before a rule may fire, given the full text and
/// the position being matched
pub type Precondition = fn(&str, usize) -> bool;

/// A single replacement rule
pub struct PatternRule {
    /// Name for debugging
    pub name: &'static str,
    /// Compiled regex, anchored at the match position; capture group 1
    /// is the replaced span
    pattern: Regex,
    /// Category this rule belongs to
    pub category: Category,
    /// String the host should display over the captured span
    pub replacement: &'static str,
    /// Extra context check (e.g. hyphen-run boundaries)
    precondition: Option<Precondition>,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(
        name: &'static str,
        pattern: &str,
        category: Category,
        replacement: &'static str,
    ) -> Result<Self> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            category,
            replacement,
            precondition: None,
        })
    }

    /// Attach a precondition to this rule
    pub fn with_precondition(mut self, precondition: Precondition) -> Self {
        self.precondition = Some(precondition);
        self
    }

    /// Try to match at `pos`
    ///
    /// Returns a directive covering capture group 1 only; characters
    /// the pattern consumed for context stay untouched.
    pub fn match_at(&self, text: &str, pos: usize) -> Option<Directive> {
        if pos >= text.len() {
            return None;
        }
        if let Some(precondition) = self.precondition {
            if !precondition(text, pos) {
                return None;
            }
        }
        let captures = self.pattern.captures(&text[pos..])?;
        let span = captures.get(1)?;
        Some(Directive::new(
            pos + span.start(),
            pos + span.end(),
            self.replacement,
        ))
    }
}

/// Build the priority-ordered rule list for a configuration
///
/// Order is significant only among the single-quote sub-rules: the
/// exception rule must come before the generic opening rule (so 'bout
/// closes rather than opens), and the inner possessive rule before the
/// closing rule. Disabled categories contribute no rules.
pub fn build_rules(config: &Config) -> Result<Vec<PatternRule>> {
    let mut rules = Vec::new();

    if config.double_quotes {
        rules.push(PatternRule::new(
            "double-open",
            r#"^(")[[:alnum:][:punct:]]"#,
            Category::DoubleQuote,
            category::LEFT_DOUBLE,
        )?);
        rules.push(PatternRule::new(
            "double-close",
            r#"^[[:alnum:][:punct:]](")"#,
            Category::DoubleQuote,
            category::RIGHT_DOUBLE,
        )?);
    }

    if config.single_quotes {
        rules.push(PatternRule::new(
            "single-exception",
            &exception_pattern(&config.exceptions),
            Category::SingleQuote,
            category::RIGHT_SINGLE,
        )?);
        rules.push(PatternRule::new(
            "single-inner",
            r"^[[:alnum:]](')[[:alnum:]]",
            Category::SingleQuote,
            category::RIGHT_SINGLE,
        )?);
        rules.push(PatternRule::new(
            "single-open",
            r"^(')[[:alnum:][:punct:]]",
            Category::SingleQuote,
            category::LEFT_SINGLE,
        )?);
        rules.push(PatternRule::new(
            "single-close",
            r"^[[:alnum:][:punct:]](')",
            Category::SingleQuote,
            category::RIGHT_SINGLE,
        )?);
    }

    if config.en_dash {
        rules.push(
            PatternRule::new(
                "en-dash",
                r"^(--)(?:[^-]|$)",
                Category::EnDash,
                category::EN_DASH,
            )?
            .with_precondition(not_in_hyphen_run),
        );
    }

    if config.em_dash {
        rules.push(
            PatternRule::new(
                "em-dash",
                r"^(---)(?:[^-]|$)",
                Category::EmDash,
                category::EM_DASH,
            )?
            .with_precondition(not_in_hyphen_run),
        );
    }

    if config.sentence_spacing {
        rules.push(
            PatternRule::new(
                "sentence-spacing",
                r"^( )[^\s]",
                Category::SentenceSpacing,
                category::SENTENCE_SPACE,
            )?
            .with_precondition(after_sentence_end),
        );
    }

    Ok(rules)
}

/// Build the anchored regex for the exception rule
///
/// Fragments are matched literally and case-insensitively, in list
/// order, each requiring a word boundary after it so 'tis fires but
/// 'tissue does not. The decade pattern (two digits plus an optional
/// trailing s, as in '90s) is built in.
fn exception_pattern(fragments: &[String]) -> String {
    let mut alternatives: Vec<String> = fragments.iter().map(|f| regex::escape(f)).collect();
    alternatives.push("[0-9][0-9]s?".to_string());
    format!(r"^(')(?i:{})\b", alternatives.join("|"))
}

/// Reject dash matches that continue an earlier hyphen run
///
/// Combined with the trailing lookahead in the dash patterns, this
/// makes runs of four or more hyphens produce no directives at all.
fn not_in_hyphen_run(text: &str, pos: usize) -> bool {
    !text[..pos].ends_with('-')
}

/// Check that the text before `pos` ends a sentence: one of `.` `!` `?`
/// optionally followed by closing quotes or brackets
fn after_sentence_end(text: &str, pos: usize) -> bool {
    let mut chars = text[..pos].chars().rev();
    let mut current = chars.next();
    while matches!(current, Some('"' | '\'' | ')' | ']')) {
        current = chars.next();
    }
    matches!(current, Some('.' | '!' | '?'))
}
