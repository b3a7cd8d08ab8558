//! Dotenv text parser.
//!
//! Each line is handled on its own:
//! 1. Surrounding whitespace is trimmed; blank lines are skipped.
//! 2. Lines starting with `#` (after indentation) are comments.
//! 3. The line is split on the first `=`; a line without one is skipped
//!    with a warning.
//! 4. The key is trimmed and must be a valid identifier, otherwise the line
//!    is skipped with a warning.
//! 5. The value is trimmed. A value wrapped in one pair of matching `'` or
//!    `"` quotes loses exactly that pair and keeps its inner text verbatim.
//!    Unquoted values are kept whole, `#` included.
//! 6. `$NAME` / `${NAME}` references are expanded against earlier entries of
//!    the same file and the target environment, in the [`ExpansionOrder`]
//!    requested.
//! 7. A later assignment of the same key wins.

use crate::constants::{ASSIGNMENT_SEPARATOR, COMMENT_MARKER, QUOTE_CHARS};
use crate::key::is_valid_key;
use crate::parser::expand::expand;
use crate::parser::{ParseWarning, ParsedEnv};
use crate::target::TargetEnv;

/// Outcome of classifying one source line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Comment,
    Assignment { key: &'a str, value: &'a str },
    Invalid(ParseWarning),
}

/// Where a `$NAME` reference is looked up first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionOrder {
    /// Earlier entries of the file shadow the target environment.
    #[default]
    FileFirst,
    /// Variables already in the target shadow the file. Used when loading
    /// without overriding, so values that will not be applied are never
    /// substituted either.
    EnvFirst,
}

/// Parse dotenv `text`, resolving references through `env` when a name is not
/// defined earlier in the file.
///
/// Never fails: malformed lines become warnings.
pub fn parse_dotenv<E>(text: &str, env: &E) -> (ParsedEnv, Vec<ParseWarning>)
where
    E: TargetEnv + ?Sized,
{
    parse_dotenv_with(text, env, ExpansionOrder::FileFirst)
}

/// Like [`parse_dotenv`], with an explicit lookup order for references.
pub fn parse_dotenv_with<E>(
    text: &str,
    env: &E,
    order: ExpansionOrder,
) -> (ParsedEnv, Vec<ParseWarning>)
where
    E: TargetEnv + ?Sized,
{
    split_lines(text).enumerate().fold(
        (ParsedEnv::new(), Vec::new()),
        |(mut parsed, mut warnings), (idx, raw)| {
            match classify(raw, idx + 1) {
                Line::Blank | Line::Comment => {}
                Line::Invalid(warning) => warnings.push(warning),
                Line::Assignment { key, value } => {
                    let expanded = expand(value, |name| {
                        let from_file = || parsed.get(name).map(str::to_string);
                        match order {
                            ExpansionOrder::FileFirst => from_file().or_else(|| env.get(name)),
                            ExpansionOrder::EnvFirst => env.get(name).or_else(from_file),
                        }
                    });
                    parsed.insert(key.to_string(), expanded);
                }
            }
            (parsed, warnings)
        },
    )
}

/// Split on `\n`, `\r\n` or a lone `\r`, like universal-newline text reading.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(pos) => {
                let line = &rest[..pos];
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

fn classify(raw: &str, line: usize) -> Line<'_> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with(COMMENT_MARKER) {
        return Line::Comment;
    }

    let Some((raw_key, raw_value)) = trimmed.split_once(ASSIGNMENT_SEPARATOR) else {
        return Line::Invalid(ParseWarning::MissingSeparator { line });
    };

    let key = raw_key.trim();
    if !is_valid_key(key) {
        return Line::Invalid(ParseWarning::InvalidKey {
            line: Some(line),
            key: key.to_string(),
        });
    }

    Line::Assignment {
        key,
        value: unquote(raw_value.trim()),
    }
}

/// Strip one pair of matching outer quotes, if present.
fn unquote(value: &str) -> &str {
    let mut chars = value.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && QUOTE_CHARS.contains(&first) => {
            &value[first.len_utf8()..value.len() - last.len_utf8()]
        }
        _ => value,
    }
}
