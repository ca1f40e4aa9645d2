//! Lexer for `Fn::Sub` template strings.
//!
//! A substitution string mixes plain text with `${Name}` and
//! `${Name.Attribute}` variables. `${!Text}` is an escape that renders the
//! literal `${Text}` and never names a variable.
//!
//! The lexer is total: malformed input such as an unterminated `${` is
//! treated as plain text.

use winnow::{
    Parser as _,
    combinator::{alt, delimited, repeat},
    error::{ContextError, ErrMode},
    token::{literal, rest, take_till, take_until},
};

type Input<'a> = &'a str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// One lexical part of a substitution string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubPart<'a> {
    /// Plain text between variables.
    Text(&'a str),
    /// The body of a `${!...}` escape.
    Literal(&'a str),
    /// A `${...}` variable, e.g. `Bucket` or `Bucket.Arn`.
    Variable(&'a str),
}

/// `${!...}`
fn escaped_literal<'a>(input: &mut Input<'a>) -> IResult<SubPart<'a>> {
    delimited("${!", take_till(0.., '}'), '}')
        .map(SubPart::Literal)
        .parse_next(input)
}

/// `${...}`
fn variable<'a>(input: &mut Input<'a>) -> IResult<SubPart<'a>> {
    delimited("${", take_till(1.., '}'), '}')
        .map(|name: &str| SubPart::Variable(name.trim()))
        .parse_next(input)
}

/// Text up to the next `${`, a stray `${` that opens nothing, or the rest of
/// the input.
fn text<'a>(input: &mut Input<'a>) -> IResult<SubPart<'a>> {
    alt((
        take_until(1.., "${"),
        literal("${"),
        rest.verify(|remaining: &str| !remaining.is_empty()),
    ))
    .map(SubPart::Text)
    .parse_next(input)
}

fn sub_part<'a>(input: &mut Input<'a>) -> IResult<SubPart<'a>> {
    alt((escaped_literal, variable, text)).parse_next(input)
}

/// Splits a substitution string into its parts.
pub(crate) fn tokenize(source: &str) -> Vec<SubPart<'_>> {
    let mut input = source;
    let parts: IResult<Vec<SubPart<'_>>> = repeat(0.., sub_part).parse_next(&mut input);
    parts.unwrap_or_default()
}

/// Returns the element names referenced by a substitution string, in order.
///
/// Attribute suffixes are dropped: `${Bucket.Arn}` names `Bucket`.
pub(crate) fn variable_names(source: &str) -> Vec<&str> {
    tokenize(source)
        .into_iter()
        .filter_map(|part| match part {
            SubPart::Variable(name) => Some(element_name(name)),
            SubPart::Text(_) | SubPart::Literal(_) => None,
        })
        .collect()
}

/// Strips an attribute suffix (`Name.Attribute` → `Name`).
pub(crate) fn element_name(reference: &str) -> &str {
    reference
        .split_once('.')
        .map_or(reference, |(name, _)| name)
}
