//! Typed breakpoint descriptors.

use cssparser::{BasicParseErrorKind, ParseError, ParseErrorKind, Parser, ParserInput, Token};

use super::environment::{Environment, MediaType};
use crate::error::ConfigurationError;

/// A width constraint inside a breakpoint descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
enum WidthBound {
    Min(f32),
    Max(f32),
    Exact(f32),
}

/// A breakpoint descriptor parsed into a typed predicate, e.g.
/// `screen and (min-width: 500px)`.
///
/// Descriptors are parsed once when a layer compiles its style input, so a
/// malformed descriptor fails configuration up front instead of silently
/// never matching.
///
/// # Example
///
/// ```rust
/// use restyle::{Environment, MediaQuery};
///
/// let query = MediaQuery::parse("screen and (min-width: 500px)").unwrap();
/// assert!(query.matches(&Environment::screen(800)));
/// assert!(!query.matches(&Environment::screen(400)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MediaQuery {
    media_type: MediaType,
    inverted: bool,
    bounds: Vec<WidthBound>,
}

impl MediaQuery {
    /// Parses a descriptor.
    ///
    /// Grammar: `[only|not]? [all|screen|print]? ('and'? '(' feature ':'
    /// length ')')*` with features `width`, `min-width` and `max-width`, and
    /// lengths in `px` or unitless. At least one media type or feature is
    /// required.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MalformedDescriptor`] naming the
    /// descriptor when it cannot be parsed.
    pub fn parse(descriptor: &str) -> Result<Self, ConfigurationError> {
        let mut input = ParserInput::new(descriptor);
        let mut parser = Parser::new(&mut input);
        parse_query(&mut parser).map_err(|err| ConfigurationError::MalformedDescriptor {
            descriptor: descriptor.to_string(),
            reason: describe(&err),
        })
    }

    /// Whether this descriptor is satisfied by `env`.
    pub fn matches(&self, env: &Environment) -> bool {
        let type_ok = match self.media_type {
            MediaType::All => true,
            required => required == env.media_type,
        };
        let width = env.width as f32;
        let bounds_ok = self.bounds.iter().all(|bound| match *bound {
            WidthBound::Min(px) => width >= px,
            WidthBound::Max(px) => width <= px,
            WidthBound::Exact(px) => width == px,
        });
        let satisfied = type_ok && bounds_ok;
        if self.inverted {
            !satisfied
        } else {
            satisfied
        }
    }
}

fn parse_query<'i>(parser: &mut Parser<'i, '_>) -> Result<MediaQuery, ParseError<'i, String>> {
    let mut media_type = None;
    let mut inverted = false;
    let mut bounds = Vec::new();
    let mut first = true;
    let mut saw_term = false;
    let mut dangling_and = false;

    while !parser.is_exhausted() {
        let token = parser.next()?.clone();
        match token {
            Token::Ident(ref ident) => {
                let word = ident.as_ref().to_ascii_lowercase();
                match word.as_str() {
                    "only" if first => {}
                    "not" if first => inverted = true,
                    "and" if saw_term && !dangling_and => {
                        dangling_and = true;
                        first = false;
                        continue;
                    }
                    "all" if media_type.is_none() => {
                        media_type = Some(MediaType::All);
                        saw_term = true;
                    }
                    "screen" if media_type.is_none() => {
                        media_type = Some(MediaType::Screen);
                        saw_term = true;
                    }
                    "print" if media_type.is_none() => {
                        media_type = Some(MediaType::Print);
                        saw_term = true;
                    }
                    _ => {
                        return Err(
                            parser.new_custom_error(format!("unexpected term `{}`", word))
                        )
                    }
                }
            }
            Token::ParenthesisBlock => {
                bounds.push(parser.parse_nested_block(|p| parse_feature(p))?);
                saw_term = true;
            }
            _ => return Err(parser.new_custom_error("unexpected token".to_string())),
        }
        first = false;
        dangling_and = false;
    }

    if !saw_term {
        return Err(parser.new_custom_error("empty descriptor".to_string()));
    }
    if dangling_and {
        return Err(parser.new_custom_error("dangling `and`".to_string()));
    }

    Ok(MediaQuery {
        media_type: media_type.unwrap_or(MediaType::All),
        inverted,
        bounds,
    })
}

fn parse_feature<'i, 't>(p: &mut Parser<'i, 't>) -> Result<WidthBound, ParseError<'i, String>> {
    let name = p.expect_ident()?.as_ref().to_ascii_lowercase();
    p.expect_colon()?;
    let px = expect_px(p)?;
    let bound = match name.as_str() {
        "width" => WidthBound::Exact(px),
        "min-width" => WidthBound::Min(px),
        "max-width" => WidthBound::Max(px),
        _ => {
            return Err(p.new_custom_error(format!("unsupported media feature `{}`", name)))
        }
    };
    p.expect_exhausted()?;
    Ok(bound)
}

fn expect_px<'i, 't>(p: &mut Parser<'i, 't>) -> Result<f32, ParseError<'i, String>> {
    let token = p.next()?.clone();
    match token {
        Token::Dimension { value, ref unit, .. } if unit.as_ref().eq_ignore_ascii_case("px") => {
            Ok(value)
        }
        Token::Dimension { ref unit, .. } => {
            Err(p.new_custom_error(format!("unsupported unit `{}`", unit.as_ref())))
        }
        Token::Number { value, .. } => Ok(value),
        _ => Err(p.new_custom_error("expected a pixel length".to_string())),
    }
}

fn describe(err: &ParseError<'_, String>) -> String {
    match &err.kind {
        ParseErrorKind::Custom(reason) => reason.clone(),
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
            "unexpected end of input".to_string()
        }
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(_)) => {
            "unexpected token".to_string()
        }
        ParseErrorKind::Basic(_) => "invalid descriptor syntax".to_string(),
    }
}
