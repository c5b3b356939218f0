//! This module provides the parser for rover protocol lines, utilizing the `pest` crate.
//! Each line is matched against the single grammar rule that the caller expects next.

use crate::types::{Direction, Instruction, LineKind, Plateau, Position, RoverError};
use pest::{iterators::Pair, Parser as PestParser};
use pest_derive::Parser as PestParser;

/// Derives a `PestParser` for the rover line grammar defined in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct RoverLineParser;

/// A successfully parsed protocol line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Plateau(Plateau),
    Position(Position),
    Instructions(Vec<Instruction>),
}

impl ParsedLine {
    pub fn kind(&self) -> LineKind {
        match self {
            ParsedLine::Plateau(_) => LineKind::Plateau,
            ParsedLine::Position(_) => LineKind::Position,
            ParsedLine::Instructions(_) => LineKind::Instructions,
        }
    }
}

/// Parses one input line as the given kind of line.
///
/// The line is used as-is: surrounding whitespace, lowercase letters, signs and numbers
/// too large for a `u32` all make it invalid.
///
/// # Returns
///
/// * `Ok(ParsedLine)` matching `kind` if the line has the expected shape.
/// * `Err(RoverError::InvalidLine)` otherwise.
pub fn parse_line(line: &str, kind: LineKind) -> Result<ParsedLine, RoverError> {
    let invalid = || RoverError::invalid_line(line, Some(kind));

    let rule = match kind {
        LineKind::Plateau => Rule::plateau_line,
        LineKind::Position => Rule::position_line,
        LineKind::Instructions => Rule::instructions_line,
    };

    let root = RoverLineParser::parse(rule, line)
        .map_err(|_| invalid())?
        .next()
        .ok_or_else(invalid)?;

    match kind {
        LineKind::Plateau => parse_plateau(root).ok_or_else(invalid),
        LineKind::Position => parse_position(root).ok_or_else(invalid),
        LineKind::Instructions => parse_instructions(root).ok_or_else(invalid),
    }
}

/// Parses `<x> <y>` into plateau bounds.
fn parse_plateau(pair: Pair<Rule>) -> Option<ParsedLine> {
    let numbers = parse_numbers(pair)?;
    match numbers.as_slice() {
        [max_x, max_y] => Some(ParsedLine::Plateau(Plateau::new(*max_x, *max_y))),
        _ => None,
    }
}

/// Parses `<x> <y> <facing>` into a landing position.
fn parse_position(pair: Pair<Rule>) -> Option<ParsedLine> {
    let numbers = parse_numbers(pair.clone())?;
    let direction = pair
        .into_inner()
        .find(|p| p.as_rule() == Rule::facing)
        .and_then(|p| p.as_str().chars().next())
        .and_then(Direction::from_letter)?;

    match numbers.as_slice() {
        [x, y] => Some(ParsedLine::Position(Position::new(*x, *y, direction))),
        _ => None,
    }
}

/// Parses `[LMR]+` into a list of instructions, in order.
fn parse_instructions(pair: Pair<Rule>) -> Option<ParsedLine> {
    pair.into_inner()
        .filter(|p| p.as_rule() == Rule::instruction)
        .map(|p| p.as_str().chars().next().and_then(Instruction::from_char))
        .collect::<Option<Vec<_>>>()
        .map(ParsedLine::Instructions)
}

/// Collects every `number` child as a `u32`, failing on overflow.
fn parse_numbers(pair: Pair<Rule>) -> Option<Vec<u32>> {
    pair.into_inner()
        .filter(|p| p.as_rule() == Rule::number)
        .map(|p| p.as_str().parse::<u32>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(line: &str, kind: LineKind) {
        assert_eq!(
            parse_line(line, kind),
            Err(RoverError::InvalidLine {
                line: line.to_string(),
                expected: Some(kind),
            }),
            "expected {line:?} to be rejected as a {kind} line"
        );
    }

    #[test]
    fn test_parse_plateau_line() {
        assert_eq!(
            parse_line("5 5", LineKind::Plateau),
            Ok(ParsedLine::Plateau(Plateau::new(5, 5)))
        );
        assert_eq!(
            parse_line("0 12", LineKind::Plateau),
            Ok(ParsedLine::Plateau(Plateau::new(0, 12)))
        );
    }

    #[test]
    fn test_parse_position_line() {
        assert_eq!(
            parse_line("1 2 N", LineKind::Position),
            Ok(ParsedLine::Position(Position::new(1, 2, Direction::North)))
        );
        assert_eq!(
            parse_line("3 3 E", LineKind::Position),
            Ok(ParsedLine::Position(Position::new(3, 3, Direction::East)))
        );
    }

    #[test]
    fn test_parse_instructions_line() {
        assert_eq!(
            parse_line("LMR", LineKind::Instructions),
            Ok(ParsedLine::Instructions(vec![
                Instruction::Left,
                Instruction::Move,
                Instruction::Right,
            ]))
        );
    }

    #[test]
    fn test_parse_wrong_shape() {
        assert_invalid("5 5 N", LineKind::Plateau);
        assert_invalid("5", LineKind::Plateau);
        assert_invalid("5 5", LineKind::Position);
        assert_invalid("1 2 X", LineKind::Position);
        assert_invalid("1 2 n", LineKind::Position);
        assert_invalid("LMRX", LineKind::Instructions);
        assert_invalid("1 2 N", LineKind::Instructions);
    }

    #[test]
    fn test_parse_empty_line() {
        assert_invalid("", LineKind::Plateau);
        assert_invalid("", LineKind::Position);
        assert_invalid("", LineKind::Instructions);
    }

    #[test]
    fn test_parse_rejects_extra_whitespace() {
        assert_invalid(" 5 5", LineKind::Plateau);
        assert_invalid("5  5", LineKind::Plateau);
        assert_invalid("1 2 N ", LineKind::Position);
        assert_invalid("L M", LineKind::Instructions);
    }

    #[test]
    fn test_parse_rejects_negative_and_overflow() {
        assert_invalid("-1 5", LineKind::Plateau);
        assert_invalid("4294967296 1", LineKind::Plateau);
        assert_invalid("1 99999999999 S", LineKind::Position);
    }

    #[test]
    fn test_parsed_line_kind() {
        let parsed = parse_line("MM", LineKind::Instructions).unwrap();
        assert_eq!(parsed.kind(), LineKind::Instructions);
    }
}
