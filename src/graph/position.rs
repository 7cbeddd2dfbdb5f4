//! Position keys of adjacency cells
//!
//! A cell's `position` names the two members it connects as
//! `"{source}_{target}"`, using the loader's 1-based member ids.
//! Vertices are 0-based, so both ids are shifted down by one.

use crate::error::PositionError;

pub const POSITION_SEPARATOR: char = '_';

/// Parse a position key into 0-based `(source, target)` vertex indices.
///
/// Exactly two integer tokens are required; tokens are not trimmed.
/// The result is signed: an id of `0` or below yields a negative index,
/// which is left for the caller to reject as out of range.
pub fn parse_position(position: &str) -> Result<(i64, i64), PositionError> {
    if !position.contains(POSITION_SEPARATOR) {
        return Err(PositionError::MissingSeparator);
    }

    let tokens: Vec<&str> = position.split(POSITION_SEPARATOR).collect();
    if tokens.len() != 2 {
        return Err(PositionError::WrongTokenCount(tokens.len()));
    }

    Ok((to_vertex_index(tokens[0])?, to_vertex_index(tokens[1])?))
}

fn to_vertex_index(token: &str) -> Result<i64, PositionError> {
    token
        .parse::<i64>()
        .ok()
        .and_then(|id| id.checked_sub(1))
        .ok_or_else(|| PositionError::InvalidIndex(token.to_string()))
}

/// Inverse of [`parse_position`], mostly useful for fixtures
pub fn format_position(source: usize, target: usize) -> String {
    format!("{}{}{}", source + 1, POSITION_SEPARATOR, target + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_converts_to_zero_based() {
        assert_eq!(parse_position("1_2"), Ok((0, 1)));
        assert_eq!(parse_position("3_7"), Ok((2, 6)));
        assert_eq!(parse_position("441_12"), Ok((440, 11)));
    }

    #[test]
    fn test_parse_allows_self_pair() {
        assert_eq!(parse_position("5_5"), Ok((4, 4)));
    }

    #[test]
    fn test_parse_zero_and_negative_ids_give_negative_indices() {
        assert_eq!(parse_position("0_2"), Ok((-1, 1)));
        assert_eq!(parse_position("-1_2"), Ok((-2, 1)));
        assert_eq!(parse_position("+1_2"), Ok((0, 1)));
    }

    #[test]
    fn test_parse_rejects_single_token() {
        assert_eq!(parse_position("1"), Err(PositionError::MissingSeparator));
        assert_eq!(parse_position(""), Err(PositionError::MissingSeparator));
    }

    #[test]
    fn test_parse_rejects_extra_tokens() {
        assert_eq!(parse_position("1_2_3"), Err(PositionError::WrongTokenCount(3)));
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        assert_eq!(
            parse_position("a_2"),
            Err(PositionError::InvalidIndex("a".to_string()))
        );
        assert_eq!(
            parse_position("1_"),
            Err(PositionError::InvalidIndex(String::new()))
        );
        assert_eq!(
            parse_position(" 1_2"),
            Err(PositionError::InvalidIndex(" 1".to_string()))
        );
        assert_eq!(
            parse_position("1_99999999999999999999"),
            Err(PositionError::InvalidIndex("99999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_format_round_trips() {
        assert_eq!(format_position(0, 1), "1_2");
        assert_eq!(parse_position(&format_position(9, 3)), Ok((9, 3)));
    }
}
