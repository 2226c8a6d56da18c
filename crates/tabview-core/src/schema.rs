//! Column classification helpers.
//!
//! Pure functions over a [`Column`]'s `base_type`/`semantic_type` tags.

use crate::model::Column;

pub const TYPE_PK: &str = "type/PK";
pub const TYPE_FK: &str = "type/FK";

const NUMERIC_BASE_TYPES: &[&str] = &[
    "type/Number",
    "type/Integer",
    "type/BigInteger",
    "type/Float",
    "type/Decimal",
];

const COORDINATE_TYPES: &[&str] = &["type/Coordinate", "type/Latitude", "type/Longitude"];

const URL_TYPES: &[&str] = &["type/URL", "type/ImageURL", "type/AvatarURL"];

fn semantic_is(column: &Column, types: &[&str]) -> bool {
    column
        .semantic_type
        .as_deref()
        .is_some_and(|t| types.contains(&t))
}

pub fn is_pk(column: &Column) -> bool {
    semantic_is(column, &[TYPE_PK])
}

pub fn is_fk(column: &Column) -> bool {
    semantic_is(column, &[TYPE_FK])
}

/// Identifier column: primary or foreign key.
pub fn is_id(column: &Column) -> bool {
    is_pk(column) || is_fk(column)
}

pub fn is_numeric(column: &Column) -> bool {
    NUMERIC_BASE_TYPES.contains(&column.base_type.as_str())
}

pub fn is_coordinate(column: &Column) -> bool {
    semantic_is(column, COORDINATE_TYPES)
}

pub fn is_temporal(column: &Column) -> bool {
    let base = column.base_type.as_str();
    base.starts_with("type/Date") || base.starts_with("type/Time") || base == "type/Temporal"
}

pub fn is_url(column: &Column) -> bool {
    semantic_is(column, URL_TYPES)
}

/// Numeric measures are right aligned. Keys and coordinates are numeric too
/// but align left.
pub fn is_column_right_aligned(column: &Column) -> bool {
    is_numeric(column) && !is_id(column) && !is_coordinate(column)
}

/// A non-empty run of ASCII digits.
pub fn is_positive_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_detection() {
        let pk = Column::new("ID", "type/BigInteger").with_semantic_type(TYPE_PK);
        let fk = Column::new("USER_ID", "type/Integer").with_semantic_type(TYPE_FK);
        let plain = Column::new("TOTAL", "type/Float");

        assert!(is_pk(&pk) && is_id(&pk) && !is_fk(&pk));
        assert!(is_fk(&fk) && is_id(&fk) && !is_pk(&fk));
        assert!(!is_id(&plain));
    }

    #[test]
    fn test_right_alignment() {
        assert!(is_column_right_aligned(&Column::new("TOTAL", "type/Float")));
        assert!(is_column_right_aligned(&Column::new("QTY", "type/Integer")));
        assert!(!is_column_right_aligned(&Column::new("NAME", "type/Text")));
    }

    #[test]
    fn test_keys_and_coordinates_align_left() {
        let pk = Column::new("ID", "type/Integer").with_semantic_type(TYPE_PK);
        let fk = Column::new("USER_ID", "type/Integer").with_semantic_type(TYPE_FK);
        let lat = Column::new("LAT", "type/Float").with_semantic_type("type/Latitude");
        for column in [&pk, &fk, &lat] {
            assert!(is_numeric(column));
            assert!(!is_column_right_aligned(column), "{}", column.name);
        }
    }

    #[test]
    fn test_temporal_and_url() {
        assert!(is_temporal(&Column::new("CREATED_AT", "type/DateTime")));
        assert!(is_temporal(&Column::new("DAY", "type/Date")));
        assert!(!is_temporal(&Column::new("NAME", "type/Text")));
        assert!(is_url(
            &Column::new("SITE", "type/Text").with_semantic_type("type/URL")
        ));
    }

    #[test]
    fn test_is_positive_integer() {
        assert!(is_positive_integer("10"));
        assert!(is_positive_integer("0"));
        assert!(!is_positive_integer(""));
        assert!(!is_positive_integer("-1"));
        assert!(!is_positive_integer("1.5"));
        assert!(!is_positive_integer("abc"));
    }
}
