//! Persisted code tables.
//!
//! Closed enumerations that are stored as small integers implement [`PersistedCode`]. Codes
//! are stable: a variant's code never changes once rows carry it. Tables are declared with
//! `persisted_code!`, which builds `ALL` and `code` from one list; the exhaustive `match` in
//! `code` rejects a list that omits a variant. Each table is checked once at startup with
//! [`verify_code_table`] so a duplicated or mismatched code stops the server before any row
//! is read.

use std::collections::HashSet;

use crate::{
    model::{barcode::BarcodeType, game::AgeRating},
    server::error::internal::InternalError,
};

/// A closed enumeration persisted as a small-integer code.
pub trait PersistedCode: Sized + Copy + PartialEq + 'static {
    /// Name of the code table, used in error messages.
    const TABLE: &'static str;

    /// Every variant of the enumeration.
    const ALL: &'static [Self];

    /// Stored code of this variant.
    fn code(self) -> i16;

    /// Variant stored under `code`, if any.
    fn from_code(code: i16) -> Option<Self> {
        Self::ALL.iter().copied().find(|variant| variant.code() == code)
    }

    /// Decodes a stored code, failing on codes no variant carries.
    fn decode(code: i16) -> Result<Self, InternalError> {
        Self::from_code(code).ok_or(InternalError::UnknownCode {
            table: Self::TABLE,
            code,
        })
    }
}

/// Implements [`PersistedCode`] for `$ty` from a `Variant => code` list.
macro_rules! persisted_code {
    ($ty:ident, $table:literal, { $($variant:ident => $code:literal),+ $(,)? }) => {
        impl PersistedCode for $ty {
            const TABLE: &'static str = $table;

            const ALL: &'static [Self] = &[$($ty::$variant),+];

            fn code(self) -> i16 {
                match self {
                    $($ty::$variant => $code),+
                }
            }
        }
    };
}

/// Checks that every code in the table is unique and decodes back to its variant.
///
/// # Returns
/// - `Ok(())` - Code table is consistent
/// - `Err(InternalError::DuplicateCode)` - Two variants share a code
/// - `Err(InternalError::CodeMismatch)` - A code decodes to a different variant
pub fn verify_code_table<T: PersistedCode>() -> Result<(), InternalError> {
    let mut seen = HashSet::new();

    for variant in T::ALL.iter().copied() {
        let code = variant.code();

        if !seen.insert(code) {
            return Err(InternalError::DuplicateCode {
                table: T::TABLE,
                code,
            });
        }

        if T::from_code(code) != Some(variant) {
            return Err(InternalError::CodeMismatch {
                table: T::TABLE,
                code,
            });
        }
    }

    Ok(())
}

/// Verifies every code table the application persists.
pub fn verify_code_tables() -> Result<(), InternalError> {
    verify_code_table::<AgeRating>()?;
    verify_code_table::<BarcodeType>()?;

    Ok(())
}

persisted_code!(AgeRating, "age_rating", {
    RatingPending => 0,
    EarlyChildhood => 1,
    Everyone => 2,
    EveryoneTenPlus => 3,
    Teen => 4,
    Mature => 5,
    AdultsOnly => 6,
});

impl AgeRating {
    /// Encodes an optional rating; an absent rating is stored as `RATING_PENDING`.
    pub fn encode_optional(rating: Option<AgeRating>) -> i16 {
        rating.unwrap_or_default().code()
    }

    /// Decodes an optional stored code; an absent code reads as `RATING_PENDING`.
    pub fn decode_optional(code: Option<i16>) -> Result<AgeRating, InternalError> {
        match code {
            Some(code) => AgeRating::decode(code),
            None => Ok(AgeRating::RatingPending),
        }
    }
}

persisted_code!(BarcodeType, "barcode_type", {
    UpcA => 0,
    Ean13 => 1,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_tables_are_consistent() {
        assert!(verify_code_tables().is_ok());
    }

    #[test]
    fn code_lists_match_serialized_variants() {
        let ratings: Vec<String> = AgeRating::ALL
            .iter()
            .map(|rating| serde_json::to_string(rating).unwrap())
            .collect();

        assert_eq!(
            ratings,
            [
                "\"RATING_PENDING\"",
                "\"EARLY_CHILDHOOD\"",
                "\"EVERYONE\"",
                "\"EVERYONE_TEN_PLUS\"",
                "\"TEEN\"",
                "\"MATURE\"",
                "\"ADULTS_ONLY\"",
            ]
        );
        assert_eq!(BarcodeType::ALL, &[BarcodeType::UpcA, BarcodeType::Ean13]);
    }

    #[test]
    fn absent_age_rating_decodes_to_pending() {
        let rating = AgeRating::decode_optional(None).unwrap();

        assert_eq!(rating, AgeRating::RatingPending);
    }

    #[test]
    fn absent_age_rating_encodes_as_pending() {
        assert_eq!(AgeRating::encode_optional(None), 0);
        assert_eq!(AgeRating::encode_optional(Some(AgeRating::Mature)), 5);
    }

    #[test]
    fn decodes_every_age_rating_code() {
        assert_eq!(AgeRating::decode(0).unwrap(), AgeRating::RatingPending);
        assert_eq!(AgeRating::decode(3).unwrap(), AgeRating::EveryoneTenPlus);
        assert_eq!(AgeRating::decode(6).unwrap(), AgeRating::AdultsOnly);
    }

    #[test]
    fn unknown_age_rating_code_fails() {
        let result = AgeRating::decode(42);

        assert!(matches!(
            result,
            Err(InternalError::UnknownCode {
                table: "age_rating",
                code: 42
            })
        ));
    }

    #[test]
    fn unknown_barcode_type_code_fails() {
        assert!(BarcodeType::decode(-1).is_err());
        assert_eq!(BarcodeType::decode(1).unwrap(), BarcodeType::Ean13);
    }

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Clashing {
        First,
        Second,
    }

    impl PersistedCode for Clashing {
        const TABLE: &'static str = "clashing";
        const ALL: &'static [Self] = &[Clashing::First, Clashing::Second];

        fn code(self) -> i16 {
            7
        }
    }

    #[test]
    fn detects_duplicate_codes() {
        let result = verify_code_table::<Clashing>();

        assert!(matches!(
            result,
            Err(InternalError::DuplicateCode { code: 7, .. })
        ));
    }
}
