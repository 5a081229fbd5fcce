//! Property-based tests for the environment parsing rules.
//!
//! These tests exercise the same parse path the loader uses, without touching
//! the process environment, using randomly generated inputs to catch edge
//! cases the unit tests miss.
//!
//! Test coverage:
//! - Integers: any in-range value's decimal text parses back to itself
//! - Integers: values one past the declared width never parse
//! - Floats: finite values parse back exactly from their shortest representation
//! - Text kinds: any string parses without loss
//! - Booleans: only the twelve conventional spellings parse

use configura::{ConfigValue, Uintptr, Value, ValueKind};
use proptest::prelude::*;

/// Strategy for text that is never one of the accepted boolean spellings.
fn non_bool_strategy() -> impl Strategy<Value = String> {
    "\\PC{0,12}".prop_filter("must not be a boolean spelling", |s| {
        !matches!(
            s.as_str(),
            "1" | "t" | "T" | "TRUE" | "true" | "True" | "0" | "f" | "F" | "FALSE" | "false" | "False"
        )
    })
}

proptest! {
    #[test]
    fn prop_i8_decimal_round_trip(n in any::<i8>()) {
        prop_assert_eq!(i8::parse_env(&n.to_string()), Some(n));
    }

    #[test]
    fn prop_i64_decimal_round_trip(n in any::<i64>()) {
        prop_assert_eq!(i64::parse_env(&n.to_string()), Some(n));
    }

    #[test]
    fn prop_u32_decimal_round_trip(n in any::<u32>()) {
        prop_assert_eq!(u32::parse_env(&n.to_string()), Some(n));
        prop_assert_eq!(ValueKind::Uint32.parse_value(&n.to_string()), Some(Value::Uint32(n)));
    }

    #[test]
    fn prop_uintptr_accepts_every_usize(n in any::<usize>()) {
        prop_assert_eq!(Uintptr::parse_env(&n.to_string()), Some(Uintptr(n)));
    }

    #[test]
    fn prop_i16_rejects_out_of_range(n in (i16::MAX as i64 + 1)..=i64::MAX) {
        prop_assert_eq!(i16::parse_env(&n.to_string()), None);
        prop_assert_eq!(i16::parse_env(&(-n).to_string()), None);
    }

    #[test]
    fn prop_u8_rejects_out_of_range(n in 256u64..=u64::MAX) {
        prop_assert_eq!(u8::parse_env(&n.to_string()), None);
    }

    #[test]
    fn prop_unsigned_rejects_negative(n in 1u64..=u64::MAX) {
        prop_assert_eq!(u64::parse_env(&format!("-{n}")), None);
    }

    #[test]
    fn prop_f64_round_trip(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        prop_assert_eq!(f64::parse_env(&x.to_string()), Some(x));
    }

    #[test]
    fn prop_f32_round_trip(x in any::<f32>().prop_filter("finite", |x| x.is_finite())) {
        prop_assert_eq!(f32::parse_env(&x.to_string()), Some(x));
    }

    #[test]
    fn prop_text_kinds_are_lossless(s in "\\PC{0,32}") {
        prop_assert_eq!(String::parse_env(&s), Some(s.clone()));
        prop_assert_eq!(Vec::<u8>::parse_env(&s), Some(s.as_bytes().to_vec()));
        prop_assert_eq!(Vec::<char>::parse_env(&s), Some(s.chars().collect::<Vec<_>>()));
    }

    #[test]
    fn prop_bool_rejects_other_text(s in non_bool_strategy()) {
        prop_assert_eq!(bool::parse_env(&s), None);
    }
}
