//! Hive type-string grammar tests, including property-based round trips

use super::common::*;
use proptest::prelude::*;
use schema_translate::{
    export, parse_struct_fields, parse_type, ExportOptions, Exporter, LossyPolicy, StructField,
    UnifiedType,
};

/// Types whose Hive rendering re-parses to an equal value
fn primitive_type() -> impl Strategy<Value = UnifiedType> {
    prop_oneof![
        Just(UnifiedType::Boolean),
        Just(UnifiedType::Int8),
        Just(UnifiedType::Int16),
        Just(UnifiedType::Int32),
        Just(UnifiedType::Int64),
        Just(UnifiedType::Float32),
        Just(UnifiedType::Float64),
        Just(UnifiedType::String),
        Just(UnifiedType::Binary),
        Just(UnifiedType::Date),
        Just(UnifiedType::TimestampMillis),
        (1u32..=38)
            .prop_flat_map(|precision| (Just(precision), 0..=precision))
            .prop_map(|(precision, scale)| UnifiedType::decimal(precision, scale).unwrap()),
        (1u32..=255).prop_map(|size| UnifiedType::char(size).unwrap()),
        (1u32..=65535).prop_map(|size| UnifiedType::varchar(size).unwrap()),
    ]
}

fn field_name() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => "[a-z][a-z0-9_]{0,7}",
        1 => "[a-z][a-z ]{0,5}[a-z]",
        1 => "[a-z]{1,3}`[a-z]{1,3}",
    ]
}

fn hive_type() -> impl Strategy<Value = UnifiedType> {
    primitive_type().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(UnifiedType::array),
            (primitive_type(), inner.clone()).prop_map(|(key, value)| UnifiedType::map(key, value)),
            prop::collection::vec((field_name(), inner), 1..5).prop_map(|members| {
                // suffix the position so names stay unique ignoring case
                let fields = members
                    .into_iter()
                    .enumerate()
                    .map(|(i, (name, data_type))| StructField::optional(format!("{}{}", name, i), data_type))
                    .collect();
                UnifiedType::record(fields).unwrap()
            }),
        ]
    })
}

proptest! {
    #[test]
    fn rendered_types_reparse_to_equal_types(data_type in hive_type()) {
        let rendered = export(&data_type).unwrap();
        prop_assert!(!rendered.is_empty());
        prop_assert_eq!(parse_type(&rendered).unwrap(), data_type);
    }

    #[test]
    fn parsing_ignores_keyword_case_and_whitespace(data_type in hive_type()) {
        let rendered = export(&data_type).unwrap();
        // quoted names are case-sensitive, so only touch unquoted renderings
        prop_assume!(!rendered.contains('`'));
        let spaced = rendered.to_uppercase().replace(',', " , ").replace('<', " < ");
        let reparsed = parse_type(&spaced).unwrap();
        prop_assert_eq!(export(&reparsed).unwrap().to_lowercase(), rendered);
    }

    #[test]
    fn invalid_decimal_parameters_are_rejected(precision in 0u32..80, scale in 0u32..80) {
        let result = UnifiedType::decimal(precision, scale);
        if precision == 0 || scale > precision {
            prop_assert!(result.unwrap_err().is_invalid_parameters());
        } else {
            prop_assert!(result.is_ok());
        }
    }
}

#[cfg(test)]
mod grammar_tests {
    use super::*;

    #[test]
    fn test_nested_struct_top_level_fields() {
        init_test_env();

        let fields = parse_struct_fields("struct<x:struct<y:int,z:string>,w:array<int>>").unwrap();
        let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["x", "w"]);
        assert_eq!(fields[0].1.as_struct().unwrap().len(), 2);
        assert_eq!(fields[1].1, UnifiedType::array(UnifiedType::Int32));
    }

    #[test]
    fn test_lossy_renderings_reparse_to_widened_types() {
        let widening = Exporter::new(ExportOptions {
            time_of_day: LossyPolicy::Widen,
            ..ExportOptions::default()
        });
        let cases = vec![
            (UnifiedType::TimestampMicros, UnifiedType::TimestampMillis),
            (UnifiedType::enumeration(["red", "green"]), UnifiedType::String),
            (UnifiedType::TimeMillis, UnifiedType::Int32),
            (UnifiedType::TimeMicros, UnifiedType::Int64),
        ];
        for (original, widened) in cases {
            let rendered = widening.export(&original).unwrap();
            assert_eq!(parse_type(&rendered).unwrap(), widened);
        }
    }

    #[test]
    fn test_hive_aliases_and_defaults() {
        assert_eq!(parse_type("INTEGER").unwrap(), UnifiedType::Int32);
        assert_eq!(parse_type("double precision").unwrap(), UnifiedType::Float64);
        assert_eq!(parse_type("decimal").unwrap(), UnifiedType::decimal(10, 0).unwrap());
        assert_eq!(parse_type("numeric(12)").unwrap(), UnifiedType::decimal(12, 0).unwrap());
    }

    #[test]
    fn test_hive_only_types_are_unsupported() {
        for input in [
            "uniontype<int,string>",
            "void",
            "interval_day_time",
            "timestamp with local time zone",
        ] {
            let err = parse_type(input).unwrap_err();
            assert!(err.is_unsupported_source(), "{} gave {}", input, err);
        }
    }

    #[test]
    fn test_malformed_strings() {
        for input in ["", "array<int", "map<int>", "struct<>", "decimal(10,", "strin", "int int"] {
            let err = parse_type(input).unwrap_err();
            assert!(
                matches!(err, schema_translate::SchemaError::MalformedTypeString { .. }),
                "{:?} gave {}",
                input,
                err
            );
        }
    }
}
