//! Parquet schema import tests

use super::common::*;
use schema_translate::{
    import, import_message_type, import_schema, Annotation, ImportOptions, Importer, LossyPolicy,
    PhysicalType, SourceType, StructField, UnifiedType,
};

#[cfg(test)]
mod parquet_import_tests {
    use super::*;

    fn decimal(precision: u32, scale: u32) -> UnifiedType {
        UnifiedType::decimal(precision, scale).unwrap()
    }

    #[test]
    fn test_covered_pairs_always_import() {
        init_test_env();

        let flba = |length| PhysicalType::FixedLenByteArray { length };
        let covered: Vec<(PhysicalType, Option<Annotation>, UnifiedType)> = vec![
            (PhysicalType::Boolean, None, UnifiedType::Boolean),
            (PhysicalType::Int32, None, UnifiedType::Int32),
            (PhysicalType::Int32, Some(Annotation::int(8)), UnifiedType::Int8),
            (PhysicalType::Int32, Some(Annotation::int(16)), UnifiedType::Int16),
            (PhysicalType::Int32, Some(Annotation::int(32)), UnifiedType::Int32),
            (PhysicalType::Int32, Some(Annotation::uint(8)), UnifiedType::Int16),
            (PhysicalType::Int32, Some(Annotation::uint(16)), UnifiedType::Int32),
            (PhysicalType::Int32, Some(Annotation::uint(32)), UnifiedType::Int64),
            (PhysicalType::Int32, Some(Annotation::Date), UnifiedType::Date),
            (PhysicalType::Int32, Some(Annotation::TimeMillis), UnifiedType::TimeMillis),
            (PhysicalType::Int32, Some(Annotation::decimal(9, 2)), decimal(9, 2)),
            (PhysicalType::Int64, None, UnifiedType::Int64),
            (PhysicalType::Int64, Some(Annotation::int(64)), UnifiedType::Int64),
            (PhysicalType::Int64, Some(Annotation::uint(64)), decimal(20, 0)),
            (PhysicalType::Int64, Some(Annotation::TimeMicros), UnifiedType::TimeMicros),
            (PhysicalType::Int64, Some(Annotation::TimestampMillis), UnifiedType::TimestampMillis),
            (PhysicalType::Int64, Some(Annotation::TimestampMicros), UnifiedType::TimestampMicros),
            (PhysicalType::Int64, Some(Annotation::decimal(18, 4)), decimal(18, 4)),
            (PhysicalType::Int96, None, UnifiedType::TimestampMillis),
            (PhysicalType::Float, None, UnifiedType::Float32),
            (PhysicalType::Double, None, UnifiedType::Float64),
            (flba(2), Some(Annotation::Float16), UnifiedType::Float32),
            (PhysicalType::ByteArray, None, UnifiedType::Binary),
            (PhysicalType::ByteArray, Some(Annotation::Bson), UnifiedType::Binary),
            (PhysicalType::ByteArray, Some(Annotation::Utf8), UnifiedType::String),
            (PhysicalType::ByteArray, Some(Annotation::Json), UnifiedType::String),
            (
                PhysicalType::ByteArray,
                Some(Annotation::Enum),
                UnifiedType::enumeration(Vec::<String>::new()),
            ),
            (PhysicalType::ByteArray, Some(Annotation::decimal(50, 10)), decimal(50, 10)),
            (flba(12), None, UnifiedType::Binary),
            (flba(16), Some(Annotation::Uuid), UnifiedType::Binary),
            (flba(16), Some(Annotation::decimal(38, 9)), decimal(38, 9)),
        ];

        for (physical, annotation, expected) in covered {
            let mut source = SourceType::primitive("col", physical);
            if let Some(annotation) = annotation.clone() {
                source = source.with_annotation(annotation);
            }
            let imported = import(&source)
                .unwrap_or_else(|e| panic!("{} {:?} failed: {}", physical, annotation, e));
            assert_eq!(imported, expected, "{} {:?}", physical, annotation);
        }
    }

    #[test]
    fn test_int96_ignores_annotation() {
        let source = SourceType::primitive("ts", PhysicalType::Int96)
            .with_annotation(Annotation::TimestampNanos);
        assert_eq!(import(&source).unwrap(), UnifiedType::TimestampMillis);
    }

    #[test]
    fn test_uncovered_pairs_are_rejected() {
        let uncovered = vec![
            SourceType::primitive("t", PhysicalType::Int64).with_annotation(Annotation::TimeNanos),
            SourceType::primitive("t", PhysicalType::Int64).with_annotation(Annotation::TimestampNanos),
            SourceType::primitive("i", PhysicalType::FixedLenByteArray { length: 12 })
                .with_annotation(Annotation::Interval),
            SourceType::primitive("u", PhysicalType::ByteArray)
                .with_annotation(Annotation::Unknown("VARIANT".to_string())),
            SourceType::primitive("d", PhysicalType::Double).with_annotation(Annotation::Utf8),
            SourceType::primitive("b", PhysicalType::Boolean).with_annotation(Annotation::Date),
        ];
        for source in uncovered {
            let err = import(&source).unwrap_err();
            assert!(err.is_unsupported_source(), "{:?} gave {}", source, err);
        }
    }

    #[test]
    fn test_flba_decimal_without_precision_is_rejected() {
        let source = SourceType::primitive("amount", PhysicalType::FixedLenByteArray { length: 8 })
            .with_annotation(Annotation::Decimal {
                precision: None,
                scale: Some(2),
            });
        let err = import(&source).unwrap_err();
        assert!(err.is_unsupported_source());
        assert!(err.to_string().contains("FIXED_LEN_BYTE_ARRAY"));
    }

    #[test]
    fn test_flba_decimal_precision_must_fit_length() {
        // four bytes hold at most nine decimal digits
        let source = SourceType::primitive("amount", PhysicalType::FixedLenByteArray { length: 4 })
            .with_annotation(Annotation::decimal(10, 2));
        assert!(import(&source).unwrap_err().is_unsupported_source());
    }

    #[test]
    fn test_unsigned_reject_policy() {
        let importer = Importer::new(ImportOptions {
            unsigned: LossyPolicy::Reject,
        });
        let source = SourceType::primitive("n", PhysicalType::Int64).with_annotation(Annotation::uint(64));
        assert!(importer.import(&source).unwrap_err().is_unsupported_source());
        // signed integers are unaffected
        let signed = SourceType::primitive("n", PhysicalType::Int32).with_annotation(Annotation::int(16));
        assert_eq!(importer.import(&signed).unwrap(), UnifiedType::Int16);
    }

    #[test]
    fn test_product_record() {
        let record = import_schema(&product_source()).unwrap();
        assert_eq!(
            record.fields(),
            &[
                StructField::required("id", UnifiedType::Int64),
                StructField::optional("name", UnifiedType::String),
                StructField::required("price", decimal(10, 2)),
            ]
        );
    }

    #[test]
    fn test_failing_field_names_its_path() {
        let root = SourceType::group(
            "root",
            vec![
                SourceType::primitive("ok", PhysicalType::Int32),
                SourceType::group(
                    "nested",
                    vec![SourceType::primitive("bad", PhysicalType::Int64)
                        .with_annotation(Annotation::TimestampNanos)],
                ),
            ],
        );
        let err = import_schema(&root).unwrap_err();
        assert_eq!(err.path(), Some("nested.bad"));
    }

    #[test]
    fn test_empty_group_is_rejected() {
        let root = SourceType::group("root", vec![SourceType::group("empty", vec![])]);
        assert!(import_schema(&root).unwrap_err().is_unsupported_source());
    }

    #[test]
    fn test_orders_message_type() {
        init_test_env();

        let record = import_message_type(ORDERS_MESSAGE).unwrap();
        let names: Vec<&str> = record.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "price", "tags", "attributes"]);

        assert_eq!(record.field("id").unwrap().data_type, UnifiedType::Int64);
        assert!(!record.field("id").unwrap().nullable);
        assert_eq!(record.field("price").unwrap().data_type, decimal(10, 2));
        assert_eq!(
            record.field("tags").unwrap().data_type,
            UnifiedType::array(UnifiedType::String)
        );
        assert!(record.field("tags").unwrap().nullable);
        assert_eq!(
            record.field("attributes").unwrap().data_type,
            UnifiedType::map(UnifiedType::String, UnifiedType::Int32)
        );
    }

    #[test]
    fn test_malformed_message_type() {
        let err = import_message_type("message broken { required int99 id; }").unwrap_err();
        assert!(matches!(err, schema_translate::SchemaError::SourceSchema(_)));
    }
}
