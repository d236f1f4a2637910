//! Hive export tests

use super::common::*;
use schema_translate::{
    export, export_columns, import_columns, import_message_type, import_schema, ExportOptions,
    Exporter, HiveColumn, LossyPolicy, StructField, StructType, UnifiedType,
};

#[cfg(test)]
mod hive_export_tests {
    use super::*;

    #[test]
    fn test_required_and_optional_fields() {
        init_test_env();

        let record = StructType::new(vec![
            StructField::required("a", UnifiedType::Int32),
            StructField::optional("b", UnifiedType::String),
        ])
        .unwrap();
        let struct_type = UnifiedType::Struct(record.clone());
        assert_eq!(export(&struct_type).unwrap(), "struct<a:int,b:string>");

        let columns = export_columns(&record).unwrap();
        assert_eq!(
            columns,
            vec![
                HiveColumn::new("a", "int", false),
                HiveColumn::new("b", "string", true),
            ]
        );
        assert!(columns.iter().all(|c| c.comment.is_none()));
    }

    #[test]
    fn test_product_record_end_to_end() {
        let record = import_schema(&product_source()).unwrap();
        assert_eq!(
            export(&UnifiedType::Struct(record)).unwrap(),
            "struct<id:bigint,name:string,price:decimal(10,2)>"
        );
    }

    #[test]
    fn test_orders_columns() {
        init_test_env();

        let record = import_message_type(ORDERS_MESSAGE).unwrap();
        let columns = export_columns(&record).unwrap();
        let triples: Vec<(&str, &str, Option<&str>)> = columns.iter().map(|c| c.as_triple()).collect();
        assert_eq!(
            triples,
            vec![
                ("id", "bigint", None),
                ("name", "string", None),
                ("price", "decimal(10,2)", None),
                ("tags", "array<string>", None),
                ("attributes", "map<string,int>", None),
            ]
        );
    }

    #[test]
    fn test_columns_reimport_to_same_record() {
        let record = nullable_record(vec![
            ("id", UnifiedType::Int64),
            ("scores", UnifiedType::array(UnifiedType::Float64)),
            (
                "address",
                UnifiedType::Struct(nullable_record(vec![
                    ("street", UnifiedType::varchar(200).unwrap()),
                    ("zip", UnifiedType::char(5).unwrap()),
                ])),
            ),
        ]);
        let columns = export_columns(&record).unwrap();
        assert_eq!(import_columns(&columns).unwrap(), record);
    }

    #[test]
    fn test_dialect_limits() {
        let too_precise = UnifiedType::decimal(39, 0).unwrap();
        assert!(export(&too_precise).unwrap_err().is_unsupported_target());
        assert!(export(&UnifiedType::char(256).unwrap()).unwrap_err().is_unsupported_target());
        assert!(export(&UnifiedType::varchar(65536).unwrap())
            .unwrap_err()
            .is_unsupported_target());

        assert_eq!(export(&UnifiedType::decimal(38, 38).unwrap()).unwrap(), "decimal(38,38)");
        assert_eq!(export(&UnifiedType::char(255).unwrap()).unwrap(), "char(255)");
        assert_eq!(export(&UnifiedType::varchar(65535).unwrap()).unwrap(), "varchar(65535)");
    }

    #[test]
    fn test_nested_failure_names_the_path() {
        let record = nullable_record(vec![(
            "outer",
            UnifiedType::array(UnifiedType::Struct(nullable_record(vec![(
                "inner",
                UnifiedType::decimal(40, 2).unwrap(),
            )]))),
        )]);
        let err = export_columns(&record).unwrap_err();
        assert_eq!(err.path(), Some("outer.element.inner"));
    }

    #[test]
    fn test_non_primitive_map_key_is_rejected() {
        let key = UnifiedType::array(UnifiedType::Int32);
        let err = export(&UnifiedType::map(key, UnifiedType::String)).unwrap_err();
        assert!(err.is_unsupported_target());
    }

    #[test]
    fn test_case_insensitive_column_collision() {
        let record = nullable_record(vec![("Id", UnifiedType::Int64), ("id", UnifiedType::Int32)]);
        assert!(export_columns(&record).unwrap_err().is_unsupported_target());
    }

    #[test]
    fn test_lossy_policies() {
        let defaults = Exporter::default();
        assert_eq!(defaults.export(&UnifiedType::TimestampMicros).unwrap(), "timestamp");
        assert_eq!(defaults.export(&UnifiedType::enumeration(["a", "b"])).unwrap(), "string");
        assert!(defaults
            .export(&UnifiedType::TimeMillis)
            .unwrap_err()
            .is_unsupported_target());

        let permissive = Exporter::new(ExportOptions {
            time_of_day: LossyPolicy::Widen,
            ..ExportOptions::default()
        });
        assert_eq!(permissive.export(&UnifiedType::TimeMillis).unwrap(), "int");
        assert_eq!(permissive.export(&UnifiedType::TimeMicros).unwrap(), "bigint");

        let strict = Exporter::new(ExportOptions {
            timestamp_micros: LossyPolicy::Reject,
            time_of_day: LossyPolicy::Reject,
            enums: LossyPolicy::Reject,
        });
        assert!(strict.export(&UnifiedType::TimestampMicros).is_err());
        assert!(strict.export(&UnifiedType::enumeration(["a"])).is_err());
        assert_eq!(strict.export(&UnifiedType::TimestampMillis).unwrap(), "timestamp");
    }

    #[test]
    fn test_field_names_are_preserved_and_quoted() {
        let record = nullable_record(vec![
            ("CamelCase", UnifiedType::Int32),
            ("with space", UnifiedType::String),
        ]);
        assert_eq!(
            export(&UnifiedType::Struct(record)).unwrap(),
            "struct<CamelCase:int,`with space`:string>"
        );
    }
}
