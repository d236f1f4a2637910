//! Common utilities for integration tests

use std::sync::Once;

use schema_translate::{
    Annotation, PhysicalType, SourceType, StructField, StructType, UnifiedType,
};

static INIT: Once = Once::new();

/// Initialize test logging once per process
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
    });
}

/// Orders schema used across the end-to-end tests
pub const ORDERS_MESSAGE: &str = "
    message orders {
        required int64 id;
        optional binary name (UTF8);
        required fixed_len_byte_array(5) price (DECIMAL(10,2));
        optional group tags (LIST) {
            repeated group list {
                optional binary element (UTF8);
            }
        }
        optional group attributes (MAP) {
            repeated group key_value {
                required binary key (UTF8);
                optional int32 value;
            }
        }
    }
";

/// `[id: Int64, name: optional String, price: Decimal(10,2)]` as a source tree
pub fn product_source() -> SourceType {
    SourceType::group(
        "product",
        vec![
            SourceType::primitive("id", PhysicalType::Int64),
            SourceType::primitive("name", PhysicalType::ByteArray)
                .with_annotation(Annotation::Utf8)
                .optional(),
            SourceType::primitive("price", PhysicalType::FixedLenByteArray { length: 5 })
                .with_annotation(Annotation::decimal(10, 2)),
        ],
    )
}

/// Build a record whose fields are all nullable
pub fn nullable_record(fields: Vec<(&str, UnifiedType)>) -> StructType {
    let fields = fields
        .into_iter()
        .map(|(name, data_type)| StructField::optional(name, data_type))
        .collect();
    StructType::new(fields).expect("test record must be valid")
}
