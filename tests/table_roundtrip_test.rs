//! Pure codec and table-assembly tests that need no broker.

mod common;

use tablestream::{FieldValue, JsonRowSerializer, Row, Serializer, Table};

fn pokemon_row() -> Row {
    Row::new()
        .with_field("name", FieldValue::String("Pikachu".to_string()))
        .with_field("type", FieldValue::String("Electric".to_string()))
}

#[test]
fn test_pokemon_row_survives_the_wire_format() {
    common::init_logger();

    let bytes = JsonRowSerializer.serialize(&pokemon_row()).unwrap();
    let decoded = JsonRowSerializer.deserialize(&bytes).unwrap();

    let table = Table::from_rows(vec![decoded]);
    assert_eq!(table.num_rows(), 1);
    assert_eq!(table.columns(), &["name", "type"]);
    assert_eq!(
        table.row(0).unwrap().get("name"),
        Some(&FieldValue::String("Pikachu".to_string()))
    );
    assert_eq!(
        table.row(0).unwrap().get("type"),
        Some(&FieldValue::String("Electric".to_string()))
    );
}

#[test]
fn test_every_row_round_trips_to_an_equivalent_mapping() {
    let rows = vec![
        Row::new()
            .with_field("name", FieldValue::String("Bulbasaur".to_string()))
            .with_field("hp", FieldValue::Integer(45))
            .with_field("legendary", FieldValue::Boolean(false)),
        Row::new()
            .with_field("name", FieldValue::String("Mewtwo".to_string()))
            .with_field("hp", FieldValue::Integer(106))
            .with_field("catch_rate", FieldValue::Float(0.03))
            .with_field("legendary", FieldValue::Boolean(true)),
        Row::new().with_field("name", FieldValue::Null),
    ];

    for row in &rows {
        let bytes = JsonRowSerializer.serialize(row).unwrap();
        let decoded = JsonRowSerializer.deserialize(&bytes).unwrap();
        assert_eq!(&decoded, row, "row changed across the wire: {:?}", row);
    }
}

#[test]
fn test_assembled_table_unions_heterogeneous_rows() {
    let rows = vec![
        Row::new()
            .with_field("name", FieldValue::String("Pikachu".to_string()))
            .with_field("type", FieldValue::String("Electric".to_string())),
        Row::new()
            .with_field("name", FieldValue::String("Snorlax".to_string()))
            .with_field("weight", FieldValue::Integer(460)),
    ];

    let table = Table::from_rows(rows);
    assert_eq!(table.columns(), &["name", "type", "weight"]);
    assert!(table.row(1).unwrap().get("type").is_none());
}

#[test]
fn test_wire_payload_keys_are_column_names() {
    let row = Row::new()
        .with_field("name", FieldValue::String("Pikachu".to_string()))
        .with_field("hp", FieldValue::Integer(35));

    let bytes = JsonRowSerializer.serialize(&row).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["hp", "name"]);
}

#[test]
fn test_empty_payload_cannot_decode() {
    let result = JsonRowSerializer.deserialize(b"");
    assert!(result.is_err());
}
