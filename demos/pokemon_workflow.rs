//! End-to-end walkthrough of the four facade operations: create a topic,
//! publish a small table, read it back, render it, delete the topic.
//!
//! Run with a local broker: `cargo run --example pokemon_workflow`

use std::time::Duration;
use tablestream::{FieldValue, Row, Table, TopicApi};

const BROKERS: &str = "localhost:9092";
const TOPIC: &str = "Pokemon";

fn pokemon_table() -> Table {
    Table::from_rows(vec![
        Row::new()
            .with_field("name", FieldValue::String("Pikachu".to_string()))
            .with_field("type", FieldValue::String("Electric".to_string()))
            .with_field("hp", FieldValue::Integer(35)),
        Row::new()
            .with_field("name", FieldValue::String("Charizard".to_string()))
            .with_field("type", FieldValue::String("Fire".to_string()))
            .with_field("hp", FieldValue::Integer(78)),
        Row::new()
            .with_field("name", FieldValue::String("Mewtwo".to_string()))
            .with_field("type", FieldValue::String("Psychic".to_string()))
            .with_field("hp", FieldValue::Integer(106))
            .with_field("legendary", FieldValue::Boolean(true)),
    ])
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("🚀 Pokemon topic workflow starting...");

    if std::net::TcpStream::connect(BROKERS).is_err() {
        println!("❌ No broker reachable on {}", BROKERS);
        println!("💡 Start Kafka locally, then re-run this demo");
        return Ok(());
    }

    let api = TopicApi::new(BROKERS)?;

    // Clear any leftover topic from an earlier run; deletion settles
    // asynchronously on the broker.
    if api.delete_topic(TOPIC).await.is_ok() {
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    api.create_topic(TOPIC).await?;
    println!("✅ Created topic '{}'", TOPIC);

    let table = pokemon_table();
    api.write_data(TOPIC, &table).await?;
    println!("✅ Wrote {} rows", table.num_rows());

    let read_back = api.read_data(TOPIC).await?;
    println!("✅ Read {} rows back:\n", read_back.num_rows());
    println!("{}\n", read_back);

    api.delete_topic(TOPIC).await?;
    println!("✅ Deleted topic '{}'", TOPIC);

    println!("🎉 Workflow complete");
    Ok(())
}
