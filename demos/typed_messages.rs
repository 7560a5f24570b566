//! Using the typed producer and consumer directly with a serde struct instead
//! of the dynamic row model.
//!
//! Run with a local broker: `cargo run --example typed_messages`

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tablestream::{JsonSerializer, TopicAdmin, TopicConsumer, TopicProducer};

const BROKERS: &str = "localhost:9092";
const TOPIC: &str = "tablestream-users";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: String,
}

impl User {
    fn new(id: u32, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("🚀 Typed message example starting...");

    if std::net::TcpStream::connect(BROKERS).is_err() {
        println!("❌ No broker reachable on {}", BROKERS);
        println!("💡 Start Kafka locally, then re-run this demo");
        return Ok(());
    }

    let admin = TopicAdmin::new(BROKERS)?;
    // Tolerate a topic left over from an earlier run.
    if !admin.topic_exists(TOPIC).await? {
        admin.create_topic(TOPIC, 1, 1).await?;
        println!("✅ Created topic '{}'", TOPIC);
    }

    let producer: TopicProducer<User, _> =
        TopicProducer::new(BROKERS, TOPIC, JsonSerializer)?;
    println!("✅ Producer created");

    let users = vec![
        User::new(1, "Alice Smith", "alice@example.com"),
        User::new(2, "Bob Jones", "bob@example.com"),
        User::new(3, "Carol Brown", "carol@example.com"),
    ];

    println!("\n📤 Sending users...");
    for user in &users {
        let delivery = producer.send(user).await?;
        println!(
            "  sent {} (partition {}, offset {})",
            user.name, delivery.partition, delivery.offset
        );
    }
    producer.flush(Duration::from_secs(5))?;

    let consumer: TopicConsumer<User, _> =
        TopicConsumer::new(BROKERS, "typed-example-group", JsonSerializer)?;
    consumer.subscribe(&[TOPIC])?;
    println!("\n📥 Reading users back...");

    let mut received = Vec::new();
    while let Some(user) = consumer.poll(Duration::from_secs(5)).await? {
        println!("  received {:?}", user);
        received.push(user);
        if received.len() == users.len() {
            break;
        }
    }

    println!("\n✅ Received {} users", received.len());

    admin.delete_topic(TOPIC).await?;
    println!("✅ Deleted topic '{}'", TOPIC);

    Ok(())
}
