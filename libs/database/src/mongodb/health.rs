use mongodb::{Client, bson::doc};
use std::time::{Duration, Instant};

/// Ping the server and return the round-trip time
pub async fn ping(client: &Client) -> Result<Duration, mongodb::error::Error> {
    let started = Instant::now();
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    Ok(started.elapsed())
}
