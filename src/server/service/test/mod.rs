use tokio::sync::mpsc::UnboundedReceiver;

use crate::server::{
    error::{auth::AuthError, AppError},
    realtime::{event, hub::Hub},
};
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod chat;
mod connection;
mod flashcard;
mod post;
mod room;

/// Collects the names of every event queued on a registered hub connection.
fn drain_events(receiver: &mut UnboundedReceiver<String>) -> Vec<String> {
    let mut names = Vec::new();
    while let Ok(text) = receiver.try_recv() {
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        names.push(value["event"].as_str().unwrap().to_string());
    }
    names
}
