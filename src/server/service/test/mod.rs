use crate::server::{
    error::{auth::AuthError, AppError},
    realtime::registry::ConnectionRegistry,
};
use test_utils::{builder::TestBuilder, factory};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

mod admin;

/// Registers a socket for `user_id` and returns the receiving end of its frames.
async fn connect(registry: &ConnectionRegistry, user_id: i32) -> UnboundedReceiver<String> {
    let (sender, receiver) = unbounded_channel();
    registry.register(user_id, sender).await;
    receiver
}

/// Parses a pushed frame into JSON for field assertions.
fn frame_json(frame: &str) -> serde_json::Value {
    serde_json::from_str(frame).unwrap()
}
