//! A blog service that reports through payloads, and a terminal presenter
//! that branches on the payload status.
//!
//! ```text
//! cargo run --example blog -- 1
//! cargo run --example blog -- 9 --create "Hello"
//! RUST_LOG=payload=trace cargo run --example blog -- 2
//! ```

use async_trait::async_trait;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payload::{Payload, PayloadFactory, PayloadProviderBox, Status};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Id of the post to look up (or to create)
    id: u32,

    /// Create the post with this title instead of looking it up
    #[arg(long)]
    create: Option<String>,

    /// Make the repository fail every call
    #[arg(long)]
    offline: bool,
}

#[derive(Error, Debug)]
enum RepositoryError {
    #[error("Repository is offline")]
    Offline,
}

#[async_trait]
trait PostRepository: Send + Sync {
    async fn find(&self, id: u32) -> Result<Option<Value>, RepositoryError>;
    async fn insert(&self, id: u32, post: Value) -> Result<(), RepositoryError>;
}

#[derive(Default, Clone)]
struct InMemoryPostRepository {
    posts: Arc<RwLock<HashMap<u32, Value>>>,
    offline: bool,
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find(&self, id: u32) -> Result<Option<Value>, RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Offline);
        }
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn insert(&self, id: u32, post: Value) -> Result<(), RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Offline);
        }
        self.posts.write().await.insert(id, post);
        Ok(())
    }
}

struct BlogService {
    repository: Box<dyn PostRepository>,
    payloads: PayloadProviderBox,
}

impl BlogService {
    async fn fetch_post(&self, id: u32) -> Payload {
        let mut payload = self.payloads.new_instance();
        payload.set_input(json!({ "id": id }));

        match self.repository.find(id).await {
            Ok(Some(post)) => payload.set_status(Status::Found).set_output(post),
            Ok(None) => payload.set_status(Status::NotFound),
            Err(e) => payload.set_status(Status::Error).set_output(json!(e.to_string())),
        };
        payload
    }

    async fn create_post(&self, id: u32, title: &str) -> Payload {
        let mut payload = self.payloads.new_instance();
        payload.set_input(json!({ "id": id, "title": title }));

        if title.trim().len() < 3 {
            payload
                .set_status(Status::NotValid)
                .set_messages(json!({ "title": ["must be at least 3 characters"] }));
            return payload;
        }

        let post = json!({ "id": id, "title": title.trim() });
        match self.repository.insert(id, post.clone()).await {
            Ok(()) => payload.set_status(Status::Created).set_output(post),
            Err(e) => payload.set_status(Status::Error).set_output(json!(e.to_string())),
        };
        payload
    }
}

fn present(payload: &Payload) {
    match payload.status_token() {
        Some(Status::Found) | Some(Status::Created) => {
            info!(status = ?payload.status(), "Request succeeded");
            if let Some(post) = payload.output() {
                println!("{}", post);
            }
        }
        Some(Status::NotFound) => {
            println!("No post matches {}", payload.input().unwrap_or(&Value::Null));
        }
        Some(Status::NotValid) => {
            println!("Invalid post:");
            if let Some(messages) = payload.messages() {
                println!("{}", messages);
            }
        }
        Some(Status::Error) => {
            warn!(error = ?payload.output(), "Service reported an error");
            eprintln!("Error: {}", payload.output().unwrap_or(&Value::Null));
        }
        _ => {
            eprintln!("Unexpected status: {}", payload.status().unwrap_or("<unset>"));
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let repository = InMemoryPostRepository {
        offline: cli.offline,
        ..Default::default()
    };
    if !cli.offline {
        repository
            .insert(1, json!({ "id": 1, "title": "First post" }))
            .await
            .into_diagnostic()?;
    }

    let service = BlogService {
        repository: Box::new(repository),
        payloads: Box::new(PayloadFactory),
    };

    let payload = match cli.create {
        Some(title) => service.create_post(cli.id, &title).await,
        None => service.fetch_post(cli.id).await,
    };
    present(&payload);

    Ok(())
}
