use axum::body::Bytes;
use tokio::{fs::File, io};

pub mod driver;
pub mod paths;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    async fn store(&self, file_name: &str, content: Bytes) -> io::Result<String>;
    async fn retrieve(&self, file_name: &str) -> io::Result<File>;
}
