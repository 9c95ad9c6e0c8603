use crate::storage::Storage;
use crate::storage::paths::PathManager;

use axum::body::Bytes;
use tokio::{
    fs::{File, OpenOptions, create_dir, remove_file},
    io::{self, AsyncWriteExt, BufWriter},
};

pub struct FilesystemStorage {
    path_manager: PathManager,
}

impl FilesystemStorage {
    pub fn new(root: &str) -> Self {
        FilesystemStorage {
            path_manager: PathManager::new(root),
        }
    }

    /// Creates the storage root if it is absent. Only the final path
    /// component is created; the parent must already exist.
    async fn ensure_root(&self) -> io::Result<()> {
        match create_dir(self.path_manager.root_path()).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(err),
        }
    }
}

#[async_trait::async_trait]
impl Storage for FilesystemStorage {
    async fn store(&self, file_name: &str, content: Bytes) -> io::Result<String> {
        self.ensure_root().await?;

        // `create_new` makes the open fail with `AlreadyExists` instead of
        // truncating a stored image of the same name.
        let file_path = self.path_manager.image_path(file_name);
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&file_path)
            .await?;

        let write_result = async {
            let mut file_writer = BufWriter::new(file);
            file_writer.write_all(&content).await?;
            file_writer.flush().await?;
            Ok::<_, io::Error>(())
        }
        .await;

        if let Err(err) = write_result {
            // A failed store leaves no partial file behind.
            let _ = remove_file(&file_path).await;
            return Err(err);
        }

        Ok(file_name.to_string())
    }

    async fn retrieve(&self, file_name: &str) -> io::Result<File> {
        File::open(self.path_manager.image_path(file_name)).await
    }
}
