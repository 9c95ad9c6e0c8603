// PathManager maps paths based on stored image names.
//
// The path layout in the storage backend is flat:
//
//	<root>
//	└── <file name>
//
// Every stored image lives directly under the storage root, keyed by its
// original file name. There is no sidecar metadata and no manifest, so the
// directory listing is the complete inventory of the store.

#[derive(Clone)]
pub struct PathManager {
    root_path: String,
}

impl PathManager {
    pub fn new(root: &str) -> Self {
        PathManager {
            root_path: root.to_string(),
        }
    }

    /// Returns the path to the storage root, (e.g. `<root>`).
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    /// Returns the path to a single stored image,
    /// (e.g. `<root>/<file name>`).
    pub fn image_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.root_path, file_name)
    }
}
