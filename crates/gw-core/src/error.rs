use std::path::PathBuf;

/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while building or loading a scene catalog.
///
/// All of these are fatal: a catalog that fails validation must never be
/// handed to a running session.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog does not designate an entry scene.
    #[error("no entry scene designated")]
    MissingEntry,

    /// The designated entry scene is not defined.
    #[error("entry scene \"{0}\" is not in the catalog")]
    UnknownEntry(String),

    /// A scene or one of its choices has an empty key.
    #[error("blank scene or choice key in scene \"{scene}\"")]
    BlankKey {
        /// The scene holding the blank key (empty if the scene key itself is blank).
        scene: String,
    },

    /// Two scenes share the same key.
    #[error("scene \"{0}\" is defined more than once")]
    DuplicateScene(String),

    /// Two choices in one scene share the same key.
    #[error("scene \"{scene}\" defines choice \"{choice}\" more than once")]
    DuplicateChoice {
        /// The scene holding the duplicate.
        scene: String,
        /// The repeated choice key.
        choice: String,
    },

    /// A choice leads to a scene that does not exist.
    #[error("choice \"{choice}\" in scene \"{scene}\" targets unknown scene \"{target}\"")]
    DanglingTarget {
        /// The scene holding the choice.
        scene: String,
        /// The offending choice key.
        choice: String,
        /// The missing target scene key.
        target: String,
    },

    /// The catalog data could not be deserialized.
    #[error("invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("cannot read catalog {}: {source}", .path.display())]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
