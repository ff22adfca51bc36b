/// Artist identifiers are opaque strings (e.g. `artist-42`), assigned by the
/// account system at registration.
pub type ArtistId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
