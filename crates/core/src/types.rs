/// All timestamps are UTC. Documents store them as RFC 3339 strings.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
