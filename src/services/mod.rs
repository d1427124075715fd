pub mod genres;
pub mod mutations;
pub mod queries;
pub mod schedule;

pub use mutations::{in_transaction, Change, ChangeKind, RecordKind};
pub use schedule::{format_phone, partition_shows, ShowSchedule};
