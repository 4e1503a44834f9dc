mod delegation_walker;
mod record_aggregator;
mod root_directory;

pub use delegation_walker::DelegationWalker;
pub use record_aggregator::RecordAggregator;
pub use root_directory::{RootDirectory, ROOT_SERVERS};
