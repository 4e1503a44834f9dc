mod record;
mod record_type;
mod response;

pub use record::DnsRecord;
pub use record_type::RecordType;
pub use response::DnsResponse;
