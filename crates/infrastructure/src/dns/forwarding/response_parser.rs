use dnsverify_domain::{DnsRecord, DnsResponse, DomainError, DomainName, NameServerAddress};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub response: DnsResponse,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a wire response into the records the resolver understands.
    ///
    /// A non-NOERROR rcode is not an error here: the caller sees an empty
    /// (or partial) record set.
    pub fn parse(
        response_bytes: &[u8],
        server: &NameServerAddress,
    ) -> Result<ParsedResponse, DomainError> {
        let message =
            Message::from_vec(response_bytes).map_err(|e| DomainError::MalformedResponse {
                server: server.to_string(),
                reason: format!("failed to parse DNS response: {}", e),
            })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let answers = Self::records_from(message.answers());
        let authority = Self::records_from(message.name_servers());

        debug!(
            server = %server,
            rcode = ?rcode,
            truncated = truncated,
            answers = answers.len(),
            authority = authority.len(),
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            id: message.id(),
            rcode,
            truncated,
            response: DnsResponse::new(answers, authority),
        })
    }

    pub fn records_from(records: &[Record]) -> Vec<DnsRecord> {
        records.iter().filter_map(Self::to_domain_record).collect()
    }

    /// A, CNAME, NS and SOA records; everything else is dropped.
    pub fn to_domain_record(record: &Record) -> Option<DnsRecord> {
        let owner = DomainName::from_wire(&record.name().to_ascii());

        match record.data() {
            RData::A(a) => Some(DnsRecord::A {
                owner,
                address: a.0,
            }),
            RData::CNAME(canonical) => Some(DnsRecord::Cname {
                owner,
                target: DomainName::from_wire(&canonical.0.to_ascii()),
            }),
            RData::NS(ns) => Some(DnsRecord::Ns {
                owner,
                nameserver: DomainName::from_wire(&ns.0.to_ascii()),
            }),
            RData::SOA(soa) => Some(DnsRecord::Soa {
                owner,
                primary_ns: DomainName::from_wire(&soa.mname().to_ascii()),
            }),
            _ => None,
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
