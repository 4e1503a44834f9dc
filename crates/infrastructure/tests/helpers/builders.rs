use std::net::Ipv4Addr;

const TYPE_A: u16 = 1;
const TYPE_NS: u16 = 2;
const TYPE_CNAME: u16 = 5;
const TYPE_AAAA: u16 = 28;

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_NXDOMAIN: u8 = 3;

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

#[derive(Debug, Clone)]
pub enum WireData {
    A(Ipv4Addr),
    Aaaa([u8; 16]),
    Cname(String),
    Ns(String),
}

#[derive(Debug, Clone)]
pub struct WireRecord {
    pub owner: String,
    pub data: WireData,
}

impl WireRecord {
    pub fn a(owner: &str, ip: &str) -> Self {
        Self {
            owner: owner.to_string(),
            data: WireData::A(ip.parse().unwrap()),
        }
    }

    pub fn aaaa(owner: &str) -> Self {
        let mut ip = [0u8; 16];
        ip[0] = 0x20;
        ip[1] = 0x01;
        ip[15] = 1;
        Self {
            owner: owner.to_string(),
            data: WireData::Aaaa(ip),
        }
    }

    pub fn cname(owner: &str, target: &str) -> Self {
        Self {
            owner: owner.to_string(),
            data: WireData::Cname(target.to_string()),
        }
    }

    pub fn ns(owner: &str, nameserver: &str) -> Self {
        Self {
            owner: owner.to_string(),
            data: WireData::Ns(nameserver.to_string()),
        }
    }

    fn encode(&self, out: &mut Vec<u8>) {
        let (rtype, rdata) = match &self.data {
            WireData::A(ip) => (TYPE_A, ip.octets().to_vec()),
            WireData::Aaaa(ip) => (TYPE_AAAA, ip.to_vec()),
            WireData::Cname(target) => (TYPE_CNAME, encode_name(target)),
            WireData::Ns(ns) => (TYPE_NS, encode_name(ns)),
        };

        out.extend_from_slice(&encode_name(&self.owner));
        out.extend_from_slice(&rtype.to_be_bytes());
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&300u32.to_be_bytes());
        out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        out.extend_from_slice(&rdata);
    }
}

/// Hand-assembled response message, uncompressed.
#[derive(Debug, Clone, Default)]
pub struct WireResponse {
    pub id: u16,
    pub rcode: u8,
    pub question: Option<(String, u16)>,
    pub answers: Vec<WireRecord>,
    pub authority: Vec<WireRecord>,
}

impl WireResponse {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn question(mut self, name: &str, qtype: u16) -> Self {
        self.question = Some((name.to_string(), qtype));
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn answer(mut self, record: WireRecord) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: WireRecord) -> Self {
        self.authority.push(record);
        self
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&self.id.to_be_bytes());
        out.push(0x81);
        out.push(0x80 | (self.rcode & 0x0f));
        out.extend_from_slice(&(self.question.is_some() as u16).to_be_bytes());
        out.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.authority.len() as u16).to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());

        if let Some((name, qtype)) = &self.question {
            out.extend_from_slice(&encode_name(name));
            out.extend_from_slice(&qtype.to_be_bytes());
            out.extend_from_slice(&1u16.to_be_bytes());
        }
        for record in self.answers.iter().chain(&self.authority) {
            record.encode(&mut out);
        }
        out
    }
}

/// Id, qname and qtype of a wire query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireQuery {
    pub id: u16,
    pub name: String,
    pub qtype: u16,
    pub recursion_desired: bool,
}

impl WireQuery {
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 12 {
            return None;
        }
        let id = u16::from_be_bytes([bytes[0], bytes[1]]);
        let recursion_desired = bytes[2] & 0x01 == 0x01;

        let mut pos = 12;
        let mut labels = Vec::new();
        loop {
            let len = *bytes.get(pos)? as usize;
            pos += 1;
            if len == 0 {
                break;
            }
            labels.push(String::from_utf8_lossy(bytes.get(pos..pos + len)?).into_owned());
            pos += len;
        }
        let qtype = u16::from_be_bytes([*bytes.get(pos)?, *bytes.get(pos + 1)?]);

        Some(Self {
            id,
            name: format!("{}.", labels.join(".")),
            qtype,
            recursion_desired,
        })
    }
}
