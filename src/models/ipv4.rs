//! IPv4 network blocks in CIDR notation.
//!
//! Provides [`NetworkBlock`] for a normalized IPv4 network (base address with
//! all host bits zero plus a prefix length), along with the bit helpers the
//! allocator uses to carve child blocks out of a parent.

use crate::error::CidrError;
use lazy_static::lazy_static;
use regex::Regex;
use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Metadata, Schema, SchemaObject, StringValidation};
use schemars::JsonSchema;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Textual form accepted for a CIDR block, e.g. `10.1.0.0/16`.
pub const CIDR_PATTERN: &str = r"^(\d{1,3}(?:\.\d{1,3}){3})/(\d{1,2})$";

lazy_static! {
    static ref CIDR_RE: Regex = Regex::new(CIDR_PATTERN).expect("Invalid Regex?");
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_planner::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::PrefixTooLong(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast (last) address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Calculate the minimum mask for an IP address based on trailing zeros.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let trailing_zeros = u32::from(ip).trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

/// Split the address range `[first, first + count)` into the fewest aligned
/// CIDR blocks, in address order.
///
/// The range must end at or before the top of the IPv4 space.
pub fn cover_range(first: Ipv4Addr, count: u64) -> Vec<NetworkBlock> {
    let mut blocks = Vec::new();
    let mut next = u32::from(first) as u64;
    let mut remaining = count.min((1u64 << MAX_LENGTH) - next);

    while remaining > 0 {
        let ip = Ipv4Addr::from(next as u32);
        // Biggest block the address is aligned for, shrunk until it fits.
        let aligned_size = 1u64 << (MAX_LENGTH - lo_mask(ip));
        let size = prev_power_of_two(aligned_size.min(remaining));
        let prefix = MAX_LENGTH - size.trailing_zeros() as u8;
        blocks.push(NetworkBlock { addr: ip, prefix });
        next += size;
        remaining -= size;
    }
    blocks
}

fn prev_power_of_two(value: u64) -> u64 {
    debug_assert!(value > 0);
    1u64 << (63 - value.leading_zeros())
}

/// A normalized IPv4 network: base address plus prefix length (0-32).
///
/// The host bits of the base address are always zero.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct NetworkBlock {
    addr: Ipv4Addr,
    prefix: u8,
}

impl NetworkBlock {
    /// Create a block, rejecting prefixes over 32 and addresses with host bits set.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<NetworkBlock, CidrError> {
        let network = cut_addr(addr, prefix)?;
        if network != addr {
            return Err(CidrError::HostBitsSet {
                addr,
                prefix,
                network,
            });
        }
        Ok(NetworkBlock { addr, prefix })
    }

    /// Base (network) address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Prefix length.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Number of addresses in the block, `2^(32 - prefix)`.
    pub fn addr_count(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// Lowest address in the block.
    pub fn first(&self) -> Ipv4Addr {
        self.addr
    }

    /// Highest address in the block.
    pub fn last(&self) -> Ipv4Addr {
        let last = u32::from(self.addr) as u64 + self.addr_count() - 1;
        Ipv4Addr::from(last as u32)
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.first() <= ip && ip <= self.last()
    }

    /// Carve the child block that starts `offset` addresses into this block
    /// and spans `span` addresses.
    ///
    /// The span must be a power of two, the offset a multiple of the span, and
    /// the child must lie entirely within this block.
    pub fn subdivide(&self, offset: u64, span: u64) -> Result<NetworkBlock, CidrError> {
        if !span.is_power_of_two() {
            return Err(CidrError::SpanNotPowerOfTwo(span));
        }
        if offset
            .checked_add(span)
            .map_or(true, |end| end > self.addr_count())
        {
            return Err(CidrError::OutOfRange {
                block: *self,
                offset,
                span,
            });
        }
        if offset % span != 0 {
            return Err(CidrError::Misaligned { offset, span });
        }
        let addr = Ipv4Addr::from((u32::from(self.addr) as u64 + offset) as u32);
        let prefix = MAX_LENGTH - span.trailing_zeros() as u8;
        Ok(NetworkBlock { addr, prefix })
    }
}

impl FromStr for NetworkBlock {
    type Err = CidrError;

    fn from_str(addr_cidr: &str) -> Result<Self, Self::Err> {
        let addr_cidr = addr_cidr.trim();
        let caps = CIDR_RE
            .captures(addr_cidr)
            .ok_or_else(|| CidrError::Format(addr_cidr.to_string()))?;
        let addr: Ipv4Addr = caps[1]
            .parse()
            .map_err(|_| CidrError::Address(caps[1].to_string()))?;
        let prefix: u8 = caps[2]
            .parse()
            .map_err(|_| CidrError::Format(addr_cidr.to_string()))?;
        NetworkBlock::new(addr, prefix)
    }
}

impl std::fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for NetworkBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NetworkBlock {
    fn deserialize<D>(deserializer: D) -> Result<NetworkBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl JsonSchema for NetworkBlock {
    fn schema_name() -> String {
        "NetworkBlock".to_string()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            metadata: Some(Box::new(Metadata {
                description: Some("IPv4 network in CIDR notation, host bits zero.".to_string()),
                examples: vec!["10.12.0.0/16".into(), "10.0.0.0/8".into()],
                ..Default::default()
            })),
            string: Some(Box::new(StringValidation {
                pattern: Some(CIDR_PATTERN.to_string()),
                ..Default::default()
            })),
            ..Default::default()
        }
        .into()
    }
}
