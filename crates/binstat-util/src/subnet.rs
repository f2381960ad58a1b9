//! IP subnet values
//!
//! [`netify`] lets code that needs a [`Subnet`] accept either an already
//! parsed subnet (passed through without re-parsing) or its string form.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{UtilError, UtilResult};

/// An IPv4 or IPv6 network: a base address with no host bits set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subnet {
    V4 { addr: Ipv4Addr, prefix: u8 },
    V6 { addr: Ipv6Addr, prefix: u8 },
}

impl Subnet {
    /// Build a subnet, rejecting out-of-range prefixes and set host bits
    pub fn new(addr: IpAddr, prefix: u8) -> UtilResult<Self> {
        let input = format!("{}/{}", addr, prefix);
        match addr {
            IpAddr::V4(addr) => {
                if prefix > 32 {
                    return Err(UtilError::invalid_subnet(&input, "prefix exceeds 32"));
                }
                if u32::from(addr) & !mask_v4(prefix) != 0 {
                    return Err(UtilError::invalid_subnet(&input, "has host bits set"));
                }
                Ok(Subnet::V4 { addr, prefix })
            }
            IpAddr::V6(addr) => {
                if prefix > 128 {
                    return Err(UtilError::invalid_subnet(&input, "prefix exceeds 128"));
                }
                if u128::from(addr) & !mask_v6(prefix) != 0 {
                    return Err(UtilError::invalid_subnet(&input, "has host bits set"));
                }
                Ok(Subnet::V6 { addr, prefix })
            }
        }
    }

    pub fn network_address(&self) -> IpAddr {
        match *self {
            Subnet::V4 { addr, .. } => IpAddr::V4(addr),
            Subnet::V6 { addr, .. } => IpAddr::V6(addr),
        }
    }

    pub fn prefix_len(&self) -> u8 {
        match *self {
            Subnet::V4 { prefix, .. } | Subnet::V6 { prefix, .. } => prefix,
        }
    }

    pub fn is_ipv4(&self) -> bool {
        matches!(self, Subnet::V4 { .. })
    }

    /// Number of addresses covered, saturating at `u128::MAX`
    pub fn num_addresses(&self) -> u128 {
        let host_bits = match *self {
            Subnet::V4 { prefix, .. } => 32 - u32::from(prefix),
            Subnet::V6 { prefix, .. } => 128 - u32::from(prefix),
        };
        1u128.checked_shl(host_bits).unwrap_or(u128::MAX)
    }

    /// Whether `ip` lies inside this subnet
    pub fn contains(&self, ip: IpAddr) -> bool {
        match (*self, ip) {
            (Subnet::V4 { addr, prefix }, IpAddr::V4(ip)) => {
                u32::from(ip) & mask_v4(prefix) == u32::from(addr)
            }
            (Subnet::V6 { addr, prefix }, IpAddr::V6(ip)) => {
                u128::from(ip) & mask_v6(prefix) == u128::from(addr)
            }
            _ => false,
        }
    }
}

fn mask_v4(prefix: u8) -> u32 {
    u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0)
}

fn mask_v6(prefix: u8) -> u128 {
    u128::MAX.checked_shl(128 - u32::from(prefix)).unwrap_or(0)
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network_address(), self.prefix_len())
    }
}

impl FromStr for Subnet {
    type Err = UtilError;

    /// Parse `addr/prefix`, or a bare address as a single-host network
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (addr, prefix) = match s.split_once('/') {
            Some((addr, prefix)) => (addr, Some(prefix)),
            None => (s, None),
        };

        let addr: IpAddr = addr
            .parse()
            .map_err(|_| UtilError::invalid_subnet(s, "not a valid IP address"))?;
        let prefix = match prefix {
            Some(p) => p
                .parse::<u8>()
                .map_err(|_| UtilError::invalid_subnet(s, "prefix is not a number"))?,
            None if addr.is_ipv4() => 32,
            None => 128,
        };

        Subnet::new(addr, prefix)
    }
}

/// Conversion into a [`Subnet`]
pub trait IntoSubnet {
    fn into_subnet(self) -> UtilResult<Subnet>;
}

impl IntoSubnet for Subnet {
    fn into_subnet(self) -> UtilResult<Subnet> {
        Ok(self)
    }
}

impl IntoSubnet for &Subnet {
    fn into_subnet(self) -> UtilResult<Subnet> {
        Ok(*self)
    }
}

impl IntoSubnet for &str {
    fn into_subnet(self) -> UtilResult<Subnet> {
        self.parse()
    }
}

impl IntoSubnet for String {
    fn into_subnet(self) -> UtilResult<Subnet> {
        self.parse()
    }
}

impl IntoSubnet for &String {
    fn into_subnet(self) -> UtilResult<Subnet> {
        self.parse()
    }
}

/// Ensure `subnet` is a [`Subnet`], parsing it only if it is a string
pub fn netify(subnet: impl IntoSubnet) -> UtilResult<Subnet> {
    subnet.into_subnet()
}
