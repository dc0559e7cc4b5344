//! Payload fixtures.
//!
//! - [`Tier`]: a pipe tier, encoded as one byte.
//! - [`FluidData`]: a fluid name plus tier, encoded as tier byte,
//!   `u16` length, and UTF-8 bytes.

use conduit_core::{PayloadCodec, PayloadError};

/// Pipe tier. Networks of different tiers never link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tier {
    #[default]
    Basic,
    Advanced,
    Elite,
}

impl Tier {
    fn to_byte(self) -> u8 {
        match self {
            Tier::Basic => 0,
            Tier::Advanced => 1,
            Tier::Elite => 2,
        }
    }

    fn from_byte(b: u8) -> Result<Self, PayloadError> {
        match b {
            0 => Ok(Tier::Basic),
            1 => Ok(Tier::Advanced),
            2 => Ok(Tier::Elite),
            other => Err(PayloadError::new(format!("unknown tier tag {other}"))),
        }
    }
}

impl PayloadCodec for Tier {
    fn encode_payload(&self, buf: &mut Vec<u8>) {
        buf.push(self.to_byte());
    }

    fn decode_payload(bytes: &[u8]) -> Result<Self, PayloadError> {
        match bytes {
            [b] => Tier::from_byte(*b),
            _ => Err(PayloadError::new(format!(
                "tier payload must be 1 byte, got {}",
                bytes.len()
            ))),
        }
    }
}

/// Fluid carried by a network and the tier of its pipes.
///
/// Linking requires both fields to match. Encoding keeps at most
/// [`FluidData::MAX_NAME_BYTES`] bytes of the name, cut back to a
/// character boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FluidData {
    pub fluid: String,
    pub tier: Tier,
}

impl FluidData {
    pub const MAX_NAME_BYTES: usize = u16::MAX as usize;

    pub fn new(fluid: impl Into<String>, tier: Tier) -> Self {
        Self {
            fluid: fluid.into(),
            tier,
        }
    }
}

impl PayloadCodec for FluidData {
    fn encode_payload(&self, buf: &mut Vec<u8>) {
        buf.push(self.tier.to_byte());
        let mut end = self.fluid.len().min(Self::MAX_NAME_BYTES);
        while !self.fluid.is_char_boundary(end) {
            end -= 1;
        }
        let name = &self.fluid.as_bytes()[..end];
        buf.extend_from_slice(&(end as u16).to_le_bytes());
        buf.extend_from_slice(name);
    }

    fn decode_payload(bytes: &[u8]) -> Result<Self, PayloadError> {
        let [tier, lo, hi, rest @ ..] = bytes else {
            return Err(PayloadError::new("fluid payload truncated before name"));
        };
        let len = u16::from_le_bytes([*lo, *hi]) as usize;
        if rest.len() != len {
            return Err(PayloadError::new(format!(
                "fluid name length {len} does not match {} remaining bytes",
                rest.len()
            )));
        }
        let fluid = std::str::from_utf8(rest)
            .map_err(|e| PayloadError::new(format!("fluid name is not UTF-8: {e}")))?
            .to_string();
        Ok(Self {
            fluid,
            tier: Tier::from_byte(*tier)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_rejects_unknown_tag_and_bad_length() {
        assert!(Tier::decode_payload(&[9]).is_err());
        assert!(Tier::decode_payload(&[]).is_err());
        assert!(Tier::decode_payload(&[0, 0]).is_err());
        assert_eq!(Tier::decode_payload(&[2]), Ok(Tier::Elite));
    }

    #[test]
    fn fluid_layout_is_tier_length_name() {
        let mut buf = Vec::new();
        FluidData::new("lava", Tier::Advanced).encode_payload(&mut buf);
        assert_eq!(buf, [1, 4, 0, b'l', b'a', b'v', b'a']);
        assert_eq!(
            FluidData::decode_payload(&buf),
            Ok(FluidData::new("lava", Tier::Advanced))
        );
    }

    #[test]
    fn oversized_name_is_cut_on_a_char_boundary() {
        let long = FluidData::new("é".repeat(40_000), Tier::Basic);
        let mut buf = Vec::new();
        long.encode_payload(&mut buf);
        assert_eq!(&buf[1..3], &65_534u16.to_le_bytes());
        let decoded = FluidData::decode_payload(&buf).unwrap();
        assert_eq!(decoded.fluid, "é".repeat(32_767));

        let exact = FluidData::new("a".repeat(FluidData::MAX_NAME_BYTES), Tier::Elite);
        buf.clear();
        exact.encode_payload(&mut buf);
        assert_eq!(FluidData::decode_payload(&buf), Ok(exact));
    }

    #[test]
    fn fluid_rejects_length_mismatch() {
        let err = FluidData::decode_payload(&[0, 3, 0, b'a']).unwrap_err();
        assert!(err.reason.contains("length 3"));
        assert!(FluidData::decode_payload(&[0, 1]).is_err());
    }
}
