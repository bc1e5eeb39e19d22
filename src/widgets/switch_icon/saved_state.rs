//! Instance state that survives the host tearing the widget down and
//! recreating it.
//!
//! Only the enabled flag is persisted. It is chained after whatever opaque
//! state the host keeps for the view:
//!
//! ```text
//! +----------------+------------------+-----------------+
//! | u32 LE length  | host state bytes | i32 LE flag 0/1 |
//! +----------------+------------------+-----------------+
//! ```

use crate::error::StateError;

/// Snapshot of a switch icon chained after the host's own state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedState {
    pub super_state: Vec<u8>,
    pub icon_enabled: bool,
}

/// What the host hands back on restore: either a switch icon snapshot or
/// some other view's state that the widget must pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceState {
    SwitchIcon(SavedState),
    Host(Vec<u8>),
}

impl SavedState {
    pub fn new(super_state: Vec<u8>, icon_enabled: bool) -> Self {
        Self {
            super_state,
            icon_enabled,
        }
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(self.super_state.len() as u32).to_le_bytes());
        out.extend_from_slice(&self.super_state);
        out.extend_from_slice(&i32::from(self.icon_enabled).to_le_bytes());
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.super_state.len());
        self.write_to(&mut out);
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StateError> {
        let mut reader = Reader { bytes, offset: 0 };
        let len = u32::from_le_bytes(reader.take()?) as usize;
        let super_state = reader.take_slice(len)?.to_vec();
        let icon_enabled = match i32::from_le_bytes(reader.take()?) {
            0 => false,
            1 => true,
            other => return Err(StateError::InvalidFlag(other)),
        };
        Ok(Self {
            super_state,
            icon_enabled,
        })
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn take_slice(&mut self, len: usize) -> Result<&'a [u8], StateError> {
        let available = self.bytes.len();
        let needed = self
            .offset
            .checked_add(len)
            .ok_or(StateError::Truncated {
                needed: usize::MAX,
                available,
            })?;
        let slice = self
            .bytes
            .get(self.offset..needed)
            .ok_or(StateError::Truncated { needed, available })?;
        self.offset = needed;
        Ok(slice)
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], StateError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take_slice(N)?);
        Ok(buf)
    }
}
