//! In-memory representation of a classic CAN frame as exchanged with the
//! TWAI controller.
use embedded_can::{ExtendedId, Frame, Id, StandardId};

use crate::core::{MAX_DATA_LEN, MAX_EXTENDED_ID, MAX_STANDARD_ID};
use crate::error::FrameError;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Classic CAN frame (standard or extended identifier, at most eight bytes).
///
/// Fields are private so a frame can never carry more than [`MAX_DATA_LEN`]
/// payload bytes.
pub struct TwaiFrame {
    id: Id,
    data: [u8; MAX_DATA_LEN],
    /// Data Length Code (0 to 8). Always 0 for remote frames.
    dlc: usize,
    is_remote: bool,
}

impl TwaiFrame {
    /// Build a data frame from a raw identifier.
    ///
    /// `extended` selects the 29-bit format; otherwise the identifier must fit
    /// in 11 bits.
    pub fn data_frame(id: u32, extended: bool, payload: &[u8]) -> Result<Self, FrameError> {
        if payload.len() > MAX_DATA_LEN {
            return Err(FrameError::TooLarge {
                len: payload.len(),
            });
        }
        let id = raw_id(id, extended)?;
        let mut data = [0u8; MAX_DATA_LEN];
        data[..payload.len()].copy_from_slice(payload);

        Ok(Self {
            id,
            data,
            dlc: payload.len(),
            is_remote: false,
        })
    }

    /// Build a remote request frame (no payload, DLC 0).
    pub fn remote_frame(id: u32, extended: bool) -> Result<Self, FrameError> {
        Ok(Self::remote(raw_id(id, extended)?))
    }

    fn remote(id: Id) -> Self {
        Self {
            id,
            data: [0; MAX_DATA_LEN],
            dlc: 0,
            is_remote: true,
        }
    }

    /// Raw identifier value, whatever the format.
    pub fn identifier(&self) -> u32 {
        match self.id {
            Id::Standard(id) => id.as_raw() as u32,
            Id::Extended(id) => id.as_raw(),
        }
    }

    /// Payload of a data frame, `None` for a remote request.
    pub fn payload(&self) -> Option<&[u8]> {
        if self.is_remote {
            None
        } else {
            Some(&self.data[..self.dlc])
        }
    }
}

/// Map a raw identifier onto the requested frame format.
fn raw_id(id: u32, extended: bool) -> Result<Id, FrameError> {
    if extended {
        if id > MAX_EXTENDED_ID {
            return Err(FrameError::InvalidIdentifier { id });
        }
        ExtendedId::new(id)
            .map(Id::Extended)
            .ok_or(FrameError::InvalidIdentifier { id })
    } else {
        if id > MAX_STANDARD_ID {
            return Err(FrameError::InvalidIdentifier { id });
        }
        StandardId::new(id as u16)
            .map(Id::Standard)
            .ok_or(FrameError::InvalidIdentifier { id })
    }
}

impl Frame for TwaiFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        // CAN2.0 frames cannot contain more than 8 bytes of data.
        if data.len() > MAX_DATA_LEN {
            return None;
        }
        let mut d = [0u8; MAX_DATA_LEN];
        d[..data.len()].copy_from_slice(data);

        Some(Self {
            id: id.into(),
            data: d,
            dlc: data.len(),
            is_remote: false,
        })
    }

    /// The requested length is checked but not kept: remote requests go out
    /// with DLC 0.
    fn new_remote(id: impl Into<Id>, dlc: usize) -> Option<Self> {
        if dlc > MAX_DATA_LEN {
            return None;
        }
        Some(Self::remote(id.into()))
    }

    fn is_extended(&self) -> bool {
        matches!(self.id, Id::Extended(_))
    }

    fn is_remote_frame(&self) -> bool {
        self.is_remote
    }

    fn id(&self) -> Id {
        self.id
    }

    fn dlc(&self) -> usize {
        self.dlc
    }

    fn data(&self) -> &[u8] {
        // Remote frames carry no data bytes on the wire.
        if self.is_remote {
            &[]
        } else {
            &self.data[..self.dlc]
        }
    }
}

#[cfg(test)]
mod tests;
