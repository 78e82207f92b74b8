// wallet-core/src/crypto/derivation_path.rs
//
// BIP-32 path notation: "m/44'/60'/0'/0/0"
// Hardened markers: ' (canonical), h, H

use crate::error::{PathError, WalletResult};
use std::fmt;
use std::str::FromStr;

/// Offset added to hardened indices (2^31).
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// BIP-32 serializes depth as a single byte.
pub const MAX_DEPTH: usize = u8::MAX as usize;

/// One level of a derivation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildIndex {
    index: u32,
    hardened: bool,
}

impl ChildIndex {
    pub fn normal(index: u32) -> Result<Self, PathError> {
        Self::new(index, false)
    }

    pub fn hardened(index: u32) -> Result<Self, PathError> {
        Self::new(index, true)
    }

    pub fn new(index: u32, hardened: bool) -> Result<Self, PathError> {
        if index >= HARDENED_OFFSET {
            return Err(PathError::IndexOutOfRange(index.to_string()));
        }
        Ok(Self { index, hardened })
    }

    /// Index without the hardened offset.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn is_hardened(&self) -> bool {
        self.hardened
    }

    /// The 32-bit value fed into child derivation (offset applied).
    #[inline]
    pub fn raw(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED_OFFSET
        } else {
            self.index
        }
    }

    /// Inverse of [`raw`](Self::raw).
    pub fn from_raw(raw: u32) -> Self {
        Self {
            index: raw & !HARDENED_OFFSET,
            hardened: raw & HARDENED_OFFSET != 0,
        }
    }

    fn parse_segment(segment: &str) -> Result<Self, PathError> {
        let (digits, hardened) = match segment.strip_suffix(&['\'', 'h', 'H'][..]) {
            Some(rest) => (rest, true),
            None => (segment, false),
        };

        // u32::from_str would accept a leading '+'
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PathError::NotNumeric(segment.to_string()));
        }

        // all digits, so a failed parse can only be overflow
        let value = digits
            .parse::<u32>()
            .ok()
            .filter(|v| *v < HARDENED_OFFSET)
            .ok_or_else(|| PathError::IndexOutOfRange(segment.to_string()))?;

        Self::new(value, hardened)
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

/// Parsed derivation path. The empty path (`m`) addresses the master node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    segments: Vec<ChildIndex>,
}

impl DerivationPath {
    /// The master node (`m`).
    pub fn master() -> Self {
        Self::default()
    }

    pub fn parse(path: &str) -> WalletResult<Self> {
        Ok(path.parse()?)
    }

    #[inline]
    pub fn segments(&self) -> &[ChildIndex] {
        &self.segments
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_master(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether every segment is hardened (required by SLIP-0010 ed25519).
    pub fn is_fully_hardened(&self) -> bool {
        self.segments.iter().all(ChildIndex::is_hardened)
    }

    /// Append a child, returning the extended path.
    pub fn child(mut self, child: ChildIndex) -> Result<Self, PathError> {
        if self.segments.len() >= MAX_DEPTH {
            return Err(PathError::TooDeep);
        }
        self.segments.push(child);
        Ok(self)
    }

    /// Append every segment of `relative` (a path rooted at this one).
    pub fn join(&self, relative: &DerivationPath) -> Result<Self, PathError> {
        relative
            .segments
            .iter()
            .try_fold(self.clone(), |path, seg| path.child(*seg))
    }
}

impl FromStr for DerivationPath {
    type Err = PathError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let mut parts = path.split('/');

        // strict: lowercase root, no surrounding whitespace
        match parts.next() {
            Some("m") => {}
            _ => return Err(PathError::MissingRoot(path.to_string())),
        }

        let mut segments = Vec::new();
        for (position, segment) in parts.enumerate() {
            if segment.is_empty() {
                return Err(PathError::EmptySegment(position + 1));
            }
            if segments.len() >= MAX_DEPTH {
                return Err(PathError::TooDeep);
            }
            segments.push(ChildIndex::parse_segment(segment)?);
        }

        Ok(Self { segments })
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DerivationPath {
    type Item = &'a ChildIndex;
    type IntoIter = std::slice::Iter<'a, ChildIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
