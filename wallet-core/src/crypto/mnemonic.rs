// wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 validation and seed expansion
// Chuẩn: BIP-39 (Mnemonic), PBKDF2-HMAC-SHA512 (Seed Derivation)

use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::{Language, Mnemonic};
use zeroize::{Zeroize, Zeroizing};

/// Word counts accepted by BIP-39.
pub const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// A validated BIP-39 mnemonic.
///
/// # Security Architecture
/// - The normalized phrase is wiped when the struct is dropped
/// - Custom `Debug` never prints the phrase
/// - Seeds are returned in [`Zeroizing`] buffers
#[derive(Clone)]
pub struct WalletMnemonic {
    phrase: String,
    inner: Mnemonic,
}

// Custom Debug - never prints the phrase
impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl Drop for WalletMnemonic {
    fn drop(&mut self) {
        self.phrase.zeroize();
    }
}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Validate an existing phrase.
    ///
    /// # Validation
    /// - Word count must be 12, 15, 18, 21 or 24
    /// - Every word must be in the English BIP-39 wordlist
    /// - The embedded checksum must match
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        // Collapse any run of whitespace into single spaces
        let words = phrase.split_whitespace().collect::<Vec<_>>();
        let count = words.len();

        if !VALID_WORD_COUNTS.contains(&count) {
            return Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(
                count,
            )));
        }

        let normalized = Zeroizing::new(words.join(" "));
        let inner = Mnemonic::parse_in(Language::English, normalized.as_str())
            .map_err(|e| WalletError::Mnemonic(Self::classify(e)))?;

        Ok(Self {
            phrase: inner.to_string(),
            inner,
        })
    }

    fn classify(err: bip39::Error) -> MnemonicError {
        match err {
            bip39::Error::BadWordCount(count) => MnemonicError::InvalidWordCount(count),
            // bip39 reports a zero-based word position
            bip39::Error::UnknownWord(index) => MnemonicError::UnknownWord(index + 1),
            bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
            other => MnemonicError::Bip39Error(other.to_string()),
        }
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The normalized phrase: lowercase words separated by single spaces.
    ///
    /// # Warning
    /// Never log this value.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.inner.word_count()
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// Expand the mnemonic into a 64-byte seed.
    ///
    /// PBKDF2-HMAC-SHA512, 2048 rounds, salt = `"mnemonic" + passphrase`,
    /// both sides NFKD-normalized. `None` is the empty passphrase.
    pub fn to_seed_bytes(&self, passphrase: Option<&str>) -> Zeroizing<[u8; 64]> {
        let password = passphrase.unwrap_or("");
        Zeroizing::new(self.inner.to_seed(password))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Whether a single word is part of the English BIP-39 wordlist.
    pub fn is_valid_word(word: &str) -> bool {
        Language::English.find_word(word).is_some()
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
