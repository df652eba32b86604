//! Width configuration.
//!
//! The bit width of an integer is fixed by a marker type implementing
//! [`Width`], so every value carries its configuration in its type and two
//! integers of different widths can never be mixed. [`Config`] holds the
//! numbers derived from a width: word count and the masks used by the
//! arithmetic.
//!
//! # Examples
//!
//! ```rust
//! use fixint::{config::Config, declare_width};
//!
//! // 96-bit integers stored in 16-bit words.
//! declare_width!(W96, Int96, 96, 16);
//!
//! assert_eq!(Int96::CONFIG.word_count, 6);
//! assert_eq!(Int96::CONFIG.word_mask, 0xFFFF);
//! assert!(Config::new(100, 16).is_err());
//! ```

use crate::{
    error::ConfigError,
    word::{mask, Word, DEFAULT_WORD_BITS},
};

/// Parameters derived from a total bit width and a word bit width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Config {
    /// Total number of bits of an integer.
    pub total_bits: u32,
    /// Number of significant bits per word.
    pub word_bits: u32,
    /// Number of words of an integer.
    pub word_count: usize,
    /// `2^word_bits - 1`.
    pub word_mask: Word,
    /// Top bit of a word, `2^(word_bits - 1)`.
    pub sign_bit_mask: Word,
    /// Threshold a most significant word must stay below to be doubled
    /// without losing bits, `1 + word_mask / 2`.
    pub half_max: Word,
}

impl Config {
    /// 256-bit integers with the default word width.
    pub const DEFAULT: Config = match Config::scale(256) {
        Ok(config) => config,
        Err(_) => panic!("default width is valid"),
    };

    /// Derive a configuration for `total_bits` wide integers stored in
    /// `word_bits` wide words.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::ZeroWordBits`] if `word_bits` is zero.
    /// * [`ConfigError::WordTooWide`] if `word_bits` exceeds half of the
    ///   native width.
    /// * [`ConfigError::NotWordMultiple`] if `total_bits` is not a multiple
    ///   of `word_bits`.
    /// * [`ConfigError::TooNarrow`] if `total_bits` is below 64.
    pub const fn new(
        total_bits: u32,
        word_bits: u32,
    ) -> Result<Config, ConfigError> {
        if word_bits == 0 {
            return Err(ConfigError::ZeroWordBits);
        }
        if word_bits > DEFAULT_WORD_BITS {
            return Err(ConfigError::WordTooWide);
        }
        if total_bits % word_bits != 0 {
            return Err(ConfigError::NotWordMultiple);
        }
        if total_bits < 64 {
            return Err(ConfigError::TooNarrow);
        }

        let word_mask = mask(word_bits) as Word;
        Ok(Config {
            total_bits,
            word_bits,
            word_count: (total_bits / word_bits) as usize,
            word_mask,
            sign_bit_mask: 1 << (word_bits - 1),
            half_max: 1 + word_mask / 2,
        })
    }

    /// Derive a configuration for `total_bits` wide integers with the
    /// default word width (half of the native integer width).
    ///
    /// # Errors
    ///
    /// See [`Config::new`].
    pub const fn scale(total_bits: u32) -> Result<Config, ConfigError> {
        Config::new(total_bits, DEFAULT_WORD_BITS)
    }

    /// Like [`Config::new`], but panics on an invalid width.
    ///
    /// Used to evaluate [`Width::CONFIG`], so an invalid width is rejected
    /// at compile time.
    ///
    /// # Panics
    ///
    /// If the configuration is rejected by [`Config::new`].
    #[must_use]
    pub const fn expect(total_bits: u32, word_bits: u32) -> Config {
        match Config::new(total_bits, word_bits) {
            Ok(config) => config,
            Err(ConfigError::ZeroWordBits) => {
                panic!("word width must be at least one bit")
            }
            Err(ConfigError::WordTooWide) => {
                panic!("word width exceeds half of the native integer width")
            }
            Err(ConfigError::NotWordMultiple) => {
                panic!("total width is not a multiple of the word width")
            }
            Err(ConfigError::TooNarrow) => {
                panic!("total width must be at least 64 bits")
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}

/// A trait that fixes the width of a [`BigInt`](crate::BigInt) made of `N`
/// words.
///
/// Implementors are zero-sized marker types, usually declared with
/// [`declare_width!`](crate::declare_width).
pub trait Width<const N: usize>: Send + Sync + 'static + Sized {
    /// Number of significant bits per word.
    const WORD_BITS: u32 = DEFAULT_WORD_BITS;

    /// Configuration derived from `N` words of [`Self::WORD_BITS`] bits.
    #[allow(clippy::cast_possible_truncation)]
    const CONFIG: Config =
        Config::expect(N as u32 * Self::WORD_BITS, Self::WORD_BITS);
}

/// Declare a [`Width`] marker type and a [`BigInt`](crate::BigInt) alias of
/// the given total bit width (and, optionally, word width).
#[macro_export]
macro_rules! declare_width {
    ($width:ident, $int:ident, $bits:expr) => {
        $crate::declare_width!(
            $width,
            $int,
            $bits,
            $crate::word::DEFAULT_WORD_BITS
        );
    };
    ($width:ident, $int:ident, $bits:expr, $word_bits:expr) => {
        #[doc = "Width marker for "]
        #[doc = stringify!($bits)]
        #[doc = "-bit integers."]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $width;

        impl
            $crate::config::Width<{ ($bits as usize) / ($word_bits as usize) }>
            for $width
        {
            const WORD_BITS: u32 = $word_bits;
        }

        #[doc = "Two's complement integer with "]
        #[doc = stringify!($bits)]
        #[doc = " bits."]
        pub type $int = $crate::int::BigInt<
            $width,
            { ($bits as usize) / ($word_bits as usize) },
        >;
    };
}

declare_width!(W64, Int64, 64);
declare_width!(W128, Int128, 128);
declare_width!(W256, Int256, 256);
declare_width!(W512, Int512, 512);
declare_width!(W1024, Int1024, 1024);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.total_bits, 256);
        assert_eq!(config.word_bits, 32);
        assert_eq!(config.word_count, 8);
        assert_eq!(config.word_mask, u32::MAX);
        assert_eq!(config.sign_bit_mask, 0x8000_0000);
        assert_eq!(config.half_max, 0x8000_0000);
    }

    #[test]
    fn narrow_words() {
        let config = Config::new(128, 8).unwrap();
        assert_eq!(config.word_count, 16);
        assert_eq!(config.word_mask, 0xFF);
        assert_eq!(config.sign_bit_mask, 0x80);
        assert_eq!(config.half_max, 0x80);
    }

    #[test]
    fn rejects_invalid_widths() {
        assert_eq!(Config::new(256, 0), Err(ConfigError::ZeroWordBits));
        assert_eq!(Config::new(256, 64), Err(ConfigError::WordTooWide));
        assert_eq!(Config::new(100, 32), Err(ConfigError::NotWordMultiple));
        assert_eq!(Config::scale(32), Err(ConfigError::TooNarrow));
        assert_eq!(Config::scale(64).map(|c| c.word_count), Ok(2));
    }

    #[test]
    fn declared_widths() {
        assert_eq!(Int64::CONFIG.word_count, 2);
        assert_eq!(Int256::CONFIG, Config::DEFAULT);
        assert_eq!(Int1024::CONFIG.total_bits, 1024);
    }

    #[test]
    #[should_panic(expected = "total width is not a multiple of the word width")]
    fn expect_panics_on_invalid_width() {
        let _ = Config::expect(72, 16);
    }
}
