// coin-core/src/display.rs

//! Capacity-Checked Output for Confirmation Screens
//!
//! [`DisplayBuffer`] is the destination type for everything this crate
//! renders onto a fixed-width device screen. A write that would exceed the
//! declared capacity is refused with [`DisplayError::Overflow`] and leaves
//! the buffer untouched; nothing in this crate performs an unchecked write.

use crate::error::{DisplayError, DisplayResult};

/// String builder with an explicit byte capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    text: String,
    capacity: usize,
}

impl DisplayBuffer {
    /// Empty buffer that accepts at most `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> DisplayBuffer {
        DisplayBuffer {
            text: String::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `s`, refusing the whole write if it does not fit.
    pub fn push_str(&mut self, s: &str) -> DisplayResult<()> {
        let required = self.text.len() + s.len();
        if required > self.capacity {
            return Err(DisplayError::Overflow {
                required,
                capacity: self.capacity,
            });
        }
        self.text.push_str(s);
        Ok(())
    }

    /// Append a single character, refusing it if it does not fit.
    pub fn push(&mut self, c: char) -> DisplayResult<()> {
        let required = self.text.len() + c.len_utf8();
        if required > self.capacity {
            return Err(DisplayError::Overflow {
                required,
                capacity: self.capacity,
            });
        }
        self.text.push(c);
        Ok(())
    }

    /// Rendered text so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Bytes still available before the capacity is reached.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.text.len()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

// =============================================================================
// TESTS
// =============================================================================
