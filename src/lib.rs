//! A library for splitting free-form Western-style personal names into
//! salutation, first name, middle initials, last name and suffix.
//!
//! ```
//! use name_parser::Name;
//!
//! let name = Name::parse("Mr Anthony R Von Fange III").unwrap();
//! assert_eq!("Mr.", name.salutation());
//! assert_eq!("Anthony", name.first_name());
//! assert_eq!("R", name.middle_name());
//! assert_eq!("Von Fange", name.last_name());
//! assert_eq!("III", name.suffix());
//! assert_eq!("Mr. Anthony R Von Fange III", name.to_string());
//! ```

mod case;
mod error;
mod initials;
mod parse;
mod suffix;
mod surname;
mod title;
mod utils;
mod word;

#[cfg(feature = "serialization")]
mod serialization;

#[cfg(feature = "ffi")]
pub mod external;

pub use error::ParseError;

use compact_str::CompactString;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Represents a parsed human name.
///
/// Every field is free of leading and trailing whitespace, and any field may
/// be empty, but a successfully parsed name always has a first name or a last
/// name (or both).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Name {
    salutation: CompactString,
    first_name: CompactString,
    middle_name: CompactString,
    last_name: CompactString,
    suffix: CompactString,
}

impl Name {
    /// Parses a string representing a single person's name.
    ///
    /// The first word is taken as a salutation if it is a known one ("Mr",
    /// "Dr.", ...), and the last word as a suffix if it is a known one ("Jr",
    /// "III", "PhD", ...). Words in parentheses are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Empty` if no words remain to form a first or last
    /// name, e.g. for "", "(Bob)" or "Jr.".
    ///
    /// # Examples
    ///
    /// ```
    /// use name_parser::{Name, ParseError};
    ///
    /// let name = Name::parse("Aaron bin Omar").unwrap();
    /// assert_eq!("Aaron", name.first_name());
    /// assert_eq!("bin Omar", name.last_name());
    ///
    /// assert_eq!(Err(ParseError::Empty), Name::parse("  "));
    /// ```
    pub fn parse(name: &str) -> Result<Name, ParseError> {
        parse::parse(name)
    }

    /// Canonical punctuated salutation ("Mr.", "Dr.", ...), or "" if none.
    pub fn salutation(&self) -> &str {
        &self.salutation
    }

    /// Given name words, or leading initials ("J R"), or "" if none.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Middle initials, space-separated ("R", "P Q"), or "" if none.
    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }

    /// Surname, including any particles ("Von Fange", "bin Omar"), or "" if
    /// the input was a single name like "Adam".
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Canonically-cased suffix ("Jr", "III", "PhD", ...), or "" if none.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// All non-empty fields, in order, separated by single spaces.
    ///
    /// Equivalent to `to_string()`.
    pub fn display_full(&self) -> String {
        self.to_string()
    }

    /// First and last name only, e.g. "Anthony Von Fange".
    pub fn display_first_last(&self) -> Cow<str> {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => Cow::Owned(format!("{} {}", self.first_name, self.last_name)),
            (false, true) => Cow::Borrowed(self.first_name.as_str()),
            _ => Cow::Borrowed(self.last_name.as_str()),
        }
    }

    /// First initial and last name, e.g. "A. Von Fange".
    ///
    /// Falls back to the middle initial if there is no first name, and to the
    /// first name alone if there is no last name.
    pub fn display_initial_surname(&self) -> Cow<str> {
        if self.last_name.is_empty() {
            return Cow::Borrowed(self.first_name.as_str());
        }

        let initial = self
            .first_name
            .chars()
            .chain(self.middle_name.chars())
            .find(|c| c.is_alphabetic());

        match initial {
            Some(c) => Cow::Owned(format!("{}. {}", c.to_uppercase(), self.last_name)),
            None => Cow::Borrowed(self.last_name.as_str()),
        }
    }

    /// The upper-cased first letter of each word of the first, middle and
    /// last names, e.g. "ARVF" for "Anthony R Von Fange".
    pub fn initials(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .flat_map(|field| field.split_whitespace())
            .filter_map(|word| word.chars().find(|c| c.is_alphabetic()))
            .flat_map(char::to_uppercase)
            .collect()
    }

    fn fields(&self) -> impl Iterator<Item = &str> {
        IntoIterator::into_iter([
            &self.salutation,
            &self.first_name,
            &self.middle_name,
            &self.last_name,
            &self.suffix,
        ])
        .map(|field| field.as_str())
        .filter(|field| !field.is_empty())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(field)?;
        }
        Ok(())
    }
}

impl FromStr for Name {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Name, ParseError> {
        Name::parse(s)
    }
}
