//! Provides the [Term] trait, which defines the methods shared by word
//! structs.

use std::borrow::Cow;

/// This trait is implemented by words that can be inflected for number.
pub trait Term<'a> {
    fn new(word: &'a str) -> Self;

    /// Returns the singular form of the given word. If the word is already
    /// singular it will return the word given to `new`, without allocating a
    /// new [String](std::string::String). The returned word matches the case
    /// of the word it was given, so "Ladies" becomes "Lady" and "MICE"
    /// becomes "MOUSE".
    fn singular(&self) -> Cow<'a, str>;

    /// Returns the plural form of the given word. If the word is already
    /// plural it will return the word given to `new`. The returned word
    /// matches the case of the word it was given, so "dog" becomes "dogs",
    /// "Dog" becomes "Dogs", and "DOG" becomes "DOGS".
    fn plural(&self) -> Cow<'a, str>;

    /// Returns a boolean indicating whether the word is singular. Note that a
    /// word can be *both* singular and plural, like "sheep".
    fn is_singular(&self) -> bool;

    /// Returns a boolean indicating whether the word is plural. Note that a
    /// word can be *both* singular and plural, like "sheep".
    fn is_plural(&self) -> bool;
}
