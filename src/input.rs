//! Parsing and validating numeric choices typed by the player.

use core::convert::Infallible;

use crate::error::ChoiceError;

/// A value accepted by [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<T = i64> {
    /// The accepted value.
    pub value: T,
    /// Lines rejected before it.
    pub rejected: usize,
}

/// Where [`resolve`] gets its lines from and tells about rejected ones.
///
/// The console implements this over stdin; a plain iterator of lines is
/// wrapped by [`resolve_bounded`].
pub trait LineSource {
    /// A line of input.
    type Line: AsRef<str>;
    /// Failure to read a line or to report a rejection.
    type Error;

    /// Reads the next line, or `None` once input has ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the line cannot be read.
    fn next_line(&mut self) -> Result<Option<Self::Line>, Self::Error>;

    /// Called with the reason each line was rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the rejection cannot be reported.
    fn rejected(&mut self, err: ChoiceError) -> Result<(), Self::Error> {
        let _ = err;
        Ok(())
    }
}

/// Parses one line as an integer within `min..=max`.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`ChoiceError::NotANumber`] when the line is not an integer and
/// [`ChoiceError::OutOfRange`] when it falls outside the bounds.
///
/// # Example
///
/// ```
/// use cardduel::input::parse_bounded;
///
/// assert_eq!(parse_bounded(" 2\n", 1, 2), Ok(2));
/// assert!(parse_bounded("3", 1, 2).is_err());
/// assert!(parse_bounded("two", 1, 2).is_err());
/// ```
pub fn parse_bounded(line: &str, min: i64, max: i64) -> Result<i64, ChoiceError> {
    let value = line
        .trim()
        .parse::<i64>()
        .map_err(|_| ChoiceError::NotANumber { min, max })?;

    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ChoiceError::OutOfRange { value, min, max })
    }
}

/// Reads lines from `source` until `parse` accepts one.
///
/// Every rejected line is handed to [`LineSource::rejected`]. Returns
/// `Ok(None)` if input ends first. There is no retry limit.
///
/// # Errors
///
/// Returns the source's error if reading or reporting fails.
pub fn resolve<S, T, F>(source: &mut S, parse: F) -> Result<Option<Resolved<T>>, S::Error>
where
    S: LineSource + ?Sized,
    F: Fn(&str) -> Result<T, ChoiceError>,
{
    let mut rejected = 0;
    while let Some(line) = source.next_line()? {
        match parse(line.as_ref()) {
            Ok(value) => return Ok(Some(Resolved { value, rejected })),
            Err(err) => {
                log::debug!("rejected choice {:?}: {err:?}", line.as_ref().trim());
                rejected += 1;
                source.rejected(err)?;
            }
        }
    }
    Ok(None)
}

/// Pre-supplied lines.
struct Supplied<I>(I);

impl<I> LineSource for Supplied<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Line = I::Item;
    type Error = Infallible;

    fn next_line(&mut self) -> Result<Option<Self::Line>, Self::Error> {
        Ok(self.0.next())
    }
}

/// Feeds `lines` through [`parse_bounded`] until one is accepted.
///
/// Returns `None` if the lines run out first.
///
/// # Example
///
/// ```
/// use cardduel::input::{Resolved, resolve_bounded};
///
/// let resolved = resolve_bounded(["x", "0", "1"], 1, 2);
/// assert_eq!(resolved, Some(Resolved { value: 1, rejected: 2 }));
/// assert_eq!(resolve_bounded(["5"], 1, 2), None);
/// ```
pub fn resolve_bounded<I>(lines: I, min: i64, max: i64) -> Option<Resolved>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut source = Supplied(lines.into_iter());
    match resolve(&mut source, |line| parse_bounded(line, min, max)) {
        Ok(resolved) => resolved,
        Err(never) => match never {},
    }
}
