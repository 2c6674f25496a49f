use crate::error::QueryError;
use camlq_primitives::ValueType;
use std::borrow::Cow;

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

// Closes the section after the first two brackets and reopens before '>',
// so the terminator never appears inside a single section.
const CDATA_SPLIT: &str = "]]]]><![CDATA[>";

/// Embed a raw value for a `<Value>` element of the given type.
///
/// Free-text kinds are wrapped in a CDATA section; every other kind is
/// returned untouched.
#[must_use]
pub fn escape(value: &str, value_type: ValueType) -> Cow<'_, str> {
    if !value_type.is_cdata_escaped() {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + CDATA_OPEN.len() + CDATA_CLOSE.len());
    out.push_str(CDATA_OPEN);
    out.push_str(&value.replace(CDATA_CLOSE, CDATA_SPLIT));
    out.push_str(CDATA_CLOSE);

    Cow::Owned(out)
}

/// Recover the raw value from the output of [`escape`].
///
/// For CDATA kinds the markup must be one or more adjacent CDATA sections;
/// their contents are concatenated.
pub fn unescape(markup: &str, value_type: ValueType) -> Result<Cow<'_, str>, QueryError> {
    if !value_type.is_cdata_escaped() {
        return Ok(Cow::Borrowed(markup));
    }

    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    loop {
        let body = rest
            .strip_prefix(CDATA_OPEN)
            .ok_or_else(|| QueryError::malformed_value(markup))?;
        let end = body
            .find(CDATA_CLOSE)
            .ok_or_else(|| QueryError::malformed_value(markup))?;

        out.push_str(&body[..end]);
        rest = &body[end + CDATA_CLOSE.len()..];

        if rest.is_empty() {
            return Ok(Cow::Owned(out));
        }
    }
}
