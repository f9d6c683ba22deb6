//! Small string transforms shared by the request mappers.

/// Truncate `value` to at most `max_len` characters, passing shorter values
/// through unchanged.
pub fn truncate_string(value: &str, max_len: usize) -> String {
    value.chars().take(max_len).collect()
}

/// Decode HTML character references left in stored URLs by the host's
/// storage layer, so `&amp;` and friends become literal characters before
/// the URL reaches the processor.
///
/// Handles the named references that occur in practice (`&amp;`, `&lt;`,
/// `&gt;`, `&quot;`, `&apos;`) plus decimal (`&#38;`) and hexadecimal
/// (`&#x26;`) numeric forms. Anything unrecognized passes through verbatim,
/// which makes the function total and idempotent on already-decoded input.
pub fn html_entity_decode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match tail
            .char_indices()
            .take(10)
            .find(|(_, c)| *c == ';')
            .map(|(end, _)| (&tail[1..end], end))
            .and_then(|(name, end)| decode_entity(name).map(|c| (c, end)))
        {
            Some((decoded, end)) => {
                out.push(decoded);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}
