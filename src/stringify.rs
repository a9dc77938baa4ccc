//! Header value stringification.
//!
//! Texts are quoted on need, elements are joined with `"; "` and groups with `", "`.
use crate::{
    context::ElementContext,
    error::{ErrorKind, Result},
    ext::encode_ext_value_on_need,
    quote::enquote_on_need,
    split::{Group, Token},
};

#[cfg(test)]
mod test;

/// Stringify header value from contexts.
///
/// A parameter with an empty value is written as a bare key. A parameter value that is not
/// printable ASCII is written as an extended value, with `*` appended to its key.
///
/// # Errors
///
/// Returns error if a context has neither value nor parameters, has an empty value, or has a
/// parameter with an empty key.
///
/// ```
/// use hval::ElementContext;
///
/// let contexts = [
///     ElementContext::new("attachment").with_parameter("filename", "€ rates.txt"),
/// ];
///
/// assert_eq!(
///     hval::stringify_from_contexts(&contexts).unwrap(),
///     "attachment; filename*=UTF-8''%E2%82%AC%20rates.txt",
/// );
/// ```
pub fn stringify_from_contexts(contexts: &[ElementContext]) -> Result<String> {
    let mut groups = Vec::with_capacity(contexts.len());

    for (i, ElementContext { value, parameters }) in contexts.iter().enumerate() {
        if value.is_none() && parameters.is_empty() {
            return Err(ErrorKind::EmptyContext(i).into());
        }

        let mut group = Group::with_capacity(parameters.len() + 1);

        if let Some(value) = value {
            if value.is_empty() {
                return Err(ErrorKind::EmptyValue(i).into());
            }
            group.push(Token::Plain(value.clone()));
        }

        for (j, (key, value)) in parameters.iter().enumerate() {
            if key.is_empty() {
                return Err(ErrorKind::EmptyKey(i, j).into());
            }
            if value.is_empty() {
                group.push(Token::Plain(key.to_owned()));
                continue;
            }
            let encoded = encode_ext_value_on_need(value, "")?;
            let key = if encoded.encoded {
                format!("{key}*")
            } else {
                key.to_owned()
            };
            group.push(Token::Pair(key, encoded.value));
        }

        groups.push(group);
    }

    Ok(render(&groups))
}

/// Stringify header value from tokens.
///
/// # Errors
///
/// Returns error if a group is empty, or a bare token or a pair key is empty.
///
/// Pair values are never [RFC 8187] encoded. Non-ASCII values are written as-is, quoted only when
/// they need quoting.
///
/// ```
/// use hval::Token;
///
/// let groups = [
///     vec![Token::from("</style.css>"), Token::from(("rel", "preload"))],
///     vec![Token::from(("title", "a, b"))],
/// ];
///
/// assert_eq!(
///     hval::stringify_from_tokens(&groups).unwrap(),
///     r#"</style.css>; rel=preload, title="a, b""#,
/// );
/// ```
///
/// [RFC 8187]: https://www.rfc-editor.org/rfc/rfc8187
pub fn stringify_from_tokens(groups: &[Group]) -> Result<String> {
    for (i, group) in groups.iter().enumerate() {
        if group.is_empty() {
            return Err(ErrorKind::EmptyGroup(i).into());
        }
        for (j, token) in group.iter().enumerate() {
            match token {
                Token::Plain(text) if text.is_empty() => {
                    return Err(ErrorKind::EmptyToken(i, j).into());
                }
                Token::Pair(key, _) if key.is_empty() => {
                    return Err(ErrorKind::EmptyKey(i, j).into());
                }
                _ => {}
            }
        }
    }
    Ok(render(groups))
}

fn render(groups: &[Group]) -> String {
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i != 0 {
            out.push_str(", ");
        }
        for (j, token) in group.iter().enumerate() {
            if j != 0 {
                out.push_str("; ");
            }
            match token {
                Token::Plain(text) => out.push_str(&enquote_on_need(text)),
                Token::Pair(key, value) => {
                    out.push_str(&enquote_on_need(key));
                    out.push('=');
                    out.push_str(&enquote_on_need(value));
                }
            }
        }
    }
    out
}
