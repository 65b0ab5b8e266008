use url::Url;

use crate::path::{PathError, PathResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost/";

pub fn parse_base_url(input: &str) -> PathResult<Url> {
    let url = Url::parse(input).map_err(|err| PathError::InvalidBaseUrl {
        input: input.to_string(),
        reason: err.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(PathError::BaseUrlCannotBeABase {
            input: input.to_string(),
        });
    }

    Ok(url)
}

/// Turns an absolute or relative url into the path that routes are matched
/// against: path, then `?query`, then `#fragment`.
///
/// When a fragment is present its content replaces the whole result, so
/// `https://example.com/#/hello` resolves to `/hello`. The result always
/// starts with `/`.
#[tracing::instrument(level = "trace", skip(raw, base), fields(raw=%raw))]
pub fn resolve_path(raw: &str, base: &Url) -> String {
    let joined = match base.join(raw) {
        Ok(url) => {
            let mut out = String::with_capacity(raw.len() + 1);
            out.push_str(url.path());
            if let Some(query) = url.query().filter(|q| !q.is_empty()) {
                out.push('?');
                out.push_str(query);
            }
            if let Some(fragment) = url.fragment().filter(|f| !f.is_empty()) {
                out.push('#');
                out.push_str(fragment);
            }
            out
        }
        Err(err) => {
            tracing::event!(
                tracing::Level::DEBUG,
                raw = %raw,
                error = %err,
                "url did not parse; resolving raw text"
            );
            raw.to_string()
        }
    };

    let effective = match joined.split_once('#') {
        Some((_, after)) => after.split_once('#').map_or(after, |(head, _)| head),
        None => joined.as_str(),
    };

    if effective.starts_with('/') {
        effective.to_string()
    } else {
        format!("/{effective}")
    }
}
