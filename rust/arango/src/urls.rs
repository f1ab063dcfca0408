//! Server routes used by this crate and the helper that extends them with path segments.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::client::ArangoHttpClientError;

/// Database collection: create (POST), list (GET), delete (DELETE + name).
pub const URL_DATABASE: &str = "/_api/database";
/// Raw upload of a file into the server's temporary upload area.
pub const URL_UPLOAD: &str = "/_api/upload";
/// Installs a previously uploaded Foxx archive at a mount point.
pub const URL_FOXX_INSTALL: &str = "/_admin/foxx/install";

// Everything outside RFC 3986 `pchar`, plus `/` so a segment can never split.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encodes a single path segment.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Appends `segments` to `base`, one `/` between each, encoding every segment.
///
/// `.` and `..` are rejected: URL parsing would resolve them away (escaped or not) and the
/// request would hit a different route.
///
/// ```
/// use arango::urls::{build_url, URL_DATABASE};
///
/// assert_eq!(build_url(URL_DATABASE, ["user"]).unwrap(), "/_api/database/user");
/// assert_eq!(build_url(URL_DATABASE, ["a/b c"]).unwrap(), "/_api/database/a%2Fb%20c");
/// assert!(build_url(URL_DATABASE, [".."]).is_err());
/// ```
pub fn build_url<I, S>(base: &str, segments: I) -> Result<String, ArangoHttpClientError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        let segment = segment.as_ref();
        if segment == "." || segment == ".." {
            return Err(ArangoHttpClientError::InvalidUrl(format!(
                "{}: dot segment {:?} cannot be addressed",
                base, segment
            )));
        }
        url.push('/');
        url.push_str(&encode_segment(segment));
    }
    Ok(url)
}
