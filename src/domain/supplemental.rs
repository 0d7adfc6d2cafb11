/// Externally maintained ASC whitelist, exported as plain text.
pub const ASC_WHITELIST_URL: &str =
    "https://docs.google.com/document/d/1tMzGySrFdXIKW1JG9sKTJiEvsEGDM0oT4tzuxojXWpc/export?format=txt";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Plain-text export URL of a Google Docs document.
pub fn google_doc_export_url(doc_id: &str) -> String {
    format!("https://docs.google.com/document/d/{}/export?format=txt", doc_id)
}

/// A fetched document appended after the generated sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplementalSection {
    pub source: String,
    pub body: String,
}

impl SupplementalSection {
    /// The ASC whitelist goes in as-is (minus a byte order mark).
    pub fn verbatim(source: impl Into<String>, body: &str) -> Self {
        Self {
            source: source.into(),
            body: strip_bom(body).to_owned(),
        }
    }

    /// Other documents must not redefine roles, so their `Group=` lines become comments.
    pub fn without_groups(source: impl Into<String>, body: &str) -> Self {
        Self {
            source: source.into(),
            body: comment_out_group_lines(strip_bom(body)),
        }
    }
}

pub fn strip_bom(body: &str) -> &str {
    body.strip_prefix(BYTE_ORDER_MARK).unwrap_or(body)
}

/// Prefixes every line starting with `Group=` (after indentation) with `// `.
///
/// ```
/// use squadsheets::domain::supplemental::comment_out_group_lines;
/// let body = "Group=Admin:kick\r\nAdmin=1:Admin\r\n";
/// assert_eq!(comment_out_group_lines(body), "// Group=Admin:kick\r\nAdmin=1:Admin\r\n");
/// ```
pub fn comment_out_group_lines(body: &str) -> String {
    body.split_inclusive('\n')
        .map(|line| {
            let content = line.trim_start();
            if content.starts_with("Group=") {
                let indent = &line[..line.len() - content.len()];
                format!("{}// {}", indent, content)
            } else {
                line.to_owned()
            }
        })
        .collect()
}
