const FRONT_MATTER_MARK: &str = "---";

/// Splits a document into its YAML front matter block and its body.
///
/// Example of document
/// ---
/// title: What I learned after 20+ years of software development
/// date: 2022-04-02 12:05:00
/// ---
///
/// How to be a great software engineer?
pub fn split_front_matter(raw: &str) -> Result<(&str, &str), String> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let mut offset = 0;
    let mut block_start = None;

    // Blank lines before the opening mark are ok
    for line in raw.split_inclusive('\n') {
        offset += line.len();
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }
        if line == FRONT_MATTER_MARK {
            block_start = Some(offset);
        }
        break;
    }

    let Some(start) = block_start else {
        return Err("Front matter block is missing".to_string());
    };

    let rest = &raw[start..];
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let end = offset;
        offset += line.len();
        if line.trim_end_matches(['\r', '\n']) == FRONT_MATTER_MARK {
            return Ok((&rest[..end], &rest[offset..]));
        }
    }

    Err("End of front matter block is missing".to_string())
}
