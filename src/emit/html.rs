use super::write_file;
use crate::{Config, Error, Pattern, Result};

/// Rewrites the marked region of the display document with one canvas per
/// pattern, in the given order.
pub fn write_html(config: &Config, patterns: &[Pattern]) -> Result<()> {
    let path = &config.html_path;
    let html = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.clone(),
        source,
    })?;
    let canvases = patterns
        .iter()
        .map(|p| canvas_element(p, config.cell_side))
        .collect::<Vec<_>>()
        .join("\n");
    let updated = replace_region(&html, &canvases).map_err(|marker| Error::MarkerNotFound {
        path: path.clone(),
        marker,
    })?;
    write_file(path, updated)
}

/// Canvas sized to the bitmap at `cell_side` pixels per cell.
pub fn canvas_element(pattern: &Pattern, cell_side: u32) -> String {
    let side = cell_side as usize;
    format!(
        r#"<canvas data-type="{}" id="{}" class="ui-widget-content" width="{}" height="{}" title="{}"></canvas>"#,
        pattern.category,
        escape(&pattern.id),
        pattern.cells.width() * side,
        pattern.cells.height() * side,
        escape(&pattern.display_name),
    )
}

/// Replaces everything between the begin and end markers with `content`,
/// keeping both markers. Fails with the first marker that is missing.
pub fn replace_region(html: &str, content: &str) -> std::result::Result<String, &'static str> {
    let (begin, end) = (Config::BEGIN_MARKER, Config::END_MARKER);
    let b = html.find(begin).ok_or(begin)?;
    let e = html[b..].find(end).map(|e| b + e).ok_or(end)?;
    Ok(format!("{}{begin}\n{content}\n{}", &html[..b], &html[e..]))
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bitmap, Category};

    const PAGE: &str = "<body>\n<div id=\"patterns\">\n<!--BEGIN PATTERNS-->\nold\n<!--END PATTERNS-->\n</div>\n</body>\n";

    fn glider() -> Pattern {
        Pattern {
            category: Category::Spaceship,
            id: "glider".into(),
            display_name: "Glider \"GL\"".into(),
            cells: Bitmap::blank(3, 3),
        }
    }

    #[test]
    fn test_canvas_element() {
        assert_eq!(
            canvas_element(&glider(), 7),
            r#"<canvas data-type="spaceship" id="glider" class="ui-widget-content" width="21" height="21" title="Glider &quot;GL&quot;"></canvas>"#
        );
    }

    #[test]
    fn test_replace_region() {
        let replaced = replace_region(PAGE, "new").unwrap();
        assert_eq!(
            replaced,
            "<body>\n<div id=\"patterns\">\n<!--BEGIN PATTERNS-->\nnew\n<!--END PATTERNS-->\n</div>\n</body>\n"
        );
        // the region is rewritten, not appended to
        assert_eq!(replace_region(&replaced, "new").unwrap(), replaced);
    }

    #[test]
    fn test_missing_markers() {
        assert_eq!(
            replace_region("<body></body>", "x"),
            Err(Config::BEGIN_MARKER)
        );
        assert_eq!(
            replace_region("<!--END PATTERNS--><!--BEGIN PATTERNS-->", "x"),
            Err(Config::END_MARKER)
        );
    }

    #[test]
    fn test_write_html() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::rooted_at(dir.path());
        std::fs::write(&config.html_path, PAGE).unwrap();
        write_html(&config, &[glider()]).unwrap();
        let html = std::fs::read_to_string(&config.html_path).unwrap();
        assert!(html.contains(r#"id="glider""#));
        assert!(!html.contains("old"));
        assert!(html.ends_with("<!--END PATTERNS-->\n</div>\n</body>\n"));
    }
}
