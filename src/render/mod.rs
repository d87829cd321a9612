//! HTML page rendering.
//!
//! The page template carries a single `{{ stones }}` placeholder that is
//! replaced by the JSON array of extracted moves.

use crate::sgf::MoveRecord;
use crate::Result;
use std::path::Path;

pub const STONES_PLACEHOLDER: &str = "{{ stones }}";

/// Page used when no template file is found on disk
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Serializes `stones` for embedding in a `<script>` element
pub fn stones_json(stones: &[MoveRecord]) -> Result<String> {
    let json = serde_json::to_string(stones)?;
    Ok(json.replace("</", "<\\/"))
}

pub fn render_index(template: &str, stones: &[MoveRecord]) -> Result<String> {
    if !template.contains(STONES_PLACEHOLDER) {
        log::warn!("Template has no {} placeholder", STONES_PLACEHOLDER);
    }
    Ok(template.replace(STONES_PLACEHOLDER, &stones_json(stones)?))
}

/// Reads the template at `path`, falling back to [`DEFAULT_TEMPLATE`]
pub async fn load_template(path: &Path) -> String {
    match tokio::fs::read_to_string(path).await {
        Ok(template) => template,
        Err(e) => {
            log::debug!(
                "Template {} unavailable ({}), using built-in page",
                path.display(),
                e
            );
            DEFAULT_TEMPLATE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sgf::StoneColor;

    #[test]
    fn test_render_embeds_stones() {
        let stones = [MoveRecord {
            x: 3,
            y: 15,
            color: StoneColor::White,
            sequence_index: 2,
        }];
        let page = render_index("<script>const s = {{ stones }};</script>", &stones).unwrap();
        assert_eq!(
            page,
            r#"<script>const s = [{"x":3,"y":15,"color":"white","move":2}];</script>"#
        );
    }

    #[test]
    fn test_render_empty_list() {
        let page = render_index("{{ stones }}", &[]).unwrap();
        assert_eq!(page, "[]");
    }

    #[test]
    fn test_default_template_has_placeholder() {
        assert!(DEFAULT_TEMPLATE.contains(STONES_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_missing_template_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let template = load_template(&dir.path().join("missing.html")).await;
        assert_eq!(template, DEFAULT_TEMPLATE);
    }

    #[tokio::test]
    async fn test_template_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, "<p>{{ stones }}</p>").unwrap();
        assert_eq!(load_template(&path).await, "<p>{{ stones }}</p>");
    }
}
