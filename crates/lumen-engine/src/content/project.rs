use serde::{Deserialize, Serialize};

/// Project details carried in a card's `data-project` JSON attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub img: String,
}

impl ProjectInfo {
    /// Parse a project from the raw attribute JSON.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Modal body markup. Every interpolated value is HTML-escaped,
    /// attribute values included.
    pub fn modal_html(&self) -> String {
        let tags: String = self
            .tags
            .iter()
            .map(|t| {
                format!(
                    "<span style=\"margin-right:.5rem;background:rgba(255,255,255,0.02);padding:.3rem .5rem;border-radius:8px;\">{}</span>",
                    escape_html(t)
                )
            })
            .collect();
        format!(
            concat!(
                "<div style=\"display:grid;grid-template-columns:1fr 320px;gap:1rem;\">",
                "<div>",
                "<h2>{title}</h2>",
                "<p style=\"color:var(--muted)\">{desc}</p>",
                "<p><strong>Tags:</strong> {tags}</p>",
                "<h4>Notes</h4>",
                "<p style=\"color:var(--muted)\">Add experiment details, dataset links, or code snippets here. Replace placeholders with your repo links.</p>",
                "</div>",
                "<div style=\"border-radius:10px;overflow:hidden\">",
                "<img src=\"{img}\" style=\"width:100%;height:100%;object-fit:cover\" alt=\"{title}\">",
                "</div>",
                "</div>",
            ),
            title = escape_html(&self.title),
            desc = escape_html(&self.desc),
            tags = tags,
            img = escape_html(&self.img),
        )
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five_characters() {
        assert_eq!(
            escape_html(r#"<b a="1">&'x'</b>"#),
            "&lt;b a=&quot;1&quot;&gt;&amp;&#39;x&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("Robotics Engineer"), "Robotics Engineer");
    }

    #[test]
    fn parses_card_attribute_json() {
        let raw = r#"{"title":"Maze Bot","desc":"Path planning","tags":["ros","rust"],"img":"bot.png"}"#;
        let info = ProjectInfo::from_json(raw).unwrap();
        assert_eq!(info.title, "Maze Bot");
        assert_eq!(info.tags.len(), 2);
    }

    #[test]
    fn missing_optional_fields_default() {
        let info = ProjectInfo::from_json(r#"{"title":"Solo"}"#).unwrap();
        assert!(info.desc.is_empty());
        assert!(info.tags.is_empty());
        assert!(info.img.is_empty());
    }

    #[test]
    fn modal_html_escapes_interpolations() {
        let info = ProjectInfo {
            title: "<script>alert(1)</script>".into(),
            desc: "a & b".into(),
            tags: vec!["<i>".into()],
            img: "x\" onerror=\"y".into(),
        };
        let html = info.modal_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("&lt;i&gt;"));
        assert!(!html.contains("onerror=\"y"));
    }

    #[test]
    fn modal_html_lists_all_tags() {
        let info = ProjectInfo {
            title: "T".into(),
            desc: String::new(),
            tags: vec!["ml".into(), "cv".into()],
            img: String::new(),
        };
        let html = info.modal_html();
        assert!(html.contains(">ml</span>"));
        assert!(html.contains(">cv</span>"));
    }
}
