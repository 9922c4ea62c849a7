//! Askama Chapter Template
//!
//! 默认章节页面，模板文件位于 `templates/chapter.html`，编译期检查。
//! HTML 转义由 askama 完成；挂载前缀来自配置，按原样输出。

use askama::Template;

use crate::application::ports::{ChapterTemplatePort, TemplateError};
use crate::domain::Chapter;

#[derive(Template)]
#[template(path = "chapter.html")]
struct ChapterPage<'a> {
    chapter: &'a Chapter,
    link_prefix: &'a str,
}

/// 默认章节模板
///
/// 选项链接为 `{link_prefix}/{chapter}`，根路径挂载时前缀为空串。
#[derive(Debug, Clone, Default)]
pub struct AskamaChapterTemplate {
    link_prefix: String,
}

impl AskamaChapterTemplate {
    /// `prefix` 末尾的 `/` 会被去掉，`/` 与空串都表示根路径
    pub fn new(prefix: &str) -> Self {
        Self {
            link_prefix: prefix.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn link_prefix(&self) -> &str {
        &self.link_prefix
    }
}

impl ChapterTemplatePort for AskamaChapterTemplate {
    fn render(&self, chapter: &Chapter) -> Result<String, TemplateError> {
        ChapterPage {
            chapter,
            link_prefix: &self.link_prefix,
        }
        .render()
        .map_err(|e| TemplateError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChapterOption;

    fn chapter() -> Chapter {
        Chapter::new(
            "The Little Blue Gopher",
            vec!["Once upon a time".to_string(), "the end came".to_string()],
            vec![
                ChapterOption::new("To New York", "new-york"),
                ChapterOption::new("To Denver", "denver"),
            ],
        )
    }

    #[test]
    fn test_renders_title_paragraphs_and_links() {
        let html = AskamaChapterTemplate::root().render(&chapter()).unwrap();

        assert!(html.contains("<h1>The Little Blue Gopher</h1>"));
        assert!(html.contains("<p>Once upon a time</p>"));
        assert!(html.contains("<p>the end came</p>"));
        assert!(html.contains(r#"<a href="/new-york">To New York</a>"#));
        assert!(html.contains(r#"<a href="/denver">To Denver</a>"#));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_prefix_is_applied_to_links() {
        let template = AskamaChapterTemplate::new("/story/");
        assert_eq!(template.link_prefix(), "/story");

        let html = template.render(&chapter()).unwrap();

        assert!(html.contains(r#"<a href="/story/new-york">To New York</a>"#));
    }

    #[test]
    fn test_root_prefix_variants_are_equivalent() {
        assert_eq!(AskamaChapterTemplate::new("/").link_prefix(), "");
        assert_eq!(AskamaChapterTemplate::new("").link_prefix(), "");
    }

    #[test]
    fn test_ending_chapter_keeps_empty_option_list() {
        let ending = Chapter::new("Home", vec!["end".to_string()], vec![]);

        let html = AskamaChapterTemplate::root().render(&ending).unwrap();

        assert!(html.contains("<h1>Home</h1>"));
        assert!(html.contains("<ul>"));
        assert!(!html.contains("<li>"));
        assert!(!html.contains("<a href"));
    }

    #[test]
    fn test_story_text_is_html_escaped() {
        let hostile = Chapter::new(
            "<script>alert(1)</script>",
            vec!["a & b".to_string()],
            vec![ChapterOption::new("<b>bold</b>", "next")],
        );

        let html = AskamaChapterTemplate::root().render(&hostile).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn test_empty_chapter_renders() {
        let html = AskamaChapterTemplate::root()
            .render(&Chapter::default())
            .unwrap();

        assert!(html.contains("<h1></h1>"));
    }
}
