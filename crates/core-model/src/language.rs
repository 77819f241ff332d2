//! File-extension families consulted by language-aware detectors.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    JavaScript,
    Java,
    Php,
    ObjectiveC,
    Css,
    Sql,
    Markup,
    Other,
}

impl FileKind {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "jsx" | "ts" | "tsx" | "mjs" | "cjs" | "es6" | "vue" => FileKind::JavaScript,
            "java" => FileKind::Java,
            "php" | "phtml" | "php3" | "php4" | "php5" | "inc" => FileKind::Php,
            "m" | "mm" => FileKind::ObjectiveC,
            "css" | "scss" | "sass" | "less" | "styl" => FileKind::Css,
            "sql" => FileKind::Sql,
            "html" | "htm" | "xml" | "xhtml" | "svg" | "twig" => FileKind::Markup,
            _ => FileKind::Other,
        }
    }

    pub fn is_js(self) -> bool {
        self == FileKind::JavaScript
    }

    pub fn is_php(self) -> bool {
        self == FileKind::Php
    }

    pub fn is_css(self) -> bool {
        self == FileKind::Css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families() {
        assert_eq!(FileKind::from_extension("SCSS"), FileKind::Css);
        assert_eq!(FileKind::from_extension("phtml"), FileKind::Php);
        assert_eq!(FileKind::from_extension("mm"), FileKind::ObjectiveC);
        assert_eq!(FileKind::from_extension(""), FileKind::Other);
        assert!(FileKind::from_extension("mjs").is_js());
    }
}
