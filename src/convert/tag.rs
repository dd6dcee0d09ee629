//! Tag categories the converter reacts to.

/// Tag names with special handling; anything else is `Other` and has no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    /// `<a>`
    Anchor,
    /// `<br>`
    LineBreak,
    /// `<code>`
    Code,
    /// `<pre>`
    Pre,
    /// `<div>`
    Div,
    /// `<p>`
    Paragraph,
    /// `<li>`
    ListItem,
    /// `<ul>` or `<ol>`
    List,
    /// `<script>` or `<style>`
    Script,
    /// Everything else.
    Other,
}

impl TagKind {
    /// Classify a lowercase tag name.
    #[must_use]
    pub fn of(tag: &str) -> Self {
        match tag {
            "a" => Self::Anchor,
            "br" => Self::LineBreak,
            "code" => Self::Code,
            "pre" => Self::Pre,
            "div" => Self::Div,
            "p" => Self::Paragraph,
            "li" => Self::ListItem,
            "ul" | "ol" => Self::List,
            "script" | "style" => Self::Script,
            _ => Self::Other,
        }
    }
}
