//! Element context stack.

/// One currently-open element.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Lowercase tag name.
    pub tag: String,
    /// Attributes in source order; duplicates are kept, lookups see the first one.
    pub attrs: Vec<(String, String)>,
    /// Set once a `[News]` line has been emitted for this element.
    pub emitted: bool,
}

impl Frame {
    /// What: Look up an attribute value by name.
    ///
    /// Output:
    /// - The first value recorded for `name`, or `None`.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether this frame is `<tag class="class">`.
    #[must_use]
    pub fn is(&self, tag: &str, class: &str) -> bool {
        self.tag == tag && self.attr("class") == Some(class)
    }
}

/// Stack of open elements; top is the innermost one.
#[derive(Debug, Default)]
pub struct ElementStack {
    /// Frames, outermost first.
    frames: Vec<Frame>,
}

impl ElementStack {
    /// Push a newly opened element.
    pub fn push(&mut self, tag: &str, attrs: Vec<(String, String)>) {
        self.frames.push(Frame {
            tag: tag.to_string(),
            attrs,
            emitted: false,
        });
    }

    /// Pop the innermost element. An empty stack yields `None` instead of underflowing.
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Current nesting depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Innermost open element.
    #[must_use]
    pub fn current(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Element enclosing the innermost one.
    #[must_use]
    pub fn parent(&self) -> Option<&Frame> {
        self.frames.iter().rev().nth(1)
    }

    /// Mutable access to the element enclosing the innermost one.
    pub fn parent_mut(&mut self) -> Option<&mut Frame> {
        self.frames.iter_mut().rev().nth(1)
    }
}
