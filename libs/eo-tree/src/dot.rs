//! Dot-chain names: `a.b.c`.

use crate::node::{indentation, EoNode};
use j2eo_ast::DottedName;
use std::fmt;

/// `src.name`, or a bare `name` when there is no source.
#[derive(Debug)]
pub struct Dot {
    src: Option<Box<dyn EoNode>>,
    name: String,
}

impl Dot {
    /// Bare name without a source.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            src: None,
            name: name.into(),
        }
    }

    /// `name` applied to the object `src` renders to.
    pub fn with_src(src: Box<dyn EoNode>, name: impl Into<String>) -> Self {
        Self {
            src: Some(src),
            name: name.into(),
        }
    }

    /// Builds the chain `a.b.c` from its segments; `None` when empty.
    pub fn chain<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(None, |src, name| {
            Some(match src {
                Some(src) => Dot::with_src(Box::new(src), name),
                None => Dot::name(name),
            })
        })
    }

    pub fn src(&self) -> Option<&dyn EoNode> {
        self.src.as_deref()
    }

    pub fn last_name(&self) -> &str {
        &self.name
    }
}

impl EoNode for Dot {
    fn render(&self, indent: usize) -> String {
        let Some(src) = &self.src else {
            return format!("{}{}", indentation(indent), self.name);
        };
        let rendered = src.render(indent);
        match rendered.split_once('\n') {
            Some((first, rest)) => format!("{first}.{}\n{rest}", self.name),
            None => format!("{rendered}.{}", self.name),
        }
    }
}

/// Splits on `.`; `Dot::from("a.b")` is the chain `a` then `b`.
impl From<&str> for Dot {
    fn from(name: &str) -> Self {
        Dot::chain(name.split('.')).unwrap_or_else(|| Dot::name(name))
    }
}

impl From<&DottedName> for Dot {
    fn from(name: &DottedName) -> Self {
        // DottedName is never empty.
        Dot::chain(name.names().iter().cloned()).unwrap_or_else(|| Dot::name(name.first()))
    }
}

impl fmt::Display for Dot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}
