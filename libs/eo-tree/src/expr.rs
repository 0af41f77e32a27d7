//! Bindings and applications.

use crate::node::EoNode;

/// `expr > name`: binds the object `expr` renders to under `name`.
#[derive(Debug)]
pub struct BndExpr {
    expr: Box<dyn EoNode>,
    name: String,
}

impl BndExpr {
    pub fn new(expr: Box<dyn EoNode>, name: impl Into<String>) -> Self {
        Self {
            expr,
            name: name.into(),
        }
    }
}

impl EoNode for BndExpr {
    fn render(&self, indent: usize) -> String {
        format!("{} > {}", self.expr.render(indent), self.name)
    }
}

/// Application: the target, then one argument per line one level deeper.
///
/// ```text
/// target
///   arg1
///   arg2
/// ```
#[derive(Debug)]
pub struct CopyExpr {
    target: Box<dyn EoNode>,
    args: Vec<Box<dyn EoNode>>,
}

impl CopyExpr {
    pub fn new(target: Box<dyn EoNode>, args: Vec<Box<dyn EoNode>>) -> Self {
        Self { target, args }
    }

    pub fn args(&self) -> &[Box<dyn EoNode>] {
        &self.args
    }
}

impl EoNode for CopyExpr {
    fn render(&self, indent: usize) -> String {
        let mut out = self.target.render(indent);
        for arg in &self.args {
            out.push('\n');
            out.push_str(&arg.render(indent + 1));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dot::Dot;

    #[test]
    fn test_binding_zero_indent() {
        let bnd = BndExpr::new(Box::new(Dot::from("memory")), "bnd1");
        assert_eq!(bnd.render(0), "memory > bnd1");
    }

    #[test]
    fn test_binding_nonzero_indent() {
        let bnd = BndExpr::new(Box::new(Dot::from("memory")), "bnd1");
        assert_eq!(bnd.render(1), "  memory > bnd1");
    }

    #[test]
    fn test_copy_without_args_is_target() {
        let copy = CopyExpr::new(Box::new(Dot::from("a.b")), vec![]);
        assert_eq!(copy.render(1), "  a.b");
        assert!(copy.args().is_empty());
    }
}
