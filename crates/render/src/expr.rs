//! Tiny shader-expression builder.
//!
//! Builds scalar/vector expressions as a tree, emits WGSL source for them, and
//! folds them to a value when every leaf is a literal.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Float(f32),
    /// A named WGSL value (local, parameter or struct field path).
    Var(String),
    Add(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Call(&'static str, Vec<Expr>),
}

pub fn float(v: f32) -> Expr {
    Expr::Float(v)
}

pub fn var(name: impl Into<String>) -> Expr {
    Expr::Var(name.into())
}

pub fn sqrt(x: Expr) -> Expr {
    Expr::Call("sqrt", vec![x])
}

pub fn normalize(x: Expr) -> Expr {
    Expr::Call("normalize", vec![x])
}

impl Expr {
    pub fn add(self, rhs: Expr) -> Expr {
        Expr::Add(Box::new(self), Box::new(rhs))
    }

    pub fn mul(self, rhs: Expr) -> Expr {
        Expr::Mul(Box::new(self), Box::new(rhs))
    }

    /// WGSL source text for this expression.
    pub fn to_wgsl(&self) -> String {
        self.to_string()
    }

    /// Constant-fold to a scalar. `None` if any leaf is a variable or a call is
    /// not scalar.
    pub fn eval(&self) -> Option<f32> {
        match self {
            Expr::Float(v) => Some(*v),
            Expr::Var(_) => None,
            Expr::Add(a, b) => Some(a.eval()? + b.eval()?),
            Expr::Mul(a, b) => Some(a.eval()? * b.eval()?),
            Expr::Call("sqrt", args) if args.len() == 1 => Some(args[0].eval()?.sqrt()),
            Expr::Call(..) => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `{:?}` keeps the decimal point WGSL needs for f32 literals.
            Expr::Float(v) => write!(f, "{v:?}"),
            Expr::Var(name) => f.write_str(name),
            Expr::Add(a, b) => write!(f, "({a} + {b})"),
            Expr::Mul(a, b) => write!(f, "({a} * {b})"),
            Expr::Call(name, args) => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_of_literal() {
        let e = sqrt(float(2.0));
        assert_eq!(e.to_wgsl(), "sqrt(2.0)");
        assert_eq!(e.eval(), Some(std::f32::consts::SQRT_2));
    }

    #[test]
    fn variables_do_not_fold() {
        let e = normalize(var("in.normal")).mul(float(0.5)).add(float(0.5));
        assert_eq!(e.to_wgsl(), "((normalize(in.normal) * 0.5) + 0.5)");
        assert_eq!(e.eval(), None);
    }

    #[test]
    fn arithmetic_folds() {
        let e = float(3.0).mul(float(4.0)).add(sqrt(float(9.0)));
        assert_eq!(e.eval(), Some(15.0));
    }
}
