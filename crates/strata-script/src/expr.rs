// Copyright 2025 the Strata Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The expression tree: atoms and pair cells.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A leaf value in an expression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Atom {
    /// A bare symbol.
    Symbol(String),
    /// A numeric literal.
    Number(f32),
    /// A quoted string literal.
    String(String),
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Symbol(sym) => write!(f, "{sym}"),
            Atom::Number(num) => write!(f, "{num}"),
            Atom::String(str) => write!(f, "\"{str}\""),
        }
    }
}

/// A pair cell holding two sub-expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cons {
    /// The first element of the pair.
    pub car: Expr,
    /// The second element of the pair.
    pub cdr: Expr,
}

/// An expression: either an atom or a pair of expressions.
///
/// The tree owns its children; dropping an `Expr` releases every node
/// below it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A leaf atom.
    Atom(Atom),
    /// A pair cell.
    Cons(Box<Cons>),
}

impl Expr {
    /// Creates a symbol atom expression.
    pub fn symbol(sym: impl Into<String>) -> Self {
        Expr::Atom(Atom::Symbol(sym.into()))
    }

    /// Creates a number atom expression.
    pub fn number(num: f32) -> Self {
        Expr::Atom(Atom::Number(num))
    }

    /// Creates a string atom expression.
    pub fn string(str: impl Into<String>) -> Self {
        Expr::Atom(Atom::String(str.into()))
    }

    /// Creates a pair cell expression.
    pub fn cons(car: Expr, cdr: Expr) -> Self {
        Expr::Cons(Box::new(Cons { car, cdr }))
    }

    /// Returns the atom if this expression is a leaf.
    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Expr::Atom(atom) => Some(atom),
            Expr::Cons(_) => None,
        }
    }

    /// Returns the pair cell if this expression is one.
    pub fn as_cons(&self) -> Option<&Cons> {
        match self {
            Expr::Atom(_) => None,
            Expr::Cons(cons) => Some(cons),
        }
    }
}

impl fmt::Display for Expr {
    /// Prints the dotted s-expression form: atoms bare, pairs as
    /// `(car . cdr)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(atom) => write!(f, "{atom}"),
            Expr::Cons(cons) => write!(f, "({} . {})", cons.car, cons.cdr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_display() {
        assert_eq!(Expr::symbol("nil").to_string(), "nil");
        assert_eq!(Expr::number(42.5).to_string(), "42.5");
        assert_eq!(Expr::string("hello").to_string(), "\"hello\"");
    }

    #[test]
    fn test_cons_display_nests() {
        let expr = Expr::cons(
            Expr::symbol("add"),
            Expr::cons(Expr::number(1.0), Expr::number(2.0)),
        );
        assert_eq!(expr.to_string(), "(add . (1 . 2))");
    }

    #[test]
    fn test_accessors() {
        let atom = Expr::symbol("x");
        assert!(atom.as_atom().is_some());
        assert!(atom.as_cons().is_none());

        let pair = Expr::cons(Expr::symbol("x"), Expr::number(3.0));
        let cons = pair.as_cons().unwrap();
        assert_eq!(cons.car, Expr::symbol("x"));
        assert_eq!(cons.cdr, Expr::number(3.0));
    }

    #[test]
    fn test_deep_tree_ownership() {
        // A long chain drops without manual cleanup.
        let mut expr = Expr::symbol("nil");
        for i in 0..1000 {
            expr = Expr::cons(Expr::number(i as f32), expr);
        }
        assert!(expr.as_cons().is_some());
    }

    #[test]
    fn test_serde_round_trip() {
        let expr = Expr::cons(Expr::string("name"), Expr::symbol("boxes"));
        let json = serde_json::to_string(&expr).unwrap();
        let back: Expr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expr);
    }
}
