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

//! # Strata Script
//!
//! Expression trees for level and script data: symbolic, numeric, and
//! string atoms combined into pair cells, printed in dotted s-expression
//! form. Ownership of the tree flows through the type system, so dropping
//! an expression releases the whole tree.

#![warn(missing_docs)]

pub mod expr;

pub use expr::{Atom, Cons, Expr};
