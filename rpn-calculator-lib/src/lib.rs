//! Evaluation of arithmetic expressions in reverse polish notation.
//!
//! ```
//! use rpn_calculator::interpreter::evaluate;
//!
//! assert_eq!(evaluate("11 2 //").unwrap().to_string(), "5");
//! ```

pub mod interpreter;
