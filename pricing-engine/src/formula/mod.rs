//! Part Dimension Formulas
//!
//! Cabinet parts size themselves with short arithmetic formulas over the
//! cabinet's `width`, `height` and `depth` (millimeters), e.g. `width - 36`
//! or `(height - 100) / 2`. Formulas are parsed by a closed arithmetic
//! grammar and evaluated in `Decimal`; nothing in a formula can do anything
//! but arithmetic.
//!
//! ```
//! use pricing_engine::formula::{Formula, FormulaVars};
//! use rust_decimal::Decimal;
//!
//! let vars = FormulaVars::new(Decimal::from(600), Decimal::from(720), Decimal::from(560));
//! let formula = Formula::parse("(width - 36) / 2").unwrap();
//! assert_eq!(formula.eval(&vars).unwrap(), Decimal::from(282));
//! ```

mod lexer;
mod parser;

use lexer::Variable;
use parser::{BinaryOp, Expr};
use rust_decimal::Decimal;
use shared::error::ErrorCode;
use shared::quote::Dimensions;
use thiserror::Error;

use crate::money::to_decimal;

/// Longest formula accepted, in bytes
pub const MAX_FORMULA_LEN: usize = 256;

/// Longest part a formula may resolve to (100 m)
pub const MAX_PART_LENGTH_MM: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error("formula is empty")]
    Empty,
    #[error("formula longer than {0} bytes")]
    TooLong(usize),
    #[error("character '{ch}' at position {position} is not allowed")]
    DisallowedCharacter { ch: char, position: usize },
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("unexpected token {0}")]
    UnexpectedToken(String),
    #[error("unexpected end of formula")]
    UnexpectedEnd,
    #[error("formula nested deeper than {0} levels")]
    TooDeep(usize),
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow")]
    Overflow,
    #[error("formula evaluated to a negative length ({0})")]
    NegativeResult(Decimal),
    #[error("formula evaluated to {0} mm, longer than 100000 mm")]
    LengthOutOfRange(Decimal),
}

impl FormulaError {
    pub fn code(&self) -> ErrorCode {
        match self {
            FormulaError::DisallowedCharacter { .. } | FormulaError::UnknownIdentifier(_) => {
                ErrorCode::FormulaDisallowedToken
            }
            FormulaError::DivisionByZero => ErrorCode::FormulaDivisionByZero,
            FormulaError::NegativeResult(_) => ErrorCode::FormulaNegativeResult,
            _ => ErrorCode::FormulaInvalid,
        }
    }
}

/// Values bound to the formula variables (millimeters)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaVars {
    pub width: Decimal,
    pub height: Decimal,
    pub depth: Decimal,
}

impl FormulaVars {
    pub fn new(width: Decimal, height: Decimal, depth: Decimal) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    fn get(&self, var: Variable) -> Decimal {
        match var {
            Variable::Width => self.width,
            Variable::Height => self.height,
            Variable::Depth => self.depth,
        }
    }
}

impl From<&Dimensions> for FormulaVars {
    fn from(dims: &Dimensions) -> Self {
        Self::new(
            to_decimal(dims.width_mm),
            to_decimal(dims.height_mm),
            to_decimal(dims.depth_mm),
        )
    }
}

/// A parsed, validated formula
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    source: String,
    expr: Expr,
}

impl Formula {
    pub fn parse(source: &str) -> Result<Self, FormulaError> {
        if source.len() > MAX_FORMULA_LEN {
            return Err(FormulaError::TooLong(MAX_FORMULA_LEN));
        }
        let tokens = lexer::tokenize(source)?;
        let expr = parser::parse(&tokens)?;
        Ok(Self {
            source: source.to_string(),
            expr,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate to a length in millimeters
    ///
    /// A negative result is not a length and is rejected, as is anything
    /// beyond [`MAX_PART_LENGTH_MM`].
    pub fn eval(&self, vars: &FormulaVars) -> Result<Decimal, FormulaError> {
        let value = eval_expr(&self.expr, vars)?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(FormulaError::NegativeResult(value));
        }
        if value > MAX_PART_LENGTH_MM {
            return Err(FormulaError::LengthOutOfRange(value));
        }
        Ok(value)
    }
}

/// Parse and evaluate in one step; a missing or blank formula is 0
pub fn evaluate(source: Option<&str>, vars: &FormulaVars) -> Result<Decimal, FormulaError> {
    match source.map(str::trim) {
        None | Some("") => Ok(Decimal::ZERO),
        Some(source) => Formula::parse(source)?.eval(vars),
    }
}

fn eval_expr(expr: &Expr, vars: &FormulaVars) -> Result<Decimal, FormulaError> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Var(var) => Ok(vars.get(*var)),
        Expr::Neg(inner) => Ok(-eval_expr(inner, vars)?),
        Expr::Binary(op, lhs, rhs) => {
            let lhs = eval_expr(lhs, vars)?;
            let rhs = eval_expr(rhs, vars)?;
            match op {
                BinaryOp::Add => lhs.checked_add(rhs).ok_or(FormulaError::Overflow),
                BinaryOp::Sub => lhs.checked_sub(rhs).ok_or(FormulaError::Overflow),
                BinaryOp::Mul => lhs.checked_mul(rhs).ok_or(FormulaError::Overflow),
                BinaryOp::Div => {
                    if rhs.is_zero() {
                        return Err(FormulaError::DivisionByZero);
                    }
                    lhs.checked_div(rhs).ok_or(FormulaError::Overflow)
                }
            }
        }
    }
}
