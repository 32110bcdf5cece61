use std::fmt::Display;

use super::error::CalcError;

pub type Value = i64;
pub type Name = String;

/////
///// Registers
/////

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Register {
    Literal(Value),
    Name(Name),
}

pub fn is_integer(input: &str) -> bool {
    input.parse::<Value>().is_ok()
}

pub fn is_alphanumeric(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_alphanumeric())
}

pub fn is_valid_register(input: &str) -> bool {
    is_integer(input) || is_alphanumeric(input)
}

impl Register {
    /// Integers win over names, so `42` is a literal while a run of digits
    /// too large for a `Value` is still accepted as a name.
    pub fn parse(input: &str) -> Result<Self, CalcError> {
        if let Ok(v) = input.parse::<Value>() {
            return Ok(Register::Literal(v));
        }
        if is_alphanumeric(input) {
            return Ok(Register::Name(input.to_owned()));
        }
        Err(CalcError::IllegalRegister(input.to_owned()))
    }

    /// The register a query refers to. Unlike [`Register::parse`] nothing is
    /// rejected: a word that is not an integer is read as a name, and a name
    /// no operation can target simply evaluates to 0.
    pub fn for_query(input: &str) -> Self {
        match input.parse::<Value>() {
            Ok(v) => Register::Literal(v),
            Err(_) => Register::Name(input.to_owned()),
        }
    }
}

impl Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Register::Literal(v) => write!(f, "{}", v),
            Register::Name(n) => write!(f, "{}", n),
        }
    }
}

/////
///// Operators
/////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    // Recorded as-is and skipped during evaluation.
    Unsupported(String),
}

impl Operator {
    /// Exact, case-sensitive match on the three operator words. Anything
    /// else is kept as `Unsupported`.
    pub fn parse(input: &str) -> Self {
        match input {
            "add" => Operator::Add,
            "subtract" => Operator::Subtract,
            "multiply" => Operator::Multiply,
            _ => Operator::Unsupported(input.to_owned()),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Operator::Unsupported(_))
    }

    /// Folds `rhs` into `acc`. An unsupported operator leaves `acc` as is.
    pub fn apply(&self, acc: Value, rhs: Value) -> Value {
        match self {
            Operator::Add => acc.wrapping_add(rhs),
            Operator::Subtract => acc.wrapping_sub(rhs),
            Operator::Multiply => acc.wrapping_mul(rhs),
            Operator::Unsupported(_) => acc,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Add => write!(f, "add"),
            Operator::Subtract => write!(f, "subtract"),
            Operator::Multiply => write!(f, "multiply"),
            Operator::Unsupported(op) => write!(f, "{}", op),
        }
    }
}

/////
///// Operations
/////

/// `source operator operand`, e.g. `a add b`.
///
/// Only built through [`Operation::new`], which rejects a literal source, so
/// every `Operation` in a log targets a named register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    source: Name,
    operator: Operator,
    operand: Register,
}

impl Operation {
    pub fn new(source: &str, operator: &str, operand: &str) -> Result<Self, CalcError> {
        let source = match Register::parse(source)? {
            Register::Name(n) => n,
            Register::Literal(v) => return Err(CalcError::LiteralSource(v)),
        };
        let operator = Operator::parse(operator);
        let operand = Register::parse(operand)?;
        Ok(Operation {
            source,
            operator,
            operand,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    pub fn operand(&self) -> &Register {
        &self.operand
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.source, self.operator, self.operand)
    }
}
