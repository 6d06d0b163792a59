#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

/// How an operator token is matched against a table symbol.
#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub enum MatchMode {
    /// token must be exactly the symbol
    #[default]
    Exact,
    /// token only has to contain the symbol somewhere, eg: "x+y" is addition
    Contains,
}

// lookup order matters for Contains: first hit wins
static OPERATORS: [(&str, Operator); 4] = [
    ("+", Operator::Add),
    ("-", Operator::Sub),
    ("*", Operator::Mul),
    ("/", Operator::Div),
];

impl Operator {
    pub fn lookup(token: &str, mode: MatchMode) -> Option<Operator> {
        OPERATORS
            .iter()
            .find(|(sym, _)| match mode {
                MatchMode::Exact => token == *sym,
                MatchMode::Contains => token.contains(sym),
            })
            .map(|&(_, op)| op)
    }

    pub fn symbol(&self) -> &'static str {
        match *self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    pub fn arity(&self) -> usize {
        2
    }

    /// Operands come in pop order: args[0] was on top of the stack, so it's
    /// the right hand side. Division by zero yields inf/NaN as per IEEE 754.
    pub fn apply(&self, args: [f64; 2]) -> f64 {
        let [r, l] = args;
        match *self {
            Operator::Add => r + l,
            Operator::Sub => l - r,
            Operator::Mul => r * l,
            Operator::Div => l / r,
        }
    }
}
