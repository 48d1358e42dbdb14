#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    BitOr,
    BitAnd,

    Mul,
    Div,
    IntDiv,
    Pow,
    Rem,
    Shr,
    UShr,
    Shl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Assoc {
    Left,
}

pub(crate) type Precedence = u8;

pub(crate) const ADDITIVE: Precedence = 10;
pub(crate) const MULTIPLICATIVE: Precedence = 20;

impl Operator {
    /// Every operator, ordered so that no symbol comes after a symbol that is
    /// a prefix of it.
    pub(crate) const LONGEST_FIRST: [Operator; 12] = [
        Self::UShr,
        Self::Shr,
        Self::Shl,
        Self::Pow,
        Self::Mul,
        Self::Div,
        Self::IntDiv,
        Self::Rem,
        Self::Plus,
        Self::Minus,
        Self::BitOr,
        Self::BitAnd,
    ];

    /// Surface symbol, which is also the binding key in an environment.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::BitOr => "|",
            Self::BitAnd => "&",
            Self::Mul => "*",
            Self::Div => "/",
            Self::IntDiv => "÷",
            Self::Pow => "**",
            Self::Rem => "%",
            Self::Shr => ">>",
            Self::UShr => ">>>",
            Self::Shl => "<<",
        }
    }

    pub(crate) fn precedence(self) -> Precedence {
        match self {
            Self::Plus | Self::Minus | Self::BitOr | Self::BitAnd => ADDITIVE,
            Self::Mul
            | Self::Div
            | Self::IntDiv
            | Self::Pow
            | Self::Rem
            | Self::Shr
            | Self::UShr
            | Self::Shl => MULTIPLICATIVE,
        }
    }

    pub(crate) fn assoc(self) -> Assoc {
        Assoc::Left
    }

    pub(crate) fn get(self) -> (Precedence, Assoc) {
        (self.precedence(), self.assoc())
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
