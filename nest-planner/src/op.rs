//! The fixed set of infix operators and the priority tiers they are split by.

/// An infix operator recognized by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Greater,
    Less,
    Eq,
    And,
    Or,
}

impl Operator {
    /// Returns the operator represented by the given byte, if any.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(Self::Add),
            b'-' => Some(Self::Sub),
            b'>' => Some(Self::Greater),
            b'<' => Some(Self::Less),
            b'=' => Some(Self::Eq),
            b'&' => Some(Self::And),
            b'|' => Some(Self::Or),
            _ => None,
        }
    }

    /// Returns the symbol of the operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Greater => '>',
            Self::Less => '<',
            Self::Eq => '=',
            Self::And => '&',
            Self::Or => '|',
        }
    }

    /// Returns the priority tier of the operator.
    pub fn tier(self) -> Tier {
        match self {
            Self::Add | Self::Sub | Self::Greater | Self::Less | Self::Eq => Tier::Primary,
            Self::And => Tier::Conjunction,
            Self::Or => Tier::Disjunction,
        }
    }
}

/// A priority tier of operators. Operators in an earlier tier are split out, and therefore
/// evaluated, before operators in a later tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// `+`, `-`, `>`, `<`, `=`
    Primary,

    /// `&`
    Conjunction,

    /// `|`
    Disjunction,
}

impl Tier {
    /// All tiers, in the order operations are split.
    pub const ORDERED: [Tier; 3] = [Tier::Primary, Tier::Conjunction, Tier::Disjunction];
}

/// Returns true if the byte is an operator of any tier.
pub fn is_operator(byte: u8) -> bool {
    Operator::from_byte(byte).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_map_back() {
        for op in [
            Operator::Add,
            Operator::Sub,
            Operator::Greater,
            Operator::Less,
            Operator::Eq,
            Operator::And,
            Operator::Or,
        ] {
            assert_eq!(Operator::from_byte(op.symbol() as u8), Some(op));
        }
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(Tier::ORDERED.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(Operator::Eq.tier(), Tier::Primary);
        assert_eq!(Operator::And.tier(), Tier::Conjunction);
        assert_eq!(Operator::Or.tier(), Tier::Disjunction);
    }

    #[test]
    fn non_operators() {
        assert!(!is_operator(b'@'));
        assert!(!is_operator(b'('));
        assert!(!is_operator(b'!'));
    }
}
