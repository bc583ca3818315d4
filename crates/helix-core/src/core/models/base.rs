use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A nucleotide base occupying one strand position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
    A,
    T,
    G,
    C,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Invalid base symbol '{0}'")]
pub struct ParseBaseError(pub char);

impl Base {
    pub const ALL: [Base; 4] = [Base::A, Base::T, Base::G, Base::C];

    /// Returns the Watson-Crick partner of this base.
    pub fn complement(self) -> Base {
        match self {
            Base::A => Base::T,
            Base::T => Base::A,
            Base::G => Base::C,
            Base::C => Base::G,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Base::A => 'A',
            Base::T => 'T',
            Base::G => 'G',
            Base::C => 'C',
        }
    }
}

impl TryFrom<char> for Base {
    type Error = ParseBaseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'T' => Ok(Base::T),
            'G' => Ok(Base::G),
            'C' => Ok(Base::C),
            _ => Err(ParseBaseError(c)),
        }
    }
}

impl FromStr for Base {
    type Err = ParseBaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Base::try_from(c),
            (Some(c), Some(_)) => Err(ParseBaseError(c)),
            (None, _) => Err(ParseBaseError(' ')),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement_pairs_adenine_with_thymine_and_guanine_with_cytosine() {
        assert_eq!(Base::A.complement(), Base::T);
        assert_eq!(Base::T.complement(), Base::A);
        assert_eq!(Base::G.complement(), Base::C);
        assert_eq!(Base::C.complement(), Base::G);
    }

    #[test]
    fn complement_is_involutive() {
        for base in Base::ALL {
            assert_eq!(base.complement().complement(), base);
        }
    }

    #[test]
    fn complement_never_maps_a_base_to_itself() {
        for base in Base::ALL {
            assert_ne!(base.complement(), base);
        }
    }

    #[test]
    fn try_from_char_accepts_lowercase_symbols() {
        assert_eq!(Base::try_from('g'), Ok(Base::G));
        assert_eq!(Base::try_from('C'), Ok(Base::C));
    }

    #[test]
    fn try_from_char_rejects_unknown_symbols() {
        assert_eq!(Base::try_from('X'), Err(ParseBaseError('X')));
        assert_eq!(Base::try_from('U'), Err(ParseBaseError('U')));
        assert_eq!(Base::try_from('-'), Err(ParseBaseError('-')));
    }

    #[test]
    fn from_str_requires_exactly_one_symbol() {
        assert_eq!("t".parse::<Base>(), Ok(Base::T));
        assert!("AT".parse::<Base>().is_err());
        assert!("".parse::<Base>().is_err());
    }

    #[test]
    fn display_writes_the_uppercase_symbol() {
        assert_eq!(Base::A.to_string(), "A");
        assert_eq!(Base::C.to_string(), "C");
    }
}
