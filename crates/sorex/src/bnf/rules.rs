//! The intermediate form a grammar text is parsed into before
//! compilation.

use compact_str::CompactString;
use hashbrown::HashMap;
use smallvec::{smallvec, SmallVec};

/// A single element within an alternative: either a literal string or
/// a reference to another rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Matches the contained text verbatim.
    Literal(CompactString),
    /// Matches whatever the named rule matches. Resolution is deferred
    /// until the compiled parser is first applied.
    Rule(CompactString),
}

/// One `|`-separated branch of a rule: a concatenation of terms.
pub type Alternative = SmallVec<[Term; 4]>;

/// The right hand side of a rule, in declaration order.
pub type Alternatives = SmallVec<[Alternative; 2]>;

/// All rules of a grammar, keyed by rule name.
///
/// Always contains the built-in [`EOL`](Self::EOL) rule, matching
/// `"\n"` or `"\r\n"`, in addition to the declared rules. A declared
/// rule named `EOL` is shadowed by the built-in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleMap {
    rules: HashMap<CompactString, Alternatives, ahash::RandomState>,
}

impl RuleMap {
    /// Name of the built-in line terminator rule.
    pub const EOL: &'static str = "EOL";

    /// Build a rule map from `(name, alternatives)` pairs and insert
    /// the built-in `EOL` rule. Later duplicates of a name replace
    /// earlier ones.
    pub fn from_rules(rules: impl IntoIterator<Item = (CompactString, Alternatives)>) -> Self {
        let mut map: HashMap<CompactString, Alternatives, ahash::RandomState> =
            HashMap::default();
        for (name, alternatives) in rules {
            map.insert(name, alternatives);
        }
        map.insert(Self::EOL.into(), Self::builtin_eol());
        Self { rules: map }
    }

    fn builtin_eol() -> Alternatives {
        let newline: Alternative = smallvec![Term::Literal("\n".into())];
        let carriage_newline: Alternative = smallvec![Term::Literal("\r\n".into())];
        smallvec![newline, carriage_newline]
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Alternatives> {
        self.rules.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of rules, the built-in `EOL` included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over `(name, alternatives)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Alternatives)> {
        self.rules.iter().map(|(name, alts)| (name.as_str(), alts))
    }
}
