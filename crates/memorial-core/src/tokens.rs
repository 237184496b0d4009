//! Class token families and the exclusive-token helper.
//!
//! Every enumerated designer control maps its value to exactly one class
//! token of a family (`shape-oval`, `color-rose-red`, ...). Applying a new
//! value sweeps the whole family off the node and adds the selected token,
//! so a node never carries two tokens of the same family.

use serde::{Serialize, Serializer};

use crate::dom::Node;

/// A closed enumeration with a stable string key per variant.
pub trait Keyed: Copy + Sized + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Key used in control values (`"granite-gray"`, `"oval"`, ...).
    fn key(self) -> &'static str;

    /// Human readable label for select options.
    fn label(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.key() == key)
    }
}

/// A [`Keyed`] enumeration rendered as a prefixed class token.
pub trait TokenFamily: Keyed {
    /// Prefix shared by every token of the family (`"shape-"`).
    const PREFIX: &'static str;

    fn token(self) -> String {
        format!("{}{}", Self::PREFIX, self.key())
    }

    /// The closed list of tokens of this family.
    fn closed_tokens() -> Vec<String> {
        Self::ALL.iter().map(|v| v.token()).collect()
    }
}

/// A control value: either a known variant or whatever string the control held.
///
/// Unrecognized values are kept rather than rejected; they still produce a
/// family token, which simply matches no stylesheet rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: Keyed> Choice<T> {
    pub fn parse(value: &str) -> Self {
        match T::from_key(value) {
            Some(v) => Choice::Known(v),
            None => Choice::Unrecognized(value.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Choice::Known(v) => v.key(),
            Choice::Unrecognized(raw) => raw,
        }
    }

    pub fn known(&self) -> Option<T> {
        match self {
            Choice::Known(v) => Some(*v),
            Choice::Unrecognized(_) => None,
        }
    }
}

impl<T: TokenFamily> Choice<T> {
    pub fn token(&self) -> String {
        format!("{}{}", T::PREFIX, self.key())
    }
}

impl<T: Keyed> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Whether `token` belongs to family `T` on `node`.
///
/// Tokens from the closed list always do. Other tokens carrying the family
/// prefix do too (left over from an unrecognized value), unless the node
/// was created with them.
fn is_family_token<T: TokenFamily>(node: &Node, token: &str, closed: &[String]) -> bool {
    if closed.iter().any(|t| t == token) {
        return true;
    }
    token.starts_with(T::PREFIX) && !node.is_base_class(token)
}

/// Remove every token of family `T` from `node`, then add the token for `choice`.
pub fn apply_exclusive<T: TokenFamily>(node: &mut Node, choice: &Choice<T>) {
    let closed = T::closed_tokens();
    let stale: Vec<String> = node
        .classes
        .iter()
        .filter(|t| is_family_token::<T>(node, t, &closed))
        .map(str::to_string)
        .collect();
    for token in &stale {
        node.classes.remove(token);
    }
    node.classes.add(&choice.token());
}

/// Count the tokens of family `T` on `node`.
pub fn family_count<T: TokenFamily>(node: &Node) -> usize {
    let closed = T::closed_tokens();
    node.classes
        .iter()
        .filter(|t| is_family_token::<T>(node, t, &closed))
        .count()
}
