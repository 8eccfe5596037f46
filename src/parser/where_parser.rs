use crate::parser::{AND, ComparatorOp, Keyword, OR, ParseError};
use crate::query::{Params, coerce_str};

/// One comparison plus the logical operator binding it to the *next* one.
/// Slots fill left to right as data tokens arrive; a filled joiner means the
/// triplet is complete and the accumulator starts over.
#[derive(Debug, Default)]
struct ComparisonTriplet {
    left: String,
    operator: String,
    right: String,
    joiner: String,
}

impl ComparisonTriplet {
    fn is_started(&self) -> bool {
        !self.left.is_empty()
    }

    /// Returns true once the joiner slot is taken and the triplet must be
    /// emitted.
    fn push(&mut self, token: &str) -> bool {
        if self.left.is_empty() {
            self.left = token.to_string();
            false
        } else if self.operator.is_empty() {
            self.operator = token.to_string();
            false
        } else if self.right.is_empty() {
            self.right = token.to_string();
            false
        } else {
            self.joiner = token.to_string();
            true
        }
    }

    /// Renders `"{left} {canonical_op} {right} "` plus, when present, the
    /// lower-cased `"{joiner} "`.
    fn build(&self) -> Result<String, ParseError> {
        if self.left.is_empty() || self.operator.is_empty() || self.right.is_empty() {
            return ParseError::IncompleteComparison(self.shape()).err();
        }

        let Some(op) = ComparatorOp::from_symbol(&self.operator) else {
            return ParseError::UnknownOperator(self.shape()).err();
        };

        let mut part = format!("{} {} {} ", self.left, op, self.right);

        if !self.joiner.is_empty() {
            let joiner = self.joiner.to_ascii_lowercase();
            if joiner != AND && joiner != OR {
                return ParseError::UnknownLogicalOperator(self.joiner.clone()).err();
            }
            part.push_str(&joiner);
            part.push(' ');
        }

        Ok(part)
    }

    fn shape(&self) -> String {
        format!("{} {} {}", self.left, self.operator, self.right)
    }
}

/// Builds the `$filter` string from the tokens after `where` and substitutes
/// the caller's named parameters into it.
pub fn get_where(sub_tokens: &[&str], params: &Params) -> Result<String, ParseError> {
    let mut filter = String::new();
    let mut triplet = ComparisonTriplet::default();

    for &token in sub_tokens {
        if Keyword::classify(token).is_some() {
            break;
        }
        if triplet.push(token) {
            filter.push_str(&triplet.build()?);
            triplet = ComparisonTriplet::default();
        }
    }

    if triplet.is_started() {
        filter.push_str(&triplet.build()?);
    }

    if filter.is_empty() {
        return ParseError::EmptyWhereClause.err();
    }

    substitute(filter, params)
}

/// Every supplied binding must hit at least one `:Name` placeholder;
/// placeholders without a binding are forwarded untouched, resolving them is
/// the service's concern.
fn substitute(mut filter: String, params: &Params) -> Result<String, ParseError> {
    for (name, value) in params.iter() {
        let placeholder = format!(":{name}");
        if !filter.contains(&placeholder) {
            return ParseError::UnboundParameterNotFound(name.clone()).err();
        }
        filter = filter.replace(&placeholder, &coerce_str(value));
    }
    Ok(filter)
}
