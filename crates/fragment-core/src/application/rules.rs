//! Deferred tree transformations.
//!
//! Every generation step returns a [`Rule`]: either a no-op or a named
//! transform over the [`ProjectTree`]. Steps decide *whether* they act when
//! the rule is built; the tree is only touched when the composed rule is
//! applied.

use std::fmt;

use tracing::debug;

use crate::{domain::ProjectTree, error::FragmentResult};

type TransformFn = Box<dyn FnOnce(&mut ProjectTree) -> FragmentResult<()>>;

/// One unit of work against a project tree.
pub enum Rule {
    Noop,
    Transform { name: &'static str, apply: TransformFn },
}

impl Rule {
    pub fn transform(
        name: &'static str,
        apply: impl FnOnce(&mut ProjectTree) -> FragmentResult<()> + 'static,
    ) -> Self {
        Self::Transform {
            name,
            apply: Box::new(apply),
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Noop)
    }

    /// Run the rule. The first failing transform aborts the rest.
    pub fn apply(self, tree: &mut ProjectTree) -> FragmentResult<()> {
        match self {
            Self::Noop => Ok(()),
            Self::Transform { name, apply } => {
                debug!(rule = name, "Applying rule");
                apply(tree)
            }
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noop => f.write_str("Rule::Noop"),
            Self::Transform { name, .. } => write!(f, "Rule::Transform({name})"),
        }
    }
}

/// A rule that leaves the tree untouched.
pub fn noop() -> Rule {
    Rule::Noop
}

/// Compose rules left to right. No-ops are dropped; a chain of only
/// no-ops is itself a no-op.
pub fn chain(rules: impl IntoIterator<Item = Rule>) -> Rule {
    let rules: Vec<Rule> = rules.into_iter().filter(|r| !r.is_noop()).collect();
    if rules.is_empty() {
        return Rule::Noop;
    }

    Rule::transform("chain", move |tree| {
        for rule in rules {
            rule.apply(tree)?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{DomainError, RelativePath},
        error::FragmentError,
    };

    fn write(path: &'static str, content: &'static str) -> Rule {
        Rule::transform("write", move |tree| {
            tree.write(RelativePath::lenient(path), content);
            Ok(())
        })
    }

    #[test]
    fn chain_applies_in_order() {
        let mut tree = ProjectTree::new();
        chain([write("a.ts", "1"), noop(), write("a.ts", "2")])
            .apply(&mut tree)
            .unwrap();
        assert_eq!(tree.read(&RelativePath::lenient("a.ts")), Some("2"));
    }

    #[test]
    fn chain_of_noops_is_noop() {
        assert!(chain([noop(), noop()]).is_noop());
        assert!(chain(Vec::new()).is_noop());
    }

    #[test]
    fn failure_stops_the_chain() {
        let fail = Rule::transform("fail", |_| {
            Err(FragmentError::Domain(DomainError::MissingRequiredField { field: "x" }))
        });
        let mut tree = ProjectTree::new();
        let result = chain([fail, write("never.ts", "")]).apply(&mut tree);

        assert!(result.is_err());
        assert!(!tree.exists(&RelativePath::lenient("never.ts")));
    }
}
