use super::action::Action;
use crate::Chips;
use crate::MAX_ABSTRACT_ACTIONS;

/// Fixed-capacity, ordered set of abstract actions produced for one node.
///
/// Lives on the stack and never allocates: it is built once per visited
/// node, potentially billions of times per training run. Overflowing it is
/// a deployment error of the chosen abstraction, so [`Actions::push`] panics
/// rather than truncating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actions {
    items: [Action; MAX_ABSTRACT_ACTIONS],
    len: usize,
}

impl Default for Actions {
    fn default() -> Self {
        Self {
            items: [Action::Fold; MAX_ABSTRACT_ACTIONS],
            len: 0,
        }
    }
}

impl Actions {
    pub fn push(&mut self, action: Action) {
        assert!(
            self.len < MAX_ABSTRACT_ACTIONS,
            "abstract action set overflow at {}: coarsen the action abstraction or raise MAX_ABSTRACT_ACTIONS",
            action
        );
        self.items[self.len] = action;
        self.len += 1;
    }
    /// Emitted raise sizes, in emission order.
    pub fn raises(&self) -> impl Iterator<Item = Chips> + '_ {
        self.iter().filter(|a| a.is_raise()).map(|a| a.size())
    }
}

impl std::ops::Deref for Actions {
    type Target = [Action];
    fn deref(&self) -> &Self::Target {
        &self.items[..self.len]
    }
}

impl<'a> IntoIterator for &'a Actions {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Actions> for Vec<Action> {
    fn from(actions: Actions) -> Self {
        actions.to_vec()
    }
}

impl std::fmt::Display for Actions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}
