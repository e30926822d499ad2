use serde::{Deserialize, Serialize};

/// Completions judged to share one answer, in input order.
///
/// `completions` and `indices` are parallel: `indices[i]` is the position of
/// `completions[i]` in the original input slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerGroup {
    /// Canonical answer: the first extracted answer that opened this group.
    pub answer: String,
    pub completions: Vec<String>,
    pub indices: Vec<usize>,
}

impl AnswerGroup {
    /// Open a group with its first member.
    pub fn new(answer: impl Into<String>, completion: impl Into<String>, index: usize) -> Self {
        Self {
            answer: answer.into(),
            completions: vec![completion.into()],
            indices: vec![index],
        }
    }

    /// Append a member, keeping input order.
    pub fn push(&mut self, completion: impl Into<String>, index: usize) {
        self.completions.push(completion.into());
        self.indices.push(index);
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// First completion added to the group and its original index.
    pub fn representative(&self) -> Option<(&str, usize)> {
        match (self.completions.first(), self.indices.first()) {
            (Some(c), Some(&i)) => Some((c.as_str(), i)),
            _ => None,
        }
    }

    /// Iterate `(original_index, completion)` pairs in input order.
    pub fn members(&self) -> impl Iterator<Item = (usize, &str)> {
        self.indices
            .iter()
            .copied()
            .zip(self.completions.iter().map(String::as_str))
    }
}

/// Output of the grouper: groups in creation order plus the skipped inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grouping {
    pub groups: Vec<AnswerGroup>,
    /// Original indices of completions that failed extraction.
    pub skipped: Vec<usize>,
    /// Number of completions fed to the grouper.
    pub total: usize,
}

impl Grouping {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of completions that landed in a group.
    pub fn grouped(&self) -> usize {
        self.groups.iter().map(AnswerGroup::len).sum()
    }

    /// Group containing the completion at `index`, if any.
    pub fn group_of(&self, index: usize) -> Option<&AnswerGroup> {
        self.groups.iter().find(|g| g.indices.contains(&index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_members_parallel() {
        let mut group = AnswerGroup::new("4", "the answer is 4", 0);
        group.push("the answer is 4.0", 3);
        assert_eq!(group.len(), 2);
        assert_eq!(group.representative(), Some(("the answer is 4", 0)));
        let members: Vec<_> = group.members().collect();
        assert_eq!(members, vec![(0, "the answer is 4"), (3, "the answer is 4.0")]);
    }

    #[test]
    fn grouping_locates_member_group() {
        let grouping = Grouping {
            groups: vec![AnswerGroup::new("4", "a", 0), AnswerGroup::new("5", "b", 1)],
            skipped: vec![2],
            total: 3,
        };
        assert_eq!(grouping.grouped(), 2);
        assert_eq!(grouping.group_of(1).map(|g| g.answer.as_str()), Some("5"));
        assert!(grouping.group_of(2).is_none());
    }
}
