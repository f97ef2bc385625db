// Bounded conversation history
//
// A small stateful container for role-tagged messages with an explicit
// eviction policy. Both loop stages keep their own instance so the context
// sent to the model stays bounded no matter how many steps run.

use crate::error::{Error, Result};
use crate::providers::types::Message;

/// What to evict when a bounded history is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionPolicy {
    /// Evict the message at position 0 (plain FIFO).
    EvictOldest,
    /// Evict the message at position 1, keeping the first message (normally
    /// the system instruction) in place for the lifetime of the history.
    EvictOldestAfterFirst,
}

/// Ordered message sequence with an optional capacity limit.
///
/// Invariant: `len() <= capacity` after every mutation when bounded. A
/// capacity of `None` disables eviction entirely.
#[derive(Debug, Clone)]
pub struct BoundedHistory {
    messages: Vec<Message>,
    capacity: Option<usize>,
    policy: EvictionPolicy,
}

impl BoundedHistory {
    /// Create an empty history.
    ///
    /// Fails fast when the capacity cannot support the policy: a bounded
    /// capacity must be at least 1, and `EvictOldestAfterFirst` needs at
    /// least 2 slots so the protected first message is never the eviction
    /// target.
    pub fn new(policy: EvictionPolicy, capacity: Option<usize>) -> Result<Self> {
        if let Some(cap) = capacity {
            if cap == 0 {
                return Err(Error::Precondition(
                    "history capacity must be at least 1".to_string(),
                ));
            }
            if policy == EvictionPolicy::EvictOldestAfterFirst && cap < 2 {
                return Err(Error::Precondition(format!(
                    "a history that protects its first message needs capacity >= 2, got {cap}"
                )));
            }
        }

        Ok(Self {
            messages: Vec::new(),
            capacity,
            policy,
        })
    }

    /// Create a history pre-seeded with `messages`.
    pub fn seeded(
        policy: EvictionPolicy,
        capacity: Option<usize>,
        messages: Vec<Message>,
    ) -> Result<Self> {
        let mut history = Self::new(policy, capacity)?;
        if let Some(cap) = capacity {
            if messages.len() > cap {
                return Err(Error::Precondition(format!(
                    "seed of {} messages exceeds capacity {cap}",
                    messages.len()
                )));
            }
        }
        history.messages = messages;
        Ok(history)
    }

    /// Append a message, evicting per the policy only when full.
    pub fn push(&mut self, message: Message) {
        if let Some(cap) = self.capacity {
            if self.messages.len() == cap {
                let evict_at = match self.policy {
                    EvictionPolicy::EvictOldest => 0,
                    // Capacity >= 2 is enforced at construction, so index 1
                    // exists whenever the history is full.
                    EvictionPolicy::EvictOldestAfterFirst => 1,
                };
                self.messages.remove(evict_at);
            }
        }
        self.messages.push(message);
    }

    /// Ordered view of the history, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::types::Role;

    fn user(n: usize) -> Message {
        Message::user(format!("turn {n}"))
    }

    #[test]
    fn test_push_below_capacity_never_evicts() {
        let mut history =
            BoundedHistory::new(EvictionPolicy::EvictOldest, Some(3)).unwrap();
        history.push(user(1));
        history.push(user(2));
        assert_eq!(history.len(), 2);
        assert_eq!(history.messages()[0].content, "turn 1");
    }

    #[test]
    fn test_plain_eviction_drops_oldest() {
        let mut history =
            BoundedHistory::new(EvictionPolicy::EvictOldest, Some(2)).unwrap();
        history.push(user(1));
        history.push(user(2));
        history.push(user(3));
        assert_eq!(history.len(), 2);
        assert_eq!(history.messages()[0].content, "turn 2");
        assert_eq!(history.messages()[1].content, "turn 3");
    }

    #[test]
    fn test_fixed_first_eviction_protects_first_message() {
        let mut history = BoundedHistory::seeded(
            EvictionPolicy::EvictOldestAfterFirst,
            Some(3),
            vec![Message::system("instructions")],
        )
        .unwrap();

        for n in 1..=10 {
            history.push(user(n));
            assert!(history.len() <= 3);
            assert_eq!(history.messages()[0].role, Role::System);
            assert_eq!(history.messages()[0].content, "instructions");
        }

        // Only the two most recent turns survive next to the system message.
        assert_eq!(history.messages()[1].content, "turn 9");
        assert_eq!(history.messages()[2].content, "turn 10");
    }

    #[test]
    fn test_capacity_invariant_holds_across_many_pushes() {
        let mut history =
            BoundedHistory::new(EvictionPolicy::EvictOldest, Some(5)).unwrap();
        for n in 0..100 {
            history.push(user(n));
            assert!(history.len() <= 5);
        }
    }

    #[test]
    fn test_unbounded_history_never_evicts() {
        let mut history = BoundedHistory::new(EvictionPolicy::EvictOldest, None).unwrap();
        for n in 0..50 {
            history.push(user(n));
        }
        assert_eq!(history.len(), 50);
        assert_eq!(history.messages()[0].content, "turn 0");
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut history =
            BoundedHistory::new(EvictionPolicy::EvictOldestAfterFirst, Some(4)).unwrap();
        history.push(Message::system("s"));
        history.push(user(1));
        history.push(user(2));
        let contents: Vec<&str> = history
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["s", "turn 1", "turn 2"]);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let result = BoundedHistory::new(EvictionPolicy::EvictOldest, Some(0));
        assert!(matches!(result, Err(crate::Error::Precondition(_))));
    }

    #[test]
    fn test_fixed_first_requires_capacity_two() {
        let result = BoundedHistory::new(EvictionPolicy::EvictOldestAfterFirst, Some(1));
        assert!(matches!(result, Err(crate::Error::Precondition(_))));
    }

    #[test]
    fn test_seed_larger_than_capacity_is_rejected() {
        let result = BoundedHistory::seeded(
            EvictionPolicy::EvictOldest,
            Some(1),
            vec![user(1), user(2)],
        );
        assert!(matches!(result, Err(crate::Error::Precondition(_))));
    }
}
