use super::color::Color;

/// The blueprint for an item type
///
/// This defines the immutable properties shared by every stack of the
/// item. Slots borrow definitions from the `ItemRegistry`, they never
/// own or modify them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDefinition {
    id: String,
    name: String,
    color: Color,
    stackable: bool,
    max_stack: u32,
}

impl ItemDefinition {
    /// Creates a new item definition
    ///
    /// `max_stack` is forced to 1 for non-stackable items and raised to
    /// at least 1 otherwise, so `max_stack() >= 1` always holds.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: Color,
        stackable: bool,
        max_stack: u32,
    ) -> Self {
        ItemDefinition {
            id: id.into(),
            name: name.into(),
            color,
            stackable,
            max_stack: if stackable { max_stack.max(1) } else { 1 },
        }
    }

    /// Unique identifier (used for lookups and stack matching)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name shown in UI
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_stackable(&self) -> bool {
        self.stackable
    }

    /// Maximum quantity a single slot may hold
    pub fn max_stack(&self) -> u32 {
        self.max_stack
    }

    /// Returns true if stacks of this item can merge with stacks of `other`
    pub fn can_stack_with(&self, other: &ItemDefinition) -> bool {
        self.id == other.id && self.stackable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_stackable_forces_single() {
        let sword = ItemDefinition::new("sword", "Sword", Color::WHITE, false, 64);
        assert_eq!(sword.max_stack(), 1);
        assert!(!sword.can_stack_with(&sword.clone()));
    }

    #[test]
    fn test_stackable_max_stack_is_at_least_one() {
        let dust = ItemDefinition::new("dust", "Dust", Color::WHITE, true, 0);
        assert_eq!(dust.max_stack(), 1);
        assert!(dust.can_stack_with(&dust.clone()));
    }

    #[test]
    fn test_stacking_requires_same_id() {
        let apple = ItemDefinition::new("apple", "Apple", Color::WHITE, true, 3);
        let pear = ItemDefinition::new("pear", "Pear", Color::WHITE, true, 3);
        assert!(!apple.can_stack_with(&pear));
    }
}
