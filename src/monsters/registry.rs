use std::collections::HashMap;

use super::types::MonsterDefinition;
use crate::core::ConfigError;

/// Immutable monster table, looked up by exact id.
#[derive(Debug, Clone, Default)]
pub struct MonsterRegistry {
    monsters: Vec<MonsterDefinition>,
    index: HashMap<String, usize>,
}

impl MonsterRegistry {
    /// Builds the registry, rejecting empty and duplicate ids.
    pub fn new(monsters: Vec<MonsterDefinition>) -> Result<Self, ConfigError> {
        let mut index = HashMap::with_capacity(monsters.len());
        for (i, monster) in monsters.iter().enumerate() {
            if monster.id.is_empty() {
                return Err(ConfigError::EmptyMonsterId);
            }
            if index.insert(monster.id.clone(), i).is_some() {
                return Err(ConfigError::DuplicateMonster(monster.id.clone()));
            }
        }
        Ok(Self { monsters, index })
    }

    pub fn get(&self, id: &str) -> Option<&MonsterDefinition> {
        self.index.get(id).map(|&i| &self.monsters[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Monsters in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &MonsterDefinition> {
        self.monsters.iter()
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monsters::{builtin_monsters, Wave};

    fn monster(id: &str) -> MonsterDefinition {
        MonsterDefinition {
            id: id.to_string(),
            name: id.to_string(),
            waves: vec![Wave::new("Grunts", 10.0, 1.0, 1)],
            rewards: Default::default(),
            max_rewarded_wins: 1,
            xp_reward: 0,
            requires: vec![],
        }
    }

    #[test]
    fn test_lookup_by_exact_id() {
        let registry = MonsterRegistry::new(vec![monster("wolves"), monster("bandits")]).unwrap();
        assert!(registry.contains("wolves"));
        assert_eq!(registry.get("bandits").unwrap().id, "bandits");
        assert!(registry.get("Wolves").is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_iter_keeps_definition_order() {
        let registry = MonsterRegistry::new(vec![monster("b"), monster("a")]).unwrap();
        let ids: Vec<&str> = registry.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = MonsterRegistry::new(vec![monster("a"), monster("a")]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateMonster(id) if id == "a"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = MonsterRegistry::new(vec![monster("")]).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyMonsterId));
    }

    #[test]
    fn test_builtin_roster_is_valid() {
        let registry = MonsterRegistry::new(builtin_monsters()).unwrap();
        assert!(!registry.is_empty());
        for monster in registry.iter() {
            assert!(!monster.waves.is_empty(), "{} has no waves", monster.id);
            assert!(monster.max_rewarded_wins > 0);
        }
    }
}
