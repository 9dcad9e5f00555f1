use crate::error::{Result, TutorError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// ActionKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionKind {
    Move {
        joints: Vec<f64>,
    },
    Sleep {
        duration: f64,
    },
    ToolMove {
        tool: Vec<f64>,
    },
    ActionSet {
        name: Option<String>,
        children: Vec<String>,
    },
}

impl ActionKind {
    pub fn is_move(&self) -> bool {
        matches!(self, ActionKind::Move { .. })
    }

    pub fn is_sleep(&self) -> bool {
        matches!(self, ActionKind::Sleep { .. })
    }

    pub fn is_tool_move(&self) -> bool {
        matches!(self, ActionKind::ToolMove { .. })
    }

    pub fn is_action_set(&self) -> bool {
        matches!(self, ActionKind::ActionSet { .. })
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// One entry in the action list. `last_run` is stamped (epoch milliseconds)
/// by the runner collaborator when the action executes; this crate only
/// reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    #[serde(default)]
    pub last_run: Option<i64>,
    #[serde(flatten)]
    pub kind: ActionKind,
}

impl Action {
    pub fn new(id: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            id: id.into(),
            last_run: None,
            kind,
        }
    }
}

// ---------------------------------------------------------------------------
// ActionList
// ---------------------------------------------------------------------------

/// Normalized action store: every action lives in `by_id`, and `order` holds
/// the top-level sequence (action-set children are nested in the set's own
/// payload). Mutators keep the two structures in sync; `validate` is the
/// check for data that arrived through deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionList {
    #[serde(default)]
    by_id: HashMap<String, Action>,
    #[serde(default)]
    order: Vec<String>,
}

impl ActionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Action> {
        self.by_id.get(id)
    }

    /// First top-level action, in list order.
    pub fn first(&self) -> Option<&Action> {
        self.order.first().map(|id| &self.by_id[id])
    }

    /// Top-level actions in list order. Indexing is safe because the
    /// mutators below never leave `order` pointing at a missing id;
    /// a panic here means the store invariant was broken upstream.
    pub fn ordered(&self) -> impl Iterator<Item = &Action> {
        self.order.iter().map(|id| &self.by_id[id])
    }

    pub fn count(&self, pred: impl Fn(&Action) -> bool) -> usize {
        self.ordered().filter(|a| pred(a)).count()
    }

    // ---------------------------------------------------------------------------
    // Mutations (editing/runner collaborators)
    // ---------------------------------------------------------------------------

    /// Append an action to the top level. Re-pushing an existing id replaces
    /// the stored action but keeps its position.
    pub fn push(&mut self, action: Action) {
        if !self.by_id.contains_key(&action.id) {
            self.order.push(action.id.clone());
        }
        self.by_id.insert(action.id.clone(), action);
    }

    /// Remove an action everywhere: the store, the top-level order, and any
    /// action set's children.
    pub fn remove(&mut self, id: &str) -> Option<Action> {
        let removed = self.by_id.remove(id)?;
        self.order.retain(|o| o != id);
        for action in self.by_id.values_mut() {
            if let ActionKind::ActionSet { children, .. } = &mut action.kind {
                children.retain(|c| c != id);
            }
        }
        Some(removed)
    }

    /// Move a top-level action into an action set's children.
    pub fn nest(&mut self, child_id: &str, set_id: &str) -> Result<()> {
        if !self.by_id.contains_key(child_id) {
            return Err(TutorError::MissingAction(child_id.to_string()));
        }
        let set = self
            .by_id
            .get_mut(set_id)
            .ok_or_else(|| TutorError::MissingAction(set_id.to_string()))?;
        match &mut set.kind {
            ActionKind::ActionSet { children, .. } => {
                if !children.iter().any(|c| c == child_id) {
                    children.push(child_id.to_string());
                }
            }
            _ => return Err(TutorError::NotAnActionSet(set_id.to_string())),
        }
        self.order.retain(|o| o != child_id);
        Ok(())
    }

    pub fn rename_set(&mut self, set_id: &str, new_name: impl Into<String>) -> Result<()> {
        let set = self
            .by_id
            .get_mut(set_id)
            .ok_or_else(|| TutorError::MissingAction(set_id.to_string()))?;
        match &mut set.kind {
            ActionKind::ActionSet { name, .. } => {
                *name = Some(new_name.into());
                Ok(())
            }
            _ => Err(TutorError::NotAnActionSet(set_id.to_string())),
        }
    }

    /// Stamp an action's last execution time (epoch ms).
    pub fn set_last_run(&mut self, id: &str, timestamp: i64) -> Result<()> {
        let action = self
            .by_id
            .get_mut(id)
            .ok_or_else(|| TutorError::MissingAction(id.to_string()))?;
        action.last_run = Some(timestamp);
        Ok(())
    }

    // ---------------------------------------------------------------------------
    // Validation
    // ---------------------------------------------------------------------------

    /// Check the reference invariant: every id in `order` and in any action
    /// set's children must exist in the store.
    pub fn validate(&self) -> Result<()> {
        for id in &self.order {
            if !self.by_id.contains_key(id) {
                return Err(TutorError::MissingAction(id.clone()));
            }
        }
        for action in self.by_id.values() {
            if let ActionKind::ActionSet { children, .. } = &action.kind {
                for child in children {
                    if !self.by_id.contains_key(child) {
                        return Err(TutorError::MissingAction(child.clone()));
                    }
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn move_action(id: &str) -> Action {
        Action::new(id, ActionKind::Move { joints: vec![0.0; 6] })
    }

    fn set_action(id: &str) -> Action {
        Action::new(
            id,
            ActionKind::ActionSet {
                name: None,
                children: Vec::new(),
            },
        )
    }

    #[test]
    fn push_preserves_order() {
        let mut list = ActionList::new();
        list.push(move_action("a"));
        list.push(Action::new("b", ActionKind::Sleep { duration: 2.0 }));
        let ids: Vec<&str> = list.ordered().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn push_existing_id_replaces_in_place() {
        let mut list = ActionList::new();
        list.push(move_action("a"));
        list.push(move_action("b"));
        list.push(Action::new("a", ActionKind::Sleep { duration: 1.0 }));
        assert_eq!(list.len(), 2);
        assert!(list.first().unwrap().kind.is_sleep());
    }

    #[test]
    fn remove_cleans_order_and_children() {
        let mut list = ActionList::new();
        list.push(move_action("m"));
        list.push(set_action("s"));
        list.nest("m", "s").unwrap();
        assert_eq!(list.len(), 1);

        list.remove("m");
        list.validate().unwrap();
        match &list.get("s").unwrap().kind {
            ActionKind::ActionSet { children, .. } => assert!(children.is_empty()),
            _ => unreachable!(),
        }
    }

    #[test]
    fn nest_moves_out_of_top_level() {
        let mut list = ActionList::new();
        list.push(move_action("m1"));
        list.push(move_action("m2"));
        list.push(set_action("s"));
        list.nest("m1", "s").unwrap();
        list.nest("m2", "s").unwrap();

        let ids: Vec<&str> = list.ordered().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["s"]);
        match &list.get("s").unwrap().kind {
            ActionKind::ActionSet { children, .. } => assert_eq!(children.len(), 2),
            _ => unreachable!(),
        }
    }

    #[test]
    fn nest_into_non_set_fails() {
        let mut list = ActionList::new();
        list.push(move_action("m"));
        list.push(move_action("target"));
        assert!(matches!(
            list.nest("m", "target"),
            Err(TutorError::NotAnActionSet(_))
        ));
    }

    #[test]
    fn rename_set_sets_name() {
        let mut list = ActionList::new();
        list.push(set_action("s"));
        list.rename_set("s", "pick and place").unwrap();
        match &list.get("s").unwrap().kind {
            ActionKind::ActionSet { name, .. } => {
                assert_eq!(name.as_deref(), Some("pick and place"));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn count_filters_by_kind() {
        let mut list = ActionList::new();
        list.push(move_action("a"));
        list.push(Action::new("b", ActionKind::Sleep { duration: 1.0 }));
        list.push(move_action("c"));
        assert_eq!(list.count(|a| a.kind.is_move()), 2);
        assert_eq!(list.count(|a| a.kind.is_tool_move()), 0);
    }

    #[test]
    fn validate_catches_dangling_reference() {
        let json = r#"{
            "by_id": {
                "s": { "id": "s", "kind": "action_set", "name": null, "children": ["ghost"] }
            },
            "order": ["s"]
        }"#;
        let list: ActionList = serde_json::from_str(json).unwrap();
        assert!(matches!(
            list.validate(),
            Err(TutorError::MissingAction(id)) if id == "ghost"
        ));
    }

    #[test]
    fn action_json_tagged_by_kind() {
        let action = Action::new("a1", ActionKind::ToolMove { tool: vec![0.5] });
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"kind\":\"tool_move\""));
        let parsed: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, action);
    }

    #[test]
    fn sleep_json_roundtrip() {
        let json = r#"{ "id": "s1", "kind": "sleep", "duration": 1.5, "last_run": 42 }"#;
        let action: Action = serde_json::from_str(json).unwrap();
        assert_eq!(action.last_run, Some(42));
        assert!(matches!(action.kind, ActionKind::Sleep { duration } if duration == 1.5));
    }
}
