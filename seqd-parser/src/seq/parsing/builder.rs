//! Diagram builder
//!
//! Owns actor registration and statement accumulation during the parse.
//! Actor order is order of first appearance; signals and notes auto-register
//! names they reference, and an explicit `participant` declaration of an
//! already auto-registered actor upgrades its label in place.

use crate::seq::ast::range::Range;
use crate::seq::ast::{Actor, ActorId, Diagram, Statement};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct DiagramBuilder {
    title: Option<String>,
    actors: Vec<Actor>,
    index: HashMap<String, ActorId>,
    statements: Vec<Statement>,
}

impl DiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A later `title:` line wins over an earlier one.
    pub fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }

    /// Whether `name` was already declared with a `participant` line.
    pub fn has_explicit(&self, name: &str) -> bool {
        self.index
            .get(name)
            .map(|id| self.actors[id.index()].explicit)
            .unwrap_or(false)
    }

    /// Register an explicit `participant` declaration.
    ///
    /// An already-referenced actor keeps its slot but takes the declared
    /// label and becomes explicit. Callers must reject duplicates via
    /// [`has_explicit`](Self::has_explicit) first.
    pub fn declare_participant(&mut self, name: String, label: String, location: Range) -> ActorId {
        match self.index.get(&name) {
            Some(&id) => {
                let actor = &mut self.actors[id.index()];
                actor.label = label;
                actor.explicit = true;
                id
            }
            None => self.register(name, label, true, location),
        }
    }

    /// Resolve an actor reference, registering it on first appearance.
    pub fn reference_actor(&mut self, name: &str, location: &Range) -> ActorId {
        match self.index.get(name) {
            Some(&id) => id,
            None => self.register(name.to_string(), name.to_string(), false, location.clone()),
        }
    }

    pub fn push_statement(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn finish(self) -> Diagram {
        Diagram {
            title: self.title,
            actors: self.actors,
            statements: self.statements,
        }
    }

    fn register(&mut self, name: String, label: String, explicit: bool, location: Range) -> ActorId {
        let id = ActorId::new(self.actors.len());
        self.actors.push(Actor {
            name: name.clone(),
            label,
            id,
            explicit,
            location,
        });
        self.index.insert(name, id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_registers_once() {
        let mut builder = DiagramBuilder::new();
        let a = builder.reference_actor("Alice", &Range::default());
        let b = builder.reference_actor("Bob", &Range::default());
        let a_again = builder.reference_actor("Alice", &Range::default());
        assert_eq!(a, a_again);
        assert_ne!(a, b);
        assert_eq!(builder.finish().actors.len(), 2);
    }

    #[test]
    fn test_declaration_upgrades_reference() {
        let mut builder = DiagramBuilder::new();
        let referenced = builder.reference_actor("S", &Range::default());
        let declared =
            builder.declare_participant("S".to_string(), "Auth Service".to_string(), Range::default());
        assert_eq!(referenced, declared);
        let diagram = builder.finish();
        assert_eq!(diagram.actors.len(), 1);
        assert_eq!(diagram.actors[0].label, "Auth Service");
        assert!(diagram.actors[0].explicit);
    }

    #[test]
    fn test_has_explicit() {
        let mut builder = DiagramBuilder::new();
        builder.reference_actor("A", &Range::default());
        assert!(!builder.has_explicit("A"));
        builder.declare_participant("A".to_string(), "A".to_string(), Range::default());
        assert!(builder.has_explicit("A"));
        assert!(!builder.has_explicit("missing"));
    }
}
