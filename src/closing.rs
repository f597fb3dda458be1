//! Stock-take ("closing") session state.
//!
//! A closing pass walks every shoe of one category and marks it present or
//! missing. The whole thing is local: one snapshot is fetched when the view
//! opens, and these three lists are derived from it in memory. Nothing is
//! persisted; leaving the view throws the session away.

use crate::models::{Shoe, ShoeType};

/// Where the worker is in the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosingPhase {
    /// Picking which category to close.
    SelectType,
    /// Going card by card, marking present/missing.
    Triage,
    /// Reviewing (and possibly undoing) the missing list.
    MissingReview,
}

#[derive(Debug, Clone)]
pub struct ClosingSession {
    pub phase: ClosingPhase,
    pub selected: Option<ShoeType>,
    /// Shoes of the selected category still waiting for a verdict.
    pub remaining: Vec<Shoe>,
    /// Shoes marked missing during triage.
    pub missing: Vec<Shoe>,
}

impl ClosingSession {
    pub fn new() -> Self {
        ClosingSession {
            phase: ClosingPhase::SelectType,
            selected: None,
            remaining: Vec::new(),
            missing: Vec::new(),
        }
    }

    /// Pick a category and derive the triage list from the snapshot.
    pub fn start(&mut self, shoe_type: ShoeType, snapshot: &[Shoe]) {
        self.selected = Some(shoe_type);
        self.remaining = snapshot
            .iter()
            .filter(|s| s.shoe_type == Some(shoe_type))
            .cloned()
            .collect();
        self.missing.clear();
        self.phase = ClosingPhase::Triage;
    }

    /// Verdict: the shoe is on the shelf. Drops it from the triage list.
    pub fn mark_present(&mut self, code: &str) {
        self.remaining.retain(|s| s.code != code);
    }

    /// Verdict: the shoe is gone. Moves it from remaining to missing.
    pub fn mark_missing(&mut self, code: &str) {
        if let Some(pos) = self.remaining.iter().position(|s| s.code == code) {
            let shoe = self.remaining.remove(pos);
            self.missing.push(shoe);
        }
    }

    /// Undo from the missing review: the shoe turned up after all.
    pub fn remove_from_missing(&mut self, code: &str) {
        self.missing.retain(|s| s.code != code);
    }

    pub fn view_missing(&mut self) {
        self.phase = ClosingPhase::MissingReview;
    }

    pub fn back_to_triage(&mut self) {
        self.phase = ClosingPhase::Triage;
    }

    /// Back to the category picker. Discards both derived lists.
    pub fn reset(&mut self) {
        *self = ClosingSession::new();
    }

    /// Every shoe of the category got a verdict.
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl Default for ClosingSession {
    fn default() -> Self {
        ClosingSession::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_shoe(code: &str, shoe_type: ShoeType) -> Shoe {
        Shoe {
            code: code.to_string(),
            name: Some(format!("Shoe {}", code)),
            loc: Some(7),
            shoe_type: Some(shoe_type),
            image: None,
        }
    }

    fn snapshot() -> Vec<Shoe> {
        vec![
            make_shoe("m1", ShoeType::Man),
            make_shoe("m2", ShoeType::Man),
            make_shoe("w1", ShoeType::Woman),
            make_shoe("c1", ShoeType::Children),
        ]
    }

    #[test]
    fn start_filters_snapshot_to_selected_category() {
        let mut session = ClosingSession::new();
        session.start(ShoeType::Man, &snapshot());

        assert_eq!(session.phase, ClosingPhase::Triage);
        assert_eq!(session.remaining.len(), 2);
        assert!(session.remaining.iter().all(|s| s.shoe_type == Some(ShoeType::Man)));
        assert!(session.missing.is_empty());
        assert!(!session.is_complete());
    }

    #[test]
    fn triage_moves_each_code_exactly_once() {
        let mut session = ClosingSession::new();
        session.start(ShoeType::Man, &snapshot());

        session.mark_missing("m1");
        assert_eq!(session.remaining.len(), 1);
        assert_eq!(session.missing.len(), 1);

        // A second verdict for the same code is a no-op
        session.mark_missing("m1");
        assert_eq!(session.missing.len(), 1);

        session.mark_present("m2");
        assert!(session.is_complete());
        assert_eq!(session.missing[0].code, "m1");
    }

    #[test]
    fn undo_removes_from_missing_only() {
        let mut session = ClosingSession::new();
        session.start(ShoeType::Woman, &snapshot());

        session.mark_missing("w1");
        session.view_missing();
        assert_eq!(session.phase, ClosingPhase::MissingReview);

        session.remove_from_missing("w1");
        assert!(session.missing.is_empty());
        // Undo does not resurrect the shoe into the triage list
        assert!(session.remaining.is_empty());

        session.back_to_triage();
        assert_eq!(session.phase, ClosingPhase::Triage);
    }

    #[test]
    fn empty_category_is_immediately_complete() {
        let mut session = ClosingSession::new();
        session.start(ShoeType::Children, &[]);
        assert!(session.is_complete());
    }

    #[test]
    fn reset_returns_to_type_selection_and_clears_lists() {
        let mut session = ClosingSession::new();
        session.start(ShoeType::Man, &snapshot());
        session.mark_missing("m1");

        session.reset();
        assert_eq!(session.phase, ClosingPhase::SelectType);
        assert_eq!(session.selected, None);
        assert!(session.remaining.is_empty());
        assert!(session.missing.is_empty());
    }
}
