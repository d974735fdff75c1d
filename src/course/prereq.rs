// src/course/prereq.rs
//! Prerequisite section → [`DependencySpec`].
//!
//! The page lists prerequisites as a flat run of tables after the section
//! header: tables of course ids, interleaved with connective phrases ("one of
//! the following", "all of the following"). The first other phrase after an id
//! has been seen ends the section.

use crate::config::vocab::Vocabulary;
use crate::core::RawTable;

use super::classify::is_numeric;
use super::types::DependencySpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Section header not seen yet.
    Idle,
    /// In the section, no course id yet.
    Before,
    /// The next id opens a new group.
    InGroupOpen,
    /// Ids accumulate into the current group.
    InGroupContinue,
    /// Section over; only a repeated header re-opens it. `pending_open`
    /// remembers whether the next id would have started a new group.
    Done { pending_open: bool },
}

/// Input symbols of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Header,
    CourseId(u32),
    OneOf,
    AllOf,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    OpenGroup(u32),
    Append(u32),
}

impl ScanState {
    /// Transition table.
    pub fn step(self, token: Token) -> (ScanState, Action) {
        use Action as A;
        use ScanState::*;
        use Token::*;

        match (self, token) {
            (Idle, Header) => (Before, A::None),
            (Idle, _) => (Idle, A::None),

            (Before, CourseId(id)) => (InGroupContinue, A::OpenGroup(id)),
            (Before, Header | OneOf | AllOf | Other) => (Before, A::None),

            (InGroupOpen, CourseId(id)) => (InGroupContinue, A::OpenGroup(id)),
            (InGroupOpen, Header | OneOf | AllOf) => (InGroupOpen, A::None),
            (InGroupOpen, Other) => (Done { pending_open: true }, A::None),

            (InGroupContinue, CourseId(id)) => (InGroupContinue, A::Append(id)),
            (InGroupContinue, OneOf) => (InGroupOpen, A::None),
            (InGroupContinue, Header | AllOf) => (InGroupContinue, A::None),
            (InGroupContinue, Other) => (Done { pending_open: false }, A::None),

            // a later header re-opens the section where it left off
            (Done { pending_open: true }, Header) => (InGroupOpen, A::None),
            (Done { pending_open: false }, Header) => (InGroupContinue, A::None),
            (done @ Done { .. }, _) => (done, A::None),
        }
    }

    pub fn is_scanning(self) -> bool {
        matches!(self, ScanState::Before | ScanState::InGroupOpen | ScanState::InGroupContinue)
    }
}

pub struct PrereqScanner<'a> {
    vocab: &'a Vocabulary,
    state: ScanState,
    spec: DependencySpec,
}

impl<'a> PrereqScanner<'a> {
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab, state: ScanState::Idle, spec: DependencySpec::default() }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn is_scanning(&self) -> bool {
        self.state.is_scanning()
    }

    /// The section header table was seen.
    pub fn open(&mut self) {
        self.apply(Token::Header);
    }

    /// Feed one table from inside the section.
    pub fn feed(&mut self, table: &RawTable) {
        let Some(first) = table.first_cell() else {
            return;
        };
        if is_numeric(first) {
            for cell in table.column(0).flatten() {
                if let Some(id) = cell.parse().ok().filter(|_| is_numeric(cell)) {
                    self.apply(Token::CourseId(id));
                }
            }
        } else {
            let token = self.connective(first);
            self.apply(token);
        }
    }

    pub fn finish(self) -> DependencySpec {
        self.spec
    }

    fn connective(&self, cell: &str) -> Token {
        if cell.contains(self.vocab.one_of.as_str()) {
            Token::OneOf
        } else if cell.contains(self.vocab.all_of.as_str()) {
            Token::AllOf
        } else {
            Token::Other
        }
    }

    fn apply(&mut self, token: Token) {
        let (next, action) = self.state.step(token);
        match action {
            Action::OpenGroup(id) => self.spec.open_group(id),
            Action::Append(id) => self.spec.extend_current(id),
            Action::None => {}
        }
        self.state = next;
    }
}
