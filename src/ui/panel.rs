// src/ui/panel.rs
use crate::state::{AppState, Tab};

/// The trigger button on the concept tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub enabled: bool,
    pub busy: bool,
}

impl Trigger {
    pub fn caption(self) -> &'static str {
        if self.busy {
            "💡 Analyzing Concept..."
        } else {
            "🔍 Simplify This Concept"
        }
    }
}

/// Fixed copy for a tab that has no behaviour yet.
#[derive(Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub card_title: &'static str,
    pub headline: &'static str,
    pub detail: &'static str,
}

pub static TUTOR: Placeholder = Placeholder {
    icon: "💬",
    title: "AI Learning Tutor",
    blurb: "Chat with your personal AI tutor for detailed explanations, examples, and guided learning.",
    card_title: "Chat with AI Tutor",
    headline: "AI Tutor feature coming soon!",
    detail: "This will include real-time chat with AI for personalized learning assistance.",
};

pub static PLANNER: Placeholder = Placeholder {
    icon: "📅",
    title: "Personalized Study Planner",
    blurb: "Create a customized learning schedule based on the Feynman Technique principles.",
    card_title: "Your Learning Timeline",
    headline: "Study Planner feature coming soon!",
    detail: "This will include personalized timetables and learning milestones.",
};

#[derive(Debug, PartialEq, Eq)]
pub enum Panel {
    Concept { trigger: Trigger, has_result: bool },
    Placeholder(&'static Placeholder),
}

pub fn trigger(state: &AppState) -> Trigger {
    Trigger {
        enabled: state.can_request(),
        busy: state.is_pending(),
    }
}

/// What the central area shows for the current state.
pub fn derive(state: &AppState) -> Panel {
    match state.active_tab() {
        Tab::Concept => Panel::Concept {
            trigger: trigger(state),
            has_result: state.result().is_some(),
        },
        Tab::Tutor => Panel::Placeholder(&TUTOR),
        Tab::Planner => Panel::Placeholder(&PLANNER),
    }
}
