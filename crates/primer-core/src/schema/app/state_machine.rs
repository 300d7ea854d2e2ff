use crate::{Error, Result};

/// Lifecycle of a business model, as a set of states and the transitions
/// between them.
#[derive(Debug, Clone, Default)]
pub struct StateMachine {
    pub name: String,
    states: Vec<State>,
    transitions: Vec<Transition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub name: String,
    pub description: String,
    pub initial: bool,
    pub terminal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub name: String,
    pub description: String,

    /// Name of the state the transition leaves
    pub from: String,

    /// Name of the state the transition enters
    pub to: String,

    /// Optional guard, kept verbatim for the renderer
    pub condition: Option<String>,
}

impl StateMachine {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: vec![],
            transitions: vec![],
        }
    }

    /// Adds a state, replacing any state with the same name.
    pub fn add_state(&mut self, state: State) {
        match self.states.iter_mut().find(|s| s.name == state.name) {
            Some(existing) => *existing = state,
            None => self.states.push(state),
        }
    }

    /// Adds a transition. Both of its endpoints must already be registered.
    pub fn add_transition(&mut self, transition: Transition) -> Result<()> {
        for endpoint in [&transition.from, &transition.to] {
            if self.state(endpoint).is_none() {
                return Err(Error::invariant_violation(format!(
                    "transition `{}` references state `{endpoint}` which is not part of state machine `{}`",
                    transition.name, self.name
                )));
            }
        }

        self.transitions.push(transition);
        Ok(())
    }

    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|state| state.name == name)
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn initial_state(&self) -> Option<&State> {
        self.states.iter().find(|state| state.initial)
    }

    pub fn transitions_from<'a>(&'a self, state: &'a str) -> impl Iterator<Item = &'a Transition> {
        self.transitions.iter().filter(move |t| t.from == state)
    }
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            initial: false,
            terminal: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn initial(mut self, initial: bool) -> Self {
        self.initial = initial;
        self
    }

    pub fn terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }
}

impl Transition {
    pub fn new(name: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            from: from.into(),
            to: to.into(),
            condition: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}
