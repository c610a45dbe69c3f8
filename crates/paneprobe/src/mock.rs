//! Scripted in-memory automation session
//!
//! `MockSession` models just enough of a real driver to exercise the page
//! objects without a host application:
//!
//! - named OS contexts, one of them current;
//! - a frame focus (top-level or a frame element);
//! - elements scoped to a context and/or frame, with visibility, text and
//!   value;
//! - click side effects that show/hide elements or add/remove contexts;
//! - failure injection per command;
//! - a call history for verification.
//!
//! `set_value` appends like typing into a field does, so callers that need
//! overwrite semantics must clear first.

use crate::result::{PaneError, PaneResult};
use crate::selector::Selector;
use crate::session::{AutomationSession, ElementHandle, NATIVE_CONTEXT};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Side effect of clicking a mock element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickEffect {
    /// Mark every element matching the selector as displayed
    Show(Selector),
    /// Mark every element matching the selector as hidden
    Hide(Selector),
    /// Make a context available (appended to the enumeration order)
    AddContext(String),
    /// Remove a context from the enumeration
    RemoveContext(String),
}

/// An element in the mock UI tree
#[derive(Debug, Clone)]
pub struct MockElement {
    /// Selector that resolves this element
    pub selector: Selector,
    /// Context the element lives in (`None` = every context)
    pub context: Option<String>,
    /// Frame the element lives in (`None` = top-level document)
    pub frame: Option<Selector>,
    /// Whether the element is displayed
    pub displayed: bool,
    /// Visible text
    pub text: String,
    /// Form value
    pub value: String,
    /// Text projection reports the value (native inputs)
    pub text_mirrors_value: bool,
    /// Effects applied on click, in order
    pub on_click: Vec<ClickEffect>,
}

impl MockElement {
    /// Create a displayed element in the top-level document of any context
    #[must_use]
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            context: None,
            frame: None,
            displayed: true,
            text: String::new(),
            value: String::new(),
            text_mirrors_value: false,
            on_click: Vec::new(),
        }
    }

    /// Restrict the element to one context
    #[must_use]
    pub fn in_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Place the element inside the frame resolved by `frame`
    #[must_use]
    pub fn in_frame(mut self, frame: Selector) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Start hidden
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.displayed = false;
        self
    }

    /// Set the visible text
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the initial form value
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Expose the value through the text projection, like native inputs do
    #[must_use]
    pub const fn native_input(mut self) -> Self {
        self.text_mirrors_value = true;
        self
    }

    /// Add a click side effect
    #[must_use]
    pub fn on_click(mut self, effect: ClickEffect) -> Self {
        self.on_click.push(effect);
        self
    }

    fn visible_text(&self) -> String {
        if self.text_mirrors_value {
            self.value.clone()
        } else {
            self.text.clone()
        }
    }
}

#[derive(Debug)]
struct MockState {
    contexts: Vec<String>,
    current_context: String,
    current_frame: Option<Selector>,
    elements: Vec<MockElement>,
    failing: HashSet<String>,
    calls: Vec<String>,
}

impl MockState {
    fn in_scope(&self, element: &MockElement) -> bool {
        element
            .context
            .as_ref()
            .map_or(true, |context| *context == self.current_context)
            && element.frame == self.current_frame
    }

    fn lookup(&self, selector: &Selector) -> Option<usize> {
        self.elements
            .iter()
            .position(|element| element.selector == *selector && self.in_scope(element))
    }

    /// Resolve a handle, failing if its element is not reachable from the
    /// current context and frame.
    fn resolve(&self, handle: &ElementHandle) -> PaneResult<usize> {
        handle
            .id
            .strip_prefix("mock-")
            .and_then(|index| index.parse::<usize>().ok())
            .filter(|&index| {
                self.elements
                    .get(index)
                    .is_some_and(|element| self.in_scope(element))
            })
            .ok_or_else(|| PaneError::element_not_found(&handle.selector))
    }

    fn record(&mut self, method: &str, call: String) -> PaneResult<()> {
        self.calls.push(call);
        if self.failing.contains(method) {
            return Err(PaneError::session(format!("{method} failed")));
        }
        Ok(())
    }

    fn apply(&mut self, effect: ClickEffect) {
        match effect {
            ClickEffect::Show(selector) => self.set_displayed(&selector, true),
            ClickEffect::Hide(selector) => self.set_displayed(&selector, false),
            ClickEffect::AddContext(name) => {
                if !self.contexts.contains(&name) {
                    self.contexts.push(name);
                }
            }
            ClickEffect::RemoveContext(name) => self.contexts.retain(|context| *context != name),
        }
    }

    fn set_displayed(&mut self, selector: &Selector, displayed: bool) {
        self.elements
            .iter_mut()
            .filter(|element| element.selector == *selector)
            .for_each(|element| element.displayed = displayed);
    }
}

/// In-memory [`AutomationSession`] for tests
#[derive(Debug)]
pub struct MockSession {
    state: Mutex<MockState>,
}

impl Default for MockSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSession {
    /// Create a session exposing only the native context
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                contexts: vec![NATIVE_CONTEXT.to_string()],
                current_context: NATIVE_CONTEXT.to_string(),
                current_frame: None,
                elements: Vec::new(),
                failing: HashSet::new(),
                calls: Vec::new(),
            }),
        }
    }

    /// Replace the enumerated contexts
    #[must_use]
    pub fn with_contexts<I, S>(self, contexts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state().contexts = contexts.into_iter().map(Into::into).collect();
        self
    }

    /// Add an element to the UI tree
    #[must_use]
    pub fn with_element(self, element: MockElement) -> Self {
        self.state().elements.push(element);
        self
    }

    /// Make every call of `method` fail with a session error
    #[must_use]
    pub fn failing(self, method: &str) -> Self {
        self.state().failing.insert(method.to_string());
        self
    }

    /// Recorded calls, oldest first
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    /// Check if a call starting with `prefix` was made
    #[must_use]
    pub fn was_called(&self, prefix: &str) -> bool {
        self.state().calls.iter().any(|c| c.starts_with(prefix))
    }

    /// Number of calls starting with `prefix`
    #[must_use]
    pub fn count_calls(&self, prefix: &str) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    /// Forget recorded calls
    pub fn clear_history(&self) {
        self.state().calls.clear();
    }

    /// Name of the current context
    #[must_use]
    pub fn current_context(&self) -> String {
        self.state().current_context.clone()
    }

    /// Frame currently focused (`None` = top-level document)
    #[must_use]
    pub fn current_frame(&self) -> Option<Selector> {
        self.state().current_frame.clone()
    }

    /// Whether any element matching `selector` is displayed, in any scope
    #[must_use]
    pub fn is_shown(&self, selector: &Selector) -> bool {
        self.state()
            .elements
            .iter()
            .any(|element| element.selector == *selector && element.displayed)
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl AutomationSession for MockSession {
    async fn find_element(&self, selector: &Selector) -> PaneResult<ElementHandle> {
        let mut state = self.state();
        state.record("find_element", format!("find_element:{selector}"))?;
        state
            .lookup(selector)
            .map(|index| ElementHandle::new(format!("mock-{index}"), selector.clone()))
            .ok_or_else(|| PaneError::element_not_found(selector))
    }

    async fn wait_for_exist(
        &self,
        selector: &Selector,
        timeout: Duration,
    ) -> PaneResult<ElementHandle> {
        let ms = timeout.as_millis() as u64;
        let mut state = self.state();
        state.record("wait_for_exist", format!("wait_for_exist:{selector}:{ms}"))?;
        state
            .lookup(selector)
            .map(|index| ElementHandle::new(format!("mock-{index}"), selector.clone()))
            .ok_or_else(|| PaneError::Timeout {
                selector: selector.to_string(),
                ms,
            })
    }

    async fn is_displayed(&self, element: &ElementHandle) -> PaneResult<bool> {
        let mut state = self.state();
        state.record("is_displayed", format!("is_displayed:{}", element.selector))?;
        let index = state.resolve(element)?;
        Ok(state.elements[index].displayed)
    }

    async fn click(&self, element: &ElementHandle) -> PaneResult<()> {
        let mut state = self.state();
        state.record("click", format!("click:{}", element.selector))?;
        let index = state.resolve(element)?;
        let effects = state.elements[index].on_click.clone();
        for effect in effects {
            state.apply(effect);
        }
        Ok(())
    }

    async fn text(&self, element: &ElementHandle) -> PaneResult<String> {
        let mut state = self.state();
        state.record("text", format!("text:{}", element.selector))?;
        let index = state.resolve(element)?;
        Ok(state.elements[index].visible_text())
    }

    async fn value(&self, element: &ElementHandle) -> PaneResult<String> {
        let mut state = self.state();
        state.record("value", format!("value:{}", element.selector))?;
        let index = state.resolve(element)?;
        Ok(state.elements[index].value.clone())
    }

    async fn clear_value(&self, element: &ElementHandle) -> PaneResult<()> {
        let mut state = self.state();
        state.record("clear_value", format!("clear_value:{}", element.selector))?;
        let index = state.resolve(element)?;
        state.elements[index].value.clear();
        Ok(())
    }

    async fn set_value(&self, element: &ElementHandle, value: &str) -> PaneResult<()> {
        let mut state = self.state();
        state.record("set_value", format!("set_value:{}:{value}", element.selector))?;
        let index = state.resolve(element)?;
        state.elements[index].value.push_str(value);
        Ok(())
    }

    async fn contexts(&self) -> PaneResult<Vec<String>> {
        let mut state = self.state();
        state.record("contexts", "contexts".to_string())?;
        Ok(state.contexts.clone())
    }

    async fn switch_context(&self, name: &str) -> PaneResult<()> {
        let mut state = self.state();
        state.record("switch_context", format!("switch_context:{name}"))?;
        if !state.contexts.iter().any(|context| context == name) {
            return Err(PaneError::context_switch(name, "no such context"));
        }
        state.current_context = name.to_string();
        state.current_frame = None;
        Ok(())
    }

    async fn switch_to_frame(&self, frame: Option<&ElementHandle>) -> PaneResult<()> {
        let mut state = self.state();
        match frame {
            None => {
                state.record("switch_to_frame", "switch_to_frame:null".to_string())?;
                state.current_frame = None;
            }
            Some(handle) => {
                state.record("switch_to_frame", format!("switch_to_frame:{}", handle.selector))?;
                let index = state.resolve(handle).map_err(|_| {
                    PaneError::context_switch(handle.selector.to_string(), "no such frame")
                })?;
                state.current_frame = Some(state.elements[index].selector.clone());
            }
        }
        Ok(())
    }
}
