//! Recording runner used by unit tests

use super::{CommandRunner, CommandSpec};
use anyhow::Result;
use std::sync::Mutex;

type Responder = Box<dyn Fn(&CommandSpec) -> Result<i32> + Send + Sync>;

/// Records every command it is asked to run and answers with a canned status
pub struct FakeRunner {
    calls: Mutex<Vec<String>>,
    respond: Responder,
}

impl FakeRunner {
    /// Every command succeeds
    pub fn succeeding() -> Self {
        Self::with(|_| Ok(0))
    }

    pub fn with<F>(respond: F) -> Self
    where
        F: Fn(&CommandSpec) -> Result<i32> + Send + Sync + 'static,
    {
        Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        }
    }

    /// Command lines in invocation order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn position(&self, needle: &str) -> Option<usize> {
        self.calls().iter().position(|call| call.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.calls().iter().filter(|call| call.contains(needle)).count()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, spec: &CommandSpec) -> Result<i32> {
        let status = (self.respond)(spec);
        self.calls.lock().unwrap().push(spec.to_string());
        status
    }
}
