//! Scripted `TextGenerator` for tests. Replies are keyed by system prompt so
//! concurrent calls resolve deterministically regardless of completion order.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

pub struct ScriptedGenerator {
    replies: HashMap<String, Result<String, String>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(mut self, system: &str, text: &str) -> Self {
        self.replies
            .insert(system.to_string(), Ok(text.to_string()));
        self
    }

    pub fn fail(mut self, system: &str, message: &str) -> Self {
        self.replies
            .insert(system.to_string(), Err(message.to_string()));
        self
    }

    /// Every (system, prompt) pair received so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));

        match self.replies.get(system) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(message)) => Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            }),
            None => Err(LlmError::EmptyContent),
        }
    }

    fn model(&self) -> &str {
        "scripted"
    }
}
