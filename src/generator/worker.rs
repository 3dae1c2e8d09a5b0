use std::sync::mpsc::{self, TryRecvError};
use std::sync::Arc;
use std::thread;

use super::{generate_questions, GeneratorError, QuestionGenerator, Result};
use crate::quiz::QuestionRecord;

/// Result of one background generation
#[derive(Debug)]
pub struct GenerationOutcome {
    pub topic: String,
    pub result: Result<Vec<QuestionRecord>>,
}

/// Runs generation off the calling thread. Only one request may be in
/// flight at a time, and a running request can't be cancelled.
pub struct GenerationWorker {
    generator: Arc<dyn QuestionGenerator>,
    pending: Option<(String, mpsc::Receiver<GenerationOutcome>)>,
}

impl GenerationWorker {
    pub fn new(generator: Arc<dyn QuestionGenerator>) -> Self {
        Self {
            generator,
            pending: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Topic of the request in flight, if any
    pub fn pending_topic(&self) -> Option<&str> {
        self.pending.as_ref().map(|(topic, _)| topic.as_str())
    }

    /// Kick off generation for `topic`. Refused while another request runs.
    pub fn start(&mut self, topic: &str) -> Result<()> {
        if self.is_busy() {
            return Err(GeneratorError::Busy);
        }

        let (tx, rx) = mpsc::channel();
        let generator = Arc::clone(&self.generator);
        let owned_topic = topic.to_string();

        thread::Builder::new()
            .name("question-generator".to_string())
            .spawn(move || {
                let result = generate_questions(generator.as_ref(), &owned_topic);
                if let Err(e) = &result {
                    log::warn!("Generation for '{}' failed: {}", owned_topic, e);
                }
                // Receiver may be gone if the UI shut down first
                let _ = tx.send(GenerationOutcome {
                    topic: owned_topic,
                    result,
                });
            })
            .map_err(|e| GeneratorError::Other(format!("Failed to spawn worker: {}", e)))?;

        self.pending = Some((topic.to_string(), rx));
        Ok(())
    }

    /// Non-blocking check for a finished request
    pub fn poll(&mut self) -> Option<GenerationOutcome> {
        let (topic, rx) = self.pending.as_ref()?;
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => GenerationOutcome {
                topic: topic.clone(),
                result: Err(GeneratorError::Disconnected),
            },
        };
        self.pending = None;
        Some(outcome)
    }

    /// Block until the request in flight finishes. `None` when idle.
    pub fn wait(&mut self) -> Option<GenerationOutcome> {
        let (topic, rx) = self.pending.take()?;
        Some(rx.recv().unwrap_or(GenerationOutcome {
            topic,
            result: Err(GeneratorError::Disconnected),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    const RAW: &str = "Question #1: 2+2?\n a) 4\n b) 3\n c) 5\n d) 6\n";

    #[test]
    fn test_outcome_delivered() {
        let generator = |_: &str| -> Result<String> { Ok(RAW.to_string()) };
        let mut worker = GenerationWorker::new(Arc::new(generator));

        assert!(worker.wait().is_none());
        worker.start("math").unwrap();
        assert_eq!(worker.pending_topic(), Some("math"));

        let outcome = worker.wait().unwrap();
        assert_eq!(outcome.topic, "math");
        assert_eq!(outcome.result.unwrap().len(), 1);
        assert!(!worker.is_busy());
    }

    #[test]
    fn test_second_request_refused_while_busy() {
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let release_rx = Mutex::new(release_rx);
        let generator = move |_: &str| -> Result<String> {
            release_rx.lock().unwrap().recv().ok();
            Ok(RAW.to_string())
        };
        let mut worker = GenerationWorker::new(Arc::new(generator));

        worker.start("first").unwrap();
        assert!(worker.is_busy());
        assert!(matches!(worker.start("second"), Err(GeneratorError::Busy)));
        assert!(worker.poll().is_none());

        release_tx.send(()).unwrap();
        let outcome = worker.wait().unwrap();
        assert_eq!(outcome.topic, "first");

        // Idle again, so a new request is accepted
        release_tx.send(()).unwrap();
        worker.start("second").unwrap();
        assert_eq!(worker.wait().unwrap().topic, "second");
    }

    #[test]
    fn test_failure_is_reported() {
        let generator = |_: &str| -> Result<String> { Err(GeneratorError::EmptyResponse) };
        let mut worker = GenerationWorker::new(Arc::new(generator));

        worker.start("broken").unwrap();
        let outcome = worker.wait().unwrap();
        assert!(matches!(outcome.result, Err(GeneratorError::EmptyResponse)));
    }

    #[test]
    fn test_poll_eventually_returns_outcome() {
        let generator = |_: &str| -> Result<String> { Ok(RAW.to_string()) };
        let mut worker = GenerationWorker::new(Arc::new(generator));
        worker.start("math").unwrap();

        let outcome = loop {
            if let Some(outcome) = worker.poll() {
                break outcome;
            }
            thread::sleep(std::time::Duration::from_millis(5));
        };
        assert!(outcome.result.is_ok());
        assert!(!worker.is_busy());
    }
}
