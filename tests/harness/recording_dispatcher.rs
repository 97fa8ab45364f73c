use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use simcowatch::error::{Error, Result};
use simcowatch::port::{Alert, AlertDispatcher, DeliveryOutcome};

/// How a [`RecordingDispatcher`] answers.
#[derive(Clone, Copy, Debug, Default)]
pub enum Behavior {
    #[default]
    Deliver,
    Reject,
    Fail,
}

/// Thread-safe alert collector for dispatch assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingDispatcher {
    alerts: Arc<Mutex<Vec<Alert>>>,
    behavior: Behavior,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.alerts.lock().expect("lock alerts").len()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().expect("lock alerts").clone()
    }
}

#[async_trait]
impl AlertDispatcher for RecordingDispatcher {
    async fn dispatch(&self, alert: &Alert) -> Result<DeliveryOutcome> {
        self.alerts.lock().expect("lock alerts").push(alert.clone());
        match self.behavior {
            Behavior::Deliver => Ok(DeliveryOutcome::Delivered),
            Behavior::Reject => Ok(DeliveryOutcome::Rejected {
                status: 400,
                body: "bad request".into(),
            }),
            Behavior::Fail => Err(Error::AlertDelivery("connection reset".into())),
        }
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
