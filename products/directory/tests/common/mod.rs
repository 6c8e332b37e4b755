use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use platform_people::{PersonProvider, PersonRecord, ProviderError, ProviderResult};
use serde_json::json;

pub fn person(first: &str, last: &str, username: &str) -> PersonRecord {
    serde_json::from_value(json!({
        "name": {"title": "Mx", "first": first, "last": last},
        "email": format!("{}@example.com", username),
        "location": {
            "street": {"number": 12, "name": "High Street"},
            "city": "Leeds",
            "state": "West Yorkshire",
            "postcode": "LS1 4AP"
        },
        "picture": {"large": format!("https://randomuser.me/api/portraits/{}.jpg", username)},
        "cell": "0700-555-123",
        "dob": {"date": "1990-06-15T08:00:00Z", "age": 36},
        "login": {"username": username}
    }))
    .expect("fixture record")
}

pub enum Reply {
    Person(PersonRecord),
    Fail,
    /// Answer after the delay.
    Delayed(Duration, PersonRecord),
    /// Never answer.
    Hang,
}

/// Answers fetches from a script, in call order.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Reply>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }

    fn next_reply(&self) -> Reply {
        self.replies.lock().unwrap().pop_front().unwrap_or(Reply::Hang)
    }
}

impl PersonProvider for ScriptedProvider {
    async fn fetch_person(&self) -> ProviderResult<PersonRecord> {
        let reply = self.next_reply();
        tokio::task::yield_now().await;
        match reply {
            Reply::Person(record) => Ok(record),
            Reply::Fail => Err(ProviderError::EmptyResults),
            Reply::Delayed(delay, record) => {
                tokio::time::sleep(delay).await;
                Ok(record)
            }
            Reply::Hang => futures::future::pending().await,
        }
    }
}
