//! Fakes of the browser seams, shared by tests across modules.

use std::collections::HashMap;

use crate::identity::{HostContext, HostUser, PageLocation};

/// Host which may or may not expose a user.
#[derive(Default)]
pub struct FakeHost(pub Option<HostUser>);

impl HostContext for FakeHost {
    fn user(&self) -> Option<HostUser> {
        self.0.clone()
    }
}

/// Location with fixed query parameters and host name.
pub struct FakeLocation {
    params: HashMap<String, String>,
    hostname: String,
}

impl FakeLocation {
    pub fn new(hostname: &str) -> Self {
        Self {
            params: HashMap::new(),
            hostname: hostname.to_owned(),
        }
    }

    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.insert(name.to_owned(), value.to_owned());
        self
    }
}

impl PageLocation for FakeLocation {
    fn query_param(&self, name: &str) -> Option<String> {
        self.params.get(name).cloned()
    }

    fn hostname(&self) -> String {
        self.hostname.clone()
    }
}

pub fn host_user(id: i64, username: Option<&str>) -> HostUser {
    HostUser {
        id,
        username: username.map(str::to_owned),
    }
}
