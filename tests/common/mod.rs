#![allow(dead_code)]

//! Shared helpers for the integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use mockall::mock;
use xbuilder_rs::core::markup::Diagnostics;

/// Strip the XML declaration line (margin prefix included) and trailing
/// whitespace, leaving just the rendered body.
pub fn strip_declaration(xml: &str) -> String {
    let mut parts = xml.splitn(2, '\n');
    let first = parts.next().unwrap_or("");
    let body = if first.trim_start().starts_with("<?xml") {
        parts.next().unwrap_or("")
    } else {
        xml
    };
    body.trim_end().to_string()
}

/// Diagnostic sink that records every advisory for later assertion.
#[derive(Default, Clone)]
pub struct CapturingSink {
    pub messages: Rc<RefCell<Vec<String>>>,
}

impl Diagnostics for CapturingSink {
    fn advisory(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

mock! {
    pub Sink {}
    impl Diagnostics for Sink {
        fn advisory(&self, message: &str);
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
