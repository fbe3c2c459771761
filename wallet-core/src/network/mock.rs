// wallet-core/src/network/mock.rs
//
// In-memory RpcTransport cho test: trả lời theo kịch bản và ghi lại mọi call.

use crate::error::{NetworkError, WalletResult};
use crate::network::traits::RpcTransport;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

type Handler = Box<dyn Fn(&Value) -> WalletResult<Value> + Send + Sync>;

#[derive(Default)]
pub struct MockTransport {
    handlers: HashMap<String, Handler>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answer `method` with `result`.
    pub fn respond(self, method: &str, result: Value) -> Self {
        self.respond_with(method, move |_| Ok(result.clone()))
    }

    /// Always fail `method` with `error`.
    pub fn fail(self, method: &str, error: NetworkError) -> Self {
        self.respond_with(method, move |_| Err(error.clone().into()))
    }

    /// Answer `method` from its params.
    pub fn respond_with<F>(mut self, method: &str, handler: F) -> Self
    where
        F: Fn(&Value) -> WalletResult<Value> + Send + Sync + 'static,
    {
        self.handlers.insert(method.to_string(), Box::new(handler));
        self
    }

    /// Methods called so far, in order.
    pub fn methods(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(m, _)| m.clone()).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Params of the latest call to `method`.
    pub fn params_of(&self, method: &str) -> Value {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(m, _)| m == method)
            .map(|(_, p)| p.clone())
            .unwrap_or_else(|| panic!("{} was never called", method))
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn call(&self, method: &str, params: Value) -> WalletResult<Value> {
        self.calls.lock().unwrap().push((method.to_string(), params.clone()));
        match self.handlers.get(method) {
            Some(handler) => handler(&params),
            None => Err(NetworkError::Unavailable(format!("unscripted method {}", method)).into()),
        }
    }
}
