use std::sync::Arc;

use super::{
    base::Invoker, configs::CompletionConfig, external::ExternalInvoker,
    placeholder::PlaceholderInvoker,
};
use crate::errors::InvokeResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokerType {
    External,
    Placeholder,
}

impl InvokerType {
    /// The completion API is used only when a credential is configured
    pub fn for_config(config: &CompletionConfig) -> Self {
        if config.credential().is_some() {
            InvokerType::External
        } else {
            InvokerType::Placeholder
        }
    }
}

pub fn get_invoker(config: &CompletionConfig) -> InvokeResult<Arc<dyn Invoker>> {
    match InvokerType::for_config(config) {
        InvokerType::External => Ok(Arc::new(ExternalInvoker::new(config.clone())?)),
        InvokerType::Placeholder => Ok(Arc::new(PlaceholderInvoker)),
    }
}
