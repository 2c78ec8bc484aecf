//! Load Status Components
//!
//! Explicit loading / failed states for views backed by remote data.

use leptos::prelude::*;
use swapi_client::ClientError;

/// Lifecycle of one remote-backed view
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed { message: String, retryable: bool },
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed {
                retryable: e.is_retryable(),
                message: e.to_string(),
            },
        }
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}

/// Error panel; Retry only when trying again could help
#[component]
pub fn LoadFailed(
    #[prop(into)] message: String,
    retryable: bool,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="load-failed" role="alert">
            <p class="load-failed-title">"Failed to load"</p>
            <p class="load-failed-message">{message}</p>
            {retryable.then(|| view! {
                <button class="retry-btn" on:click=move |_| on_retry.run(())>"Retry"</button>
            })}
        </div>
    }
}
