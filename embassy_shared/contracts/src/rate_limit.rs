use std::future::Future;

/// Request budget per client key, counted in fixed windows that start with
/// the first request of a client.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RateLimitService: Send + Sync + 'static {
    /// Records a request for the given key and returns whether it is within
    /// the budget of the current window.
    ///
    /// Rejected requests are not counted.
    fn check(&self, key: &str) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl MockRateLimitService {
    pub fn with_check(mut self, key: String, allowed: bool) -> Self {
        self.expect_check()
            .once()
            .with(mockall::predicate::eq(key))
            .return_once(move |_| Box::pin(std::future::ready(Ok(allowed))));
        self
    }

    pub fn with_check_error(mut self, key: String) -> Self {
        self.expect_check()
            .once()
            .with(mockall::predicate::eq(key))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "rate limit store unavailable"
                ))))
            });
        self
    }
}
